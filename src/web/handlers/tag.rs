// POST /api/tag — extract catalog attributes from a product description.
//
// Always answers 200 with a full tag set for a well-formed body; text that
// matches nothing yields the default attributes.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use super::read_text;
use crate::web::AppState;

pub async fn tag_text(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let text = match read_text(body) {
        Ok(text) => text,
        Err(response) => return response,
    };

    Json(state.tagger.tag(&text)).into_response()
}
