// POST /api/trends — rank the trending keywords of a text corpus.
//
// Returns a JSON array of at most five entries, highest score first. An
// empty or stop-word-only corpus yields `[]`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use super::read_text;
use crate::web::AppState;

pub async fn analyze_trends(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let corpus = match read_text(body) {
        Ok(text) => text,
        Err(response) => return response,
    };

    Json(state.trends.analyze(&corpus)).into_response()
}
