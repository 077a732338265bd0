// JSON API handlers.
//
// Both endpoints take the same `{"text": ...}` body; `read_text` holds the
// shared payload rules.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde_json::Value;

use crate::web::api_error;

pub mod tag;
pub mod trends;

/// Unwrap the JSON extractor result and coerce its `text` field to a string.
///
/// The body must be a JSON object. A missing or `null` `text` means empty
/// text; scalars are coerced (`42` becomes "42"); arrays and objects are
/// rejected with 422. Malformed bodies keep the extractor's own status (400,
/// 413, 415 or 422) but get a JSON error body.
pub fn read_text(body: Result<Json<Value>, JsonRejection>) -> Result<String, Response> {
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        api_error(rejection.status(), &rejection.body_text())
    })?;

    let Value::Object(mut fields) = body else {
        return Err(api_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Request body must be a JSON object",
        ));
    };

    match fields.remove("text").unwrap_or(Value::Null) {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Array(_) | Value::Object(_) => Err(api_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "\"text\" must be a string",
        )),
    }
}
