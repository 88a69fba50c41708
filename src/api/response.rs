// The `{error, message?, data?}` envelope every route answers with.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// API response wrapper
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub error: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            error: false,
            message: None,
            data: Some(data),
        }
    }
}

impl Envelope<Vec<serde_json::Value>> {
    /// Empty result: not an error, but carries an empty `data` array
    pub fn not_found(message: String) -> Self {
        Self {
            error: false,
            message: Some(message),
            data: Some(Vec::new()),
        }
    }
}

impl Envelope<()> {
    pub fn failure(message: String) -> Self {
        Self {
            error: true,
            message: Some(message),
            data: None,
        }
    }
}

/// 200 with the rows (or single row) found
pub fn found<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(Envelope::ok(data))).into_response()
}
