use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::response::Envelope;
use super::AppState;

/// GET /health - store reachable?
pub async fn health_check(State(state): State<AppState>) -> Response {
    let store = state.store;

    let outcome = tokio::task::spawn_blocking(move || store.ping())
        .await
        .map_err(|e| e.to_string())
        .and_then(|ping| ping.map_err(|e| e.to_string()));

    match outcome {
        Ok(()) => (
            StatusCode::OK,
            Json(Envelope::ok(serde_json::json!({ "status": "ok" }))),
        )
            .into_response(),
        Err(message) => {
            tracing::warn!(%message, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Envelope::failure(message)),
            )
                .into_response()
        }
    }
}
