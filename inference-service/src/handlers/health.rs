use crate::services::get_metrics;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. Also reports whether real model weights are serving and
/// which device the classifier runs on.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "OK",
        "message": "Inference service is running",
        "model_loaded": state.classifier.is_loaded(),
        "device": state.classifier.device().to_string(),
    }))
}

/// Readiness probe. The service has no external dependencies, so it is
/// ready as soon as it accepts connections.
pub async fn readiness_check() -> StatusCode {
    StatusCode::OK
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
