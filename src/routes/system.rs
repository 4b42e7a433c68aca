// routes/system.rs - GET / and GET /health
use axum::{extract::State, http::StatusCode};
use serde_json::{json, Value};

use crate::api::Envelope;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET / - API info
pub async fn root() -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "name": "Asana Replica API",
        "version": env!("CARGO_PKG_VERSION"),
        "resources": [
            "/workspaces", "/projects", "/tasks", "/users", "/teams", "/tags",
            "/sections", "/goals", "/stories", "/workspace-memberships", "/team-memberships"
        ]
    }))
}

/// GET /health - store check; 503 when the store does not answer
pub async fn health(State(state): State<AppState>) -> ApiResult<Value> {
    let backend = state.store.backend_name();

    match state.store.health_check().await {
        Ok(()) => Ok(ApiResponse::enveloped(
            Envelope::new(json!({
                "status": "ok",
                "store": backend,
                "timestamp": chrono::Utc::now(),
            })),
            StatusCode::OK,
        )),
        Err(e) => {
            tracing::error!("Health check failed for {} store: {}", backend, e);
            Err(ApiError::service_unavailable(format!("{} store unavailable", backend)))
        }
    }
}
