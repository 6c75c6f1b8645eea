//! Liveness and readiness handlers.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use super::super::state::AppState;

/// Readiness report.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub compiler_available: bool,
    pub authenticated: bool,
}

/// GET / - Plain liveness message
pub async fn root() -> &'static str {
    "Backend server is running!"
}

/// GET /api/health - Readiness, degraded when the compiler is missing
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let compiler_available = state.document_generator.is_available().await;
    let authenticated = state.token_store.current().await.is_some();

    let (status, label) = if compiler_available {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status,
        Json(HealthResponse {
            status: label,
            compiler_available,
            authenticated,
        }),
    )
}
