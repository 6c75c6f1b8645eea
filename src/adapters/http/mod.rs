//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own module of handlers and routes; [`app_router`]
//! mounts them under `/api` with the shared middleware stack.

pub mod auth;
pub mod documents;
pub mod download;
pub mod dto;
pub mod health;
pub mod state;
pub mod tasks;

pub use dto::ErrorResponse;
pub use state::{AppState, HttpSettings};

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Routes mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .merge(auth::auth_routes())
        .merge(tasks::task_routes())
        .merge(documents::document_routes())
}

/// Create the complete application router.
///
/// # Example
///
/// ```ignore
/// let app = app_router(AppState::new(tracker, token_store, generator, settings));
/// axum::serve(listener, app).await?;
/// ```
pub fn app_router(state: AppState) -> Router {
    let cors = cors_layer(&state.settings.frontend_url);
    let timeout = TimeoutLayer::new(state.settings.request_timeout);

    Router::new()
        .route("/", get(health::root))
        .nest("/api", api_routes())
        .layer(timeout)
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}

/// CORS restricted to the configured frontend origin.
fn cors_layer(frontend_url: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_DISPOSITION]);

    match HeaderValue::from_str(frontend_url.trim_end_matches('/')) {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            tracing::warn!("Frontend URL {:?} is not a valid origin; CORS disabled", frontend_url);
            layer
        }
    }
}
