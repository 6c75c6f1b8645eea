//! Axum router configuration for document endpoints.

use axum::{routing::post, Router};

use super::super::state::AppState;
use super::handlers::generate_pdf;

/// Create the document router.
///
/// # Routes
/// - `POST /generate-pdf` - Generate a PDF from a posted record
pub fn document_routes() -> Router<AppState> {
    Router::new().route("/generate-pdf", post(generate_pdf))
}
