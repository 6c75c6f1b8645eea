//! HTTP adapter for document generation.
//!
//! - `POST /api/generate-pdf` - Render a posted record and stream the PDF

pub mod handlers;
pub mod routes;

pub use handlers::DocumentApiError;
pub use routes::document_routes;
