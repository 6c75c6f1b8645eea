//! HTTP handlers for document generation.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::{GenerateDocumentCommand, GenerateDocumentError};
use crate::domain::document::DocumentRecord;
use crate::ports::GenerationError;

use super::super::download::pdf_attachment;
use super::super::dto::ErrorResponse;
use super::super::state::AppState;

/// POST /api/generate-pdf - Generate and download a title order PDF
///
/// The body is a [`DocumentRecord`]; every field is optional.
pub async fn generate_pdf(
    State(state): State<AppState>,
    Json(record): Json<DocumentRecord>,
) -> Result<Response, DocumentApiError> {
    let handler = state.generate_document_handler();
    let result = handler.handle(GenerateDocumentCommand { record }).await?;

    Ok(pdf_attachment(result.artifact, &state.settings.download_file_name).await?)
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error for document generation.
///
/// Carries the internal cause for logging only; clients always receive the
/// same opaque message.
#[derive(Debug)]
pub struct DocumentApiError(String);

impl From<GenerationError> for DocumentApiError {
    fn from(err: GenerationError) -> Self {
        DocumentApiError(err.to_string())
    }
}

impl From<GenerateDocumentError> for DocumentApiError {
    fn from(err: GenerateDocumentError) -> Self {
        DocumentApiError(err.to_string())
    }
}

impl From<std::io::Error> for DocumentApiError {
    fn from(err: std::io::Error) -> Self {
        DocumentApiError(format!("Failed to open artifact: {}", err))
    }
}

impl IntoResponse for DocumentApiError {
    fn into_response(self) -> Response {
        tracing::error!("Error generating PDF: {}", self.0);

        let body = ErrorResponse::new("PDF_GENERATION_FAILED", "Failed to generate PDF");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
