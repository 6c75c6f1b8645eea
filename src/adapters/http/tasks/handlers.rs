//! HTTP handlers for ClickUp task endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::{
    GenerateTaskDocumentCommand, GenerateTaskDocumentError, TaskQueryError,
};

use super::super::documents::handlers::DocumentApiError;
use super::super::download::pdf_attachment;
use super::super::dto::ErrorResponse;
use super::super::state::AppState;

/// GET /api/titleorder/tasks - Tasks of the title order list
pub async fn list_title_orders(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, TasksApiError> {
    let tasks = state.list_title_orders_handler().handle().await?;
    Ok(Json(tasks))
}

/// GET /api/data - The authorized ClickUp user
pub async fn get_account(State(state): State<AppState>) -> Result<impl IntoResponse, TasksApiError> {
    let user = state.get_account_handler().handle().await?;
    Ok(Json(user))
}

/// GET /api/titleorder/tasks/:task_id/pdf - Title order PDF for a task
pub async fn task_pdf(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Response, Response> {
    let handler = state.generate_task_document_handler();
    let cmd = GenerateTaskDocumentCommand { task_id };

    let artifact = handler.handle(cmd).await.map_err(|err| match err {
        GenerateTaskDocumentError::InvalidTaskId(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("INVALID_TASK_ID", "Invalid task id")),
        )
            .into_response(),
        GenerateTaskDocumentError::Query(err) => TasksApiError(err).into_response(),
        GenerateTaskDocumentError::GenerationFailed(err) => {
            DocumentApiError::from(err).into_response()
        }
    })?;

    let file_name = artifact.file_name().to_string();
    pdf_attachment(artifact, &file_name)
        .await
        .map_err(|err| DocumentApiError::from(err).into_response())
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper for task queries.
pub struct TasksApiError(pub TaskQueryError);

impl From<TaskQueryError> for TasksApiError {
    fn from(err: TaskQueryError) -> Self {
        TasksApiError(err)
    }
}

impl IntoResponse for TasksApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self.0 {
            TaskQueryError::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                "NOT_AUTHENTICATED",
                "Not authenticated",
            ),
            // Upstream failures map to 502, not 500.
            TaskQueryError::Upstream(err) => {
                tracing::error!("ClickUp API error: {}", err);
                (StatusCode::BAD_GATEWAY, "API_ERROR", "API Error")
            }
        };

        (status, Json(ErrorResponse::new(error_code, message))).into_response()
    }
}
