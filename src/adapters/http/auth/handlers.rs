//! HTTP handlers for the ClickUp OAuth flow.

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect};
use serde::Deserialize;

use crate::application::handlers::{CompleteAuthorizationCommand, CompleteAuthorizationError};

use super::super::dto::ErrorResponse;
use super::super::state::AppState;

/// Query parameters ClickUp appends to the callback URL.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
}

/// GET /api/auth - Send the user to ClickUp's authorization page
pub async fn start_authorization(State(state): State<AppState>) -> Redirect {
    Redirect::to(&state.tracker.authorize_url())
}

/// GET /api/callback - Exchange the code and return to the frontend
pub async fn oauth_callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<Redirect, AuthApiError> {
    let handler = state.complete_authorization_handler();
    let cmd = CompleteAuthorizationCommand {
        code: params.code.unwrap_or_default(),
    };

    handler.handle(cmd).await?;

    tracing::info!("ClickUp authorization completed");
    Ok(Redirect::to(&format!(
        "{}?auth=success",
        state.settings.frontend_url
    )))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper for the OAuth endpoints.
pub struct AuthApiError(CompleteAuthorizationError);

impl From<CompleteAuthorizationError> for AuthApiError {
    fn from(err: CompleteAuthorizationError) -> Self {
        AuthApiError(err)
    }
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code, message) = match &self.0 {
            CompleteAuthorizationError::MissingCode => (
                StatusCode::BAD_REQUEST,
                "MISSING_CODE",
                "Authorization code is missing",
            ),
            CompleteAuthorizationError::Exchange(err) => {
                tracing::error!("Token exchange error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "OAUTH_ERROR", "OAuth Error")
            }
        };

        (status, Json(ErrorResponse::new(error_code, message))).into_response()
    }
}
