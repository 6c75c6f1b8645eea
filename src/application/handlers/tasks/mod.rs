//! Task query and document handlers.
//!
//! Every handler here needs the access token obtained through the OAuth
//! callback and fails with [`TaskQueryError::NotAuthenticated`] without it.

mod generate_task_document;
mod get_account;
mod list_title_orders;

pub use generate_task_document::{
    GenerateTaskDocumentCommand, GenerateTaskDocumentError, GenerateTaskDocumentHandler,
};
pub use get_account::GetAccountHandler;
pub use list_title_orders::ListTitleOrdersHandler;

use crate::ports::{AccessToken, TokenStore, TrackerError};

/// Error type shared by the task queries.
#[derive(Debug, Clone)]
pub enum TaskQueryError {
    /// No OAuth flow has completed yet.
    NotAuthenticated,
    /// ClickUp failed the request.
    Upstream(TrackerError),
}

impl std::fmt::Display for TaskQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskQueryError::NotAuthenticated => write!(f, "Not authenticated"),
            TaskQueryError::Upstream(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for TaskQueryError {}

impl From<TrackerError> for TaskQueryError {
    fn from(err: TrackerError) -> Self {
        TaskQueryError::Upstream(err)
    }
}

async fn require_token(token_store: &dyn TokenStore) -> Result<AccessToken, TaskQueryError> {
    token_store
        .current()
        .await
        .ok_or(TaskQueryError::NotAuthenticated)
}
