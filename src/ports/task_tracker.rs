//! Task Tracker Port - ClickUp API interface.
//!
//! Covers the OAuth code exchange and the read-only endpoints the title order
//! frontend needs. Everything beyond [`TaskTracker::exchange_code`] and
//! [`TaskTracker::fetch_json`] has a default implementation on top of them.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use thiserror::Error;

use crate::domain::clickup::Task;

/// OAuth access token for the task tracker.
///
/// Debug output is redacted.
#[derive(Debug, Clone)]
pub struct AccessToken(SecretString);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::new(token.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Port for the third-party task tracker.
#[async_trait]
pub trait TaskTracker: Send + Sync {
    /// URL the user is redirected to in order to authorize this app.
    fn authorize_url(&self) -> String;

    /// Exchange an OAuth authorization code for an access token.
    async fn exchange_code(&self, code: &str) -> Result<AccessToken, TrackerError>;

    /// GET a named API endpoint (relative to the API base) as JSON.
    async fn fetch_json(&self, token: &AccessToken, endpoint: &str) -> Result<Value, TrackerError>;

    /// Tasks of a list, as the raw `tasks` array.
    async fn list_tasks(&self, token: &AccessToken, list_id: &str) -> Result<Value, TrackerError> {
        let mut body = self
            .fetch_json(token, &format!("list/{}/task", list_id))
            .await?;
        body.get_mut("tasks")
            .map(Value::take)
            .ok_or_else(|| TrackerError::Decode("response has no 'tasks' array".to_string()))
    }

    /// The authorized user.
    async fn current_user(&self, token: &AccessToken) -> Result<Value, TrackerError> {
        self.fetch_json(token, "user").await
    }

    /// A single task with its custom fields and subtasks.
    async fn get_task(&self, token: &AccessToken, task_id: &str) -> Result<Task, TrackerError> {
        let body = self
            .fetch_json(token, &format!("task/{}?include_subtasks=true", task_id))
            .await?;
        serde_json::from_value(body).map_err(|e| TrackerError::Decode(e.to_string()))
    }
}

/// Errors from the task tracker.
#[derive(Debug, Clone, Error)]
pub enum TrackerError {
    /// The request never got a response.
    #[error("Request to task tracker failed: {0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("Task tracker returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body was not what we expected.
    #[error("Unexpected task tracker response: {0}")]
    Decode(String),
}
