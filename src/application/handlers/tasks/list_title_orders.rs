//! ListTitleOrdersHandler - Query handler for the title order list.

use std::sync::Arc;

use serde_json::Value;

use crate::ports::{TaskTracker, TokenStore};

use super::{require_token, TaskQueryError};

/// Handler returning the raw tasks of the configured title order list.
pub struct ListTitleOrdersHandler {
    tracker: Arc<dyn TaskTracker>,
    token_store: Arc<dyn TokenStore>,
    list_id: String,
}

impl ListTitleOrdersHandler {
    pub fn new(
        tracker: Arc<dyn TaskTracker>,
        token_store: Arc<dyn TokenStore>,
        list_id: impl Into<String>,
    ) -> Self {
        Self {
            tracker,
            token_store,
            list_id: list_id.into(),
        }
    }

    pub async fn handle(&self) -> Result<Value, TaskQueryError> {
        let token = require_token(self.token_store.as_ref()).await?;
        Ok(self.tracker.list_tasks(&token, &self.list_id).await?)
    }
}
