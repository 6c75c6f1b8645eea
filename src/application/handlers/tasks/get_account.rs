//! GetAccountHandler - Query handler for the authorized ClickUp user.

use std::sync::Arc;

use serde_json::Value;

use crate::ports::{TaskTracker, TokenStore};

use super::{require_token, TaskQueryError};

/// Handler returning the `user` endpoint as-is.
pub struct GetAccountHandler {
    tracker: Arc<dyn TaskTracker>,
    token_store: Arc<dyn TokenStore>,
}

impl GetAccountHandler {
    pub fn new(tracker: Arc<dyn TaskTracker>, token_store: Arc<dyn TokenStore>) -> Self {
        Self {
            tracker,
            token_store,
        }
    }

    pub async fn handle(&self) -> Result<Value, TaskQueryError> {
        let token = require_token(self.token_store.as_ref()).await?;
        Ok(self.tracker.current_user(&token).await?)
    }
}
