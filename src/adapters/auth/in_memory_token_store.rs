//! In-Memory Token Store Adapter
//!
//! Keeps the single ClickUp access token for the lifetime of the process.
//! Nothing is persisted; a restart requires re-authorizing.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::ports::{AccessToken, TokenStore};

/// In-memory holder for one access token.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenStore {
    token: Arc<RwLock<Option<AccessToken>>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that is already authorized (useful for tests)
    pub fn with_token(token: AccessToken) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token))),
        }
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn store(&self, token: AccessToken) {
        *self.token.write().await = Some(token);
        tracing::info!("Stored task tracker access token");
    }

    async fn current(&self) -> Option<AccessToken> {
        self.token.read().await.clone()
    }

    async fn clear(&self) {
        self.token.write().await.take();
    }
}
