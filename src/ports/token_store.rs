//! Token Store Port - holds the task tracker credential.
//!
//! The store is injected into application state rather than kept in a
//! module-level variable, so each server instance (and each test) owns its
//! own credential.

use async_trait::async_trait;

use super::AccessToken;

/// Port for storing the OAuth access token obtained from the callback.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Replace the stored token.
    async fn store(&self, token: AccessToken);

    /// The stored token, if the OAuth flow has completed.
    async fn current(&self) -> Option<AccessToken>;

    /// Forget the stored token.
    async fn clear(&self);
}
