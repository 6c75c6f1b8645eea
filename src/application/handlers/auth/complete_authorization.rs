//! CompleteAuthorizationHandler - Command handler for the OAuth callback.
//!
//! Exchanges the authorization code returned by ClickUp for an access token
//! and stores it for subsequent task requests.

use std::sync::Arc;

use crate::ports::{TaskTracker, TokenStore, TrackerError};

/// Command carrying the callback's authorization code.
#[derive(Debug, Clone)]
pub struct CompleteAuthorizationCommand {
    pub code: String,
}

/// Error type for completing authorization.
#[derive(Debug, Clone)]
pub enum CompleteAuthorizationError {
    /// The callback carried no code.
    MissingCode,
    /// ClickUp refused or failed the exchange.
    Exchange(TrackerError),
}

impl std::fmt::Display for CompleteAuthorizationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompleteAuthorizationError::MissingCode => write!(f, "Authorization code is missing"),
            CompleteAuthorizationError::Exchange(err) => write!(f, "Token exchange failed: {}", err),
        }
    }
}

impl std::error::Error for CompleteAuthorizationError {}

/// Handler for the OAuth callback.
///
/// # Dependencies
///
/// - `TaskTracker`: Exchange the code for a token
/// - `TokenStore`: Keep the token for later requests
pub struct CompleteAuthorizationHandler {
    tracker: Arc<dyn TaskTracker>,
    token_store: Arc<dyn TokenStore>,
}

impl CompleteAuthorizationHandler {
    pub fn new(tracker: Arc<dyn TaskTracker>, token_store: Arc<dyn TokenStore>) -> Self {
        Self {
            tracker,
            token_store,
        }
    }

    pub async fn handle(
        &self,
        cmd: CompleteAuthorizationCommand,
    ) -> Result<(), CompleteAuthorizationError> {
        let code = cmd.code.trim();
        if code.is_empty() {
            return Err(CompleteAuthorizationError::MissingCode);
        }

        let token = self
            .tracker
            .exchange_code(code)
            .await
            .map_err(CompleteAuthorizationError::Exchange)?;

        self.token_store.store(token).await;
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
