//! Shared application state for the HTTP adapter.

use std::sync::Arc;
use std::time::Duration;

use crate::application::handlers::{
    CompleteAuthorizationHandler, GenerateDocumentHandler, GenerateTaskDocumentHandler,
    GetAccountHandler, ListTitleOrdersHandler,
};
use crate::ports::{DocumentGenerator, TaskTracker, TokenStore};

/// Request-facing settings taken from configuration.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    /// Frontend origin, allowed by CORS and targeted by the OAuth redirect.
    pub frontend_url: String,
    /// ClickUp list holding title orders.
    pub title_order_list_id: String,
    /// File name offered for `POST /api/generate-pdf` downloads.
    pub download_file_name: String,
    /// Time limit for producing a response.
    pub request_timeout: Duration,
}

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<dyn TaskTracker>,
    pub token_store: Arc<dyn TokenStore>,
    pub document_generator: Arc<dyn DocumentGenerator>,
    pub settings: Arc<HttpSettings>,
}

impl AppState {
    pub fn new(
        tracker: Arc<dyn TaskTracker>,
        token_store: Arc<dyn TokenStore>,
        document_generator: Arc<dyn DocumentGenerator>,
        settings: HttpSettings,
    ) -> Self {
        Self {
            tracker,
            token_store,
            document_generator,
            settings: Arc::new(settings),
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn complete_authorization_handler(&self) -> CompleteAuthorizationHandler {
        CompleteAuthorizationHandler::new(self.tracker.clone(), self.token_store.clone())
    }

    pub fn list_title_orders_handler(&self) -> ListTitleOrdersHandler {
        ListTitleOrdersHandler::new(
            self.tracker.clone(),
            self.token_store.clone(),
            self.settings.title_order_list_id.clone(),
        )
    }

    pub fn get_account_handler(&self) -> GetAccountHandler {
        GetAccountHandler::new(self.tracker.clone(), self.token_store.clone())
    }

    pub fn generate_document_handler(&self) -> GenerateDocumentHandler {
        GenerateDocumentHandler::new(self.document_generator.clone())
    }

    pub fn generate_task_document_handler(&self) -> GenerateTaskDocumentHandler {
        GenerateTaskDocumentHandler::new(
            self.tracker.clone(),
            self.token_store.clone(),
            self.document_generator.clone(),
        )
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::adapters::InMemoryTokenStore;
    use crate::application::handlers::test_support::{StubGenerator, StubTracker};
    use crate::ports::AccessToken;

    pub(crate) fn settings() -> HttpSettings {
        HttpSettings {
            frontend_url: "http://localhost:5173".to_string(),
            title_order_list_id: "901".to_string(),
            download_file_name: "TitleOrder.pdf".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }

    /// State over stub ports, optionally already authorized.
    pub(crate) fn state(
        tracker: StubTracker,
        generator: StubGenerator,
        token: Option<&str>,
    ) -> AppState {
        let store = match token {
            Some(token) => InMemoryTokenStore::with_token(AccessToken::new(token)),
            None => InMemoryTokenStore::new(),
        };
        AppState::new(
            Arc::new(tracker),
            Arc::new(store),
            Arc::new(generator),
            settings(),
        )
    }
}
