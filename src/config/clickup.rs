//! ClickUp configuration

use secrecy::SecretString;
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// ClickUp OAuth app and API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClickUpConfig {
    /// OAuth app client ID
    pub client_id: String,

    /// OAuth app client secret
    pub client_secret: SecretString,

    /// Callback URL registered with the OAuth app
    pub redirect_uri: String,

    /// List holding title order tasks
    pub title_order_list_id: String,

    /// Frontend origin; used for CORS and the post-login redirect
    pub frontend_url: String,

    /// REST API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Page the user is sent to for authorization
    #[serde(default = "default_authorize_url")]
    pub authorize_url: String,

    /// Timeout for calls to the ClickUp API in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl ClickUpConfig {
    /// Validate ClickUp configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.client_id.is_empty() {
            return Err(ValidationError::MissingRequired("CLICKUP__CLIENT_ID"));
        }
        if self.redirect_uri.is_empty() {
            return Err(ValidationError::MissingRequired("CLICKUP__REDIRECT_URI"));
        }
        if self.title_order_list_id.is_empty() {
            return Err(ValidationError::MissingRequired("CLICKUP__TITLE_ORDER_LIST_ID"));
        }

        for (name, url) in [
            ("CLICKUP__REDIRECT_URI", &self.redirect_uri),
            ("CLICKUP__FRONTEND_URL", &self.frontend_url),
            ("CLICKUP__API_BASE_URL", &self.api_base_url),
            ("CLICKUP__AUTHORIZE_URL", &self.authorize_url),
        ] {
            if !is_http_url(url) {
                return Err(ValidationError::InvalidUrl(name));
            }
        }

        if *environment == Environment::Production && !self.frontend_url.starts_with("https://") {
            return Err(ValidationError::FrontendMustBeHttps);
        }

        if self.request_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn default_api_base_url() -> String {
    "https://api.clickup.com/api/v2".to_string()
}

fn default_authorize_url() -> String {
    "https://app.clickup.com/api".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

#[cfg(test)]
pub(crate) fn test_config() -> ClickUpConfig {
    ClickUpConfig {
        client_id: "client-123".to_string(),
        client_secret: SecretString::new("secret-456".to_string()),
        redirect_uri: "http://localhost:3000/api/callback".to_string(),
        title_order_list_id: "901".to_string(),
        frontend_url: "http://localhost:5173".to_string(),
        api_base_url: default_api_base_url(),
        authorize_url: default_authorize_url(),
        request_timeout_secs: default_request_timeout(),
    }
}
