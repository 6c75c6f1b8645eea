//! ClickUp REST adapter.
//!
//! Implements the `TaskTracker` port against the ClickUp v2 API:
//!
//! 1. Builds the authorization page URL for the OAuth redirect
//! 2. Exchanges callback codes at `/oauth/token`
//! 3. Performs authorized GETs for the read endpoints
//!
//! ClickUp expects the raw token in the `Authorization` header, without a
//! `Bearer` scheme.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Response, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ClickUpConfig;
use crate::ports::{AccessToken, TaskTracker, TrackerError};

/// Longest upstream error body kept in a `TrackerError::Api` message.
const MAX_ERROR_BODY: usize = 512;

/// Token exchange request body.
#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
}

/// Token exchange response body.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// HTTP client for the ClickUp API.
pub struct ClickUpClient {
    http_client: reqwest::Client,
    api_base_url: String,
    authorize_url: String,
    client_id: String,
    client_secret: SecretString,
    redirect_uri: String,
}

impl ClickUpClient {
    /// Create a client from configuration.
    pub fn new(config: &ClickUpConfig) -> Result<Self, TrackerError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| TrackerError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            authorize_url: config.authorize_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
        })
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.api_base_url, endpoint.trim_start_matches('/'))
    }

    /// Turn a non-success response into `TrackerError::Api`.
    async fn check_status(response: Response) -> Result<Response, TrackerError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let mut message = response.text().await.unwrap_or_default();
        if message.len() > MAX_ERROR_BODY {
            let mut end = MAX_ERROR_BODY;
            while !message.is_char_boundary(end) {
                end -= 1;
            }
            message.truncate(end);
        }

        tracing::error!("ClickUp returned {}: {}", status, message);
        Err(TrackerError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl TaskTracker for ClickUpClient {
    fn authorize_url(&self) -> String {
        match Url::parse_with_params(
            &self.authorize_url,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
            ],
        ) {
            Ok(url) => url.into(),
            // Validated at startup; fall back to plain concatenation.
            Err(_) => format!(
                "{}?client_id={}&redirect_uri={}",
                self.authorize_url, self.client_id, self.redirect_uri
            ),
        }
    }

    async fn exchange_code(&self, code: &str) -> Result<AccessToken, TrackerError> {
        let url = self.endpoint_url("oauth/token");

        tracing::debug!("Exchanging authorization code at {}", url);

        let response = self
            .http_client
            .post(&url)
            .json(&TokenRequest {
                client_id: &self.client_id,
                client_secret: self.client_secret.expose_secret(),
                code,
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Token exchange request failed: {}", e);
                TrackerError::Transport(e.to_string())
            })?;

        let body: TokenResponse = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| {
                tracing::error!("Failed to parse token response: {}", e);
                TrackerError::Decode(format!("Failed to parse token response: {}", e))
            })?;

        Ok(AccessToken::new(body.access_token))
    }

    async fn fetch_json(&self, token: &AccessToken, endpoint: &str) -> Result<Value, TrackerError> {
        let url = self.endpoint_url(endpoint);

        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(AUTHORIZATION, token.expose())
            .send()
            .await
            .map_err(|e| {
                tracing::error!("ClickUp request to {} failed: {}", endpoint, e);
                TrackerError::Transport(e.to_string())
            })?;

        Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| TrackerError::Decode(e.to_string()))
    }
}
