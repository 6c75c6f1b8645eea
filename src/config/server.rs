//! Listener and request handling settings.
//!
//! `TITLE_DESK__SERVER__*` variables. Every field has a default, so the
//! section may be omitted entirely.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

use super::error::ValidationError;

/// Upper bound for `request_timeout_secs`. A request slower than this is a
/// hung pdflatex run, not a large document.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

/// How the HTTP server binds and how long a request may run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// IP address to bind, e.g. `0.0.0.0` in a container.
    pub host: String,

    pub port: u16,

    /// Selects JSON logs and the HTTPS frontend requirement in production.
    pub environment: Environment,

    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Whole-request timeout. The PDF endpoints compile synchronously, so
    /// this must exceed `document.compile_timeout_secs`.
    pub request_timeout_secs: u64,
}

/// Deployment environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: Environment::default(),
            log_level: "info,title_desk=debug,tower_http=debug".to_string(),
            request_timeout_secs: 120,
        }
    }
}

impl ServerConfig {
    /// Address for the TCP listener.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ValidationError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Checks the listener address and request timeout. The compile timeout
    /// relation is checked by [`super::AppConfig::validate`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr().map(|_| ())
    }
}
