//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Bind host is not an IP address: {0}")]
    InvalidHost(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid URL for {0}")]
    InvalidUrl(&'static str),

    #[error("Frontend URL must use HTTPS in production")]
    FrontendMustBeHttps,

    #[error("Invalid compile timeout")]
    InvalidCompileTimeout,

    #[error("Compile timeout must be shorter than the request timeout")]
    CompileTimeoutExceedsRequest,

    #[error("At least one concurrent compile must be allowed")]
    NoCompilePermits,

    #[error("Download file name must be a plain .pdf file name")]
    InvalidDownloadName,
}
