//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - OAuth token storage
//! - `clickup` - ClickUp REST client
//! - `http` - Axum routes, handlers and DTOs
//! - `latex` - Template rendering and pdflatex compilation

pub mod auth;
pub mod clickup;
pub mod http;
pub mod latex;

pub use auth::InMemoryTokenStore;
pub use clickup::ClickUpClient;
pub use latex::{LatexDocumentGenerator, PdfLatexCompiler};
