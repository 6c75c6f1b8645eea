//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Document Ports
//!
//! - `DocumentCompiler` - External typesetting of rendered source
//! - `DocumentGenerator` - Record to compiled artifact pipeline
//!
//! ## Task Tracker Ports
//!
//! - `TaskTracker` - ClickUp OAuth exchange and read endpoints
//! - `TokenStore` - Holder for the OAuth access token

mod document_compiler;
mod document_generator;
mod task_tracker;
mod token_store;

pub use document_compiler::{CompileError, DocumentCompiler};
pub use document_generator::{Artifact, DocumentGenerator, GenerationError};
pub use task_tracker::{AccessToken, TaskTracker, TrackerError};
pub use token_store::TokenStore;
