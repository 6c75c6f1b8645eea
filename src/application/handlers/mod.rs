//! Application handlers.
//!
//! Command and query handlers that orchestrate ports on behalf of the HTTP
//! adapter.

pub mod auth;
pub mod documents;
pub mod tasks;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{
    CompleteAuthorizationCommand, CompleteAuthorizationError, CompleteAuthorizationHandler,
};
pub use documents::{
    GenerateDocumentCommand, GenerateDocumentError, GenerateDocumentHandler,
    GenerateDocumentResult,
};
pub use tasks::{
    GenerateTaskDocumentCommand, GenerateTaskDocumentError, GenerateTaskDocumentHandler,
    GetAccountHandler, ListTitleOrdersHandler, TaskQueryError,
};
