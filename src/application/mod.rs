//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    CompleteAuthorizationCommand, CompleteAuthorizationError, CompleteAuthorizationHandler,
    GenerateDocumentCommand, GenerateDocumentError, GenerateDocumentHandler,
    GenerateDocumentResult, GenerateTaskDocumentCommand, GenerateTaskDocumentError,
    GenerateTaskDocumentHandler, GetAccountHandler, ListTitleOrdersHandler, TaskQueryError,
};
