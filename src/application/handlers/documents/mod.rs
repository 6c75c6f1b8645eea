//! Document command handlers.

mod generate_document;

pub use generate_document::{
    GenerateDocumentCommand, GenerateDocumentError, GenerateDocumentHandler,
    GenerateDocumentResult,
};
