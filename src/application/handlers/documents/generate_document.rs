//! GenerateDocumentHandler - Command handler for generating title order PDFs.
//!
//! Takes a record supplied by the frontend and runs it through the document
//! generator. The resulting artifact is owned by the caller, which deletes
//! it by dropping it once the download completes.

use std::sync::Arc;

use crate::domain::document::DocumentRecord;
use crate::ports::{Artifact, DocumentGenerator, GenerationError};

/// Command to generate a title order document.
#[derive(Debug, Clone)]
pub struct GenerateDocumentCommand {
    pub record: DocumentRecord,
}

/// Result of successful document generation.
#[derive(Debug)]
pub struct GenerateDocumentResult {
    /// The compiled PDF.
    pub artifact: Artifact,
}

/// Error type for document generation.
#[derive(Debug)]
pub enum GenerateDocumentError {
    /// Any failure inside the generation pipeline.
    GenerationFailed(GenerationError),
}

impl std::fmt::Display for GenerateDocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateDocumentError::GenerationFailed(err) => {
                write!(f, "Document generation failed: {}", err)
            }
        }
    }
}

impl std::error::Error for GenerateDocumentError {}

impl From<GenerationError> for GenerateDocumentError {
    fn from(err: GenerationError) -> Self {
        GenerateDocumentError::GenerationFailed(err)
    }
}

/// Handler for generating title order documents.
///
/// # Usage
///
/// ```rust,ignore
/// let handler = GenerateDocumentHandler::new(generator);
/// let result = handler.handle(GenerateDocumentCommand { record }).await?;
/// stream(result.artifact);
/// ```
pub struct GenerateDocumentHandler {
    document_generator: Arc<dyn DocumentGenerator>,
}

impl GenerateDocumentHandler {
    pub fn new(document_generator: Arc<dyn DocumentGenerator>) -> Self {
        Self { document_generator }
    }

    pub async fn handle(
        &self,
        cmd: GenerateDocumentCommand,
    ) -> Result<GenerateDocumentResult, GenerateDocumentError> {
        let artifact = self.document_generator.generate(cmd.record).await?;
        Ok(GenerateDocumentResult { artifact })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
