//! GenerateTaskDocumentHandler - Command handler for PDFs built from tasks.
//!
//! Fetches a title order task with its subtasks, assembles the document
//! record from its custom fields and generates the PDF.

use std::sync::Arc;

use crate::domain::clickup::{assemble_record, Task};
use crate::ports::{Artifact, DocumentGenerator, GenerationError, TaskTracker, TokenStore};

use super::{require_token, TaskQueryError};

/// Command to generate the document for one task.
#[derive(Debug, Clone)]
pub struct GenerateTaskDocumentCommand {
    pub task_id: String,
}

/// Error type for task document generation.
#[derive(Debug)]
pub enum GenerateTaskDocumentError {
    /// The id is not a plain ClickUp task id.
    InvalidTaskId(String),
    /// The task could not be fetched.
    Query(TaskQueryError),
    /// The pipeline failed.
    GenerationFailed(GenerationError),
}

impl std::fmt::Display for GenerateTaskDocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateTaskDocumentError::InvalidTaskId(id) => write!(f, "Invalid task id: {:?}", id),
            GenerateTaskDocumentError::Query(err) => write!(f, "{}", err),
            GenerateTaskDocumentError::GenerationFailed(err) => {
                write!(f, "Document generation failed: {}", err)
            }
        }
    }
}

impl std::error::Error for GenerateTaskDocumentError {}

impl From<TaskQueryError> for GenerateTaskDocumentError {
    fn from(err: TaskQueryError) -> Self {
        GenerateTaskDocumentError::Query(err)
    }
}

impl From<GenerationError> for GenerateTaskDocumentError {
    fn from(err: GenerationError) -> Self {
        GenerateTaskDocumentError::GenerationFailed(err)
    }
}

/// Handler for generating a task's title order document.
///
/// # Dependencies
///
/// - `TaskTracker`: Fetch the task and its subtasks
/// - `TokenStore`: Token for the fetch
/// - `DocumentGenerator`: Produce the PDF
pub struct GenerateTaskDocumentHandler {
    tracker: Arc<dyn TaskTracker>,
    token_store: Arc<dyn TokenStore>,
    document_generator: Arc<dyn DocumentGenerator>,
}

impl GenerateTaskDocumentHandler {
    pub fn new(
        tracker: Arc<dyn TaskTracker>,
        token_store: Arc<dyn TokenStore>,
        document_generator: Arc<dyn DocumentGenerator>,
    ) -> Self {
        Self {
            tracker,
            token_store,
            document_generator,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateTaskDocumentCommand,
    ) -> Result<Artifact, GenerateTaskDocumentError> {
        if !Task::is_valid_id(&cmd.task_id) {
            return Err(GenerateTaskDocumentError::InvalidTaskId(cmd.task_id));
        }

        let token = require_token(self.token_store.as_ref()).await?;

        let task = self
            .tracker
            .get_task(&token, &cmd.task_id)
            .await
            .map_err(TaskQueryError::from)?;

        tracing::debug!(
            task_id = %cmd.task_id,
            fields = task.custom_fields.len(),
            subtasks = task.subtasks.len(),
            "Assembling document record"
        );

        let record = assemble_record(&task);
        Ok(self.document_generator.generate(record).await?)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
