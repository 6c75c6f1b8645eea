//! Document Generator Port - record to PDF pipeline interface.
//!
//! This port defines the contract for turning a [`DocumentRecord`] into a
//! compiled [`Artifact`]. The HTTP layer depends on this trait, while the
//! LaTeX adapter provides the implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::TempDir;
use thiserror::Error;

use crate::domain::document::{DocumentRecord, TemplateError};

use super::CompileError;

/// Port for generating documents from title order records.
///
/// # Contract
///
/// Implementations must:
/// - Default a missing order date before rendering
/// - Keep each invocation's staging files isolated from every other
/// - Remove intermediate files whether or not generation succeeds
/// - Never return a partially written artifact
#[async_trait]
pub trait DocumentGenerator: Send + Sync {
    /// Render, compile and relocate the document for `record`.
    async fn generate(&self, record: DocumentRecord) -> Result<Artifact, GenerationError>;

    /// Check if generation can currently succeed (compiler installed).
    async fn is_available(&self) -> bool;
}

/// A compiled document owned by whoever holds this value.
///
/// The artifact lives in its own workspace directory. Dropping the artifact
/// removes both the file and the directory; [`Artifact::discard`] does the
/// same with error reporting.
#[derive(Debug)]
pub struct Artifact {
    path: PathBuf,
    workspace: TempDir,
}

impl Artifact {
    /// Take ownership of `path` inside `workspace`.
    pub fn new(path: PathBuf, workspace: TempDir) -> Self {
        Self { path, workspace }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The artifact's file name, e.g. `Smith_Estate_42_10-16-2026.pdf`.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    /// Delete the artifact and its workspace.
    pub async fn discard(self) {
        let Artifact { path, workspace } = self;

        if let Err(e) = tokio::fs::remove_file(&path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to delete artifact {}: {}", path.display(), e);
            }
        }
        let dir = workspace.path().to_path_buf();
        if let Err(e) = workspace.close() {
            tracing::warn!("Failed to remove workspace {}: {}", dir.display(), e);
        }
    }
}

/// Errors that can occur during document generation.
///
/// These carry internal detail (paths, process status) for server-side
/// logging; callers outside the service only ever see an opaque failure.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The template file is missing or unreadable.
    #[error("Failed to load template {path}: {source}")]
    TemplateLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template references placeholders incorrectly.
    #[error("Invalid template: {0}")]
    Template(#[from] TemplateError),

    /// The per-invocation workspace could not be created.
    #[error("Failed to create workspace: {0}")]
    Workspace(#[source] std::io::Error),

    /// Compilation did not produce an artifact.
    #[error("Compilation failed: {0}")]
    Compile(#[from] CompileError),

    /// The compiled artifact could not be moved to its final name.
    #[error("Failed to relocate artifact to {path}: {reason}")]
    Relocation { path: PathBuf, reason: String },

    /// The generator is shutting down.
    #[error("Document generator unavailable")]
    Unavailable,
}
