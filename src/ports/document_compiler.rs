//! Document Compiler Port - external typesetting interface.
//!
//! This port defines the contract for turning rendered document source into
//! a compiled binary artifact. Adapters (like `PdfLatexCompiler`) wrap an
//! external compiler process.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Port for compiling rendered document source.
///
/// # Contract
///
/// Implementations must:
/// - Write the source into `workspace` and compile it there
/// - Judge success by the compiled artifact existing, not by exit status
/// - Bound the time spent waiting on any external process
/// - Report every file they may leave behind through [`byproducts`]
///
/// [`byproducts`]: DocumentCompiler::byproducts
#[async_trait]
pub trait DocumentCompiler: Send + Sync {
    /// Compile `source` inside `workspace`.
    ///
    /// Returns the path of the compiled artifact, which lives inside
    /// `workspace`.
    async fn compile(&self, source: &str, workspace: &Path) -> Result<PathBuf, CompileError>;

    /// File names (relative to the workspace) the compiler may leave behind,
    /// including its input and output files.
    fn byproducts(&self) -> &'static [&'static str];

    /// Check if the external compiler is installed and runnable.
    async fn is_available(&self) -> bool;
}

/// Errors that can occur while compiling.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The rendered source could not be staged.
    #[error("Failed to stage source {path}: {source}")]
    Staging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The compiler process could not be started or awaited.
    #[error("Failed to run {program}: {source}")]
    Process {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The compiler did not finish in time and was killed.
    #[error("Compilation timed out after {0} seconds")]
    Timeout(u64),

    /// The compiler finished but produced no artifact.
    #[error("Compiler exited with {status} but produced no output at {expected}")]
    MissingOutput { status: String, expected: PathBuf },
}
