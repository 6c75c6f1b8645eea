//! pdflatex compiler adapter.
//!
//! Implements the `DocumentCompiler` port by running `pdflatex` as an
//! external process inside the invocation workspace.
//!
//! # Success criterion
//!
//! pdflatex frequently exits non-zero for recoverable problems (overfull
//! boxes, missing fonts substituted, ...) while still writing a usable PDF.
//! The produced file is therefore the source of truth: a non-zero exit with
//! `output.pdf` present is logged and treated as success, and a clean exit
//! without it is a failure.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::ports::{CompileError, DocumentCompiler};

/// Name the rendered source is staged under.
pub const SOURCE_FILE: &str = "output.tex";

/// Name pdflatex writes the compiled document to.
pub const OUTPUT_FILE: &str = "output.pdf";

/// Everything a pdflatex run on [`SOURCE_FILE`] may leave in the workspace.
const BYPRODUCTS: &[&str] = &[
    "output.aux",
    "output.log",
    OUTPUT_FILE,
    SOURCE_FILE,
    "texput.log",
];

/// Lines of compiler output kept when logging a failed run.
const LOG_TAIL_LINES: usize = 20;

/// Compiler adapter running pdflatex.
///
/// # Example
///
/// ```rust,ignore
/// let compiler = PdfLatexCompiler::new().with_timeout(30);
/// let pdf = compiler.compile(&source, workspace.path()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PdfLatexCompiler {
    /// Executable to run. Defaults to `pdflatex` on PATH.
    program: String,

    /// Arguments placed before the pdflatex arguments.
    leading_args: Vec<String>,

    /// Timeout for a single compilation in seconds.
    timeout_secs: u64,
}

impl PdfLatexCompiler {
    /// Create a compiler with default settings.
    pub fn new() -> Self {
        Self {
            program: "pdflatex".to_string(),
            leading_args: Vec::new(),
            timeout_secs: 60,
        }
    }

    /// Set a custom path to the compiler executable.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Prepend arguments, e.g. when the compiler is run through a wrapper.
    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the compilation timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.leading_args);
        command
    }
}

impl Default for PdfLatexCompiler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentCompiler for PdfLatexCompiler {
    async fn compile(&self, source: &str, workspace: &Path) -> Result<PathBuf, CompileError> {
        let source_path = workspace.join(SOURCE_FILE);
        let expected = workspace.join(OUTPUT_FILE);

        tokio::fs::write(&source_path, source)
            .await
            .map_err(|e| CompileError::Staging {
                path: source_path.clone(),
                source: e,
            })?;

        tracing::debug!("Running {} on {}", self.program, source_path.display());

        let child = self
            .command()
            .arg("-interaction=nonstopmode")
            .arg(format!("-output-directory={}", workspace.display()))
            .arg(&source_path)
            .current_dir(workspace)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| CompileError::Process {
                program: self.program.clone(),
                source: e,
            })?;

        // Dropping the future on timeout drops the child, which kills it.
        let output = tokio::time::timeout(
            Duration::from_secs(self.timeout_secs),
            child.wait_with_output(),
        )
        .await
        .map_err(|_| {
            tracing::error!(
                "{} did not finish within {}s and was killed",
                self.program,
                self.timeout_secs
            );
            CompileError::Timeout(self.timeout_secs)
        })?
        .map_err(|e| CompileError::Process {
            program: self.program.clone(),
            source: e,
        })?;

        let produced = tokio::fs::try_exists(&expected).await.unwrap_or(false);
        if !produced {
            tracing::error!(
                status = %output.status,
                "{} produced no output:\n{}",
                self.program,
                log_tail(&output.stdout)
            );
            return Err(CompileError::MissingOutput {
                status: output.status.to_string(),
                expected,
            });
        }

        if !output.status.success() {
            tracing::warn!(
                status = %output.status,
                "{} reported errors but produced output",
                self.program
            );
        }

        Ok(expected)
    }

    fn byproducts(&self) -> &'static [&'static str] {
        BYPRODUCTS
    }

    async fn is_available(&self) -> bool {
        let output = self
            .command()
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await;

        output.map(|o| o.status.success()).unwrap_or(false)
    }
}

/// Last lines of compiler output, where pdflatex reports the fatal error.
fn log_tail(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(LOG_TAIL_LINES);
    lines[start..].join("\n")
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::adapters::latex::test_support::stub_compiler;
    use tempfile::TempDir;

    // ───────────────────────────────────────────────────────────────
    // Builder tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn builder_sets_program_and_timeout() {
        let compiler = PdfLatexCompiler::new()
            .with_program("/usr/local/texlive/bin/pdflatex")
            .with_timeout(5);

        assert_eq!(compiler.program(), "/usr/local/texlive/bin/pdflatex");
        assert_eq!(compiler.timeout_secs, 5);
    }

    #[test]
    fn byproducts_cover_staged_source_and_output() {
        let compiler = PdfLatexCompiler::new();
        assert!(compiler.byproducts().contains(&SOURCE_FILE));
        assert!(compiler.byproducts().contains(&OUTPUT_FILE));
        assert!(compiler.byproducts().contains(&"texput.log"));
    }

    #[test]
    fn log_tail_keeps_last_lines() {
        let log: String = (0..30).map(|i| format!("line {}\n", i)).collect();
        let tail = log_tail(log.as_bytes());
        assert!(tail.starts_with("line 10"));
        assert!(tail.ends_with("line 29"));
    }

    // ───────────────────────────────────────────────────────────────
    // Process tests (stub compiler scripts)
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn compile_writes_source_and_returns_output() {
        let tools = TempDir::new().unwrap();
        let workspace = TempDir::new().unwrap();
        let compiler = stub_compiler(tools.path(), "write_pdf\nexit 0");

        let pdf = compiler
            .compile(r"\documentclass{article}", workspace.path())
            .await
            .unwrap();

        assert_eq!(pdf, workspace.path().join(OUTPUT_FILE));
        let staged = std::fs::read_to_string(workspace.path().join(SOURCE_FILE)).unwrap();
        assert_eq!(staged, r"\documentclass{article}");
    }

    #[tokio::test]
    async fn nonzero_exit_with_output_is_success() {
        let tools = TempDir::new().unwrap();
        let workspace = TempDir::new().unwrap();
        let compiler = stub_compiler(tools.path(), "write_pdf\nexit 1");

        let result = compiler.compile("x", workspace.path()).await;

        assert!(result.is_ok(), "expected tolerant success: {:?}", result.err());
    }

    #[tokio::test]
    async fn clean_exit_without_output_is_failure() {
        let tools = TempDir::new().unwrap();
        let workspace = TempDir::new().unwrap();
        let compiler = stub_compiler(tools.path(), "exit 0");

        let err = compiler.compile("x", workspace.path()).await.unwrap_err();

        assert!(matches!(err, CompileError::MissingOutput { .. }));
    }

    #[tokio::test]
    async fn slow_compiler_times_out() {
        let tools = TempDir::new().unwrap();
        let workspace = TempDir::new().unwrap();
        let compiler = stub_compiler(tools.path(), "sleep 5\nwrite_pdf").with_timeout(1);

        let err = compiler.compile("x", workspace.path()).await.unwrap_err();

        assert!(matches!(err, CompileError::Timeout(1)));
        assert!(!workspace.path().join(OUTPUT_FILE).exists());
    }

    #[tokio::test]
    async fn missing_program_is_process_error() {
        let workspace = TempDir::new().unwrap();
        let compiler = PdfLatexCompiler::new().with_program("/nonexistent/pdflatex");

        let err = compiler.compile("x", workspace.path()).await.unwrap_err();

        assert!(matches!(err, CompileError::Process { .. }));
    }

    #[tokio::test]
    async fn is_available_false_for_missing_program() {
        let compiler = PdfLatexCompiler::new().with_program("/nonexistent/pdflatex");
        assert!(!compiler.is_available().await);
    }

    #[tokio::test]
    async fn is_available_true_for_stub() {
        let tools = TempDir::new().unwrap();
        let compiler = stub_compiler(tools.path(), "exit 0");
        assert!(compiler.is_available().await);
    }
}
