//! LaTeX adapters - PDF generation from the title order template.
//!
//! - `PdfLatexCompiler` - Runs pdflatex on rendered source
//! - `RenderWorkspace` - Per-invocation staging directory and cleanup
//! - `LatexDocumentGenerator` - The full record to PDF pipeline

mod generator;
mod pdflatex_compiler;
mod workspace;

#[cfg(all(test, unix))]
pub(crate) mod test_support;

pub use generator::{LatexDocumentGenerator, DEFAULT_MAX_CONCURRENT};
pub use pdflatex_compiler::{PdfLatexCompiler, OUTPUT_FILE, SOURCE_FILE};
pub use workspace::RenderWorkspace;
