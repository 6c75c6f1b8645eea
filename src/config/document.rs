//! Document generation configuration

use std::path::PathBuf;

use serde::Deserialize;

use super::error::ValidationError;

/// PDF generation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    /// LaTeX template with the title order placeholders
    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,

    /// Directory per-request workspaces are created under.
    /// Defaults to a `title-desk` directory in the system temp dir.
    pub staging_dir: Option<PathBuf>,

    /// pdflatex executable
    #[serde(default = "default_compiler_path")]
    pub compiler_path: String,

    /// Maximum time a single compile may take in seconds
    #[serde(default = "default_compile_timeout")]
    pub compile_timeout_secs: u64,

    /// Maximum number of pdflatex processes at once
    #[serde(default = "default_max_concurrent_compiles")]
    pub max_concurrent_compiles: usize,

    /// File name offered to the browser for downloads
    #[serde(default = "default_download_file_name")]
    pub download_file_name: String,
}

impl DocumentConfig {
    /// Resolved staging root
    pub fn staging_root(&self) -> PathBuf {
        self.staging_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("title-desk"))
    }

    /// Validate document configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.template_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("DOCUMENT__TEMPLATE_PATH"));
        }
        if self.compiler_path.is_empty() {
            return Err(ValidationError::MissingRequired("DOCUMENT__COMPILER_PATH"));
        }
        if self.compile_timeout_secs == 0 {
            return Err(ValidationError::InvalidCompileTimeout);
        }
        if self.max_concurrent_compiles == 0 {
            return Err(ValidationError::NoCompilePermits);
        }

        // Ends up in a Content-Disposition header.
        let name = &self.download_file_name;
        if !name.ends_with(".pdf")
            || !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        {
            return Err(ValidationError::InvalidDownloadName);
        }

        Ok(())
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            template_path: default_template_path(),
            staging_dir: None,
            compiler_path: default_compiler_path(),
            compile_timeout_secs: default_compile_timeout(),
            max_concurrent_compiles: default_max_concurrent_compiles(),
            download_file_name: default_download_file_name(),
        }
    }
}

fn default_template_path() -> PathBuf {
    PathBuf::from("latex/template.tex")
}

fn default_compiler_path() -> String {
    "pdflatex".to_string()
}

fn default_compile_timeout() -> u64 {
    60
}

fn default_max_concurrent_compiles() -> usize {
    2
}

fn default_download_file_name() -> String {
    "TitleOrder.pdf".to_string()
}
