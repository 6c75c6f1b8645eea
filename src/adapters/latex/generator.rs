//! LaTeX document generator.
//!
//! Implements the `DocumentGenerator` port as a linear pipeline:
//!
//! ```text
//! DocumentRecord ──► FieldValues ──► Template::render ──► RenderWorkspace
//!                                                             │
//!        Artifact ◄── relocate ◄── DocumentCompiler::compile ◄┘
//! ```
//!
//! The template is read and validated on every invocation, before any
//! workspace is created or any process is spawned. Byproducts are purged
//! whether or not compilation succeeds.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use tokio::sync::Semaphore;
use uuid::Uuid;

use crate::domain::document::{artifact_file_name, DocumentRecord, FieldValues, Template};
use crate::ports::{Artifact, DocumentCompiler, DocumentGenerator, GenerationError};

use super::workspace::RenderWorkspace;

/// Default number of compilations allowed to run at once.
pub const DEFAULT_MAX_CONCURRENT: usize = 2;

/// Document generator backed by a LaTeX template and a compiler.
pub struct LatexDocumentGenerator {
    compiler: Arc<dyn DocumentCompiler>,
    template_path: PathBuf,
    staging_root: PathBuf,
    permits: Arc<Semaphore>,
    clock: fn() -> NaiveDate,
}

impl LatexDocumentGenerator {
    /// Create a generator reading `template_path` and staging workspaces
    /// under `staging_root`.
    pub fn new(
        compiler: Arc<dyn DocumentCompiler>,
        template_path: impl Into<PathBuf>,
        staging_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            compiler,
            template_path: template_path.into(),
            staging_root: staging_root.into(),
            permits: Arc::new(Semaphore::new(DEFAULT_MAX_CONCURRENT)),
            clock: local_today,
        }
    }

    /// Bound the number of concurrent compiler processes.
    pub fn with_max_concurrent(mut self, max: usize) -> Self {
        self.permits = Arc::new(Semaphore::new(max.max(1)));
        self
    }

    /// Replace the source of "today" used to default order dates.
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    async fn load_template(&self) -> Result<Template, GenerationError> {
        let source = tokio::fs::read_to_string(&self.template_path)
            .await
            .map_err(|e| GenerationError::TemplateLoad {
                path: self.template_path.clone(),
                source: e,
            })?;

        let template = Template::parse(&source)?;

        let unused = template.unused();
        if !unused.is_empty() {
            tracing::debug!(?unused, "Template does not reference every field");
        }

        Ok(template)
    }

    #[tracing::instrument(
        name = "generate_document",
        skip(self, record),
        fields(generation_id = %Uuid::new_v4(), title = %record.title)
    )]
    async fn run(&self, mut record: DocumentRecord) -> Result<Artifact, GenerationError> {
        record.ensure_order_date((self.clock)());

        let template = self.load_template().await?;
        let source = template.render(&FieldValues::from_record(&record));
        let file_name = artifact_file_name(&record.title, record.order_date());

        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| GenerationError::Unavailable)?;

        let workspace = RenderWorkspace::create(&self.staging_root)
            .await
            .map_err(GenerationError::Workspace)?;

        let result = self.compile_and_relocate(&workspace, &source, &file_name).await;

        let failures = workspace
            .purge_byproducts(self.compiler.byproducts())
            .await;
        if failures > 0 {
            tracing::warn!(failures, "Cleanup left files behind");
        }

        match result {
            Ok(path) => {
                tracing::info!(file = %file_name, "Document generated");
                Ok(workspace.into_artifact(path))
            }
            Err(e) => {
                tracing::error!(error = %e, "Document generation failed");
                Err(e)
            }
        }
    }

    async fn compile_and_relocate(
        &self,
        workspace: &RenderWorkspace,
        source: &str,
        file_name: &str,
    ) -> Result<PathBuf, GenerationError> {
        let compiled = self.compiler.compile(source, workspace.build_dir()).await?;
        workspace.relocate(&compiled, file_name).await
    }
}

#[async_trait]
impl DocumentGenerator for LatexDocumentGenerator {
    async fn generate(&self, record: DocumentRecord) -> Result<Artifact, GenerationError> {
        self.run(record).await
    }

    async fn is_available(&self) -> bool {
        self.compiler.is_available().await
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
