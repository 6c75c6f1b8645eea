//! Per-invocation render workspaces and artifact relocation.
//!
//! Every generation gets its own directory under the staging root, so
//! concurrent invocations for the same title and date never share a staging
//! file or an output name:
//!
//! ```text
//! {staging_root}/
//! └── render-XXXXXX/                    (one per invocation)
//!     ├── build/                        (compiler input, output, logs)
//!     │   ├── output.tex
//!     │   ├── output.aux
//!     │   └── output.pdf
//!     └── Smith_Estate_42_10-16-2026.pdf  (relocated artifact)
//! ```
//!
//! After compilation the byproducts in `build/` are purged one by one and the
//! directory removed, leaving only the artifact. The whole workspace is
//! removed when the workspace (or the artifact it becomes) is dropped.

use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tokio::fs;

use crate::ports::{Artifact, GenerationError};

const WORKSPACE_PREFIX: &str = "render-";
const BUILD_DIR: &str = "build";

/// Isolated directory for one document generation.
#[derive(Debug)]
pub struct RenderWorkspace {
    dir: TempDir,
    build_dir: PathBuf,
}

impl RenderWorkspace {
    /// Create a fresh workspace under `staging_root`, creating the root if
    /// needed.
    pub async fn create(staging_root: &Path) -> io::Result<Self> {
        fs::create_dir_all(staging_root).await?;

        let dir = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir_in(staging_root)?;
        let build_dir = dir.path().join(BUILD_DIR);
        fs::create_dir(&build_dir).await?;

        tracing::debug!("Created workspace {}", dir.path().display());

        Ok(Self { dir, build_dir })
    }

    /// Workspace root, where the relocated artifact lives.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Directory the compiler works in.
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Copy the compiled output to `file_name` in the workspace root.
    ///
    /// The destination is re-checked after copying. On any failure the
    /// partial destination is deleted so no half-written artifact survives.
    pub async fn relocate(
        &self,
        compiled: &Path,
        file_name: &str,
    ) -> Result<PathBuf, GenerationError> {
        let destination = self.dir.path().join(file_name);

        if let Err(e) = fs::copy(compiled, &destination).await {
            remove_if_present(&destination).await;
            return Err(GenerationError::Relocation {
                path: destination,
                reason: format!("copy from {} failed: {}", compiled.display(), e),
            });
        }

        if !fs::try_exists(&destination).await.unwrap_or(false) {
            remove_if_present(&destination).await;
            return Err(GenerationError::Relocation {
                path: destination,
                reason: "artifact missing after copy".to_string(),
            });
        }

        Ok(destination)
    }

    /// Remove compiler byproducts from the build directory.
    ///
    /// Each removal is attempted independently; failures are logged and
    /// counted but never escalated. Returns the number of failed removals.
    pub async fn purge_byproducts(&self, byproducts: &[&str]) -> usize {
        let mut failures = 0;

        for name in byproducts {
            let path = self.build_dir.join(name);
            match fs::remove_file(&path).await {
                Ok(()) => tracing::trace!("Removed {}", path.display()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    failures += 1;
                    tracing::warn!("Failed to delete temporary file {}: {}", path.display(), e);
                }
            }
        }

        if let Err(e) = fs::remove_dir(&self.build_dir).await {
            if e.kind() != io::ErrorKind::NotFound {
                failures += 1;
                tracing::warn!(
                    "Failed to remove build directory {}: {}",
                    self.build_dir.display(),
                    e
                );
            }
        }

        failures
    }

    /// Hand the workspace over to the artifact stored at `path`.
    pub fn into_artifact(self, path: PathBuf) -> Artifact {
        Artifact::new(path, self.dir)
    }
}

async fn remove_if_present(path: &Path) {
    match fs::remove_file(path).await {
        Ok(()) => tracing::debug!("Removed partial artifact {}", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("Failed to remove partial artifact {}: {}", path.display(), e),
    }
}
