//! Writing emitted recipes to disk.
//!
//! Each package gets its own directory under the output directory, named after the
//! crate, holding a single recipe file:
//!
//! ```text
//! build/
//! ├── bar/PKGBUILD
//! └── foo/PKGBUILD
//! ```

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::emit;
use crate::constants::DEFAULT_RECIPE_FILE;
use crate::core::PkgcrateError;
use crate::package::ResolvedDescriptor;
use crate::utils::{atomic_write, shell};

/// Read the recipe template at `path`.
///
/// # Errors
///
/// [`PkgcrateError::TemplateNotFound`] if the file is missing, an I/O error with path
/// context if its existence cannot be checked or it cannot be read.
pub async fn load_template(path: &Path) -> Result<String> {
    let exists = tokio::fs::try_exists(path)
        .await
        .with_context(|| format!("Failed to check template: {}", path.display()))?;
    if !exists {
        return Err(PkgcrateError::TemplateNotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read template: {}", path.display()))
}

/// Renders descriptors through a template and writes one recipe per package.
#[derive(Debug, Clone)]
pub struct RecipeWriter {
    output_dir: PathBuf,
    file_name: String,
    template: String,
}

impl RecipeWriter {
    pub fn new(
        output_dir: impl Into<PathBuf>,
        file_name: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_name: file_name.into(),
            template: template.into(),
        }
    }

    /// Load the template at `template_path` and name recipes after it.
    ///
    /// `template/PKGBUILD` produces `PKGBUILD` recipes. `file_name` overrides this.
    pub async fn from_template_file(
        output_dir: impl Into<PathBuf>,
        template_path: &Path,
        file_name: Option<String>,
    ) -> Result<Self> {
        let template = load_template(template_path).await?;
        let file_name = file_name.unwrap_or_else(|| {
            template_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| DEFAULT_RECIPE_FILE.to_string())
        });
        debug!("Loaded template {} ({} bytes)", template_path.display(), template.len());
        Ok(Self::new(output_dir, file_name, template))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Where the recipe for `package` is written.
    pub fn recipe_path(&self, package: &str) -> PathBuf {
        self.output_dir.join(package).join(&self.file_name)
    }

    /// Recipe text for `descriptor`, with every value shell-quoted.
    pub fn render(&self, descriptor: &ResolvedDescriptor) -> String {
        emit(descriptor, &self.template, shell::quote)
    }

    /// Render and write the recipe for `descriptor`, replacing any previous one.
    pub async fn write(&self, descriptor: &ResolvedDescriptor) -> Result<PathBuf> {
        let path = self.recipe_path(&descriptor.name);
        let content = self.render(descriptor);

        atomic_write(&path, content.as_bytes()).await.map_err(|e| {
            e.context(PkgcrateError::FileSystemError {
                operation: "write recipe".to_string(),
                path: path.display().to_string(),
            })
        })?;

        info!("Wrote {}", path.display());
        Ok(path)
    }

    /// Write recipes for all descriptors, in order.
    pub async fn write_all(&self, descriptors: &[ResolvedDescriptor]) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            written.push(self.write(descriptor).await?);
        }
        Ok(written)
    }
}
