//! Generate recipes for every configured package.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

use super::CommandContext;
use crate::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_DIR, DEFAULT_REGISTRY_URL, DEFAULT_TEMPLATE_FILE,
    REGISTRY_ENV_VAR,
};
use crate::recipe::RecipeWriter;

/// Command to resolve all packages and write their recipes.
///
/// The template is loaded and every package resolved before anything is written:
/// if any package fails to resolve, no recipe is written at all.
///
/// # Examples
///
/// ```bash
/// pkgcrate generate
/// pkgcrate generate --config crates.yaml --template template/PKGBUILD --output build
/// ```
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Package list (YAML mapping of crate name to binaries)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Recipe template
    #[arg(long, value_name = "FILE", default_value = DEFAULT_TEMPLATE_FILE)]
    pub template: PathBuf,

    /// Directory receiving one sub-directory per package
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// File name of each recipe [default: the template's file name]
    #[arg(long, value_name = "NAME")]
    pub recipe_file: Option<String>,

    /// Registry base URL
    #[arg(long, value_name = "URL", env = REGISTRY_ENV_VAR, default_value = DEFAULT_REGISTRY_URL)]
    pub registry: String,
}

impl GenerateCommand {
    pub async fn execute(self) -> Result<()> {
        let context = CommandContext::load(&self.config, &self.registry)?;
        let writer =
            RecipeWriter::from_template_file(&self.output, &self.template, self.recipe_file)
                .await?;

        info!("Resolving {} packages", context.specs.len());
        let descriptors = context.resolve().await?;

        for descriptor in &descriptors {
            println!("📦 {} {}", descriptor.name.bold(), descriptor.version.green());
        }

        let written = writer.write_all(&descriptors).await?;
        info!("Wrote {} recipes to {}", written.len(), writer.output_dir().display());

        Ok(())
    }
}
