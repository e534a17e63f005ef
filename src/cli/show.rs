//! Print resolved package metadata without writing recipes.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::CommandContext;
use crate::constants::{DEFAULT_CONFIG_FILE, DEFAULT_REGISTRY_URL, REGISTRY_ENV_VAR};
use crate::package::ResolvedDescriptor;

/// Command to resolve all packages and print what would be generated.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Package list (YAML mapping of crate name to binaries)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Registry base URL
    #[arg(long, value_name = "URL", env = REGISTRY_ENV_VAR, default_value = DEFAULT_REGISTRY_URL)]
    pub registry: String,

    /// Output format
    #[arg(long, default_value = "table", value_parser = ["table", "json"])]
    pub format: String,
}

impl ShowCommand {
    pub async fn execute(self) -> Result<()> {
        let context = CommandContext::load(&self.config, &self.registry)?;
        let descriptors = context.resolve().await?;

        match self.format.as_str() {
            "json" => {
                let json = serde_json::to_string_pretty(&descriptors)
                    .context("Failed to serialize resolved packages")?;
                println!("{json}");
            }
            _ => print!("{}", format_table(&descriptors)),
        }

        Ok(())
    }
}

/// One block per package, in configuration order.
fn format_table(descriptors: &[ResolvedDescriptor]) -> String {
    let mut out = String::new();
    for descriptor in descriptors {
        let license = if descriptor.license_tokens.is_empty() {
            "(none)".dimmed().to_string()
        } else {
            descriptor.license_tokens.join(" ")
        };

        out.push_str(&format!("📦 {} {}\n", descriptor.name.bold(), descriptor.version.green()));
        out.push_str(&format!("   binaries: {}\n", descriptor.binaries.join(" ")));
        out.push_str(&format!("   license:  {license}\n"));
        if !descriptor.url.is_empty() {
            out.push_str(&format!("   url:      {}\n", descriptor.url));
        }
        if !descriptor.description.is_empty() {
            out.push_str(&format!("   {}\n", descriptor.description.trim()));
        }
    }
    out
}
