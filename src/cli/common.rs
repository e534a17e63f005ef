//! Common setup shared by CLI commands

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::config::load_package_list;
use crate::package::{PackageSpec, ResolvedDescriptor};
use crate::registry::HttpRegistry;
use crate::resolver::PackageResolver;

/// Package list and registry client for one command run.
///
/// The package list is decoded before the registry client is created, so
/// configuration errors surface without any network activity.
#[derive(Debug)]
pub struct CommandContext {
    /// Packages in configuration order
    pub specs: Vec<PackageSpec>,
    /// Resolver bound to the selected registry
    pub resolver: PackageResolver<HttpRegistry>,
}

impl CommandContext {
    /// Load the package list at `config_path` and connect to `registry_url`.
    ///
    /// # Errors
    /// Returns an error if the package list is missing or malformed, or if the HTTP
    /// client cannot be created
    pub fn load(config_path: &Path, registry_url: &str) -> Result<Self> {
        let specs = load_package_list(config_path)?;

        let registry = HttpRegistry::new(registry_url).context("Failed to set up registry client")?;
        debug!("Using registry {}", registry.base_url());

        Ok(Self {
            specs,
            resolver: PackageResolver::new(registry),
        })
    }

    /// Resolve every configured package. All-or-nothing.
    pub async fn resolve(self) -> Result<Vec<ResolvedDescriptor>> {
        let count = self.specs.len();
        self.resolver
            .resolve_all(self.specs)
            .await
            .with_context(|| format!("Failed to resolve {count} packages"))
    }
}
