//! Packages and their resolved descriptors.
//!
//! A [`PackageSpec`] is what the user declared: a crate name and the binaries its
//! recipe installs. A [`Package`] pairs a spec with a write-once cache of its registry
//! metadata, and a [`ResolvedDescriptor`] is the fully populated, read-only result
//! that the recipe emitter consumes.
//!
//! ```text
//! PackageSpec ──► Package ──(fetch once)──► RegistryPayload
//!                    │
//!                    └──► ResolvedDescriptor { name, binaries, version, license_tokens, .. }
//! ```

use serde::Serialize;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::core::Result;
use crate::registry::{DescriptiveInfo, RegistryPayload, RegistrySource};

/// A crate the user wants packaged, with the binaries its recipe provides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageSpec {
    /// Registry identifier of the crate.
    pub name: String,
    /// Executables built from the crate, in declaration order.
    pub binaries: Vec<String>,
}

impl PackageSpec {
    pub fn new(name: impl Into<String>, binaries: Vec<String>) -> Self {
        Self {
            name: name.into(),
            binaries,
        }
    }

    /// A spec whose only binary shares the crate's name.
    pub fn single(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            binaries: vec![name.clone()],
            name,
        }
    }
}

/// Everything a recipe needs about one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDescriptor {
    pub name: String,
    pub binaries: Vec<String>,
    pub version: String,
    /// Canonical license tokens, see [`crate::license::normalize`].
    pub license_tokens: Vec<String>,
    pub description: String,
    pub url: String,
}

/// A [`PackageSpec`] plus its lazily fetched registry metadata.
///
/// The payload is fetched on first use and kept for the lifetime of the `Package`.
/// The first successful fetch wins; later accessors never hit the registry again.
/// A failed fetch leaves the cache empty.
#[derive(Debug)]
pub struct Package {
    spec: PackageSpec,
    payload: OnceCell<RegistryPayload>,
}

impl Package {
    pub fn new(spec: PackageSpec) -> Self {
        Self {
            spec,
            payload: OnceCell::new(),
        }
    }

    pub fn spec(&self) -> &PackageSpec {
        &self.spec
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn binaries(&self) -> &[String] {
        &self.spec.binaries
    }

    /// Whether the registry metadata has been fetched.
    pub fn is_loaded(&self) -> bool {
        self.payload.initialized()
    }

    /// Registry metadata for this package, fetched from `registry` on first call.
    ///
    /// # Errors
    ///
    /// Whatever `registry` reports for the fetch; nothing is cached in that case.
    pub async fn metadata<R: RegistrySource>(&self, registry: &R) -> Result<&RegistryPayload> {
        if let Some(payload) = self.payload.get() {
            debug!("Using cached registry metadata for {}", self.spec.name);
            return Ok(payload);
        }

        self.payload.get_or_try_init(|| registry.fetch_crate(&self.spec.name)).await
    }

    /// Latest stable version, as reported by the registry.
    pub async fn latest_version<R: RegistrySource>(&self, registry: &R) -> Result<&str> {
        Ok(self.metadata(registry).await?.latest_version())
    }

    /// Canonical license tokens of the latest stable version.
    pub async fn license<R: RegistrySource>(&self, registry: &R) -> Result<Vec<String>> {
        Ok(self.metadata(registry).await?.license())
    }

    pub async fn descriptive_info<R: RegistrySource>(
        &self,
        registry: &R,
    ) -> Result<DescriptiveInfo> {
        Ok(self.metadata(registry).await?.descriptive_info())
    }

    /// Resolve this package into a descriptor in one step.
    pub async fn resolve<R: RegistrySource>(&self, registry: &R) -> Result<ResolvedDescriptor> {
        let DescriptiveInfo {
            description,
            url,
            version,
            license,
        } = self.descriptive_info(registry).await?;

        Ok(ResolvedDescriptor {
            name: self.spec.name.clone(),
            binaries: self.spec.binaries.clone(),
            version,
            license_tokens: license,
            description,
            url,
        })
    }
}
