//! Concurrent package resolution.
//!
//! [`PackageResolver`] turns an ordered list of [`PackageSpec`]s into an ordered list
//! of [`ResolvedDescriptor`]s.
//!
//! # Concurrency
//!
//! All registry fetches are issued at once (a flat fan-out, no concurrency cap) and
//! polled cooperatively from the calling task with [`try_join_all`]; no tasks are
//! spawned. Fetches may complete in any order, but each future keeps its slot, so the
//! output lines up with the input position by position.
//!
//! # Failure
//!
//! Resolution is all-or-nothing. The first failing fetch fails the whole call, the
//! remaining in-flight fetches are dropped, and no descriptor is returned for any
//! package.

use futures::future::try_join_all;
use tracing::{debug, info};

use crate::core::Result;
use crate::package::{Package, PackageSpec, ResolvedDescriptor};
use crate::registry::RegistrySource;

/// Resolves packages against one registry.
#[derive(Debug)]
pub struct PackageResolver<R> {
    registry: R,
}

impl<R: RegistrySource> PackageResolver<R> {
    pub fn new(registry: R) -> Self {
        Self {
            registry,
        }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Resolve every spec, preserving input order.
    ///
    /// # Errors
    ///
    /// The first registry error encountered; no partial result is produced.
    pub async fn resolve_all(&self, specs: Vec<PackageSpec>) -> Result<Vec<ResolvedDescriptor>> {
        let packages: Vec<Package> = specs.into_iter().map(Package::new).collect();
        self.resolve_packages(&packages).await
    }

    /// Resolve already constructed packages, reusing any metadata they have cached.
    pub async fn resolve_packages(&self, packages: &[Package]) -> Result<Vec<ResolvedDescriptor>> {
        debug!("Resolving {} packages", packages.len());

        let resolved =
            try_join_all(packages.iter().map(|package| package.resolve(&self.registry))).await?;

        for descriptor in &resolved {
            info!(
                package = %descriptor.name,
                version = %descriptor.version,
                license = %descriptor.license_tokens.join(" "),
                "Resolved package"
            );
        }

        Ok(resolved)
    }
}
