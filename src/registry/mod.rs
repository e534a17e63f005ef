//! Registry access.
//!
//! The registry is the remote package index (crates.io by default) that knows each
//! crate's versions, licenses and descriptive metadata. pkgcrate asks it exactly one
//! question per package: "what is your metadata for `name`?".
//!
//! - [`RegistrySource`] is the seam between resolution logic and the network. The
//!   production implementation is [`HttpRegistry`]; tests substitute an in-memory
//!   source (see `test_utils::MockRegistry` behind the `test-utils` feature).
//! - [`RegistryPayload`] is the parsed response and owns the derived accessors
//!   (latest stable version, normalized license, url).
//!
//! Failures are never retried: a transport error or non-2xx status is
//! [`PkgcrateError::RegistryFetchError`](crate::core::PkgcrateError::RegistryFetchError),
//! an unexpected body is
//! [`PkgcrateError::MalformedPayloadError`](crate::core::PkgcrateError::MalformedPayloadError).

mod client;
mod payload;

pub use client::HttpRegistry;
pub use payload::{DescriptiveInfo, RegistryPayload, VersionRecord};

use std::future::Future;

use crate::core::Result;

/// Source of per-crate registry metadata.
pub trait RegistrySource: Send + Sync {
    /// Fetch the metadata of `name`.
    ///
    /// Every call is a fresh request; implementations do not cache.
    fn fetch_crate(&self, name: &str) -> impl Future<Output = Result<RegistryPayload>> + Send;
}

impl<R: RegistrySource> RegistrySource for &R {
    fn fetch_crate(&self, name: &str) -> impl Future<Output = Result<RegistryPayload>> + Send {
        (**self).fetch_crate(name)
    }
}
