//! pkgcrate - PKGBUILD recipes for crates.io packages
//!
//! pkgcrate reads a declarative list of crates, asks the crates.io registry for each
//! crate's latest stable version, license and descriptive metadata, and renders a
//! recipe template once per crate.
//!
//! # Pipeline
//!
//! 1. [`config`] decodes `packages.yaml` into an ordered list of [`package::PackageSpec`]s
//! 2. [`resolver`] fetches every package concurrently through a [`registry::RegistrySource`]
//!    and produces one [`package::ResolvedDescriptor`] per spec, in input order
//! 3. [`license`] turns the registry's license expression into distribution tokens
//! 4. [`recipe`] substitutes the descriptor into the template and writes
//!    `<output>/<crate>/<recipe file>`
//!
//! Resolution is all-or-nothing: one failing package means no recipe is written.
//!
//! # Package List
//!
//! ```yaml
//! # binaries default to the crate name
//! ripgrep:
//! # explicit binary names
//! fd-find: [fd]
//! coreutils: [ls, cat, cp]
//! ```
//!
//! # Template Tokens
//!
//! | Token         | Value                                   |
//! |---------------|-----------------------------------------|
//! | `CRATE`       | crate name                              |
//! | `VERSION`     | latest stable version                   |
//! | `BINARIES`    | binary names, each quoted, space joined |
//! | `DESCRIPTION` | registry description                    |
//! | `URL`         | homepage, repository or documentation   |
//! | `LICENSE`     | license tokens, each quoted             |
//!
//! # Modules
//!
//! - [`cli`] - `generate` and `show` commands
//! - [`config`] - YAML package list decoding
//! - [`core`] - error types and user-facing error rendering
//! - [`license`] - SPDX expression normalization
//! - [`package`] - per-package memoized metadata
//! - [`recipe`] - template substitution and recipe writing
//! - [`registry`] - registry trait, HTTP client and payload model
//! - [`resolver`] - ordered concurrent resolution
//! - [`utils`] - shell quoting and file helpers

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod license;
pub mod package;
pub mod recipe;
pub mod registry;
pub mod resolver;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
