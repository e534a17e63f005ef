//! Configuration loading for pkgcrate.
//!
//! pkgcrate has one configuration input, the package list (`packages.yaml` by
//! default). It is decoded into [`PackageSpec`](crate::package::PackageSpec)s before
//! any network activity, so a malformed entry aborts the run without touching the
//! registry.
//!
//! - [`parse_config`] - generic YAML file parsing with path context
//! - [`load_package_list`] / [`parse_package_list`] - package list decoding
//! - [`Binaries`] - the `null`-or-sequence binaries field as a sum type
//!
//! Runtime settings (registry URL, template and output locations) come from CLI
//! flags and environment variables, see [`crate::cli`].

mod packages;
mod parser;

pub use packages::{Binaries, decode_package_list, load_package_list, parse_package_list};
pub use parser::parse_config;
