//! Integration test suite for pkgcrate
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **end_to_end**: package list to written recipes through an in-memory registry
//! - **http_registry**: the HTTP client against a local stand-in for crates.io
//! - **cli**: the `pkgcrate` binary, including exit codes and error output
//!
//! [`server`] provides the local HTTP server used by the last two groups.

mod cli;
mod end_to_end;
mod http_registry;
mod server;
