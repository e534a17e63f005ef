//! Test utilities for pkgcrate
//!
//! Available to unit tests and, through the `test-utils` feature, to integration
//! tests.
//!
//! - [`MockRegistry`] - in-memory [`RegistrySource`](crate::registry::RegistrySource)
//!   with latency, failure injection and fetch counting
//! - [`fixtures`] - payload, response body and template builders
//! - [`init_test_logging`] - one-time tracing setup for tests

pub mod fixtures;
pub mod registry;

pub use registry::MockRegistry;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. Uses `level` if given, otherwise `RUST_LOG`
/// if set, otherwise leaves logging off.
///
/// ```bash
/// RUST_LOG=pkgcrate=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer() // Important: uses test-compatible writer
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
