//! In-memory registry for tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::core::{PkgcrateError, Result};
use crate::registry::{RegistryPayload, RegistrySource};

#[derive(Debug, Clone)]
enum MockResponse {
    Payload(RegistryPayload),
    Failure(PkgcrateError),
}

#[derive(Debug, Clone)]
struct MockEntry {
    response: MockResponse,
    delay: Duration,
}

/// A [`RegistrySource`] that answers from memory.
///
/// Each package can be given a payload or a failure and an artificial latency.
/// Unknown packages fail like a registry 404. Every call is counted, and the order in
/// which fetches complete is recorded, so tests can assert on memoization and on
/// out-of-order completion.
///
/// # Example
///
/// ```rust,no_run
/// use pkgcrate::test_utils::{MockRegistry, fixtures};
/// use std::time::Duration;
///
/// let registry = MockRegistry::new()
///     .with_payload("foo", fixtures::payload("1.2.0", &[("1.2.0", Some("MIT"))]))
///     .with_delayed_payload("bar", fixtures::payload("0.9.0", &[]), Duration::from_millis(20));
/// assert_eq!(registry.fetch_count("foo"), 0);
/// ```
#[derive(Debug, Default)]
pub struct MockRegistry {
    entries: HashMap<String, MockEntry>,
    calls: Mutex<HashMap<String, usize>>,
    completed: Mutex<Vec<String>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `name` immediately with `payload`.
    pub fn with_payload(self, name: &str, payload: RegistryPayload) -> Self {
        self.with_delayed_payload(name, payload, Duration::ZERO)
    }

    /// Answer `name` with `payload` after `delay`.
    pub fn with_delayed_payload(
        mut self,
        name: &str,
        payload: RegistryPayload,
        delay: Duration,
    ) -> Self {
        self.entries.insert(
            name.to_string(),
            MockEntry {
                response: MockResponse::Payload(payload),
                delay,
            },
        );
        self
    }

    /// Fail every fetch of `name` with `error`.
    pub fn with_failure(mut self, name: &str, error: PkgcrateError) -> Self {
        self.entries.insert(
            name.to_string(),
            MockEntry {
                response: MockResponse::Failure(error),
                delay: Duration::ZERO,
            },
        );
        self
    }

    /// Number of fetches issued for `name`.
    pub fn fetch_count(&self, name: &str) -> usize {
        self.calls.lock().map(|calls| calls.get(name).copied().unwrap_or(0)).unwrap_or(0)
    }

    /// Number of fetches issued for all packages.
    pub fn total_fetches(&self) -> usize {
        self.calls.lock().map(|calls| calls.values().sum()).unwrap_or(0)
    }

    /// Package names in the order their fetches finished.
    pub fn completion_order(&self) -> Vec<String> {
        self.completed.lock().map(|completed| completed.clone()).unwrap_or_default()
    }
}

impl RegistrySource for MockRegistry {
    async fn fetch_crate(&self, name: &str) -> Result<RegistryPayload> {
        if let Ok(mut calls) = self.calls.lock() {
            *calls.entry(name.to_string()).or_insert(0) += 1;
        }

        let entry = self.entries.get(name).cloned();
        if let Some(delay) = entry.as_ref().map(|e| e.delay).filter(|d| !d.is_zero()) {
            tokio::time::sleep(delay).await;
        }

        if let Ok(mut completed) = self.completed.lock() {
            completed.push(name.to_string());
        }

        match entry.map(|e| e.response) {
            Some(MockResponse::Payload(payload)) => Ok(payload),
            Some(MockResponse::Failure(error)) => Err(error),
            None => Err(PkgcrateError::RegistryFetchError {
                package: name.to_string(),
                reason: "HTTP 404 Not Found".to_string(),
            }),
        }
    }
}
