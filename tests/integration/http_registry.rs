use anyhow::Result;
use pkgcrate::core::{PkgcrateError, user_friendly_error};
use pkgcrate::registry::{HttpRegistry, RegistrySource};
use pkgcrate::resolver::PackageResolver;
use pkgcrate::package::PackageSpec;
use pkgcrate::test_utils::fixtures::crate_response;

use crate::server::TestServer;

#[tokio::test]
async fn test_fetch_parses_registry_response() -> Result<()> {
    let body = crate_response(
        "fd-find",
        "10.2.0",
        "MIT OR Apache-2.0",
        Some("A simple, fast and user-friendly alternative to 'find'"),
        Some("https://github.com/sharkdp/fd"),
    );
    let base_url = TestServer::new().with_crate("fd-find", 200, body.to_string()).start().await;

    let registry = HttpRegistry::new(base_url)?;
    let payload = registry.fetch_crate("fd-find").await?;

    assert_eq!(payload.latest_version(), "10.2.0");
    assert_eq!(payload.license(), vec!["MIT", "Apache-2.0"]);
    assert_eq!(payload.url(), "https://github.com/sharkdp/fd");
    Ok(())
}

#[tokio::test]
async fn test_not_found_is_a_fetch_error() -> Result<()> {
    let base_url = TestServer::new().start().await;

    let registry = HttpRegistry::new(base_url)?;
    let error = registry.fetch_crate("no-such-crate").await.unwrap_err();

    match error {
        PkgcrateError::RegistryFetchError {
            package,
            reason,
        } => {
            assert_eq!(package, "no-such-crate");
            assert!(reason.contains("404"), "unexpected reason: {reason}");
        }
        other => panic!("expected RegistryFetchError, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_server_error_is_a_fetch_error() -> Result<()> {
    let base_url = TestServer::new().with_crate("flaky", 500, "oops").start().await;

    let error = HttpRegistry::new(base_url)?.fetch_crate("flaky").await.unwrap_err();

    assert!(matches!(error, PkgcrateError::RegistryFetchError { .. }));
    Ok(())
}

#[tokio::test]
async fn test_rate_limited_request_suggests_waiting() -> Result<()> {
    let base_url = TestServer::new().with_crate("busy", 429, "slow down").start().await;

    let error = HttpRegistry::new(base_url)?.fetch_crate("busy").await.unwrap_err();
    let context = user_friendly_error(error.into());

    assert!(context.error.to_string().contains("429"));
    assert!(context.suggestion.unwrap_or_default().contains("Wait a moment"));
    Ok(())
}

#[tokio::test]
async fn test_unexpected_body_is_malformed_payload() -> Result<()> {
    let base_url =
        TestServer::new().with_crate("weird", 200, r#"{"crate": "not an object"}"#).start().await;

    let error = HttpRegistry::new(base_url)?.fetch_crate("weird").await.unwrap_err();

    assert!(matches!(error, PkgcrateError::MalformedPayloadError { ref package, .. } if package == "weird"));
    Ok(())
}

#[tokio::test]
async fn test_resolver_over_http_keeps_order() -> Result<()> {
    let base_url = TestServer::new()
        .with_crate("foo", 200, crate_response("foo", "1.2.0", "MIT", None, None).to_string())
        .with_crate(
            "bar",
            200,
            crate_response("bar", "0.9.0", "MIT/Apache-2.0", Some("Bar"), None).to_string(),
        )
        .start()
        .await;

    let resolver = PackageResolver::new(HttpRegistry::new(base_url)?);
    let descriptors = resolver
        .resolve_all(vec![
            PackageSpec::single("foo"),
            PackageSpec::new("bar", vec!["bar1".to_string(), "bar2".to_string()]),
        ])
        .await?;

    assert_eq!(descriptors[0].name, "foo");
    assert_eq!(descriptors[0].license_tokens, vec!["MIT"]);
    assert_eq!(descriptors[0].url, "");
    assert_eq!(descriptors[1].name, "bar");
    assert_eq!(descriptors[1].description, "Bar");
    assert_eq!(descriptors[1].license_tokens, vec!["MIT", "Apache-2.0"]);
    Ok(())
}
