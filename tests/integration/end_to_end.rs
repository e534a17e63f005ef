use anyhow::Result;
use pkgcrate::config::parse_package_list;
use pkgcrate::core::PkgcrateError;
use pkgcrate::recipe::{RecipeWriter, emit};
use pkgcrate::resolver::PackageResolver;
use pkgcrate::test_utils::fixtures::{PACKAGES_YAML, PKGBUILD_TEMPLATE, payload};
use pkgcrate::test_utils::{MockRegistry, init_test_logging};
use std::time::Duration;
use tempfile::TempDir;

fn foo_bar_registry() -> MockRegistry {
    MockRegistry::new()
        .with_delayed_payload(
            "foo",
            payload("1.2.0", &[("1.2.0", Some("MIT"))]),
            Duration::from_millis(40),
        )
        .with_payload("bar", payload("0.9.0", &[("0.9.0", Some("MIT/Apache-2.0"))]))
}

#[tokio::test]
async fn test_package_list_resolves_in_configuration_order() -> Result<()> {
    init_test_logging(None);

    let specs = parse_package_list(PACKAGES_YAML)?;
    let registry = foo_bar_registry();
    let resolver = PackageResolver::new(&registry);

    let descriptors = resolver.resolve_all(specs).await?;

    assert_eq!(descriptors.len(), 2);
    assert_eq!(descriptors[0].name, "foo");
    assert_eq!(descriptors[0].version, "1.2.0");
    assert_eq!(descriptors[0].binaries, vec!["foo"]);
    assert_eq!(descriptors[0].license_tokens, vec!["MIT"]);

    assert_eq!(descriptors[1].name, "bar");
    assert_eq!(descriptors[1].version, "0.9.0");
    assert_eq!(descriptors[1].binaries, vec!["bar1", "bar2"]);
    assert_eq!(descriptors[1].license_tokens, vec!["MIT", "Apache-2.0"]);

    // foo was slower, yet stays first
    assert_eq!(registry.completion_order(), vec!["bar", "foo"]);
    Ok(())
}

#[tokio::test]
async fn test_emitted_recipes_carry_resolved_fields() -> Result<()> {
    let specs = parse_package_list(PACKAGES_YAML)?;
    let registry = foo_bar_registry();
    let descriptors = PackageResolver::new(&registry).resolve_all(specs).await?;

    let identity = |value: &str| value.to_string();
    let bar = emit(&descriptors[1], "pkgname=CRATE\n_binaries=(BINARIES)\nlicense=(LICENSE)\n", identity);

    assert_eq!(bar, "pkgname=bar\n_binaries=(bar1 bar2)\nlicense=(MIT Apache-2.0)\n");
    Ok(())
}

#[tokio::test]
async fn test_recipes_are_written_per_package() -> Result<()> {
    let temp = TempDir::new()?;
    let output = temp.path().join("build");

    let specs = parse_package_list(PACKAGES_YAML)?;
    let registry = foo_bar_registry();
    let descriptors = PackageResolver::new(&registry).resolve_all(specs).await?;

    let writer = RecipeWriter::new(&output, "PKGBUILD", PKGBUILD_TEMPLATE);
    let written = writer.write_all(&descriptors).await?;

    assert_eq!(written, vec![output.join("foo/PKGBUILD"), output.join("bar/PKGBUILD")]);

    let foo = tokio::fs::read_to_string(output.join("foo/PKGBUILD")).await?;
    assert!(foo.contains("pkgname=foo\n"));
    assert!(foo.contains("pkgver=1.2.0\n"));
    assert!(foo.contains("pkgdesc=''\n"));
    assert!(foo.contains("license=(MIT)\n"));
    assert!(foo.contains("_binaries=(foo)\n"));
    Ok(())
}

#[tokio::test]
async fn test_one_failure_resolves_nothing() -> Result<()> {
    let specs = parse_package_list("foo:\nmissing:\nbar: [bar1]\n")?;
    let registry = foo_bar_registry().with_failure(
        "missing",
        PkgcrateError::RegistryFetchError {
            package: "missing".to_string(),
            reason: "HTTP 404 Not Found".to_string(),
        },
    );

    let error = PackageResolver::new(&registry).resolve_all(specs).await.unwrap_err();

    assert_eq!(error.package(), Some("missing"));
    Ok(())
}

#[test]
fn test_scalar_binaries_are_rejected() {
    let error = parse_package_list("foo:\nbar: bar1\n").unwrap_err();

    match error.downcast_ref::<PkgcrateError>() {
        Some(PkgcrateError::InvalidPackageEntry {
            name, ..
        }) => assert_eq!(name, "bar"),
        other => panic!("expected InvalidPackageEntry, got {other:?}"),
    }
}
