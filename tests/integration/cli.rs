use anyhow::Result;
use assert_cmd::Command;
use pkgcrate::test_utils::fixtures::{PACKAGES_YAML, PKGBUILD_TEMPLATE, crate_response};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

use crate::server::TestServer;

/// Project directory holding `packages.yaml` and `template/PKGBUILD`.
fn project(packages: &str) -> Result<TempDir> {
    let temp = TempDir::new()?;
    std::fs::write(temp.path().join("packages.yaml"), packages)?;
    std::fs::create_dir_all(temp.path().join("template"))?;
    std::fs::write(temp.path().join("template/PKGBUILD"), PKGBUILD_TEMPLATE)?;
    Ok(temp)
}

fn pkgcrate(dir: &Path, registry: &str) -> Command {
    let mut cmd = Command::cargo_bin("pkgcrate").unwrap();
    cmd.current_dir(dir).env("PKGCRATE_REGISTRY", registry).env("NO_COLOR", "1");
    cmd
}

async fn foo_bar_server() -> String {
    TestServer::new()
        .with_crate("foo", 200, crate_response("foo", "1.2.0", "MIT", None, None).to_string())
        .with_crate(
            "bar",
            200,
            crate_response(
                "bar",
                "0.9.0",
                "MIT/Apache-2.0",
                Some("Bar tools"),
                Some("https://example.org/bar"),
            )
            .to_string(),
        )
        .start()
        .await
}

#[tokio::test(flavor = "multi_thread")]
async fn test_generate_writes_recipes() -> Result<()> {
    let temp = project(PACKAGES_YAML)?;
    let registry = foo_bar_server().await;

    let dir = temp.path().to_path_buf();
    let assert = tokio::task::spawn_blocking(move || pkgcrate(&dir, &registry).arg("generate").assert())
        .await?;
    assert
        .success()
        .stdout(predicate::str::contains("📦 foo 1.2.0"))
        .stdout(predicate::str::contains("📦 bar 0.9.0"));

    let bar = std::fs::read_to_string(temp.path().join("build/bar/PKGBUILD"))?;
    assert!(bar.contains("pkgname=bar\n"));
    assert!(bar.contains("pkgver=0.9.0\n"));
    assert!(bar.contains("pkgdesc='Bar tools'\n"));
    assert!(bar.contains("url=https://example.org/bar\n"));
    assert!(bar.contains("license=(MIT Apache-2.0)\n"));
    assert!(bar.contains("_binaries=(bar1 bar2)\n"));

    assert!(temp.path().join("build/foo/PKGBUILD").exists());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_generate_honours_output_and_recipe_file() -> Result<()> {
    let temp = project("foo:\n")?;
    let registry = foo_bar_server().await;

    let dir = temp.path().to_path_buf();
    tokio::task::spawn_blocking(move || {
        pkgcrate(&dir, &registry)
            .args(["generate", "--output", "out", "--recipe-file", "foo.recipe"])
            .assert()
    })
    .await?
    .success();

    assert!(temp.path().join("out/foo/foo.recipe").exists());
    assert!(!temp.path().join("build").exists());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_package_writes_nothing() -> Result<()> {
    let temp = project("foo:\nmissing:\n")?;
    let registry = foo_bar_server().await;

    let dir = temp.path().to_path_buf();
    tokio::task::spawn_blocking(move || pkgcrate(&dir, &registry).arg("generate").assert())
        .await?
        .failure()
        .stderr(predicate::str::contains("missing"));

    assert!(!temp.path().join("build/foo").exists());
    Ok(())
}

#[test]
fn test_invalid_config_fails_before_network() -> Result<()> {
    let temp = project("foo: 3\n")?;

    // Nothing listens on port 9; a fetch would fail with a different error.
    pkgcrate(temp.path(), "http://127.0.0.1:9")
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration for package 'foo'"));
    Ok(())
}

#[test]
fn test_missing_config_reports_path() -> Result<()> {
    let temp = TempDir::new()?;

    pkgcrate(temp.path(), "http://127.0.0.1:9")
        .args(["show", "--config", "nope.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.yaml"));
    Ok(())
}

#[test]
fn test_missing_template_is_reported() -> Result<()> {
    let temp = project("foo:\n")?;
    std::fs::remove_file(temp.path().join("template/PKGBUILD"))?;

    pkgcrate(temp.path(), "http://127.0.0.1:9")
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Recipe template not found"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_json_lists_descriptors() -> Result<()> {
    let temp = project(PACKAGES_YAML)?;
    let registry = foo_bar_server().await;

    let dir = temp.path().to_path_buf();
    let output = tokio::task::spawn_blocking(move || {
        pkgcrate(&dir, &registry).args(["--quiet", "show", "--format", "json"]).output()
    })
    .await??;

    assert!(output.status.success());
    let descriptors: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(descriptors[0]["name"], "foo");
    assert_eq!(descriptors[1]["binaries"], serde_json::json!(["bar1", "bar2"]));
    assert_eq!(descriptors[1]["license_tokens"], serde_json::json!(["MIT", "Apache-2.0"]));
    assert!(!temp.path().join("build").exists());
    Ok(())
}
