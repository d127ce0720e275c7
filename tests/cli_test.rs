//! Integration tests for the rackcheck binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command isolated from the invoking user's home and config.
fn rackcheck(project: &TempDir, home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("rackcheck"));
    cmd.current_dir(project.path())
        .env("HOME", home.path())
        .env("RACKCHECK_TIMEOUT_SECS", "2")
        .env_remove("RACKCHECK_PROJECT")
        .env_remove("RACKCHECK_CONFIG_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("rackcheck"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Verify a host is ready"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("rackcheck"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_flag() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("rackcheck"));
    cmd.arg("--fix");
    cmd.assert().code(2);
    Ok(())
}

#[test]
fn cli_missing_config_fails_but_completes() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let home = TempDir::new()?;

    rackcheck(&project, &home)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ServerRack Installation Test"))
        .stdout(predicate::str::contains(
            "Testing config.yaml... FAILED (not found)",
        ))
        .stdout(predicate::str::contains("Testing SSH keys... WARNING (no SSH key found)"))
        .stdout(predicate::str::contains("Configuration: FAIL"))
        .stdout(predicate::str::contains("Temperature Monitoring:"))
        .stdout(predicate::str::contains("Passed: "))
        .stdout(predicate::str::contains("/7"))
        .stdout(predicate::str::contains("Some tests failed."));
    Ok(())
}

#[test]
fn cli_project_flag_selects_config_dir() -> Result<(), Box<dyn std::error::Error>> {
    let cwd = TempDir::new()?;
    let home = TempDir::new()?;
    let project = TempDir::new()?;
    fs::write(
        project.path().join("config.yaml"),
        "nodes:\n  - name: pi-01\n  - name: pi-02\n",
    )?;

    rackcheck(&cwd, &home)
        .arg("--project")
        .arg(project.path())
        .assert()
        .stdout(predicate::str::contains(
            "Testing config.yaml... OK (2 nodes configured)",
        ))
        .stdout(predicate::str::contains("Configuration: PASS"));
    Ok(())
}

#[test]
fn cli_config_file_override() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let home = TempDir::new()?;
    fs::write(project.path().join("rack.yaml"), "nodes: []\n")?;

    rackcheck(&project, &home)
        .env("RACKCHECK_CONFIG_FILE", "rack.yaml")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Testing rack.yaml... FAILED (no nodes configured)",
        ));
    Ok(())
}

#[test]
fn cli_output_has_no_ansi_when_piped() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let home = TempDir::new()?;

    rackcheck(&project, &home)
        .arg("--no-color")
        .assert()
        .stdout(predicate::str::contains("\u{1b}[").not());
    Ok(())
}
