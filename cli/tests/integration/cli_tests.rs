//! Integration tests for the CLI skeleton: help, version, global flags.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::helpers::{modhelper, module};

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    let dir = module(&[]);
    modhelper(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_help_lists_commands() {
    let dir = module(&[]);
    modhelper(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("lint"))
        .stdout(predicate::str::contains("vagrant-clean"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    let dir = module(&[]);
    modhelper(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("modhelper"));
}

#[test]
fn test_unknown_command_fails() {
    let dir = module(&[]);
    modhelper(dir.path())
        .arg("deploy")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_missing_explicit_config_is_reported() {
    let dir = module(&[]);
    modhelper(dir.path())
        .args(["--config", "missing.yaml", "config"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("missing.yaml"));
}

#[test]
fn test_empty_no_color_env_is_accepted() {
    let dir = module(&[]);
    modhelper(dir.path())
        .env("NO_COLOR", "")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Configuration"));
}
