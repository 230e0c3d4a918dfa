//! Integration tests for `modhelper vagrant` and `modhelper vagrant-clean`.
//!
//! A shell script run through `sh` stands in for the vagrant CLI and logs
//! each invocation.

use std::fs;

use predicates::prelude::*;

use crate::helpers::{modhelper, module, write_config};

/// Fake vagrant: prints a status line for `up`, logs every call. Marker
/// files in the module root switch on `running` or a failing exit.
const FAKE_VAGRANT: &str = r#"
echo "$*" >> calls.log
case "$1" in
  up)
    echo "Bringing machine 'default' up with '${2#--provider=}' provider..."
    if [ -f running ]; then echo "==> default: Machine is already running."; fi
    if [ -f fail_up ]; then exit 3; fi
    ;;
  provision)
    echo "==> default: Running provisioner: puppet..."
    if [ -f fail_provision ]; then exit 3; fi
    ;;
esac
"#;

fn fake_module() -> tempfile::TempDir {
    let dir = module(&[("bin/vagrant.sh", FAKE_VAGRANT)]);
    write_config(
        dir.path(),
        "vagrant:\n  program: sh bin/vagrant.sh\nfixtures:\n  prepare: 'true'\n  cleanup: 'true'\n",
    );
    dir
}

fn calls(dir: &tempfile::TempDir) -> String {
    fs::read_to_string(dir.path().join("calls.log")).unwrap_or_default()
}

#[test]
fn test_vagrant_up_streams_output_without_provisioning() {
    let dir = fake_module();
    modhelper(dir.path())
        .args(["--quiet", "vagrant"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Bringing machine 'default' up with 'vmware_fusion' provider...",
        ));
    assert_eq!(calls(&dir), "up --provider=vmware_fusion\n");
}

#[test]
fn test_vagrant_already_running_provisions() {
    let dir = fake_module();
    fs::write(dir.path().join("running"), "").unwrap_or_else(|e| panic!("write: {e}"));
    modhelper(dir.path())
        .args(["--quiet", "vagrant", "--provider", "virtualbox"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Machine is already running."))
        .stdout(predicate::str::contains("Running provisioner: puppet"));
    assert_eq!(calls(&dir), "up --provider=virtualbox\nprovision\n");
}

#[test]
fn test_vagrant_up_failure_exits_nonzero() {
    let dir = fake_module();
    fs::write(dir.path().join("fail_up"), "").unwrap_or_else(|e| panic!("write: {e}"));
    modhelper(dir.path())
        .args(["--quiet", "vagrant"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Bringing machine 'default' up"))
        .stderr(predicate::str::contains(
            "`sh bin/vagrant.sh up --provider=vmware_fusion` exited with status 3",
        ));
    assert_eq!(calls(&dir), "up --provider=vmware_fusion\n");
}

#[test]
fn test_vagrant_provision_failure_exits_nonzero() {
    let dir = fake_module();
    fs::write(dir.path().join("running"), "").unwrap_or_else(|e| panic!("write: {e}"));
    fs::write(dir.path().join("fail_provision"), "").unwrap_or_else(|e| panic!("write: {e}"));
    modhelper(dir.path())
        .args(["--quiet", "vagrant"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Running provisioner: puppet"))
        .stderr(predicate::str::contains(
            "`sh bin/vagrant.sh provision` exited with status 3",
        ));
    assert_eq!(calls(&dir), "up --provider=vmware_fusion\nprovision\n");
}

#[test]
fn test_vagrant_clean_with_yes_destroys_without_prompt() {
    let dir = fake_module();
    modhelper(dir.path())
        .args(["--quiet", "--yes", "vagrant-clean"])
        .assert()
        .success();
    assert_eq!(calls(&dir), "destroy -f\n");
}

#[test]
fn test_vagrant_clean_ci_env_skips_prompt() {
    let dir = fake_module();
    modhelper(dir.path())
        .env("CI", "true")
        .args(["--quiet", "vagrant-clean"])
        .assert()
        .success();
    assert_eq!(calls(&dir), "destroy -f\n");
}
