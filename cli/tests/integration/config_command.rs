//! Integration tests for `modhelper config`.

use predicates::prelude::*;

use crate::helpers::{modhelper, module, write_config};

#[test]
fn test_config_without_file_shows_defaults() {
    let dir = module(&[]);
    modhelper(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults; .modhelper.yaml not found"))
        .stdout(predicate::str::contains("{manifests,tests}/**/*.pp"))
        .stdout(predicate::str::contains("vmware_fusion"));
}

#[test]
fn test_config_reads_local_file() {
    let dir = module(&[]);
    write_config(dir.path(), "vagrant:\n  provider: virtualbox\n");
    modhelper(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("provider: virtualbox"))
        .stdout(predicate::str::contains("not found").not());
}

#[test]
fn test_config_env_var_selects_file() {
    let dir = module(&[("ci/settings.yaml", "vagrant:\n  program: /usr/local/bin/vagrant\n")]);
    modhelper(dir.path())
        .env("MODHELPER_CONFIG", "ci/settings.yaml")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("/usr/local/bin/vagrant"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = module(&[]);
    write_config(
        dir.path(),
        "validate:\n  - name: shell\n    pattern: 'bin/*.sh'\n    command: 'sh -n'\n",
    );
    modhelper(dir.path())
        .arg("config")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("{file}"));
}
