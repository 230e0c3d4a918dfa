//! Test VM provisioning flow with a scripted runner.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;

use modhelper_cli::application::services::provision;
use modhelper_cli::domain::{ExitCode, FixtureHooks, VagrantConfig};

use crate::mocks::{RecordingReporter, ScriptedRunner};

fn hooks() -> FixtureHooks {
    FixtureHooks::default()
}

fn no_hooks() -> FixtureHooks {
    FixtureHooks {
        prepare: None,
        cleanup: None,
    }
}

#[tokio::test]
async fn test_up_fresh_machine_does_not_reprovision() {
    let runner = ScriptedRunner {
        lines: HashMap::from([(
            "vagrant up",
            vec!["Bringing machine 'default' up with 'vmware_fusion' provider...", "==> default: Machine booted and ready!"],
        )]),
        ..ScriptedRunner::default()
    };
    let mut sink = Vec::new();
    let outcome = provision::up(
        &runner,
        &VagrantConfig::default(),
        &hooks(),
        &RecordingReporter::default(),
        &mut sink,
    )
    .await
    .unwrap();

    assert!(!outcome.already_running);
    assert_eq!(outcome.provision_code, None);
    assert_eq!(
        runner.commands(),
        ["rake spec_prep", "vagrant up --provider=vmware_fusion"]
    );
    assert!(String::from_utf8(sink).unwrap().contains("Machine booted"));
}

#[tokio::test]
async fn test_up_already_running_triggers_provision() {
    let runner = ScriptedRunner {
        lines: HashMap::from([
            (
                "vagrant up",
                vec!["Starting...", "==> default: Machine is already running.", "Done."],
            ),
            ("vagrant provision", vec!["==> default: Running provisioner: puppet..."]),
        ]),
        ..ScriptedRunner::default()
    };
    let mut sink = Vec::new();
    let outcome = provision::up(
        &runner,
        &VagrantConfig::default(),
        &no_hooks(),
        &RecordingReporter::default(),
        &mut sink,
    )
    .await
    .unwrap();

    assert!(outcome.already_running);
    assert_eq!(outcome.provision_code, Some(ExitCode(0)));
    assert_eq!(
        runner.commands(),
        ["vagrant up --provider=vmware_fusion", "vagrant provision"]
    );
    assert_eq!(
        String::from_utf8(sink).unwrap(),
        "Starting...\n==> default: Machine is already running.\nDone.\n\
         ==> default: Running provisioner: puppet...\n"
    );
}

#[tokio::test]
async fn test_up_uses_configured_program_and_provider() {
    let runner = ScriptedRunner::default();
    let vagrant = VagrantConfig {
        program: "/opt/vagrant/bin/vagrant".to_string(),
        provider: "virtualbox".to_string(),
    };
    provision::up(
        &runner,
        &vagrant,
        &no_hooks(),
        &RecordingReporter::default(),
        &mut Vec::new(),
    )
    .await
    .unwrap();
    assert_eq!(
        runner.commands(),
        ["/opt/vagrant/bin/vagrant up --provider=virtualbox"]
    );
}

#[tokio::test]
async fn test_up_nonzero_exit_is_returned_not_raised() {
    let runner = ScriptedRunner {
        codes: HashMap::from([("vagrant up", 1)]),
        ..ScriptedRunner::default()
    };
    let outcome = provision::up(
        &runner,
        &VagrantConfig::default(),
        &no_hooks(),
        &RecordingReporter::default(),
        &mut Vec::new(),
    )
    .await
    .unwrap();
    assert_eq!(outcome.up_code, ExitCode(1));
}

#[tokio::test]
async fn test_failed_prepare_hook_stops_before_vagrant() {
    let runner = ScriptedRunner {
        codes: HashMap::from([("rake spec_prep", 1)]),
        ..ScriptedRunner::default()
    };
    let err = provision::up(
        &runner,
        &VagrantConfig::default(),
        &hooks(),
        &RecordingReporter::default(),
        &mut Vec::new(),
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("rake spec_prep"), "got: {err}");
    assert_eq!(runner.commands(), ["rake spec_prep"]);
}

#[tokio::test]
async fn test_unlaunchable_vagrant_is_error() {
    let runner = ScriptedRunner {
        unlaunchable: vec!["vagrant"],
        ..ScriptedRunner::default()
    };
    let result = provision::up(
        &runner,
        &VagrantConfig::default(),
        &no_hooks(),
        &RecordingReporter::default(),
        &mut Vec::new(),
    )
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_clean_destroys_then_cleans_fixtures() {
    let runner = ScriptedRunner::default();
    let reporter = RecordingReporter::default();
    provision::clean(&runner, &VagrantConfig::default(), &hooks(), &reporter)
        .await
        .unwrap();
    assert_eq!(runner.commands(), ["vagrant destroy -f", "rake spec_clean"]);
    assert_eq!(reporter.warnings.get(), 0);
}

#[tokio::test]
async fn test_clean_continues_when_destroy_fails() {
    let runner = ScriptedRunner {
        codes: HashMap::from([("vagrant destroy", 1)]),
        ..ScriptedRunner::default()
    };
    let reporter = RecordingReporter::default();
    provision::clean(&runner, &VagrantConfig::default(), &hooks(), &reporter)
        .await
        .unwrap();
    assert_eq!(runner.commands(), ["vagrant destroy -f", "rake spec_clean"]);
    assert_eq!(reporter.warnings.get(), 1);
}

#[tokio::test]
async fn test_clean_without_hooks_only_destroys() {
    let runner = ScriptedRunner::default();
    provision::clean(
        &runner,
        &VagrantConfig::default(),
        &no_hooks(),
        &RecordingReporter::default(),
    )
    .await
    .unwrap();
    assert_eq!(runner.commands(), ["vagrant destroy -f"]);
}
