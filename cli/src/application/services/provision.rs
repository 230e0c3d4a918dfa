//! Application service: test VM power-on, provisioning and teardown.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::io::Write;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, LineObserver, ProgressReporter};
use crate::domain::{ExitCode, FixtureHooks, VagrantConfig, is_already_running};

/// What `up` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpOutcome {
    /// `vagrant up` reported the machine was already running.
    pub already_running: bool,
    pub up_code: ExitCode,
    /// Set when a follow-up `vagrant provision` ran.
    pub provision_code: Option<ExitCode>,
}

/// Prepare fixtures, power on the VM, and re-provision it if it was
/// already running.
///
/// `vagrant up` only provisions a machine it creates or boots, so a machine
/// that was already up is provisioned explicitly. Both commands stream their
/// output to `sink` as it arrives.
///
/// # Errors
///
/// Returns an error if the fixture hook fails or exits non-zero, or if a
/// vagrant command cannot be launched.
pub async fn up(
    runner: &impl CommandRunner,
    vagrant: &VagrantConfig,
    hooks: &FixtureHooks,
    reporter: &impl ProgressReporter,
    sink: &mut dyn Write,
) -> Result<UpOutcome> {
    if let Some(prepare) = &hooks.prepare {
        reporter.step("Preparing test fixtures...");
        run_hook(runner, prepare).await?;
    }

    reporter.step(&format!("Powering on test VM ({})...", vagrant.provider));
    let mut already_running = false;
    let mut watch = |line: &str| {
        if is_already_running(line) {
            already_running = true;
        }
    };
    let observer: LineObserver<'_> = &mut watch;
    let up_code = runner
        .run_streamed(&vagrant.up_command(), sink, Some(observer))
        .await?;
    if !up_code.success() {
        tracing::warn!(code = up_code.0, "vagrant up exited non-zero");
    }

    let provision_code = if already_running {
        reporter.step("VM already running, provisioning...");
        Some(
            runner
                .run_streamed(&vagrant.provision_command(), sink, None)
                .await?,
        )
    } else {
        None
    };

    Ok(UpOutcome {
        already_running,
        up_code,
        provision_code,
    })
}

/// Destroy the VM and clean up fixtures.
///
/// The destroy output is captured and discarded; a non-zero exit is reported
/// as a warning since there may be no VM to destroy.
///
/// # Errors
///
/// Returns an error if a command cannot be launched or the cleanup hook
/// exits non-zero.
pub async fn clean(
    runner: &impl CommandRunner,
    vagrant: &VagrantConfig,
    hooks: &FixtureHooks,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    reporter.step("Destroying test VM...");
    let output = runner.run(&vagrant.destroy_command()).await?;
    if output.status.success() {
        reporter.success("Test VM destroyed");
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::debug!(stderr = %stderr.trim(), "vagrant destroy failed");
        reporter.warn("vagrant destroy exited non-zero; continuing with fixture cleanup");
    }

    if let Some(cleanup) = &hooks.cleanup {
        reporter.step("Cleaning test fixtures...");
        run_hook(runner, cleanup).await?;
    }
    Ok(())
}

async fn run_hook(runner: &impl CommandRunner, command: &str) -> Result<()> {
    let code = runner
        .run_status(command)
        .await
        .with_context(|| format!("running fixture hook `{command}`"))?;
    anyhow::ensure!(
        code.success(),
        "fixture hook `{command}` exited with status {code}"
    );
    Ok(())
}
