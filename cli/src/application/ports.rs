//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::io::Write;
use std::path::Path;
use std::process::Output;

use anyhow::Result;

use crate::domain::{ExitCode, ModuleConfig};

/// Callback invoked once per line of streamed output, terminator stripped.
pub type LineObserver<'a> = &'a mut dyn FnMut(&str);

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// Commands are shell-interpretable strings. Every method fails with
/// `TaskError::Launch` when the process cannot be started; a process that
/// starts and exits non-zero is not an error.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a command to completion and capture its output.
    async fn run(&self, command: &str) -> Result<Output>;

    /// Run a command with inherited stdio and return its exit code.
    async fn run_status(&self, command: &str) -> Result<ExitCode>;

    /// Run a command, forwarding each line of its combined stdout/stderr to
    /// `sink` as it arrives and handing it to `observer`.
    ///
    /// Returns once both output streams are exhausted. The exit code is
    /// returned for information; the runner never treats it as an error.
    async fn run_streamed(
        &self,
        command: &str,
        sink: &mut dyn Write,
        observer: Option<LineObserver<'_>>,
    ) -> Result<ExitCode>;
}

// ── Batch Validation Ports ────────────────────────────────────────────────────

/// Per-file check routine used by the batch validator.
#[allow(async_fn_in_trait)]
pub trait FileCheck {
    /// Check one file and return the exit code of the external command that
    /// decided the outcome.
    ///
    /// # Errors
    ///
    /// Any error aborts the whole batch.
    async fn check(&self, file: &str) -> Result<ExitCode>;
}

/// Expands a glob pattern into concrete file paths.
pub trait FileMatcher {
    /// Matched files in expansion order.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::InvalidPattern` for a malformed pattern.
    fn expand(&self, pattern: &str) -> Result<Vec<String>>;
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts where the module configuration comes from.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when no file exists.
    fn load(&self) -> Result<ModuleConfig>;
    /// The file the configuration is read from.
    fn path(&self) -> &Path;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
