//! Application service: batch validation use-case.
//!
//! Expands a pattern, runs one check per matched file, and classifies each
//! file by the exit code that check returns. Imports only from
//! `crate::domain` and `crate::application::ports`.

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, FileCheck, FileMatcher};
use crate::domain::config::render_command;
use crate::domain::{ExitCode, ValidationResult};

/// Run `check` against every file matched by `pattern`, in expansion order.
///
/// Files are classified only after the whole batch completes; the caller
/// prints the summary from the returned result.
///
/// # Errors
///
/// Returns an error if the pattern is invalid, or immediately when a check
/// routine fails for any file. No partial result is returned in that case.
pub async fn validate(
    pattern: &str,
    matcher: &impl FileMatcher,
    check: &impl FileCheck,
) -> Result<ValidationResult> {
    let files = matcher.expand(pattern)?;
    tracing::debug!(pattern, matched = files.len(), "expanded file pattern");

    let mut result = ValidationResult::default();
    for file in files {
        let code = check
            .check(&file)
            .await
            .with_context(|| format!("check routine failed for {file}"))?;
        tracing::debug!(file = %file, code = code.0, "file checked");
        result.record(file, code);
    }
    Ok(result)
}

/// `FileCheck` that renders a command template per file and runs it with
/// inherited stdio, so checker diagnostics reach the terminal.
pub struct CommandCheck<'a, R: CommandRunner> {
    runner: &'a R,
    template: String,
}

impl<'a, R: CommandRunner> CommandCheck<'a, R> {
    /// `template` must contain `{file}`; it is replaced by the quoted path.
    #[must_use]
    pub fn new(runner: &'a R, template: impl Into<String>) -> Self {
        Self {
            runner,
            template: template.into(),
        }
    }
}

impl<R: CommandRunner> FileCheck for CommandCheck<'_, R> {
    async fn check(&self, file: &str) -> Result<ExitCode> {
        self.runner
            .run_status(&render_command(&self.template, file))
            .await
    }
}
