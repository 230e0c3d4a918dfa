//! Application service: manifest lint use-case.

use anyhow::Result;

use crate::application::ports::{CommandRunner, FileMatcher};
use crate::application::services::batch_validate::{self, CommandCheck};
use crate::domain::{LintConfig, ValidationResult};

/// Run the linter once per manifest matched by `config.pattern`.
///
/// Ignore paths are applied by `matcher`, which the caller builds from
/// `config.ignore_paths`.
///
/// # Errors
///
/// Returns an error if the pattern is invalid or the linter cannot be launched.
pub async fn lint(
    config: &LintConfig,
    matcher: &impl FileMatcher,
    runner: &impl CommandRunner,
) -> Result<ValidationResult> {
    let check = CommandCheck::new(runner, config.command_template());
    batch_validate::validate(&config.pattern, matcher, &check).await
}
