//! `modhelper validate`: syntax-check manifests, Ruby files and templates.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::{FileCheck, FileMatcher, ProgressReporter};
use crate::application::services::batch_validate::{self, CommandCheck};
use crate::domain::{SummaryLabel, TaskError, ValidationResult};
use crate::infra::glob::GlobMatcher;
use crate::output::HumanRenderer;

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Only run the named group (repeatable; default: all groups)
    #[arg(short, long = "group", value_name = "NAME")]
    pub groups: Vec<String>,
}

/// Validate one pattern and print its summary.
///
/// Nothing is printed if a check routine fails part-way through.
///
/// # Errors
///
/// Returns an error if the pattern is invalid, a check routine fails, or
/// writing the summary fails.
pub async fn validate_pattern(
    out: &mut impl Write,
    renderer: &HumanRenderer<'_>,
    pattern: &str,
    label: SummaryLabel,
    matcher: &impl FileMatcher,
    check: &impl FileCheck,
) -> Result<ValidationResult> {
    let result = batch_validate::validate(pattern, matcher, check).await?;
    renderer.render_summary(out, pattern, label, &result)?;
    Ok(result)
}

/// Run `modhelper validate`.
///
/// Every selected group is validated and summarized before failures are
/// turned into an error.
///
/// # Errors
///
/// Returns an error if a group is unknown, a checker cannot be launched, or
/// any file failed validation.
pub async fn run(app: &AppContext, args: &ValidateArgs) -> Result<()> {
    let groups = app.config.select_groups(&args.groups)?;
    let matcher = GlobMatcher::new(".");
    let renderer = app.renderer();
    let reporter = app.reporter();
    let mut stdout = std::io::stdout();

    let mut failed = 0;
    for group in groups {
        reporter.step(&format!("Validating {} ({})", group.name, group.pattern));
        let check = CommandCheck::new(&app.runner, group.command.as_str());
        let result = validate_pattern(
            &mut stdout,
            &renderer,
            &group.pattern,
            SummaryLabel::Syntax,
            &matcher,
            &check,
        )
        .await?;
        failed += result.failed.len();
    }

    if failed > 0 {
        return Err(TaskError::ValidationFailed {
            task: "validation",
            count: failed,
        }
        .into());
    }
    Ok(())
}
