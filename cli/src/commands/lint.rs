//! `modhelper lint`: run puppet-lint over the module's manifests.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::ProgressReporter;
use crate::application::services::lint;
use crate::domain::{SummaryLabel, TaskError};
use crate::infra::glob::GlobMatcher;

/// Run `modhelper lint`.
///
/// # Errors
///
/// Returns an error if an ignore pattern is invalid, the linter cannot be
/// launched, or any manifest has lint failures.
pub async fn run(app: &AppContext) -> Result<()> {
    let config = &app.config.lint;
    let matcher = GlobMatcher::new(".").with_ignore(&config.ignore_paths)?;

    app.reporter()
        .step(&format!("Linting {} ({})", config.pattern, config.command));
    let result = lint::lint(config, &matcher, &app.runner).await?;
    app.renderer().render_summary(
        &mut std::io::stdout(),
        &config.pattern,
        SummaryLabel::Lint,
        &result,
    )?;

    if !result.is_success() {
        return Err(TaskError::ValidationFailed {
            task: "lint",
            count: result.failed.len(),
        }
        .into());
    }
    Ok(())
}
