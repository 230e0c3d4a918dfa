//! Human-readable terminal renderer.

use std::io::{self, Write};

use owo_colors::{OwoColorize as _, Style};

use crate::domain::{ModuleConfig, SummaryKind, SummaryLabel, ValidationResult};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Write the batch summary. Never suppressed by `quiet`: the summary is
    /// the task's result.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn render_summary(
        &self,
        out: &mut impl Write,
        pattern: &str,
        label: SummaryLabel,
        result: &ValidationResult,
    ) -> io::Result<()> {
        for (kind, line) in result.summary(pattern, label) {
            let style = match kind {
                SummaryKind::Total => Style::new(),
                SummaryKind::Passed => self.ctx.styles.success,
                SummaryKind::Failed => self.ctx.styles.error,
                SummaryKind::FailedFiles => self.ctx.styles.dim,
            };
            writeln!(out, "{}", line.style(style))?;
        }
        Ok(())
    }

    /// Render the effective configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn render_config(
        &self,
        out: &mut impl Write,
        config: &ModuleConfig,
        path: &std::path::Path,
        loaded: bool,
    ) -> anyhow::Result<()> {
        let source = if loaded {
            path.display().to_string()
        } else {
            format!("defaults; {} not found", path.display())
        };
        writeln!(
            out,
            "{}",
            format!("# Configuration ({source})").style(self.ctx.styles.header)
        )?;
        write!(out, "{}", serde_yaml::to_string(config)?)?;
        Ok(())
    }
}
