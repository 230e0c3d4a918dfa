//! Validation outcome types and the console summary format.

use std::fmt;

/// Outcome of a completed external process.
///
/// Always the plain exit code (`0..=255` for a normal exit), never the raw
/// wait status. Signal termination is mapped to `128 + signal` by the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(pub i32);

impl ExitCode {
    #[must_use]
    pub fn success(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Word used in the OK/FAILURE summary lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLabel {
    Syntax,
    Lint,
}

impl SummaryLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Syntax => "Syntax",
            Self::Lint => "Lint",
        }
    }
}

/// Files that passed and failed a batch check, in match order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub succeeded: Vec<String>,
    pub failed: Vec<String>,
}

impl ValidationResult {
    /// Classify `file` by the exit code its check produced.
    pub fn record(&mut self, file: impl Into<String>, code: ExitCode) {
        if code.success() {
            self.succeeded.push(file.into());
        } else {
            self.failed.push(file.into());
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Summary lines printed after a batch completes.
    ///
    /// ```text
    /// Total: 3 files match lib/**/*.rb
    /// Syntax OK: 2
    /// Syntax FAILURE: 1
    /// lib/broken.rb
    /// ```
    ///
    /// The OK line is omitted when nothing passed; the last two lines are
    /// omitted when nothing failed.
    #[must_use]
    pub fn summary(&self, pattern: &str, label: SummaryLabel) -> Vec<(SummaryKind, String)> {
        let label = label.as_str();
        let mut lines = vec![(
            SummaryKind::Total,
            format!("Total: {} files match {pattern}", self.total()),
        )];
        if !self.succeeded.is_empty() {
            lines.push((
                SummaryKind::Passed,
                format!("{label} OK: {}", self.succeeded.len()),
            ));
        }
        if !self.failed.is_empty() {
            lines.push((
                SummaryKind::Failed,
                format!("{label} FAILURE: {}", self.failed.len()),
            ));
            lines.push((SummaryKind::FailedFiles, self.failed.join(", ")));
        }
        lines
    }

    /// Plain text of [`Self::summary`].
    #[must_use]
    pub fn summary_lines(&self, pattern: &str, label: SummaryLabel) -> Vec<String> {
        self.summary(pattern, label)
            .into_iter()
            .map(|(_, line)| line)
            .collect()
    }
}

/// Which summary line a piece of text is, for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    Total,
    Passed,
    Failed,
    FailedFiles,
}
