//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Task errors ───────────────────────────────────────────────────────────────

/// Errors raised while running a task.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The external command could not be started at all.
    #[error("failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid file pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// One or more files failed validation. Raised after every summary is printed.
    #[error("{count} file(s) failed {task}")]
    ValidationFailed { task: &'static str, count: usize },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to the module configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("command for '{name}' must contain the {{file}} placeholder: {command}")]
    MissingPlaceholder { name: String, command: String },

    #[error("validation group '{0}' is defined more than once")]
    DuplicateGroup(String),

    #[error("unknown validation group '{name}'\n\nDefined groups: {valid}")]
    UnknownGroup { name: String, valid: String },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}
