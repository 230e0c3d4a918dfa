//! Domain layer: pure types, validation and summary formatting.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod pattern;
pub mod provision;
pub mod validation;

pub use config::{FixtureHooks, LintConfig, ModuleConfig, VagrantConfig, ValidationGroup};
pub use error::{ConfigError, TaskError};
pub use provision::{ALREADY_RUNNING_PATTERN, is_already_running};
pub use validation::{ExitCode, SummaryKind, SummaryLabel, ValidationResult};
