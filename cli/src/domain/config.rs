//! Module configuration schema and validators.
//!
//! Pure functions only; no I/O.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Placeholder replaced by the shell-quoted file path in command templates.
pub const FILE_PLACEHOLDER: &str = "{file}";

/// Default config file, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".modhelper.yaml";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `.modhelper.yaml`.
///
/// Every section falls back to its default when absent, so an empty file
/// behaves exactly like no file at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    /// Validation groups, checked in declaration order.
    pub validate: Vec<ValidationGroup>,
    pub lint: LintConfig,
    pub vagrant: VagrantConfig,
    pub fixtures: FixtureHooks,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            validate: default_groups(),
            lint: LintConfig::default(),
            vagrant: VagrantConfig::default(),
            fixtures: FixtureHooks::default(),
        }
    }
}

/// A file pattern and the checker command run once per matched file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationGroup {
    pub name: String,
    pub pattern: String,
    /// Shell command template; must contain `{file}`.
    pub command: String,
}

impl ValidationGroup {
    fn new(name: &str, pattern: &str, command: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            command: command.to_string(),
        }
    }
}

fn default_groups() -> Vec<ValidationGroup> {
    vec![
        ValidationGroup::new(
            "manifests",
            "{manifests,tests}/**/*.pp",
            "puppet parser validate {file}",
        ),
        ValidationGroup::new("ruby", "lib/**/*.rb", "ruby -c {file} > /dev/null"),
        ValidationGroup::new(
            "templates",
            "templates/**/*.erb",
            "erb -P -x -T '-' {file} | ruby -c > /dev/null",
        ),
    ]
}

/// puppet-lint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    pub pattern: String,
    /// Linter executable, run once per file.
    pub command: String,
    /// Checks passed as `--no-<check>-check`.
    pub disabled_checks: Vec<String>,
    /// Files matching any of these patterns are not linted.
    pub ignore_paths: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            pattern: "**/*.pp".to_string(),
            command: "puppet-lint".to_string(),
            disabled_checks: vec!["80chars".to_string(), "class_parameter_defaults".to_string()],
            ignore_paths: vec!["spec/**/*.pp".to_string(), "pkg/**/*.pp".to_string()],
        }
    }
}

impl LintConfig {
    /// Per-file command template with the disabled checks expanded.
    #[must_use]
    pub fn command_template(&self) -> String {
        let mut parts = vec![self.command.clone()];
        parts.extend(
            self.disabled_checks
                .iter()
                .map(|check| format!("--no-{check}-check")),
        );
        parts.push(FILE_PLACEHOLDER.to_string());
        parts.join(" ")
    }
}

/// Virtualization CLI settings for the test VM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VagrantConfig {
    pub program: String,
    pub provider: String,
}

impl Default for VagrantConfig {
    fn default() -> Self {
        Self {
            program: "vagrant".to_string(),
            provider: "vmware_fusion".to_string(),
        }
    }
}

impl VagrantConfig {
    #[must_use]
    pub fn up_command(&self) -> String {
        format!("{} up --provider={}", self.program, self.provider)
    }

    #[must_use]
    pub fn provision_command(&self) -> String {
        format!("{} provision", self.program)
    }

    #[must_use]
    pub fn destroy_command(&self) -> String {
        format!("{} destroy -f", self.program)
    }
}

/// Commands run around the VM lifecycle to set up and tear down test fixtures.
/// Set a hook to `null` to skip it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureHooks {
    pub prepare: Option<String>,
    pub cleanup: Option<String>,
}

impl Default for FixtureHooks {
    fn default() -> Self {
        Self {
            prepare: Some("rake spec_prep".to_string()),
            cleanup: Some("rake spec_clean".to_string()),
        }
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

impl ModuleConfig {
    /// Check structural invariants that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for group in &self.validate {
            if group.name.is_empty() {
                return Err(ConfigError::Empty {
                    field: "validate[].name",
                });
            }
            if group.pattern.is_empty() {
                return Err(ConfigError::Empty {
                    field: "validate[].pattern",
                });
            }
            if !group.command.contains(FILE_PLACEHOLDER) {
                return Err(ConfigError::MissingPlaceholder {
                    name: group.name.clone(),
                    command: group.command.clone(),
                });
            }
            if !seen.insert(group.name.as_str()) {
                return Err(ConfigError::DuplicateGroup(group.name.clone()));
            }
        }
        if self.lint.pattern.is_empty() {
            return Err(ConfigError::Empty {
                field: "lint.pattern",
            });
        }
        if self.lint.command.is_empty() {
            return Err(ConfigError::Empty {
                field: "lint.command",
            });
        }
        if self.vagrant.program.is_empty() {
            return Err(ConfigError::Empty {
                field: "vagrant.program",
            });
        }
        Ok(())
    }

    /// Resolve group names to groups, keeping config order.
    /// An empty selection means every group.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownGroup` for a name that is not defined.
    pub fn select_groups(&self, names: &[String]) -> Result<Vec<&ValidationGroup>, ConfigError> {
        if let Some(unknown) = names
            .iter()
            .find(|name| !self.validate.iter().any(|g| &g.name == *name))
        {
            return Err(ConfigError::UnknownGroup {
                name: unknown.clone(),
                valid: self
                    .validate
                    .iter()
                    .map(|g| g.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }
        Ok(self
            .validate
            .iter()
            .filter(|g| names.is_empty() || names.contains(&g.name))
            .collect())
    }
}

/// Substitute the shell-quoted `file` into every `{file}` of `template`.
#[must_use]
pub fn render_command(template: &str, file: &str) -> String {
    template.replace(FILE_PLACEHOLDER, &shell_words::quote(file))
}

// ── Unit tests ───────────────────────────────────────────────────────────────
