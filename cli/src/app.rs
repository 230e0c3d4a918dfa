//! Application context: unified state passed to every command handler.
//!
//! `AppContext` is built once from the top-level flags: output settings,
//! the loaded module configuration, and the process runner.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::ModuleConfig;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::output::{HumanRenderer, OutputContext, TerminalReporter};

/// Environment variables that imply `--yes`.
const NON_INTERACTIVE_ENV: &[&str] = &["CI", "MODHELPER_YES"];

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Skip interactive prompts (also set by `CI` / `MODHELPER_YES` env vars).
    pub yes: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Behaviour options.
    pub behaviour: BehaviourFlags,
    /// Explicit config file (`--config` / `MODHELPER_CONFIG`).
    pub config: Option<PathBuf>,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Runs every external command.
    pub runner: TokioCommandRunner,
    /// Effective module configuration.
    pub config: ModuleConfig,
    /// Where the configuration was (or would have been) read from.
    pub config_path: PathBuf,
    /// `false` when no config file existed and defaults are in use.
    pub config_loaded: bool,
    /// When `true`, skip interactive prompts and use defaults.
    pub non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read, parsed or validated.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let store = YamlConfigStore::new(flags.config.clone());
        let config = store.load()?;
        let env_set = NON_INTERACTIVE_ENV
            .iter()
            .any(|var| std::env::var_os(var).is_some());

        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            runner: TokioCommandRunner,
            config,
            config_path: store.path().to_path_buf(),
            config_loaded: store.path().exists(),
            non_interactive: is_non_interactive(flags.behaviour.yes, env_set),
        })
    }

    #[must_use]
    pub fn renderer(&self) -> HumanRenderer<'_> {
        HumanRenderer::new(&self.output)
    }

    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// Ask the user for confirmation.
    ///
    /// When `non_interactive` is `true` (CI, `--yes` flag, or `MODHELPER_YES`
    /// env), returns `default` immediately without prompting.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.non_interactive {
            return Ok(default);
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }
}

/// Prompts are skipped when `--yes` is given or a CI-style variable is set.
#[must_use]
pub fn is_non_interactive(yes_flag: bool, env_set: bool) -> bool {
    yes_flag || env_set
}
