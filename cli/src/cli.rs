//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;

/// Validation, lint and test-VM tasks for configuration-management modules
#[derive(Parser)]
#[command(
    name = "modhelper",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress progress output (summaries are always printed)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,

    /// Skip confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Config file (default: ./.modhelper.yaml)
    #[arg(long, global = true, env = "MODHELPER_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate manifests, Ruby files and ERB templates
    Validate(commands::validate::ValidateArgs),

    /// Lint manifests with puppet-lint
    Lint,

    /// Power on and provision the test VM
    Vagrant(commands::vagrant::VagrantArgs),

    /// Destroy the test VM and clean up fixtures
    #[command(name = "vagrant-clean")]
    VagrantClean,

    /// Show the effective configuration
    Config,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            quiet,
            no_color,
            yes,
            config,
            command,
        } = self;
        let app = AppContext::new(&AppFlags {
            output: OutputFlags { no_color, quiet },
            behaviour: BehaviourFlags { yes },
            config,
        })?;
        match command {
            Command::Validate(args) => commands::validate::run(&app, &args).await,
            Command::Lint => commands::lint::run(&app).await,
            Command::Vagrant(args) => commands::vagrant::run(&app, &args).await,
            Command::VagrantClean => commands::vagrant::clean(&app).await,
            Command::Config => commands::config::run(&app),
        }
    }
}
