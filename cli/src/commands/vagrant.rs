//! `modhelper vagrant` / `modhelper vagrant-clean`: test VM lifecycle.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::provision;

/// Arguments for the vagrant command.
#[derive(Args)]
pub struct VagrantArgs {
    /// Vagrant provider (overrides `vagrant.provider` in the config)
    #[arg(long, value_name = "NAME")]
    pub provider: Option<String>,
}

/// Run `modhelper vagrant`.
///
/// # Errors
///
/// Returns an error if fixtures cannot be prepared, vagrant cannot be
/// launched, or the final vagrant command exits non-zero.
pub async fn run(app: &AppContext, args: &VagrantArgs) -> Result<()> {
    let mut vagrant = app.config.vagrant.clone();
    if let Some(provider) = &args.provider {
        vagrant.provider.clone_from(provider);
    }

    let outcome = provision::up(
        &app.runner,
        &vagrant,
        &app.config.fixtures,
        &app.reporter(),
        &mut std::io::stdout(),
    )
    .await?;

    if let Some(code) = outcome.provision_code {
        anyhow::ensure!(
            code.success(),
            "`{}` exited with status {code}",
            vagrant.provision_command()
        );
        app.output.success("Test VM provisioned");
    } else {
        anyhow::ensure!(
            outcome.up_code.success(),
            "`{}` exited with status {}",
            vagrant.up_command(),
            outcome.up_code
        );
        app.output.success("Test VM is up");
    }
    Ok(())
}

/// Run `modhelper vagrant-clean`.
///
/// # Errors
///
/// Returns an error if the prompt fails, a command cannot be launched, or
/// the cleanup hook fails.
pub async fn clean(app: &AppContext) -> Result<()> {
    if !app.confirm("Destroy the test VM and remove fixtures?", true)? {
        app.output.warn("Aborted.");
        return Ok(());
    }
    provision::clean(
        &app.runner,
        &app.config.vagrant,
        &app.config.fixtures,
        &app.reporter(),
    )
    .await
}
