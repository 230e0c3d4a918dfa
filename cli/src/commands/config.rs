//! `modhelper config`: print the effective configuration.

use anyhow::Result;

use crate::app::AppContext;

/// Run `modhelper config`.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized or written.
pub fn run(app: &AppContext) -> Result<()> {
    app.renderer().render_config(
        &mut std::io::stdout(),
        &app.config,
        &app.config_path,
        app.config_loaded,
    )
}
