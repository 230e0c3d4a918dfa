//! Infrastructure implementation of the `ConfigStore` port.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::ModuleConfig;
use crate::domain::config::DEFAULT_CONFIG_FILE;

/// Production implementation of `ConfigStore` that reads a YAML file on disk.
pub struct YamlConfigStore {
    path: PathBuf,
    /// Set when the path was given explicitly; a missing file is then an error.
    explicit: bool,
}

impl YamlConfigStore {
    /// Use `path` if given (from `--config` / `MODHELPER_CONFIG`), otherwise
    /// `.modhelper.yaml` in the working directory.
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self {
                path,
                explicit: true,
            },
            None => Self {
                path: PathBuf::from(DEFAULT_CONFIG_FILE),
                explicit: false,
            },
        }
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<ModuleConfig> {
        if !self.explicit && !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(ModuleConfig::default());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("cannot read {}", self.path.display()))?;
        let config: ModuleConfig = if content.trim().is_empty() {
            ModuleConfig::default()
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("cannot parse {}", self.path.display()))?
        };
        config
            .validate()
            .with_context(|| format!("invalid config {}", self.path.display()))?;
        Ok(config)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
