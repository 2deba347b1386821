//! Config persistence for `txm config set`.
//!
//! Only `default_backend` is written; the file is replaced wholesale.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

use super::defaults::CONFIG_FILE_HEADER;
use super::init::default_config_path;
use super::Config;

/// Write `config` to `~/.txm/config` and return that path.
pub fn save_config(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = default_config_path().ok_or_else(|| {
        ConfigError::Invalid("unable to resolve home directory for ~/.txm/config".to_string())
    })?;
    save_config_at(&path, config)?;
    Ok(path)
}

/// Write `config` to an explicit path, creating the parent directory.
pub fn save_config_at(path: &Path, config: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_config_file(config))?;
    debug!(path = %path.display(), backend = %config.default_backend, "saved config");
    Ok(())
}

fn render_config_file(config: &Config) -> String {
    format!(
        "{CONFIG_FILE_HEADER}default_backend={}\n",
        config.default_backend
    )
}
