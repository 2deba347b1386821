//! Built-in configuration values.

use crate::backend::Backend;

/// Backend used when neither env nor file picks one.
pub const DEFAULT_BACKEND: Backend = Backend::Tmux;
/// Probe order when the preferred backend is not installed.
pub const DEFAULT_FALLBACK_ORDER: [Backend; 3] = [Backend::Tmux, Backend::Screen, Backend::Zellij];
/// Environment variable that overrides the default backend.
pub const BACKEND_ENV_VAR: &str = "TXM_DEFAULT_BACKEND";

/// Per-user directory under `$HOME` holding txm state.
pub(super) const CONFIG_DIR_NAME: &str = ".txm";
/// Primary config file inside [`CONFIG_DIR_NAME`].
pub(super) const CONFIG_FILE_NAME: &str = "config";
/// Alternate file name accepted inside [`CONFIG_DIR_NAME`].
pub(super) const ALT_CONFIG_FILE_NAME: &str = "config.txt";
/// Dotfile directly under `$HOME`, checked last.
pub(super) const RC_FILE_NAME: &str = ".txmrc";

/// Header written above the persisted `default_backend` line.
pub(super) const CONFIG_FILE_HEADER: &str =
    "# txm configuration file\n# Set the default backend (tmux, zellij, screen)\n";
