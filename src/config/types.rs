//! Configuration data model.

use std::fmt;
use std::path::PathBuf;

use super::defaults::{DEFAULT_BACKEND, DEFAULT_FALLBACK_ORDER};
use crate::backend::Backend;

/// Effective backend preferences for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Preferred backend; may not be installed on this host.
    pub default_backend: Backend,
    /// Probe order used when `default_backend` is unavailable. Holds every
    /// backend exactly once.
    pub fallback_order: [Backend; 3],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_backend: DEFAULT_BACKEND,
            fallback_order: DEFAULT_FALLBACK_ORDER,
        }
    }
}

/// Where the effective default backend came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `TXM_DEFAULT_BACKEND` was set to a valid name.
    Env,
    /// A `backend`/`default_backend` line in this file.
    File(PathBuf),
    /// Nothing usable found; compiled-in defaults apply.
    BuiltInDefaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Env => f.write_str("environment (TXM_DEFAULT_BACKEND)"),
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::BuiltInDefaults => f.write_str("built-in defaults"),
        }
    }
}

/// Non-fatal problems noticed while loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDiagnostics {
    pub warnings: Vec<String>,
}

/// Config plus the source it resolved from and any load warnings.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    pub diagnostics: ConfigDiagnostics,
}
