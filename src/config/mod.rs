//! Backend preference loading and persistence.
//!
//! Precedence (highest wins):
//! 1. `TXM_DEFAULT_BACKEND`
//! 2. `~/.txm/config` (then `~/.txm/config.txt`, then `~/.txmrc`)
//! 3. Built-in defaults (tmux; fallback order tmux, screen, zellij)

mod defaults;
mod env;
mod init;
mod loader;
mod persist;
mod sources;
mod types;

pub use defaults::{BACKEND_ENV_VAR, DEFAULT_BACKEND, DEFAULT_FALLBACK_ORDER};
pub use init::{config_dir, default_config_path};
pub use loader::{load_config, load_config_from_sources};
pub use persist::{save_config, save_config_at};
pub use types::{Config, ConfigDiagnostics, ConfigSource, LoadedConfig};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Backend;
    use crate::testsupport::TestTempDir;

    #[test]
    fn default_fallback_order_holds_every_backend_once() {
        let mut seen = DEFAULT_FALLBACK_ORDER.to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), Backend::ALL.len());
        for backend in Backend::ALL {
            assert!(DEFAULT_FALLBACK_ORDER.contains(&backend));
        }
    }

    #[test]
    fn set_then_load_returns_saved_backend() {
        let tmp = TestTempDir::new("config-roundtrip");
        let home = tmp.path().to_path_buf();
        let config = Config {
            default_backend: Backend::Screen,
            ..Config::default()
        };
        save_config_at(&home.join(".txm").join("config"), &config).unwrap();

        let loaded = load_config_from_sources(
            |path| std::fs::read_to_string(path),
            |_| None,
            || Some(home.clone()),
        );
        assert_eq!(loaded.config.default_backend.to_string(), "screen");
        assert_eq!(loaded.config.fallback_order, DEFAULT_FALLBACK_ORDER);
    }
}
