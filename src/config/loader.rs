//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use crate::backend::Backend;
use crate::error::ConfigError;

use super::env::backend_override_with;
use super::sources::read_config_text_with_sources;
use super::{Config, ConfigDiagnostics, ConfigSource, LoadedConfig};

/// Load configuration from `TXM_DEFAULT_BACKEND`, `~/.txm/config` and defaults.
///
/// Never fails: unreadable or malformed files degrade to defaults and are
/// reported through `diagnostics`.
pub fn load_config() -> LoadedConfig {
    load_config_from_sources(
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        dirs::home_dir,
    )
}

/// Load configuration through injected file, env and home-directory lookups.
pub fn load_config_from_sources<FRead, FEnv, FHome>(
    read_file: FRead,
    env_lookup: FEnv,
    home_dir: FHome,
) -> LoadedConfig
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FHome: Fn() -> Option<PathBuf>,
{
    let mut diagnostics = ConfigDiagnostics::default();
    let mut config = Config::default();
    let mut source = ConfigSource::BuiltInDefaults;

    let home = home_dir();
    if let Some((path, text)) =
        read_config_text_with_sources(home.as_deref(), &read_file, &mut diagnostics)
    {
        match parse_backend_setting(&text) {
            Ok(Some(backend)) => {
                config.default_backend = backend;
                source = ConfigSource::File(path);
            }
            Ok(None) => {}
            Err(e) => diagnostics.warnings.push(format!(
                "ignoring config file `{}`: {e}",
                path.display()
            )),
        }
    }

    if let Some(backend) = backend_override_with(&env_lookup, &mut diagnostics) {
        config.default_backend = backend;
        source = ConfigSource::Env;
    }

    LoadedConfig {
        config,
        source,
        diagnostics,
    }
}

/// Extract the default backend from `key=value` config text.
///
/// Blank lines and `#` comments are skipped; only `backend` and
/// `default_backend` keys are recognized and the last one wins. Values may be
/// wrapped in double quotes.
pub(super) fn parse_backend_setting(text: &str) -> Result<Option<Backend>, ConfigError> {
    let mut selected = None;
    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim().to_ascii_lowercase();
        if key == "backend" || key == "default_backend" {
            selected = Some(value.trim().trim_matches('"').parse::<Backend>()?);
        }
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FALLBACK_ORDER;
    use std::io;

    fn no_file(_: &Path) -> Result<String, io::Error> {
        Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
    }

    fn home() -> Option<PathBuf> {
        Some(PathBuf::from("/home/dev"))
    }

    #[test]
    fn defaults_without_file_or_env() {
        let loaded = load_config_from_sources(no_file, |_| None, home);
        assert_eq!(loaded.config.default_backend, Backend::Tmux);
        assert_eq!(loaded.config.fallback_order, DEFAULT_FALLBACK_ORDER);
        assert_eq!(loaded.source, ConfigSource::BuiltInDefaults);
        assert!(loaded.diagnostics.warnings.is_empty());
    }

    #[test]
    fn file_sets_default_backend() {
        let read = |_: &Path| -> Result<String, io::Error> {
            Ok("# comment\n\ndefault_backend = screen\n".into())
        };
        let loaded = load_config_from_sources(read, |_| None, home);
        assert_eq!(loaded.config.default_backend, Backend::Screen);
        assert_eq!(
            loaded.source,
            ConfigSource::File(PathBuf::from("/home/dev/.txm/config"))
        );
    }

    #[test]
    fn env_override_beats_file() {
        let read = |_: &Path| -> Result<String, io::Error> { Ok("backend=screen\n".into()) };
        let env = |name: &str| (name == "TXM_DEFAULT_BACKEND").then(|| "zellij".to_string());
        let loaded = load_config_from_sources(read, env, home);
        assert_eq!(loaded.config.default_backend, Backend::Zellij);
        assert_eq!(loaded.source, ConfigSource::Env);
    }

    #[test]
    fn env_override_without_file() {
        let env = |name: &str| (name == "TXM_DEFAULT_BACKEND").then(|| "zellij".to_string());
        let loaded = load_config_from_sources(no_file, env, home);
        assert_eq!(loaded.config.default_backend, Backend::Zellij);
        assert_eq!(loaded.config.fallback_order, DEFAULT_FALLBACK_ORDER);
    }

    #[test]
    fn invalid_env_falls_back_to_file() {
        let read = |_: &Path| -> Result<String, io::Error> { Ok("backend=screen\n".into()) };
        let env = |_: &str| Some("wezterm".to_string());
        let loaded = load_config_from_sources(read, env, home);
        assert_eq!(loaded.config.default_backend, Backend::Screen);
        assert_eq!(loaded.diagnostics.warnings.len(), 1);
    }

    #[test]
    fn corrupt_file_degrades_to_defaults() {
        let read = |_: &Path| -> Result<String, io::Error> { Ok("backend=tmuxx\n".into()) };
        let loaded = load_config_from_sources(read, |_| None, home);
        assert_eq!(loaded.config, Config::default());
        assert_eq!(loaded.source, ConfigSource::BuiltInDefaults);
        assert!(loaded.diagnostics.warnings[0].contains("tmuxx"));
    }

    #[test]
    fn parse_ignores_unknown_keys_and_lines_without_equals() {
        let text = "theme=dark\nnot a setting\nBACKEND=\"Zellij\"\n";
        assert_eq!(parse_backend_setting(text).unwrap(), Some(Backend::Zellij));
    }

    #[test]
    fn parse_last_assignment_wins() {
        let text = "backend=tmux\ndefault_backend=screen\n";
        assert_eq!(parse_backend_setting(text).unwrap(), Some(Backend::Screen));
    }

    #[test]
    fn parse_empty_text_has_no_setting() {
        assert_eq!(parse_backend_setting("").unwrap(), None);
    }
}
