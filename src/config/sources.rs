//! Config-file discovery.
//!
//! Candidates in order: `~/.txm/config`, `~/.txm/config.txt`, `~/.txmrc`.
//! The first file that exists is the only one read.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::defaults::{ALT_CONFIG_FILE_NAME, RC_FILE_NAME};
use super::init::{config_dir_in, config_path_in};
use super::ConfigDiagnostics;

/// Candidate config files under `home`, highest precedence first.
pub(super) fn candidate_paths(home: &Path) -> [PathBuf; 3] {
    [
        config_path_in(home),
        config_dir_in(home).join(ALT_CONFIG_FILE_NAME),
        home.join(RC_FILE_NAME),
    ]
}

/// Read the first existing candidate file.
///
/// Missing files are skipped silently. Any other read failure stops the
/// search and is recorded as a warning so the caller falls back to defaults.
pub(super) fn read_config_text_with_sources<FRead>(
    home: Option<&Path>,
    read_file: &FRead,
    diagnostics: &mut ConfigDiagnostics,
) -> Option<(PathBuf, String)>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
{
    let Some(home) = home else {
        debug!("home directory unknown; skipping config file");
        return None;
    };
    for path in candidate_paths(home) {
        match read_file(&path) {
            Ok(text) => {
                debug!(path = %path.display(), "read config file");
                return Some((path, text));
            }
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => {
                diagnostics.warnings.push(format!(
                    "failed to read config file `{}`: {e}; using defaults",
                    path.display()
                ));
                return None;
            }
        }
    }
    None
}
