//! Config-path helpers.

use std::path::{Path, PathBuf};

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

/// Return the per-user txm directory (`~/.txm`).
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| config_dir_in(&home))
}

/// Return the file written by `config set` (`~/.txm/config`).
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

pub(super) fn config_dir_in(home: &Path) -> PathBuf {
    home.join(CONFIG_DIR_NAME)
}

pub(super) fn config_path_in(home: &Path) -> PathBuf {
    config_dir_in(home).join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_lives_under_dot_txm() {
        let path = config_path_in(Path::new("/home/dev"));
        assert_eq!(path, PathBuf::from("/home/dev/.txm/config"));
    }
}
