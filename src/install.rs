//! Installation layout detection and `txm uninstall`.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::UpdateError;

const SYSTEM_BIN_DIR: &str = "/usr/local/bin";
const SYSTEM_MAN_DIR: &str = "/usr/local/share/man/man1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallKind {
    /// Installed under `/usr/local/bin`.
    System,
    /// Installed under `~/.local/bin`.
    User,
}

impl std::fmt::Display for InstallKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::System => "system",
            Self::User => "user",
        })
    }
}

/// Files and directories belonging to one txm installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    pub kind: InstallKind,
    pub binary: PathBuf,
    pub man_page: PathBuf,
    pub config_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub data_dir: PathBuf,
    pub completion_files: Vec<PathBuf>,
}

/// Classify an executable path. Anything outside the two known bin
/// directories is an unknown installation.
pub fn detect_installation(exe: &Path, home: &Path) -> Result<Installation, UpdateError> {
    let (kind, man_dir) = if exe.starts_with(SYSTEM_BIN_DIR) {
        (InstallKind::System, PathBuf::from(SYSTEM_MAN_DIR))
    } else if exe.starts_with(home.join(".local/bin")) {
        (InstallKind::User, home.join(".local/share/man/man1"))
    } else {
        return Err(UpdateError::Install(format!(
            "unknown installation type for `{}`",
            exe.display()
        )));
    };
    Ok(Installation {
        kind,
        binary: exe.to_path_buf(),
        man_page: man_dir.join("txm.1"),
        config_dir: home.join(".txm"),
        cache_dir: home.join(".cache/txm"),
        data_dir: home.join(".local/share/txm"),
        completion_files: vec![
            home.join(".local/share/bash-completion/completions/txm"),
            home.join(".config/fish/completions/txm.fish"),
            home.join(".zsh/completion/_txm"),
        ],
    })
}

/// Detect the installation the running executable belongs to.
pub fn current_installation() -> Result<Installation, UpdateError> {
    let exe = std::env::current_exe()?;
    let home = dirs::home_dir()
        .ok_or_else(|| UpdateError::Install("unable to resolve home directory".to_string()))?;
    detect_installation(&exe, &home)
}

/// Remove the binary and every auxiliary file of `installation`.
///
/// The binary must be removable; auxiliary paths that are already gone are
/// skipped. Returns the paths actually removed.
pub fn uninstall(installation: &Installation) -> Result<Vec<PathBuf>, UpdateError> {
    match std::fs::remove_file(&installation.binary) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied
            && installation.kind == InstallKind::System =>
        {
            return Err(UpdateError::Install(
                "system-wide uninstall requires root privileges".to_string(),
            ));
        }
        Err(e) => return Err(e.into()),
    }
    let mut removed = vec![installation.binary.clone()];

    let files = std::iter::once(&installation.man_page).chain(&installation.completion_files);
    for file in files {
        if remove_quietly(file, |p| std::fs::remove_file(p)) {
            removed.push(file.clone());
        }
    }
    for dir in [
        &installation.config_dir,
        &installation.cache_dir,
        &installation.data_dir,
    ] {
        if remove_quietly(dir, |p| std::fs::remove_dir_all(p)) {
            removed.push(dir.clone());
        }
    }
    Ok(removed)
}

fn remove_quietly<F>(path: &Path, remove: F) -> bool
where
    F: Fn(&Path) -> io::Result<()>,
{
    match remove(path) {
        Ok(()) => true,
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                debug!(path = %path.display(), error = %e, "could not remove");
            }
            false
        }
    }
}
