//! Installed-binary detection for each backend.
//!
//! Probing only resolves paths and stats files; nothing is spawned.

use std::path::Path;

use tracing::debug;

use super::Backend;

/// Install prefixes checked when a binary is not on `PATH`.
pub const WELL_KNOWN_BIN_DIRS: [&str; 4] = [
    "/usr/bin",
    "/usr/local/bin",
    "/opt/homebrew/bin",
    "/home/linuxbrew/.linuxbrew/bin",
];

/// Which backends were found on this host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Availability {
    tmux: bool,
    zellij: bool,
    screen: bool,
}

impl Availability {
    /// Availability with exactly the given backends present.
    pub fn only(backends: &[Backend]) -> Self {
        backends
            .iter()
            .fold(Self::default(), |acc, backend| acc.with(*backend, true))
    }

    /// Return a copy with `backend` marked present or absent.
    #[must_use]
    pub fn with(mut self, backend: Backend, available: bool) -> Self {
        *self.slot_mut(backend) = available;
        self
    }

    pub fn is_available(&self, backend: Backend) -> bool {
        match backend {
            Backend::Tmux => self.tmux,
            Backend::Zellij => self.zellij,
            Backend::Screen => self.screen,
        }
    }

    /// True when at least one backend binary was found.
    pub fn any(&self) -> bool {
        Backend::ALL.into_iter().any(|b| self.is_available(b))
    }

    fn slot_mut(&mut self, backend: Backend) -> &mut bool {
        match backend {
            Backend::Tmux => &mut self.tmux,
            Backend::Zellij => &mut self.zellij,
            Backend::Screen => &mut self.screen,
        }
    }
}

/// Probe the real host: `PATH` lookup via `which`, then well-known prefixes.
pub fn probe_availability() -> Availability {
    probe_availability_with(
        |binary| which::which(binary).is_ok(),
        |path| path.is_file(),
    )
}

/// Probe every backend using injected lookups.
pub fn probe_availability_with<FPath, FExists>(on_path: FPath, exists: FExists) -> Availability
where
    FPath: Fn(&str) -> bool,
    FExists: Fn(&Path) -> bool,
{
    Backend::ALL
        .into_iter()
        .fold(Availability::default(), |acc, backend| {
            let found = backend_available_with(backend, &on_path, &exists);
            debug!(backend = %backend, available = found, "probed backend binary");
            acc.with(backend, found)
        })
}

fn backend_available_with<FPath, FExists>(
    backend: Backend,
    on_path: &FPath,
    exists: &FExists,
) -> bool
where
    FPath: Fn(&str) -> bool,
    FExists: Fn(&Path) -> bool,
{
    let binary = backend.binary();
    if on_path(binary) {
        return true;
    }
    WELL_KNOWN_BIN_DIRS
        .iter()
        .map(|dir| Path::new(dir).join(binary))
        .any(|candidate| exists(&candidate))
}
