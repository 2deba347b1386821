//! Multiplexer backend identity, availability probing and selection.
//!
//! A run settles on exactly one [`Backend`]: `main` probes which binaries are
//! installed, feeds that [`Availability`] plus the loaded config into
//! [`select_best_backend`], and hands the winner to the adapter factory.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

mod probe;
mod select;

pub use probe::{probe_availability, probe_availability_with, Availability, WELL_KNOWN_BIN_DIRS};
pub use select::select_best_backend;

/// External terminal multiplexer driven by txm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Backend {
    /// tmux: numbered windows and panes, full verb coverage.
    Tmux,
    /// zellij: tabs and focus-based panes.
    Zellij,
    /// GNU Screen: current-window operations only.
    Screen,
}

impl Backend {
    /// Every known backend, in declaration order.
    pub const ALL: [Backend; 3] = [Backend::Tmux, Backend::Zellij, Backend::Screen];

    /// Lowercase identifier used in config files, env vars and messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tmux => "tmux",
            Self::Zellij => "zellij",
            Self::Screen => "screen",
        }
    }

    /// Executable name looked up on `PATH`.
    pub fn binary(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Backend::ALL
            .into_iter()
            .find(|backend| backend.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConfigError::InvalidBackendName(raw.to_string()))
    }
}
