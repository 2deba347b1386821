//! Error types shared by the config, multiplexer and update layers.

use std::fmt;

use crate::backend::Backend;
use crate::mux::Operation;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when parsing backend names or reading/writing the config file.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    /// A backend identifier that is not `tmux`, `zellij` or `screen`.
    InvalidBackendName(String),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::InvalidBackendName(name) => write!(
                f,
                "invalid backend `{name}`: expected one of tmux, zellij, screen"
            ),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// MuxError
// ---------------------------------------------------------------------------

/// Failures reported by a backend adapter.
#[derive(Debug)]
pub enum MuxError {
    /// The backend has no way to express the operation.
    Unsupported {
        backend: Backend,
        operation: Operation,
    },
    /// The backend binary could not be started.
    Spawn {
        backend: Backend,
        operation: Operation,
        source: std::io::Error,
    },
    /// The backend binary ran and exited non-zero (`-1` when killed by a signal).
    Status {
        backend: Backend,
        operation: Operation,
        code: i32,
    },
    SessionNotFound {
        backend: Backend,
        session: String,
    },
    SessionExists {
        backend: Backend,
        session: String,
    },
    /// Creation reported success but the session never showed up in listings.
    Unverified {
        backend: Backend,
        session: String,
    },
    NoSessions {
        backend: Backend,
    },
    InvalidArgument(String),
}

impl MuxError {
    /// True for backend limitations, as opposed to execution failures.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }

    /// True when a subprocess failed to spawn or exited non-zero.
    pub fn is_subprocess_failure(&self) -> bool {
        matches!(self, Self::Spawn { .. } | Self::Status { .. })
    }
}

impl fmt::Display for MuxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported { backend, operation } => {
                write!(f, "`{operation}` is not supported by the {backend} backend")
            }
            Self::Spawn {
                backend,
                operation,
                source,
            } => write!(f, "{operation}: failed to run {backend}: {source}"),
            Self::Status {
                backend,
                operation,
                code,
            } => write!(f, "{operation}: {backend} exited with status {code}"),
            Self::SessionNotFound { session, .. } => {
                write!(f, "Session '{session}' does not exist")
            }
            Self::SessionExists { session, .. } => write!(
                f,
                "Session '{session}' already exists. Use attach to connect to it or pick a different name"
            ),
            Self::Unverified { backend, session } => write!(
                f,
                "{backend} reported success creating '{session}' but the session was not found afterwards"
            ),
            Self::NoSessions { backend } => write!(f, "no {backend} sessions found"),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for MuxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// UpdateError
// ---------------------------------------------------------------------------

/// Errors from release checks and uninstall.
#[derive(Debug)]
pub enum UpdateError {
    Http(reqwest::Error),
    /// A version string that is not `major.minor.patch`.
    Version(String),
    Install(String),
    Io(std::io::Error),
}

impl fmt::Display for UpdateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Version(v) => write!(f, "invalid version format: {v}"),
            Self::Install(msg) => write!(f, "{msg}"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for UpdateError {}

impl From<reqwest::Error> for UpdateError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<std::io::Error> for UpdateError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
