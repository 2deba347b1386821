//! Binary-local application orchestration.
//!
//! `main.rs` keeps process setup (argument parsing, tracing, exit codes);
//! this module turns a parsed command into backend calls and user output.

pub(crate) mod commands;
pub(crate) mod dispatch;
pub(crate) mod entry;
pub(crate) mod request;
pub(crate) mod startup;
#[cfg(test)]
pub(crate) mod testsupport;

use std::fmt;

use txm::error::{ConfigError, MuxError, UpdateError};

/// Help table printed by `txm help` and after usage errors.
pub(crate) const HELP_TEXT: &str = include_str!("../templates/help.txt");

/// Every failure that ends a txm invocation with exit status 1.
#[derive(Debug)]
pub(crate) enum AppError {
    /// Missing or malformed command-line input.
    Usage(String),
    Config(ConfigError),
    Mux(MuxError),
    Update(UpdateError),
    /// None of tmux, zellij or screen is installed.
    NoBackendAvailable,
}

impl AppError {
    /// Usage errors are followed by the help table.
    pub(crate) fn shows_help(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => f.write_str(msg),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Mux(e) => write!(f, "{e}"),
            Self::Update(e) => write!(f, "{e}"),
            Self::NoBackendAvailable => f.write_str(
                "No supported terminal multiplexer found. Install tmux, zellij or screen and try again.",
            ),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<MuxError> for AppError {
    fn from(e: MuxError) -> Self {
        Self::Mux(e)
    }
}

impl From<UpdateError> for AppError {
    fn from(e: UpdateError) -> Self {
        Self::Update(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use txm::backend::Backend;
    use txm::mux::Operation;

    #[test]
    fn only_usage_errors_show_help() {
        assert!(AppError::Usage("x".into()).shows_help());
        assert!(!AppError::NoBackendAvailable.shows_help());
        let unsupported = AppError::from(MuxError::Unsupported {
            backend: Backend::Screen,
            operation: Operation::ListPanes,
        });
        assert!(!unsupported.shows_help());
        assert!(unsupported.to_string().contains("not supported by the screen backend"));
    }

    #[test]
    fn help_text_lists_every_verb() {
        for verb in [
            "create", "list", "attach", "detach", "delete", "nuke", "new-window",
            "list-windows", "kill-window", "next-window", "prev-window", "rename-session",
            "rename-window", "move-window", "swap-window", "split-window", "list-panes",
            "kill-pane", "resize-pane", "send-keys", "config", "version", "update",
            "uninstall", "help",
        ] {
            assert!(HELP_TEXT.contains(verb), "help is missing `{verb}`");
        }
    }
}
