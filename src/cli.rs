//! CLI argument parsing via clap.
//!
//! Positional arguments are optional at the clap level so missing values are
//! reported with txm's own usage messages rather than clap's.

use clap::{Parser, Subcommand};

/// Unified front end for tmux, zellij and GNU screen.
#[derive(Debug, Parser)]
#[command(name = "txm", disable_help_subcommand = true, disable_version_flag = true)]
pub struct Args {
    /// Enable diagnostic output on stderr.
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Create a detached session.
    Create { name: Option<String> },
    /// List sessions.
    List,
    /// Attach to a session.
    Attach { name: Option<String> },
    /// Detach the current client.
    Detach,
    /// Delete a session.
    Delete { name: Option<String> },
    /// Kill every session.
    Nuke,
    NewWindow {
        session: Option<String>,
        name: Option<String>,
    },
    ListWindows { session: Option<String> },
    KillWindow {
        session: Option<String>,
        window: Option<String>,
    },
    NextWindow { session: Option<String> },
    PrevWindow { session: Option<String> },
    RenameSession {
        old: Option<String>,
        new: Option<String>,
    },
    RenameWindow {
        session: Option<String>,
        old: Option<String>,
        new: Option<String>,
    },
    MoveWindow {
        src_session: Option<String>,
        window: Option<String>,
        dst_session: Option<String>,
    },
    SwapWindow {
        session: Option<String>,
        first: Option<String>,
        second: Option<String>,
    },
    SplitWindow {
        session: Option<String>,
        window: Option<String>,
        /// `v` (default) or `h`.
        direction: Option<String>,
    },
    ListPanes {
        session: Option<String>,
        window: Option<String>,
    },
    KillPane {
        session: Option<String>,
        window: Option<String>,
        pane: Option<String>,
    },
    ResizePane {
        session: Option<String>,
        window: Option<String>,
        pane: Option<String>,
        /// `U` (default), `D`, `L` or `R`.
        direction: Option<String>,
        /// Cells to resize by (default 5).
        size: Option<String>,
    },
    SendKeys {
        session: Option<String>,
        window: Option<String>,
        pane: Option<String>,
        #[arg(allow_hyphen_values = true)]
        keys: Option<String>,
    },
    /// Read or change the default backend.
    Config {
        action: Option<String>,
        key: Option<String>,
        value: Option<String>,
    },
    /// Show version and build metadata.
    Version {
        #[arg(long = "check-update")]
        check_update: bool,
    },
    /// Check for a newer release.
    Update {
        #[arg(long = "check-update")]
        check_update: bool,
    },
    /// Remove txm and its files.
    Uninstall,
    /// Show help.
    Help,
}
