//! Uniform session/window/pane operations over the supported multiplexers.
//!
//! Each backend gets one [`Multiplexer`] implementation that translates the
//! shared verb set into that binary's argument syntax. All subprocess work
//! goes through a [`CommandRunner`], so adapters can be exercised with a fake
//! runner and asserted on argument vectors alone.

use std::fmt;
use std::str::FromStr;

use crate::backend::Backend;
use crate::error::MuxError;

mod process;
mod screen;
mod text;
mod tmux;
mod zellij;

pub use process::{CommandRunner, ExecOutput, StdioMode, SystemRunner};
pub use screen::ScreenAdapter;
pub use text::strip_ansi;
pub use tmux::TmuxAdapter;
pub use zellij::ZellijAdapter;

/// Outcome of one adapter operation.
pub type MuxResult = Result<(), MuxError>;

/// One verb of the uniform vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateSession,
    ListSessions,
    AttachSession,
    DetachSession,
    KillSession,
    RenameSession,
    NewWindow,
    ListWindows,
    KillWindow,
    NextWindow,
    PreviousWindow,
    RenameWindow,
    MoveWindow,
    SwapWindow,
    SplitWindow,
    ListPanes,
    KillPane,
    ResizePane,
    SendKeys,
    NukeAll,
}

impl Operation {
    /// CLI verb that triggers this operation.
    pub fn verb(self) -> &'static str {
        match self {
            Self::CreateSession => "create",
            Self::ListSessions => "list",
            Self::AttachSession => "attach",
            Self::DetachSession => "detach",
            Self::KillSession => "delete",
            Self::RenameSession => "rename-session",
            Self::NewWindow => "new-window",
            Self::ListWindows => "list-windows",
            Self::KillWindow => "kill-window",
            Self::NextWindow => "next-window",
            Self::PreviousWindow => "prev-window",
            Self::RenameWindow => "rename-window",
            Self::MoveWindow => "move-window",
            Self::SwapWindow => "swap-window",
            Self::SplitWindow => "split-window",
            Self::ListPanes => "list-panes",
            Self::KillPane => "kill-pane",
            Self::ResizePane => "resize-pane",
            Self::SendKeys => "send-keys",
            Self::NukeAll => "nuke",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Split orientation; `Vertical` stacks the new pane below the current one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplitDirection {
    #[default]
    Vertical,
    Horizontal,
}

impl SplitDirection {
    pub fn describe(self) -> &'static str {
        match self {
            Self::Vertical => "vertically",
            Self::Horizontal => "horizontally",
        }
    }
}

impl FromStr for SplitDirection {
    type Err = MuxError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "v" | "vertical" => Ok(Self::Vertical),
            "h" | "horizontal" => Ok(Self::Horizontal),
            _ => Err(MuxError::InvalidArgument(format!(
                "split direction `{raw}` (expected v or h)"
            ))),
        }
    }
}

/// Edge a pane grows toward when resized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResizeDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl ResizeDirection {
    /// Lowercase word form (`up`, `down`, `left`, `right`).
    pub fn as_word(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl FromStr for ResizeDirection {
    type Err = MuxError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "U" | "UP" => Ok(Self::Up),
            "D" | "DOWN" => Ok(Self::Down),
            "L" | "LEFT" => Ok(Self::Left),
            "R" | "RIGHT" => Ok(Self::Right),
            _ => Err(MuxError::InvalidArgument(format!(
                "resize direction `{raw}` (expected U, D, L or R)"
            ))),
        }
    }
}

/// Operation set every backend adapter implements.
///
/// Operations a backend cannot express return [`MuxError::Unsupported`] and
/// report `false` from [`Multiplexer::supports`].
pub trait Multiplexer {
    /// Backend this adapter drives.
    fn backend(&self) -> Backend;
    /// Whether the backend can express `operation` at all.
    fn supports(&self, operation: Operation) -> bool;

    fn session_exists(&self, name: &str) -> bool;
    fn create_session(&self, name: &str) -> MuxResult;
    fn list_sessions(&self) -> MuxResult;
    fn attach_session(&self, name: &str) -> MuxResult;
    fn detach_session(&self) -> MuxResult;
    fn kill_session(&self, name: &str) -> MuxResult;
    fn rename_session(&self, old: &str, new: &str) -> MuxResult;

    fn new_window(&self, session: &str, name: &str) -> MuxResult;
    fn list_windows(&self, session: &str) -> MuxResult;
    fn kill_window(&self, session: &str, window: &str) -> MuxResult;
    fn next_window(&self, session: &str) -> MuxResult;
    fn previous_window(&self, session: &str) -> MuxResult;
    fn rename_window(&self, session: &str, old: &str, new: &str) -> MuxResult;
    fn move_window(&self, src_session: &str, window: &str, dst_session: &str) -> MuxResult;
    fn swap_window(&self, session: &str, first: &str, second: &str) -> MuxResult;

    fn split_window(&self, session: &str, window: &str, direction: SplitDirection) -> MuxResult;
    fn list_panes(&self, session: &str, window: &str) -> MuxResult;
    fn kill_pane(&self, session: &str, window: &str, pane: &str) -> MuxResult;
    fn resize_pane(
        &self,
        session: &str,
        window: &str,
        pane: &str,
        direction: ResizeDirection,
        size: u32,
    ) -> MuxResult;
    fn send_keys(&self, session: &str, window: &str, pane: &str, keys: &str) -> MuxResult;

    /// Kill every session this backend knows about.
    fn nuke_all(&self) -> MuxResult;
}

/// Build the adapter for `backend` on top of `runner`.
pub fn adapter_for<'a>(
    backend: Backend,
    runner: &'a dyn CommandRunner,
) -> Box<dyn Multiplexer + 'a> {
    match backend {
        Backend::Tmux => Box::new(TmuxAdapter::new(runner)),
        Backend::Zellij => Box::new(ZellijAdapter::new(runner)),
        Backend::Screen => Box::new(ScreenAdapter::new(runner)),
    }
}

pub(crate) fn unsupported(backend: Backend, operation: Operation) -> MuxResult {
    Err(MuxError::Unsupported { backend, operation })
}
