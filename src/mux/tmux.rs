//! tmux adapter: every operation maps onto one tmux subcommand.

use crate::backend::Backend;

use super::process::Invoker;
use super::{CommandRunner, Multiplexer, MuxResult, Operation, ResizeDirection, SplitDirection};

/// Drives the `tmux` binary.
pub struct TmuxAdapter<'a> {
    tmux: Invoker<'a>,
}

impl<'a> TmuxAdapter<'a> {
    /// Adapter issuing every tmux command through `runner`.
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self {
            tmux: Invoker::new(runner, Backend::Tmux),
        }
    }
}

// `=` makes tmux match the session name exactly, never by prefix. Window
// and pane targets stay `session:window[.pane]`; tmux resolves an exact
// session name before trying prefixes, and callers confirm existence first.
fn session_target(session: &str) -> String {
    format!("={session}")
}

fn window_target(session: &str, window: &str) -> String {
    format!("{session}:{window}")
}

fn pane_target(session: &str, window: &str, pane: &str) -> String {
    format!("{session}:{window}.{pane}")
}

fn resize_flag(direction: ResizeDirection) -> &'static str {
    match direction {
        ResizeDirection::Up => "-U",
        ResizeDirection::Down => "-D",
        ResizeDirection::Left => "-L",
        ResizeDirection::Right => "-R",
    }
}

impl Multiplexer for TmuxAdapter<'_> {
    fn backend(&self) -> Backend {
        Backend::Tmux
    }

    fn supports(&self, _operation: Operation) -> bool {
        true
    }

    fn session_exists(&self, name: &str) -> bool {
        self.tmux.probe(&["has-session", "-t", &session_target(name)])
    }

    fn create_session(&self, name: &str) -> MuxResult {
        self.tmux
            .run(Operation::CreateSession, &["new-session", "-d", "-s", name])
    }

    fn list_sessions(&self) -> MuxResult {
        self.tmux.run(Operation::ListSessions, &["list-sessions"])
    }

    fn attach_session(&self, name: &str) -> MuxResult {
        let target = session_target(name);
        self.tmux
            .run(Operation::AttachSession, &["attach-session", "-t", &target])
    }

    fn detach_session(&self) -> MuxResult {
        self.tmux.run(Operation::DetachSession, &["detach-client"])
    }

    fn kill_session(&self, name: &str) -> MuxResult {
        let target = session_target(name);
        self.tmux
            .run(Operation::KillSession, &["kill-session", "-t", &target])
    }

    fn rename_session(&self, old: &str, new: &str) -> MuxResult {
        let target = session_target(old);
        self.tmux
            .run(Operation::RenameSession, &["rename-session", "-t", &target, new])
    }

    fn new_window(&self, session: &str, name: &str) -> MuxResult {
        let target = format!("{}:", session_target(session));
        self.tmux.run(
            Operation::NewWindow,
            &["new-window", "-t", &target, "-n", name],
        )
    }

    fn list_windows(&self, session: &str) -> MuxResult {
        let target = session_target(session);
        self.tmux
            .run(Operation::ListWindows, &["list-windows", "-t", &target])
    }

    fn kill_window(&self, session: &str, window: &str) -> MuxResult {
        let target = window_target(session, window);
        self.tmux
            .run(Operation::KillWindow, &["kill-window", "-t", &target])
    }

    fn next_window(&self, session: &str) -> MuxResult {
        let target = session_target(session);
        self.tmux
            .run(Operation::NextWindow, &["next-window", "-t", &target])
    }

    fn previous_window(&self, session: &str) -> MuxResult {
        let target = session_target(session);
        self.tmux
            .run(Operation::PreviousWindow, &["previous-window", "-t", &target])
    }

    fn rename_window(&self, session: &str, old: &str, new: &str) -> MuxResult {
        let target = window_target(session, old);
        self.tmux
            .run(Operation::RenameWindow, &["rename-window", "-t", &target, new])
    }

    fn move_window(&self, src_session: &str, window: &str, dst_session: &str) -> MuxResult {
        let source = window_target(src_session, window);
        let target = format!("{}:", session_target(dst_session));
        self.tmux.run(
            Operation::MoveWindow,
            &["move-window", "-s", &source, "-t", &target],
        )
    }

    fn swap_window(&self, session: &str, first: &str, second: &str) -> MuxResult {
        let source = window_target(session, first);
        let target = window_target(session, second);
        self.tmux.run(
            Operation::SwapWindow,
            &["swap-window", "-s", &source, "-t", &target],
        )
    }

    fn split_window(&self, session: &str, window: &str, direction: SplitDirection) -> MuxResult {
        let flag = match direction {
            SplitDirection::Vertical => "-v",
            SplitDirection::Horizontal => "-h",
        };
        let target = window_target(session, window);
        self.tmux
            .run(Operation::SplitWindow, &["split-window", flag, "-t", &target])
    }

    fn list_panes(&self, session: &str, window: &str) -> MuxResult {
        let target = window_target(session, window);
        self.tmux
            .run(Operation::ListPanes, &["list-panes", "-t", &target])
    }

    fn kill_pane(&self, session: &str, window: &str, pane: &str) -> MuxResult {
        let target = pane_target(session, window, pane);
        self.tmux
            .run(Operation::KillPane, &["kill-pane", "-t", &target])
    }

    fn resize_pane(
        &self,
        session: &str,
        window: &str,
        pane: &str,
        direction: ResizeDirection,
        size: u32,
    ) -> MuxResult {
        let target = pane_target(session, window, pane);
        let size = size.to_string();
        self.tmux.run(
            Operation::ResizePane,
            &["resize-pane", resize_flag(direction), &size, "-t", &target],
        )
    }

    fn send_keys(&self, session: &str, window: &str, pane: &str, keys: &str) -> MuxResult {
        let target = pane_target(session, window, pane);
        self.tmux
            .run(Operation::SendKeys, &["send-keys", "-t", &target, keys])
    }

    fn nuke_all(&self) -> MuxResult {
        self.tmux.run(Operation::NukeAll, &["kill-server"])
    }
}
