//! zellij adapter.
//!
//! zellij addresses tabs and panes by focus rather than index, so pane-level
//! operations first walk focus toward the requested pane and then act on
//! whatever pane ends up focused.

use tracing::debug;

use crate::backend::Backend;
use crate::error::MuxError;

use super::process::Invoker;
use super::text::zellij_session_names;
use super::{
    unsupported, CommandRunner, Multiplexer, MuxResult, Operation, ResizeDirection,
    SplitDirection,
};

/// Drives the `zellij` binary through its CLI `action` interface.
pub struct ZellijAdapter<'a> {
    zellij: Invoker<'a>,
}

impl<'a> ZellijAdapter<'a> {
    /// Adapter issuing every zellij command through `runner`.
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self {
            zellij: Invoker::new(runner, Backend::Zellij),
        }
    }

    /// Run `zellij -s <session> action <args..>`.
    fn action(&self, operation: Operation, session: &str, args: &[&str]) -> MuxResult {
        let mut argv = vec!["-s", session, "action"];
        argv.extend_from_slice(args);
        self.zellij.run(operation, &argv)
    }

    fn session_names(&self, operation: Operation) -> Result<Vec<String>, MuxError> {
        let output = self.zellij.capture_ok(operation, &["list-sessions"])?;
        Ok(zellij_session_names(&output.stdout))
    }

    /// Delete one session, retrying with `--force` for running sessions.
    fn delete_session(&self, operation: Operation, name: &str) -> MuxResult {
        if let Err(e) = self.zellij.run(operation, &["delete-session", name]) {
            debug!(session = name, error = %e, "plain delete failed, forcing");
            return self
                .zellij
                .run(operation, &["delete-session", "--force", name]);
        }
        Ok(())
    }

    /// Best-effort focus walk to the 1-based `pane` index.
    ///
    /// Resets focus toward the top-left pane, then steps forward. Empty or `0`
    /// means the current pane. Unparsable indices target pane 1. Never fails:
    /// if there are fewer panes than requested the walk stops where it is.
    fn focus_pane(&self, operation: Operation, session: &str, pane: &str) {
        let pane = pane.trim();
        if pane.is_empty() || pane == "0" {
            return;
        }
        for edge in ["left", "up"] {
            if let Err(e) = self.action(operation, session, &["move-focus-or-tab", edge]) {
                debug!(session, edge, error = %e, "focus reset step failed");
            }
        }
        let target = pane.parse::<u32>().ok().filter(|n| *n > 0).unwrap_or(1);
        for step in 1..target {
            if let Err(e) = self.action(operation, session, &["focus-next-pane"]) {
                debug!(session, step, error = %e, "focus walk stopped early");
                break;
            }
        }
    }
}

impl Multiplexer for ZellijAdapter<'_> {
    fn backend(&self) -> Backend {
        Backend::Zellij
    }

    fn supports(&self, operation: Operation) -> bool {
        !matches!(
            operation,
            Operation::DetachSession
                | Operation::RenameSession
                | Operation::RenameWindow
                | Operation::MoveWindow
                | Operation::SwapWindow
                | Operation::ListPanes
        )
    }

    fn session_exists(&self, name: &str) -> bool {
        match self.session_names(Operation::ListSessions) {
            Ok(names) => names.iter().any(|candidate| candidate == name),
            Err(e) => {
                debug!(session = name, error = %e, "zellij listing failed; assuming absent");
                false
            }
        }
    }

    fn create_session(&self, name: &str) -> MuxResult {
        if self.session_exists(name) {
            return Err(MuxError::SessionExists {
                backend: Backend::Zellij,
                session: name.to_string(),
            });
        }
        self.zellij.run_quiet(
            Operation::CreateSession,
            &["attach", "--create-background", name],
        )?;
        if !self.session_exists(name) {
            return Err(MuxError::Unverified {
                backend: Backend::Zellij,
                session: name.to_string(),
            });
        }
        Ok(())
    }

    fn list_sessions(&self) -> MuxResult {
        self.zellij.run(Operation::ListSessions, &["list-sessions"])
    }

    fn attach_session(&self, name: &str) -> MuxResult {
        self.zellij.run(Operation::AttachSession, &["attach", name])
    }

    fn detach_session(&self) -> MuxResult {
        unsupported(Backend::Zellij, Operation::DetachSession)
    }

    fn kill_session(&self, name: &str) -> MuxResult {
        self.delete_session(Operation::KillSession, name)
    }

    fn rename_session(&self, _old: &str, _new: &str) -> MuxResult {
        unsupported(Backend::Zellij, Operation::RenameSession)
    }

    fn new_window(&self, session: &str, name: &str) -> MuxResult {
        if name.is_empty() {
            self.action(Operation::NewWindow, session, &["new-tab"])
        } else {
            self.action(Operation::NewWindow, session, &["new-tab", "--name", name])
        }
    }

    fn list_windows(&self, session: &str) -> MuxResult {
        self.zellij.relay(&format!(
            "Getting layout information for zellij session '{session}' (tabs/windows):\n"
        ));
        let Err(e) = self.action(Operation::ListWindows, session, &["dump-layout"]) else {
            return Ok(());
        };
        debug!(session, error = %e, "dump-layout unavailable, using session listing");
        let output = self
            .zellij
            .capture_ok(Operation::ListWindows, &["list-sessions"])?;
        let mut listing = String::new();
        for line in output.stdout.lines() {
            let matches = zellij_session_names(line)
                .first()
                .is_some_and(|candidate| candidate == session);
            if matches {
                listing.push_str(line);
                listing.push('\n');
            }
        }
        if listing.is_empty() {
            listing = format!(
                "Session '{session}' found but no detailed tab information available\n"
            );
        }
        self.zellij
            .relay(&format!("Dump layout not available, using session list:\n{listing}"));
        Ok(())
    }

    fn kill_window(&self, session: &str, window: &str) -> MuxResult {
        debug!(session, window, "closing focused zellij tab");
        self.action(Operation::KillWindow, session, &["close-tab"])
    }

    fn next_window(&self, session: &str) -> MuxResult {
        self.action(Operation::NextWindow, session, &["go-to-next-tab"])
    }

    fn previous_window(&self, session: &str) -> MuxResult {
        self.action(Operation::PreviousWindow, session, &["go-to-previous-tab"])
    }

    fn rename_window(&self, _session: &str, _old: &str, _new: &str) -> MuxResult {
        unsupported(Backend::Zellij, Operation::RenameWindow)
    }

    fn move_window(&self, _src: &str, _window: &str, _dst: &str) -> MuxResult {
        unsupported(Backend::Zellij, Operation::MoveWindow)
    }

    fn swap_window(&self, _session: &str, _first: &str, _second: &str) -> MuxResult {
        unsupported(Backend::Zellij, Operation::SwapWindow)
    }

    fn split_window(&self, session: &str, _window: &str, direction: SplitDirection) -> MuxResult {
        let edge = match direction {
            SplitDirection::Vertical => "down",
            SplitDirection::Horizontal => "right",
        };
        self.action(
            Operation::SplitWindow,
            session,
            &["new-pane", "--direction", edge],
        )
    }

    fn list_panes(&self, _session: &str, _window: &str) -> MuxResult {
        unsupported(Backend::Zellij, Operation::ListPanes)
    }

    fn kill_pane(&self, session: &str, _window: &str, pane: &str) -> MuxResult {
        self.focus_pane(Operation::KillPane, session, pane);
        self.action(Operation::KillPane, session, &["close-pane"])
    }

    fn resize_pane(
        &self,
        session: &str,
        _window: &str,
        pane: &str,
        direction: ResizeDirection,
        size: u32,
    ) -> MuxResult {
        self.focus_pane(Operation::ResizePane, session, pane);
        for _ in 0..size {
            self.action(
                Operation::ResizePane,
                session,
                &["resize", "increase", direction.as_word()],
            )?;
        }
        Ok(())
    }

    fn send_keys(&self, session: &str, _window: &str, pane: &str, keys: &str) -> MuxResult {
        self.focus_pane(Operation::SendKeys, session, pane);
        self.action(Operation::SendKeys, session, &["write-chars", keys])
    }

    fn nuke_all(&self) -> MuxResult {
        match self
            .zellij
            .run(Operation::NukeAll, &["delete-all-sessions", "-y", "-f"])
        {
            Ok(()) => return Ok(()),
            Err(e) => debug!(error = %e, "delete-all-sessions failed, deleting one by one"),
        }
        let names = self.session_names(Operation::NukeAll)?;
        if names.is_empty() {
            return Err(MuxError::NoSessions {
                backend: Backend::Zellij,
            });
        }
        for name in &names {
            if let Err(e) = self.delete_session(Operation::NukeAll, name) {
                debug!(session = %name, error = %e, "could not delete zellij session");
            }
        }
        Ok(())
    }
}
