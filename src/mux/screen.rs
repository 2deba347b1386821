//! GNU screen adapter.
//!
//! screen has no pane addressing and only one "current window" per session, so
//! window verbs act on whatever window is current. Several sessions may share
//! a name; kill and nuke target each one by its `pid.name` id.

use tracing::{debug, info};

use crate::backend::Backend;
use crate::error::MuxError;

use super::process::Invoker;
use super::text::{screen_sessions, ScreenSession};
use super::{
    unsupported, CommandRunner, Multiplexer, MuxResult, Operation, ResizeDirection,
    SplitDirection,
};

/// Drives GNU `screen` through `-S <session> -X` remote commands.
pub struct ScreenAdapter<'a> {
    screen: Invoker<'a>,
}

impl<'a> ScreenAdapter<'a> {
    /// Adapter issuing every screen command through `runner`.
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self {
            screen: Invoker::new(runner, Backend::Screen),
        }
    }

    /// Sessions from `screen -ls`. The exit status is ignored because screen
    /// exits non-zero whenever it lists anything.
    fn sessions(&self, operation: Operation) -> Result<Vec<ScreenSession>, MuxError> {
        let output = self.screen.capture(operation, &["-ls"])?;
        Ok(screen_sessions(&output.stdout))
    }

    /// Send `-X <command..>` to session `session`.
    fn command(&self, operation: Operation, session: &str, args: &[&str]) -> MuxResult {
        let mut argv = vec!["-S", session, "-X"];
        argv.extend_from_slice(args);
        self.screen.run(operation, &argv)
    }

    /// Quit every listed session, returning how many quit cleanly.
    fn quit_all<'s>(
        &self,
        operation: Operation,
        sessions: impl IntoIterator<Item = &'s ScreenSession>,
    ) -> usize {
        let mut killed = 0;
        for session in sessions {
            match self
                .screen
                .run_quiet(operation, &["-S", &session.id, "-X", "quit"])
            {
                Ok(()) => killed += 1,
                Err(e) => debug!(id = %session.id, error = %e, "screen quit failed"),
            }
        }
        killed
    }
}

impl Multiplexer for ScreenAdapter<'_> {
    fn backend(&self) -> Backend {
        Backend::Screen
    }

    fn supports(&self, operation: Operation) -> bool {
        !matches!(
            operation,
            Operation::RenameSession
                | Operation::MoveWindow
                | Operation::SwapWindow
                | Operation::ListPanes
                | Operation::KillPane
                | Operation::ResizePane
                | Operation::SendKeys
        )
    }

    fn session_exists(&self, name: &str) -> bool {
        match self.sessions(Operation::ListSessions) {
            Ok(sessions) => sessions.iter().any(|s| s.name == name),
            Err(e) => {
                debug!(session = name, error = %e, "screen listing failed; assuming absent");
                false
            }
        }
    }

    fn create_session(&self, name: &str) -> MuxResult {
        self.screen.run(Operation::CreateSession, &["-dmS", name])
    }

    fn list_sessions(&self) -> MuxResult {
        // `screen -ls` exits non-zero even when it lists sessions.
        let output = self.screen.capture(Operation::ListSessions, &["-ls"])?;
        self.screen.relay(&output.stdout);
        Ok(())
    }

    fn attach_session(&self, name: &str) -> MuxResult {
        self.screen.run(Operation::AttachSession, &["-r", name])
    }

    fn detach_session(&self) -> MuxResult {
        self.screen.run(Operation::DetachSession, &["-d"])
    }

    fn kill_session(&self, name: &str) -> MuxResult {
        let matching: Vec<ScreenSession> = self
            .sessions(Operation::KillSession)?
            .into_iter()
            .filter(|s| s.name == name)
            .collect();
        if matching.is_empty() {
            return Err(MuxError::SessionNotFound {
                backend: Backend::Screen,
                session: name.to_string(),
            });
        }
        let killed = self.quit_all(Operation::KillSession, &matching);
        debug!(session = name, matched = matching.len(), killed, "screen kill");
        if killed == 0 {
            return Err(self.screen.status_error(Operation::KillSession, 1));
        }
        Ok(())
    }

    fn rename_session(&self, _old: &str, _new: &str) -> MuxResult {
        unsupported(Backend::Screen, Operation::RenameSession)
    }

    fn new_window(&self, session: &str, name: &str) -> MuxResult {
        self.command(Operation::NewWindow, session, &["screen", "-t", name])
    }

    fn list_windows(&self, session: &str) -> MuxResult {
        self.screen
            .run(Operation::ListWindows, &["-S", session, "-Q", "windows"])
    }

    fn kill_window(&self, session: &str, window: &str) -> MuxResult {
        debug!(session, window, "killing current screen window");
        self.command(Operation::KillWindow, session, &["kill"])
    }

    fn next_window(&self, session: &str) -> MuxResult {
        self.command(Operation::NextWindow, session, &["next"])
    }

    fn previous_window(&self, session: &str) -> MuxResult {
        self.command(Operation::PreviousWindow, session, &["prev"])
    }

    fn rename_window(&self, session: &str, _old: &str, new: &str) -> MuxResult {
        self.command(Operation::RenameWindow, session, &["title", new])
    }

    fn move_window(&self, _src: &str, _window: &str, _dst: &str) -> MuxResult {
        unsupported(Backend::Screen, Operation::MoveWindow)
    }

    fn swap_window(&self, _session: &str, _first: &str, _second: &str) -> MuxResult {
        unsupported(Backend::Screen, Operation::SwapWindow)
    }

    fn split_window(&self, session: &str, _window: &str, direction: SplitDirection) -> MuxResult {
        match direction {
            SplitDirection::Vertical => self.command(Operation::SplitWindow, session, &["split"]),
            SplitDirection::Horizontal => unsupported(Backend::Screen, Operation::SplitWindow),
        }
    }

    fn list_panes(&self, _session: &str, _window: &str) -> MuxResult {
        unsupported(Backend::Screen, Operation::ListPanes)
    }

    fn kill_pane(&self, _session: &str, _window: &str, _pane: &str) -> MuxResult {
        unsupported(Backend::Screen, Operation::KillPane)
    }

    fn resize_pane(
        &self,
        _session: &str,
        _window: &str,
        _pane: &str,
        _direction: ResizeDirection,
        _size: u32,
    ) -> MuxResult {
        unsupported(Backend::Screen, Operation::ResizePane)
    }

    fn send_keys(&self, _session: &str, _window: &str, _pane: &str, _keys: &str) -> MuxResult {
        unsupported(Backend::Screen, Operation::SendKeys)
    }

    fn nuke_all(&self) -> MuxResult {
        let sessions = self.sessions(Operation::NukeAll)?;
        let killed = self.quit_all(Operation::NukeAll, &sessions);
        info!(listed = sessions.len(), killed, "screen nuke finished");
        if killed == 0 {
            return Err(MuxError::NoSessions {
                backend: Backend::Screen,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mux::ExecOutput;
    use crate::testsupport::FakeRunner;

    const LISTING: &str = "There are screens on:\n\
        \t4182.work\t(Detached)\n\
        \t3990.work\t(Attached)\n\
        \t3551.workshop\t(Detached)\n\
        3 Sockets in /run/screen/S-dev.\n";

    fn listing_with_status(code: i32) -> ExecOutput {
        ExecOutput {
            exit_code: code,
            stdout: LISTING.to_string(),
            stderr: String::new(),
        }
    }

    #[test]
    fn listing_is_relayed_despite_nonzero_exit() {
        let runner = FakeRunner::new();
        runner.push_output(listing_with_status(1));
        ScreenAdapter::new(&runner).list_sessions().unwrap();
        assert_eq!(runner.only_args(), ["-ls"]);
        assert_eq!(runner.relayed(), LISTING);
    }

    #[test]
    fn kill_quits_every_session_sharing_the_name() {
        let runner = FakeRunner::new();
        runner.push_output(listing_with_status(1));
        ScreenAdapter::new(&runner).kill_session("work").unwrap();
        let calls = runner.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[1].args, ["-S", "4182.work", "-X", "quit"]);
        assert_eq!(calls[2].args, ["-S", "3990.work", "-X", "quit"]);
    }

    #[test]
    fn kill_unknown_session_is_not_found() {
        let runner = FakeRunner::new();
        runner.push_output(listing_with_status(1));
        let err = ScreenAdapter::new(&runner).kill_session("nope").unwrap_err();
        assert!(matches!(err, MuxError::SessionNotFound { .. }));
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn existence_matches_whole_name_only() {
        let runner = FakeRunner::new();
        runner.push_output(listing_with_status(1));
        runner.push_output(listing_with_status(1));
        let screen = ScreenAdapter::new(&runner);
        assert!(screen.session_exists("workshop"));
        assert!(!screen.session_exists("shop"));
    }

    #[test]
    fn nuke_quits_all_sessions() {
        let runner = FakeRunner::new();
        runner.push_output(listing_with_status(1));
        ScreenAdapter::new(&runner).nuke_all().unwrap();
        assert_eq!(runner.calls().len(), 4);
    }

    #[test]
    fn nuke_with_no_sessions_reports_it() {
        let runner = FakeRunner::new();
        runner.push_stdout("No Sockets found in /run/screen/S-dev.\n");
        let err = ScreenAdapter::new(&runner).nuke_all().unwrap_err();
        assert!(matches!(err, MuxError::NoSessions { backend: Backend::Screen }));
    }

    #[test]
    fn window_commands_target_current_window() {
        let runner = FakeRunner::new();
        let screen = ScreenAdapter::new(&runner);
        screen.new_window("s", "logs").unwrap();
        screen.rename_window("s", "logs", "build").unwrap();
        screen.previous_window("s").unwrap();
        screen.split_window("s", "0", SplitDirection::Vertical).unwrap();
        let calls = runner.calls();
        assert_eq!(calls[0].args, ["-S", "s", "-X", "screen", "-t", "logs"]);
        assert_eq!(calls[1].args, ["-S", "s", "-X", "title", "build"]);
        assert_eq!(calls[2].args, ["-S", "s", "-X", "prev"]);
        assert_eq!(calls[3].args, ["-S", "s", "-X", "split"]);
    }

    #[test]
    fn horizontal_split_and_pane_ops_are_unsupported() {
        let runner = FakeRunner::new();
        let screen = ScreenAdapter::new(&runner);
        assert!(screen
            .split_window("s", "0", SplitDirection::Horizontal)
            .unwrap_err()
            .is_unsupported());
        assert!(screen.rename_session("a", "b").unwrap_err().is_unsupported());
        assert!(screen.kill_pane("s", "0", "1").unwrap_err().is_unsupported());
        assert!(screen
            .resize_pane("s", "0", "1", ResizeDirection::Up, 5)
            .unwrap_err()
            .is_unsupported());
        assert!(screen.send_keys("s", "0", "1", "ls").unwrap_err().is_unsupported());
        assert!(runner.calls().is_empty());
    }
}
