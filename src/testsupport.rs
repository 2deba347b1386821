//! Shared test fixtures: temp directories and a scripted command runner.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::mux::{CommandRunner, ExecOutput, StdioMode};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("txm-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// One invocation seen by [`FakeRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    /// `None` for captured invocations.
    pub stdio: Option<StdioMode>,
}

#[derive(Debug)]
enum Scripted {
    Output(ExecOutput),
    SpawnFailure,
}

/// Command runner that records invocations and replays scripted results.
///
/// Results are consumed in call order across `run` and `capture`. Once the
/// script is exhausted every call succeeds with empty output.
#[derive(Debug, Default)]
pub struct FakeRunner {
    script: RefCell<VecDeque<Scripted>>,
    calls: RefCell<Vec<RecordedCall>>,
    relayed: RefCell<String>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_status(&self, code: i32) {
        self.push_output(ExecOutput {
            exit_code: code,
            ..ExecOutput::default()
        });
    }

    /// Queue a successful result with the given stdout.
    pub fn push_stdout(&self, stdout: &str) {
        self.push_output(ExecOutput {
            stdout: stdout.to_string(),
            ..ExecOutput::default()
        });
    }

    pub fn push_output(&self, output: ExecOutput) {
        self.script.borrow_mut().push_back(Scripted::Output(output));
    }

    pub fn push_spawn_failure(&self) {
        self.script.borrow_mut().push_back(Scripted::SpawnFailure);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    /// Everything adapters relayed to the user, concatenated.
    pub fn relayed(&self) -> String {
        self.relayed.borrow().clone()
    }

    /// Arguments of the single recorded call; panics if there was not exactly one.
    pub fn only_args(&self) -> Vec<String> {
        let calls = self.calls.borrow();
        assert_eq!(calls.len(), 1, "expected one call, got {calls:?}");
        calls[0].args.clone()
    }

    fn next(
        &self,
        program: &str,
        args: &[String],
        stdio: Option<StdioMode>,
    ) -> io::Result<ExecOutput> {
        self.calls.borrow_mut().push(RecordedCall {
            program: program.to_string(),
            args: args.to_vec(),
            stdio,
        });
        match self.script.borrow_mut().pop_front() {
            Some(Scripted::Output(output)) => Ok(output),
            Some(Scripted::SpawnFailure) => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{program}: not found"),
            )),
            None => Ok(ExecOutput::default()),
        }
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[String], stdio: StdioMode) -> io::Result<i32> {
        self.next(program, args, Some(stdio)).map(|output| output.exit_code)
    }

    fn capture(&self, program: &str, args: &[String]) -> io::Result<ExecOutput> {
        self.next(program, args, None)
    }

    fn relay(&self, text: &str) -> io::Result<()> {
        self.relayed.borrow_mut().push_str(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[test]
    fn fake_runner_replays_script_then_succeeds() {
        let runner = FakeRunner::new();
        runner.push_status(2);
        runner.push_spawn_failure();
        let args = vec!["a".to_string()];
        assert_eq!(runner.run("tmux", &args, StdioMode::Inherit).unwrap(), 2);
        assert!(runner.capture("tmux", &args).is_err());
        assert_eq!(runner.run("tmux", &args, StdioMode::Null).unwrap(), 0);
        assert_eq!(runner.calls().len(), 3);
        assert_eq!(runner.calls()[1].stdio, None);
    }
}
