//! Test doubles for the binary-side handlers.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

use txm::mux::{CommandRunner, ExecOutput, StdioMode};
use txm::ui::RenderSink;

/// Captures rendered lines as `(level, text)` pairs.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    lines: RefCell<Vec<(&'static str, String)>>,
}

impl RecordingSink {
    pub(crate) fn lines(&self) -> Vec<(&'static str, String)> {
        self.lines.borrow().clone()
    }

    /// Text of every line rendered at `level`.
    pub(crate) fn at(&self, level: &str) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, text)| text.clone())
            .collect()
    }

    fn push(&self, level: &'static str, text: String) {
        self.lines.borrow_mut().push((level, text));
    }
}

impl RenderSink for RecordingSink {
    fn info(&self, msg: &str) {
        self.push("info", msg.to_string());
    }

    fn warn(&self, msg: &str) {
        self.push("warn", msg.to_string());
    }

    fn error(&self, msg: &str) {
        self.push("error", msg.to_string());
    }

    fn plain(&self, text: &str) {
        self.push("plain", text.to_string());
    }

    fn field(&self, key: &str, value: &str) {
        self.push("field", format!("{key}: {value}"));
    }
}

/// Records argv and replays queued exit codes/stdout; defaults to success.
#[derive(Debug, Default)]
pub(crate) struct ScriptedRunner {
    script: RefCell<VecDeque<ExecOutput>>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub(crate) fn push(&self, exit_code: i32, stdout: &str) {
        self.script.borrow_mut().push_back(ExecOutput {
            exit_code,
            stdout: stdout.to_string(),
            stderr: String::new(),
        });
    }

    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    fn next(&self, args: &[String]) -> ExecOutput {
        self.calls.borrow_mut().push(args.to_vec());
        self.script.borrow_mut().pop_front().unwrap_or_default()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, _program: &str, args: &[String], _stdio: StdioMode) -> io::Result<i32> {
        Ok(self.next(args).exit_code)
    }

    fn capture(&self, _program: &str, args: &[String]) -> io::Result<ExecOutput> {
        Ok(self.next(args))
    }

    fn relay(&self, _text: &str) -> io::Result<()> {
        Ok(())
    }
}
