//! Subprocess boundary for backend adapters.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::backend::Backend;
use crate::error::MuxError;

use super::{MuxResult, Operation};

/// How a passthrough command's standard streams are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Inherit the terminal (interactive attach, listings printed verbatim).
    Inherit,
    /// Discard output; used for background session creation.
    Null,
}

/// Captured result of one subprocess.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutput {
    /// Exit status, `-1` when the process was killed by a signal.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Executes backend binaries. Implemented by [`SystemRunner`] and by test fakes.
pub trait CommandRunner {
    /// Run `program` with `args` and return its exit status.
    fn run(&self, program: &str, args: &[String], stdio: StdioMode) -> io::Result<i32>;
    /// Run `program` with `args`, capturing stdout and stderr.
    fn capture(&self, program: &str, args: &[String]) -> io::Result<ExecOutput>;

    /// Hand adapter-produced text (filtered listings, notes) to the user.
    fn relay(&self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, program: &str, args: &[String], stdio: StdioMode) -> io::Result<i32> {
        (**self).run(program, args, stdio)
    }

    fn capture(&self, program: &str, args: &[String]) -> io::Result<ExecOutput> {
        (**self).capture(program, args)
    }

    fn relay(&self, text: &str) -> io::Result<()> {
        (**self).relay(text)
    }
}

/// Real runner backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], stdio: StdioMode) -> io::Result<i32> {
        debug!(program, ?args, ?stdio, "running backend command");
        let mut cmd = Command::new(program);
        cmd.args(args);
        if stdio == StdioMode::Null {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());
        }
        let status = cmd.status()?;
        Ok(status.code().unwrap_or(-1))
    }

    fn capture(&self, program: &str, args: &[String]) -> io::Result<ExecOutput> {
        debug!(program, ?args, "capturing backend command");
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;
        Ok(ExecOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Binds a runner to one backend binary and maps failures to [`MuxError`].
#[derive(Clone, Copy)]
pub(crate) struct Invoker<'a> {
    runner: &'a dyn CommandRunner,
    backend: Backend,
}

impl<'a> Invoker<'a> {
    pub(crate) fn new(runner: &'a dyn CommandRunner, backend: Backend) -> Self {
        Self { runner, backend }
    }

    /// Run with the terminal attached; non-zero exit is an error.
    pub(crate) fn run(&self, operation: Operation, args: &[&str]) -> MuxResult {
        self.run_with(operation, args, StdioMode::Inherit)
    }

    /// Run with output discarded; non-zero exit is an error.
    pub(crate) fn run_quiet(&self, operation: Operation, args: &[&str]) -> MuxResult {
        self.run_with(operation, args, StdioMode::Null)
    }

    /// Capture output. Only spawn failures are errors; callers inspect the status.
    pub(crate) fn capture(
        &self,
        operation: Operation,
        args: &[&str],
    ) -> Result<ExecOutput, MuxError> {
        self.runner
            .capture(self.backend.binary(), &owned(args))
            .map_err(|source| self.spawn_error(operation, source))
    }

    /// Capture output, treating a non-zero exit as an error.
    pub(crate) fn capture_ok(
        &self,
        operation: Operation,
        args: &[&str],
    ) -> Result<ExecOutput, MuxError> {
        let output = self.capture(operation, args)?;
        if output.success() {
            Ok(output)
        } else {
            Err(self.status_error(operation, output.exit_code))
        }
    }

    /// True only when the command spawns and exits zero.
    pub(crate) fn probe(&self, args: &[&str]) -> bool {
        match self.runner.capture(self.backend.binary(), &owned(args)) {
            Ok(output) => output.success(),
            Err(e) => {
                debug!(backend = %self.backend, error = %e, "probe command failed to start");
                false
            }
        }
    }

    /// Print text on the user's stdout. Write failures are logged, not fatal.
    pub(crate) fn relay(&self, text: &str) {
        if let Err(e) = self.runner.relay(text) {
            debug!(backend = %self.backend, error = %e, "could not relay output");
        }
    }

    fn run_with(&self, operation: Operation, args: &[&str], stdio: StdioMode) -> MuxResult {
        let code = self
            .runner
            .run(self.backend.binary(), &owned(args), stdio)
            .map_err(|source| self.spawn_error(operation, source))?;
        if code == 0 {
            Ok(())
        } else {
            Err(self.status_error(operation, code))
        }
    }

    pub(crate) fn status_error(&self, operation: Operation, code: i32) -> MuxError {
        MuxError::Status {
            backend: self.backend,
            operation,
            code,
        }
    }

    fn spawn_error(&self, operation: Operation, source: io::Error) -> MuxError {
        MuxError::Spawn {
            backend: self.backend,
            operation,
            source,
        }
    }
}

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| (*arg).to_string()).collect()
}
