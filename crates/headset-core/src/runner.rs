//! External process execution.
//!
//! Two contracts are kept apart on purpose:
//!
//! - [`CommandRunner::run`] spawns one process, blocks the calling thread until
//!   it exits, and captures its output. There is no timeout and no
//!   cancellation.
//! - [`CommandRunner::spawn_detached`] starts a process and returns at once.
//!   The child is neither waited for nor tracked.
//!
//! Failures of `run` are data, not control flow: a non-zero exit or a spawn
//! error comes back as a [`CommandResult`] whose text starts with
//! [`ERROR_MARKER`].

use std::fmt;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::commands::BridgeCommand;
use crate::error::{Error, Result};

/// Prefix of every failed invocation's text.
pub const ERROR_MARKER: &str = "Error executing command:";

/// Text captured from one completed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    text: String,
    succeeded: bool,
}

impl CommandResult {
    /// A successful result carrying the captured text verbatim.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            succeeded: true,
        }
    }

    /// A failed result; the text is prefixed with [`ERROR_MARKER`].
    pub fn failure(output: &str) -> Self {
        Self {
            text: format!("{}\n{}", ERROR_MARKER, output),
            succeeded: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn is_error(&self) -> bool {
        !self.succeeded
    }
}

impl From<Result<String>> for CommandResult {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(text) => Self::success(text),
            Err(e) => Self::failure(&e.captured_output()),
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Executes bridge commands.
///
/// Implemented by [`ProcessRunner`] for real processes and by
/// [`crate::mock::MockRunner`] for tests.
pub trait CommandRunner {
    /// Run to completion and return the typed outcome.
    fn run_checked(&self, command: &BridgeCommand) -> Result<String>;

    /// Start without waiting. Only spawn errors are reported.
    fn spawn_detached(&self, command: &BridgeCommand) -> Result<()>;

    /// Run to completion; failures are folded into the returned text.
    fn run(&self, command: &BridgeCommand) -> CommandResult {
        CommandResult::from(self.run_checked(command))
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run_checked(&self, command: &BridgeCommand) -> Result<String> {
        (**self).run_checked(command)
    }

    fn spawn_detached(&self, command: &BridgeCommand) -> Result<()> {
        (**self).spawn_detached(command)
    }
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }

    fn to_std(command: &BridgeCommand) -> Command {
        let mut cmd = Command::new(command.program());
        cmd.args(command.arguments());
        cmd
    }
}

impl CommandRunner for ProcessRunner {
    fn run_checked(&self, command: &BridgeCommand) -> Result<String> {
        let rendered = command.to_string();
        debug!("Running: {}", rendered);

        let output = Self::to_std(command)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                warn!("Failed to start '{}': {}", rendered, e);
                Error::spawn(rendered.clone(), e)
            })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        if output.status.success() {
            Ok(text)
        } else {
            warn!("'{}' exited with {:?}", rendered, output.status.code());
            Err(Error::exit_status(rendered, output.status.code(), text))
        }
    }

    fn spawn_detached(&self, command: &BridgeCommand) -> Result<()> {
        let rendered = command.to_string();
        debug!("Spawning detached: {}", rendered);

        Self::to_std(command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_child| ())
            .map_err(|e| {
                warn!("Failed to start '{}': {}", rendered, e);
                Error::spawn(rendered, e)
            })
    }
}
