//! Scripted command runner for testing.
//!
//! [`MockRunner`] implements [`CommandRunner`] without starting any process.
//! Responses are keyed by the rendered command line, and every call is
//! recorded so tests can assert exactly which commands ran.
//!
//! # Features
//!
//! - **Scripted output**: return fixed text for a given command line
//! - **Failure injection**: non-zero exits and spawn failures per command or program
//! - **Call log**: blocking and detached invocations, in order
//!
//! # Example
//!
//! ```
//! use headset_core::mock::MockRunner;
//! use headset_core::{BridgeCommand, CommandRunner};
//!
//! let runner = MockRunner::new()
//!     .respond("adb devices", "List of devices attached\n")
//!     .fail("adb reboot", Some(1), "error: no devices/emulators found");
//!
//! let result = runner.run(&BridgeCommand::new("adb").arg("reboot"));
//! assert!(result.is_error());
//! assert_eq!(runner.run_count(), 1);
//! ```

use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::Mutex;

use crate::commands::BridgeCommand;
use crate::error::{Error, Result};
use crate::runner::CommandRunner;

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Rendered command line.
    pub command: String,
    /// Whether it was a fire-and-forget spawn.
    pub detached: bool,
}

#[derive(Debug, Clone)]
enum Scripted {
    Output(String),
    Exit { code: Option<i32>, output: String },
}

/// A command runner that never spawns processes.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: HashMap<String, Scripted>,
    missing_programs: HashSet<String>,
    calls: Mutex<Vec<Invocation>>,
}

impl MockRunner {
    /// Create a runner that answers every command with empty, successful output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command` with successful `output`.
    pub fn respond(mut self, command: &str, output: &str) -> Self {
        self.responses
            .insert(command.to_string(), Scripted::Output(output.to_string()));
        self
    }

    /// Make `command` exit unsuccessfully after printing `output`.
    pub fn fail(mut self, command: &str, code: Option<i32>, output: &str) -> Self {
        self.responses.insert(
            command.to_string(),
            Scripted::Exit {
                code,
                output: output.to_string(),
            },
        );
        self
    }

    /// Make every command whose program is `program` fail to spawn.
    pub fn missing_program(mut self, program: &str) -> Self {
        self.missing_programs.insert(program.to_string());
        self
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Rendered command lines of all recorded calls.
    pub fn commands(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.command).collect()
    }

    /// Number of blocking invocations.
    pub fn run_count(&self) -> usize {
        self.calls().iter().filter(|c| !c.detached).count()
    }

    /// Number of detached spawns.
    pub fn detached_count(&self) -> usize {
        self.calls().iter().filter(|c| c.detached).count()
    }

    /// Total number of invocations of any kind.
    pub fn invocation_count(&self) -> usize {
        self.calls().len()
    }

    /// Forget all recorded calls.
    pub fn reset_calls(&self) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.clear();
        }
    }

    fn record(&self, command: &BridgeCommand, detached: bool) -> String {
        let rendered = command.to_string();
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(Invocation {
                command: rendered.clone(),
                detached,
            });
        }
        rendered
    }

    fn check_spawn(&self, command: &BridgeCommand, rendered: &str) -> Result<()> {
        if self.missing_programs.contains(command.program()) {
            return Err(Error::spawn(
                rendered,
                io::Error::new(io::ErrorKind::NotFound, "program not found"),
            ));
        }
        Ok(())
    }
}

impl CommandRunner for MockRunner {
    fn run_checked(&self, command: &BridgeCommand) -> Result<String> {
        let rendered = self.record(command, false);
        self.check_spawn(command, &rendered)?;
        match self.responses.get(&rendered) {
            Some(Scripted::Output(text)) => Ok(text.clone()),
            Some(Scripted::Exit { code, output }) => {
                Err(Error::exit_status(rendered, *code, output.clone()))
            }
            None => Ok(String::new()),
        }
    }

    fn spawn_detached(&self, command: &BridgeCommand) -> Result<()> {
        let rendered = self.record(command, true);
        self.check_spawn(command, &rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::ERROR_MARKER;

    #[test]
    fn test_unscripted_command_succeeds_empty() {
        let runner = MockRunner::new();
        let result = runner.run(&BridgeCommand::new("adb").arg("devices"));
        assert!(result.succeeded());
        assert_eq!(result.text(), "");
    }

    #[test]
    fn test_scripted_output() {
        let runner = MockRunner::new().respond("adb shell getprop", "[ro.product.model]: [Quest 3]\n");
        let result = runner.run(&BridgeCommand::new("adb").args(["shell", "getprop"]));
        assert_eq!(result.text(), "[ro.product.model]: [Quest 3]\n");
    }

    #[test]
    fn test_scripted_failure() {
        let runner = MockRunner::new().fail("adb reboot", Some(1), "device offline");
        let result = runner.run(&BridgeCommand::new("adb").arg("reboot"));
        assert!(result.text().starts_with(ERROR_MARKER));
        assert!(result.text().ends_with("device offline"));
    }

    #[test]
    fn test_missing_program_fails_both_contracts() {
        let runner = MockRunner::new().missing_program("scrcpy");
        let cmd = BridgeCommand::new("scrcpy");
        assert!(runner.run(&cmd).is_error());
        assert!(matches!(runner.spawn_detached(&cmd), Err(Error::Spawn { .. })));
    }

    #[test]
    fn test_calls_are_recorded_in_order() {
        let runner = MockRunner::new();
        runner.run(&BridgeCommand::new("adb").arg("devices"));
        runner.spawn_detached(&BridgeCommand::new("scrcpy")).unwrap();

        assert_eq!(
            runner.calls(),
            vec![
                Invocation {
                    command: "adb devices".to_string(),
                    detached: false,
                },
                Invocation {
                    command: "scrcpy".to_string(),
                    detached: true,
                },
            ]
        );
        assert_eq!(runner.run_count(), 1);
        assert_eq!(runner.detached_count(), 1);

        runner.reset_calls();
        assert_eq!(runner.invocation_count(), 0);
    }
}
