//! Error types for headset-core.
//!
//! Nothing in this crate lets an error escape to the user interface. The
//! dispatch layer in [`crate::troubleshooter`] folds every variant into text
//! for the output pane. The typed errors exist so that callers (and tests) can
//! tell the failure classes apart:
//!
//! | Error Type | Raised by | Rendered as |
//! |------------|-----------|-------------|
//! | [`Error::Spawn`] | process could not be started | `Error executing command:` + OS error |
//! | [`Error::ExitStatus`] | process exited non-zero | `Error executing command:` + captured output |
//! | [`Error::Io`] | transcript write failed | `Error saving output: ...` |
//! | [`Error::NoOutputDirectory`] | no desktop directory could be resolved | `Error saving output: ...` |
//! | [`Error::UnknownDevice`] | selecting a device that is not listed | selection left unchanged |
//!
//! No operation is retried. Every failure is reported once per user trigger.

use std::io;

use thiserror::Error;

/// Errors that can occur while driving the bridge or saving a transcript.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The child process could not be spawned at all.
    #[error("Failed to start '{command}': {source}")]
    Spawn {
        /// Rendered command line.
        command: String,
        /// Underlying OS error.
        source: io::Error,
    },

    /// The child process ran but exited unsuccessfully.
    #[error("'{command}' exited with {}", describe_code(.code))]
    ExitStatus {
        /// Rendered command line.
        command: String,
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
        /// Whatever the process printed before exiting.
        output: String,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Neither a configured nor a platform desktop directory is available.
    #[error("No output directory available (desktop directory could not be resolved)")]
    NoOutputDirectory,

    /// A device id was requested that the last listing did not report.
    #[error("Device not listed: {0}")]
    UnknownDevice(String),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl Error {
    /// Create a spawn error for a rendered command line.
    pub fn spawn(command: impl Into<String>, source: io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Create an exit status error carrying the captured output.
    pub fn exit_status(command: impl Into<String>, code: Option<i32>, output: String) -> Self {
        Self::ExitStatus {
            command: command.into(),
            code,
            output,
        }
    }

    /// Text a failed invocation contributes to the output pane.
    ///
    /// For a non-zero exit this is the captured output; for anything else it
    /// is the error message itself.
    pub fn captured_output(&self) -> String {
        match self {
            Self::ExitStatus { output, .. } => output.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias using headset-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;
