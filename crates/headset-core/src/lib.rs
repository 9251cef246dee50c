//! Core library for inspecting and controlling a headset through `adb`.
//!
//! Every operation is delegated to an external process: the Android Debug
//! Bridge for device work, `scrcpy` for screen mirroring, and a terminal
//! emulator for interactive shells. This crate builds those command lines,
//! runs them, and turns their plain-text output into what the front-ends show.
//!
//! # Features
//!
//! - **Device listing**: parse `adb devices` and track the selected device
//! - **Battery**: derive a percentage from `dumpsys battery`
//! - **Actions**: reboot, mirror, log snapshot, remote shell, wake
//! - **Diagnostics**: canned `getprop`/`dumpsys` queries
//! - **Transcripts**: save the output pane to a timestamped file
//! - **Testing**: [`mock::MockRunner`] scripts command output without processes
//!
//! # Execution model
//!
//! Everything is synchronous. A blocking command holds the calling thread
//! until the child exits; there are no timeouts, retries or background tasks.
//! Only mirroring and the remote shell are spawned detached.
//!
//! # Quick Start
//!
//! ```no_run
//! use headset_core::{Action, BridgeSettings, ProcessRunner, Troubleshooter};
//!
//! let mut app = Troubleshooter::new(ProcessRunner::new(), BridgeSettings::default());
//! app.dispatch(Action::RefreshStatus);
//!
//! println!("{}", app.output());
//! println!("{}", app.battery());
//! ```

pub mod battery;
pub mod commands;
pub mod devices;
pub mod diagnostics;
pub mod error;
pub mod mock;
pub mod pane;
pub mod runner;
pub mod settings;
pub mod terminal;
pub mod transcript;
pub mod troubleshooter;

pub use battery::{BatteryReading, BatteryStatus};
pub use commands::{Bridge, BridgeCommand};
pub use devices::{DeviceId, DeviceRegistry, SelectedDevice, parse_device_list};
pub use diagnostics::{DIAGNOSTICS, DiagnosticQuery};
pub use error::{Error, Result};
pub use pane::OutputPane;
pub use runner::{CommandResult, CommandRunner, ERROR_MARKER, ProcessRunner};
pub use settings::BridgeSettings;
pub use transcript::SaveOutcome;
pub use troubleshooter::{Action, Troubleshooter};
