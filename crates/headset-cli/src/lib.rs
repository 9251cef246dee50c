//! Command-line and desktop front-ends for troubleshooting a Meta Quest headset.
//!
//! Both front-ends drive the same [`headset_core::Troubleshooter`]: every
//! subcommand and every button maps to one action, and the text it renders is
//! printed (CLI) or shown in the output pane (GUI).
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `devices` | List devices, show the selection and battery level |
//! | `battery` | Battery level of the default device |
//! | `reboot` | Reboot the selected device |
//! | `mirror` | Start `scrcpy` in the background |
//! | `logs` | Snapshot of the device log |
//! | `shell` | Interactive `adb shell` in a new terminal window |
//! | `diag` | Properties, battery, sensors, camera or display query |
//! | `wake` | Send the wake key event |
//! | `config` | Manage the config file |
//! | `completions` | Generate shell completions |
//! | `gui` | Open the desktop window (feature `gui`) |
//!
//! A global `--save` flag writes the rendered output to a timestamped
//! transcript after any command.
//!
//! # Configuration
//!
//! Settings live in `~/.config/headset-debug/config.toml` (or platform
//! equivalent). `--bridge` and `--mirror` override the configured programs for
//! one run. `NO_COLOR` disables colored output.
//!
//! # Examples
//!
//! ```bash
//! headset devices
//! headset reboot --device 1WMHH815K10123
//! headset logs --lines 500 --save
//! headset diag sensors
//! ```

pub mod config;
pub mod style;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod commands;

#[cfg(feature = "gui")]
pub mod gui;

// Re-export core for convenience
pub use headset_core;
