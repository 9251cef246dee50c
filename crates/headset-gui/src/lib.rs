//! # Headset GUI
//!
//! Desktop window for inspecting and controlling a Meta Quest headset through
//! `adb`.
//!
//! ## Usage
//!
//! ```sh
//! headset-gui
//! ```
//!
//! ### Options
//!
//! - `--bridge <PATH>` - Bridge program to use instead of the configured one
//! - `--mirror <PATH>` - Mirroring executable to use instead of the configured one
//! - `--no-wake` - Do not send the wake key event at launch
//! - `--no-refresh` - Do not list devices or read the battery at launch
//!
//! ## Library Usage
//!
//! For programmatic access see the `headset-core` crate.

// The library target exists for documentation only.
