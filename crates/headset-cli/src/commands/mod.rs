//! Command implementations for the CLI.

mod action;
mod config;

pub use action::{OutputOptions, cmd_action, cmd_battery, cmd_devices, cmd_save, select_target};
pub use config::cmd_config;
