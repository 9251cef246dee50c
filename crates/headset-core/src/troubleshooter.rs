//! Application state and action dispatch.
//!
//! [`Troubleshooter`] owns everything the user interface displays: the device
//! registry, the output pane and the battery label. Front-ends never mutate
//! that state directly; they send an [`Action`] through
//! [`Troubleshooter::dispatch`] (or call the matching handler) and read the
//! result back.
//!
//! Every handler runs synchronously and blocks until its external process
//! exits, except [`Action::LaunchMirror`] and [`Action::OpenShell`], which
//! start a detached process and return at once.
//!
//! # Example
//!
//! ```
//! use headset_core::mock::MockRunner;
//! use headset_core::{Action, BridgeSettings, Troubleshooter};
//!
//! let runner = MockRunner::new()
//!     .respond("adb devices", "List of devices attached\n1WMHH815K10123\tdevice\n")
//!     .respond("adb shell dumpsys battery", "  level: 64\n  scale: 100\n");
//!
//! let mut app = Troubleshooter::new(runner, BridgeSettings::default());
//! app.dispatch(Action::RefreshStatus);
//!
//! assert_eq!(app.selected().to_string(), "1WMHH815K10123");
//! assert_eq!(app.battery().to_string(), "Battery: 64%");
//! ```

use std::fmt;

use chrono::Local;
use tracing::{info, warn};

use crate::battery::{BatteryReading, BatteryStatus};
use crate::commands::{Bridge, BridgeCommand};
use crate::devices::{DeviceRegistry, SelectedDevice};
use crate::diagnostics::DiagnosticQuery;
use crate::error::Result;
use crate::pane::OutputPane;
use crate::runner::{CommandResult, CommandRunner};
use crate::settings::BridgeSettings;
use crate::terminal::in_new_terminal;
use crate::transcript::{SaveOutcome, resolve_transcript_dir, save_transcript};

/// Message rendered when reboot is requested without a device.
pub const NO_DEVICE_SELECTED: &str = "No device selected.";

/// Message rendered when the pane is blank at save time.
pub const NOTHING_TO_SAVE: &str = "Nothing to save.";

/// A user-triggered operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// List devices, repopulate the selection, refresh the battery label.
    RefreshStatus,
    /// Re-read the battery label only.
    RefreshBattery,
    /// Reboot the selected device (refused without one).
    Reboot,
    /// Start the mirroring tool, detached.
    LaunchMirror,
    /// One-shot log snapshot.
    DisplayLogs,
    /// Interactive shell in a new terminal window, detached.
    OpenShell,
    /// One of the canned diagnostic queries.
    RunDiagnostic(&'static DiagnosticQuery),
    /// Send the wake key event.
    Wake,
    /// Write the pane to a timestamped file.
    SaveTranscript,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RefreshStatus => f.write_str("Update Status"),
            Self::RefreshBattery => f.write_str("Refresh Battery"),
            Self::Reboot => f.write_str("Reboot Headset"),
            Self::LaunchMirror => f.write_str("Launch scrcpy"),
            Self::DisplayLogs => f.write_str("Display Logs"),
            Self::OpenShell => f.write_str("Open ADB Shell"),
            Self::RunDiagnostic(query) => write!(f, "Hardware Check: {}", query.label),
            Self::Wake => f.write_str("Wake Device"),
            Self::SaveTranscript => f.write_str("Save Output"),
        }
    }
}

/// Application state plus the handlers that mutate it.
#[derive(Debug)]
pub struct Troubleshooter<R> {
    runner: R,
    settings: BridgeSettings,
    bridge: Bridge,
    registry: DeviceRegistry,
    pane: OutputPane,
    battery: BatteryStatus,
}

impl<R: CommandRunner> Troubleshooter<R> {
    pub fn new(runner: R, settings: BridgeSettings) -> Self {
        let bridge = Bridge::new(settings.bridge.clone());
        Self {
            runner,
            settings,
            bridge,
            registry: DeviceRegistry::new(),
            pane: OutputPane::new(),
            battery: BatteryStatus::Unavailable,
        }
    }

    // --- State accessors ---

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn settings(&self) -> &BridgeSettings {
        &self.settings
    }

    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    pub fn selected(&self) -> &SelectedDevice {
        self.registry.selected()
    }

    pub fn output(&self) -> &str {
        self.pane.text()
    }

    pub fn battery(&self) -> BatteryStatus {
        self.battery
    }

    /// Pick another listed device for scoped commands.
    pub fn select_device(&mut self, id: &str) -> Result<()> {
        self.registry.select(id)?;
        info!("Selected device {}", id);
        Ok(())
    }

    /// Replace the pane contents directly (used for front-end messages).
    pub fn render(&mut self, text: impl Into<String>) {
        self.pane.render(text);
    }

    // --- Dispatch ---

    /// Route an action to its handler.
    pub fn dispatch(&mut self, action: Action) {
        info!("Action: {}", action);
        match action {
            Action::RefreshStatus => self.refresh_status(),
            Action::RefreshBattery => {
                self.refresh_battery();
            }
            Action::Reboot => self.reboot(),
            Action::LaunchMirror => self.launch_mirror(),
            Action::DisplayLogs => self.display_logs(),
            Action::OpenShell => self.open_shell(),
            Action::RunDiagnostic(query) => self.run_diagnostic(query),
            Action::Wake => self.wake(),
            Action::SaveTranscript => {
                self.save_transcript();
            }
        }
    }

    /// Wake the device and/or refresh status, in that order.
    pub fn startup(&mut self, wake: bool, refresh: bool) {
        if wake {
            self.dispatch(Action::Wake);
        }
        if refresh {
            self.dispatch(Action::RefreshStatus);
        }
    }

    // --- Handlers ---

    pub fn refresh_status(&mut self) {
        let result = self.refresh_devices();
        self.pane.render(format!("Device Status:\n{}", result));
        self.refresh_battery();
    }

    /// Re-list devices without touching the pane or the battery label.
    pub fn refresh_devices(&mut self) -> CommandResult {
        self.registry.refresh(&self.runner, &self.bridge)
    }

    /// Run the battery dump against the bridge's default device.
    pub fn refresh_battery(&mut self) -> BatteryStatus {
        let result = self.runner.run(&self.bridge.battery_dump());
        self.battery = BatteryReading::parse(result.text()).status();
        self.battery
    }

    pub fn reboot(&mut self) {
        if self.selected().is_none() {
            self.pane.render(NO_DEVICE_SELECTED);
            return;
        }
        let command = self.bridge.reboot().scoped(self.registry.selected());
        let result = self.runner.run(&command);
        self.pane.render(format!("Reboot Command Output:\n{}", result));
        self.refresh_battery();
    }

    /// Mirroring falls back to the tool's own default device when none is selected.
    pub fn launch_mirror(&mut self) {
        let command = BridgeCommand::new(self.settings.mirror_path.clone())
            .with_trailing_device(self.registry.selected());
        match self.runner.spawn_detached(&command) {
            Ok(()) => self.pane.render("Launching scrcpy..."),
            Err(e) => {
                warn!("Mirror launch failed: {}", e);
                self.pane.render(format!("Error launching scrcpy:\n{}", e));
            }
        }
    }

    pub fn display_logs(&mut self) {
        let result = self.runner.run(&self.bridge.log_dump(self.settings.log_lines));
        self.pane.render(format!("Logs:\n{}", result));
    }

    pub fn open_shell(&mut self) {
        let command = in_new_terminal(&self.bridge.shell(), self.settings.terminal.as_deref());
        match self.runner.spawn_detached(&command) {
            Ok(()) => self
                .pane
                .render("Opened ADB shell in a new terminal window."),
            Err(e) => {
                warn!("Shell launch failed: {}", e);
                self.pane.render(format!("Error opening ADB shell: {}", e));
            }
        }
    }

    /// Diagnostics fall back to the bridge's default device when none is selected.
    pub fn run_diagnostic(&mut self, query: &DiagnosticQuery) {
        let command = query.command(&self.bridge).scoped(self.registry.selected());
        let result = self.runner.run(&command);
        self.pane
            .render(format!("Output for '{}':\n{}", command, result));
    }

    pub fn wake(&mut self) {
        let result = self.runner.run(&self.bridge.wake());
        self.pane.render(format!("Waking up device...\n{}", result));
    }

    /// Save the pane as it is now, timestamped with the current local time.
    pub fn save_transcript(&mut self) -> Option<SaveOutcome> {
        // Blank panes never resolve a directory or touch the filesystem
        if self.pane.is_blank() {
            self.pane.render(NOTHING_TO_SAVE);
            return Some(SaveOutcome::Empty);
        }

        let outcome = resolve_transcript_dir(self.settings.transcript_dir.as_deref())
            .and_then(|dir| save_transcript(self.pane.text(), &dir, &Local::now()));

        match outcome {
            Ok(SaveOutcome::Empty) => {
                self.pane.render(NOTHING_TO_SAVE);
                Some(SaveOutcome::Empty)
            }
            Ok(SaveOutcome::Saved(path)) => {
                self.pane
                    .render(format!("Output saved to {}", path.display()));
                Some(SaveOutcome::Saved(path))
            }
            Err(e) => {
                warn!("Saving transcript failed: {}", e);
                self.pane.render(format!("Error saving output: {}", e));
                None
            }
        }
    }
}
