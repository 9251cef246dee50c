//! Attached device discovery and selection.
//!
//! The bridge prints a header line followed by one row per device:
//!
//! ```text
//! List of devices attached
//! 1WMHH815K10123	device
//! emulator-5554	offline
//! ```
//!
//! Only the first whitespace-delimited token of each row is used.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::commands::Bridge;
use crate::error::{Error, Result};
use crate::runner::{CommandResult, CommandRunner};

/// Label shown when no device is available.
pub const NO_DEVICE_LABEL: &str = "No devices";

/// Identifier of an attached device, exactly as the bridge reports it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The device subsequent scoped commands target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectedDevice {
    /// A device from the last listing.
    Device(DeviceId),
    /// Nothing listed; commands fall back to the bridge's default device.
    #[default]
    NoDevice,
}

impl SelectedDevice {
    pub fn device(&self) -> Option<&DeviceId> {
        match self {
            Self::Device(id) => Some(id),
            Self::NoDevice => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::NoDevice)
    }
}

impl fmt::Display for SelectedDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Device(id) => write!(f, "{}", id),
            Self::NoDevice => f.write_str(NO_DEVICE_LABEL),
        }
    }
}

/// Parse the device listing into ids, in listing order.
///
/// The output is trimmed, the first line (header) is discarded, and the first
/// token of every remaining non-blank line becomes a [`DeviceId`].
pub fn parse_device_list(output: &str) -> Vec<DeviceId> {
    output
        .trim()
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .map(DeviceId::new)
        .collect()
}

/// The selectable device set plus the current selection.
#[derive(Debug, Clone, Default)]
pub struct DeviceRegistry {
    devices: Vec<DeviceId>,
    selected: SelectedDevice,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Devices from the last listing.
    pub fn devices(&self) -> &[DeviceId] {
        &self.devices
    }

    pub fn selected(&self) -> &SelectedDevice {
        &self.selected
    }

    /// Replace the selectable set; selection moves to the first entry, or to
    /// [`SelectedDevice::NoDevice`] when the set is empty.
    pub fn replace(&mut self, devices: Vec<DeviceId>) {
        self.selected = match devices.first() {
            Some(first) => SelectedDevice::Device(first.clone()),
            None => SelectedDevice::NoDevice,
        };
        self.devices = devices;
        debug!(count = self.devices.len(), selected = %self.selected, "Device list replaced");
    }

    /// Run the listing command and repopulate from its output.
    ///
    /// Returns the raw result so callers can render it. A failed listing
    /// empties the registry rather than parsing the error text as devices.
    pub fn refresh<R: CommandRunner + ?Sized>(
        &mut self,
        runner: &R,
        bridge: &Bridge,
    ) -> CommandResult {
        let result = runner.run(&bridge.list_devices());
        let devices = if result.succeeded() {
            parse_device_list(result.text())
        } else {
            Vec::new()
        };
        info!("Found {} device(s)", devices.len());
        self.replace(devices);
        result
    }

    /// Select a device from the current listing.
    pub fn select(&mut self, id: &str) -> Result<()> {
        let device = self
            .devices
            .iter()
            .find(|d| d.as_str() == id)
            .cloned()
            .ok_or_else(|| Error::UnknownDevice(id.to_string()))?;
        self.selected = SelectedDevice::Device(device);
        Ok(())
    }
}
