//! Settings that shape which external programs are invoked.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::commands::DEFAULT_BRIDGE;

/// Where the bridge, mirroring tool and terminal live, plus output options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeSettings {
    /// Bridge program name or path.
    #[serde(default = "default_bridge")]
    pub bridge: String,

    /// Screen mirroring executable.
    #[serde(default = "default_mirror_path")]
    pub mirror_path: String,

    /// Terminal launcher tokens placed before `adb shell` (platform default when unset).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<Vec<String>>,

    /// Directory transcripts are saved into (desktop when unset).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript_dir: Option<PathBuf>,

    /// Bound the log snapshot to the most recent N entries (full buffer when unset).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_lines: Option<u32>,
}

fn default_bridge() -> String {
    DEFAULT_BRIDGE.to_string()
}

#[cfg(target_os = "windows")]
fn default_mirror_path() -> String {
    r"C:\scrcpy-win64-v3.1\scrcpy-win64-v3.1\scrcpy.exe".to_string()
}

#[cfg(not(target_os = "windows"))]
fn default_mirror_path() -> String {
    "scrcpy".to_string()
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            bridge: default_bridge(),
            mirror_path: default_mirror_path(),
            terminal: None,
            transcript_dir: None,
            log_lines: None,
        }
    }
}
