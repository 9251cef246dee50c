//! Canned diagnostic queries offered in the "Hardware Check" menu.

use crate::commands::{Bridge, BridgeCommand};

/// A named diagnostic: a menu label plus the bridge arguments it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticQuery {
    pub label: &'static str,
    pub args: &'static [&'static str],
}

impl DiagnosticQuery {
    /// Unscoped bridge command for this query.
    pub fn command(&self, bridge: &Bridge) -> BridgeCommand {
        bridge.command(self.args.iter().copied())
    }
}

/// Menu entries, in display order.
pub const DIAGNOSTICS: &[DiagnosticQuery] = &[
    DiagnosticQuery {
        label: "Properties",
        args: &["shell", "getprop"],
    },
    DiagnosticQuery {
        label: "Battery",
        args: &["shell", "dumpsys", "battery"],
    },
    DiagnosticQuery {
        label: "Sensors",
        args: &["shell", "dumpsys", "sensorservice"],
    },
    DiagnosticQuery {
        label: "Camera",
        args: &["shell", "dumpsys", "media.camera"],
    },
    DiagnosticQuery {
        label: "Display",
        args: &["shell", "dumpsys", "display"],
    },
];
