//! Bridge command construction.
//!
//! A [`BridgeCommand`] is a program plus its argument vector. Commands are
//! never interpolated into a shell string; the rendered form produced by
//! [`std::fmt::Display`] exists only for labels and logs.

use std::fmt;

use crate::devices::{DeviceId, SelectedDevice};

/// Flag the bridge uses to pin a command to one device.
pub const DEVICE_FLAG: &str = "-s";

/// Bridge program used when nothing else is configured.
pub const DEFAULT_BRIDGE: &str = "adb";

/// Key event that wakes the display.
pub const WAKE_KEYCODE: &str = "KEYCODE_WAKEUP";

/// A single external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeCommand {
    program: String,
    args: Vec<String>,
}

impl BridgeCommand {
    /// Create a command with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Program to execute.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program.
    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    /// Pin the command to `device` by inserting the selection flag directly
    /// after the program token.
    pub fn scoped_to(mut self, device: &DeviceId) -> Self {
        self.args
            .splice(0..0, [DEVICE_FLAG.to_string(), device.to_string()]);
        self
    }

    /// Scope to the selected device, or leave the command unscoped so the
    /// bridge resolves its own default device.
    pub fn scoped(self, selected: &SelectedDevice) -> Self {
        match selected.device() {
            Some(device) => self.scoped_to(device),
            None => self,
        }
    }

    /// Append the selection flag at the end (mirroring tools take it last).
    pub fn with_trailing_device(self, selected: &SelectedDevice) -> Self {
        match selected.device() {
            Some(device) => self.arg(DEVICE_FLAG).arg(device.as_str()),
            None => self,
        }
    }
}

impl fmt::Display for BridgeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

fn quote(token: &str) -> String {
    if token.is_empty() || token.chars().any(char::is_whitespace) {
        format!("\"{}\"", token)
    } else {
        token.to_string()
    }
}

/// Builds the fixed set of bridge commands for one bridge program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bridge {
    program: String,
}

impl Default for Bridge {
    fn default() -> Self {
        Self::new(DEFAULT_BRIDGE)
    }
}

impl Bridge {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Base invocation with the given arguments.
    pub fn command<I, S>(&self, args: I) -> BridgeCommand
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BridgeCommand::new(self.program.clone()).args(args)
    }

    /// `adb devices`
    pub fn list_devices(&self) -> BridgeCommand {
        self.command(["devices"])
    }

    /// `adb shell dumpsys battery`
    pub fn battery_dump(&self) -> BridgeCommand {
        self.command(["shell", "dumpsys", "battery"])
    }

    /// `adb reboot`
    pub fn reboot(&self) -> BridgeCommand {
        self.command(["reboot"])
    }

    /// `adb logcat -d`, optionally bounded to the last `lines` entries.
    pub fn log_dump(&self, lines: Option<u32>) -> BridgeCommand {
        let cmd = self.command(["logcat", "-d"]);
        match lines {
            Some(n) => cmd.arg("-t").arg(n.to_string()),
            None => cmd,
        }
    }

    /// `adb shell`
    pub fn shell(&self) -> BridgeCommand {
        self.command(["shell"])
    }

    /// `adb shell input keyevent KEYCODE_WAKEUP`
    pub fn wake(&self) -> BridgeCommand {
        self.command(["shell", "input", "keyevent", WAKE_KEYCODE])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(id: &str) -> SelectedDevice {
        SelectedDevice::Device(DeviceId::new(id))
    }

    #[test]
    fn test_display_joins_program_and_args() {
        let cmd = Bridge::default().battery_dump();
        assert_eq!(cmd.to_string(), "adb shell dumpsys battery");
    }

    #[test]
    fn test_display_quotes_tokens_with_spaces() {
        let cmd = BridgeCommand::new(r"C:\Program Files\scrcpy\scrcpy.exe").arg("-s");
        assert_eq!(cmd.to_string(), r#""C:\Program Files\scrcpy\scrcpy.exe" -s"#);
    }

    #[test]
    fn test_scoped_inserts_flag_after_program() {
        let cmd = Bridge::default().reboot().scoped(&device("1WMHH815K10123"));
        assert_eq!(cmd.program(), "adb");
        assert_eq!(cmd.arguments(), ["-s", "1WMHH815K10123", "reboot"]);
        assert_eq!(cmd.to_string(), "adb -s 1WMHH815K10123 reboot");
    }

    #[test]
    fn test_scoped_with_sentinel_is_unchanged() {
        let cmd = Bridge::default().reboot();
        assert_eq!(cmd.clone().scoped(&SelectedDevice::NoDevice), cmd);
    }

    #[test]
    fn test_trailing_device_flag() {
        let cmd = BridgeCommand::new("/opt/scrcpy/scrcpy").with_trailing_device(&device("emulator-5554"));
        assert_eq!(cmd.to_string(), "/opt/scrcpy/scrcpy -s emulator-5554");

        let cmd = BridgeCommand::new("/opt/scrcpy/scrcpy").with_trailing_device(&SelectedDevice::NoDevice);
        assert_eq!(cmd.to_string(), "/opt/scrcpy/scrcpy");
    }

    #[test]
    fn test_log_dump_variants() {
        let bridge = Bridge::default();
        assert_eq!(bridge.log_dump(None).to_string(), "adb logcat -d");
        assert_eq!(bridge.log_dump(Some(500)).to_string(), "adb logcat -d -t 500");
    }

    #[test]
    fn test_custom_bridge_program() {
        let bridge = Bridge::new("/usr/lib/android-sdk/platform-tools/adb");
        assert_eq!(
            bridge.wake().to_string(),
            "/usr/lib/android-sdk/platform-tools/adb shell input keyevent KEYCODE_WAKEUP"
        );
    }
}
