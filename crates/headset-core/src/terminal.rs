//! Hosting an interactive bridge shell in a new terminal window.

use crate::commands::BridgeCommand;

/// Wrap `inner` so that it runs inside a new terminal window.
///
/// `launcher` overrides the platform default; its tokens are placed before
/// the inner program and arguments.
pub fn in_new_terminal(inner: &BridgeCommand, launcher: Option<&[String]>) -> BridgeCommand {
    match launcher {
        Some([program, rest @ ..]) => BridgeCommand::new(program.clone())
            .args(rest.iter().cloned())
            .arg(inner.program())
            .args(inner.arguments().iter().cloned()),
        _ => platform_default(inner),
    }
}

#[cfg(target_os = "windows")]
fn platform_default(inner: &BridgeCommand) -> BridgeCommand {
    BridgeCommand::new("cmd")
        .args(["/C", "start", "cmd", "/K"])
        .arg(inner.program())
        .args(inner.arguments().iter().cloned())
}

#[cfg(target_os = "macos")]
fn platform_default(inner: &BridgeCommand) -> BridgeCommand {
    let script = format!(
        "tell application \"Terminal\" to do script \"{}\"",
        inner.to_string().replace('\\', "\\\\").replace('"', "\\\"")
    );
    BridgeCommand::new("osascript").arg("-e").arg(script)
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn platform_default(inner: &BridgeCommand) -> BridgeCommand {
    BridgeCommand::new("x-terminal-emulator")
        .arg("-e")
        .arg(inner.program())
        .args(inner.arguments().iter().cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Bridge;

    #[test]
    fn test_custom_launcher_prefixes_inner_command() {
        let launcher = vec!["gnome-terminal".to_string(), "--".to_string()];
        let cmd = in_new_terminal(&Bridge::default().shell(), Some(launcher.as_slice()));
        assert_eq!(cmd.to_string(), "gnome-terminal -- adb shell");
    }

    #[test]
    fn test_empty_launcher_uses_platform_default() {
        let inner = Bridge::default().shell();
        assert_eq!(in_new_terminal(&inner, Some(&[])), in_new_terminal(&inner, None));
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    #[test]
    fn test_linux_default() {
        let cmd = in_new_terminal(&Bridge::default().shell(), None);
        assert_eq!(cmd.to_string(), "x-terminal-emulator -e adb shell");
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn test_windows_default() {
        let cmd = in_new_terminal(&Bridge::default().shell(), None);
        assert_eq!(cmd.to_string(), "cmd /C start cmd /K adb shell");
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_macos_default() {
        let cmd = in_new_terminal(&Bridge::default().shell(), None);
        assert_eq!(cmd.program(), "osascript");
        assert!(cmd.arguments()[1].contains("do script \"adb shell\""));
    }
}
