//! Config command implementation.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::ConfigAction;
use crate::config::Config;
use crate::style;

/// Run a `config` subcommand against the file at `path`.
///
/// `effective` is the loaded config with command-line overrides applied.
pub fn cmd_config(
    action: ConfigAction,
    path: &Path,
    effective: &Config,
    no_color: bool,
    out: &mut impl Write,
) -> Result<()> {
    match action {
        ConfigAction::Path => {
            writeln!(out, "{}", path.display())?;
        }
        ConfigAction::Show => {
            let content =
                toml::to_string_pretty(effective).context("Failed to serialize config")?;
            writeln!(out, "{}", style::format_title("Configuration", no_color))?;
            write!(out, "{}", content)?;
        }
        ConfigAction::Init => {
            Config::init_at(path)?;
            writeln!(
                out,
                "{}",
                style::format_success(
                    &format!("Wrote default config to {}", path.display()),
                    no_color
                )
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_path() {
        let path = Path::new("/tmp/headset-debug/config.toml");
        let mut out = Vec::new();
        cmd_config(ConfigAction::Path, path, &Config::default(), true, &mut out).unwrap();
        assert_eq!(printed(out), "/tmp/headset-debug/config.toml\n");
    }

    #[test]
    fn test_show_reflects_overrides() {
        let config = Config::default().with_overrides(Some("/sdk/adb".to_string()), None);
        let mut out = Vec::new();
        cmd_config(
            ConfigAction::Show,
            Path::new("unused"),
            &config,
            true,
            &mut out,
        )
        .unwrap();

        let text = printed(out);
        assert!(text.starts_with("Configuration\n"));
        assert!(text.contains("[tools]"));
        assert!(text.contains("bridge = \"/sdk/adb\""));
        assert!(text.contains("[gui]"));
    }

    #[test]
    fn test_init_writes_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut out = Vec::new();
        cmd_config(ConfigAction::Init, &path, &Config::default(), true, &mut out).unwrap();
        assert!(printed(out).starts_with("[OK] Wrote default config to "));
        assert!(path.exists());

        let result = cmd_config(
            ConfigAction::Init,
            &path,
            &Config::default(),
            true,
            &mut Vec::new(),
        );
        assert!(result.is_err());
    }
}
