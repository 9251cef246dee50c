//! CLI Integration Tests
//!
//! These tests run the built `headset` binary. None of them need a headset or
//! an `adb` installation: device commands are pointed at a bridge path that
//! does not exist, which exercises the failure rendering end to end.
//!
//! ```
//! cargo test --package headset-cli --test cli_integration
//! ```

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Run headset with config lookups confined to `home`.
fn run_headset(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_headset"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run headset binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_command() {
    let home = tempfile::tempdir().unwrap();
    let output = run_headset(home.path(), &["--help"]);
    assert!(output.status.success());

    let text = stdout(&output);
    for subcommand in [
        "devices", "battery", "reboot", "mirror", "logs", "shell", "diag", "wake", "config",
        "completions",
    ] {
        assert!(text.contains(subcommand), "help is missing {}", subcommand);
    }
}

#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    let output = run_headset(home.path(), &["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_diag_help_lists_queries() {
    let home = tempfile::tempdir().unwrap();
    let output = run_headset(home.path(), &["diag", "--help"]);
    assert!(output.status.success());

    let text = stdout(&output);
    for query in ["properties", "battery", "sensors", "camera", "display"] {
        assert!(text.contains(query), "diag help is missing {}", query);
    }
}

#[test]
fn test_unknown_subcommand_fails() {
    let home = tempfile::tempdir().unwrap();
    let output = run_headset(home.path(), &["teleport"]);
    assert!(!output.status.success());
}

#[test]
fn test_completions_bash() {
    let home = tempfile::tempdir().unwrap();
    let output = run_headset(home.path(), &["completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("headset"));
}

// =============================================================================
// Device Commands Against a Missing Bridge
// =============================================================================

#[test]
fn test_devices_with_missing_bridge_reports_error_text() {
    let home = tempfile::tempdir().unwrap();
    let output = run_headset(
        home.path(),
        &["devices", "--bridge", "/nonexistent/headset-test/adb"],
    );

    // Failures are rendered, not raised
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("Device Status:\nError executing command:\n"));
    assert!(text.contains("Selected: No devices"));
    assert!(text.trim_end().ends_with("Battery: N/A"));
}

#[test]
fn test_reboot_with_missing_bridge_is_refused() {
    let home = tempfile::tempdir().unwrap();
    let output = run_headset(
        home.path(),
        &["reboot", "--bridge", "/nonexistent/headset-test/adb"],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "No device selected.\n");
}

#[test]
fn test_reboot_unlisted_device_fails() {
    let home = tempfile::tempdir().unwrap();
    let output = run_headset(
        home.path(),
        &[
            "reboot",
            "--device",
            "1WMHH815K10123",
            "--bridge",
            "/nonexistent/headset-test/adb",
        ],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("1WMHH815K10123"));
}

#[test]
fn test_mirror_with_missing_tool_reports_error_text() {
    let home = tempfile::tempdir().unwrap();
    let output = run_headset(
        home.path(),
        &[
            "mirror",
            "--bridge",
            "/nonexistent/headset-test/adb",
            "--mirror",
            "/nonexistent/headset-test/scrcpy",
        ],
    );
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Error launching scrcpy:\n"));
}

// =============================================================================
// Config and Transcripts
// =============================================================================

#[cfg(target_os = "linux")]
#[test]
fn test_config_path_and_init() {
    let home = tempfile::tempdir().unwrap();

    let output = run_headset(home.path(), &["config", "path"]);
    assert!(output.status.success());
    let path = stdout(&output).trim().to_string();
    assert!(path.ends_with("headset-debug/config.toml"));
    assert!(path.starts_with(&home.path().display().to_string()));

    let output = run_headset(home.path(), &["config", "init"]);
    assert!(output.status.success());
    assert!(Path::new(&path).exists());

    // A second init refuses to overwrite
    let output = run_headset(home.path(), &["config", "init"]);
    assert!(!output.status.success());
}

#[cfg(target_os = "linux")]
#[test]
fn test_save_flag_writes_transcript() {
    let home = tempfile::tempdir().unwrap();
    let transcripts = tempfile::tempdir().unwrap();

    let config_dir = home.path().join(".config").join("headset-debug");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        format!(
            "[tools]\nbridge = \"/nonexistent/headset-test/adb\"\ntranscript_dir = \"{}\"\n",
            transcripts.path().display()
        ),
    )
    .unwrap();

    let output = run_headset(home.path(), &["logs", "--save"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("[OK] Output saved to "));

    let saved: Vec<_> = fs::read_dir(transcripts.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(saved.len(), 1);

    let name = saved[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("adb_output_"));
    assert!(name.ends_with(".txt"));

    let content = fs::read_to_string(&saved[0]).unwrap();
    assert_eq!(content.trim_end(), stdout(&output).trim_end());
    assert!(content.starts_with("Logs:\nError executing command:\n"));
}
