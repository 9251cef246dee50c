//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use headset_core::DiagnosticQuery;
use headset_core::diagnostics;

#[derive(Debug, Parser)]
#[command(name = "headset")]
#[command(
    author,
    version,
    about = "Troubleshoot a Meta Quest headset over adb",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also honors NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Bridge program to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub bridge: Option<String>,

    /// Mirroring executable to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub mirror: Option<String>,

    /// Save the output to a timestamped transcript after the command runs
    #[arg(long, global = true)]
    pub save: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List connected devices and show the battery level
    Devices,

    /// Show the battery level of the default device
    Battery,

    /// Reboot a device
    Reboot {
        #[command(flatten)]
        device: DeviceArgs,
    },

    /// Start screen mirroring in the background
    Mirror {
        #[command(flatten)]
        device: DeviceArgs,
    },

    /// Print a snapshot of the device log
    Logs {
        /// Only print the most recent N entries
        #[arg(short = 'n', long, value_name = "N")]
        lines: Option<u32>,
    },

    /// Open an interactive adb shell in a new terminal window
    Shell,

    /// Run a hardware diagnostic query
    Diag {
        /// Which query to run
        #[arg(value_enum)]
        query: DiagnosticName,

        #[command(flatten)]
        device: DeviceArgs,
    },

    /// Send the wake key event
    Wake,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Launch the desktop window
    #[cfg(feature = "gui")]
    Gui {
        /// Skip the wake key event at launch
        #[arg(long)]
        no_wake: bool,

        /// Skip the device listing and battery read at launch
        #[arg(long)]
        no_refresh: bool,
    },
}

/// Reusable device selection arguments
#[derive(Debug, Clone, Default, Args)]
pub struct DeviceArgs {
    /// Device serial (defaults to the first listed device)
    #[arg(short, long)]
    pub device: Option<String>,
}

/// Diagnostic query names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiagnosticName {
    /// System properties (getprop)
    Properties,
    /// Battery service state
    Battery,
    /// Sensor service state
    Sensors,
    /// Camera service state
    Camera,
    /// Display service state
    Display,
}

impl DiagnosticName {
    /// The canned query this name selects.
    pub fn query(self) -> &'static DiagnosticQuery {
        let index = match self {
            Self::Properties => 0,
            Self::Battery => 1,
            Self::Sensors => 2,
            Self::Camera => 3,
            Self::Display => 4,
        };
        &diagnostics::DIAGNOSTICS[index]
    }
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write a default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["headset", "devices", "--bridge", "/sdk/adb", "--save"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Devices));
        assert_eq!(cli.bridge.as_deref(), Some("/sdk/adb"));
        assert!(cli.save);
    }

    #[test]
    fn test_parse_reboot_device() {
        let cli = Cli::try_parse_from(["headset", "reboot", "-d", "1WMHH815K10123"]).unwrap();
        match cli.command {
            Commands::Reboot { device } => {
                assert_eq!(device.device.as_deref(), Some("1WMHH815K10123"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_logs_lines() {
        let cli = Cli::try_parse_from(["headset", "logs", "--lines", "200"]).unwrap();
        assert!(matches!(cli.command, Commands::Logs { lines: Some(200) }));
    }

    #[test]
    fn test_parse_diag() {
        let cli = Cli::try_parse_from(["headset", "diag", "sensors"]).unwrap();
        match cli.command {
            Commands::Diag { query, device } => {
                assert_eq!(query, DiagnosticName::Sensors);
                assert!(device.device.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_diag_rejected() {
        assert!(Cli::try_parse_from(["headset", "diag", "thermal"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["headset", "-q", "-v", "devices"]).is_err());
    }

    #[test]
    fn test_every_name_maps_to_its_query() {
        for (name, expected) in [
            (DiagnosticName::Properties, "Properties"),
            (DiagnosticName::Battery, "Battery"),
            (DiagnosticName::Sensors, "Sensors"),
            (DiagnosticName::Camera, "Camera"),
            (DiagnosticName::Display, "Display"),
        ] {
            assert_eq!(name.query().label, expected);
        }
    }

    #[test]
    fn test_query_label_matches_command_line_name() {
        for name in DiagnosticName::value_variants() {
            let value = name.to_possible_value().unwrap();
            assert!(
                name.query().label.eq_ignore_ascii_case(value.get_name()),
                "{} runs {}",
                value.get_name(),
                name.query().label
            );
        }
    }

    #[test]
    fn test_queries_are_distinct() {
        let labels: Vec<_> = DiagnosticName::value_variants()
            .iter()
            .map(|name| name.query().label)
            .collect();
        assert_eq!(labels.len(), diagnostics::DIAGNOSTICS.len());
        for (i, label) in labels.iter().enumerate() {
            assert!(!labels[i + 1..].contains(label));
        }
    }

    #[cfg(feature = "gui")]
    #[test]
    fn test_parse_gui_launch_flags() {
        let cli = Cli::try_parse_from(["headset", "gui", "--no-wake", "--no-refresh"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Gui {
                no_wake: true,
                no_refresh: true
            }
        ));

        let cli = Cli::try_parse_from(["headset", "gui"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Gui {
                no_wake: false,
                no_refresh: false
            }
        ));
    }
}
