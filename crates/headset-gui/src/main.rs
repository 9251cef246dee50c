//! Standalone desktop binary.
//!
//! A thin wrapper around headset-cli's GUI for users who only want the window.

use anyhow::Result;
use clap::Parser;
use headset_cli::gui::GuiOptions;

/// Meta Quest ADB Troubleshooter
#[derive(Parser, Debug)]
#[command(name = "headset-gui", version, about)]
struct Args {
    /// Bridge program to use instead of the configured one
    #[arg(long, value_name = "PATH")]
    bridge: Option<String>,

    /// Mirroring executable to use instead of the configured one
    #[arg(long, value_name = "PATH")]
    mirror: Option<String>,

    /// Do not send the wake key event at launch
    #[arg(long)]
    no_wake: bool,

    /// Do not list devices or read the battery at launch
    #[arg(long)]
    no_refresh: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    headset_cli::gui::run_with_options(GuiOptions {
        bridge: args.bridge,
        mirror: args.mirror,
        no_wake: args.no_wake,
        no_refresh: args.no_refresh,
    })
}
