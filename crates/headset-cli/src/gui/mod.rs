//! Native desktop window for the headset troubleshooter.
//!
//! Built with [egui](https://www.egui.rs/). Run it with:
//! ```bash
//! headset gui
//! ```
//!
//! Or via the standalone binary:
//! ```bash
//! headset-gui
//! ```

mod app;
mod theme;

use anyhow::Result;
use eframe::egui;
use tracing::info;

use crate::config::Config;

pub use app::{TroubleshooterApp, WINDOW_TITLE};
pub use theme::{Theme, ThemeMode};

/// Options for running the window.
#[derive(Debug, Default, Clone)]
pub struct GuiOptions {
    /// Bridge program overriding the config file.
    pub bridge: Option<String>,
    /// Mirroring executable overriding the config file.
    pub mirror: Option<String>,
    /// Skip the wake key event at launch.
    pub no_wake: bool,
    /// Skip the device listing and battery read at launch.
    pub no_refresh: bool,
}

/// Run the window with settings from the config file.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt::init();
    open(GuiOptions::default())
}

/// Run the window with command-line overrides.
pub fn run_with_options(options: GuiOptions) -> Result<()> {
    tracing_subscriber::fmt::init();
    open(options)
}

/// Open the window; the caller owns logging setup.
pub fn open(options: GuiOptions) -> Result<()> {
    let config = Config::load().with_overrides(options.bridge, options.mirror);
    let settings = config.tools;
    let mut gui = config.gui;
    if options.no_wake {
        gui.wake_on_launch = false;
    }
    if options.no_refresh {
        gui.refresh_on_launch = false;
    }
    info!("Using bridge {}", settings.bridge);

    let viewport = egui::ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size([gui.window_width, gui.window_height])
        .with_min_inner_size([640.0, 400.0]);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |cc| Ok(Box::new(TroubleshooterApp::new(cc, settings, &gui)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run eframe: {}", e))?;

    Ok(())
}
