//! Device commands: each runs one action and prints the rendered pane.

use std::io::Write;

use anyhow::{Context, Result, bail};
use headset_core::{Action, CommandRunner, SaveOutcome, Troubleshooter};
use tracing::debug;

use crate::cli::DeviceArgs;
use crate::style;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Disable colored output.
    pub no_color: bool,
    /// Suppress the selected-device line and other extras.
    pub quiet: bool,
}

/// Refresh the registry, then apply an explicit `--device` choice.
///
/// Without `--device` the first listed device stays selected, the same rule
/// the desktop window applies after a refresh.
pub fn select_target<R: CommandRunner>(
    app: &mut Troubleshooter<R>,
    args: &DeviceArgs,
) -> Result<()> {
    let listing = app.refresh_devices();
    debug!("Device listing: {}", listing.text().trim_end());
    if let Some(id) = &args.device {
        app.select_device(id)
            .with_context(|| format!("Cannot target '{}'", id))?;
    }
    Ok(())
}

/// `devices`: full status refresh plus selection and battery lines.
pub fn cmd_devices<R: CommandRunner>(
    app: &mut Troubleshooter<R>,
    opts: OutputOptions,
    out: &mut impl Write,
) -> Result<()> {
    app.dispatch(Action::RefreshStatus);
    write_pane(app, opts, out)?;
    if !opts.quiet {
        writeln!(out, "{}", style::format_selected(app.selected(), opts.no_color))?;
    }
    writeln!(out, "{}", style::format_battery(app.battery(), opts.no_color))?;
    Ok(())
}

/// `battery`: the label only; the pane is left as it was.
pub fn cmd_battery<R: CommandRunner>(
    app: &mut Troubleshooter<R>,
    opts: OutputOptions,
    out: &mut impl Write,
) -> Result<()> {
    let status = app.refresh_battery();
    writeln!(out, "{}", style::format_battery(status, opts.no_color))?;
    Ok(())
}

/// Any other action: dispatch and print the pane.
pub fn cmd_action<R: CommandRunner>(
    app: &mut Troubleshooter<R>,
    action: Action,
    opts: OutputOptions,
    out: &mut impl Write,
) -> Result<()> {
    app.dispatch(action);
    write_pane(app, opts, out)
}

/// `--save`: write the pane to a transcript and report where it went.
pub fn cmd_save<R: CommandRunner>(
    app: &mut Troubleshooter<R>,
    opts: OutputOptions,
    out: &mut impl Write,
) -> Result<()> {
    match app.save_transcript() {
        Some(SaveOutcome::Saved(_)) => {
            writeln!(out, "{}", style::format_success(app.output(), opts.no_color))?;
        }
        Some(SaveOutcome::Empty) => {
            writeln!(out, "{}", style::format_warning(app.output(), opts.no_color))?;
        }
        None => bail!("{}", app.output()),
    }
    Ok(())
}

fn write_pane<R: CommandRunner>(
    app: &Troubleshooter<R>,
    opts: OutputOptions,
    out: &mut impl Write,
) -> Result<()> {
    let text = style::format_pane(app.output(), opts.no_color);
    if text.ends_with('\n') {
        write!(out, "{}", text)?;
    } else {
        writeln!(out, "{}", text)?;
    }
    Ok(())
}
