//! Visual styling utilities for the CLI.
//!
//! Pane text is passed through untouched apart from highlighting: failures
//! folded into the output keep their exact wording so scripts can match on it.

use headset_core::{BatteryStatus, ERROR_MARKER, SelectedDevice};
use owo_colors::OwoColorize;

/// Highlight failure headers in rendered pane text.
pub fn format_pane(text: &str, no_color: bool) -> String {
    if no_color {
        return text.to_string();
    }
    text.split_inclusive('\n')
        .map(|line| {
            let (body, newline) = match line.strip_suffix('\n') {
                Some(body) => (body, "\n"),
                None => (line, ""),
            };
            if body == ERROR_MARKER {
                format!("{}{}", body.red().bold(), newline)
            } else {
                line.to_string()
            }
        })
        .collect()
}

/// Battery label colored by charge level.
pub fn format_battery(status: BatteryStatus, no_color: bool) -> String {
    let label = status.to_string();
    if no_color {
        return label;
    }
    match status {
        BatteryStatus::Percent(p) if p >= 50 => label.green().to_string(),
        BatteryStatus::Percent(p) if p >= 20 => label.yellow().to_string(),
        BatteryStatus::Percent(_) => label.red().to_string(),
        BatteryStatus::Unavailable => label.dimmed().to_string(),
    }
}

/// Selected device line.
pub fn format_selected(selected: &SelectedDevice, no_color: bool) -> String {
    if no_color || selected.is_none() {
        format!("Selected: {}", selected)
    } else {
        format!("Selected: {}", selected.cyan())
    }
}

/// Format a success message.
pub fn format_success(message: &str, no_color: bool) -> String {
    if no_color {
        format!("[OK] {}", message)
    } else {
        format!("{} {}", "[OK]".green(), message)
    }
}

/// Format a warning message.
pub fn format_warning(message: &str, no_color: bool) -> String {
    if no_color {
        format!("[!!] {}", message)
    } else {
        format!("{} {}", "[!!]".yellow(), message)
    }
}

/// Format a title header.
pub fn format_title(title: &str, no_color: bool) -> String {
    if no_color {
        format!("{}\n{}", title, "━".repeat(title.chars().count()))
    } else {
        format!(
            "{}\n{}",
            title.bold(),
            "━".repeat(title.chars().count()).dimmed()
        )
    }
}
