//! Theme and styling for the troubleshooter window.
//!
//! Dark and light palettes plus the spacing and type scale the panels use.

use eframe::egui::{Color32, CornerRadius, Margin, Stroke, Style, Visuals};
use headset_core::BatteryStatus;

/// Theme mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Parse the `gui.theme` config value; anything unrecognised is dark.
    pub fn from_config(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("light") {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// Toggle between light and dark mode.
    pub fn toggle(&mut self) {
        *self = match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        };
    }

    /// Label for the toggle button (names the mode it switches to).
    pub fn icon(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "Light Mode",
            ThemeMode::Light => "Dark Mode",
        }
    }
}

/// Spacing constants on a 4px grid.
#[derive(Debug, Clone, Copy)]
pub struct Spacing {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 16.0,
        }
    }
}

/// Typography sizes.
#[derive(Debug, Clone, Copy)]
pub struct Typography {
    /// Caption/small text (11px)
    pub caption: f32,
    /// Body text (14px)
    pub body: f32,
    /// Output pane text (13px)
    pub mono: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            caption: 11.0,
            body: 14.0,
            mono: 13.0,
        }
    }
}

/// Application color theme.
#[derive(Debug, Clone)]
pub struct Theme {
    pub is_dark: bool,
    // Backgrounds
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_card: Color32,
    pub bg_elevated: Color32,
    // Text
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub text_on_accent: Color32,
    // Borders
    pub border: Color32,
    pub border_subtle: Color32,
    // Accent and semantic colors
    pub accent: Color32,
    pub accent_hover: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub danger: Color32,
    // Layout
    pub spacing: Spacing,
    pub typography: Typography,
    pub rounding: f32,
}

impl Theme {
    /// Dark zinc palette.
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            bg_primary: Color32::from_rgb(9, 9, 11),      // zinc-950
            bg_secondary: Color32::from_rgb(24, 24, 27),  // zinc-900
            bg_card: Color32::from_rgb(39, 39, 42),       // zinc-800
            bg_elevated: Color32::from_rgb(52, 52, 56),   // zinc-700
            text_primary: Color32::from_rgb(250, 250, 250), // zinc-50
            text_secondary: Color32::from_rgb(212, 212, 216), // zinc-300
            text_muted: Color32::from_rgb(161, 161, 170), // zinc-400
            text_on_accent: Color32::WHITE,
            border: Color32::from_rgb(63, 63, 70),        // zinc-700
            border_subtle: Color32::from_rgb(39, 39, 42), // zinc-800
            accent: Color32::from_rgb(59, 130, 246),      // blue-500
            accent_hover: Color32::from_rgb(96, 165, 250), // blue-400
            success: Color32::from_rgb(34, 197, 94),      // green-500
            warning: Color32::from_rgb(250, 204, 21),     // yellow-400
            danger: Color32::from_rgb(239, 68, 68),       // red-500
            spacing: Spacing::default(),
            typography: Typography::default(),
            rounding: 6.0,
        }
    }

    /// Light neutral palette.
    pub fn light() -> Self {
        Self {
            is_dark: false,
            bg_primary: Color32::from_rgb(250, 250, 250),
            bg_secondary: Color32::from_rgb(244, 244, 245), // zinc-100
            bg_card: Color32::WHITE,
            bg_elevated: Color32::WHITE,
            text_primary: Color32::from_rgb(17, 24, 39),  // gray-900
            text_secondary: Color32::from_rgb(55, 65, 81), // gray-700
            text_muted: Color32::from_rgb(107, 114, 128), // gray-500
            text_on_accent: Color32::WHITE,
            border: Color32::from_rgb(209, 213, 219),     // gray-300
            border_subtle: Color32::from_rgb(229, 231, 235), // gray-200
            accent: Color32::from_rgb(37, 99, 235),       // blue-600
            accent_hover: Color32::from_rgb(29, 78, 216), // blue-700
            success: Color32::from_rgb(22, 163, 74),      // green-600
            warning: Color32::from_rgb(202, 138, 4),      // yellow-600
            danger: Color32::from_rgb(220, 38, 38),       // red-600
            spacing: Spacing::default(),
            typography: Typography::default(),
            rounding: 6.0,
        }
    }

    /// Get theme for the specified mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Color for the battery label.
    pub fn battery_color(&self, status: BatteryStatus) -> Color32 {
        match status {
            BatteryStatus::Percent(p) if p > 50 => self.success,
            BatteryStatus::Percent(p) if p > 20 => self.warning,
            BatteryStatus::Percent(_) => self.danger,
            BatteryStatus::Unavailable => self.text_muted,
        }
    }

    /// Create egui Style from this theme.
    pub fn to_style(&self) -> Style {
        Style {
            visuals: self.to_visuals(),
            spacing: eframe::egui::style::Spacing {
                item_spacing: eframe::egui::vec2(self.spacing.sm, self.spacing.sm),
                window_margin: Margin::same(self.spacing.md as i8),
                button_padding: eframe::egui::vec2(12.0, 6.0),
                interact_size: eframe::egui::vec2(40.0, 24.0),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Create egui Visuals from this theme.
    pub fn to_visuals(&self) -> Visuals {
        let mut visuals = if self.is_dark {
            Visuals::dark()
        } else {
            Visuals::light()
        };
        visuals.dark_mode = self.is_dark;

        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.bg_secondary;
        visuals.extreme_bg_color = self.bg_card;
        visuals.faint_bg_color = self.bg_secondary;

        visuals.widgets.noninteractive.bg_fill = self.bg_secondary;
        visuals.widgets.noninteractive.weak_bg_fill = self.bg_secondary;
        visuals.widgets.inactive.bg_fill = self.bg_card;
        visuals.widgets.inactive.weak_bg_fill = self.bg_card;
        visuals.widgets.hovered.bg_fill = self.accent_hover;
        visuals.widgets.hovered.weak_bg_fill = self.accent_hover;
        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.active.weak_bg_fill = self.accent;
        visuals.widgets.open.bg_fill = self.bg_elevated;
        visuals.widgets.open.weak_bg_fill = self.bg_elevated;

        visuals.selection.bg_fill = self.accent;
        visuals.selection.stroke = Stroke::new(1.0, self.text_on_accent);

        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_secondary);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, self.text_on_accent);
        visuals.widgets.active.fg_stroke = Stroke::new(1.5, self.text_on_accent);
        visuals.widgets.open.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border_subtle);
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.active.bg_stroke = Stroke::new(1.5, self.accent);
        visuals.widgets.open.bg_stroke = Stroke::new(1.0, self.border);

        let rounding = CornerRadius::same(self.rounding as u8);
        visuals.widgets.noninteractive.corner_radius = rounding;
        visuals.widgets.inactive.corner_radius = rounding;
        visuals.widgets.hovered.corner_radius = rounding;
        visuals.widgets.active.corner_radius = rounding;
        visuals.widgets.open.corner_radius = rounding;

        visuals.error_fg_color = self.danger;
        visuals.warn_fg_color = self.warning;

        visuals
    }
}
