//! Main window.

use eframe::egui::{self, RichText};
use headset_core::{
    Action, BridgeSettings, CommandRunner, DIAGNOSTICS, DeviceId, ProcessRunner, Troubleshooter,
};
use tracing::{info, warn};

use super::theme::{Theme, ThemeMode};
use crate::config::GuiConfig;

/// Window title.
pub const WINDOW_TITLE: &str = "Meta Quest ADB Troubleshooter";

/// The desktop front-end around a [`Troubleshooter`].
///
/// Every button maps to one [`Action`]. Handlers run on the UI thread and the
/// window does not repaint until they return.
pub struct TroubleshooterApp<R: CommandRunner = ProcessRunner> {
    /// Application state and handlers.
    app: Troubleshooter<R>,
    /// Current theme mode.
    theme_mode: ThemeMode,
    /// Palette for the current mode.
    theme: Theme,
}

impl TroubleshooterApp<ProcessRunner> {
    /// Create the window state, apply the theme and run the startup actions.
    pub fn new(cc: &eframe::CreationContext<'_>, settings: BridgeSettings, gui: &GuiConfig) -> Self {
        let mut this = Self::with_runner(ProcessRunner::new(), settings, gui);
        cc.egui_ctx.set_style(this.theme.to_style());
        this.startup(gui);
        this
    }
}

impl<R: CommandRunner> TroubleshooterApp<R> {
    /// Build around any runner without touching an egui context.
    pub fn with_runner(runner: R, settings: BridgeSettings, gui: &GuiConfig) -> Self {
        let theme_mode = ThemeMode::from_config(&gui.theme);
        Self {
            app: Troubleshooter::new(runner, settings),
            theme_mode,
            theme: Theme::for_mode(theme_mode),
        }
    }

    /// Wake the headset and refresh status as configured.
    pub fn startup(&mut self, gui: &GuiConfig) {
        info!(
            "Startup (wake: {}, refresh: {})",
            gui.wake_on_launch, gui.refresh_on_launch
        );
        self.app.startup(gui.wake_on_launch, gui.refresh_on_launch);
    }

    pub fn state(&self) -> &Troubleshooter<R> {
        &self.app
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    /// Route a button press.
    pub fn trigger(&mut self, action: Action) {
        self.app.dispatch(action);
    }

    /// Route a combo box choice.
    pub fn choose_device(&mut self, id: &DeviceId) {
        if let Err(e) = self.app.select_device(id.as_str()) {
            warn!("Ignoring device choice: {}", e);
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme_mode.toggle();
        self.theme = Theme::for_mode(self.theme_mode);
        ctx.set_style(self.theme.to_style());
    }

    fn toolbar_button(&self, ui: &mut egui::Ui, action: Action) -> bool {
        ui.add(egui::Button::new(
            RichText::new(action.to_string()).size(self.theme.typography.body),
        ))
        .clicked()
    }

    fn render_header(&mut self, ctx: &egui::Context) -> Option<Action> {
        let mut pending = None;
        let mut chosen: Option<DeviceId> = None;
        let mut toggle_theme = false;

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(self.theme.bg_secondary)
                    .inner_margin(egui::Margin::symmetric(
                        self.theme.spacing.md as i8,
                        self.theme.spacing.sm as i8,
                    ))
                    .stroke(egui::Stroke::new(1.0, self.theme.border_subtle)),
            )
            .show(ctx, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for action in [
                        Action::RefreshStatus,
                        Action::Reboot,
                        Action::LaunchMirror,
                        Action::DisplayLogs,
                        Action::OpenShell,
                    ] {
                        let button = self.toolbar_button(ui, action);
                        if button {
                            pending = Some(action);
                        }
                    }
                });

                ui.add_space(self.theme.spacing.xs);

                ui.horizontal(|ui| {
                    ui.label(RichText::new("Device:").color(self.theme.text_secondary));
                    egui::ComboBox::from_id_salt("device")
                        .selected_text(self.app.selected().to_string())
                        .width(220.0)
                        .show_ui(ui, |ui| {
                            for id in self.app.registry().devices() {
                                let is_selected = self.app.selected().device() == Some(id);
                                if ui.selectable_label(is_selected, id.as_str()).clicked() {
                                    chosen = Some(id.clone());
                                }
                            }
                        });

                    ui.menu_button("Hardware Check", |ui| {
                        for query in DIAGNOSTICS {
                            if ui.button(query.label).clicked() {
                                pending = Some(Action::RunDiagnostic(query));
                                ui.close();
                            }
                        }
                    });

                    ui.add_space(self.theme.spacing.md);
                    let battery = self.app.battery();
                    ui.label(
                        RichText::new(battery.to_string())
                            .size(self.theme.typography.body)
                            .strong()
                            .color(self.theme.battery_color(battery)),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add(egui::Button::new(
                                RichText::new(self.theme_mode.icon())
                                    .size(self.theme.typography.caption),
                            ))
                            .clicked()
                        {
                            toggle_theme = true;
                        }
                    });
                });
            });

        if let Some(id) = chosen {
            self.choose_device(&id);
        }
        if toggle_theme {
            self.toggle_theme(ctx);
        }
        pending
    }

    fn render_footer(&mut self, ctx: &egui::Context) -> Option<Action> {
        let mut pending = None;
        egui::TopBottomPanel::bottom("footer")
            .frame(
                egui::Frame::new()
                    .fill(self.theme.bg_secondary)
                    .inner_margin(egui::Margin::symmetric(
                        self.theme.spacing.md as i8,
                        self.theme.spacing.sm as i8,
                    ))
                    .stroke(egui::Stroke::new(1.0, self.theme.border_subtle)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let save = egui::Button::new(
                        RichText::new("Save Output to Desktop")
                            .size(self.theme.typography.body)
                            .color(self.theme.text_on_accent),
                    )
                    .fill(self.theme.accent);
                    if ui.add(save).clicked() {
                        pending = Some(Action::SaveTranscript);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new("F5: Update Status")
                                .color(self.theme.text_muted)
                                .size(self.theme.typography.caption),
                        );
                    });
                });
            });
        pending
    }

    fn render_output(&self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(self.theme.bg_primary)
                    .inner_margin(egui::Margin::same(self.theme.spacing.md as i8)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::both()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        // A &str buffer is selectable but not editable
                        let mut text = self.app.output();
                        ui.add(
                            egui::TextEdit::multiline(&mut text)
                                .font(egui::FontId::monospace(self.theme.typography.mono))
                                .desired_width(f32::INFINITY)
                                .desired_rows(24),
                        );
                    });
            });
    }
}

impl<R: CommandRunner> eframe::App for TroubleshooterApp<R> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut pending = None;
        if ctx.input(|i| i.key_pressed(egui::Key::F5)) {
            pending = Some(Action::RefreshStatus);
        }

        if let Some(action) = self.render_header(ctx) {
            pending = Some(action);
        }
        if let Some(action) = self.render_footer(ctx) {
            pending = Some(action);
        }
        self.render_output(ctx);

        if let Some(action) = pending {
            self.trigger(action);
            ctx.request_repaint();
        }
    }
}
