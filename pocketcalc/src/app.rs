//! Calculator screen

use egui::{Context, RichText};
use pocketcore::repaint::RepaintController;
use pocketcore::theme::{PocketTheme, ThemeMode};
use pocketcore::widgets::{header_buttons, toggle_row, HeaderAction, KeyButton};
use pocketcore::CalcConfig;

use crate::engine::Calculator;
use crate::keypad::{Key, ROWS};
use crate::screen::{ExitChoice, ExitOutcome, ScreenState, EXIT_MESSAGE, EXIT_TITLE};

/// Share of the central area given to the display; the keypad gets the rest.
const DISPLAY_SHARE: f32 = 1.0 / 3.0;

pub struct PocketCalcApp {
    calculator: Calculator,
    screen: ScreenState,
    theme: PocketTheme,
    applied_mode: Option<ThemeMode>,
    repaint: RepaintController,
}

impl PocketCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &CalcConfig) -> Self {
        Self {
            calculator: Calculator::new(),
            screen: ScreenState::new(config.dark_mode, config.exit_closes_window),
            theme: PocketTheme::default(),
            applied_mode: None,
            repaint: RepaintController::new(),
        }
    }

    /// Restyle the context when the theme flag no longer matches it.
    fn sync_theme(&mut self, ctx: &Context) {
        let mode = self.screen.theme_mode();
        if self.applied_mode != Some(mode) {
            self.theme.apply(ctx, mode);
            self.applied_mode = Some(mode);
            self.repaint.mark_needs_repaint();
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        match header_buttons(ui, self.screen.theme_mode().palette()) {
            HeaderAction::ToggleSettings => self.screen.toggle_settings(),
            HeaderAction::Exit => self.screen.request_exit(),
            HeaderAction::None => {}
        }
    }

    fn render_settings(&mut self, ui: &mut egui::Ui) {
        let mode = self.screen.theme_mode();
        self.theme.panel_frame(mode).show(ui, |ui| {
            if toggle_row(ui, "Dark Mode", self.screen.dark_mode(), mode.palette()).clicked() {
                self.screen.toggle_dark_mode();
            }
        });
    }

    fn render_display(&self, ui: &mut egui::Ui, height: f32) {
        let mode = self.screen.theme_mode();
        self.theme.display_frame(mode).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(height);
            ui.set_max_height(height);
            ui.with_layout(egui::Layout::bottom_up(egui::Align::Max), |ui| {
                ui.label(
                    RichText::new(self.calculator.current_entry())
                        .size(48.0)
                        .color(mode.palette().text),
                );
            });
        });
    }

    fn render_keypad(&self, ui: &mut egui::Ui) -> Option<Key> {
        let palette = self.screen.theme_mode().palette();
        let spacing = ui.spacing().item_spacing.y;
        let key_h = ((ui.available_height() - spacing * 4.0) / 4.0).max(32.0);
        let mut pressed = None;

        for row in ROWS {
            ui.columns(4, |cols| {
                for (col, key) in cols.iter_mut().zip(row) {
                    let label = key.label();
                    let button = KeyButton::new(&label, key.fill(palette), palette.text).height(key_h);
                    if col.add(button).clicked() {
                        pressed = Some(key);
                    }
                }
            });
        }

        pressed
    }

    fn render_exit_prompt(&mut self, ctx: &Context) {
        let mut choice = None;
        egui::Window::new(EXIT_TITLE)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(EXIT_MESSAGE);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        choice = Some(ExitChoice::Cancel);
                    }
                    if ui.button("Exit").clicked() {
                        choice = Some(ExitChoice::Exit);
                    }
                });
            });

        if let Some(choice) = choice {
            if self.screen.resolve_exit(choice) == ExitOutcome::Close {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}

impl eframe::App for PocketCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);
        self.sync_theme(ctx);

        egui::TopBottomPanel::top("header")
            .show_separator_line(false)
            .show(ctx, |ui| self.render_header(ui));

        if self.screen.settings_open() {
            egui::TopBottomPanel::top("settings")
                .show_separator_line(false)
                .frame(egui::Frame::none())
                .show(ctx, |ui| self.render_settings(ui));
        }

        let mut pressed = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            let display_h = ui.available_height() * DISPLAY_SHARE;
            self.render_display(ui, display_h);
            ui.add_space(10.0);
            pressed = self.render_keypad(ui);
        });
        if let Some(key) = pressed {
            self.calculator.press(key);
        }

        if self.screen.exit_prompt_open() {
            self.render_exit_prompt(ctx);
        }

        // a toggle during this frame restyles on the next one
        if self.applied_mode != Some(self.screen.theme_mode()) {
            self.repaint.mark_needs_repaint();
        }
        self.repaint.end_frame(ctx);
    }
}
