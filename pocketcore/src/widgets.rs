//! Custom widgets — rounded keys, header icons, settings rows

use egui::{Color32, Response, Stroke, Ui, Widget};
use crate::theme::Palette;

/// Action returned by the header icons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    None,
    ToggleSettings,
    Exit,
}

const ICON_SIZE: f32 = 24.0;
const ICON_PADDING: f32 = 10.0;

/// Header row: settings gear on the left, close cross on the right.
pub fn header_buttons(ui: &mut Ui, palette: Palette) -> HeaderAction {
    let mut action = HeaderAction::None;
    let slot = egui::vec2(ICON_SIZE + ICON_PADDING * 2.0, ICON_SIZE + ICON_PADDING * 2.0);
    let stroke = Stroke::new(2.0, palette.text);

    ui.horizontal(|ui| {
        let (gear_rect, gear_resp) = ui.allocate_exact_size(slot, egui::Sense::click());
        if ui.is_rect_visible(gear_rect) {
            let painter = ui.painter();
            let c = gear_rect.center();
            painter.circle_stroke(c, ICON_SIZE * 0.22, stroke);
            for i in 0..8 {
                let angle = i as f32 * std::f32::consts::FRAC_PI_4;
                let dir = egui::vec2(angle.cos(), angle.sin());
                painter.line_segment(
                    [c + dir * ICON_SIZE * 0.32, c + dir * ICON_SIZE * 0.45],
                    stroke,
                );
            }
        }
        if gear_resp.on_hover_text("settings").clicked() {
            action = HeaderAction::ToggleSettings;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (close_rect, close_resp) = ui.allocate_exact_size(slot, egui::Sense::click());
            if ui.is_rect_visible(close_rect) {
                let r = close_rect.shrink(ICON_PADDING + 5.0);
                let painter = ui.painter();
                painter.line_segment([r.left_top(), r.right_bottom()], stroke);
                painter.line_segment([r.right_top(), r.left_bottom()], stroke);
            }
            if close_resp.on_hover_text("exit").clicked() {
                action = HeaderAction::Exit;
            }
        });
    });

    action
}

/// A keypad key: rounded rect, filled, label centred.
pub struct KeyButton<'a> {
    label: &'a str,
    fill: Color32,
    text_color: Color32,
    height: f32,
}

impl<'a> KeyButton<'a> {
    pub fn new(label: &'a str, fill: Color32, text_color: Color32) -> Self {
        Self { label, fill, text_color, height: 56.0 }
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }
}

impl<'a> Widget for KeyButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired_size = egui::vec2(ui.available_width(), self.height);
        let (rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let rounding = ui.visuals().widgets.inactive.rounding;
            let fill = if response.is_pointer_button_down_on() {
                self.fill.gamma_multiply(0.7)
            } else if response.hovered() {
                self.fill.gamma_multiply(0.9)
            } else {
                self.fill
            };

            // drop shadow, then the key face
            painter.rect_filled(rect.translate(egui::vec2(0.0, 2.0)), rounding, Color32::from_black_alpha(40));
            painter.rect_filled(rect, rounding, fill);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(24.0),
                self.text_color,
            );
        }

        response
    }
}

/// Settings row: label on the left, moon indicator on the right. The whole
/// row is clickable.
pub fn toggle_row(ui: &mut Ui, label: &str, on: bool, palette: Palette) -> Response {
    let desired_size = egui::vec2(ui.available_width(), 44.0);
    let (rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.text(
            rect.left_center(),
            egui::Align2::LEFT_CENTER,
            label,
            egui::FontId::proportional(16.0),
            palette.text,
        );

        // moon: a disc with a bite taken out of it, outlined when off
        let c = egui::pos2(rect.right() - 12.0, rect.center().y);
        let radius = 9.0;
        if on {
            painter.circle_filled(c, radius, palette.text);
        } else {
            painter.circle_stroke(c, radius, Stroke::new(1.5, palette.text));
        }
        let bg = ui.visuals().window_fill;
        painter.circle_filled(c + egui::vec2(4.5, -4.0), radius * 0.8, bg);
    }

    response
}
