//! Pocket calculator theme — light and dark palettes
//!
//! Rounded keys with a soft fill. The light palette is near-white on a pale
//! grey background; the dark palette is charcoal on near-black. Operator,
//! clear and equals keys keep their accent colours in both modes.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Which palette is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark { ThemeMode::Dark } else { ThemeMode::Light }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Light => Palette::LIGHT,
            ThemeMode::Dark => Palette::DARK,
        }
    }
}

/// Colours for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub surface: Color32,
    pub key: Color32,
    pub text: Color32,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color32::from_rgb(0xf0, 0xf0, 0xf0),
        surface: Color32::from_rgb(0xff, 0xff, 0xff),
        key: Color32::from_rgb(0xff, 0xff, 0xff),
        text: Color32::from_rgb(0x00, 0x00, 0x00),
    };

    pub const DARK: Palette = Palette {
        background: Color32::from_rgb(0x12, 0x12, 0x12),
        surface: Color32::from_rgb(0x1e, 0x1e, 0x1e),
        key: Color32::from_rgb(0x2d, 0x2d, 0x2d),
        text: Color32::from_rgb(0xff, 0xff, 0xff),
    };

    pub const OPERATOR: Color32 = Color32::from_rgb(0xff, 0x95, 0x00);
    pub const CLEAR: Color32 = Color32::from_rgb(0xff, 0x3b, 0x30);
    pub const EQUALS: Color32 = Color32::from_rgb(0x4c, 0xd9, 0x64);
}

/// Theme configuration for the calculator window
pub struct PocketTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
    pub corner_radius: f32,
}

impl Default for PocketTheme {
    fn default() -> Self {
        Self {
            font_size_body: 16.0,
            font_size_heading: 22.0,
            font_size_small: 12.0,
            window_padding: 10.0,
            item_spacing: 10.0,
            corner_radius: 10.0,
        }
    }
}

impl PocketTheme {
    /// Build the egui style for a theme mode.
    pub fn style(&self, mode: ThemeMode) -> Style {
        let palette = mode.palette();
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = if mode.is_dark() { Visuals::dark() } else { Visuals::light() };

        visuals.window_fill = palette.surface;
        visuals.panel_fill = palette.background;
        visuals.extreme_bg_color = palette.surface;
        visuals.override_text_color = Some(palette.text);

        let rounding = Rounding::same(self.corner_radius);
        visuals.window_rounding = rounding;
        visuals.menu_rounding = rounding;
        visuals.window_stroke = Stroke::NONE;

        let keyed = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = palette.key;
            ws.weak_bg_fill = palette.key;
            ws.fg_stroke = Stroke::new(1.0, palette.text);
            ws.rounding = rounding;
        };
        keyed(&mut visuals.widgets.inactive);
        keyed(&mut visuals.widgets.hovered);
        keyed(&mut visuals.widgets.active);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);

        style
    }

    /// Apply the theme for `mode` to an egui context
    pub fn apply(&self, ctx: &egui::Context, mode: ThemeMode) {
        ctx.set_style(self.style(mode));
    }

    /// Display frame: surface fill, generous padding
    pub fn display_frame(&self, mode: ThemeMode) -> egui::Frame {
        egui::Frame::none()
            .fill(mode.palette().surface)
            .inner_margin(egui::Margin::same(20.0))
    }

    /// Settings panel frame: rounded card on the surface colour
    pub fn panel_frame(&self, mode: ThemeMode) -> egui::Frame {
        egui::Frame::none()
            .fill(mode.palette().surface)
            .rounding(Rounding::same(self.corner_radius))
            .inner_margin(egui::Margin::same(15.0))
            .outer_margin(egui::Margin::same(10.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(ThemeMode::from_dark(false), ThemeMode::Light);
        assert_eq!(ThemeMode::from_dark(true), ThemeMode::Dark);
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::default().is_dark());
    }

    #[test]
    fn test_palettes_differ() {
        assert_eq!(ThemeMode::Light.palette(), Palette::LIGHT);
        assert_eq!(ThemeMode::Dark.palette(), Palette::DARK);
        assert_ne!(Palette::LIGHT.text, Palette::DARK.text);
        assert_ne!(Palette::LIGHT.background, Palette::DARK.background);
    }

    #[test]
    fn test_style_uses_palette() {
        let theme = PocketTheme::default();
        let dark = theme.style(ThemeMode::Dark);
        assert!(dark.visuals.dark_mode);
        assert_eq!(dark.visuals.panel_fill, Palette::DARK.background);
        assert_eq!(dark.visuals.override_text_color, Some(Palette::DARK.text));

        let light = theme.style(ThemeMode::Light);
        assert!(!light.visuals.dark_mode);
        assert_eq!(light.visuals.widgets.inactive.bg_fill, Palette::LIGHT.key);
    }
}
