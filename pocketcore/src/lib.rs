//! pocketcore — shared pieces for the pocket calculator app

pub mod config;
pub mod logging;
pub mod repaint;
pub mod theme;
pub mod widgets;

pub use config::CalcConfig;
pub use repaint::RepaintController;
pub use theme::{Palette, PocketTheme, ThemeMode};
