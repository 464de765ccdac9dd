//! Screen state around the calculator: theme, settings panel, exit prompt

use pocketcore::theme::ThemeMode;

pub const EXIT_TITLE: &str = "Exit Calculator";
pub const EXIT_MESSAGE: &str = "Are you sure you want to exit?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitChoice {
    Cancel,
    Exit,
}

/// What the app should do after the exit prompt is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Prompt dismissed, keep running.
    Stay,
    /// Exit confirmed but closing is disabled; nothing happens.
    Placeholder,
    /// Exit confirmed, close the window.
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScreenState {
    dark_mode: bool,
    settings_open: bool,
    exit_prompt_open: bool,
    exit_closes_window: bool,
}

impl ScreenState {
    pub fn new(dark_mode: bool, exit_closes_window: bool) -> Self {
        Self {
            dark_mode,
            exit_closes_window,
            ..Self::default()
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn theme_mode(&self) -> ThemeMode {
        ThemeMode::from_dark(self.dark_mode)
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn exit_prompt_open(&self) -> bool {
        self.exit_prompt_open
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        tracing::info!(dark_mode = self.dark_mode, "theme toggled");
    }

    pub fn toggle_settings(&mut self) {
        self.settings_open = !self.settings_open;
        tracing::debug!(open = self.settings_open, "settings panel");
    }

    pub fn request_exit(&mut self) {
        self.exit_prompt_open = true;
    }

    pub fn resolve_exit(&mut self, choice: ExitChoice) -> ExitOutcome {
        if !self.exit_prompt_open {
            return ExitOutcome::Stay;
        }
        self.exit_prompt_open = false;

        match choice {
            ExitChoice::Cancel => ExitOutcome::Stay,
            ExitChoice::Exit if self.exit_closes_window => {
                tracing::info!("exiting");
                ExitOutcome::Close
            }
            ExitChoice::Exit => {
                tracing::info!("app would exit here");
                ExitOutcome::Placeholder
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let screen = ScreenState::default();
        assert!(!screen.dark_mode());
        assert!(!screen.settings_open());
        assert!(!screen.exit_prompt_open());
        assert_eq!(screen.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut screen = ScreenState::default();
        screen.toggle_dark_mode();
        assert!(screen.dark_mode());
        assert!(!screen.settings_open());
        assert_eq!(screen.theme_mode(), ThemeMode::Dark);

        screen.toggle_settings();
        assert!(screen.settings_open());
        assert!(screen.dark_mode());

        screen.toggle_dark_mode();
        screen.toggle_settings();
        assert_eq!(screen, ScreenState::default());
    }

    #[test]
    fn test_cancel_keeps_running() {
        let mut screen = ScreenState::default();
        screen.request_exit();
        assert!(screen.exit_prompt_open());
        assert_eq!(screen.resolve_exit(ExitChoice::Cancel), ExitOutcome::Stay);
        assert!(!screen.exit_prompt_open());
    }

    #[test]
    fn test_exit_is_placeholder_by_default() {
        let mut screen = ScreenState::new(true, false);
        screen.request_exit();
        assert_eq!(screen.resolve_exit(ExitChoice::Exit), ExitOutcome::Placeholder);
        assert!(!screen.exit_prompt_open());
    }

    #[test]
    fn test_exit_closes_when_enabled() {
        let mut screen = ScreenState::new(false, true);
        screen.request_exit();
        assert_eq!(screen.resolve_exit(ExitChoice::Exit), ExitOutcome::Close);
    }

    #[test]
    fn test_resolve_without_prompt() {
        let mut screen = ScreenState::new(false, true);
        assert_eq!(screen.resolve_exit(ExitChoice::Exit), ExitOutcome::Stay);
    }
}
