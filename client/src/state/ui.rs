//! Site-wide UI chrome state (language, splash, mobile menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns in one small model provided via
//! context, so the header, footer and pages can react to a language change
//! without threading props through every route.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::i18n::Locale;

/// How long the splash stays up after start-up or a language switch.
pub const SPLASH_MS: u32 = 100;

/// UI state shared by the layout components.
#[derive(Clone, Debug)]
pub struct UiState {
    pub locale: Locale,
    /// Full-screen splash visible; header, footer and page content are hidden.
    pub loading: bool,
    pub mobile_menu_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { locale: Locale::En, loading: true, mobile_menu_open: false }
    }
}

impl UiState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}
