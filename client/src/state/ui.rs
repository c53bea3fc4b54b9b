//! Local shell chrome state (theme, sidebar).
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of list view state so each view's state
//! can be rebuilt on remount without touching the chrome.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::dark_mode::Theme;

/// UI state shared by the shell via context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub aside_collapsed: bool,
}

impl UiState {
    pub fn toggle_aside(&mut self) {
        self.aside_collapsed = !self.aside_collapsed;
    }
}
