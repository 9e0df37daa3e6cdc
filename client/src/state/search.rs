//! Home-page stay search state.
//!
//! Dates are kept as ISO `YYYY-MM-DD` strings, the format the pickers emit,
//! with the empty string meaning "not chosen yet".

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use serde::Serialize;

pub const MIN_GUESTS: u8 = 1;
pub const MAX_GUESTS: u8 = 10;

/// Search bar inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
    pub check_in: String,
    pub check_out: String,
    pub guests: u8,
    /// Range selector when true, two separate pickers otherwise.
    pub use_range_selector: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self { check_in: String::new(), check_out: String::new(), guests: MIN_GUESTS, use_range_selector: true }
    }
}

impl SearchState {
    pub fn increment_guests(&mut self) {
        self.guests = self.guests.saturating_add(1).min(MAX_GUESTS);
    }

    pub fn decrement_guests(&mut self) {
        self.guests = self.guests.saturating_sub(1).max(MIN_GUESTS);
    }

    pub fn can_increment(&self) -> bool {
        self.guests < MAX_GUESTS
    }

    pub fn can_decrement(&self) -> bool {
        self.guests > MIN_GUESTS
    }

    pub fn toggle_picker_mode(&mut self) {
        self.use_range_selector = !self.use_range_selector;
    }

    /// Snapshot of the current criteria.
    pub fn query(&self) -> SearchQuery {
        SearchQuery { check_in: self.check_in.clone(), check_out: self.check_out.clone(), guests: self.guests }
    }
}

/// Criteria captured when the search button is pressed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub check_in: String,
    pub check_out: String,
    pub guests: u8,
}
