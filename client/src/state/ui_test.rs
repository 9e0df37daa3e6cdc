use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_locale_is_english() {
    let state = UiState::default();
    assert_eq!(state.locale, Locale::En);
}

#[test]
fn ui_state_default_starts_behind_splash() {
    let state = UiState::default();
    assert!(state.loading);
}

#[test]
fn ui_state_default_menu_closed() {
    let state = UiState::default();
    assert!(!state.mobile_menu_open);
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn toggle_mobile_menu_flips_open_flag() {
    let mut state = UiState::default();
    state.toggle_mobile_menu();
    assert!(state.mobile_menu_open);
    state.toggle_mobile_menu();
    assert!(!state.mobile_menu_open);
}

#[test]
fn close_mobile_menu_is_idempotent() {
    let mut state = UiState::default();
    state.close_mobile_menu();
    assert!(!state.mobile_menu_open);
    state.toggle_mobile_menu();
    state.close_mobile_menu();
    state.close_mobile_menu();
    assert!(!state.mobile_menu_open);
}
