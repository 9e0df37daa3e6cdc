use super::*;
use crate::state::forms::{RegistrationForm, SubmitStatus};
use crate::state::search::SearchState;

#[test]
fn describe_submission_prefixes_kind() {
    let query = SearchState { check_in: "2026-11-01".to_owned(), ..SearchState::default() }.query();
    assert_eq!(
        describe_submission("search", &query),
        r#"search submitted: {"checkIn":"2026-11-01","checkOut":"","guests":1}"#
    );
}

#[test]
fn registration_log_line_redacts_passwords() {
    let form = RegistrationForm { password: "hunter2-hunter2".to_owned(), ..RegistrationForm::default() };
    let line = describe_submission("registration", &form);
    assert!(line.starts_with("registration submitted: {"));
    assert!(!line.contains("hunter2"));
}

#[test]
fn refresh_settles_immediately_without_browser() {
    let state = RwSignal::new(SettingsState { loading: true, ..SettingsState::default() });
    refresh_admin_settings(state);
    let settled = state.get_untracked();
    assert!(!settled.loading);
    assert_eq!(settled.error, None);
    assert_eq!(settled.settings, AdminSettings::mock());
}

#[test]
fn submission_settles_to_requested_status() {
    let status = RwSignal::new(SubmitStatus::Idle);
    spawn_submission(status, "login", serde_json::json!({ "email": "a@b.co" }), SubmitStatus::Succeeded);
    assert_eq!(status.get_untracked(), SubmitStatus::Succeeded);

    spawn_submission(status, "login", serde_json::json!({}), SubmitStatus::Idle);
    assert_eq!(status.get_untracked(), SubmitStatus::Idle);
}
