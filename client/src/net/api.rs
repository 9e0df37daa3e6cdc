//! Mock backend calls.
//!
//! The site has no API yet. Each call here waits out a fixed simulated
//! latency in the browser and resolves to canned data, so pages exercise
//! their loading and success paths the way they will against a real server.
//! Under SSR and in tests the waits are skipped.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `Result<_, String>`; the error string is stored in state and
//! rendered, never unwrapped.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;
use serde::Serialize;

use crate::state::forms::{SUBMIT_LATENCY_MS, SubmitStatus};
use crate::state::settings::{AdminSettings, SettingsState};

/// Simulated round trip of the settings endpoint.
pub const SETTINGS_LATENCY_MS: u32 = 500;

/// Wait `ms` milliseconds on the browser timer queue.
pub async fn simulate_latency(ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}

/// Load the admin settings record.
pub async fn fetch_admin_settings() -> Result<AdminSettings, String> {
    simulate_latency(SETTINGS_LATENCY_MS).await;
    Ok(AdminSettings::mock())
}

/// Start a settings fetch and store its outcome in `state` when it lands.
pub fn refresh_admin_settings(state: RwSignal<SettingsState>) {
    state.update(SettingsState::begin_fetch);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = fetch_admin_settings().await;
        if let Err(e) = &result {
            log::warn!("admin settings fetch failed: {e}");
        }
        state.update(|s| s.finish_fetch(result));
    });

    #[cfg(not(feature = "hydrate"))]
    state.update(|s| s.finish_fetch(Ok(AdminSettings::mock())));
}

/// One-line log description of a submitted payload.
pub fn describe_submission<T: Serialize>(kind: &str, payload: &T) -> String {
    match serde_json::to_string(payload) {
        Ok(json) => format!("{kind} submitted: {json}"),
        Err(e) => format!("{kind} submitted: <unserializable: {e}>"),
    }
}

/// Pretend to post a form: log the payload, then wait out the submit
/// latency.
pub async fn submit_form<T: Serialize>(kind: &str, payload: &T) -> Result<(), String> {
    let line = describe_submission(kind, payload);
    #[cfg(feature = "hydrate")]
    log::info!("{line}");
    #[cfg(not(feature = "hydrate"))]
    let _ = line;

    simulate_latency(SUBMIT_LATENCY_MS).await;
    Ok(())
}

/// Drive `status` through a simulated submission: `Submitting` now, then
/// `settled` once the request resolves. A failed request drops back to
/// `Idle`.
pub fn spawn_submission<T>(status: RwSignal<SubmitStatus>, kind: &'static str, payload: T, settled: SubmitStatus)
where
    T: Serialize + 'static,
{
    status.set(SubmitStatus::Submitting);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match submit_form(kind, &payload).await {
            Ok(()) => status.set(settled),
            Err(e) => {
                log::warn!("{kind} submission failed: {e}");
                status.set(SubmitStatus::Idle);
            }
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kind, payload);
        status.set(settled);
    }
}
