//! Admin-controlled site settings and their load status.
//!
//! The record stands in for a future backend endpoint. Until one exists the
//! provider in `net::api` resolves to [`AdminSettings::mock`] after a short
//! simulated delay.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

/// Settings that toggle footer links and carry contact details.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSettings {
    pub has_terms_and_conditions: bool,
    pub has_privacy_policy: bool,
    pub whatsapp_number: String,
    pub contact_email: String,
}

impl AdminSettings {
    /// Fixed record served by the mock provider.
    pub fn mock() -> Self {
        Self {
            has_terms_and_conditions: true,
            has_privacy_policy: true,
            whatsapp_number: "+966501234567".to_owned(),
            contact_email: "info@hallahotel.com".to_owned(),
        }
    }

    /// `wa.me` deep link; the path accepts digits only.
    pub fn whatsapp_link(&self) -> String {
        let digits: String = self.whatsapp_number.chars().filter(char::is_ascii_digit).collect();
        format!("https://wa.me/{digits}")
    }

    pub fn mailto_link(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self::mock()
    }
}

/// Settings plus the status of the most recent fetch.
#[derive(Clone, Debug, Default)]
pub struct SettingsState {
    pub settings: AdminSettings,
    pub loading: bool,
    pub error: Option<String>,
}

impl SettingsState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Store a fetch outcome. A failure keeps the previous settings.
    pub fn finish_fetch(&mut self, result: Result<AdminSettings, String>) {
        match result {
            Ok(settings) => {
                self.settings = settings;
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
        self.loading = false;
    }

    /// Footer terms link visibility; an explicit override wins.
    pub fn show_terms(&self, override_flag: Option<bool>) -> bool {
        override_flag.unwrap_or(self.settings.has_terms_and_conditions)
    }

    /// Footer privacy link visibility; an explicit override wins.
    pub fn show_privacy(&self, override_flag: Option<bool>) -> bool {
        override_flag.unwrap_or(self.settings.has_privacy_policy)
    }
}
