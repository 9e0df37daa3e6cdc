//! Transient auth form models.
//!
//! Each page keeps one of these in an `RwSignal`; nothing is persisted and
//! the value is dropped when the route unmounts.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use serde::Serialize;

/// How long a simulated submission holds the submitting flag.
pub const SUBMIT_LATENCY_MS: u32 = 1500;

/// Lifecycle of a form submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

impl SubmitStatus {
    pub fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn is_succeeded(self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration inputs. `country_code` starts at the first dial code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country_code: String,
    pub phone_number: String,
    pub date_of_birth: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
    pub agree_terms: bool,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            country_code: crate::data::country_codes::DEFAULT_DIAL_CODE.to_owned(),
            phone_number: String::new(),
            date_of_birth: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            agree_terms: false,
        }
    }
}

impl RegistrationForm {
    /// Dial code and local number joined, as submitted.
    pub fn full_phone_number(&self) -> String {
        format!("{}{}", self.country_code, self.phone_number.trim())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetPasswordForm {
    pub password: String,
    pub confirm_password: String,
}
