//! Synchronous form validation for the auth pages.
//!
//! Validators run on submit and return every failing field at once. Each
//! failure is a [`FieldError`] whose translation key the page resolves
//! into the inline message under the input.
//!
//! Rules:
//! - required fields must be non-blank
//! - email must contain `<non-space>@<non-space>.<non-space>` somewhere
//! - phone numbers are 10-15 ASCII digits as typed, with no surrounding space
//! - passwords are at least 8 characters
//! - confirmation must equal the password (checked only when both are set)
//! - registrants must be 13 or older on `today`

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use thiserror::Error;
use time::Date;

use crate::state::forms::{LoginForm, RegistrationForm, ResetPasswordForm};
use crate::util::calendar;

pub const MIN_PASSWORD_CHARS: usize = 8;
pub const MIN_PHONE_DIGITS: usize = 10;
pub const MAX_PHONE_DIGITS: usize = 15;
pub const MIN_REGISTRATION_AGE: i32 = 13;

/// Form inputs that can carry an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    DateOfBirth,
    Password,
    ConfirmPassword,
    AgreeTerms,
}

/// A single failed rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least 8 characters")]
    PasswordLength,
    #[error("Passwords do not match")]
    PasswordMatch,
    #[error("Please enter a valid phone number (10-15 digits)")]
    InvalidPhone,
    #[error("You must agree to the terms and conditions")]
    TermsRequired,
    #[error("You must be at least 13 years old to register")]
    TooYoung,
    #[error("Please enter a valid date")]
    InvalidDate,
}

impl FieldError {
    pub fn translation_key(self) -> &'static str {
        match self {
            Self::Required => "auth.validation.required",
            Self::InvalidEmail => "auth.validation.invalidEmail",
            Self::PasswordLength => "auth.validation.passwordLength",
            Self::PasswordMatch => "auth.validation.passwordMatch",
            Self::InvalidPhone => "auth.validation.invalidPhone",
            Self::TermsRequired => "auth.validation.termsRequired",
            Self::TooYoung => "auth.validation.ageRequirement",
            Self::InvalidDate => "auth.validation.invalidDate",
        }
    }
}

/// Field errors from one validation pass. Setting a field twice keeps the
/// later error, so format checks override the required check.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, FieldError>);

impl FormErrors {
    pub fn set(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Loose email shape check: somewhere in `value` a non-space character is
/// followed by `@`, then a run of non-space characters containing a `.`
/// with at least one character on each side.
pub fn is_valid_email(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    chars.iter().enumerate().any(|(at, &c)| {
        if c != '@' || at == 0 || chars[at - 1].is_whitespace() {
            return false;
        }
        let domain: Vec<char> = chars[at + 1..].iter().copied().take_while(|c| !c.is_whitespace()).collect();
        domain
            .iter()
            .enumerate()
            .any(|(i, &d)| d == '.' && i > 0 && i + 1 < domain.len())
    })
}

/// 10 to 15 ASCII digits, nothing else.
pub fn is_valid_phone(value: &str) -> bool {
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn meets_password_length(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_CHARS
}

/// Whole years between `birth` and `today`; the year only counts once the
/// birthday has been reached.
pub fn age_on(birth: Date, today: Date) -> i32 {
    let mut age = today.year() - birth.year();
    if (u8::from(today.month()), today.day()) < (u8::from(birth.month()), birth.day()) {
        age -= 1;
    }
    age
}

fn check_required(errors: &mut FormErrors, field: Field, value: &str) {
    if is_blank(value) {
        errors.set(field, FieldError::Required);
    }
}

fn check_email(errors: &mut FormErrors, email: &str) {
    check_required(errors, Field::Email, email);
    if !is_blank(email) && !is_valid_email(email) {
        errors.set(Field::Email, FieldError::InvalidEmail);
    }
}

fn check_new_password(errors: &mut FormErrors, password: &str, confirm: &str) {
    check_required(errors, Field::Password, password);
    check_required(errors, Field::ConfirmPassword, confirm);
    if !is_blank(password) && !meets_password_length(password) {
        errors.set(Field::Password, FieldError::PasswordLength);
    }
    if !is_blank(password) && !is_blank(confirm) && password != confirm {
        errors.set(Field::ConfirmPassword, FieldError::PasswordMatch);
    }
}

pub fn validate_login(form: &LoginForm) -> FormErrors {
    let mut errors = FormErrors::default();
    check_email(&mut errors, &form.email);
    check_required(&mut errors, Field::Password, &form.password);
    errors
}

pub fn validate_forgot_password(email: &str) -> FormErrors {
    let mut errors = FormErrors::default();
    check_email(&mut errors, email);
    errors
}

pub fn validate_password_reset(form: &ResetPasswordForm) -> FormErrors {
    let mut errors = FormErrors::default();
    check_new_password(&mut errors, &form.password, &form.confirm_password);
    errors
}

pub fn validate_registration(form: &RegistrationForm, today: Date) -> FormErrors {
    let mut errors = FormErrors::default();

    check_required(&mut errors, Field::FirstName, &form.first_name);
    check_required(&mut errors, Field::LastName, &form.last_name);
    check_email(&mut errors, &form.email);
    check_new_password(&mut errors, &form.password, &form.confirm_password);

    check_required(&mut errors, Field::PhoneNumber, &form.phone_number);
    if !is_blank(&form.phone_number) && !is_valid_phone(&form.phone_number) {
        errors.set(Field::PhoneNumber, FieldError::InvalidPhone);
    }

    check_required(&mut errors, Field::DateOfBirth, &form.date_of_birth);
    if !is_blank(&form.date_of_birth) {
        match calendar::parse_iso(&form.date_of_birth) {
            Some(birth) if age_on(birth, today) < MIN_REGISTRATION_AGE => {
                errors.set(Field::DateOfBirth, FieldError::TooYoung);
            }
            Some(_) => {}
            None => errors.set(Field::DateOfBirth, FieldError::InvalidDate),
        }
    }

    if !form.agree_terms {
        errors.set(Field::AgreeTerms, FieldError::TermsRequired);
    }

    errors
}
