use super::*;
use time::macros::date;

const TODAY: Date = date!(2026 - 10 - 19);

fn valid_registration() -> RegistrationForm {
    RegistrationForm {
        first_name: "Lina".to_owned(),
        last_name: "Haddad".to_owned(),
        email: "lina@example.com".to_owned(),
        country_code: "+966".to_owned(),
        phone_number: "0501234567".to_owned(),
        date_of_birth: "1995-04-12".to_owned(),
        password: "correct-horse".to_owned(),
        confirm_password: "correct-horse".to_owned(),
        agree_terms: true,
    }
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_accepts_common_addresses() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("first.last+tag@sub.example.co"));
}

#[test]
fn email_rejects_missing_parts() {
    assert!(!is_valid_email("userexample.com"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@example"));
    assert!(!is_valid_email("user@.com"));
    assert!(!is_valid_email("user@example."));
    assert!(!is_valid_email("user @example.com"));
}

#[test]
fn email_check_is_unanchored() {
    assert!(is_valid_email("contact me at user@example.com please"));
}

// =============================================================
// Phone, password, age
// =============================================================

#[test]
fn phone_requires_ten_to_fifteen_digits() {
    assert!(is_valid_phone("0123456789"));
    assert!(is_valid_phone("012345678901234"));
    assert!(!is_valid_phone("012345678"));
    assert!(!is_valid_phone("0123456789012345"));
    assert!(!is_valid_phone("012-345-6789"));
    assert!(!is_valid_phone("٠١٢٣٤٥٦٧٨٩"));
}

#[test]
fn password_length_counts_characters() {
    assert!(meets_password_length("12345678"));
    assert!(!meets_password_length("1234567"));
    assert!(meets_password_length("كلمةسرية"));
}

#[test]
fn age_counts_birthday_on_the_day() {
    assert_eq!(age_on(date!(2013 - 10 - 19), TODAY), 13);
    assert_eq!(age_on(date!(2013 - 10 - 20), TODAY), 12);
    assert_eq!(age_on(date!(2013 - 11 - 01), TODAY), 12);
    assert_eq!(age_on(date!(2013 - 09 - 30), TODAY), 13);
}

// =============================================================
// Login / forgot / reset
// =============================================================

#[test]
fn login_requires_both_fields() {
    let errors = validate_login(&LoginForm::default());
    assert_eq!(errors.get(Field::Email), Some(FieldError::Required));
    assert_eq!(errors.get(Field::Password), Some(FieldError::Required));
    assert_eq!(errors.len(), 2);
}

#[test]
fn login_flags_malformed_email_only() {
    let form = LoginForm { email: "not-an-email".to_owned(), password: "x".to_owned() };
    let errors = validate_login(&form);
    assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidEmail));
    assert_eq!(errors.get(Field::Password), None);
}

#[test]
fn login_accepts_short_password() {
    let form = LoginForm { email: "a@b.co".to_owned(), password: "x".to_owned() };
    assert!(validate_login(&form).is_empty());
}

#[test]
fn forgot_password_validates_email() {
    assert_eq!(validate_forgot_password("   ").get(Field::Email), Some(FieldError::Required));
    assert_eq!(validate_forgot_password("nope").get(Field::Email), Some(FieldError::InvalidEmail));
    assert!(validate_forgot_password("guest@hala.com").is_empty());
}

#[test]
fn reset_requires_length_and_match() {
    let short = ResetPasswordForm { password: "short".to_owned(), confirm_password: "short".to_owned() };
    assert_eq!(validate_password_reset(&short).get(Field::Password), Some(FieldError::PasswordLength));

    let mismatch = ResetPasswordForm { password: "long-enough".to_owned(), confirm_password: "long-enougH".to_owned() };
    let errors = validate_password_reset(&mismatch);
    assert_eq!(errors.get(Field::ConfirmPassword), Some(FieldError::PasswordMatch));
    assert_eq!(errors.get(Field::Password), None);

    let ok = ResetPasswordForm { password: "long-enough".to_owned(), confirm_password: "long-enough".to_owned() };
    assert!(validate_password_reset(&ok).is_empty());
}

#[test]
fn reset_missing_confirmation_is_required_not_mismatch() {
    let form = ResetPasswordForm { password: "long-enough".to_owned(), confirm_password: String::new() };
    assert_eq!(validate_password_reset(&form).get(Field::ConfirmPassword), Some(FieldError::Required));
}

#[test]
fn reset_blank_passwords_are_both_required() {
    let form = ResetPasswordForm { password: "   ".to_owned(), confirm_password: "   ".to_owned() };
    let errors = validate_password_reset(&form);
    assert_eq!(errors.get(Field::Password), Some(FieldError::Required));
    assert_eq!(errors.get(Field::ConfirmPassword), Some(FieldError::Required));
}

// =============================================================
// Registration
// =============================================================

#[test]
fn registration_valid_form_has_no_errors() {
    assert!(validate_registration(&valid_registration(), TODAY).is_empty());
}

#[test]
fn registration_empty_form_flags_every_field() {
    let errors = validate_registration(&RegistrationForm::default(), TODAY);
    for field in [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::PhoneNumber,
        Field::DateOfBirth,
        Field::Password,
        Field::ConfirmPassword,
    ] {
        assert_eq!(errors.get(field), Some(FieldError::Required), "{field:?}");
    }
    assert_eq!(errors.get(Field::AgreeTerms), Some(FieldError::TermsRequired));
    assert_eq!(errors.len(), 8);
}

#[test]
fn registration_mismatched_passwords_report_match_error() {
    let form = RegistrationForm { confirm_password: "different-pass".to_owned(), ..valid_registration() };
    let errors = validate_registration(&form, TODAY);
    assert_eq!(errors.get(Field::ConfirmPassword), Some(FieldError::PasswordMatch));
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::ConfirmPassword]);
}

#[test]
fn registration_rejects_bad_phone() {
    let form = RegistrationForm { phone_number: "12345".to_owned(), ..valid_registration() };
    assert_eq!(validate_registration(&form, TODAY).get(Field::PhoneNumber), Some(FieldError::InvalidPhone));
}

#[test]
fn registration_rejects_phone_with_surrounding_space() {
    let form = RegistrationForm { phone_number: " 5012345678 ".to_owned(), ..valid_registration() };
    assert_eq!(validate_registration(&form, TODAY).get(Field::PhoneNumber), Some(FieldError::InvalidPhone));
}

#[test]
fn registration_age_boundary() {
    let thirteen_today = RegistrationForm { date_of_birth: "2013-10-19".to_owned(), ..valid_registration() };
    assert!(validate_registration(&thirteen_today, TODAY).is_empty());

    let thirteen_tomorrow = RegistrationForm { date_of_birth: "2013-10-20".to_owned(), ..valid_registration() };
    assert_eq!(
        validate_registration(&thirteen_tomorrow, TODAY).get(Field::DateOfBirth),
        Some(FieldError::TooYoung)
    );
}

#[test]
fn registration_unparseable_birth_date() {
    let form = RegistrationForm { date_of_birth: "19/04/1995".to_owned(), ..valid_registration() };
    assert_eq!(validate_registration(&form, TODAY).get(Field::DateOfBirth), Some(FieldError::InvalidDate));
}

#[test]
fn registration_requires_terms() {
    let form = RegistrationForm { agree_terms: false, ..valid_registration() };
    assert_eq!(validate_registration(&form, TODAY).get(Field::AgreeTerms), Some(FieldError::TermsRequired));
}

// =============================================================
// FieldError
// =============================================================

#[test]
fn field_errors_map_to_validation_keys() {
    assert_eq!(FieldError::Required.translation_key(), "auth.validation.required");
    assert_eq!(FieldError::TooYoung.translation_key(), "auth.validation.ageRequirement");
    for error in [
        FieldError::Required,
        FieldError::InvalidEmail,
        FieldError::PasswordLength,
        FieldError::PasswordMatch,
        FieldError::InvalidPhone,
        FieldError::TermsRequired,
        FieldError::TooYoung,
        FieldError::InvalidDate,
    ] {
        let key = error.translation_key();
        assert_eq!(crate::i18n::translate(crate::i18n::Locale::En, key), error.to_string(), "{key}");
    }
}
