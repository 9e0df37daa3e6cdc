//! Account registration form.
//!
//! Validation runs on submit and reports every failing field at once. A
//! valid form is logged without its passwords, held in the submitting state
//! for the simulated latency, then replaced by a success notice.

use leptos::prelude::*;

use crate::components::country_code_selector::CountryCodeSelector;
use crate::components::form_elements::{
    AuthCard, AuthContainer, AuthHeading, Button, ButtonSize, Checkbox, FormInput, field_error,
};
use crate::components::language_switcher::LanguageSwitcher;
use crate::data::country_codes::DEFAULT_DIAL_CODE;
use crate::i18n::use_i18n;
use crate::net::api::spawn_submission;
use crate::state::forms::{RegistrationForm, SubmitStatus};
use crate::util::calendar;
use crate::util::validation::{Field, FormErrors, validate_registration};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let i18n = use_i18n();
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let country_code = RwSignal::new(DEFAULT_DIAL_CODE.to_owned());
    let phone_number = RwSignal::new(String::new());
    let date_of_birth = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let agree_terms = RwSignal::new(false);
    let errors = RwSignal::new(FormErrors::default());
    let status = RwSignal::new(SubmitStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_submitting() {
            return;
        }
        let form = RegistrationForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            country_code: country_code.get_untracked(),
            phone_number: phone_number.get_untracked(),
            date_of_birth: date_of_birth.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            agree_terms: agree_terms.get_untracked(),
        };
        let found = validate_registration(&form, calendar::today());
        let valid = found.is_empty();
        errors.set(found);
        if valid {
            let mut payload = serde_json::to_value(&form).unwrap_or_default();
            if let Some(fields) = payload.as_object_mut() {
                fields.insert("fullPhoneNumber".to_owned(), form.full_phone_number().into());
            }
            spawn_submission(status, "registration", payload, SubmitStatus::Succeeded);
        }
    };

    let label = move |key: &'static str| Signal::derive(move || i18n.t(key));

    view! {
        <AuthContainer>
            <AuthCard>
                <div class="auth-card__toolbar">
                    <LanguageSwitcher />
                </div>
                <Show
                    when=move || status.get().is_succeeded()
                    fallback=move || {
                        view! {
                            <AuthHeading
                                badge="👤"
                                title=label("auth.register.title")
                                subtitle=label("auth.register.subtitle")
                            />
                            <form class="auth-form" on:submit=on_submit novalidate=true>
                                <div class="auth-form__row">
                                    <FormInput
                                        input_type="text"
                                        id="firstName"
                                        value=first_name
                                        label=label("auth.register.firstName")
                                        error=field_error(errors, Field::FirstName)
                                        required=true
                                        icon="👤"
                                    />
                                    <FormInput
                                        input_type="text"
                                        id="lastName"
                                        value=last_name
                                        label=label("auth.register.lastName")
                                        error=field_error(errors, Field::LastName)
                                        required=true
                                        icon="👤"
                                    />
                                </div>
                                <FormInput
                                    input_type="email"
                                    id="email"
                                    value=email
                                    label=label("auth.register.email")
                                    error=field_error(errors, Field::Email)
                                    required=true
                                    icon="✉"
                                />
                                <div class="auth-form__row auth-form__row--phone">
                                    <CountryCodeSelector selected=country_code />
                                    <FormInput
                                        input_type="tel"
                                        id="phoneNumber"
                                        value=phone_number
                                        label=label("auth.register.phone")
                                        error=field_error(errors, Field::PhoneNumber)
                                        required=true
                                        icon="☏"
                                    />
                                </div>
                                <FormInput
                                    input_type="date"
                                    id="dateOfBirth"
                                    value=date_of_birth
                                    label=label("auth.register.dateOfBirth")
                                    error=field_error(errors, Field::DateOfBirth)
                                    required=true
                                    icon="📅"
                                />
                                <FormInput
                                    input_type="password"
                                    id="password"
                                    value=password
                                    label=label("auth.register.password")
                                    error=field_error(errors, Field::Password)
                                    required=true
                                    icon="🔒"
                                />
                                <FormInput
                                    input_type="password"
                                    id="confirmPassword"
                                    value=confirm_password
                                    label=label("auth.register.confirmPassword")
                                    error=field_error(errors, Field::ConfirmPassword)
                                    required=true
                                    icon="🔒"
                                />
                                <Checkbox
                                    id="agreeTerms"
                                    checked=agree_terms
                                    error=field_error(errors, Field::AgreeTerms)
                                >
                                    {move || i18n.t("auth.register.agreePrefix")}
                                    " "
                                    <a href="/terms" class="link link--strong">
                                        {move || i18n.t("auth.register.termsLink")}
                                    </a>
                                </Checkbox>
                                <Button
                                    button_type="submit"
                                    full_width=true
                                    size=ButtonSize::Lg
                                    busy=Signal::derive(move || status.get().is_submitting())
                                >
                                    {move || i18n.t("auth.register.registerButton")}
                                </Button>
                            </form>
                        }
                    }
                >
                    <div class="auth-success" role="status">
                        <div class="auth-success__icon">"✓"</div>
                        <h2>{move || i18n.t("auth.register.successTitle")}</h2>
                        <p>{move || i18n.t("auth.register.successMessage")}</p>
                    </div>
                </Show>

                <p class="auth-card__footer">
                    {move || i18n.t("auth.register.haveAccount")}
                    " "
                    <a href="/login" class="link link--strong">
                        {move || i18n.t("auth.register.signIn")}
                    </a>
                </p>
            </AuthCard>
        </AuthContainer>
    }
}
