//! Email + password sign-in form.
//!
//! There is no real authentication: a valid submission is logged (without
//! the password), holds the submitting state for the simulated latency and
//! returns to idle.

use leptos::prelude::*;

use crate::components::form_elements::{
    AuthCard, AuthContainer, AuthHeading, Button, ButtonSize, ButtonVariant, Divider, FormInput, field_error,
};
use crate::components::language_switcher::LanguageSwitcher;
use crate::i18n::use_i18n;
use crate::net::api::spawn_submission;
use crate::state::forms::{LoginForm, SubmitStatus};
use crate::util::validation::{Field, FormErrors, validate_login};

#[component]
pub fn LoginPage() -> impl IntoView {
    let i18n = use_i18n();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let status = RwSignal::new(SubmitStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_submitting() {
            return;
        }
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        let found = validate_login(&form);
        let valid = found.is_empty();
        errors.set(found);
        if valid {
            let payload = serde_json::json!({ "email": form.email });
            spawn_submission(status, "login", payload, SubmitStatus::Idle);
        }
    };

    let on_google = Callback::new(|()| {
        #[cfg(feature = "hydrate")]
        log::info!("google login clicked");
    });

    view! {
        <AuthContainer>
            <AuthCard>
                <div class="auth-card__toolbar">
                    <LanguageSwitcher />
                </div>
                <AuthHeading
                    badge="🔒"
                    title=Signal::derive(move || i18n.t("auth.login.title"))
                    subtitle=Signal::derive(move || i18n.t("auth.login.subtitle"))
                />
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <FormInput
                        input_type="email"
                        id="email"
                        value=email
                        label=Signal::derive(move || i18n.t("auth.login.email"))
                        error=field_error(errors, Field::Email)
                        required=true
                        icon="✉"
                    />
                    <FormInput
                        input_type="password"
                        id="password"
                        value=password
                        label=Signal::derive(move || i18n.t("auth.login.password"))
                        error=field_error(errors, Field::Password)
                        required=true
                        icon="🔒"
                    />
                    <div class="auth-form__aside">
                        <a href="/forgot-password" class="link">
                            {move || i18n.t("auth.login.forgotPassword")}
                        </a>
                    </div>
                    <Button
                        button_type="submit"
                        full_width=true
                        size=ButtonSize::Lg
                        busy=Signal::derive(move || status.get().is_submitting())
                    >
                        {move || i18n.t("auth.login.loginButton")}
                    </Button>
                </form>

                <Divider text=Signal::derive(move || i18n.t("auth.login.or")) />
                <Button variant=ButtonVariant::Outline full_width=true size=ButtonSize::Lg on_click=on_google>
                    <span class="google-mark">"G"</span>
                    {move || i18n.t("auth.login.googleLogin")}
                </Button>

                <p class="auth-card__footer">
                    {move || i18n.t("auth.login.noAccount")}
                    " "
                    <a href="/register" class="link link--strong">
                        {move || i18n.t("auth.login.signUp")}
                    </a>
                </p>
            </AuthCard>
        </AuthContainer>
    }
}
