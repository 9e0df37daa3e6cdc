//! New-password form reached from the recovery email.

use leptos::prelude::*;

use crate::components::form_elements::{
    AuthCard, AuthContainer, AuthHeading, Button, ButtonSize, FormInput, field_error,
};
use crate::i18n::use_i18n;
use crate::net::api::spawn_submission;
use crate::state::forms::{ResetPasswordForm, SubmitStatus};
use crate::util::validation::{Field, FormErrors, validate_password_reset};

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let i18n = use_i18n();
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let status = RwSignal::new(SubmitStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_submitting() {
            return;
        }
        let form = ResetPasswordForm {
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        let found = validate_password_reset(&form);
        let valid = found.is_empty();
        errors.set(found);
        if valid {
            spawn_submission(status, "password reset", serde_json::json!({}), SubmitStatus::Succeeded);
        }
    };

    view! {
        <AuthContainer>
            <AuthCard>
                <Show
                    when=move || status.get().is_succeeded()
                    fallback=move || {
                        view! {
                            <AuthHeading
                                badge="🔑"
                                title=Signal::derive(move || i18n.t("auth.resetPassword.title"))
                                subtitle=Signal::derive(move || i18n.t("auth.resetPassword.subtitle"))
                            />
                            <form class="auth-form" on:submit=on_submit novalidate=true>
                                <FormInput
                                    input_type="password"
                                    id="password"
                                    value=password
                                    label=Signal::derive(move || i18n.t("auth.resetPassword.newPassword"))
                                    error=field_error(errors, Field::Password)
                                    required=true
                                    icon="🔒"
                                />
                                <FormInput
                                    input_type="password"
                                    id="confirmPassword"
                                    value=confirm_password
                                    label=Signal::derive(move || i18n.t("auth.resetPassword.confirmPassword"))
                                    error=field_error(errors, Field::ConfirmPassword)
                                    required=true
                                    icon="🔒"
                                />
                                <p class="auth-form__hint">{move || i18n.t("auth.resetPassword.hint")}</p>
                                <Button
                                    button_type="submit"
                                    full_width=true
                                    size=ButtonSize::Lg
                                    busy=Signal::derive(move || status.get().is_submitting())
                                >
                                    {move || i18n.t("auth.resetPassword.resetButton")}
                                </Button>
                            </form>
                        }
                    }
                >
                    <div class="auth-success" role="status">
                        <div class="auth-success__icon">"✓"</div>
                        <h2>{move || i18n.t("auth.resetPassword.successTitle")}</h2>
                        <p>{move || i18n.t("auth.resetPassword.successMessage")}</p>
                    </div>
                </Show>

                <p class="auth-card__footer">
                    <a href="/login" class="link link--strong">
                        {move || i18n.t("auth.resetPassword.backToLogin")}
                    </a>
                </p>
            </AuthCard>
        </AuthContainer>
    }
}
