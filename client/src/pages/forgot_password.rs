//! Password-recovery request form.

use leptos::prelude::*;

use crate::components::form_elements::{
    AuthCard, AuthContainer, AuthHeading, Button, ButtonSize, ButtonVariant, FormInput, field_error,
};
use crate::i18n::use_i18n;
use crate::net::api::spawn_submission;
use crate::state::forms::SubmitStatus;
use crate::util::validation::{Field, FormErrors, validate_forgot_password};

/// Collects an email address; after the simulated request the form is
/// replaced by a "check your email" panel echoing the address.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let i18n = use_i18n();
    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let status = RwSignal::new(SubmitStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_submitting() {
            return;
        }
        let address = email.get_untracked();
        let found = validate_forgot_password(&address);
        let valid = found.is_empty();
        errors.set(found);
        if valid {
            let payload = serde_json::json!({ "email": address });
            spawn_submission(status, "password recovery", payload, SubmitStatus::Succeeded);
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
                                badge="?"
                                title=Signal::derive(move || i18n.t("auth.forgotPassword.title"))
                                subtitle=Signal::derive(move || i18n.t("auth.forgotPassword.subtitle"))
                            />
                            <form class="auth-form" on:submit=on_submit novalidate=true>
                                <p class="auth-form__hint">{move || i18n.t("auth.forgotPassword.instructions")}</p>
                                <FormInput
                                    input_type="email"
                                    id="email"
                                    value=email
                                    label=Signal::derive(move || i18n.t("auth.forgotPassword.email"))
                                    error=field_error(errors, Field::Email)
                                    required=true
                                    icon="✉"
                                />
                                <Button
                                    button_type="submit"
                                    full_width=true
                                    size=ButtonSize::Lg
                                    busy=Signal::derive(move || status.get().is_submitting())
                                >
                                    {move || i18n.t("auth.forgotPassword.sendButton")}
                                </Button>
                            </form>
                        }
                    }
                >
                    <div class="auth-success" role="status">
                        <div class="auth-success__icon">"✉"</div>
                        <h2>{move || i18n.t("auth.forgotPassword.checkEmail")}</h2>
                        <p>
                            {move || i18n.t("auth.forgotPassword.sentTo")}
                            " "
                            <strong>{move || email.get()}</strong>
                        </p>
                    </div>
                </Show>

                <div class="auth-card__footer">
                    <a href="/login" class=crate::components::form_elements::button_class(ButtonVariant::Outline, ButtonSize::Md, true)>
                        {move || i18n.t("auth.forgotPassword.backToLogin")}
                    </a>
                </div>
            </AuthCard>
        </AuthContainer>
    }
}
