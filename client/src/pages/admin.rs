//! Read-only view of the admin settings with a reload action.

use leptos::prelude::*;

use crate::components::skeleton::LoadingSkeleton;
use crate::i18n::use_i18n;
use crate::net::api::refresh_admin_settings;
use crate::state::settings::SettingsState;

#[component]
pub fn AdminPage() -> impl IntoView {
    let i18n = use_i18n();
    let settings = expect_context::<RwSignal<SettingsState>>();

    let yes_no = move |flag: bool| if flag { i18n.t("admin.yes") } else { i18n.t("admin.no") };

    view! {
        <article class="page-body admin">
            <h1>{move || i18n.t("admin.title")}</h1>
            <p>{move || i18n.t("admin.subtitle")}</p>

            <Show when=move || settings.with(|s| s.error.is_some())>
                <p class="admin__error" role="alert">{move || settings.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>

            <Show
                when=move || !settings.with(|s| s.loading)
                fallback=move || {
                    view! {
                        <p class="admin__loading">{move || i18n.t("admin.loading")}</p>
                        <LoadingSkeleton />
                    }
                }
            >
                <dl class="admin__settings">
                    <dt>{move || i18n.t("admin.termsVisible")}</dt>
                    <dd>{move || yes_no(settings.with(|s| s.settings.has_terms_and_conditions))}</dd>
                    <dt>{move || i18n.t("admin.privacyVisible")}</dt>
                    <dd>{move || yes_no(settings.with(|s| s.settings.has_privacy_policy))}</dd>
                    <dt>{move || i18n.t("admin.whatsapp")}</dt>
                    <dd>{move || settings.with(|s| s.settings.whatsapp_number.clone())}</dd>
                    <dt>{move || i18n.t("admin.email")}</dt>
                    <dd>{move || settings.with(|s| s.settings.contact_email.clone())}</dd>
                </dl>
            </Show>

            <button
                class="btn btn--secondary"
                disabled=move || settings.with(|s| s.loading)
                on:click=move |_| refresh_admin_settings(settings)
            >
                {move || i18n.t("admin.reload")}
            </button>
        </article>
    }
}
