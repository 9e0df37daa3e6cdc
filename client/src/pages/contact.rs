//! Contact page built from the admin settings.

use leptos::prelude::*;

use crate::components::skeleton::Skeleton;
use crate::i18n::use_i18n;
use crate::state::settings::SettingsState;

#[component]
pub fn ContactPage() -> impl IntoView {
    let i18n = use_i18n();
    let settings = expect_context::<RwSignal<SettingsState>>();

    view! {
        <article class="page-body">
            <h1>{move || i18n.t("contact.title")}</h1>
            <p>{move || i18n.t("contact.subtitle")}</p>
            <Show
                when=move || !settings.with(|s| s.loading)
                fallback=|| view! { <Skeleton class="skeleton--line" /> }
            >
                <ul class="contact-list">
                    <li>
                        <span class="contact-list__label">{move || i18n.t("contact.whatsapp")}</span>
                        <a
                            href=move || settings.with(|s| s.settings.whatsapp_link())
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {move || settings.with(|s| s.settings.whatsapp_number.clone())}
                        </a>
                    </li>
                    <li>
                        <span class="contact-list__label">{move || i18n.t("contact.email")}</span>
                        <a href=move || settings.with(|s| s.settings.mailto_link())>
                            {move || settings.with(|s| s.settings.contact_email.clone())}
                        </a>
                    </li>
                </ul>
            </Show>
        </article>
    }
}
