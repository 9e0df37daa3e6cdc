//! Single-button language toggle used on the auth cards.

use leptos::prelude::*;

use crate::i18n::use_i18n;

/// Shows the other language's native name; clicking switches to it.
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <button
            class="language-switcher"
            aria-label="Change language"
            on:click=move |_| i18n.set_locale(i18n.locale().toggled())
        >
            <span class="language-switcher__icon">"🌐"</span>
            <span>{move || i18n.locale().toggled().native_name()}</span>
        </button>
    }
}
