//! Terms and privacy pages.

use leptos::prelude::*;

use crate::i18n::use_i18n;

#[component]
fn LegalDocument(section: &'static str) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <article class="page-body page-body--legal">
            <h1>{move || i18n.t(&format!("{section}.title"))}</h1>
            <p>{move || i18n.t(&format!("{section}.body"))}</p>
        </article>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <LegalDocument section="terms" /> }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! { <LegalDocument section="privacy" /> }
}
