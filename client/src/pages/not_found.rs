//! Fallback for unmatched routes.

use leptos::prelude::*;

use crate::i18n::use_i18n;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <h2>{move || i18n.t_or("notFound.title", "Page Not Found")}</h2>
            <p>{move || i18n.t("notFound.message")}</p>
            <a href="/" class="btn btn--secondary">
                {move || i18n.t_or("notFound.backHome", "Back to Homepage")}
            </a>
        </div>
    }
}
