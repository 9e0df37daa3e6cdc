//! Services overview.

use leptos::prelude::*;

use crate::i18n::use_i18n;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <article class="page-body">
            <h1>{move || i18n.t("services.title")}</h1>
            <p>{move || i18n.t("services.intro")}</p>
            <ul class="service-list">
                {move || {
                    i18n.list("services.items")
                        .into_iter()
                        .map(|item| view! { <li class="service-list__item">{item}</li> })
                        .collect_view()
                }}
            </ul>
        </article>
    }
}
