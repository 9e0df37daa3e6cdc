//! Hero and body blocks for the About page.

use leptos::prelude::*;

use crate::i18n::use_i18n;

#[component]
pub fn AboutHero() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <section class="page-hero">
            <h1>{move || i18n.t("about.hero.title")}</h1>
            <p>{move || i18n.t("about.hero.subtitle")}</p>
        </section>
    }
}

#[component]
pub fn AboutContent() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <section class="page-body">
            <h2>{move || i18n.t("about.content.title")}</h2>
            {move || {
                i18n.list("about.content.paragraphs")
                    .into_iter()
                    .map(|p| view! { <p>{p}</p> })
                    .collect_view()
            }}
            <ul class="page-body__links">
                {crate::data::navigation::ABOUT_MENU
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.path>{move || i18n.t_or(link.translation_key, link.default_text)}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
