//! About section: overview plus the story, careers and news sub-pages.

use leptos::prelude::*;

use crate::components::about_sections::{AboutContent, AboutHero};
use crate::i18n::use_i18n;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about">
            <AboutHero />
            <AboutContent />
        </div>
    }
}

/// Title and body from `about.<section>`.
#[component]
fn AboutSubPage(section: &'static str) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <article class="page-body">
            <a href="/about" class="link page-body__back">
                "← "
                {move || i18n.t("header.about")}
            </a>
            <h1>{move || i18n.t(&format!("about.{section}.title"))}</h1>
            <p>{move || i18n.t(&format!("about.{section}.body"))}</p>
        </article>
    }
}

#[component]
pub fn AboutHalaPage() -> impl IntoView {
    view! { <AboutSubPage section="story" /> }
}

#[component]
pub fn CareersPage() -> impl IntoView {
    view! { <AboutSubPage section="careers" /> }
}

#[component]
pub fn NewsPage() -> impl IntoView {
    view! { <AboutSubPage section="news" /> }
}
