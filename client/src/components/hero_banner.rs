//! Full-width welcome banner at the top of the home page.

use leptos::prelude::*;

use crate::i18n::use_i18n;

#[component]
pub fn HeroBanner() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section class="hero">
            <div class="hero__overlay"></div>
            <div class="hero__content">
                <h1 class="hero__title">{move || i18n.t("home.hero.title")}</h1>
                <p class="hero__subtitle">{move || i18n.t("home.hero.subtitle")}</p>
                <a href="/services" class="btn btn--accent btn--lg">
                    {move || i18n.t("home.hero.cta")}
                </a>
            </div>
        </section>
    }
}
