//! Home-page section describing the guest app features.

use leptos::prelude::*;

use crate::data::gallery::DIGITAL_IMAGE;
use crate::i18n::use_i18n;

/// Feature cards: key under `home.digital.features` and its glyph.
const FEATURES: [(&str, &str); 4] = [("booking", "📅"), ("checkin", "🔑"), ("trips", "👁"), ("support", "💬")];

const BENEFIT_GLYPHS: [&str; 4] = ["📱", "⏰", "🛡", "★"];

#[component]
pub fn DigitalExperience() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section class="digital">
            <div class="section-heading">
                <h2>{move || i18n.t("home.digital.title")}</h2>
                <p class="section-heading__accent">{move || i18n.t("home.digital.subtitle")}</p>
                <p>{move || i18n.t("home.digital.description")}</p>
            </div>

            <div class="digital__features">
                {FEATURES
                    .into_iter()
                    .map(|(key, glyph)| {
                        view! {
                            <div class="feature-card">
                                <span class="feature-card__icon">{glyph}</span>
                                <h3>{move || i18n.t(&format!("home.digital.features.{key}.title"))}</h3>
                                <p>{move || i18n.t(&format!("home.digital.features.{key}.description"))}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="digital__why">
                <div class="digital__why-copy">
                    <h3>{move || i18n.t("home.digital.whyTitle")}</h3>
                    <p>{move || i18n.t("home.digital.whyDescription")}</p>
                    <ul class="digital__benefits">
                        {move || {
                            i18n.list("home.digital.benefits")
                                .into_iter()
                                .zip(BENEFIT_GLYPHS)
                                .map(|(text, glyph)| {
                                    view! {
                                        <li>
                                            <span class="digital__benefit-icon">{glyph}</span>
                                            <span>{text}</span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                    <a href="/services" class="btn btn--outline">
                        {move || i18n.t("home.digital.learnMore")}
                    </a>
                </div>
                <img class="digital__image" src=DIGITAL_IMAGE alt=move || i18n.t("home.digital.title") loading="lazy" />
            </div>
        </section>
    }
}
