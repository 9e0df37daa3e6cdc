//! Promotional block with a feature list and a video modal.

use leptos::prelude::*;

use crate::data::gallery::PROMO_IMAGE;
use crate::i18n::use_i18n;

#[component]
pub fn PromoSection() -> impl IntoView {
    let i18n = use_i18n();
    let video_open = RwSignal::new(false);

    view! {
        <section class="promo">
            <div class="promo__grid">
                <div class="promo__copy">
                    <h2 class="promo__title">{move || i18n.t("home.promo.title")}</h2>
                    <h3 class="promo__subtitle">{move || i18n.t("home.promo.subtitle")}</h3>
                    <p class="promo__description">{move || i18n.t("home.promo.description")}</p>
                    <ul class="promo__features">
                        {move || {
                            i18n.list("home.promo.features")
                                .into_iter()
                                .map(|feature| {
                                    view! {
                                        <li class="promo__feature">
                                            <span class="promo__check">"✓"</span>
                                            <span>{feature}</span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                    <button class="btn btn--secondary btn--lg" on:click=move |_| video_open.set(true)>
                        "▶ "
                        {move || i18n.t("home.promo.watchVideo")}
                    </button>
                </div>

                <div class="promo__media">
                    <img class="promo__image" src=PROMO_IMAGE alt=move || i18n.t("home.promo.title") />
                    <button
                        class="promo__play"
                        aria-label=move || i18n.t("home.promo.watchVideo")
                        on:click=move |_| video_open.set(true)
                    >
                        "▶"
                    </button>
                </div>
            </div>

            <Show when=move || video_open.get()>
                <div class="video-modal__backdrop" on:click=move |_| video_open.set(false)>
                    <div class="video-modal" on:click=move |ev| ev.stop_propagation()>
                        <button
                            class="video-modal__close"
                            title=move || i18n.t("home.promo.close")
                            on:click=move |_| video_open.set(false)
                        >
                            "✕"
                        </button>
                        <div class="video-modal__placeholder">
                            <span class="video-modal__icon">"▶"</span>
                            <p>{move || i18n.t("home.promo.videoPlaceholder")}</p>
                        </div>
                    </div>
                </div>
            </Show>
        </section>
    }
}
