//! Grid of featured venues linking to their detail routes.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::data::gallery::GALLERY_ITEMS;
use crate::i18n::use_i18n;

#[component]
pub fn HotelGallery() -> impl IntoView {
    let i18n = use_i18n();
    let navigate = use_navigate();

    view! {
        <section class="gallery">
            <div class="section-heading">
                <h2>{move || i18n.t("home.gallery.title")}</h2>
                <p>{move || i18n.t("home.gallery.subtitle")}</p>
            </div>
            <div class="gallery__grid">
                {GALLERY_ITEMS
                    .iter()
                    .map(|item| {
                        let navigate = navigate.clone();
                        let caption = move || i18n.t(&item.name_key());
                        view! {
                            <div
                                class="gallery__card"
                                role="link"
                                on:click=move |_| navigate(&item.detail_path(), Default::default())
                            >
                                <img class="gallery__image" src=item.image alt=caption loading="lazy" />
                                <div class="gallery__shade"></div>
                                <div class="gallery__caption">
                                    <h3>{caption}</h3>
                                    <span class="gallery__explore">
                                        {move || i18n.t("home.gallery.explore")}
                                        " →"
                                    </span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
