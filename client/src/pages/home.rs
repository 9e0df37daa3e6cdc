//! Landing page.

use leptos::prelude::*;

use crate::components::digital_experience::DigitalExperience;
use crate::components::hero_banner::HeroBanner;
use crate::components::hotel_gallery::HotelGallery;
use crate::components::promo_section::PromoSection;
use crate::components::search_units_bar::SearchUnitsBar;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <HeroBanner />
            <SearchUnitsBar />
            <HotelGallery />
            <PromoSection />
            <DigitalExperience />
        </div>
    }
}
