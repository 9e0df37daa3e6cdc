//! Home-page stay search: dates, guest count and the search button.

use leptos::prelude::*;

use crate::components::date_picker::DatePicker;
use crate::components::date_range_selector::DateRangeSelector;
use crate::i18n::use_i18n;
use crate::state::search::SearchState;
use crate::util::calendar;

/// Search card overlapping the hero. Dates are picked either with the range
/// selector or with two separate pickers; the check-out picker cannot go
/// before the chosen check-in.
#[component]
pub fn SearchUnitsBar() -> impl IntoView {
    let i18n = use_i18n();
    let search = RwSignal::new(SearchState::default());

    let check_in = Signal::derive(move || search.with(|s| s.check_in.clone()));
    let check_out = Signal::derive(move || search.with(|s| s.check_out.clone()));
    let set_check_in = Callback::new(move |value: String| search.update(|s| s.check_in = value));
    let set_check_out = Callback::new(move |value: String| search.update(|s| s.check_out = value));
    let check_out_min = Signal::derive(move || search.with(|s| calendar::parse_iso(&s.check_in)));

    let on_search = move |_: leptos::ev::MouseEvent| {
        let query = search.with_untracked(SearchState::query);
        let line = crate::net::api::describe_submission("search", &query);
        #[cfg(feature = "hydrate")]
        log::info!("{line}");
        #[cfg(not(feature = "hydrate"))]
        let _ = line;
    };

    view! {
        <section class="search-bar">
            <div class="search-bar__card">
                <div class="search-bar__mode">
                    <button
                        type="button"
                        class="search-bar__mode-toggle"
                        on:click=move |_| search.update(SearchState::toggle_picker_mode)
                    >
                        {move || {
                            if search.with(|s| s.use_range_selector) {
                                i18n.t("home.search.useSeparate")
                            } else {
                                i18n.t("home.search.useRange")
                            }
                        }}
                        " ⇄"
                    </button>
                </div>

                <div class="search-bar__fields">
                    <Show
                        when=move || search.with(|s| s.use_range_selector)
                        fallback=move || {
                            view! {
                                <DatePicker
                                    label=Signal::derive(move || i18n.t("home.search.checkIn"))
                                    value=check_in
                                    on_change=set_check_in
                                    placeholder=Signal::derive(move || i18n.t("home.search.checkInPlaceholder"))
                                />
                                <DatePicker
                                    label=Signal::derive(move || i18n.t("home.search.checkOut"))
                                    value=check_out
                                    on_change=set_check_out
                                    placeholder=Signal::derive(move || i18n.t("home.search.checkOutPlaceholder"))
                                    min_date=check_out_min
                                />
                            }
                        }
                    >
                        <DateRangeSelector
                            check_in_label=Signal::derive(move || i18n.t("home.search.checkIn"))
                            check_out_label=Signal::derive(move || i18n.t("home.search.checkOut"))
                            check_in=check_in
                            check_out=check_out
                            on_check_in_change=set_check_in
                            on_check_out_change=set_check_out
                            placeholder=Signal::derive(move || i18n.t("home.search.rangePlaceholder"))
                        />
                    </Show>

                    <div class="guest-counter">
                        <label class="guest-counter__label">{move || i18n.t("home.search.guestsLabel")}</label>
                        <div class="guest-counter__control">
                            <span class="guest-counter__icon">"👥"</span>
                            <button
                                type="button"
                                class="guest-counter__step"
                                aria-label="-"
                                disabled=move || !search.with(SearchState::can_decrement)
                                on:click=move |_| search.update(SearchState::decrement_guests)
                            >
                                "−"
                            </button>
                            <span class="guest-counter__value">
                                {move || format!("{} {}", search.with(|s| s.guests), i18n.t("home.search.guests"))}
                            </span>
                            <button
                                type="button"
                                class="guest-counter__step"
                                aria-label="+"
                                disabled=move || !search.with(SearchState::can_increment)
                                on:click=move |_| search.update(SearchState::increment_guests)
                            >
                                "+"
                            </button>
                        </div>
                    </div>

                    <button type="button" class="btn btn--primary btn--lg search-bar__submit" on:click=on_search>
                        "🔍 "
                        {move || i18n.t("home.search.searchButton")}
                    </button>
                </div>
            </div>
        </section>
    }
}
