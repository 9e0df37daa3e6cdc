//! Searchable dial-code dropdown for the registration phone field.

use leptos::html::Div;
use leptos::prelude::*;

use crate::data::country_codes::{self, CountryCode};
use crate::i18n::use_i18n;
use crate::util::click_outside::close_on_click_outside;

/// Button showing the selected code; opens a filterable list. Picking an
/// entry writes it to `selected`, closes the list and clears the search.
#[component]
pub fn CountryCodeSelector(selected: RwSignal<String>) -> impl IntoView {
    let i18n = use_i18n();
    let open = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let container = NodeRef::<Div>::new();

    close_on_click_outside(container, open);

    let pick = move |entry: CountryCode| {
        selected.set(entry.code.to_owned());
        open.set(false);
        search.set(String::new());
    };

    view! {
        <div node_ref=container class="country-select">
            <button
                type="button"
                class="country-select__toggle"
                aria-label=move || i18n.t("auth.register.countryCode")
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="country-select__code">
                    {move || selected.with(|code| country_codes::find_or_default(code).code)}
                </span>
                <span class=move || if open.get() { "chevron chevron--open" } else { "chevron" }>"▾"</span>
            </button>

            <Show when=move || open.get()>
                <div class="country-select__menu">
                    <div class="country-select__search">
                        <input
                            type="text"
                            placeholder=move || i18n.t("auth.register.searchCountry")
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="country-select__options">
                        {move || {
                            search
                                .with(|term| country_codes::filter(term))
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <button
                                            type="button"
                                            class="country-select__option"
                                            on:click=move |_| pick(entry)
                                        >
                                            <span class="country-select__code">{entry.code}</span>
                                            <span class="country-select__country">{entry.country}</span>
                                        </button>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}
