//! Single-date dropdown picker.

use leptos::html::Div;
use leptos::prelude::*;
use time::Date;

use crate::components::calendar_view::CalendarView;
use crate::util::calendar::{self, DayBounds, Highlight};
use crate::util::click_outside::close_on_click_outside;

/// Button showing the chosen date; opens a one-month calendar bounded by
/// `[min_date or today, today + 365 days]`. Picking a day emits its ISO
/// string and closes the calendar.
#[component]
pub fn DatePicker(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)] placeholder: Signal<String>,
    #[prop(into, default = Signal::stored(None))] min_date: Signal<Option<Date>>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let container = NodeRef::<Div>::new();
    close_on_click_outside(container, open);

    let today = calendar::today();
    let bounds = Signal::derive(move || DayBounds::booking(today, min_date.get()));
    let selected = Signal::derive(move || value.with(|v| calendar::parse_iso(v)));

    let on_pick = Callback::new(move |day: Date| {
        on_change.run(calendar::format_iso(day));
        open.set(false);
    });

    view! {
        <div node_ref=container class="date-field">
            <label class="date-field__label">{move || label.get()}</label>
            <button
                type="button"
                class="date-field__toggle"
                class:date-field__toggle--empty=move || selected.with(Option::is_none)
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="date-field__icon">"📅"</span>
                <span>{move || calendar::single_display(&value.get(), &placeholder.get())}</span>
                <span class=move || if open.get() { "chevron chevron--open" } else { "chevron" }>"▾"</span>
            </button>
            <Show when=move || open.get()>
                <div class="date-field__popover">
                    <CalendarView
                        initial=selected.get_untracked().unwrap_or_else(|| bounds.get_untracked().min)
                        today=today
                        bounds=bounds
                        highlight=Signal::derive(move || Highlight::Single(selected.get()))
                        on_pick=on_pick
                    />
                </div>
            </Show>
        </div>
    }
}
