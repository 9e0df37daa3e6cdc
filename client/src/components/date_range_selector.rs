//! Check-in/check-out range picker with a two-month calendar.
//!
//! Clicks alternate between the start and the end of the range (see
//! `util::calendar::DateRange`). Every click emits both ISO dates; once the
//! range spans two distinct days the popover closes after a short delay so
//! the final selection stays visible.

use leptos::html::Div;
use leptos::prelude::*;
use time::Date;

use crate::components::calendar_view::CalendarView;
use crate::i18n::use_i18n;
use crate::util::calendar::{self, DateRange, DayBounds, Highlight};
use crate::util::click_outside::close_on_click_outside;

#[component]
pub fn DateRangeSelector(
    #[prop(into)] check_in_label: Signal<String>,
    #[prop(into)] check_out_label: Signal<String>,
    #[prop(into)] check_in: Signal<String>,
    #[prop(into)] check_out: Signal<String>,
    on_check_in_change: Callback<String>,
    on_check_out_change: Callback<String>,
    #[prop(into)] placeholder: Signal<String>,
) -> impl IntoView {
    let i18n = use_i18n();
    let open = RwSignal::new(false);
    let container = NodeRef::<Div>::new();
    close_on_click_outside(container, open);

    let today = calendar::today();
    let bounds = DayBounds::booking(today, None);
    let range = RwSignal::new(DateRange::from_iso(&check_in.get_untracked(), &check_out.get_untracked(), today));

    // Follow outside edits; values this selector emitted already match.
    Effect::new(move || {
        let incoming = (check_in.get(), check_out.get());
        if range.with_untracked(DateRange::to_iso) != incoming {
            range.set(DateRange::from_iso(&incoming.0, &incoming.1, today));
        }
    });

    let on_pick = Callback::new(move |day: Date| {
        let mut next = range.get_untracked();
        let complete = next.pick(day);
        range.set(next);

        let (start, end) = next.to_iso();
        on_check_in_change.run(start);
        on_check_out_change.run(end);

        if complete {
            close_after_delay(open);
        }
    });

    let display = move || {
        calendar::range_display(
            &check_in.get(),
            &check_out.get(),
            &placeholder.get(),
            &i18n.t("home.search.selectCheckout"),
        )
    };

    view! {
        <div node_ref=container class="date-field date-field--range">
            <label class="date-field__label">
                {move || format!("{} - {}", check_in_label.get(), check_out_label.get())}
            </label>
            <button
                type="button"
                class="date-field__toggle"
                class:date-field__toggle--empty=move || {
                    check_in.with(String::is_empty) || check_out.with(String::is_empty)
                }
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="date-field__icon">"📅"</span>
                <span>{display}</span>
                <span class=move || if open.get() { "chevron chevron--open" } else { "chevron" }>"▾"</span>
            </button>
            <Show when=move || open.get()>
                <div class="date-field__popover date-field__popover--wide">
                    <CalendarView
                        months=2
                        initial=range.get_untracked().start.max(today)
                        today=today
                        bounds=bounds
                        highlight=Signal::derive(move || Highlight::Range(range.get()))
                        on_pick=on_pick
                    />
                </div>
            </Show>
        </div>
    }
}

fn close_after_delay(open: RwSignal<bool>) {
    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(calendar::RANGE_CLOSE_DELAY_MS, move || open.set(false)).forget();

    #[cfg(not(feature = "hydrate"))]
    open.set(false);
}
