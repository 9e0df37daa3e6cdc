//! Month-grid calendar shared by the date pickers.
//!
//! Rendering only. Selection rules live in `util::calendar` and in the
//! picker that owns this view; a click on an enabled day is forwarded
//! through `on_pick`.

use leptos::prelude::*;
use time::Date;

use crate::i18n::use_i18n;
use crate::util::calendar::{DayBounds, Highlight, MonthCursor, WEEKDAY_HEADERS, day_class};

/// `months` consecutive month grids with shared prev/next paging. Paging
/// stops at the months containing the bounds.
#[component]
pub fn CalendarView(
    #[prop(default = 1)] months: usize,
    /// A day inside the first month shown.
    initial: Date,
    today: Date,
    #[prop(into)] bounds: Signal<DayBounds>,
    #[prop(into)] highlight: Signal<Highlight>,
    on_pick: Callback<Date>,
) -> impl IntoView {
    let i18n = use_i18n();
    let cursor = RwSignal::new(MonthCursor::of(initial));

    let can_prev = move || !cursor.get().prev().is_before_month_of(bounds.get().min);
    let can_next = move || !cursor.get().advance(months).is_after_month_of(bounds.get().max);

    view! {
        <div class="calendar">
            <div class="calendar__nav">
                <button
                    type="button"
                    class="calendar__nav-btn calendar__nav-btn--prev"
                    aria-label=move || i18n.t("home.search.previousMonth")
                    disabled=move || !can_prev()
                    on:click=move |_| cursor.update(|c| *c = c.prev())
                >
                    "‹"
                </button>
                <button
                    type="button"
                    class="calendar__nav-btn calendar__nav-btn--next"
                    aria-label=move || i18n.t("home.search.nextMonth")
                    disabled=move || !can_next()
                    on:click=move |_| cursor.update(|c| *c = c.next())
                >
                    "›"
                </button>
            </div>
            <div class="calendar__months">
                {move || {
                    let first = cursor.get();
                    (0..months)
                        .map(|offset| {
                            view! {
                                <CalendarMonth
                                    month=first.advance(offset)
                                    today=today
                                    bounds=bounds
                                    highlight=highlight
                                    on_pick=on_pick
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn CalendarMonth(
    month: MonthCursor,
    today: Date,
    bounds: Signal<DayBounds>,
    highlight: Signal<Highlight>,
    on_pick: Callback<Date>,
) -> impl IntoView {
    let rows = month
        .weeks()
        .into_iter()
        .map(|week| {
            let cells = week
                .into_iter()
                .map(|cell| match cell {
                    None => view! { <td class="calendar__cell calendar__cell--empty"></td> }.into_any(),
                    Some(day) => view! {
                        <td class="calendar__cell">
                            <button
                                type="button"
                                class=move || day_class(day, today, bounds.get(), highlight.get())
                                disabled=move || !bounds.get().contains(day)
                                on:click=move |_| on_pick.run(day)
                            >
                                {day.day()}
                            </button>
                        </td>
                    }
                    .into_any(),
                })
                .collect_view();
            view! { <tr>{cells}</tr> }
        })
        .collect_view();

    view! {
        <div class="calendar__month">
            <div class="calendar__title">{month.title()}</div>
            <table class="calendar__grid">
                <thead>
                    <tr>
                        {WEEKDAY_HEADERS
                            .iter()
                            .map(|name| view! { <th class="calendar__weekday">{*name}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
