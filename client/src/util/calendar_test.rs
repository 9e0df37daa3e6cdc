use super::*;
use time::macros::date;

// =============================================================
// ISO parsing and display
// =============================================================

#[test]
fn parse_iso_accepts_padded_dates() {
    assert_eq!(parse_iso("2026-01-05"), Some(date!(2026 - 01 - 05)));
    assert_eq!(parse_iso(" 2026-12-31 "), Some(date!(2026 - 12 - 31)));
}

#[test]
fn parse_iso_rejects_blank_and_malformed() {
    assert_eq!(parse_iso(""), None);
    assert_eq!(parse_iso("2026-02-30"), None);
    assert_eq!(parse_iso("05/01/2026"), None);
}

#[test]
fn format_iso_zero_pads() {
    assert_eq!(format_iso(date!(2026 - 03 - 07)), "2026-03-07");
}

#[test]
fn short_and_long_formats_match_us_style() {
    assert_eq!(format_short(date!(2026 - 01 - 05)), "Jan 5, 2026");
    assert_eq!(format_long(date!(2026 - 01 - 05)), "Mon, Jan 5, 2026");
}

#[test]
fn single_display_falls_back_to_placeholder() {
    assert_eq!(single_display("", "Select date"), "Select date");
    assert_eq!(single_display("garbage", "Select date"), "Select date");
    assert_eq!(single_display("2026-01-05", "Select date"), "Mon, Jan 5, 2026");
}

#[test]
fn range_display_covers_all_states() {
    assert_eq!(range_display("", "", "Select dates", "Select checkout"), "Select dates");
    assert_eq!(
        range_display("2026-01-05", "", "Select dates", "Select checkout"),
        "Jan 5, 2026 - Select checkout"
    );
    assert_eq!(
        range_display("2026-01-05", "2026-01-09", "Select dates", "Select checkout"),
        "Jan 5, 2026 - Jan 9, 2026"
    );
    assert_eq!(range_display("", "2026-01-09", "Select dates", "Select checkout"), "Select dates");
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn booking_bounds_span_one_year_from_today() {
    let today = date!(2026 - 10 - 19);
    let bounds = DayBounds::booking(today, None);
    assert_eq!(bounds.min, today);
    assert_eq!(bounds.max, date!(2027 - 10 - 19));
    assert!(bounds.contains(today));
    assert!(bounds.contains(date!(2027 - 10 - 19)));
    assert!(!bounds.contains(date!(2026 - 10 - 18)));
    assert!(!bounds.contains(date!(2027 - 10 - 20)));
}

#[test]
fn booking_bounds_respect_explicit_minimum() {
    let today = date!(2026 - 10 - 19);
    let bounds = DayBounds::booking(today, Some(date!(2026 - 11 - 01)));
    assert!(!bounds.contains(date!(2026 - 10 - 31)));
    assert!(bounds.contains(date!(2026 - 11 - 01)));
}

// =============================================================
// Month grid
// =============================================================

#[test]
fn month_cursor_pages_across_year_boundaries() {
    let dec = MonthCursor { year: 2026, month: Month::December };
    assert_eq!(dec.next(), MonthCursor { year: 2027, month: Month::January });
    assert_eq!(dec.next().prev(), dec);
    let jan = MonthCursor { year: 2026, month: Month::January };
    assert_eq!(jan.prev(), MonthCursor { year: 2025, month: Month::December });
}

#[test]
fn days_in_month_handles_leap_years() {
    assert_eq!(MonthCursor { year: 2028, month: Month::February }.days_in_month(), 29);
    assert_eq!(MonthCursor { year: 2026, month: Month::February }.days_in_month(), 28);
    assert_eq!(MonthCursor { year: 2026, month: Month::April }.days_in_month(), 30);
    assert_eq!(MonthCursor { year: 2026, month: Month::October }.days_in_month(), 31);
}

#[test]
fn weeks_start_on_sunday() {
    // October 2026 starts on a Thursday.
    let weeks = MonthCursor { year: 2026, month: Month::October }.weeks();
    assert_eq!(weeks[0][..4], [None, None, None, None]);
    assert_eq!(weeks[0][4], Some(date!(2026 - 10 - 01)));
    assert_eq!(weeks.len(), 5);
    assert_eq!(weeks[4][6], Some(date!(2026 - 10 - 31)));
}

#[test]
fn weeks_contain_every_day_exactly_once() {
    let cursor = MonthCursor { year: 2026, month: Month::February };
    let days: Vec<Date> = cursor.weeks().iter().flatten().filter_map(|cell| *cell).collect();
    assert_eq!(days.len(), 28);
    assert_eq!(days.first(), Some(&date!(2026 - 02 - 01)));
    assert_eq!(days.last(), Some(&date!(2026 - 02 - 28)));
}

#[test]
fn month_title_is_long_month_and_year() {
    assert_eq!(MonthCursor { year: 2026, month: Month::March }.title(), "March 2026");
}

#[test]
fn is_before_month_of_compares_months_only() {
    let cursor = MonthCursor { year: 2026, month: Month::September };
    assert!(cursor.is_before_month_of(date!(2026 - 10 - 19)));
    assert!(!MonthCursor::of(date!(2026 - 10 - 01)).is_before_month_of(date!(2026 - 10 - 19)));
}

#[test]
fn is_after_month_of_compares_months_only() {
    let max = date!(2027 - 10 - 19);
    assert!(!MonthCursor::of(date!(2027 - 10 - 31)).is_after_month_of(max));
    assert!(MonthCursor { year: 2027, month: Month::November }.is_after_month_of(max));
}

#[test]
fn advance_steps_whole_months() {
    let nov = MonthCursor { year: 2026, month: Month::November };
    assert_eq!(nov.advance(0), nov);
    assert_eq!(nov.advance(1), MonthCursor { year: 2026, month: Month::December });
    assert_eq!(nov.advance(3), MonthCursor { year: 2027, month: Month::February });
}

// =============================================================
// Range selection
// =============================================================

#[test]
fn first_pick_collapses_range_and_waits_for_end() {
    let mut range = DateRange::new(date!(2026 - 10 - 19), date!(2026 - 10 - 25));
    assert!(!range.pick(date!(2026 - 11 - 02)));
    assert_eq!(range.start, date!(2026 - 11 - 02));
    assert_eq!(range.end, date!(2026 - 11 - 02));
    assert_eq!(range.next_edge(), RangeEdge::End);
}

#[test]
fn second_pick_of_a_later_day_completes_range() {
    let mut range = DateRange::from_iso("", "", date!(2026 - 10 - 19));
    range.pick(date!(2026 - 11 - 02));
    assert!(range.pick(date!(2026 - 11 - 05)));
    assert_eq!(range.to_iso(), ("2026-11-02".to_owned(), "2026-11-05".to_owned()));
    assert_eq!(range.next_edge(), RangeEdge::Start);
}

#[test]
fn second_pick_before_start_swaps_ends() {
    let mut range = DateRange::from_iso("", "", date!(2026 - 10 - 19));
    range.pick(date!(2026 - 11 - 10));
    assert!(range.pick(date!(2026 - 11 - 03)));
    assert_eq!(range.start, date!(2026 - 11 - 03));
    assert_eq!(range.end, date!(2026 - 11 - 10));
}

#[test]
fn second_pick_of_same_day_does_not_complete() {
    let mut range = DateRange::from_iso("", "", date!(2026 - 10 - 19));
    range.pick(date!(2026 - 11 - 10));
    assert!(!range.pick(date!(2026 - 11 - 10)));
    assert!(!range.is_complete());
}

#[test]
fn from_iso_defaults_missing_ends() {
    let today = date!(2026 - 10 - 19);
    let range = DateRange::from_iso("", "", today);
    assert_eq!((range.start, range.end), (today, today));

    let range = DateRange::from_iso("2026-11-01", "", today);
    assert_eq!((range.start, range.end), (date!(2026 - 11 - 01), date!(2026 - 11 - 01)));
}

#[test]
fn new_orders_reversed_ends() {
    let range = DateRange::new(date!(2026 - 11 - 05), date!(2026 - 11 - 01));
    assert_eq!(range.start, date!(2026 - 11 - 01));
    assert!(range.contains(date!(2026 - 11 - 03)));
    assert!(!range.contains(date!(2026 - 11 - 06)));
}

// =============================================================
// Day classes
// =============================================================

#[test]
fn day_class_marks_disabled_and_today() {
    let today = date!(2026 - 10 - 19);
    let bounds = DayBounds::booking(today, None);
    let class = day_class(date!(2026 - 10 - 18), today, bounds, Highlight::Single(None));
    assert_eq!(class, "calendar__day calendar__day--disabled");
    let class = day_class(today, today, bounds, Highlight::Single(Some(today)));
    assert_eq!(class, "calendar__day calendar__day--today calendar__day--selected");
}

#[test]
fn day_class_marks_range_edges() {
    let today = date!(2026 - 10 - 19);
    let bounds = DayBounds::booking(today, None);
    let range = DateRange::new(date!(2026 - 11 - 01), date!(2026 - 11 - 03));
    let start = day_class(date!(2026 - 11 - 01), today, bounds, Highlight::Range(range));
    assert!(start.contains("calendar__day--range-start"));
    assert!(start.contains("calendar__day--in-range"));
    let middle = day_class(date!(2026 - 11 - 02), today, bounds, Highlight::Range(range));
    assert!(middle.contains("calendar__day--in-range"));
    assert!(!middle.contains("range-start"));
    let outside = day_class(date!(2026 - 11 - 04), today, bounds, Highlight::Range(range));
    assert_eq!(outside, "calendar__day");
}
