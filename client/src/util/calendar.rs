//! Calendar math for the date pickers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The search bar's pickers render their own month grids, so everything they
//! need that is not markup lives here: ISO parsing/formatting, month paging,
//! Sunday-first week rows, the bookable window, and the two-click range
//! selection cycle. All functions are pure and take `today` explicitly;
//! [`today`] is the only clock read.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use time::macros::format_description;
use time::{Date, Duration, Month, OffsetDateTime};

/// How far ahead (in days) a stay can be booked.
pub const BOOKING_WINDOW_DAYS: i64 = 365;

/// Delay before the range popover closes once a range is complete.
pub const RANGE_CLOSE_DELAY_MS: u32 = 300;

/// Current UTC calendar date.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Parse a `YYYY-MM-DD` string. Blank or malformed input yields `None`.
pub fn parse_iso(value: &str) -> Option<Date> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Format as `YYYY-MM-DD`.
pub fn format_iso(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// `Jan 5, 2026`
pub fn format_short(date: Date) -> String {
    date.format(format_description!("[month repr:short] [day padding:none], [year]"))
        .unwrap_or_else(|_| format_iso(date))
}

/// `Mon, Jan 5, 2026`
pub fn format_long(date: Date) -> String {
    date.format(format_description!("[weekday repr:short], [month repr:short] [day padding:none], [year]"))
        .unwrap_or_else(|_| format_iso(date))
}

/// Button text for a single picker: the long date, or the placeholder when
/// nothing (or nothing parseable) is chosen.
pub fn single_display(value: &str, placeholder: &str) -> String {
    parse_iso(value).map_or_else(|| placeholder.to_owned(), format_long)
}

/// Button text for the range picker.
pub fn range_display(check_in: &str, check_out: &str, placeholder: &str, select_checkout: &str) -> String {
    match (parse_iso(check_in), parse_iso(check_out)) {
        (Some(start), Some(end)) => format!("{} - {}", format_short(start), format_short(end)),
        (Some(start), None) => format!("{} - {select_checkout}", format_short(start)),
        _ => placeholder.to_owned(),
    }
}

/// Inclusive range of selectable days.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayBounds {
    pub min: Date,
    pub max: Date,
}

impl DayBounds {
    /// `[min or today, today + BOOKING_WINDOW_DAYS]`.
    pub fn booking(today: Date, min: Option<Date>) -> Self {
        Self { min: min.unwrap_or(today), max: today.saturating_add(Duration::days(BOOKING_WINDOW_DAYS)) }
    }

    pub fn contains(self, day: Date) -> bool {
        self.min <= day && day <= self.max
    }
}

/// A displayed month.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: Month,
}

impl MonthCursor {
    pub fn of(date: Date) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn next(self) -> Self {
        match self.month {
            Month::December => Self { year: self.year + 1, month: Month::January },
            month => Self { year: self.year, month: month.next() },
        }
    }

    pub fn prev(self) -> Self {
        match self.month {
            Month::January => Self { year: self.year - 1, month: Month::December },
            month => Self { year: self.year, month: month.previous() },
        }
    }

    pub fn days_in_month(self) -> u8 {
        (28..=31)
            .rev()
            .find(|&day| Date::from_calendar_date(self.year, self.month, day).is_ok())
            .unwrap_or(28)
    }

    /// `January 2026`
    pub fn title(self) -> String {
        Date::from_calendar_date(self.year, self.month, 1)
            .ok()
            .and_then(|d| d.format(format_description!("[month repr:long] [year]")).ok())
            .unwrap_or_else(|| format!("{:?} {}", self.month, self.year))
    }

    /// Sunday-first week rows; cells outside the month are `None`.
    pub fn weeks(self) -> Vec<[Option<Date>; 7]> {
        let days: Vec<Date> = (1..=self.days_in_month())
            .filter_map(|day| Date::from_calendar_date(self.year, self.month, day).ok())
            .collect();
        let Some(first) = days.first() else {
            return Vec::new();
        };
        let leading = usize::from(first.weekday().number_days_from_sunday());

        let mut cells: Vec<Option<Date>> = vec![None; leading];
        cells.extend(days.iter().copied().map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        cells
            .chunks_exact(7)
            .map(|chunk| {
                let mut row = [None; 7];
                row.copy_from_slice(chunk);
                row
            })
            .collect()
    }

    /// Whether paging back would show only days before `bound`.
    pub fn is_before_month_of(self, bound: Date) -> bool {
        (self.year, u8::from(self.month)) < (bound.year(), u8::from(bound.month()))
    }

    /// Whether this month starts after the month containing `bound`.
    pub fn is_after_month_of(self, bound: Date) -> bool {
        (self.year, u8::from(self.month)) > (bound.year(), u8::from(bound.month()))
    }

    /// The month `n` steps ahead.
    pub fn advance(self, n: usize) -> Self {
        (0..n).fold(self, |cursor, _| cursor.next())
    }
}

/// Short weekday headers, Sunday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Which end of the range the next click sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RangeEdge {
    #[default]
    Start,
    End,
}

/// Check-in/check-out range under selection.
///
/// Clicks alternate: the first sets both ends to the clicked day, the second
/// sets the end (swapping ends if it lands before the start).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
    next_edge: RangeEdge,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Self {
        let (start, end) = if end < start { (end, start) } else { (start, end) };
        Self { start, end, next_edge: RangeEdge::Start }
    }

    /// Seed from the search inputs; unset ends default to `today`.
    pub fn from_iso(check_in: &str, check_out: &str, today: Date) -> Self {
        let start = parse_iso(check_in).unwrap_or(today);
        let end = parse_iso(check_out).unwrap_or(start);
        Self::new(start, end)
    }

    pub fn next_edge(&self) -> RangeEdge {
        self.next_edge
    }

    /// Apply a click. Returns `true` when the click completed a range
    /// spanning at least two distinct days.
    pub fn pick(&mut self, day: Date) -> bool {
        match self.next_edge {
            RangeEdge::Start => {
                self.start = day;
                self.end = day;
                self.next_edge = RangeEdge::End;
                false
            }
            RangeEdge::End => {
                if day < self.start {
                    self.end = self.start;
                    self.start = day;
                } else {
                    self.end = day;
                }
                self.next_edge = RangeEdge::Start;
                self.is_complete()
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.start != self.end
    }

    pub fn contains(&self, day: Date) -> bool {
        self.start <= day && day <= self.end
    }

    /// ISO strings for the check-in and check-out callbacks.
    pub fn to_iso(&self) -> (String, String) {
        (format_iso(self.start), format_iso(self.end))
    }
}

/// What a calendar grid highlights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    Single(Option<Date>),
    Range(DateRange),
}

/// BEM class list for one day cell.
pub fn day_class(day: Date, today: Date, bounds: DayBounds, highlight: Highlight) -> String {
    let mut classes = vec!["calendar__day"];
    if !bounds.contains(day) {
        classes.push("calendar__day--disabled");
    }
    if day == today {
        classes.push("calendar__day--today");
    }
    match highlight {
        Highlight::Single(Some(selected)) if selected == day => classes.push("calendar__day--selected"),
        Highlight::Single(_) => {}
        Highlight::Range(range) => {
            if range.contains(day) {
                classes.push("calendar__day--in-range");
            }
            if day == range.start {
                classes.push("calendar__day--range-start");
            }
            if day == range.end {
                classes.push("calendar__day--range-end");
            }
        }
    }
    classes.join(" ")
}
