//! Calendar boundary calculator
//!
//! Computes inclusive day/week/month bounds around a reference instant, the
//! weeks overlapping a month, and the store's week-number convention. Weeks
//! start on Sunday throughout. All computations are total over valid chrono
//! dates; there are no error paths here.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::types::{Period, PeriodKind};

/// Midnight at the start of `date`.
fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).unwrap()
}

/// Last representable instant of `date` at millisecond precision.
fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999).unwrap()
}

/// Bounds of the calendar day containing `at`.
pub fn day_bounds(at: NaiveDateTime) -> Period {
    let date = at.date();
    Period::new(PeriodKind::Day, start_of_day(date), end_of_day(date))
}

/// Bounds of the Sunday-to-Saturday week containing `at`.
pub fn week_bounds(at: NaiveDateTime) -> Period {
    let offset = at.date().weekday().num_days_from_sunday() as i64;
    let sunday = at.date() - Duration::days(offset);
    Period::new(
        PeriodKind::Week,
        start_of_day(sunday),
        end_of_day(sunday + Duration::days(6)),
    )
}

/// Bounds of the calendar month containing `at`.
///
/// The last day is found as "day before the first of the next month", which
/// is correct for every month length including leap Februaries.
pub fn month_bounds(at: NaiveDateTime) -> Period {
    let date = at.date();
    let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap();
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .pred_opt()
        .unwrap();
    Period::new(PeriodKind::Month, start_of_day(first), end_of_day(last))
}

/// Bounds for `kind` around `at`.
pub fn bounds(at: NaiveDateTime, kind: PeriodKind) -> Period {
    match kind {
        PeriodKind::Day => day_bounds(at),
        PeriodKind::Week => week_bounds(at),
        PeriodKind::Month => month_bounds(at),
    }
}

/// The weeks overlapping the month containing `at`, in walk order.
///
/// Starts from the Sunday on or before the first of the month and walks
/// forward seven days at a time. Every week that overlaps the month is
/// included, even by a single day, and is clipped to the month's own bounds.
/// Week numbers are the 1-based positions in the returned vector.
pub fn weeks_of_month(at: NaiveDateTime) -> Vec<Period> {
    let month = month_bounds(at);
    let first_day = month.start.date();
    let last_day = month.end.date();

    let offset = first_day.weekday().num_days_from_sunday() as i64;
    let mut cursor = first_day - Duration::days(offset);

    let mut weeks = Vec::new();
    while cursor <= last_day {
        let week_start = start_of_day(cursor);
        let week_end = end_of_day(cursor + Duration::days(6));
        if week_end >= month.start && week_start <= month.end {
            weeks.push(Period::new(
                PeriodKind::Week,
                week_start.max(month.start),
                week_end.min(month.end),
            ));
        }
        cursor = cursor + Duration::days(7);
    }
    weeks
}

/// Week number of `at` within its year, Sunday-start convention.
///
/// This is the store's historical formula,
/// `ceil((daysSinceJan1 + weekdayOfJan1 + 1) / 7)`, NOT ISO-8601 week
/// numbering: the week containing January 1 is always week 1 of that year,
/// and late-December dates can land in week 53 or 54. Report labels depend
/// on this exact output, so the formula is preserved as-is.
pub fn week_number_in_year(at: NaiveDateTime) -> u32 {
    let date = at.date();
    let jan1 = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap();
    let days_elapsed = (date - jan1).num_days();
    let numerator = days_elapsed + jan1.weekday().num_days_from_sunday() as i64 + 1;
    ((numerator + 6) / 7) as u32
}
