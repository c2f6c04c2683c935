//! Week numbering relative to the week-start day (RFC 5545 §3.3.10).
//!
//! Week 1 of a year is the first week, starting on WKST, with at least
//! four days in that year. With WKST=MO this is ISO 8601 numbering.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Days from the week start to `day`, 0..=6.
pub(crate) fn days_from_week_start(day: Weekday, week_start: Weekday) -> i64 {
    i64::from((day.num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7)
}

/// The first day of week 1 of `year`.
pub(crate) fn week_one_start(year: i32, week_start: Weekday) -> Option<NaiveDate> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let offset = days_from_week_start(jan1.weekday(), week_start);
    if offset <= 3 {
        // January 1st's week keeps at least four days in the new year.
        jan1.checked_sub_signed(Duration::days(offset))
    } else {
        jan1.checked_add_signed(Duration::days(7 - offset))
    }
}

/// Number of numbered weeks in `year` (52 or 53).
pub(crate) fn weeks_in_year(year: i32, week_start: Weekday) -> Option<i64> {
    let this = week_one_start(year, week_start)?;
    let next = week_one_start(year.checked_add(1)?, week_start)?;
    Some((next - this).num_days() / 7)
}

/// The first day of the given week number of `year`.
///
/// Negative numbers count from the last numbered week; a number beyond the
/// year's week count resolves to `None` (e.g. week 53 of a 52-week year).
pub(crate) fn week_start_date(year: i32, week: i8, week_start: Weekday) -> Option<NaiveDate> {
    let total = weeks_in_year(year, week_start)?;
    let resolved = if week > 0 {
        i64::from(week)
    } else {
        total + i64::from(week) + 1
    };
    if resolved < 1 || resolved > total {
        return None;
    }
    week_one_start(year, week_start)?.checked_add_signed(Duration::days((resolved - 1) * 7))
}
