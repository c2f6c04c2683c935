//! By-rule expansion strategies (RFC 5545 §3.3.10).
//!
//! All nine rule parts share one contract: take the candidate set for the
//! current period together with the current calendar unit, and return a new
//! candidate set. A rule whose natural unit is finer than the current unit
//! *expands* each candidate into several; one whose unit is coarser or
//! equal *limits* the set to matching candidates. After each step the
//! current unit narrows to the rule's natural unit.
//!
//! BYSETPOS is the exception: it is a positional filter over the fully
//! expanded, sorted, deduplicated per-period set and runs after the fold.

mod by_day;
mod by_month;
mod by_month_day;
mod by_time;
mod by_week_no;
mod by_year_day;
mod set_pos;

pub(crate) use set_pos::select_positions;

use chrono::{NaiveDate, NaiveDateTime, Weekday};

use crate::recur::core::{ByRule, TemporalUnit};

/// Read-only evaluation context shared by all strategies.
pub(crate) struct StrategyContext {
    pub week_start: Weekday,
    /// The anchor's day of week, which BYWEEKNO expansion preserves.
    pub anchor_weekday: Weekday,
    /// Whether BYDAY ordinals resolve within a month rather than a year
    /// (MONTHLY frequency, or YEARLY narrowed by BYMONTH).
    pub month_scope: bool,
}

/// Applies one by-rule to the period's candidate set.
///
/// Returns the new candidate set and the narrowed current unit.
pub(crate) fn apply(
    rule: &ByRule,
    candidates: Vec<NaiveDateTime>,
    unit: TemporalUnit,
    ctx: &StrategyContext,
) -> (Vec<NaiveDateTime>, TemporalUnit) {
    let next_unit = rule
        .kind()
        .natural_unit()
        .map_or(unit, |natural| unit.min(natural));

    let out = match rule {
        ByRule::Month(list) => by_month::apply(list, candidates, unit),
        ByRule::WeekNo(list) => {
            by_week_no::apply(list, candidates, unit, ctx.week_start, ctx.anchor_weekday)
        }
        ByRule::YearDay(list) => by_year_day::apply(list, candidates, unit),
        ByRule::MonthDay(list) => by_month_day::apply(list, candidates, unit),
        ByRule::Day(list) => by_day::apply(list, candidates, unit, ctx),
        ByRule::Hour(list) => by_time::apply_hours(list, candidates, unit),
        ByRule::Minute(list) => by_time::apply_minutes(list, candidates, unit),
        ByRule::Second(list) => by_time::apply_seconds(list, candidates, unit),
        // Positional selection runs after the fold, on the sorted set.
        ByRule::SetPos(_) => candidates,
    };

    (out, next_unit)
}

/// Days in a month, probing the calendar for month length.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|&d| NaiveDate::from_ymd_opt(year, month, d).is_some())
        .unwrap_or(28)
}

/// Days in a year: 365, or 366 for leap years.
pub(crate) fn days_in_year(year: i32) -> u32 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}

/// Resolves a signed day-of-month selector against a concrete month.
///
/// Negative selectors count from the month's end; a magnitude beyond the
/// month's length resolves to `None`.
pub(crate) fn resolve_day_of_month(selector: i8, year: i32, month: u32) -> Option<u32> {
    let length = days_in_month(year, month);
    let resolved = if selector > 0 {
        i64::from(selector)
    } else {
        i64::from(length) + i64::from(selector) + 1
    };
    (1..=i64::from(length))
        .contains(&resolved)
        .then(|| u32::try_from(resolved).unwrap_or(1))
}

/// Resolves a signed day-of-year selector against a concrete year.
pub(crate) fn resolve_day_of_year(selector: i16, year: i32) -> Option<u32> {
    let length = days_in_year(year);
    let resolved = if selector > 0 {
        i64::from(selector)
    } else {
        i64::from(length) + i64::from(selector) + 1
    };
    (1..=i64::from(length))
        .contains(&resolved)
        .then(|| u32::try_from(resolved).unwrap_or(1))
}
