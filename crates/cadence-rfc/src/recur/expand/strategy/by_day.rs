//! BYDAY: expands coarser candidates into matching weekdays of the year,
//! month, or week, or limits day-granular candidates by weekday.
//!
//! An ordinal selects the Nth matching weekday within the containing
//! period, counting from the end when negative. Which period contains a
//! candidate depends on the current unit during expansion and on the
//! frequency (month scope vs year scope) during limiting.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

use super::{StrategyContext, days_in_month};
use crate::recur::core::{TemporalUnit, WeekdayNum};
use crate::recur::expand::weeks;

pub(super) fn apply(
    list: &[WeekdayNum],
    candidates: Vec<NaiveDateTime>,
    unit: TemporalUnit,
    ctx: &StrategyContext,
) -> Vec<NaiveDateTime> {
    match unit {
        TemporalUnit::Years => expand_in_span(list, &candidates, year_span),
        TemporalUnit::Months => expand_in_span(list, &candidates, month_span),
        TemporalUnit::Weeks => expand_in_week(list, &candidates, ctx.week_start),
        _ => candidates
            .into_iter()
            .filter(|cand| list.iter().any(|sel| matches_selector(*sel, cand, ctx)))
            .collect(),
    }
}

/// The first and last day of the candidate's year.
fn year_span(cand: &NaiveDateTime) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(cand.year(), 1, 1)?;
    let end = NaiveDate::from_ymd_opt(cand.year(), 12, 31)?;
    Some((start, end))
}

/// The first and last day of the candidate's month.
fn month_span(cand: &NaiveDateTime) -> Option<(NaiveDate, NaiveDate)> {
    let year = cand.year();
    let month = cand.month();
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))?;
    Some((start, end))
}

fn expand_in_span(
    list: &[WeekdayNum],
    candidates: &[NaiveDateTime],
    span: impl Fn(&NaiveDateTime) -> Option<(NaiveDate, NaiveDate)>,
) -> Vec<NaiveDateTime> {
    let mut out = Vec::new();
    for cand in candidates {
        let Some((start, end)) = span(cand) else {
            continue;
        };
        for sel in list {
            match sel.ordinal() {
                Some(n) => {
                    if let Some(date) = nth_weekday_in_span(start, end, sel.weekday(), n) {
                        out.push(date.and_time(cand.time()));
                    }
                }
                None => {
                    let mut cursor = first_weekday_on_or_after(start, sel.weekday());
                    while let Some(date) = cursor {
                        if date > end {
                            break;
                        }
                        out.push(date.and_time(cand.time()));
                        cursor = date.checked_add_signed(Duration::days(7));
                    }
                }
            }
        }
    }
    out
}

/// Expands each candidate into the matching weekdays of its WKST-relative
/// week. Ordinals have no meaning at week granularity; validation rejects
/// them before a stream starts.
fn expand_in_week(
    list: &[WeekdayNum],
    candidates: &[NaiveDateTime],
    week_start: Weekday,
) -> Vec<NaiveDateTime> {
    let mut out = Vec::new();
    for cand in candidates {
        let offset = weeks::days_from_week_start(cand.weekday(), week_start);
        let Some(start) = cand.date().checked_sub_signed(Duration::days(offset)) else {
            continue;
        };
        for day_offset in 0..7 {
            let Some(date) = start.checked_add_signed(Duration::days(day_offset)) else {
                continue;
            };
            if list.iter().any(|sel| sel.weekday() == date.weekday()) {
                out.push(date.and_time(cand.time()));
            }
        }
    }
    out
}

fn matches_selector(sel: WeekdayNum, cand: &NaiveDateTime, ctx: &StrategyContext) -> bool {
    if sel.weekday() != cand.weekday() {
        return false;
    }
    match sel.ordinal() {
        None => true,
        Some(n) => {
            let span = if ctx.month_scope {
                month_span(cand)
            } else {
                year_span(cand)
            };
            span.and_then(|(start, end)| nth_weekday_in_span(start, end, sel.weekday(), n))
                == Some(cand.date())
        }
    }
}

fn first_weekday_on_or_after(start: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let offset = (weekday.num_days_from_monday() + 7 - start.weekday().num_days_from_monday()) % 7;
    start.checked_add_signed(Duration::days(i64::from(offset)))
}

fn last_weekday_on_or_before(end: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let offset = (end.weekday().num_days_from_monday() + 7 - weekday.num_days_from_monday()) % 7;
    end.checked_sub_signed(Duration::days(i64::from(offset)))
}

/// The Nth weekday within an inclusive date span, from the end if negative.
fn nth_weekday_in_span(
    start: NaiveDate,
    end: NaiveDate,
    weekday: Weekday,
    n: i8,
) -> Option<NaiveDate> {
    if n > 0 {
        first_weekday_on_or_after(start, weekday)?
            .checked_add_signed(Duration::days((i64::from(n) - 1) * 7))
            .filter(|date| *date <= end)
    } else {
        last_weekday_on_or_before(end, weekday)?
            .checked_sub_signed(Duration::days((i64::from(n).abs() - 1) * 7))
            .filter(|date| *date >= start)
    }
}
