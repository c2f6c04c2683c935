//! BYWEEKNO: expands a year candidate into the selected WKST-relative
//! weeks, keeping the anchor's day of week.
//!
//! Only valid under a YEARLY frequency (validation enforces this), so this
//! strategy only ever expands. The anchor's weekday, not the candidate's,
//! picks the day within each selected week: the period cursor may sit on a
//! different day once other rule parts regenerate days.

use chrono::{Datelike, Duration, NaiveDateTime, Weekday};

use crate::recur::core::{TemporalUnit, WeekNum};
use crate::recur::expand::weeks;

pub(super) fn apply(
    list: &[WeekNum],
    candidates: Vec<NaiveDateTime>,
    unit: TemporalUnit,
    week_start: Weekday,
    anchor_weekday: Weekday,
) -> Vec<NaiveDateTime> {
    if unit <= TemporalUnit::Weeks {
        // Unreachable for validated rules; leave the set untouched.
        return candidates;
    }

    let weekday_offset = weeks::days_from_week_start(anchor_weekday, week_start);
    let mut out = Vec::with_capacity(candidates.len() * list.len());
    for cand in &candidates {
        for week in list {
            let Some(start) = weeks::week_start_date(cand.year(), week.get(), week_start) else {
                // Week 53 of a 52-week year.
                continue;
            };
            if let Some(date) = start.checked_add_signed(Duration::days(weekday_offset)) {
                out.push(date.and_time(cand.time()));
            }
        }
    }
    out
}
