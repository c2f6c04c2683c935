//! BYYEARDAY: expands a year candidate into the selected (possibly
//! negative) days of the year, or limits finer candidates to them.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::resolve_day_of_year;
use crate::recur::core::{TemporalUnit, YearDayNum};

pub(super) fn apply(
    list: &[YearDayNum],
    candidates: Vec<NaiveDateTime>,
    unit: TemporalUnit,
) -> Vec<NaiveDateTime> {
    if TemporalUnit::Days < unit {
        let mut out = Vec::with_capacity(candidates.len() * list.len());
        for cand in &candidates {
            for day in list {
                let Some(ordinal) = resolve_day_of_year(day.get(), cand.year()) else {
                    // Day 366 of a common year.
                    continue;
                };
                if let Some(date) = NaiveDate::from_yo_opt(cand.year(), ordinal) {
                    out.push(date.and_time(cand.time()));
                }
            }
        }
        out
    } else {
        candidates
            .into_iter()
            .filter(|cand| {
                list.iter()
                    .any(|day| resolve_day_of_year(day.get(), cand.year()) == Some(cand.ordinal()))
            })
            .collect()
    }
}
