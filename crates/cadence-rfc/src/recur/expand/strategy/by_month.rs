//! BYMONTH: expands a year candidate into the selected months, or limits
//! finer candidates to them.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::recur::core::{MonthNum, TemporalUnit};

pub(super) fn apply(
    list: &[MonthNum],
    candidates: Vec<NaiveDateTime>,
    unit: TemporalUnit,
) -> Vec<NaiveDateTime> {
    if TemporalUnit::Months < unit {
        let mut out = Vec::with_capacity(candidates.len() * list.len());
        for cand in &candidates {
            for month in list {
                // Swapping the month keeps day and time; a day that does
                // not exist in the target month drops the candidate.
                if let Some(date) =
                    NaiveDate::from_ymd_opt(cand.year(), u32::from(month.get()), cand.day())
                {
                    out.push(date.and_time(cand.time()));
                }
            }
        }
        out
    } else {
        candidates
            .into_iter()
            .filter(|cand| list.iter().any(|m| u32::from(m.get()) == cand.month()))
            .collect()
    }
}
