//! BYMONTHDAY: expands month or year candidates into the selected
//! (possibly negative) days of the month, or limits finer candidates.
//!
//! Negative selectors always resolve against the length of the concrete
//! month they land in, so `-1` is the 28th through 31st as the calendar
//! dictates. Under a year-granular candidate set the selection applies to
//! every month of the year.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::resolve_day_of_month;
use crate::recur::core::{MonthDayNum, TemporalUnit};

pub(super) fn apply(
    list: &[MonthDayNum],
    candidates: Vec<NaiveDateTime>,
    unit: TemporalUnit,
) -> Vec<NaiveDateTime> {
    match unit {
        TemporalUnit::Years => {
            let mut out = Vec::with_capacity(candidates.len() * list.len() * 12);
            for cand in &candidates {
                for month in 1..=12 {
                    expand_in_month(list, cand, cand.year(), month, &mut out);
                }
            }
            out
        }
        unit if TemporalUnit::Days < unit => {
            let mut out = Vec::with_capacity(candidates.len() * list.len());
            for cand in &candidates {
                expand_in_month(list, cand, cand.year(), cand.month(), &mut out);
            }
            out
        }
        _ => candidates
            .into_iter()
            .filter(|cand| {
                list.iter().any(|day| {
                    resolve_day_of_month(day.get(), cand.year(), cand.month()) == Some(cand.day())
                })
            })
            .collect(),
    }
}

fn expand_in_month(
    list: &[MonthDayNum],
    cand: &NaiveDateTime,
    year: i32,
    month: u32,
    out: &mut Vec<NaiveDateTime>,
) {
    for day in list {
        let Some(resolved) = resolve_day_of_month(day.get(), year, month) else {
            // Day 30 of February, -31 of April, and the like.
            continue;
        };
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, resolved) {
            out.push(date.and_time(cand.time()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::wall;
    use super::*;

    fn month_days(values: &[i8]) -> Vec<MonthDayNum> {
        values
            .iter()
            .map(|&d| MonthDayNum::new(d).expect("valid month day"))
            .collect()
    }

    #[test]
    fn expands_within_month_candidate() {
        let out = apply(
            &month_days(&[10, 15]),
            vec![wall(1997, 9, 2, 9, 0, 0)],
            TemporalUnit::Months,
        );
        assert_eq!(
            out,
            vec![wall(1997, 9, 10, 9, 0, 0), wall(1997, 9, 15, 9, 0, 0)]
        );
    }

    #[test]
    fn negative_selector_is_month_end() {
        let out = apply(
            &month_days(&[-1]),
            vec![wall(2024, 2, 1, 0, 0, 0)],
            TemporalUnit::Months,
        );
        assert_eq!(out, vec![wall(2024, 2, 29, 0, 0, 0)]);
    }

    #[test]
    fn year_candidate_expands_across_all_months() {
        let out = apply(
            &month_days(&[31]),
            vec![wall(2026, 1, 1, 0, 0, 0)],
            TemporalUnit::Years,
        );
        // Only the seven 31-day months qualify.
        assert_eq!(out.len(), 7);
        assert_eq!(out[0], wall(2026, 1, 31, 0, 0, 0));
        assert_eq!(out[6], wall(2026, 12, 31, 0, 0, 0));
    }

    #[test]
    fn short_month_drops_selector() {
        let out = apply(
            &month_days(&[30]),
            vec![wall(2026, 2, 1, 0, 0, 0)],
            TemporalUnit::Months,
        );
        assert!(out.is_empty());
    }

    #[test]
    fn limits_at_day_granularity() {
        let out = apply(
            &month_days(&[13]),
            vec![wall(1998, 2, 13, 9, 0, 0), wall(1998, 2, 14, 9, 0, 0)],
            TemporalUnit::Days,
        );
        assert_eq!(out, vec![wall(1998, 2, 13, 9, 0, 0)]);
    }
}
