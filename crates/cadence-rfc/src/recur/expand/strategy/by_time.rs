//! BYHOUR, BYMINUTE, and BYSECOND: expand day-or-coarser candidates into
//! the selected clock values, or limit finer candidates to them.
//!
//! A BYSECOND selector of 60 (a leap second) has no representable wall
//! clock and expands to nothing; as a limiter it matches no candidate.

use chrono::{NaiveDateTime, Timelike};

use crate::recur::core::{HourNum, MinuteNum, SecondNum, TemporalUnit};

pub(super) fn apply_hours(
    list: &[HourNum],
    candidates: Vec<NaiveDateTime>,
    unit: TemporalUnit,
) -> Vec<NaiveDateTime> {
    if TemporalUnit::Hours < unit {
        expand(candidates, list, |cand, h| cand.with_hour(u32::from(h.get())))
    } else {
        candidates
            .into_iter()
            .filter(|cand| list.iter().any(|h| u32::from(h.get()) == cand.hour()))
            .collect()
    }
}

pub(super) fn apply_minutes(
    list: &[MinuteNum],
    candidates: Vec<NaiveDateTime>,
    unit: TemporalUnit,
) -> Vec<NaiveDateTime> {
    if TemporalUnit::Minutes < unit {
        expand(candidates, list, |cand, m| {
            cand.with_minute(u32::from(m.get()))
        })
    } else {
        candidates
            .into_iter()
            .filter(|cand| list.iter().any(|m| u32::from(m.get()) == cand.minute()))
            .collect()
    }
}

pub(super) fn apply_seconds(
    list: &[SecondNum],
    candidates: Vec<NaiveDateTime>,
    unit: TemporalUnit,
) -> Vec<NaiveDateTime> {
    if TemporalUnit::Seconds < unit {
        expand(candidates, list, |cand, s| {
            cand.with_second(u32::from(s.get()))
        })
    } else {
        candidates
            .into_iter()
            .filter(|cand| list.iter().any(|s| u32::from(s.get()) == cand.second()))
            .collect()
    }
}

fn expand<T: Copy>(
    candidates: Vec<NaiveDateTime>,
    list: &[T],
    with: impl Fn(&NaiveDateTime, T) -> Option<NaiveDateTime>,
) -> Vec<NaiveDateTime> {
    let mut out = Vec::with_capacity(candidates.len() * list.len());
    for cand in &candidates {
        for value in list {
            if let Some(adjusted) = with(cand, *value) {
                out.push(adjusted);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::super::testutil::wall;
    use super::*;

    #[test]
    fn expands_hours() {
        let list = [
            HourNum::new(9).expect("valid hour"),
            HourNum::new(14).expect("valid hour"),
        ];
        let out = apply_hours(&list, vec![wall(2026, 1, 5, 0, 0, 0)], TemporalUnit::Days);
        assert_eq!(
            out,
            vec![wall(2026, 1, 5, 9, 0, 0), wall(2026, 1, 5, 14, 0, 0)]
        );
    }

    #[test]
    fn limits_minutes_under_finer_frequency() {
        let list = [MinuteNum::new(30).expect("valid minute")];
        let out = apply_minutes(
            &list,
            vec![wall(2026, 1, 5, 9, 0, 0), wall(2026, 1, 5, 9, 30, 0)],
            TemporalUnit::Seconds,
        );
        assert_eq!(out, vec![wall(2026, 1, 5, 9, 30, 0)]);
    }

    #[test]
    fn leap_second_expands_to_nothing() {
        let list = [SecondNum::new(60).expect("60 is in the domain")];
        let out = apply_seconds(&list, vec![wall(2026, 6, 30, 23, 59, 0)], TemporalUnit::Minutes);
        assert!(out.is_empty());
    }
}
