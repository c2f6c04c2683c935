//! BYSETPOS: positional selection over the fully expanded per-period set.
//!
//! Positions are 1-based from the start (positive) or end (negative) of
//! the sorted, deduplicated candidate set. Out-of-range positions are
//! silently dropped, never errors.

use chrono::NaiveDateTime;

use crate::recur::core::SetPos;

pub(crate) fn select_positions(list: &[SetPos], sorted: &[NaiveDateTime]) -> Vec<NaiveDateTime> {
    let len = i64::try_from(sorted.len()).unwrap_or(i64::MAX);

    let mut out: Vec<NaiveDateTime> = list
        .iter()
        .filter_map(|pos| {
            let p = i64::from(pos.get());
            let index = if p > 0 { p - 1 } else { len + p };
            usize::try_from(index).ok().and_then(|i| sorted.get(i)).copied()
        })
        .collect();

    out.sort_unstable();
    out.dedup();
    out
}
