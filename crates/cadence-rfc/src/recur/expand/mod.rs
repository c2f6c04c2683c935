//! Occurrence stream engine (RFC 5545 §3.3.10).
//!
//! Composes frequency stepping with the ordered by-rule strategies and the
//! COUNT/UNTIL terminator into a lazy, restartable occurrence sequence:
//!
//! 1. Validate the rule against the anchor; fail before producing anything.
//! 2. Step an infinite series of period anchors by `interval × unit`.
//! 3. Fold the by-rule strategies over each period, starting from the
//!    singleton `{period anchor}` at the frequency's own unit, applying
//!    BYSETPOS last on the sorted, deduplicated set.
//! 4. Concatenate the per-period sets in period order.
//! 5. Drop candidates earlier than the anchor.
//! 6. Terminate via COUNT, truncate via UNTIL, or run forever.
//!
//! The iterator expands at most one period ahead of demand, so taking the
//! first N elements of an unbounded rule is always bounded work, and
//! dropping the iterator is cancellation.

mod error;
pub(crate) mod strategy;
pub(crate) mod weeks;

pub use error::{RuleViolation, StreamError};

use std::collections::VecDeque;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::recur::core::{
    ByRule, ByRuleKind, Count, Frequency, Instant, InstantKind, RecurrenceRule, Until,
};
use strategy::StrategyContext;

/// Consecutive occurrence-free periods tolerated before the stream aborts.
///
/// Large enough for every legitimate gap (week 53, leap days), small
/// enough to surface a rule that can never match instead of spinning.
const MAX_EMPTY_PERIODS: u32 = 10_000;

impl RecurrenceRule {
    /// Starts a lazy occurrence stream anchored at `anchor`.
    ///
    /// Each call produces an independent stream; no state is shared
    /// between evaluations of the same rule.
    ///
    /// ## Errors
    /// Returns a validation error for semantically invalid combinations
    /// (e.g. BYWEEKNO with a non-YEARLY frequency) before any instant is
    /// produced.
    pub fn occurrences(&self, anchor: Instant) -> Result<OccurrenceIter<'_>, StreamError> {
        occurrences(self, anchor)
    }

    /// Collects the occurrences within an inclusive wall-clock window.
    ///
    /// This is the bounded entry point for callers that would otherwise
    /// drain an unbounded stream.
    ///
    /// ## Errors
    /// Returns a validation error for invalid rules, or a stream error
    /// surfaced while expanding the window.
    pub fn occurrences_between(
        &self,
        anchor: Instant,
        from: Instant,
        to: Instant,
    ) -> Result<Vec<Instant>, StreamError> {
        let from_wall = from.wall_clock();
        let to_wall = to.wall_clock();
        let mut out = Vec::new();
        for item in occurrences(self, anchor)? {
            let instant = item?;
            let wall = instant.wall_clock();
            if wall > to_wall {
                break;
            }
            if wall >= from_wall {
                out.push(instant);
            }
        }
        Ok(out)
    }
}

/// Starts a lazy occurrence stream for `rule` anchored at `anchor`.
///
/// ## Errors
/// Returns a validation error before any instant is produced.
#[tracing::instrument(skip(rule, anchor), fields(freq = %rule.frequency()))]
pub fn occurrences(
    rule: &RecurrenceRule,
    anchor: Instant,
) -> Result<OccurrenceIter<'_>, StreamError> {
    validate(rule, &anchor)?;

    let kind = anchor.kind();
    let anchor_wall = anchor.wall_clock();
    let month_scope = rule.frequency() == Frequency::Monthly
        || (rule.frequency() == Frequency::Yearly && rule.by_rule(ByRuleKind::Month).is_some());

    let mut cursor = PeriodCursor::from_wall(anchor_wall);
    let regenerates_days = [
        ByRuleKind::WeekNo,
        ByRuleKind::YearDay,
        ByRuleKind::MonthDay,
        ByRuleKind::Day,
    ]
    .into_iter()
    .any(|by_kind| rule.by_rule(by_kind).is_some());
    if regenerates_days && matches!(rule.frequency(), Frequency::Monthly | Frequency::Yearly) {
        // The anchor's day of month is irrelevant once a by-rule
        // regenerates days; pinning the cursor to the 1st keeps periods
        // like February realizable for a day-31 anchor.
        cursor.day = 1;
    }

    tracing::trace!("Starting occurrence stream");

    Ok(OccurrenceIter {
        rule,
        kind,
        anchor_wall,
        month_scope,
        cursor,
        until_wall: rule.until().map(|u| until_wall(u, &kind, anchor.is_date())),
        remaining: rule.count().map(Count::get),
        last_wall: None,
        buffer: VecDeque::new(),
        empty_periods: 0,
        cursor_error: None,
        finished: false,
    })
}

/// Checks the anchor-independent and anchor-dependent rule invariants.
fn validate(rule: &RecurrenceRule, anchor: &Instant) -> Result<(), RuleViolation> {
    let freq = rule.frequency();

    for by_rule in rule.by_rules_in_evaluation_order() {
        if by_rule.is_empty() {
            return Err(RuleViolation::EmptyByRule(by_rule.kind()));
        }
    }

    if rule.by_rule(ByRuleKind::WeekNo).is_some() && freq != Frequency::Yearly {
        return Err(RuleViolation::ByWeekNoRequiresYearly);
    }
    if rule.by_rule(ByRuleKind::YearDay).is_some()
        && matches!(freq, Frequency::Monthly | Frequency::Weekly)
    {
        return Err(RuleViolation::ByYearDayWithFrequency(freq));
    }
    if rule.by_rule(ByRuleKind::MonthDay).is_some() && freq == Frequency::Weekly {
        return Err(RuleViolation::ByMonthDayWithWeekly);
    }

    if rule
        .by_rule(ByRuleKind::Day)
        .is_some_and(ByRule::has_day_ordinal)
    {
        if !matches!(freq, Frequency::Monthly | Frequency::Yearly) {
            return Err(RuleViolation::DayOrdinalWithFrequency(freq));
        }
        if rule.by_rule(ByRuleKind::WeekNo).is_some() {
            return Err(RuleViolation::DayOrdinalWithByWeekNo);
        }
    }

    if anchor.is_date() {
        if freq.is_time_granular() {
            return Err(RuleViolation::TimeFrequencyWithDateAnchor(freq));
        }
        for kind in [ByRuleKind::Hour, ByRuleKind::Minute, ByRuleKind::Second] {
            if rule.by_rule(kind).is_some() {
                return Err(RuleViolation::TimePartWithDateAnchor(kind));
            }
        }
    }

    Ok(())
}

/// Converts the UNTIL bound to the anchor's wall-clock frame at stream
/// start.
///
/// A date bound against a date-time anchor covers the whole UNTIL day; a
/// UTC bound against a zoned anchor converts into the anchor's zone, and
/// against floating or date anchors its wall clock is read as local time.
fn until_wall(until: Until, kind: &InstantKind, anchor_is_date: bool) -> NaiveDateTime {
    match until {
        Until::Date(date) => {
            if anchor_is_date {
                date.and_time(NaiveTime::MIN)
            } else {
                date.and_hms_opt(23, 59, 59)
                    .unwrap_or_else(|| date.and_time(NaiveTime::MIN))
            }
        }
        Until::Utc(instant) => match kind {
            InstantKind::Zoned(tz) => instant.with_timezone(tz).naive_local(),
            InstantKind::Utc | InstantKind::Date | InstantKind::Floating => instant.naive_utc(),
        },
    }
}

/// The period anchor as unrealized calendar fields.
///
/// Keeping the fields unrealized lets MONTHLY and YEARLY stepping hold on
/// to a day (say the 31st, or February 29th) through months and years that
/// lack it: such periods realize to `None` and contribute nothing instead
/// of drifting to a nearby day.
#[derive(Debug, Clone, Copy)]
struct PeriodCursor {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl PeriodCursor {
    fn from_wall(wall: NaiveDateTime) -> Self {
        Self {
            year: wall.year(),
            month: wall.month(),
            day: wall.day(),
            hour: wall.hour(),
            minute: wall.minute(),
            second: wall.second(),
        }
    }

    fn realize(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_opt(self.hour, self.minute, self.second)
    }

    fn step(&mut self, frequency: Frequency, interval: u32) -> Result<(), StreamError> {
        match frequency {
            Frequency::Yearly => {
                let years = i32::try_from(interval).map_err(|_e| StreamError::Overflow)?;
                self.year = self
                    .year
                    .checked_add(years)
                    .ok_or(StreamError::Overflow)?;
                self.check_year_bounds()
            }
            Frequency::Monthly => {
                let total = u64::from(self.month - 1) + u64::from(interval);
                let years = i32::try_from(total / 12).map_err(|_e| StreamError::Overflow)?;
                self.year = self
                    .year
                    .checked_add(years)
                    .ok_or(StreamError::Overflow)?;
                self.month = u32::try_from(total % 12).unwrap_or(0) + 1;
                self.check_year_bounds()
            }
            Frequency::Weekly => self.step_by(Duration::try_days(7 * i64::from(interval))),
            Frequency::Daily => self.step_by(Duration::try_days(i64::from(interval))),
            Frequency::Hourly => self.step_by(Duration::try_hours(i64::from(interval))),
            Frequency::Minutely => self.step_by(Duration::try_minutes(i64::from(interval))),
            Frequency::Secondly => self.step_by(Duration::try_seconds(i64::from(interval))),
        }
    }

    /// Advances a sub-monthly frequency by realized date arithmetic.
    fn step_by(&mut self, delta: Option<Duration>) -> Result<(), StreamError> {
        let delta = delta.ok_or(StreamError::Overflow)?;
        let current = self.realize().ok_or(StreamError::Overflow)?;
        let next = current
            .checked_add_signed(delta)
            .ok_or(StreamError::Overflow)?;
        *self = Self::from_wall(next);
        Ok(())
    }

    fn check_year_bounds(&self) -> Result<(), StreamError> {
        if (NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(&self.year) {
            Ok(())
        } else {
            Err(StreamError::Overflow)
        }
    }
}

/// A lazy, pull-based occurrence stream over one rule evaluation.
///
/// Yields `Ok` instants in non-decreasing order without repeats; a fatal
/// condition (arithmetic overflow, a rule that never matches) yields one
/// `Err` and then ends the stream. All state is local to this iterator, so
/// concurrent streams over the same rule never interfere.
#[derive(Debug)]
pub struct OccurrenceIter<'r> {
    rule: &'r RecurrenceRule,
    kind: InstantKind,
    anchor_wall: NaiveDateTime,
    month_scope: bool,
    cursor: PeriodCursor,
    until_wall: Option<NaiveDateTime>,
    remaining: Option<u32>,
    last_wall: Option<NaiveDateTime>,
    buffer: VecDeque<NaiveDateTime>,
    empty_periods: u32,
    cursor_error: Option<StreamError>,
    finished: bool,
}

impl OccurrenceIter<'_> {
    /// Expands one period: fold the by-rules in evaluation order from the
    /// singleton period anchor, then sort, deduplicate, and apply BYSETPOS.
    fn expand_period(&self, period_anchor: NaiveDateTime) -> Vec<NaiveDateTime> {
        let ctx = StrategyContext {
            week_start: self.rule.week_start(),
            anchor_weekday: self.anchor_wall.weekday(),
            month_scope: self.month_scope,
        };

        let mut candidates = vec![period_anchor];
        let mut unit = self.rule.frequency().unit();
        let mut set_pos = None;

        for by_rule in self.rule.by_rules_in_evaluation_order() {
            if by_rule.kind() == ByRuleKind::SetPos {
                set_pos = Some(by_rule);
                continue;
            }
            let (next, next_unit) = strategy::apply(by_rule, candidates, unit, &ctx);
            candidates = next;
            unit = next_unit;
        }

        candidates.sort_unstable();
        candidates.dedup();

        if let Some(ByRule::SetPos(positions)) = set_pos {
            candidates = strategy::select_positions(positions, &candidates);
        }

        candidates
    }

    /// Expands periods until the buffer holds at least one occurrence or
    /// the stream is over. Never works more than one period ahead.
    fn fill_buffer(&mut self) -> Result<(), StreamError> {
        while self.buffer.is_empty() && !self.finished {
            if let Some(error) = self.cursor_error.take() {
                return Err(error);
            }
            if self.empty_periods >= MAX_EMPTY_PERIODS {
                return Err(StreamError::Fruitless(MAX_EMPTY_PERIODS));
            }

            let period = self.cursor.realize();
            if let Err(error) = self
                .cursor
                .step(self.rule.frequency(), self.rule.interval().get())
            {
                // Surface after this period's occurrences have been drained.
                self.cursor_error = Some(error);
            }

            let Some(period_anchor) = period else {
                // A day the stepped month or year does not have.
                self.empty_periods += 1;
                continue;
            };

            let mut occurrences = self.expand_period(period_anchor);
            occurrences.retain(|cand| match self.last_wall {
                Some(last) => *cand > last,
                None => *cand >= self.anchor_wall,
            });

            if let Some(until) = self.until_wall
                && occurrences.iter().any(|cand| *cand > until)
            {
                occurrences.retain(|cand| *cand <= until);
                self.finished = true;
            }

            if occurrences.is_empty() {
                self.empty_periods += 1;
            } else {
                self.empty_periods = 0;
                self.buffer.extend(occurrences);
            }
        }
        Ok(())
    }
}

impl Iterator for OccurrenceIter<'_> {
    type Item = Result<Instant, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(wall) = self.buffer.pop_front() {
                self.last_wall = Some(wall);
                let Some(instant) = Instant::from_wall_clock(self.kind, wall) else {
                    // A wall-clock time the zone skips (DST gap); it does
                    // not consume COUNT.
                    continue;
                };
                if let Some(remaining) = &mut self.remaining {
                    *remaining -= 1;
                    if *remaining == 0 {
                        self.finished = true;
                        self.buffer.clear();
                    }
                }
                return Some(Ok(instant));
            }

            if self.finished {
                return None;
            }

            if let Err(error) = self.fill_buffer() {
                self.finished = true;
                return Some(Err(error));
            }
            if self.buffer.is_empty() {
                self.finished = true;
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc, Weekday};
    use chrono_tz::America::New_York;

    fn rule(text: &str) -> RecurrenceRule {
        text.parse().expect("valid rule")
    }

    fn wall(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .expect("valid date")
            .and_hms_opt(h, mi, s)
            .expect("valid time")
    }

    fn floating(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Instant {
        Instant::Floating(wall(y, mo, d, h, mi, s))
    }

    fn date(y: i32, mo: u32, d: u32) -> Instant {
        Instant::Date(NaiveDate::from_ymd_opt(y, mo, d).expect("valid date"))
    }

    fn take_ok(rule: &RecurrenceRule, anchor: Instant, n: usize) -> Vec<Instant> {
        rule.occurrences(anchor)
            .expect("valid rule")
            .take(n)
            .map(|item| item.expect("no stream error"))
            .collect()
    }

    #[test]
    fn daily_count_ten() {
        let rule = rule("FREQ=DAILY;COUNT=10");
        let out = take_ok(&rule, floating(1997, 9, 2, 9, 0, 0), 15);
        assert_eq!(out.len(), 10);
        assert_eq!(out[0], floating(1997, 9, 2, 9, 0, 0));
        assert_eq!(out[9], floating(1997, 9, 11, 9, 0, 0));
    }

    #[test]
    fn count_is_exact_regardless_of_extra_pulls() {
        let rule = rule("FREQ=WEEKLY;COUNT=4");
        let stream = rule
            .occurrences(floating(2026, 1, 5, 8, 30, 0))
            .expect("valid rule");
        assert_eq!(stream.take(9).count(), 4);
    }

    #[test]
    fn weekly_mo_we_fr_count_six() {
        let rule = rule("FREQ=WEEKLY;BYDAY=MO,WE,FR;COUNT=6");
        let out = take_ok(&rule, floating(1997, 9, 1, 9, 0, 0), 10);
        assert_eq!(
            out,
            vec![
                floating(1997, 9, 1, 9, 0, 0),
                floating(1997, 9, 3, 9, 0, 0),
                floating(1997, 9, 5, 9, 0, 0),
                floating(1997, 9, 8, 9, 0, 0),
                floating(1997, 9, 10, 9, 0, 0),
                floating(1997, 9, 12, 9, 0, 0),
            ]
        );
    }

    #[test]
    fn yearly_last_sunday_of_april_until() {
        let rule = rule("FREQ=YEARLY;BYMONTH=4;BYDAY=-1SU;UNTIL=19730429T070000Z");
        let out: Vec<Instant> = rule
            .occurrences(floating(1967, 4, 30, 2, 0, 0))
            .expect("valid rule")
            .map(|item| item.expect("no stream error"))
            .collect();
        assert_eq!(
            out,
            vec![
                floating(1967, 4, 30, 2, 0, 0),
                floating(1968, 4, 28, 2, 0, 0),
                floating(1969, 4, 27, 2, 0, 0),
                floating(1970, 4, 26, 2, 0, 0),
                floating(1971, 4, 25, 2, 0, 0),
                floating(1972, 4, 30, 2, 0, 0),
                floating(1973, 4, 29, 2, 0, 0),
            ]
        );
    }

    #[test]
    fn until_is_inclusive() {
        let rule = rule("FREQ=DAILY;UNTIL=19970904T160000Z");
        let anchor = Instant::Utc(Utc.with_ymd_and_hms(1997, 9, 2, 9, 0, 0).single().expect("valid"));
        let out: Vec<Instant> = rule
            .occurrences(anchor)
            .expect("valid rule")
            .map(|item| item.expect("no stream error"))
            .collect();
        assert_eq!(out.len(), 3);
        let last = out.last().expect("nonempty").wall_clock();
        assert!(last <= wall(1997, 9, 4, 16, 0, 0));
    }

    #[test]
    fn until_date_bound_with_date_anchor() {
        let rule = rule("FREQ=DAILY;UNTIL=19971224");
        let out: Vec<Instant> = rule
            .occurrences(date(1997, 12, 22))
            .expect("valid rule")
            .map(|item| item.expect("no stream error"))
            .collect();
        assert_eq!(
            out,
            vec![date(1997, 12, 22), date(1997, 12, 23), date(1997, 12, 24)]
        );
    }

    #[test]
    fn friday_the_thirteenth() {
        let rule = rule("FREQ=MONTHLY;BYDAY=FR;BYMONTHDAY=13");
        let window = rule
            .occurrences_between(
                date(1998, 2, 13),
                date(2016, 1, 1),
                date(2018, 12, 31),
            )
            .expect("valid rule");
        let first_five: Vec<Instant> = window.into_iter().take(5).collect();
        assert_eq!(
            first_five,
            vec![
                date(2016, 5, 13),
                date(2017, 1, 13),
                date(2017, 10, 13),
                date(2018, 4, 13),
                date(2018, 7, 13),
            ]
        );
        for instant in &first_five {
            let Instant::Date(d) = instant else {
                panic!("expected date instants");
            };
            assert_eq!(d.weekday(), Weekday::Fri);
            assert_eq!(d.day(), 13);
        }
    }

    #[test]
    fn yearly_bymonth_expansion_filters_pre_anchor_candidates() {
        let rule = rule("FREQ=YEARLY;INTERVAL=2;COUNT=10;BYMONTH=1,2,3");
        let out = take_ok(&rule, floating(1997, 3, 10, 9, 0, 0), 20);
        assert_eq!(out.len(), 10);
        assert_eq!(out[0], floating(1997, 3, 10, 9, 0, 0));
        assert_eq!(out[1], floating(1999, 1, 10, 9, 0, 0));
        assert_eq!(out[9], floating(2003, 3, 10, 9, 0, 0));
    }

    #[test]
    fn yearly_byyearday_with_interval() {
        let rule = rule("FREQ=YEARLY;INTERVAL=3;COUNT=10;BYYEARDAY=1,100,200");
        let out = take_ok(&rule, floating(1997, 1, 1, 9, 0, 0), 20);
        assert_eq!(out.len(), 10);
        assert_eq!(out[0], floating(1997, 1, 1, 9, 0, 0));
        assert_eq!(out[1], floating(1997, 4, 10, 9, 0, 0));
        assert_eq!(out[2], floating(1997, 7, 19, 9, 0, 0));
        assert_eq!(out[3], floating(2000, 1, 1, 9, 0, 0));
        assert_eq!(out[4], floating(2000, 4, 9, 9, 0, 0));
        assert_eq!(out[5], floating(2000, 7, 18, 9, 0, 0));
        assert_eq!(out[9], floating(2006, 1, 1, 9, 0, 0));
    }

    #[test]
    fn yearly_byweekno_monday() {
        let rule = rule("FREQ=YEARLY;BYWEEKNO=20;BYDAY=MO");
        let out = take_ok(&rule, floating(1997, 5, 12, 9, 0, 0), 3);
        assert_eq!(
            out,
            vec![
                floating(1997, 5, 12, 9, 0, 0),
                floating(1998, 5, 11, 9, 0, 0),
                floating(1999, 5, 17, 9, 0, 0),
            ]
        );
    }

    #[test]
    fn monthly_last_weekday_via_setpos() {
        let rule = rule("FREQ=MONTHLY;BYDAY=MO,TU,WE,TH,FR;BYSETPOS=-1");
        let out = take_ok(&rule, floating(1997, 9, 29, 9, 0, 0), 4);
        assert_eq!(
            out,
            vec![
                floating(1997, 9, 30, 9, 0, 0),
                floating(1997, 10, 31, 9, 0, 0),
                floating(1997, 11, 28, 9, 0, 0),
                floating(1997, 12, 31, 9, 0, 0),
            ]
        );
    }

    #[test]
    fn monthly_interval_18_monthdays() {
        let rule = rule("FREQ=MONTHLY;INTERVAL=18;COUNT=10;BYMONTHDAY=10,11,12,13,14,15");
        let out = take_ok(&rule, floating(1997, 9, 10, 9, 0, 0), 20);
        assert_eq!(out.len(), 10);
        assert_eq!(out[0], floating(1997, 9, 10, 9, 0, 0));
        assert_eq!(out[5], floating(1997, 9, 15, 9, 0, 0));
        assert_eq!(out[6], floating(1999, 3, 10, 9, 0, 0));
    }

    #[test]
    fn minutely_interval_90() {
        let rule = rule("FREQ=MINUTELY;INTERVAL=90;COUNT=4");
        let out = take_ok(&rule, floating(1997, 9, 2, 9, 0, 0), 8);
        assert_eq!(
            out,
            vec![
                floating(1997, 9, 2, 9, 0, 0),
                floating(1997, 9, 2, 10, 30, 0),
                floating(1997, 9, 2, 12, 0, 0),
                floating(1997, 9, 2, 13, 30, 0),
            ]
        );
    }

    #[test]
    fn hourly_with_until() {
        let rule = rule("FREQ=HOURLY;INTERVAL=3;UNTIL=19970902T170000Z");
        let out: Vec<Instant> = rule
            .occurrences(floating(1997, 9, 2, 9, 0, 0))
            .expect("valid rule")
            .map(|item| item.expect("no stream error"))
            .collect();
        assert_eq!(
            out,
            vec![
                floating(1997, 9, 2, 9, 0, 0),
                floating(1997, 9, 2, 12, 0, 0),
                floating(1997, 9, 2, 15, 0, 0),
            ]
        );
    }

    #[test]
    fn monthly_day_31_skips_short_months() {
        let rule = rule("FREQ=MONTHLY;COUNT=4");
        let out = take_ok(&rule, floating(2026, 1, 31, 12, 0, 0), 8);
        assert_eq!(
            out,
            vec![
                floating(2026, 1, 31, 12, 0, 0),
                floating(2026, 3, 31, 12, 0, 0),
                floating(2026, 5, 31, 12, 0, 0),
                floating(2026, 7, 31, 12, 0, 0),
            ]
        );
    }

    #[test]
    fn monthly_bymonthday_survives_day_31_anchor() {
        // The anchor day must not pin period realization once BYMONTHDAY
        // regenerates the days.
        let rule = rule("FREQ=MONTHLY;BYMONTHDAY=1;COUNT=3");
        let out = take_ok(&rule, floating(2026, 1, 31, 9, 0, 0), 6);
        assert_eq!(
            out,
            vec![
                floating(2026, 2, 1, 9, 0, 0),
                floating(2026, 3, 1, 9, 0, 0),
                floating(2026, 4, 1, 9, 0, 0),
            ]
        );
    }

    #[test]
    fn yearly_leap_day_only_in_leap_years() {
        let rule = rule("FREQ=YEARLY;COUNT=3");
        let out = take_ok(&rule, date(2020, 2, 29), 6);
        assert_eq!(
            out,
            vec![date(2020, 2, 29), date(2024, 2, 29), date(2028, 2, 29)]
        );
    }

    #[test]
    fn weekly_interval_two_wkst_sunday() {
        let rule = rule("FREQ=WEEKLY;INTERVAL=2;COUNT=4;BYDAY=TU,SU;WKST=SU");
        let out = take_ok(&rule, floating(1997, 8, 5, 9, 0, 0), 8);
        assert_eq!(
            out,
            vec![
                floating(1997, 8, 5, 9, 0, 0),
                floating(1997, 8, 17, 9, 0, 0),
                floating(1997, 8, 19, 9, 0, 0),
                floating(1997, 8, 31, 9, 0, 0),
            ]
        );
    }

    #[test]
    fn weekly_interval_two_wkst_monday() {
        let rule = rule("FREQ=WEEKLY;INTERVAL=2;COUNT=4;BYDAY=TU,SU;WKST=MO");
        let out = take_ok(&rule, floating(1997, 8, 5, 9, 0, 0), 8);
        assert_eq!(
            out,
            vec![
                floating(1997, 8, 5, 9, 0, 0),
                floating(1997, 8, 10, 9, 0, 0),
                floating(1997, 8, 19, 9, 0, 0),
                floating(1997, 8, 24, 9, 0, 0),
            ]
        );
    }

    #[test]
    fn zoned_stream_crosses_dst_boundary() {
        let rule = rule("FREQ=DAILY;COUNT=3");
        let anchor = Instant::Zoned(
            New_York
                .with_ymd_and_hms(2021, 3, 13, 9, 0, 0)
                .single()
                .expect("unambiguous local time"),
        );
        let out = take_ok(&rule, anchor, 5);
        let utc: Vec<_> = out
            .iter()
            .map(|i| match i {
                Instant::Zoned(dt) => dt.with_timezone(&Utc),
                _ => panic!("expected zoned instants"),
            })
            .collect();
        assert_eq!(
            utc,
            vec![
                Utc.with_ymd_and_hms(2021, 3, 13, 14, 0, 0).single().expect("valid"),
                Utc.with_ymd_and_hms(2021, 3, 14, 13, 0, 0).single().expect("valid"),
                Utc.with_ymd_and_hms(2021, 3, 15, 13, 0, 0).single().expect("valid"),
            ]
        );
    }

    #[test]
    fn dst_gap_occurrence_is_skipped_without_consuming_count() {
        // 02:30 does not exist on 2021-03-14 in New York.
        let rule = rule("FREQ=DAILY;COUNT=3");
        let anchor = Instant::Zoned(
            New_York
                .with_ymd_and_hms(2021, 3, 13, 2, 30, 0)
                .single()
                .expect("unambiguous local time"),
        );
        let out = take_ok(&rule, anchor, 6);
        let days: Vec<u32> = out
            .iter()
            .map(|i| match i {
                Instant::Zoned(dt) => dt.day(),
                _ => panic!("expected zoned instants"),
            })
            .collect();
        assert_eq!(days, vec![13, 15, 16]);
    }

    #[test]
    fn stream_is_monotonic_and_deduplicated() {
        let rule = rule("FREQ=YEARLY;BYMONTH=1;BYMONTHDAY=1,2;COUNT=8");
        let out = take_ok(&rule, floating(2024, 1, 1, 0, 0, 0), 16);
        assert_eq!(out.len(), 8);
        for pair in out.windows(2) {
            assert!(pair[0].wall_clock() < pair[1].wall_clock());
        }
    }

    #[test]
    fn streams_are_independent() {
        let rule = rule("FREQ=DAILY;COUNT=3");
        let anchor = floating(2026, 2, 1, 8, 0, 0);
        let first: Vec<Instant> = take_ok(&rule, anchor, 5);
        let second: Vec<Instant> = take_ok(&rule, anchor, 5);
        assert_eq!(first, second);
    }

    #[test]
    fn byweekno_with_monthly_rejected() {
        let rule = rule("FREQ=MONTHLY;BYWEEKNO=20");
        let err = rule
            .occurrences(floating(1997, 9, 2, 9, 0, 0))
            .err()
            .expect("validation must fail");
        assert_eq!(
            err,
            StreamError::Validation(RuleViolation::ByWeekNoRequiresYearly)
        );
    }

    #[test]
    fn byyearday_with_monthly_rejected() {
        let rule = rule("FREQ=MONTHLY;BYYEARDAY=100");
        assert_eq!(
            rule.occurrences(floating(1997, 9, 2, 9, 0, 0)).err(),
            Some(StreamError::Validation(
                RuleViolation::ByYearDayWithFrequency(Frequency::Monthly)
            ))
        );
    }

    #[test]
    fn bymonthday_with_weekly_rejected() {
        let rule = rule("FREQ=WEEKLY;BYMONTHDAY=13");
        assert_eq!(
            rule.occurrences(floating(1997, 9, 2, 9, 0, 0)).err(),
            Some(StreamError::Validation(RuleViolation::ByMonthDayWithWeekly))
        );
    }

    #[test]
    fn ordinal_byday_with_weekly_rejected() {
        let rule = rule("FREQ=WEEKLY;BYDAY=1MO");
        assert_eq!(
            rule.occurrences(floating(1997, 9, 2, 9, 0, 0)).err(),
            Some(StreamError::Validation(
                RuleViolation::DayOrdinalWithFrequency(Frequency::Weekly)
            ))
        );
    }

    #[test]
    fn ordinal_byday_with_byweekno_rejected() {
        let rule = rule("FREQ=YEARLY;BYWEEKNO=20;BYDAY=1MO");
        assert_eq!(
            rule.occurrences(floating(1997, 9, 2, 9, 0, 0)).err(),
            Some(StreamError::Validation(RuleViolation::DayOrdinalWithByWeekNo))
        );
    }

    #[test]
    fn time_parts_with_date_anchor_rejected() {
        let rule = rule("FREQ=DAILY;BYHOUR=9");
        assert_eq!(
            rule.occurrences(date(2026, 1, 1)).err(),
            Some(StreamError::Validation(RuleViolation::TimePartWithDateAnchor(
                ByRuleKind::Hour
            )))
        );
    }

    #[test]
    fn time_frequency_with_date_anchor_rejected() {
        let rule = rule("FREQ=HOURLY");
        assert_eq!(
            rule.occurrences(date(2026, 1, 1)).err(),
            Some(StreamError::Validation(
                RuleViolation::TimeFrequencyWithDateAnchor(Frequency::Hourly)
            ))
        );
    }

    #[test]
    fn fruitless_rule_terminates_with_error() {
        // February 30th never exists.
        let rule = rule("FREQ=YEARLY;BYMONTH=2;BYMONTHDAY=30");
        let mut stream = rule
            .occurrences(floating(2026, 1, 1, 0, 0, 0))
            .expect("structurally valid");
        let first = stream.next().expect("stream must not end silently");
        assert_eq!(first, Err(StreamError::Fruitless(MAX_EMPTY_PERIODS)));
        assert!(stream.next().is_none());
    }

    #[test]
    fn year_overflow_surfaces_as_error() {
        let rule = rule("FREQ=YEARLY");
        let items: Vec<_> = rule
            .occurrences(floating(262_140, 1, 1, 0, 0, 0))
            .expect("valid rule")
            .take(10)
            .collect();
        assert!(items.iter().any(|i| matches!(i, Ok(_))));
        assert!(items.contains(&Err(StreamError::Overflow)));
        assert_eq!(items.last(), Some(&Err(StreamError::Overflow)));
    }

    #[test]
    fn occurrences_between_bounds_the_window() {
        let rule = rule("FREQ=DAILY");
        let out = rule
            .occurrences_between(
                floating(2026, 1, 1, 12, 0, 0),
                floating(2026, 1, 10, 0, 0, 0),
                floating(2026, 1, 12, 23, 59, 59),
            )
            .expect("valid rule");
        assert_eq!(
            out,
            vec![
                floating(2026, 1, 10, 12, 0, 0),
                floating(2026, 1, 11, 12, 0, 0),
                floating(2026, 1, 12, 12, 0, 0),
            ]
        );
    }
}
