//! The parsed recurrence rule (RFC 5545 §3.3.10).

use chrono::Weekday;
use thiserror::Error;

use super::byrule::{ByRule, ByRuleKind};
use super::freq::Frequency;
use super::part::{Count, Interval};
use super::until::Until;

/// An invalid combination while building a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("COUNT and UNTIL cannot both be present")]
    CountUntilConflict,

    #[error("{0} can only occur once")]
    DuplicateByRule(ByRuleKind),

    #[error("{0} requires at least one selector")]
    EmptyByRule(ByRuleKind),
}

/// The order-preserving tag of a rule part other than FREQ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PartKind {
    Interval,
    Count,
    Until,
    WeekStart,
    By(ByRuleKind),
}

/// A parsed recurrence rule.
///
/// Immutable once constructed: the `with_*` builder methods consume and
/// return the rule, and the occurrence engine only ever borrows it. The
/// order in which parts were set is preserved for serialization; equality
/// ignores it.
#[derive(Debug, Clone)]
pub struct RecurrenceRule {
    frequency: Frequency,
    interval: Option<Interval>,
    count: Option<Count>,
    until: Option<Until>,
    week_start: Option<Weekday>,
    by_rules: Vec<ByRule>,
    order: Vec<PartKind>,
}

impl RecurrenceRule {
    /// Creates a rule with the given frequency and all defaults.
    #[must_use]
    pub const fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            interval: None,
            count: None,
            until: None,
            week_start: None,
            by_rules: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Sets the INTERVAL part.
    #[must_use]
    pub fn with_interval(mut self, interval: Interval) -> Self {
        if self.interval.is_none() {
            self.order.push(PartKind::Interval);
        }
        self.interval = Some(interval);
        self
    }

    /// Sets the COUNT part.
    ///
    /// ## Errors
    /// Returns an error if UNTIL is already present.
    pub fn with_count(mut self, count: Count) -> Result<Self, RuleError> {
        if self.until.is_some() {
            return Err(RuleError::CountUntilConflict);
        }
        if self.count.is_none() {
            self.order.push(PartKind::Count);
        }
        self.count = Some(count);
        Ok(self)
    }

    /// Sets the UNTIL part.
    ///
    /// ## Errors
    /// Returns an error if COUNT is already present.
    pub fn with_until(mut self, until: Until) -> Result<Self, RuleError> {
        if self.count.is_some() {
            return Err(RuleError::CountUntilConflict);
        }
        if self.until.is_none() {
            self.order.push(PartKind::Until);
        }
        self.until = Some(until);
        Ok(self)
    }

    /// Sets the WKST part.
    #[must_use]
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        if self.week_start.is_none() {
            self.order.push(PartKind::WeekStart);
        }
        self.week_start = Some(week_start);
        self
    }

    /// Adds a `BYxxx` part.
    ///
    /// ## Errors
    /// Returns an error if a part of the same kind is already present or
    /// the selector list is empty.
    pub fn with_by_rule(mut self, by_rule: ByRule) -> Result<Self, RuleError> {
        let kind = by_rule.kind();
        if by_rule.is_empty() {
            return Err(RuleError::EmptyByRule(kind));
        }
        if self.by_rule(kind).is_some() {
            return Err(RuleError::DuplicateByRule(kind));
        }
        self.order.push(PartKind::By(kind));
        self.by_rules.push(by_rule);
        Ok(self)
    }

    /// Assembles a rule the parser has already collected and validated.
    ///
    /// Invariants (FREQ present, COUNT/UNTIL exclusive, one part per kind,
    /// non-empty selector lists) are the parser's responsibility here.
    pub(crate) const fn from_parts(
        frequency: Frequency,
        interval: Option<Interval>,
        count: Option<Count>,
        until: Option<Until>,
        week_start: Option<Weekday>,
        by_rules: Vec<ByRule>,
        order: Vec<PartKind>,
    ) -> Self {
        Self {
            frequency,
            interval,
            count,
            until,
            week_start,
            by_rules,
            order,
        }
    }

    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// The interval, defaulting to 1.
    #[must_use]
    pub fn interval(&self) -> Interval {
        self.interval.unwrap_or_default()
    }

    #[must_use]
    pub const fn count(&self) -> Option<Count> {
        self.count
    }

    #[must_use]
    pub const fn until(&self) -> Option<Until> {
        self.until
    }

    /// The week-start day, defaulting to Monday.
    #[must_use]
    pub fn week_start(&self) -> Weekday {
        self.week_start.unwrap_or(Weekday::Mon)
    }

    /// The `BYxxx` part of the given kind, if present.
    #[must_use]
    pub fn by_rule(&self, kind: ByRuleKind) -> Option<&ByRule> {
        self.by_rules.iter().find(|r| r.kind() == kind)
    }

    /// The `BYxxx` parts in their fixed evaluation order, regardless of the
    /// order they were set in.
    #[must_use]
    pub fn by_rules_in_evaluation_order(&self) -> Vec<&ByRule> {
        let mut rules: Vec<&ByRule> = self.by_rules.iter().collect();
        rules.sort_by_key(|r| r.kind());
        rules
    }

    pub(crate) fn explicit_interval(&self) -> Option<Interval> {
        self.interval
    }

    pub(crate) fn explicit_week_start(&self) -> Option<Weekday> {
        self.week_start
    }

    pub(crate) fn part_order(&self) -> &[PartKind] {
        &self.order
    }
}

impl PartialEq for RecurrenceRule {
    /// Equality is structural and ignores the order parts were set in.
    fn eq(&self, other: &Self) -> bool {
        self.frequency == other.frequency
            && self.interval() == other.interval()
            && self.count == other.count
            && self.until == other.until
            && self.week_start() == other.week_start()
            && self.by_rules_in_evaluation_order() == other.by_rules_in_evaluation_order()
    }
}

impl Eq for RecurrenceRule {}
