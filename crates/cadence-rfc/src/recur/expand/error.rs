//! Occurrence stream error types.

use thiserror::Error;

use crate::recur::core::{ByRuleKind, Frequency};

/// A structurally parseable but semantically invalid rule combination.
///
/// These are detected at stream-start time, before any instant is
/// produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("BYWEEKNO is only valid with a YEARLY frequency")]
    ByWeekNoRequiresYearly,

    #[error("BYYEARDAY is not valid with a {0} frequency")]
    ByYearDayWithFrequency(Frequency),

    #[error("BYMONTHDAY is not valid with a WEEKLY frequency")]
    ByMonthDayWithWeekly,

    #[error("BYDAY ordinals are not valid with a {0} frequency")]
    DayOrdinalWithFrequency(Frequency),

    #[error("BYDAY ordinals are not valid when BYWEEKNO is present")]
    DayOrdinalWithByWeekNo,

    #[error("{0} requires an anchor with a time of day")]
    TimePartWithDateAnchor(ByRuleKind),

    #[error("a {0} frequency requires an anchor with a time of day")]
    TimeFrequencyWithDateAnchor(Frequency),

    #[error("{0} requires at least one selector")]
    EmptyByRule(ByRuleKind),
}

/// A failure while starting or draining an occurrence stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StreamError {
    #[error("invalid recurrence rule: {0}")]
    Validation(#[from] RuleViolation),

    #[error("temporal arithmetic overflow while stepping the recurrence")]
    Overflow,

    #[error("rule produced no occurrence across {0} consecutive periods")]
    Fruitless(u32),
}
