//! Core recurrence-rule models (RFC 5545 §3.3.10).
//!
//! These types are designed for:
//! - Round-trip fidelity: preserving the order rule parts were set in
//! - Type safety: every selector validates its own value domain
//! - Immutability: a parsed rule never changes; streams borrow it read-only

mod byrule;
mod freq;
mod instant;
mod part;
pub(crate) mod rule;
mod until;
mod weekday;

pub use byrule::{ByRule, ByRuleKind};
pub use freq::{Frequency, TemporalUnit};
pub use instant::{Instant, InstantKind};
pub use part::{
    Count, HourNum, Interval, MinuteNum, MonthDayNum, MonthNum, PartValueError, SecondNum, SetPos,
    WeekNum, YearDayNum,
};
pub use rule::{RecurrenceRule, RuleError};
pub use until::Until;
pub use weekday::{WeekdayNum, parse_weekday, weekday_code};
