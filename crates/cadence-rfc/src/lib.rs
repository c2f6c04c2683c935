//! Recurrence rules (RFC 5545 §3.3.10).
//!
//! This crate parses recurrence-rule text values into structured
//! [`RecurrenceRule`] models and expands them into lazy, possibly infinite
//! occurrence streams. It covers:
//! - Typed rule parts with per-part value validation
//! - A parser over pre-tokenized `NAME=VALUE` segments that collects all
//!   errors instead of failing on the first
//! - Canonical serialization with round-trip fidelity
//! - A pull-based occurrence iterator that never expands more than one
//!   period ahead of demand

pub mod error;
pub mod recur;

pub use error::{RfcError, RfcResult};
pub use recur::core::{
    ByRule, ByRuleKind, Count, Frequency, Instant, InstantKind, Interval, RecurrenceRule,
    TemporalUnit, Until, WeekdayNum,
};
pub use recur::expand::{OccurrenceIter, RuleViolation, StreamError};
pub use recur::parse::{ParseError, ParseErrorKind, ParseErrors, parse_instant};
