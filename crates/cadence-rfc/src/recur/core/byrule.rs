//! The nine `BYxxx` rule parts as a closed tagged union.
//!
//! Adding a kind here is a compile-time-checked, single-point change:
//! parsing, evaluation-order lookup, and serialization all dispatch on
//! exhaustive matches over these variants.

use std::fmt;

use super::freq::TemporalUnit;
use super::part::{HourNum, MinuteNum, MonthDayNum, MonthNum, SecondNum, SetPos, WeekNum, YearDayNum};
use super::weekday::WeekdayNum;

/// One `BYxxx` rule part with its selector list.
///
/// Lists are non-empty for any rule that reaches evaluation; the parser and
/// the builder both reject empty lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByRule {
    Month(Vec<MonthNum>),
    WeekNo(Vec<WeekNum>),
    YearDay(Vec<YearDayNum>),
    MonthDay(Vec<MonthDayNum>),
    Day(Vec<WeekdayNum>),
    Hour(Vec<HourNum>),
    Minute(Vec<MinuteNum>),
    Second(Vec<SecondNum>),
    SetPos(Vec<SetPos>),
}

impl ByRule {
    /// The kind tag of this rule part.
    #[must_use]
    pub const fn kind(&self) -> ByRuleKind {
        match self {
            Self::Month(_) => ByRuleKind::Month,
            Self::WeekNo(_) => ByRuleKind::WeekNo,
            Self::YearDay(_) => ByRuleKind::YearDay,
            Self::MonthDay(_) => ByRuleKind::MonthDay,
            Self::Day(_) => ByRuleKind::Day,
            Self::Hour(_) => ByRuleKind::Hour,
            Self::Minute(_) => ByRuleKind::Minute,
            Self::Second(_) => ByRuleKind::Second,
            Self::SetPos(_) => ByRuleKind::SetPos,
        }
    }

    /// Number of selectors in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Month(v) => v.len(),
            Self::WeekNo(v) => v.len(),
            Self::YearDay(v) => v.len(),
            Self::MonthDay(v) => v.len(),
            Self::Day(v) => v.len(),
            Self::Hour(v) => v.len(),
            Self::Minute(v) => v.len(),
            Self::Second(v) => v.len(),
            Self::SetPos(v) => v.len(),
        }
    }

    /// Whether the selector list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether any BYDAY selector carries an ordinal.
    #[must_use]
    pub fn has_day_ordinal(&self) -> bool {
        match self {
            Self::Day(v) => v.iter().any(|wn| wn.ordinal().is_some()),
            _ => false,
        }
    }
}

impl fmt::Display for ByRule {
    /// The comma-joined selector list, without the `NAME=` prefix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{item}")?;
            }
            Ok(())
        }

        match self {
            Self::Month(v) => join(f, v),
            Self::WeekNo(v) => join(f, v),
            Self::YearDay(v) => join(f, v),
            Self::MonthDay(v) => join(f, v),
            Self::Day(v) => join(f, v),
            Self::Hour(v) => join(f, v),
            Self::Minute(v) => join(f, v),
            Self::Second(v) => join(f, v),
            Self::SetPos(v) => join(f, v),
        }
    }
}

/// The kind of a `BYxxx` rule part.
///
/// Declaration order is the RFC-mandated evaluation order, so the derived
/// `Ord` sorts rule parts into processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ByRuleKind {
    Month,
    WeekNo,
    YearDay,
    MonthDay,
    Day,
    Hour,
    Minute,
    Second,
    SetPos,
}

impl ByRuleKind {
    /// All kinds in evaluation order.
    pub const ALL: [Self; 9] = [
        Self::Month,
        Self::WeekNo,
        Self::YearDay,
        Self::MonthDay,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::SetPos,
    ];

    /// The canonical RFC 5545 rule-part name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Month => "BYMONTH",
            Self::WeekNo => "BYWEEKNO",
            Self::YearDay => "BYYEARDAY",
            Self::MonthDay => "BYMONTHDAY",
            Self::Day => "BYDAY",
            Self::Hour => "BYHOUR",
            Self::Minute => "BYMINUTE",
            Self::Second => "BYSECOND",
            Self::SetPos => "BYSETPOS",
        }
    }

    /// The calendar granularity this rule part naturally selects at.
    ///
    /// BYSETPOS is a positional filter with no calendar meaning, hence
    /// `None`.
    #[must_use]
    pub const fn natural_unit(self) -> Option<TemporalUnit> {
        match self {
            Self::Month => Some(TemporalUnit::Months),
            Self::WeekNo => Some(TemporalUnit::Weeks),
            Self::YearDay | Self::MonthDay | Self::Day => Some(TemporalUnit::Days),
            Self::Hour => Some(TemporalUnit::Hours),
            Self::Minute => Some(TemporalUnit::Minutes),
            Self::Second => Some(TemporalUnit::Seconds),
            Self::SetPos => None,
        }
    }
}

impl fmt::Display for ByRuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
