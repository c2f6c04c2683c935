//! Recurrence frequency and temporal units (RFC 5545 §3.3.10).

use std::fmt;

/// The repeating unit of a recurrence rule.
///
/// Ordered fine to coarse, so `Frequency::Daily < Frequency::Monthly`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Frequency {
    Secondly,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Parses a frequency name (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SECONDLY" => Some(Self::Secondly),
            "MINUTELY" => Some(Self::Minutely),
            "HOURLY" => Some(Self::Hourly),
            "DAILY" => Some(Self::Daily),
            "WEEKLY" => Some(Self::Weekly),
            "MONTHLY" => Some(Self::Monthly),
            "YEARLY" => Some(Self::Yearly),
            _ => None,
        }
    }

    /// The canonical RFC 5545 name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Secondly => "SECONDLY",
            Self::Minutely => "MINUTELY",
            Self::Hourly => "HOURLY",
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Yearly => "YEARLY",
        }
    }

    /// The calendar unit one period of this frequency spans.
    #[must_use]
    pub const fn unit(self) -> TemporalUnit {
        match self {
            Self::Secondly => TemporalUnit::Seconds,
            Self::Minutely => TemporalUnit::Minutes,
            Self::Hourly => TemporalUnit::Hours,
            Self::Daily => TemporalUnit::Days,
            Self::Weekly => TemporalUnit::Weeks,
            Self::Monthly => TemporalUnit::Months,
            Self::Yearly => TemporalUnit::Years,
        }
    }

    /// Whether one period of this frequency is shorter than a day.
    #[must_use]
    pub const fn is_time_granular(self) -> bool {
        matches!(self, Self::Secondly | Self::Minutely | Self::Hourly)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Calendar unit granularity, ordered fine to coarse.
///
/// Threaded through by-rule evaluation as the "current unit": a by-rule
/// whose natural unit is finer than the current unit expands candidates,
/// otherwise it limits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemporalUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(Frequency::parse("daily"), Some(Frequency::Daily));
        assert_eq!(Frequency::parse("YEARLY"), Some(Frequency::Yearly));
        assert_eq!(Frequency::parse("Weekly"), Some(Frequency::Weekly));
        assert_eq!(Frequency::parse("FORTNIGHTLY"), None);
    }

    #[test]
    fn ordering_fine_to_coarse() {
        assert!(Frequency::Secondly < Frequency::Daily);
        assert!(Frequency::Weekly < Frequency::Monthly);
        assert!(Frequency::Monthly < Frequency::Yearly);
        assert!(TemporalUnit::Days < TemporalUnit::Weeks);
        assert!(TemporalUnit::Months < TemporalUnit::Years);
    }

    #[test]
    fn unit_mapping() {
        assert_eq!(Frequency::Weekly.unit(), TemporalUnit::Weeks);
        assert_eq!(Frequency::Secondly.unit(), TemporalUnit::Seconds);
    }

    #[test]
    fn time_granular() {
        assert!(Frequency::Hourly.is_time_granular());
        assert!(!Frequency::Daily.is_time_granular());
    }
}
