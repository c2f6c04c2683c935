//! Weekday codes and the BYDAY selector (RFC 5545 §3.3.10).

use std::fmt;

use chrono::Weekday;

use super::part::PartValueError;

/// Parses a two-letter RFC 5545 weekday code (case-insensitive).
#[must_use]
pub fn parse_weekday(s: &str) -> Option<Weekday> {
    match s.to_ascii_uppercase().as_str() {
        "MO" => Some(Weekday::Mon),
        "TU" => Some(Weekday::Tue),
        "WE" => Some(Weekday::Wed),
        "TH" => Some(Weekday::Thu),
        "FR" => Some(Weekday::Fri),
        "SA" => Some(Weekday::Sat),
        "SU" => Some(Weekday::Sun),
        _ => None,
    }
}

/// The two-letter RFC 5545 code for a weekday.
#[must_use]
pub const fn weekday_code(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
        Weekday::Sat => "SA",
        Weekday::Sun => "SU",
    }
}

/// A single BYDAY selector: a weekday with an optional signed ordinal.
///
/// The ordinal selects the Nth matching weekday within the containing
/// period (month or year), counting from the end when negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekdayNum {
    ordinal: Option<i8>,
    weekday: Weekday,
}

impl WeekdayNum {
    /// Creates a BYDAY selector without an ordinal.
    #[must_use]
    pub const fn every(weekday: Weekday) -> Self {
        Self {
            ordinal: None,
            weekday,
        }
    }

    /// Creates a BYDAY selector with a signed ordinal.
    ///
    /// ## Errors
    /// Returns an error if the ordinal is zero or its magnitude exceeds 53.
    pub fn nth(ordinal: i8, weekday: Weekday) -> Result<Self, PartValueError> {
        if ordinal == 0 || ordinal.abs() > 53 {
            return Err(PartValueError::DayOrdinal(i64::from(ordinal)));
        }
        Ok(Self {
            ordinal: Some(ordinal),
            weekday,
        })
    }

    #[must_use]
    pub const fn ordinal(self) -> Option<i8> {
        self.ordinal
    }

    #[must_use]
    pub const fn weekday(self) -> Weekday {
        self.weekday
    }
}

impl fmt::Display for WeekdayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.ordinal {
            write!(f, "{n}")?;
        }
        f.write_str(weekday_code(self.weekday))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_codes() {
        assert_eq!(parse_weekday("MO"), Some(Weekday::Mon));
        assert_eq!(parse_weekday("su"), Some(Weekday::Sun));
        assert_eq!(parse_weekday("XX"), None);
    }

    #[test]
    fn codes_round_trip() {
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert_eq!(parse_weekday(weekday_code(day)), Some(day));
        }
    }

    #[test]
    fn nth_validates_ordinal() {
        assert!(WeekdayNum::nth(0, Weekday::Mon).is_err());
        assert!(WeekdayNum::nth(54, Weekday::Mon).is_err());
        assert!(WeekdayNum::nth(-1, Weekday::Sun).is_ok());
    }

    #[test]
    fn display_forms() {
        assert_eq!(WeekdayNum::every(Weekday::Fri).to_string(), "FR");
        let last_sunday = WeekdayNum::nth(-1, Weekday::Sun).expect("valid ordinal");
        assert_eq!(last_sunday.to_string(), "-1SU");
    }
}
