//! The UNTIL bound of a recurrence rule.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

/// The inclusive upper bound of a bounded rule.
///
/// RFC 5545 permits a pure date or a UTC-zoned date-time here; a floating
/// local date-time is rejected at parse time. The bound is converted to the
/// anchor's temporal kind when a stream starts, never at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Until {
    Date(NaiveDate),
    Utc(DateTime<Utc>),
}

impl fmt::Display for Until {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{}", d.format("%Y%m%d")),
            Self::Utc(dt) => write!(f, "{}", dt.format("%Y%m%dT%H%M%SZ")),
        }
    }
}
