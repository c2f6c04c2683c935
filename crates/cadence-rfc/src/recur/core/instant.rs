//! The occurrence instant type.
//!
//! An anchor (and therefore every occurrence it generates) is one of four
//! temporal kinds: a pure date, a floating local date-time, a UTC instant,
//! or a date-time in an explicit IANA zone. Expansion arithmetic runs on
//! local wall-clock values; the kind is re-attached at emission.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// A single occurrence instant, tagged with its temporal kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instant {
    /// A pure date with no time component.
    Date(chrono::NaiveDate),
    /// A local date-time not attached to any zone.
    Floating(NaiveDateTime),
    /// An instant in UTC.
    Utc(DateTime<Utc>),
    /// An instant in an explicit IANA zone.
    Zoned(DateTime<Tz>),
}

/// The temporal kind of an [`Instant`], without its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstantKind {
    Date,
    Floating,
    Utc,
    Zoned(Tz),
}

impl Instant {
    /// The kind descriptor of this instant.
    #[must_use]
    pub fn kind(&self) -> InstantKind {
        match self {
            Self::Date(_) => InstantKind::Date,
            Self::Floating(_) => InstantKind::Floating,
            Self::Utc(_) => InstantKind::Utc,
            Self::Zoned(dt) => InstantKind::Zoned(dt.timezone()),
        }
    }

    /// The local wall-clock value; pure dates read as midnight.
    #[must_use]
    pub fn wall_clock(&self) -> NaiveDateTime {
        match self {
            Self::Date(d) => d.and_time(chrono::NaiveTime::MIN),
            Self::Floating(dt) => *dt,
            Self::Utc(dt) => dt.naive_utc(),
            Self::Zoned(dt) => dt.naive_local(),
        }
    }

    /// Whether this instant is a pure date.
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    /// Re-attaches a temporal kind to a wall-clock value.
    ///
    /// Returns `None` when the wall-clock time does not exist in the target
    /// zone (a DST gap). An ambiguous time (DST fold) resolves to the
    /// earlier offset, per RFC 5545 §3.3.5.
    #[must_use]
    pub fn from_wall_clock(kind: InstantKind, wall: NaiveDateTime) -> Option<Self> {
        match kind {
            InstantKind::Date => Some(Self::Date(wall.date())),
            InstantKind::Floating => Some(Self::Floating(wall)),
            InstantKind::Utc => Some(Self::Utc(wall.and_utc())),
            InstantKind::Zoned(tz) => match tz.from_local_datetime(&wall) {
                LocalResult::None => None,
                LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(Self::Zoned(dt)),
            },
        }
    }
}

impl PartialOrd for Instant {
    /// Orders absolute instants (`Utc`/`Zoned`) on the timeline and
    /// zone-less values (`Date`/`Floating`) by wall clock. Mixing the two
    /// families has no defined order.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Utc(_) | Self::Zoned(_), Self::Utc(_) | Self::Zoned(_)) => {
                Some(self.to_utc_instant().cmp(&other.to_utc_instant()))
            }
            (Self::Date(_) | Self::Floating(_), Self::Date(_) | Self::Floating(_)) => {
                Some(self.wall_clock().cmp(&other.wall_clock()))
            }
            _ => None,
        }
    }
}

impl Instant {
    fn to_utc_instant(self) -> DateTime<Utc> {
        match self {
            Self::Utc(dt) => dt,
            Self::Zoned(dt) => dt.with_timezone(&Utc),
            // Callers only reach this for absolute kinds; treat the wall
            // clock as UTC for the remaining ones.
            Self::Date(_) | Self::Floating(_) => self.wall_clock().and_utc(),
        }
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Floating(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            Self::Utc(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%SZ")),
            Self::Zoned(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%:z")),
        }
    }
}
