//! Typed rule-part values, each validating its own domain (RFC 5545 §3.3.10).
//!
//! The recurrence grammar is full of small bounded integers; every one gets
//! a newtype so an out-of-range selector cannot exist past parsing.

use std::fmt;
use std::num::NonZeroU32;

use thiserror::Error;

/// A rule-part value outside its RFC 5545 domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PartValueError {
    #[error("month number out of range (1..=12): {0}")]
    Month(i64),

    #[error("week number out of range (nonzero, magnitude <= 53): {0}")]
    WeekNo(i64),

    #[error("year day out of range (nonzero, magnitude <= 366): {0}")]
    YearDay(i64),

    #[error("month day out of range (nonzero, magnitude <= 31): {0}")]
    MonthDay(i64),

    #[error("weekday ordinal out of range (nonzero, magnitude <= 53): {0}")]
    DayOrdinal(i64),

    #[error("hour out of range (0..=23): {0}")]
    Hour(i64),

    #[error("minute out of range (0..=59): {0}")]
    Minute(i64),

    #[error("second out of range (0..=60): {0}")]
    Second(i64),

    #[error("set position must be nonzero with magnitude <= 366: {0}")]
    SetPos(i64),

    #[error("interval must be a positive integer: {0}")]
    Interval(i64),

    #[error("count must be a positive integer: {0}")]
    Count(i64),
}

/// INTERVAL rule part: periods between occurrences, default 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval(NonZeroU32);

impl Interval {
    /// ## Errors
    /// Returns an error if `value` is zero.
    pub fn new(value: u32) -> Result<Self, PartValueError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(PartValueError::Interval(i64::from(value)))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self(NonZeroU32::MIN)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// COUNT rule part: total number of occurrences, the anchor counting as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Count(NonZeroU32);

impl Count {
    /// ## Errors
    /// Returns an error if `value` is zero.
    pub fn new(value: u32) -> Result<Self, PartValueError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(PartValueError::Count(i64::from(value)))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// BYMONTH selector: a calendar month, 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthNum(u8);

impl MonthNum {
    /// ## Errors
    /// Returns an error if `value` is not in 1..=12.
    pub fn new(value: u8) -> Result<Self, PartValueError> {
        if (1..=12).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PartValueError::Month(i64::from(value)))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// BYWEEKNO selector: a signed week-of-year number, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekNum(i8);

impl WeekNum {
    /// ## Errors
    /// Returns an error if `value` is zero or its magnitude exceeds 53.
    pub fn new(value: i8) -> Result<Self, PartValueError> {
        if value != 0 && value.abs() <= 53 {
            Ok(Self(value))
        } else {
            Err(PartValueError::WeekNo(i64::from(value)))
        }
    }

    #[must_use]
    pub const fn get(self) -> i8 {
        self.0
    }
}

/// BYYEARDAY selector: a signed day-of-year, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearDayNum(i16);

impl YearDayNum {
    /// ## Errors
    /// Returns an error if `value` is zero or its magnitude exceeds 366.
    pub fn new(value: i16) -> Result<Self, PartValueError> {
        if value != 0 && value.abs() <= 366 {
            Ok(Self(value))
        } else {
            Err(PartValueError::YearDay(i64::from(value)))
        }
    }

    #[must_use]
    pub const fn get(self) -> i16 {
        self.0
    }
}

/// BYMONTHDAY selector: a signed day-of-month, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDayNum(i8);

impl MonthDayNum {
    /// ## Errors
    /// Returns an error if `value` is zero or its magnitude exceeds 31.
    pub fn new(value: i8) -> Result<Self, PartValueError> {
        if value != 0 && value.abs() <= 31 {
            Ok(Self(value))
        } else {
            Err(PartValueError::MonthDay(i64::from(value)))
        }
    }

    #[must_use]
    pub const fn get(self) -> i8 {
        self.0
    }
}

/// BYHOUR selector: 0..=23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourNum(u8);

impl HourNum {
    /// ## Errors
    /// Returns an error if `value` exceeds 23.
    pub fn new(value: u8) -> Result<Self, PartValueError> {
        if value <= 23 {
            Ok(Self(value))
        } else {
            Err(PartValueError::Hour(i64::from(value)))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// BYMINUTE selector: 0..=59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinuteNum(u8);

impl MinuteNum {
    /// ## Errors
    /// Returns an error if `value` exceeds 59.
    pub fn new(value: u8) -> Result<Self, PartValueError> {
        if value <= 59 {
            Ok(Self(value))
        } else {
            Err(PartValueError::Minute(i64::from(value)))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// BYSECOND selector: 0..=60 (60 permitted for leap seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SecondNum(u8);

impl SecondNum {
    /// ## Errors
    /// Returns an error if `value` exceeds 60.
    pub fn new(value: u8) -> Result<Self, PartValueError> {
        if value <= 60 {
            Ok(Self(value))
        } else {
            Err(PartValueError::Second(i64::from(value)))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// BYSETPOS selector: a signed 1-based position into the per-period
/// candidate set, never zero, negative counting from the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SetPos(i16);

impl SetPos {
    /// ## Errors
    /// Returns an error if `value` is zero or its magnitude exceeds 366.
    pub fn new(value: i16) -> Result<Self, PartValueError> {
        if value != 0 && value.abs() <= 366 {
            Ok(Self(value))
        } else {
            Err(PartValueError::SetPos(i64::from(value)))
        }
    }

    #[must_use]
    pub const fn get(self) -> i16 {
        self.0
    }
}

macro_rules! display_as_inner {
    ($($ty:ty),+) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    )+};
}

display_as_inner!(MonthNum, WeekNum, YearDayNum, MonthDayNum, HourNum, MinuteNum, SecondNum, SetPos);
