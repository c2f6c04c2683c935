//! Value parsers for the individual rule parts (RFC 5545 §3.3.10).
//!
//! Error sources are intentionally discarded during parsing (`map_err_ignore`)
//! because the offending token itself is the useful context here.
#![expect(
    clippy::map_err_ignore,
    reason = "Value parsers report the offending token, not the integer-parse cause"
)]

use chrono::{NaiveDate, TimeZone, Weekday};

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::recur::core::{
    Count, HourNum, Instant, Interval, MinuteNum, MonthDayNum, MonthNum, SecondNum, SetPos, Until,
    WeekNum, WeekdayNum, YearDayNum, parse_weekday,
};

/// Parses the FREQ value (case-insensitive).
///
/// ## Errors
/// Returns an error if the value is not one of the seven frequency names.
pub fn parse_frequency(value: &str, segment: usize) -> ParseResult<crate::recur::core::Frequency> {
    crate::recur::core::Frequency::parse(value).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::InvalidFrequency,
            segment,
            format!("unknown frequency: {value}"),
        )
    })
}

/// Parses the INTERVAL value.
///
/// ## Errors
/// Returns an error if the value is not a positive integer.
pub fn parse_interval(value: &str, segment: usize) -> ParseResult<Interval> {
    let n: u32 = value.parse().map_err(|_| {
        ParseError::new(
            ParseErrorKind::InvalidInteger,
            segment,
            format!("invalid INTERVAL value: {value}"),
        )
    })?;
    Interval::new(n)
        .map_err(|e| ParseError::new(ParseErrorKind::InvalidInteger, segment, e.to_string()))
}

/// Parses the COUNT value.
///
/// ## Errors
/// Returns an error if the value is not a positive integer.
pub fn parse_count(value: &str, segment: usize) -> ParseResult<Count> {
    let n: u32 = value.parse().map_err(|_| {
        ParseError::new(
            ParseErrorKind::InvalidInteger,
            segment,
            format!("invalid COUNT value: {value}"),
        )
    })?;
    Count::new(n)
        .map_err(|e| ParseError::new(ParseErrorKind::InvalidInteger, segment, e.to_string()))
}

/// Parses the WKST value (a two-letter weekday code).
///
/// ## Errors
/// Returns an error if the value is not a weekday code.
pub fn parse_wkst(value: &str, segment: usize) -> ParseResult<Weekday> {
    parse_weekday(value).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::InvalidWeekday,
            segment,
            format!("unknown weekday: {value}"),
        )
    })
}

/// Parses the UNTIL value: a bare date or a UTC date-time.
///
/// A floating local date-time (a `T` form without the `Z` suffix) is a hard
/// error: the bound must be comparable without knowing the anchor.
///
/// ## Errors
/// Returns an error if the value is malformed or floating.
pub fn parse_until(value: &str, segment: usize) -> ParseResult<Until> {
    let Some(t_pos) = value.find('T') else {
        return Ok(Until::Date(parse_date(value, segment)?));
    };

    let Some(stripped) = value.strip_suffix('Z') else {
        return Err(ParseError::new(
            ParseErrorKind::FloatingUntil,
            segment,
            format!("UNTIL must be a date or UTC date-time, got floating: {value}"),
        ));
    };

    let date = parse_date(&stripped[..t_pos], segment)?;
    let time_str = &stripped[t_pos + 1..];
    if time_str.len() != 6 || !time_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_until(segment, value));
    }

    let hour: u32 = time_str[0..2].parse().map_err(|_| invalid_until(segment, value))?;
    let minute: u32 = time_str[2..4].parse().map_err(|_| invalid_until(segment, value))?;
    let second: u32 = time_str[4..6].parse().map_err(|_| invalid_until(segment, value))?;

    let naive = date
        .and_hms_opt(hour, minute, second)
        .ok_or_else(|| invalid_until(segment, value))?;
    Ok(Until::Utc(naive.and_utc()))
}

fn invalid_until(segment: usize, value: &str) -> ParseError {
    ParseError::new(
        ParseErrorKind::InvalidUntil,
        segment,
        format!("invalid UNTIL value: {value}"),
    )
}

/// Parses an 8-digit `YYYYMMDD` date.
///
/// ## Errors
/// Returns an error if the string is not a valid calendar date.
pub fn parse_date(value: &str, segment: usize) -> ParseResult<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_date(segment, value));
    }
    let year: i32 = value[0..4].parse().map_err(|_| invalid_date(segment, value))?;
    let month: u32 = value[4..6].parse().map_err(|_| invalid_date(segment, value))?;
    let day: u32 = value[6..8].parse().map_err(|_| invalid_date(segment, value))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid_date(segment, value))
}

fn invalid_date(segment: usize, value: &str) -> ParseError {
    ParseError::new(
        ParseErrorKind::InvalidDate,
        segment,
        format!("invalid date value: {value}"),
    )
}

/// Parses an anchor instant: `YYYYMMDD`, `YYYYMMDDTHHMMSS`,
/// `YYYYMMDDTHHMMSSZ`, or a local date-time paired with an IANA TZID.
///
/// This mirrors DTSTART value parsing: the TZID comes from the property
/// parameter level, not from the value itself.
///
/// ## Errors
/// Returns an error for malformed values, unknown zone names, and local
/// times the zone skips.
pub fn parse_instant(value: &str, tzid: Option<&str>, segment: usize) -> ParseResult<Instant> {
    let Some(t_pos) = value.find('T') else {
        return Ok(Instant::Date(parse_date(value, segment)?));
    };

    let (body, is_utc) = match value.strip_suffix('Z') {
        Some(stripped) => (stripped, true),
        None => (value, false),
    };

    let date = parse_date(&body[..t_pos], segment)?;
    let time_str = &body[t_pos + 1..];
    let invalid = || {
        ParseError::new(
            ParseErrorKind::InvalidInstant,
            segment,
            format!("invalid date-time value: {value}"),
        )
    };
    if time_str.len() != 6 || !time_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let hour: u32 = time_str[0..2].parse().map_err(|_| invalid())?;
    let minute: u32 = time_str[2..4].parse().map_err(|_| invalid())?;
    let second: u32 = time_str[4..6].parse().map_err(|_| invalid())?;
    let naive = date.and_hms_opt(hour, minute, second).ok_or_else(invalid)?;

    if is_utc {
        return Ok(Instant::Utc(naive.and_utc()));
    }

    let Some(tzid) = tzid else {
        return Ok(Instant::Floating(naive));
    };

    let tz: chrono_tz::Tz = tzid.parse().map_err(|_| {
        ParseError::new(
            ParseErrorKind::UnknownTimeZone,
            segment,
            format!("unknown timezone: {tzid}"),
        )
    })?;
    match tz.from_local_datetime(&naive) {
        chrono::LocalResult::None => Err(ParseError::new(
            ParseErrorKind::NonExistentLocalTime,
            segment,
            format!("{naive} does not exist in {tzid}"),
        )),
        // DST fold: RFC 5545 §3.3.5 picks the first occurrence.
        chrono::LocalResult::Single(dt) | chrono::LocalResult::Ambiguous(dt, _) => {
            Ok(Instant::Zoned(dt))
        }
    }
}

/// Splits a comma-separated selector list and parses each token.
fn parse_list<T>(
    value: &str,
    segment: usize,
    name: &str,
    parse_one: impl Fn(&str) -> ParseResult<T>,
) -> ParseResult<Vec<T>> {
    if value.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::EmptyList,
            segment,
            format!("{name} requires at least one selector"),
        ));
    }
    value.split(',').map(|tok| parse_one(tok.trim())).collect()
}

fn int_selector<N, T>(
    token: &str,
    segment: usize,
    name: &str,
    construct: impl Fn(N) -> Result<T, crate::recur::core::PartValueError>,
) -> ParseResult<T>
where
    N: std::str::FromStr,
{
    let n: N = token
        .parse()
        .map_err(|_| ParseError::invalid_selector(segment, name, token))?;
    construct(n).map_err(|e| ParseError::new(ParseErrorKind::InvalidSelector, segment, e.to_string()))
}

/// Parses a BYMONTH selector list.
///
/// ## Errors
/// Returns an error naming any token outside 1..=12.
pub fn parse_month_list(value: &str, segment: usize) -> ParseResult<Vec<MonthNum>> {
    parse_list(value, segment, "BYMONTH", |tok| {
        int_selector(tok, segment, "BYMONTH", MonthNum::new)
    })
}

/// Parses a BYWEEKNO selector list.
///
/// ## Errors
/// Returns an error naming any token outside ±1..=53.
pub fn parse_week_no_list(value: &str, segment: usize) -> ParseResult<Vec<WeekNum>> {
    parse_list(value, segment, "BYWEEKNO", |tok| {
        int_selector(tok, segment, "BYWEEKNO", WeekNum::new)
    })
}

/// Parses a BYYEARDAY selector list.
///
/// ## Errors
/// Returns an error naming any token outside ±1..=366.
pub fn parse_year_day_list(value: &str, segment: usize) -> ParseResult<Vec<YearDayNum>> {
    parse_list(value, segment, "BYYEARDAY", |tok| {
        int_selector(tok, segment, "BYYEARDAY", YearDayNum::new)
    })
}

/// Parses a BYMONTHDAY selector list.
///
/// ## Errors
/// Returns an error naming any token outside ±1..=31.
pub fn parse_month_day_list(value: &str, segment: usize) -> ParseResult<Vec<MonthDayNum>> {
    parse_list(value, segment, "BYMONTHDAY", |tok| {
        int_selector(tok, segment, "BYMONTHDAY", MonthDayNum::new)
    })
}

/// Parses a BYHOUR selector list.
///
/// ## Errors
/// Returns an error naming any token outside 0..=23.
pub fn parse_hour_list(value: &str, segment: usize) -> ParseResult<Vec<HourNum>> {
    parse_list(value, segment, "BYHOUR", |tok| {
        int_selector(tok, segment, "BYHOUR", HourNum::new)
    })
}

/// Parses a BYMINUTE selector list.
///
/// ## Errors
/// Returns an error naming any token outside 0..=59.
pub fn parse_minute_list(value: &str, segment: usize) -> ParseResult<Vec<MinuteNum>> {
    parse_list(value, segment, "BYMINUTE", |tok| {
        int_selector(tok, segment, "BYMINUTE", MinuteNum::new)
    })
}

/// Parses a BYSECOND selector list.
///
/// ## Errors
/// Returns an error naming any token outside 0..=60.
pub fn parse_second_list(value: &str, segment: usize) -> ParseResult<Vec<SecondNum>> {
    parse_list(value, segment, "BYSECOND", |tok| {
        int_selector(tok, segment, "BYSECOND", SecondNum::new)
    })
}

/// Parses a BYSETPOS selector list.
///
/// ## Errors
/// Returns an error naming any zero or out-of-range token.
pub fn parse_set_pos_list(value: &str, segment: usize) -> ParseResult<Vec<SetPos>> {
    parse_list(value, segment, "BYSETPOS", |tok| {
        int_selector(tok, segment, "BYSETPOS", SetPos::new)
    })
}

/// Parses a BYDAY selector list (weekdays with optional signed ordinals,
/// e.g. `MO`, `1MO`, `-1FR`).
///
/// ## Errors
/// Returns an error naming any malformed token.
pub fn parse_day_list(value: &str, segment: usize) -> ParseResult<Vec<WeekdayNum>> {
    parse_list(value, segment, "BYDAY", |tok| parse_weekday_num(tok, segment))
}

/// Parses a single weekday with optional ordinal.
fn parse_weekday_num(token: &str, segment: usize) -> ParseResult<WeekdayNum> {
    if token.len() < 2 || !token.is_ascii() {
        return Err(ParseError::invalid_selector(segment, "BYDAY", token));
    }

    let (ordinal_str, weekday_str) = token.split_at(token.len() - 2);
    let weekday = parse_weekday(weekday_str)
        .ok_or_else(|| ParseError::invalid_selector(segment, "BYDAY", token))?;

    if ordinal_str.is_empty() {
        return Ok(WeekdayNum::every(weekday));
    }

    let ordinal: i8 = ordinal_str
        .parse()
        .map_err(|_| ParseError::invalid_selector(segment, "BYDAY", token))?;
    WeekdayNum::nth(ordinal, weekday)
        .map_err(|e| ParseError::new(ParseErrorKind::InvalidSelector, segment, e.to_string()))
}
