//! Recurrence-rule parser (RFC 5545 §3.3.10).
//!
//! Consumes pre-tokenized `NAME=VALUE` segments (the external content-line
//! tokenizer's output) and produces a [`RecurrenceRule`], collecting every
//! error it finds instead of stopping at the first.

mod error;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseErrors, ParseResult};
pub use values::parse_instant;

use chrono::Weekday;

use crate::recur::core::rule::PartKind;
use crate::recur::core::{
    ByRule, ByRuleKind, Count, Frequency, Interval, RecurrenceRule, Until,
};

/// Parses a recurrence rule from pre-tokenized `NAME=VALUE` segments.
///
/// Segments are processed in order; an unrecognized name is a hard error
/// (unlike generic calendar properties, which ignore unknown content), as
/// is a rule part that occurs twice.
///
/// ## Errors
/// Returns every problem found across all segments.
pub fn from_segments<'a, I>(segments: I) -> Result<RecurrenceRule, ParseErrors>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut collector = Collector::default();

    for (index, (name, value)) in segments.into_iter().enumerate() {
        collector.segment(index, name, value);
    }

    collector.finish()
}

/// Parses a recurrence rule from its `;`-joined text form.
///
/// This convenience entry point performs the `;`/`=` split that normally
/// belongs to the content-line tokenizer, then delegates to
/// [`from_segments`].
///
/// ## Errors
/// Returns every problem found, including malformed segments.
#[tracing::instrument(skip(value), fields(value_len = value.len()))]
pub fn from_text(value: &str) -> Result<RecurrenceRule, ParseErrors> {
    tracing::trace!("Parsing recurrence rule text");

    let mut collector = Collector::default();

    for (index, segment) in value.split(';').enumerate() {
        if let Some((name, value)) = segment.split_once('=') {
            collector.segment(index, name, value);
        } else {
            collector.errors.push(ParseError::new(
                ParseErrorKind::MalformedSegment,
                index,
                format!("expected NAME=VALUE, got: {segment}"),
            ));
        }
    }

    collector.finish()
}

impl std::str::FromStr for RecurrenceRule {
    type Err = ParseErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_text(s)
    }
}

/// Accumulates rule parts and errors across all segments.
///
/// The rule may transiently lack FREQ while segments are still being
/// consumed; the post-conditions (FREQ present, COUNT/UNTIL exclusive) are
/// checked in [`Collector::finish`].
#[derive(Default)]
struct Collector {
    frequency: Option<Frequency>,
    frequency_seen: bool,
    interval: Option<Interval>,
    count: Option<Count>,
    until: Option<Until>,
    week_start: Option<Weekday>,
    by_rules: Vec<ByRule>,
    order: Vec<PartKind>,
    segments_seen: usize,
    errors: Vec<ParseError>,
}

impl Collector {
    fn segment(&mut self, index: usize, name: &str, value: &str) {
        self.segments_seen = index + 1;
        let upper = name.to_ascii_uppercase();
        match upper.as_str() {
            "FREQ" => {
                if self.frequency_seen {
                    self.errors.push(ParseError::duplicate_part(index, &upper));
                    return;
                }
                self.frequency_seen = true;
                match values::parse_frequency(value, index) {
                    Ok(freq) => self.frequency = Some(freq),
                    Err(e) => self.errors.push(e),
                }
            }
            "INTERVAL" => {
                if self.interval.is_some() {
                    self.errors.push(ParseError::duplicate_part(index, &upper));
                    return;
                }
                match values::parse_interval(value, index) {
                    Ok(interval) => {
                        self.interval = Some(interval);
                        self.order.push(PartKind::Interval);
                    }
                    Err(e) => self.errors.push(e),
                }
            }
            "COUNT" => {
                if self.count.is_some() {
                    self.errors.push(ParseError::duplicate_part(index, &upper));
                    return;
                }
                match values::parse_count(value, index) {
                    Ok(count) => {
                        self.count = Some(count);
                        self.order.push(PartKind::Count);
                    }
                    Err(e) => self.errors.push(e),
                }
            }
            "UNTIL" => {
                if self.until.is_some() {
                    self.errors.push(ParseError::duplicate_part(index, &upper));
                    return;
                }
                match values::parse_until(value, index) {
                    Ok(until) => {
                        self.until = Some(until);
                        self.order.push(PartKind::Until);
                    }
                    Err(e) => self.errors.push(e),
                }
            }
            "WKST" => {
                if self.week_start.is_some() {
                    self.errors.push(ParseError::duplicate_part(index, &upper));
                    return;
                }
                match values::parse_wkst(value, index) {
                    Ok(day) => {
                        self.week_start = Some(day);
                        self.order.push(PartKind::WeekStart);
                    }
                    Err(e) => self.errors.push(e),
                }
            }
            "BYSECOND" => self.by_rule(index, ByRuleKind::Second, value),
            "BYMINUTE" => self.by_rule(index, ByRuleKind::Minute, value),
            "BYHOUR" => self.by_rule(index, ByRuleKind::Hour, value),
            "BYDAY" => self.by_rule(index, ByRuleKind::Day, value),
            "BYMONTHDAY" => self.by_rule(index, ByRuleKind::MonthDay, value),
            "BYYEARDAY" => self.by_rule(index, ByRuleKind::YearDay, value),
            "BYWEEKNO" => self.by_rule(index, ByRuleKind::WeekNo, value),
            "BYMONTH" => self.by_rule(index, ByRuleKind::Month, value),
            "BYSETPOS" => self.by_rule(index, ByRuleKind::SetPos, value),
            _ => self.errors.push(ParseError::unknown_part(index, name)),
        }
    }

    fn by_rule(&mut self, index: usize, kind: ByRuleKind, value: &str) {
        if self.by_rules.iter().any(|r| r.kind() == kind) {
            self.errors
                .push(ParseError::duplicate_part(index, kind.name()));
            return;
        }

        let parsed = match kind {
            ByRuleKind::Month => values::parse_month_list(value, index).map(ByRule::Month),
            ByRuleKind::WeekNo => values::parse_week_no_list(value, index).map(ByRule::WeekNo),
            ByRuleKind::YearDay => values::parse_year_day_list(value, index).map(ByRule::YearDay),
            ByRuleKind::MonthDay => {
                values::parse_month_day_list(value, index).map(ByRule::MonthDay)
            }
            ByRuleKind::Day => values::parse_day_list(value, index).map(ByRule::Day),
            ByRuleKind::Hour => values::parse_hour_list(value, index).map(ByRule::Hour),
            ByRuleKind::Minute => values::parse_minute_list(value, index).map(ByRule::Minute),
            ByRuleKind::Second => values::parse_second_list(value, index).map(ByRule::Second),
            ByRuleKind::SetPos => values::parse_set_pos_list(value, index).map(ByRule::SetPos),
        };

        match parsed {
            Ok(rule) => {
                self.by_rules.push(rule);
                self.order.push(PartKind::By(kind));
            }
            Err(e) => self.errors.push(e),
        }
    }

    fn finish(mut self) -> Result<RecurrenceRule, ParseErrors> {
        let end = self.segments_seen;

        if !self.frequency_seen {
            self.errors.push(ParseError::new(
                ParseErrorKind::MissingFrequency,
                end,
                "FREQ is required",
            ));
        }
        if self.count.is_some() && self.until.is_some() {
            self.errors.push(ParseError::new(
                ParseErrorKind::CountUntilConflict,
                end,
                "COUNT and UNTIL cannot both be present",
            ));
        }

        if !self.errors.is_empty() {
            tracing::debug!(count = self.errors.len(), "Recurrence rule rejected");
            return Err(ParseErrors::new(self.errors));
        }

        // Checked above; unreachable without a frequency.
        let Some(frequency) = self.frequency else {
            return Err(ParseErrors::new(vec![ParseError::new(
                ParseErrorKind::MissingFrequency,
                end,
                "FREQ is required",
            )]));
        };

        Ok(RecurrenceRule::from_parts(
            frequency,
            self.interval,
            self.count,
            self.until,
            self.week_start,
            self.by_rules,
            self.order,
        ))
    }
}
