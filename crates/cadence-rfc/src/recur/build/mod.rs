//! Recurrence-rule serialization (RFC 5545 §3.3.10).
//!
//! Produces the canonical text form: `NAME=VALUE` segments joined by `;`,
//! FREQ first, the remaining parts in the order they were set, each
//! selector list joined by `,`. Parsing the output yields an equal rule.

use std::fmt;

use serde::de::Error as _;

use crate::recur::core::rule::PartKind;
use crate::recur::core::{RecurrenceRule, weekday_code};

/// Serializes a rule to its canonical text form.
#[must_use]
pub fn serialize(rule: &RecurrenceRule) -> String {
    let mut out = format!("FREQ={}", rule.frequency());

    for part in rule.part_order() {
        match part {
            PartKind::Interval => {
                if let Some(interval) = rule.explicit_interval() {
                    out.push_str(&format!(";INTERVAL={interval}"));
                }
            }
            PartKind::Count => {
                if let Some(count) = rule.count() {
                    out.push_str(&format!(";COUNT={count}"));
                }
            }
            PartKind::Until => {
                if let Some(until) = rule.until() {
                    out.push_str(&format!(";UNTIL={until}"));
                }
            }
            PartKind::WeekStart => {
                if let Some(day) = rule.explicit_week_start() {
                    out.push_str(&format!(";WKST={}", weekday_code(day)));
                }
            }
            PartKind::By(kind) => {
                if let Some(by_rule) = rule.by_rule(*kind) {
                    out.push_str(&format!(";{}={by_rule}", kind.name()));
                }
            }
        }
    }

    out
}

impl RecurrenceRule {
    /// The canonical `NAME=VALUE;...` text form of this rule.
    #[must_use]
    pub fn to_text(&self) -> String {
        serialize(self)
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}

impl serde::Serialize for RecurrenceRule {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_text())
    }
}

impl<'de> serde::Deserialize<'de> for RecurrenceRule {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}
