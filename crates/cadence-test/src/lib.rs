//! Shared harness for recurrence integration tests.

use cadence_rfc::{RecurrenceRule, parse_instant};

/// One table-driven expansion case.
pub struct OccurrenceCase {
    pub name: &'static str,
    pub rule: &'static str,
    /// Anchor instant text: date, floating/UTC date-time.
    pub anchor: &'static str,
    /// IANA zone for zoned anchors.
    pub tzid: Option<&'static str>,
    /// Exact expected occurrence strings, if the case pins them all.
    pub expected: Option<&'static [&'static str]>,
    /// Expected occurrence count, for cases too long to list.
    pub expected_len: Option<usize>,
    /// Upper bound on pulls, so unbounded rules stay bounded.
    pub limit: usize,
}

/// Expands a case and checks it against its expectations.
///
/// ## Panics
/// Panics (failing the test) on parse errors, stream errors, or a
/// mismatch against the expected occurrences.
pub fn assert_case(case: &OccurrenceCase) {
    let rule: RecurrenceRule = case
        .rule
        .parse()
        .unwrap_or_else(|err| panic!("{}: failed to parse rule: {err}", case.name));
    let anchor = parse_instant(case.anchor, case.tzid, 0)
        .unwrap_or_else(|err| panic!("{}: failed to parse anchor: {err}", case.name));

    let occurrences: Vec<String> = rule
        .occurrences(anchor)
        .unwrap_or_else(|err| panic!("{}: stream rejected: {err}", case.name))
        .take(case.limit)
        .map(|item| {
            item.unwrap_or_else(|err| panic!("{}: stream aborted: {err}", case.name))
                .to_string()
        })
        .collect();

    if let Some(expected) = case.expected {
        assert_eq!(
            occurrences, expected,
            "case {} did not match",
            case.name
        );
    }

    if let Some(expected_len) = case.expected_len {
        assert_eq!(
            occurrences.len(),
            expected_len,
            "case {} expected {} occurrences",
            case.name,
            expected_len
        );
    }
}
