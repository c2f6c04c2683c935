//! Command-line occurrence expander.
//!
//! Parses a recurrence rule and an anchor instant, then prints the
//! occurrences the rule describes:
//!
//! ```text
//! cadence-app 'FREQ=WEEKLY;BYDAY=MO,WE,FR' 19970901T090000 [LIMIT] [TZID]
//! ```
//!
//! Unbounded rules are truncated at LIMIT (or the configured default); the
//! anchor may be a date, a floating or UTC date-time, or a local date-time
//! paired with an IANA TZID.

use anyhow::{Context, bail};
use cadence_core::config::load_config;
use cadence_rfc::{RecurrenceRule, parse_instant};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let settings = load_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.clone())),
        )
        .init();

    tracing::debug!(?settings, "Configuration loaded");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (rule_text, anchor_text) = match (args.first(), args.get(1)) {
        (Some(rule), Some(anchor)) => (rule.as_str(), anchor.as_str()),
        _ => bail!("usage: cadence-app <RRULE> <DTSTART> [LIMIT] [TZID]"),
    };
    let limit: usize = match args.get(2) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid limit: {raw}"))?,
        None => usize::try_from(settings.expansion.default_limit).unwrap_or(usize::MAX),
    };
    let tzid = args.get(3).map(String::as_str);

    let rule: RecurrenceRule = rule_text
        .parse()
        .with_context(|| format!("invalid recurrence rule: {rule_text}"))?;
    let anchor = parse_instant(anchor_text, tzid, 0)
        .with_context(|| format!("invalid anchor: {anchor_text}"))?;

    tracing::info!(rule = %rule, %anchor, limit, "Expanding occurrences");

    for item in rule.occurrences(anchor)?.take(limit) {
        let occurrence = item.context("stream aborted")?;
        println!("{occurrence}");
    }

    Ok(())
}
