//! Catalog time-string parsing.
//!
//! Turns loosely formatted strings such as `"10:00-11:20TTh"` or
//! `"02:30-03:20MWF05/05-07/30"` into a start time, an end time, and the
//! meeting days.
//!
//! # Hour Heuristic
//! The catalog omits AM/PM. Classes at this institution run between 08:30
//! and 21:50, so:
//! 1. a start or end hour below 8 is read as PM (+12);
//! 2. if the end hour is then still below the start hour, it gets +12 too
//!    (`"11:30-6:20"` style ranges that cross noon into the evening).
//!
//! This is an institution-specific rule, not general time parsing.
//! Results whose hour still exceeds 23 are treated as unparseable.
//!
//! # Day Letters
//! The alphabetic run right after the time range (leading whitespace
//! skipped, stopping at the first non-letter such as an embedded date)
//! is scanned left to right: `M`, `T`, `W`, `Th`, `F`. Other letters are
//! ignored and duplicates are kept.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::models::{Time, Weekday};

static TIME_RANGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2}):(\d{2})-(\d{1,2}):(\d{2})").expect("time-range pattern is valid")
});

/// Structured result of parsing a catalog time string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMeeting {
    /// Meeting start.
    pub start: Time,
    /// Meeting end.
    pub end: Time,
    /// Meeting days in scan order. May be empty.
    pub days: Vec<Weekday>,
}

/// Parses a raw time-and-days string.
///
/// Returns `None` for blank input, input without an `H:MM-H:MM` range,
/// or ranges that cannot be normalized into valid times. Callers treat
/// `None` as a TBA section.
///
/// # Example
/// ```
/// use timeplanner::parser::parse_time_date;
/// use timeplanner::models::Weekday;
///
/// let m = parse_time_date("02:30-03:20MWF").unwrap();
/// assert_eq!(m.start.hour(), 14);
/// assert_eq!(m.end.hour(), 15);
/// assert_eq!(m.days, vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]);
/// ```
pub fn parse_time_date(raw: &str) -> Option<ParsedMeeting> {
    if raw.trim().is_empty() {
        return None;
    }

    let Some(caps) = TIME_RANGE_REGEX.captures(raw) else {
        trace!(input = raw, "no time range found");
        return None;
    };

    let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
    let (mut start_h, start_m, mut end_h, end_m) = (num(1)?, num(2)?, num(3)?, num(4)?);

    if start_h < 8 {
        start_h += 12;
    }
    if end_h < 8 {
        end_h += 12;
    }
    if end_h < start_h {
        end_h += 12;
    }

    let (start, end) = match (Time::new(start_h, start_m), Time::new(end_h, end_m)) {
        (Ok(s), Ok(e)) => (s, e),
        _ => {
            trace!(input = raw, start_h, end_h, "normalized time out of range");
            return None;
        }
    };

    let matched_end = caps.get(0)?.end();
    let days = parse_day_letters(&raw[matched_end..]);

    Some(ParsedMeeting { start, end, days })
}

/// Scans the leading letter run of `rest` for day codes.
fn parse_day_letters(rest: &str) -> Vec<Weekday> {
    let letters: Vec<char> = rest
        .trim_start()
        .chars()
        .take_while(|c| c.is_alphabetic())
        .collect();

    let mut days = Vec::new();
    let mut i = 0;
    while i < letters.len() {
        match letters[i] {
            'M' => days.push(Weekday::Mon),
            'W' => days.push(Weekday::Wed),
            'F' => days.push(Weekday::Fri),
            'T' if letters.get(i + 1) == Some(&'h') => {
                days.push(Weekday::Thu);
                i += 1;
            }
            'T' => days.push(Weekday::Tue),
            _ => {}
        }
        i += 1;
    }
    days
}
