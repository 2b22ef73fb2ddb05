//! Free-text event time parsing
//!
//! The UI historically accepted inputs like `Jan 21 2017 13:00 PST`, so the
//! parser recognizes that shape (with a small table of US zone
//! abbreviations) alongside RFC 3339 and explicit-offset variants.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

use crate::domain::error::{DomainError, DomainResult};

/// US zone abbreviations mapped to fixed UTC offsets, in seconds.
/// Abbreviations already encode daylight saving, so fixed offsets suffice.
const ZONE_OFFSETS: &[(&str, i32)] = &[
    ("UTC", 0),
    ("GMT", 0),
    ("EST", -5 * 3600),
    ("EDT", -4 * 3600),
    ("CST", -6 * 3600),
    ("CDT", -5 * 3600),
    ("MST", -7 * 3600),
    ("MDT", -6 * 3600),
    ("PST", -8 * 3600),
    ("PDT", -7 * 3600),
    ("AKST", -9 * 3600),
    ("AKDT", -8 * 3600),
    ("HST", -10 * 3600),
];

const NAIVE_FORMATS: &[&str] = &[
    "%b %d %Y %H:%M",
    "%b %d %Y %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse free-text date/time input into a UTC instant.
///
/// Accepted forms:
/// - RFC 3339 (`2017-01-21T13:00:00-08:00`)
/// - `Jan 21 2017 13:00 PST` (trailing zone abbreviation, see [`ZONE_OFFSETS`])
/// - `Jan 21 2017 13:00 -0800` (explicit offset)
/// - Offset-less variants of the above, interpreted as UTC
pub fn parse_event_time(input: &str) -> DomainResult<DateTime<Utc>> {
    let text = input.trim();
    if text.is_empty() {
        return Err(DomainError::InvalidDate(input.to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }

    // Trailing zone abbreviation: strip it and apply the fixed offset.
    if let Some((head, tail)) = text.rsplit_once(' ') {
        let abbrev = tail.to_ascii_uppercase();
        if let Some((_, secs)) = ZONE_OFFSETS.iter().find(|(z, _)| *z == abbrev) {
            let offset = FixedOffset::east_opt(*secs)
                .ok_or_else(|| DomainError::InvalidDate(input.to_string()))?;
            for fmt in NAIVE_FORMATS {
                if let Ok(naive) = NaiveDateTime::parse_from_str(head.trim(), fmt) {
                    if let Some(local) = offset.from_local_datetime(&naive).single() {
                        return Ok(local.with_timezone(&Utc));
                    }
                }
            }
            return Err(DomainError::InvalidDate(input.to_string()));
        }
        // Trailing numeric offset, e.g. `-0800`.
        for fmt in NAIVE_FORMATS {
            let with_offset = format!("{} %z", fmt);
            if let Ok(dt) = DateTime::parse_from_str(text, &with_offset) {
                return Ok(dt.with_timezone(&Utc));
            }
        }
    }

    // No zone given: interpret as UTC.
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    Err(DomainError::InvalidDate(input.to_string()))
}
