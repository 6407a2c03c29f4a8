//! Human-relative "last updated" labels.
//!
//! DESIGN
//! ======
//! Formatting is total: anything that fails to parse renders as
//! [`UNKNOWN_DATE`] instead of surfacing an error. The current time is passed
//! in so labels are deterministic under test.
//!
//! The producer writes wall-clock time without an offset. Such values are
//! read in the offset of `now`, so callers pass [`local_now`] in production.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

/// Label shown when a timestamp is missing or unparsable.
pub const UNKNOWN_DATE: &str = "unknown date";

/// Parse the timestamp formats the data producer is known to write.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` with or
/// without fractional seconds, and a bare `YYYY-MM-DD`. Values without an
/// offset are read in `offset`.
#[must_use]
pub fn parse_timestamp(raw: &str, offset: UtcOffset) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(parsed);
    }
    if let Ok(parsed) = PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day] [hour]:[minute]:[second]")) {
        return Some(parsed.assume_offset(offset));
    }
    if let Ok(parsed) = PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]")) {
        return Some(parsed.assume_offset(offset));
    }
    if let Ok(parsed) =
        PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"))
    {
        return Some(parsed.assume_offset(offset));
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|date| date.midnight().assume_offset(offset))
}

/// Render a timestamp relative to `now`.
///
/// Whole days elapsed (absolute, rounded down): 0 is `today`, 1 is
/// `yesterday`, 2 to 6 are `N days ago`, and anything older is `DD/MM/YYYY`.
#[must_use]
pub fn format_date(raw: &str, now: OffsetDateTime) -> String {
    let Some(then) = parse_timestamp(raw, now.offset()) else {
        return UNKNOWN_DATE.to_owned();
    };
    let days = (now - then).whole_days().unsigned_abs();
    match days {
        0 => "today".to_owned(),
        1 => "yesterday".to_owned(),
        2..=6 => format!("{days} days ago"),
        _ => short_date(then.to_offset(now.offset())),
    }
}

/// Current time in the local offset, or UTC when the offset can't be read.
#[must_use]
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Same as [`format_date`], treating a missing timestamp as unknown.
#[must_use]
pub fn format_last_updated(raw: Option<&str>, now: OffsetDateTime) -> String {
    raw.map_or_else(|| UNKNOWN_DATE.to_owned(), |raw| format_date(raw, now))
}

fn short_date(at: OffsetDateTime) -> String {
    format!("{:02}/{:02}/{:04}", at.day(), u8::from(at.month()), at.year())
}
