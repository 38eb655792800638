//! Conversion between `YYYY-MM-DD[ HH:MM:SS]` text and epoch seconds, UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::common::time_point::Timestamp;
use crate::{Result, TicklineErr};

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const MIDNIGHT_SUFFIX: &str = " 00:00:00";

/// Parse a full datetime or a bare date (implicitly midnight).
///
/// Only text that formats back to itself is accepted: unpadded fields, stray
/// whitespace, leap seconds and impossible dates such as `1970-02-31` all fail.
pub fn parse_to_epoch(text: &str) -> Result<Timestamp> {
    match parse_lenient(text) {
        Some(epoch) if round_trips(text, epoch) => Ok(epoch),
        _ => Err(TicklineErr::InvalidDate(text.to_string())),
    }
}

/// Always the full `YYYY-MM-DD HH:MM:SS` form.
///
/// Epochs outside chrono's representable range (roughly +-262000 years) are
/// rendered as the bare integer instead.
pub fn format_from_epoch(epoch: Timestamp) -> String {
    match DateTime::from_timestamp(epoch, 0) {
        Some(datetime) => datetime.format(DATETIME_FORMAT).to_string(),
        None => epoch.to_string(),
    }
}

pub fn is_valid_date(text: &str) -> bool {
    parse_to_epoch(text).is_ok()
}

fn parse_lenient(text: &str) -> Option<Timestamp> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(text, DATETIME_FORMAT) {
        return Some(datetime.and_utc().timestamp());
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc().timestamp())
}

// `text` must be the formatted epoch, or its date part when the epoch is a midnight.
fn round_trips(text: &str, epoch: Timestamp) -> bool {
    let formatted = format_from_epoch(epoch);
    formatted == text || formatted.strip_suffix(MIDNIGHT_SUFFIX) == Some(text)
}
