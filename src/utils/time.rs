//! Timestamp utilities: parsing submissions and formatting due dates.

use crate::errors::{AppError, AppResult};
use crate::utils::date::weekday_name;
use chrono::{Datelike, NaiveDateTime};
use std::fmt::Write;

/// Accepted submission formats, tried in order.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}

/// Format `ts` with a strftime pattern, optionally prefixed by the weekday.
///
/// A malformed pattern is reported as a configuration error.
pub fn format_timestamp(ts: NaiveDateTime, pattern: &str, show_weekday: bool) -> AppResult<String> {
    let mut out = String::new();
    if show_weekday {
        out.push_str(weekday_name(ts.weekday()));
        out.push(' ');
    }
    write!(out, "{}", ts.format(pattern))
        .map_err(|_| AppError::Config(format!("invalid output format '{pattern}'")))?;
    Ok(out)
}
