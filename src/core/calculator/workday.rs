//! Workday stepping. Only the date moves, the time of day is kept.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDateTime, TimeDelta};

/// `ts + delta`, or `OutOfRange` past the last representable date.
pub(crate) fn shift(ts: NaiveDateTime, delta: TimeDelta) -> AppResult<NaiveDateTime> {
    ts.checked_add_signed(delta).ok_or(AppError::OutOfRange(ts))
}

/// Next Monday strictly after `ts` (a Monday jumps a full week).
pub fn next_monday(ts: NaiveDateTime) -> AppResult<NaiveDateTime> {
    let offset = 7 - ts.weekday().num_days_from_monday();
    shift(ts, TimeDelta::days(offset as i64))
}

/// Next working day: Monday-Thursday step one day, Friday and the weekend
/// land on the following Monday.
pub fn next_workday(ts: NaiveDateTime) -> AppResult<NaiveDateTime> {
    if ts.weekday().num_days_from_monday() < 4 {
        shift(ts, TimeDelta::days(1))
    } else {
        next_monday(ts)
    }
}
