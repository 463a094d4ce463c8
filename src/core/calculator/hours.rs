//! Same-day hour arithmetic inside the business window.

use super::workday::{next_workday, shift};
use crate::core::calendar::WorkCalendar;
use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, TimeDelta, Timelike};
use tracing::trace;

/// True when the time of day of `ts` lies in `[start:00, end:00]`.
///
/// The closing hour only matches on the dot: 17:00 is inside, 17:01 is not.
pub fn in_work_hours(calendar: &WorkCalendar, ts: NaiveDateTime) -> bool {
    (ts.hour() == calendar.end_hour() && ts.minute() == 0)
        || (calendar.start_hour() <= ts.hour() && ts.hour() < calendar.end_hour())
}

/// Add less than one business day of hours to `submitted`.
///
/// When the plain sum leaves the window, the time left until closing on the
/// submission date is carried over to the opening of the next working day.
pub fn add_work_hours(
    calendar: &WorkCalendar,
    submitted: NaiveDateTime,
    hours: u32,
) -> AppResult<NaiveDateTime> {
    let limit = calendar.work_hours();
    if hours >= limit {
        return Err(AppError::InvalidDuration { hours, limit });
    }

    let finished = shift(submitted, TimeDelta::hours(hours as i64))?;
    if in_work_hours(calendar, finished) {
        return Ok(finished);
    }

    // Time of day of closing minus the submission's hh:mm, wrapping at midnight.
    let elapsed =
        TimeDelta::hours(submitted.hour() as i64) + TimeDelta::minutes(submitted.minute() as i64);
    let (remaining, _) = calendar.closing().overflowing_sub_signed(elapsed);

    // Seconds and below ride along unchanged.
    let sub_minute = TimeDelta::seconds(submitted.second() as i64)
        + TimeDelta::nanoseconds(submitted.nanosecond() as i64);

    let opening = next_workday(submitted)?.date().and_time(calendar.opening());
    let carried = TimeDelta::hours(remaining.hour() as i64)
        + TimeDelta::minutes(remaining.minute() as i64)
        + sub_minute;
    let spilled = shift(opening, carried)?;

    trace!(
        %submitted,
        hours,
        remaining = %remaining.format("%H:%M"),
        %spilled,
        "hours spill over to next working day"
    );

    Ok(spilled)
}
