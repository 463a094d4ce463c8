//! The due date orchestrator.

use super::days::add_work_days;
use super::hours::add_work_hours;
use crate::core::calendar::WorkCalendar;
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDateTime, Timelike};
use tracing::debug;

/// Submission window check used by [`calculate`].
///
/// Any minute of the closing hour is accepted here (17:59 passes), unlike
/// [`super::hours::in_work_hours`] which only accepts 17:00. Both checks are
/// kept as they are: unifying them changes results for 17:01-17:59
/// submissions.
pub fn submission_in_window(calendar: &WorkCalendar, submitted: NaiveDateTime) -> bool {
    (calendar.start_hour()..=calendar.end_hour()).contains(&submitted.hour())
}

/// Timestamp at which a task of `working_hours` submitted at `submitted` is done.
pub fn calculate(
    calendar: &WorkCalendar,
    submitted: NaiveDateTime,
    working_hours: u32,
) -> AppResult<NaiveDateTime> {
    let weekday = submitted.weekday();
    if !WorkCalendar::is_workday(weekday) {
        return Err(AppError::NotWorkday(submitted, weekday));
    }
    if !submission_in_window(calendar, submitted) {
        return Err(AppError::NotWorkHour(
            submitted,
            calendar.start_hour(),
            calendar.end_hour(),
        ));
    }

    let worked_days = working_hours / calendar.work_hours();
    let worked_hours = working_hours % calendar.work_hours();

    let done_date = add_work_days(submitted, worked_days)?;
    let done = add_work_hours(calendar, done_date, worked_hours)?;

    debug!(
        %submitted,
        working_hours,
        worked_days,
        worked_hours,
        %done,
        "due date calculated"
    );

    Ok(done)
}
