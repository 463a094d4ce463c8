use crate::core::calculator::{days, due_date, hours, workday};
use crate::core::calendar::WorkCalendar;
use crate::errors::AppResult;
use chrono::NaiveDateTime;

/// A work calendar bundled with the due date operations.
///
/// Holds no state besides the calendar, so one instance can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct DueDateCalculator {
    calendar: WorkCalendar,
}

impl DueDateCalculator {
    pub fn new(calendar: WorkCalendar) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &WorkCalendar {
        &self.calendar
    }

    pub fn calculate(
        &self,
        submitted: NaiveDateTime,
        working_hours: u32,
    ) -> AppResult<NaiveDateTime> {
        due_date::calculate(&self.calendar, submitted, working_hours)
    }

    pub fn next_workday(&self, ts: NaiveDateTime) -> AppResult<NaiveDateTime> {
        workday::next_workday(ts)
    }

    pub fn in_work_hours(&self, ts: NaiveDateTime) -> bool {
        hours::in_work_hours(&self.calendar, ts)
    }

    pub fn add_work_hours(&self, ts: NaiveDateTime, count: u32) -> AppResult<NaiveDateTime> {
        hours::add_work_hours(&self.calendar, ts, count)
    }

    pub fn add_work_days(&self, ts: NaiveDateTime, count: u32) -> AppResult<NaiveDateTime> {
        days::add_work_days(ts, count)
    }
}
