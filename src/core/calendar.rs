use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, TimeDelta, Weekday};

pub const DEFAULT_START_HOUR: u32 = 9;
pub const DEFAULT_END_HOUR: u32 = 17;

/// Business window of a working day, in 24-hour format.
///
/// The working week is always Monday-Friday; only the daily window can be
/// configured. `end_hour:00` is the closing boundary, so it must be a valid
/// time of day. Build it through [`WorkCalendar::new`] so the window is
/// always validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkCalendar {
    /// Opening hour (inclusive)
    start_hour: u32,
    /// Closing hour, `end_hour:00` still counts as in the window
    end_hour: u32,
}

impl Default for WorkCalendar {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
        }
    }
}

impl WorkCalendar {
    pub fn new(start_hour: u32, end_hour: u32) -> AppResult<Self> {
        if start_hour >= end_hour || end_hour > 23 {
            return Err(AppError::InvalidCalendar {
                start: start_hour,
                end: end_hour,
            });
        }

        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Hours in one business day.
    pub fn work_hours(&self) -> u32 {
        self.end_hour - self.start_hour
    }

    pub fn opening(&self) -> NaiveTime {
        NaiveTime::MIN + TimeDelta::hours(self.start_hour as i64)
    }

    pub fn closing(&self) -> NaiveTime {
        NaiveTime::MIN + TimeDelta::hours(self.end_hour as i64)
    }

    pub fn is_workday(weekday: Weekday) -> bool {
        !matches!(weekday, Weekday::Sat | Weekday::Sun)
    }
}
