use crate::errors::AppResult;
use crate::utils::date::weekday_name;
use crate::utils::format_timestamp;
use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

/// Flat outcome of one due date calculation, used for CSV / JSON output.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DueRecord {
    pub submitted: String,
    pub hours: String,
    pub due: Option<String>,
    pub weekday: Option<String>,
    pub error: Option<String>,
}

impl DueRecord {
    pub fn done(
        submitted: &str,
        hours: &str,
        due: NaiveDateTime,
        pattern: &str,
    ) -> AppResult<Self> {
        Ok(Self {
            submitted: submitted.to_string(),
            hours: hours.to_string(),
            due: Some(format_timestamp(due, pattern, false)?),
            weekday: Some(weekday_name(due.weekday()).to_string()),
            error: None,
        })
    }

    pub fn failed(submitted: &str, hours: &str, error: impl ToString) -> Self {
        Self {
            submitted: submitted.to_string(),
            hours: hours.to_string(),
            due: None,
            weekday: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
