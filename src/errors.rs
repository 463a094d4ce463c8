//! Unified application error type.
//! The calculator, the configuration layer and the CLI all return AppError,
//! so callers handle a single error type.

use chrono::{NaiveDateTime, Weekday};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Due date calculation
    // ---------------------------
    #[error("Submission {0} is not on a working day ({1})")]
    NotWorkday(NaiveDateTime, Weekday),

    #[error("Submission {0} is outside working hours ({1:02}:00-{2:02}:00)")]
    NotWorkHour(NaiveDateTime, u32, u32),

    #[error("Invalid duration: {hours}h must be less than one working day ({limit}h)")]
    InvalidDuration { hours: u32, limit: u32 },

    #[error("Date out of range: {0} cannot be advanced any further")]
    OutOfRange(NaiveDateTime),

    // ---------------------------
    // Calendar / parsing
    // ---------------------------
    #[error("Invalid work calendar: start {start} must be before end {end} (end <= 23)")]
    InvalidCalendar { start: u32, end: u32 },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid working hours: {0}")]
    InvalidHours(String),

    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Batch input / output
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
