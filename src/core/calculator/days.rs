use super::workday::next_workday;
use crate::errors::AppResult;
use chrono::NaiveDateTime;

/// Advance `ts` by `days` working days, one [`next_workday`] step at a time.
///
/// Stops at the first step that would leave the representable date range.
pub fn add_work_days(ts: NaiveDateTime, days: u32) -> AppResult<NaiveDateTime> {
    (0..days).try_fold(ts, |acc, _| next_workday(acc))
}
