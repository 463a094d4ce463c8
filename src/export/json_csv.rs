// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::models::due_record::DueRecord;
use std::io::Write;

/// Write records as pretty-printed JSON.
pub fn write_json<W: Write>(records: &[DueRecord], mut out: W) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    out.write_all(json_data.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Write records as CSV (header derived from the record fields).
pub fn write_csv<W: Write>(records: &[DueRecord], out: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);

    for item in records {
        wtr.serialize(item)?;
    }

    wtr.flush()?;
    Ok(())
}
