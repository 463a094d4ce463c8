// src/export/logic.rs

use crate::core::logic::DueDateCalculator;
use crate::errors::{AppError, AppResult};
use crate::export::json_csv::{write_csv, write_json};
use crate::export::{BatchFormat, notify_export_success};
use crate::models::due_record::DueRecord;
use crate::models::due_request::DueRequest;
use crate::ui::messages::warning;
use crate::utils::parse_timestamp;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// High level batch processing: many submissions, one output document.
pub struct BatchLogic;

impl BatchLogic {
    /// Compute one record per request. A failing row carries its error
    /// message and never stops the rest of the batch.
    pub fn compute(
        calc: &DueDateCalculator,
        requests: &[DueRequest],
        pattern: &str,
    ) -> AppResult<Vec<DueRecord>> {
        let mut records = Vec::with_capacity(requests.len());

        for req in requests {
            let outcome = parse_timestamp(&req.submitted).and_then(|submitted| {
                let hours = parse_hours(&req.hours)?;
                calc.calculate(submitted, hours)
            });

            let record = match outcome {
                Ok(due) => DueRecord::done(&req.submitted, &req.hours, due, pattern)?,
                Err(e) => {
                    debug!(submitted = %req.submitted, hours = %req.hours, error = %e, "row failed");
                    DueRecord::failed(&req.submitted, &req.hours, e)
                }
            };
            records.push(record);
        }

        let failed = records.iter().filter(|r| !r.is_ok()).count();
        info!(rows = records.len(), failed, "batch computed");

        Ok(records)
    }

    /// Write records to `output`, or to stdout when no path is given.
    pub fn write(
        records: &[DueRecord],
        format: BatchFormat,
        output: Option<&Path>,
        force: bool,
    ) -> AppResult<()> {
        match output {
            Some(path) => {
                confirm_overwrite(path, force)?;
                let file = BufWriter::new(File::create(path)?);
                match format {
                    BatchFormat::Csv => write_csv(records, file)?,
                    BatchFormat::Json => write_json(records, file)?,
                }
                notify_export_success(&format.as_str().to_uppercase(), path);
            }
            None => {
                let stdout = io::stdout().lock();
                match format {
                    BatchFormat::Csv => write_csv(records, stdout)?,
                    BatchFormat::Json => write_json(records, stdout)?,
                }
            }
        }
        Ok(())
    }
}

/// Gate for an existing batch output file: `--force` or an explicit "y"
/// replaces it, any other answer (EOF included) keeps it.
fn confirm_overwrite(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!(
        "Batch output '{}' already holds results.",
        path.display()
    ));
    print!("Replace it with this run? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(()),
        _ => Err(AppError::Export(format!(
            "batch output '{}' left untouched, rerun with --force to replace it",
            path.display()
        ))),
    }
}

/// Working hours are a non-negative whole number.
pub(crate) fn parse_hours(s: &str) -> AppResult<u32> {
    s.trim()
        .parse::<u32>()
        .map_err(|_| AppError::InvalidHours(s.to_string()))
}
