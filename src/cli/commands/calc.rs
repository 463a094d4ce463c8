use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::DueDateCalculator;
use crate::errors::{AppError, AppResult};
use crate::models::due_record::DueRecord;
use crate::utils::{format_timestamp, parse_timestamp};

/// Handle the `calc` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        submitted,
        hours,
        json,
    } = cmd
    {
        let calc = DueDateCalculator::new(cfg.calendar()?);
        let submitted_at = parse_timestamp(submitted)?;
        let due = calc.calculate(submitted_at, *hours)?;

        if *json {
            let record =
                DueRecord::done(submitted, &hours.to_string(), due, &cfg.output_format)?;
            let out = serde_json::to_string_pretty(&record)
                .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
            println!("{out}");
        } else {
            println!(
                "{}",
                format_timestamp(due, &cfg.output_format, cfg.show_weekday)?
            );
        }
    }

    Ok(())
}
