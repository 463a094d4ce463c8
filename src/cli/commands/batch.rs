use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::DueDateCalculator;
use crate::errors::AppResult;
use crate::export::{BatchLogic, read_requests};
use crate::utils::path::expand_tilde;
use std::fs::File;
use std::io::{self, BufReader};

/// Handle the `batch` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Batch {
        input,
        output,
        format,
        force,
    } = cmd
    {
        let calc = DueDateCalculator::new(cfg.calendar()?);

        let requests = if input == "-" {
            read_requests(io::stdin().lock())?
        } else {
            read_requests(BufReader::new(File::open(expand_tilde(input))?))?
        };

        let records = BatchLogic::compute(&calc, &requests, &cfg.output_format)?;

        let out_path = output.as_deref().map(expand_tilde);
        BatchLogic::write(&records, *format, out_path.as_deref(), *force)?;
    }

    Ok(())
}
