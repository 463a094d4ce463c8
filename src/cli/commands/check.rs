use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::due_date::submission_in_window;
use crate::core::calendar::WorkCalendar;
use crate::core::logic::DueDateCalculator;
use crate::errors::AppResult;
use crate::utils::{format_timestamp, parse_timestamp};
use chrono::Datelike;

fn yes_no(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}

/// Handle the `check` subcommand: how the calendar sees a timestamp.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { timestamp } = cmd {
        let calendar = cfg.calendar()?;
        let calc = DueDateCalculator::new(calendar);
        let ts = parse_timestamp(timestamp)?;

        let workday = WorkCalendar::is_workday(ts.weekday());
        let accepted = workday && submission_in_window(&calendar, ts);

        println!(
            "Timestamp        : {}",
            format_timestamp(ts, &cfg.output_format, true)?
        );
        println!(
            "Calendar         : {:02}:00-{:02}:00, {}h per day",
            calendar.start_hour(),
            calendar.end_hour(),
            calendar.work_hours()
        );
        println!("Working day      : {}", yes_no(workday));
        println!("In work hours    : {}", yes_no(calc.in_work_hours(ts)));
        println!("Valid submission : {}", yes_no(accepted));
        println!(
            "Next working day : {}",
            format_timestamp(calc.next_workday(ts)?, &cfg.output_format, true)?
        );
    }

    Ok(())
}
