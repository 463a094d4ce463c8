use crate::export::BatchFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for duedate
/// CLI application to compute due dates in working hours
#[derive(Parser)]
#[command(
    name = "duedate",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute when a task is done, counting only working hours (Mon-Fri, 09:00-17:00 by default)",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Override the opening hour of the working day (0-22)
    #[arg(global = true, long = "start-hour")]
    pub start_hour: Option<u32>,

    /// Override the closing hour of the working day (1-23)
    #[arg(global = true, long = "end-hour")]
    pub end_hour: Option<u32>,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long = "force")]
        force: bool,
    },

    /// Show the effective configuration
    Config {
        /// Print the current configuration as YAML
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Compute the due date of a single task
    Calc {
        /// Submission timestamp (YYYY-MM-DD HH:MM, 'T' separator and :SS accepted)
        submitted: String,

        /// Working hours needed for the task
        hours: u32,

        /// Print the result as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Inspect a timestamp against the work calendar
    Check {
        /// Timestamp (YYYY-MM-DD HH:MM)
        timestamp: String,
    },

    /// Compute due dates for every row of a CSV file (columns: submitted,hours)
    Batch {
        /// Input CSV file, '-' reads stdin
        input: String,

        /// Output file (stdout if omitted)
        #[arg(long = "output", short = 'o')]
        output: Option<String>,

        /// Output format
        #[arg(long = "format", short = 'f', value_enum, default_value_t = BatchFormat::Csv)]
        format: BatchFormat,

        /// Overwrite the output file without asking
        #[arg(long = "force")]
        force: bool,
    },
}
