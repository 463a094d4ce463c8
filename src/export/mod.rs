// src/export/mod.rs

mod input;
mod json_csv;
pub mod logic;

pub use input::read_requests;
pub use json_csv::{write_csv, write_json};
pub use logic::BatchLogic;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for written batch files.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum BatchFormat {
    #[default]
    Csv,
    Json,
}

impl BatchFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchFormat::Csv => "csv",
            BatchFormat::Json => "json",
        }
    }
}
