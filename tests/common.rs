#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};

pub fn dd() -> Command {
    cargo_bin_cmd!("duedate")
}

/// Shorthand for a local timestamp at hh:mm.
pub fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .expect("valid test timestamp")
}

/// Config path inside `dir` that does not exist yet (the CLI falls back to defaults).
pub fn missing_config(dir: &Path) -> String {
    dir.join("duedate.conf").to_string_lossy().to_string()
}

/// Write a YAML config file inside `dir` and return its path.
pub fn write_config(dir: &Path, yaml: &str) -> String {
    let path: PathBuf = dir.join("custom.conf");
    fs::write(&path, yaml).expect("write config");
    path.to_string_lossy().to_string()
}

/// Write a batch input CSV inside `dir` and return its path.
pub fn write_input(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, body).expect("write input");
    path.to_string_lossy().to_string()
}
