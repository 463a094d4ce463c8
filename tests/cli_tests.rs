use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{dd, missing_config, write_config};

#[test]
fn test_calc_two_working_days() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = missing_config(dir.path());

    dd().args(["--config", &cfg, "calc", "2018-12-24 14:00", "16"])
        .assert()
        .success()
        .stdout("Wednesday 2018-12-26 14:00\n");
}

#[test]
fn test_calc_skips_weekend_and_spills() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = missing_config(dir.path());

    dd().args(["--config", &cfg, "calc", "2018-12-28T16:30", "41"])
        .assert()
        .success()
        .stdout(contains("Monday 2019-01-07 09:30"));
}

#[test]
fn test_calc_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = missing_config(dir.path());

    let out = dd()
        .args(["--config", &cfg, "calc", "2018-12-24 16:00", "2", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON");
    assert_eq!(v["submitted"], "2018-12-24 16:00");
    assert_eq!(v["hours"], "2");
    assert_eq!(v["due"], "2018-12-25 10:00");
    assert_eq!(v["weekday"], "Tuesday");
    assert!(v["error"].is_null());
}

#[test]
fn test_calc_rejects_weekend_submission() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = missing_config(dir.path());

    dd().args(["--config", &cfg, "calc", "2018-12-29 10:00", "4"])
        .assert()
        .failure()
        .stderr(contains("not on a working day"));
}

#[test]
fn test_calc_rejects_submission_outside_hours() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = missing_config(dir.path());

    dd().args(["--config", &cfg, "calc", "2018-12-24 08:00", "4"])
        .assert()
        .failure()
        .stderr(contains("outside working hours").and(contains("09:00-17:00")));
}

#[test]
fn test_calc_rejects_bad_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = missing_config(dir.path());

    dd().args(["--config", &cfg, "calc", "24/12/2018 10:00", "4"])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp"));
}

#[test]
fn test_calc_rejects_negative_hours() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = missing_config(dir.path());

    dd().args(["--config", &cfg, "calc", "2018-12-24 10:00", "--", "-3"])
        .assert()
        .failure();
}

#[test]
fn test_calc_huge_duration_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = missing_config(dir.path());

    dd().args(["--config", &cfg, "calc", "2018-12-24 14:00", "4294967295"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Date out of range"));
}

#[test]
fn test_hour_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = missing_config(dir.path());

    // 10:00-14:00 window, 4h per day: 6h = one day + 2h
    dd().args([
        "--config",
        &cfg,
        "--start-hour",
        "10",
        "--end-hour",
        "14",
        "calc",
        "2018-12-24 11:00",
        "6",
    ])
    .assert()
    .success()
    .stdout(contains("2018-12-25 13:00"));

    dd().args(["--config", &cfg, "--start-hour", "18", "calc", "2018-12-24 11:00", "6"])
        .assert()
        .failure()
        .stderr(contains("Invalid work calendar"));
}

#[test]
fn test_config_file_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_config(
        dir.path(),
        "work_start_hour: 8\nwork_end_hour: 16\nshow_weekday: false\n",
    );

    // 15:00 + 2h leaves the 08:00-16:00 window: 1h left today, resumes at 08:00
    dd().args(["--config", &cfg, "calc", "2018-12-24 15:00", "2"])
        .assert()
        .success()
        .stdout("2018-12-25 09:00\n");
}

#[test]
fn test_broken_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_config(dir.path(), "work_start_hour: [nine]\n");

    dd().args(["--config", &cfg, "calc", "2018-12-24 15:00", "2"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_invalid_output_format_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_config(dir.path(), "output_format: \"%Q\"\n");

    dd().args(["--config", &cfg, "calc", "2018-12-24 15:00", "2"])
        .assert()
        .failure()
        .stderr(contains("invalid output format"));
}

#[test]
fn test_init_and_print_config() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("nested").join("duedate.conf");
    let cfg_s = cfg.to_string_lossy().to_string();

    dd().args(["--config", &cfg_s, "--end-hour", "18", "init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    let written = fs::read_to_string(&cfg).unwrap();
    assert!(written.contains("work_start_hour: 9"));
    assert!(written.contains("work_end_hour: 18"));

    dd().args(["--config", &cfg_s, "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    dd().args(["--config", &cfg_s, "init", "--force"])
        .assert()
        .success();
    let rewritten = fs::read_to_string(&cfg).unwrap();
    assert!(rewritten.contains("work_end_hour: 17"));

    dd().args(["--config", &cfg_s, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("work_start_hour: 9").and(contains("show_weekday: true")));
}

#[test]
fn test_check_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = missing_config(dir.path());

    dd().args(["--config", &cfg, "check", "2018-12-28 17:30"])
        .assert()
        .success()
        .stdout(
            contains("Working day      : yes")
                .and(contains("In work hours    : no"))
                .and(contains("Valid submission : yes"))
                .and(contains("Next working day : Monday 2018-12-31 17:30")),
        );

    dd().args(["--config", &cfg, "check", "2018-12-29 10:00"])
        .assert()
        .success()
        .stdout(contains("Working day      : no").and(contains("Valid submission : no")));
}

#[cfg(unix)]
#[test]
fn test_default_config_lives_in_home() {
    let home = tempfile::tempdir().unwrap();

    dd().env("HOME", home.path())
        .arg("init")
        .assert()
        .success();

    let written = home.path().join(".duedate").join("duedate.conf");
    assert!(written.exists(), "{}", written.display());

    dd().env("HOME", home.path())
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("work_end_hour: 17"));
}
