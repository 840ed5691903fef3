//! Integration tests for the calorie binary.
//!
//! These tests verify end-to-end behavior including:
//! - Calculation output for metric and imperial inputs
//! - Validation failures
//! - Snapshot save, reuse and clearing
//! - Report and projection exports

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("calorie"))
}

/// `calc` invocation for a 30 year old man, 180 cm, 80 kg aiming for 75 kg
fn reference_calc(data_dir: &Path) -> Command {
    let mut cmd = cli();
    cmd.arg("calc")
        .arg("--data-dir")
        .arg(data_dir)
        .args(["--age", "30", "--gender", "male"])
        .args(["--height-unit", "cm", "--height", "180"])
        .args(["--weight-unit", "kg", "--current-weight", "80", "--target-weight", "75"])
        .args(["--frequency", "3-5", "--duration", "30", "--exercise-type", "gym"]);
    cmd
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Daily calorie and nutrition calculator",
        ));
}

#[test]
fn test_reference_calculation() {
    let temp_dir = setup_test_dir();

    reference_calc(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2201 calories"))
        .stdout(predicate::str::contains("-750.0g/week"))
        .stdout(predicate::str::contains("7 weeks"))
        .stdout(predicate::str::contains("1780 calories"))
        .stdout(predicate::str::contains("128g (512 cal)"))
        .stdout(predicate::str::contains("2300mg"));
}

#[test]
fn test_calc_saves_snapshot() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    reference_calc(&data_dir).assert().success();

    let snapshot_path = data_dir.join("snapshot.json");
    assert!(snapshot_path.exists());

    let contents = fs::read_to_string(&snapshot_path).expect("Failed to read snapshot");
    let json: serde_json::Value = serde_json::from_str(&contents).expect("Invalid snapshot JSON");
    assert_eq!(json["request"]["profile"]["ageYears"], 30.0);
    assert_eq!(json["request"]["activity"]["frequency"], "3-5");
    assert_eq!(json["request"]["activity"]["types"][0], "gym");
}

#[test]
fn test_no_save_skips_snapshot() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    reference_calc(&data_dir)
        .arg("--no-save")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inputs not saved"));

    assert!(!data_dir.join("snapshot.json").exists());
}

#[test]
fn test_last_reuses_snapshot() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    reference_calc(&data_dir).assert().success();

    cli()
        .arg("last")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Using inputs saved"))
        .stdout(predicate::str::contains("2201 calories"));
}

#[test]
fn test_default_command_without_snapshot() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved inputs found"));
}

#[test]
fn test_clear_removes_snapshot() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    reference_calc(&data_dir).assert().success();

    cli()
        .arg("clear")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved inputs cleared"));

    assert!(!data_dir.join("snapshot.json").exists());

    cli()
        .arg("clear")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved inputs to clear"));
}

#[test]
fn test_invalid_age_rejected_without_saving() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .arg("calc")
        .arg("--data-dir")
        .arg(&data_dir)
        .args(["--age", "121", "--gender", "female"])
        .args(["--height-unit", "cm", "--height", "165"])
        .args(["--weight-unit", "kg", "--current-weight", "60", "--target-weight", "60"])
        .args(["--frequency", "none"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid age"));

    assert!(!data_dir.join("snapshot.json").exists());
}

#[test]
fn test_missing_exercise_type_rejected() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("calc")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["--age", "25", "--gender", "female"])
        .args(["--height-unit", "cm", "--height", "165"])
        .args(["--weight-unit", "kg", "--current-weight", "60", "--target-weight", "58"])
        .args(["--frequency", "twice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing exercise type"));
}

#[test]
fn test_imperial_weight_message() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("calc")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["--age", "25", "--gender", "male"])
        .args(["--height-unit", "ft_in", "--feet", "5", "--inches", "10"])
        .args(["--weight-unit", "lb", "--current-weight", "700", "--target-weight", "180"])
        .args(["--frequency", "none"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("44-660 lb"));
}

#[test]
fn test_sedentary_goal_reached() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("calc")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["--age", "30", "--gender", "female"])
        .args(["--height-unit", "cm", "--height", "165"])
        .args(["--weight-unit", "kg", "--current-weight", "60", "--target-weight", "60"])
        .args(["--frequency", "none"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal reached"))
        .stdout(predicate::str::contains("1584 calories"));
}

#[test]
fn test_exports_report_and_projection() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();
    let report_path = data_dir.join("report.txt");
    let csv_path = data_dir.join("projection.csv");

    reference_calc(&data_dir)
        .arg("--report")
        .arg(&report_path)
        .arg("--projection-csv")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written"));

    let report = fs::read_to_string(&report_path).expect("Failed to read report");
    assert!(report.contains("Daily Calories Needed: 2201 calories"));
    assert!(report.contains("Type: Gym workout"));
    assert!(report.contains("Generated on:"));

    let csv = fs::read_to_string(&csv_path).expect("Failed to read projection");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "week,weight_kg");
    assert_eq!(lines[1], "0,80.0");
    assert_eq!(lines.last(), Some(&"7,75.0"));
}
