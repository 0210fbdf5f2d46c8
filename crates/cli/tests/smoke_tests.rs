use assert_cmd::Command;
use predicates::prelude::*;

fn aqi() -> Command {
    Command::new(env!("CARGO_BIN_EXE_aqi"))
}

#[test]
fn shows_help() {
    aqi()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("aqi"))
        .stdout(predicate::str::contains("index"));
}

#[test]
fn index_prints_table() {
    aqi()
        .args(["index", "10.5", "93.7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Good"))
        .stdout(predicate::str::contains("171"))
        .stdout(predicate::str::contains("2 values evaluated."));
}

#[test]
fn beyond_scale_is_reported_but_not_fatal() {
    aqi()
        .args(["index", "30.2", "1000.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moderate"))
        .stderr(predicate::str::contains(
            "Error processing 1000.5: beyond the scale",
        ));
}

#[test]
fn strict_mode_fails_on_beyond_scale() {
    aqi()
        .args(["index", "--strict", "-10.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Application Error: beyond the scale"));
}

#[test]
fn pm10_truncates_by_default() {
    aqi()
        .args(["--format", "csv", "index", "--pollutant", "pm10", "154.7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PM10,154.7,154,100,Moderate"));
}

#[test]
fn pm10_no_truncate_falls_between_bins() {
    aqi()
        .args(["index", "-p", "pm10", "--no-truncate", "--strict", "154.7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("beyond the scale"));
}

#[test]
fn negative_pm10_is_rejected() {
    aqi()
        .args(["index", "-p", "pm10", "--strict", "--", "-0.7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("beyond the scale"));
}

#[test]
fn category_json_output() {
    let output = aqi()
        .args(["category", "44", "206", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["aqi"], 44);
    assert_eq!(value[0]["category"], "Good");
    assert_eq!(value[1]["category"], "Very Unhealthy");
}

#[test]
fn category_out_of_range() {
    aqi()
        .args(["category", "--strict", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("beyond the scale"));
}

#[test]
fn breakpoints_lists_pm25_tiers() {
    aqi()
        .args(["breakpoints", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2\tPM2.5\t35.5\t55.4\t101\t150\tUnhealthy for Sensitive Groups",
        ));
}
