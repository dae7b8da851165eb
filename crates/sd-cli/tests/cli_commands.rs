//! End-to-end tests for the `sd` command.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn sd() -> Command {
    Command::cargo_bin("sd").unwrap()
}

fn json_stdout(args: &[&str]) -> Value {
    let output = sd().args(args).output().unwrap();
    assert!(output.status.success(), "sd {args:?} failed");
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// wheel
// ---------------------------------------------------------------------------

#[test]
fn wheel_prints_table() {
    sd().arg("wheel")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Study")
                .and(predicate::str::contains("Memorize"))
                .and(predicate::str::contains("obligation"))
                .and(predicate::str::contains("#4361EE"))
                .and(predicate::str::contains("20 slices")),
        );
}

#[test]
fn wheel_json_worker_mode() {
    let slices = json_stdout(&["wheel", "-m", "worker", "--json"]);
    let slices = slices.as_array().unwrap();
    assert_eq!(slices.len(), 20);
    assert_eq!(slices[0]["label"], "Work");
    assert_eq!(slices[0]["id"], "rigged-1");
    assert_eq!(slices[10]["label"], "Meeting");
    assert_eq!(slices[10]["category"], "obligation");
    assert_eq!(slices[1]["category"], "casual");
    assert_eq!(slices[0]["weight"], 0.2);
}

#[test]
fn wheel_cycles_inline_options() {
    let slices = json_stdout(&["wheel", "-o", "A", "-o", "B", "--json"]);
    let labels: Vec<&str> = slices
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels.len(), 20);
    assert_eq!(labels[0], "Study");
    assert_eq!(labels[10], "Memorize");

    let casual: Vec<&str> = labels
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 0 && *i != 10)
        .map(|(_, l)| *l)
        .collect();
    let cycled: Vec<&str> = ["A", "B"].iter().copied().cycle().take(18).collect();
    assert_eq!(casual, cycled);
    assert_eq!(labels[11], "B");
    assert_eq!(labels[19], "B");
}

#[test]
fn wheel_reads_options_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("options.txt");
    fs::write(&path, "  Bubble tea  \n\nNap\n").unwrap();

    let slices = json_stdout(&["wheel", "-f", path.to_str().unwrap(), "--json"]);
    assert_eq!(slices[1]["label"], "Bubble tea");
    assert_eq!(slices[2]["label"], "Nap");
    assert_eq!(slices[3]["label"], "Bubble tea");
}

#[test]
fn wheel_blank_file_falls_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blank.txt");
    fs::write(&path, "\n   \n").unwrap();

    let slices = json_stdout(&["wheel", "-f", path.to_str().unwrap(), "--json"]);
    assert_eq!(slices[1]["label"], "Void");
    assert_eq!(slices[2]["label"], "Emptiness");
}

#[test]
fn wheel_rejects_unknown_mode() {
    sd().args(["wheel", "-m", "boss"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown mode: boss"));
}

#[test]
fn wheel_missing_options_file() {
    sd().args(["wheel", "-f", "/nonexistent/options.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn inline_and_file_options_conflict() {
    sd().args(["wheel", "-o", "A", "-f", "options.txt"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// spin
// ---------------------------------------------------------------------------

#[test]
fn spin_always_lands_on_obligation() {
    let report = json_stdout(&["spin", "-n", "20", "--seed", "7", "--json"]);
    let spins = report["spins"].as_array().unwrap();
    assert_eq!(spins.len(), 20);

    let mut last = 0.0;
    for spin in spins {
        let index = spin["target_index"].as_u64().unwrap();
        assert!(index == 0 || index == 10);
        assert_eq!(spin["landed"]["category"], "obligation");
        let label = spin["landed"]["label"].as_str().unwrap();
        assert!(label == "Study" || label == "Memorize");

        let rotation = spin["final_rotation"].as_f64().unwrap();
        assert!(rotation > last);
        last = rotation;
    }
}

#[test]
fn spin_history_is_capped_and_newest_first() {
    let report = json_stdout(&["spin", "-n", "12", "-m", "worker", "--json"]);
    let history = report["history"].as_array().unwrap();
    assert_eq!(history.len(), 8);

    let spins = report["spins"].as_array().unwrap();
    assert_eq!(history[0], spins[11]["landed"]["label"]);
    assert_eq!(history[7], spins[4]["landed"]["label"]);
    assert_eq!(report["mode"], "worker");
}

#[test]
fn spin_is_deterministic_per_seed() {
    let a = sd().args(["spin", "-n", "5", "-s", "99", "--json"]).output().unwrap();
    let b = sd().args(["spin", "-n", "5", "-s", "99", "--json"]).output().unwrap();
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn spin_prints_history() {
    sd().args(["spin", "-n", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("History").and(predicate::str::contains("slice")));
}

#[test]
fn spin_count_zero_fails() {
    sd().args(["spin", "-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--count"));
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn config_prints_defaults() {
    let config = json_stdout(&["config"]);
    assert_eq!(config["thin_weight"], 0.2);
    assert_eq!(config["normal_weight"], 1.0);
    assert_eq!(config["min_extra_turns"], 8);
    assert_eq!(config["max_extra_turns"], 11);
    assert_eq!(config["seed"], 42);
}

#[test]
fn config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wheel.json");
    fs::write(&path, r#"{ "thin_weight": 0.1, "seed": 7 }"#).unwrap();

    let config = json_stdout(&["--config", path.to_str().unwrap(), "config"]);
    assert_eq!(config["thin_weight"], 0.1);
    assert_eq!(config["seed"], 7);
    assert_eq!(config["duration_ms"], 6000);

    let slices = json_stdout(&["wheel", "--json", "--config", path.to_str().unwrap()]);
    assert_eq!(slices[0]["weight"], 0.1);
}

#[test]
fn invalid_config_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{ "thin_weight": 2.0 }"#).unwrap();

    sd().args(["--config", path.to_str().unwrap(), "wheel"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("thin_weight"));
}

#[test]
fn malformed_config_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "not json").unwrap();

    sd().args(["--config", path.to_str().unwrap(), "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// logging
// ---------------------------------------------------------------------------

#[test]
fn verbose_logs_to_stderr_only() {
    let output = sd()
        .env_remove("RUST_LOG")
        .args(["-vv", "spin", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("spin completed"));
    let _: Value = serde_json::from_slice(&output.stdout).unwrap();
}
