//! Integration tests for the acco binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn acco() -> Command {
    let mut cmd = Command::cargo_bin("acco").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("ACCO_CONFIG");
    cmd
}

/// Run with `--json` and parse stdout.
fn run_json(args: &[&str]) -> Value {
    let output = acco().arg("--json").args(args).output().unwrap();
    assert!(output.status.success(), "acco {:?} failed: {:?}", args, output);
    serde_json::from_slice(&output.stdout)
        .unwrap_or_else(|e| panic!("acco {:?} printed invalid JSON ({}): {}", args, e, String::from_utf8_lossy(&output.stdout)))
}

/// Every subcommand keeps stdout machine-readable under `--json`.
#[test]
fn test_json_output_for_every_command() {
    let battle = run_json(&["battle", "elf", "giant"]);
    assert_eq!(battle["outcome"]["outcome"], "second_defeated");
    assert_eq!(battle["second"]["hit_points"], 0);

    let duel = run_json(&["duel", "wizard", "giant"]);
    assert_eq!(duel["winner"], "Wizard");
    assert_eq!(duel["rounds"], 3);

    let stack = run_json(&["stack", "a", "b", "c"]);
    assert_eq!(stack["count"], 3);
    assert_eq!(stack["peek"], "c");
    assert_eq!(stack["popped"], serde_json::json!(["c", "b", "a"]));

    let histogram = run_json(&["histogram", "aab"]);
    assert_eq!(histogram[0]["character"], "a");
    assert_eq!(histogram[0]["count"], 2);

    assert_eq!(run_json(&["words", "O rato roeu"])["words"], 3);
    assert_eq!(run_json(&["invert", "Galloway, Matt"])["name"], "Matt Galloway");
    assert_eq!(run_json(&["reverse", "My dog"])["text"], "yM god");

    let log = run_json(&["log", "hi"]);
    let entries = log.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["text"], "hi");
}

/// Without `--json` the log line itself is printed.
#[test]
fn test_log_plain_output_uses_prefix() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("acco.toml");
    std::fs::write(&config, "logger_prefix = \"[acco]\"\n").unwrap();

    acco()
        .arg("--config")
        .arg(&config)
        .args(["log", "hello"])
        .assert()
        .success()
        .stdout("[acco] hello\n");
}

/// An undecided battle says so explicitly.
#[test]
fn test_battle_without_defeat() {
    acco()
        .args(["battle", "wizard", "giant"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("No one was defeated."))
        .stdout(predicate::str::contains("Giant has 5 hit point(s) left"));
}

#[test]
fn test_battle_with_defeat() {
    acco()
        .args(["battle", "wizard", "elf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Elf defeated!"));
}

/// Unknown kinds and malformed names are argument errors.
#[test]
fn test_invalid_arguments_exit_2() {
    acco().args(["battle", "orc", "giant"]).assert().code(2);

    acco()
        .args(["invert", "Matt Galloway"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid name format"));
}

/// A config that fails validation exits 3.
#[test]
fn test_invalid_config_exit_3() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("acco.toml");
    std::fs::write(&config, "arena_max_rounds = 0\n").unwrap();

    acco()
        .arg("--config")
        .arg(&config)
        .args(["words", "a b"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("arena_max_rounds must be at least 1"));
}

/// A missing config exits 3 and reports the OS error once.
#[test]
fn test_missing_config_exit_3() {
    let temp = tempdir().unwrap();
    let missing = temp.path().join("absent.toml");

    acco()
        .arg("--config")
        .arg(&missing)
        .args(["words", "a b"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to load config"))
        .stderr(predicate::function(|err: &str| err.matches("os error").count() == 1));
}

/// A malformed config exits 3.
#[test]
fn test_malformed_config_exit_3() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("acco.yaml");
    std::fs::write(&config, "arena_max_rounds: [not, a, number]\n").unwrap();

    acco()
        .arg("--config")
        .arg(&config)
        .args(["words", "a b"])
        .assert()
        .code(3);
}

/// `RUST_LOG` controls the filter when no verbosity flag is given.
#[test]
fn test_rust_log_enables_debug_events() {
    acco()
        .env("RUST_LOG", "acco=debug")
        .args(["battle", "elf", "giant"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Elf strikes Giant for 10 (0 hit points left)"));
}

#[test]
fn test_default_filter_hides_debug_events() {
    acco()
        .args(["battle", "elf", "giant"])
        .assert()
        .success()
        .stderr(predicate::str::contains("hit points left").not());
}

#[test]
fn test_verbose_enables_debug_events() {
    acco()
        .args(["--verbose", "battle", "elf", "giant"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Elf strikes Giant for 10"));
}
