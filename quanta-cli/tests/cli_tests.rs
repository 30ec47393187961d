use assert_cmd::Command;
use predicates::prelude::*;

fn quanta() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_quanta"));
    cmd.env_remove("LOGGING_LEVEL");
    cmd
}

#[test]
fn test_help_command() {
    quanta()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exact resource quantity parsing"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("env"))
        .stdout(predicate::str::contains("suffixes"));
}

#[test]
fn test_version_command() {
    quanta()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quanta"));
}

#[test]
fn test_invalid_command() {
    quanta()
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_parse_prints_base_units() {
    quanta()
        .args(["parse", "10Mi", "1.1M", "0.1M", "000"])
        .assert()
        .success()
        .stdout("10485760\n1100000\n100000\n0\n");
}

#[test]
fn test_parse_negative_values() {
    quanta()
        .args(["parse", "-1", "-2Ki"])
        .assert()
        .success()
        .stdout("-1\n-2048\n");
}

#[test]
fn test_parse_without_quantities() {
    quanta()
        .arg("parse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_parse_rejects_fractional_result() {
    quanta()
        .args(["parse", "1.1m"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse quantity \"1.1m\""))
        .stderr(predicate::str::contains("not a whole number"));
}

#[test]
fn test_parse_stops_at_first_error() {
    quanta()
        .args(["parse", "1k", "1.1", "2k"])
        .assert()
        .failure()
        .stdout("1000\n")
        .stderr(predicate::str::contains("malformed number"));
}

#[test]
fn test_parse_json_output() {
    let output = quanta()
        .args(["parse", "--json", "512Mi"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let record: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(record["input"], "512Mi");
    assert_eq!(record["value"], 536_870_912);
}

#[test]
fn test_env_reads_quantity() {
    quanta()
        .args(["env", "QUANTA_CLI_MEMORY"])
        .env("QUANTA_CLI_MEMORY", "1.5Gi")
        .assert()
        .success()
        .stdout("1610612736\n");
}

#[test]
fn test_env_fallback() {
    quanta()
        .args(["env", "QUANTA_CLI_UNSET", "--fallback", "256Mi"])
        .env_remove("QUANTA_CLI_UNSET")
        .assert()
        .success()
        .stdout("268435456\n");
}

#[test]
fn test_env_required_but_missing() {
    quanta()
        .args(["env", "QUANTA_CLI_UNSET", "--required"])
        .env_remove("QUANTA_CLI_UNSET")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required but not set"));
}

#[test]
fn test_env_invalid_quantity() {
    quanta()
        .args(["env", "QUANTA_CLI_MEMORY"])
        .env("QUANTA_CLI_MEMORY", "12GB")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid quantity"));
}

#[test]
fn test_env_rejects_bad_fallback() {
    quanta()
        .args(["env", "QUANTA_CLI_UNSET", "--fallback", "1.1m"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--fallback"));
}

#[test]
fn test_suffixes_lists_table() {
    quanta()
        .arg("suffixes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ki"))
        .stdout(predicate::str::contains("2^60"))
        .stdout(predicate::str::contains("10^-3"));
}

#[test]
fn test_verbose_logs_json_to_stderr() {
    let output = quanta()
        .args(["--verbose", "parse", "1k"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1000\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    let record: serde_json::Value = stderr
        .lines()
        .filter_map(|line| serde_json::from_str(line).ok())
        .find(|r: &serde_json::Value| r["message"] == "Parsed quantity")
        .expect("debug record for parsed quantity");
    assert_eq!(record["log.level"], "debug");
    assert_eq!(record["value"], 1000);
}

#[test]
fn test_production_profile_is_quiet() {
    quanta()
        .args(["parse", "1k"])
        .env("LOGGING_LEVEL", "PRODUCTION")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
