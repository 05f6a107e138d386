//! Smoke tests for the name-forge binary

use assert_cmd::Command;
use predicates::prelude::*;

const PROVIDER_VARS: &[&str] = &[
    "OPENAI_API_KEY",
    "ANTHROPIC_API_KEY",
    "GEMINI_API_KEY",
    "OLLAMA_MODEL",
    "OLLAMA_BASE_URL",
    "NAME_FORGE_PROVIDER",
];

fn name_forge() -> Command {
    let mut cmd = Command::cargo_bin("name-forge").unwrap();
    for var in PROVIDER_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    name_forge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--min-score"))
        .stdout(predicate::str::contains("ENVIRONMENT VARIABLES:"));
}

#[test]
fn test_version() {
    name_forge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_pattern_generation_with_count() {
    let output = name_forge()
        .args(["data", "--count", "5", "--min-score", "0"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("Generated Names (5"));
    for rank in 1..=5 {
        assert!(stdout.contains(&format!("{:3}. ", rank)));
    }
    assert!(!stdout.contains("  6. "));
}

#[test]
fn test_json_report() {
    let output = name_forge()
        .args(["data", "cloud", "--json", "--count", "3", "--domains", "--profile", "product"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["profile"], "product");
    let names = report["names"].as_array().unwrap();
    assert!(names.len() <= 3);
    for name in names {
        assert!(name["name"].is_string());
        assert!(name["score"].as_u64().unwrap() <= 100);
        assert!(!name["domains"].as_array().unwrap().is_empty());
    }
}

#[test]
fn test_catalog() {
    name_forge()
        .arg("--catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("word-suffix"))
        .stdout(predicate::str::contains("wellness"));
}

#[test]
fn test_bad_flags_fail() {
    name_forge()
        .arg("--frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--frobnicate"));

    name_forge()
        .args(["--style", "gothic"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("gothic"));

    name_forge()
        .arg("--validate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--ai"));
}

#[test]
fn test_ai_without_provider_reports_configuration() {
    name_forge()
        .args(["--ai", "dog walking app"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No LLM providers configured"));
}

#[test]
fn test_unreachable_provider_suggests_offline_run() {
    // nothing listens on port 1, so the seed request fails to connect
    name_forge()
        .args(["--ai", "dog walking app"])
        .env("OPENAI_API_KEY", "sk-test")
        .env("OPENAI_BASE_URL", "http://127.0.0.1:1/v1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Leave out --ai"));
}
