//! Binary-level checks in a throwaway workspace

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn fastutor(workspace: &Path, args: &[&str]) -> Output {
    fastutor_with_env(workspace, args, &[])
}

fn fastutor_with_env(workspace: &Path, args: &[&str], vars: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fastutor"))
        .args(args)
        .envs(vars.iter().copied())
        .arg("--workspace")
        .arg(workspace)
        .current_dir(workspace)
        .env("HOME", workspace)
        .env("USERPROFILE", workspace)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run fastutor")
}

#[test]
fn standards_lists_every_identifier() {
    let workspace = TempDir::new().unwrap();
    let output = fastutor(workspace.path(), &["standards"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("FAS 10 - Istisna'a and Parallel Istisna'a"));
    assert!(stdout.contains("FAS 32 - Investment Agency"));
}

#[test]
fn glossary_follows_language_flag() {
    let workspace = TempDir::new().unwrap();
    let output = fastutor(workspace.path(), &["glossary", "--language", "ar"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("مصطلحات التمويل الإسلامي"));
    assert!(stdout.contains("Murabaha"));
}

#[test]
fn init_writes_configuration_once() {
    let workspace = TempDir::new().unwrap();
    assert!(fastutor(workspace.path(), &["init"]).status.success());

    let written = std::fs::read_to_string(workspace.path().join("fastutor.toml")).unwrap();
    assert!(written.contains("model = \"gpt-4\""));
    assert!(written.contains("default_language = \"en\""));

    let again = fastutor(workspace.path(), &["init"]);
    assert!(String::from_utf8_lossy(&again.stdout).contains("--force"));
}

#[test]
fn model_commands_fail_fast_without_api_key() {
    let workspace = TempDir::new().unwrap();
    let output = fastutor(
        workspace.path(),
        &["explain", "FAS 10", "--api-key-env", "FASTUTOR_CLI_TEST_MISSING_KEY"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("FASTUTOR_CLI_TEST_MISSING_KEY"));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Istisna'a"));
}

#[test]
fn blank_tutorial_answer_fails_without_calling_the_model() {
    let workspace = TempDir::new().unwrap();
    let output = fastutor_with_env(
        workspace.path(),
        &[
            "tutorial",
            "10",
            "--answer",
            "   ",
            "--api-key-env",
            "FASTUTOR_CLI_TEST_KEY",
        ],
        &[("FASTUTOR_CLI_TEST_KEY", "sk-test")],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("user_solution"));
    assert!(!stderr.contains("Error generating feedback"));
}
