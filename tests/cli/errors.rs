//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("ssm2env") || out.contains("Usage"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_missing_prefix_fails_with_hint() {
    let t = Test::with_params(MIXED_PARAMS);

    let output = t.cmd().args(["write", "-o", "env.sh"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no prefix was specified");
    assert_stderr_contains(&output, "SSM2ENV_PREFIX");
    assert!(!t.path("env.sh").exists());
}

#[test]
fn test_missing_prefix_fails_without_store() {
    let t = Test::new();

    // No store configured at all: the prefix check happens first.
    let output = t.bare_cmd().arg("list").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no prefix was specified");
}

#[test]
fn test_empty_prefix_rejected() {
    let t = Test::with_params(MIXED_PARAMS);

    let output = t.list("  ");
    assert_failure(&output);
    assert_stderr_contains(&output, "prefix must not be empty");
}

#[test]
fn test_batch_size_out_of_range() {
    let t = Test::with_params(MIXED_PARAMS);

    for size in ["0", "11"] {
        let output = t
            .cmd()
            .args(["--prefix", "myapp", "--batch-size", size, "list"])
            .output()
            .unwrap();
        assert_failure(&output);
        assert_stderr_contains(&output, "invalid batch size");
    }
}

#[test]
fn test_invalid_batch_size_env() {
    let t = Test::with_params(MIXED_PARAMS);

    let output = t
        .cmd()
        .env("SSM2ENV_BATCH_SIZE", "ten")
        .args(["--prefix", "myapp", "list"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "SSM2ENV_BATCH_SIZE");
}

#[test]
fn test_zero_concurrency_rejected() {
    let t = Test::with_params(MIXED_PARAMS);

    let output = t
        .cmd()
        .args(["--prefix", "myapp", "--concurrency", "0", "list"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid concurrency");
}

#[test]
fn test_missing_store_file_fails() {
    let t = Test::new();

    let output = t
        .bare_cmd()
        .args(["--prefix", "myapp", "--store-file", "absent.toml", "write", "-o", "env.sh"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "absent.toml");
    assert!(!t.path("env.sh").exists());
}

#[test]
fn test_malformed_store_file_fails() {
    let t = Test::new();
    std::fs::write(&t.store, "parameters = [1, 2").unwrap();

    let output = t.list("myapp");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse store file");
}

#[test]
fn test_unknown_config_key_rejected() {
    let t = Test::with_params(MIXED_PARAMS);
    std::fs::write(t.path("ssm2env.toml"), "prefix = \"myapp\"\nbatch = 3\n").unwrap();

    let output = t
        .cmd()
        .args(["--config", "ssm2env.toml", "list"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config file");
}

#[test]
fn test_unwritable_output_fails() {
    let t = Test::with_params(MIXED_PARAMS);
    std::fs::write(t.path("blocker"), "").unwrap();

    // Parent path is a regular file, so the directory cannot be created.
    let output = t.write("myapp", "blocker/env.sh");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to write");
}

#[test]
fn test_completions() {
    let t = Test::new();

    t.bare_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ssm2env"));
}

#[test]
fn test_exec_requires_command_before_config() {
    let t = Test::new();

    // No prefix configured either: the missing command is reported first.
    t.bare_cmd()
        .arg("exec")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no command specified"))
        .stderr(predicate::str::contains("ssm2env exec --"));
}
