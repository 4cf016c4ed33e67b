//! Tests for the exec command.

use crate::support::*;

#[cfg(unix)]
#[test]
fn test_exec_injects_values() {
    let t = Test::with_params(MIXED_PARAMS);

    let output = t.exec("myapp", &["sh", "-c", "printf '%s %s' \"$A\" \"$B\""]);
    assert_success(&output);
    assert_eq!(stdout(&output), "1 2");
}

#[cfg(unix)]
#[test]
fn test_exec_excludes_other_prefixes() {
    let t = Test::with_params(MIXED_PARAMS);

    let output = t.exec("myapp", &["sh", "-c", "printf '%s' \"${C:-unset}\""]);
    assert_success(&output);
    assert_eq!(stdout(&output), "unset");
}

#[cfg(unix)]
#[test]
fn test_exec_passes_child_flags_through() {
    let t = Test::with_params(MIXED_PARAMS);

    let output = t.exec("myapp", &["sh", "-c", "printf '%s' \"$1\"", "sh", "--flag"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "--flag");
}

#[cfg(unix)]
#[test]
fn test_exec_propagates_exit_code() {
    let t = Test::with_params(MIXED_PARAMS);

    let output = t.exec("myapp", &["sh", "-c", "exit 7"]);
    assert_eq!(output.status.code(), Some(7));
}

#[test]
fn test_exec_without_command_fails() {
    let t = Test::with_params(MIXED_PARAMS);

    let output = t.cmd().args(["--prefix", "myapp", "exec"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no command specified");
}

#[test]
fn test_exec_unknown_program_fails() {
    let t = Test::with_params(MIXED_PARAMS);

    let output = t.exec("myapp", &["ssm2env-no-such-program"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "command not found");
}
