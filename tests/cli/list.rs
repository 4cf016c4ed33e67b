//! Tests for the list command.

use crate::support::*;

#[test]
fn test_list_shows_keys_and_names() {
    let t = Test::with_params(MIXED_PARAMS);

    let output = t.list("myapp");
    assert_success(&output);
    assert_stdout_contains(&output, "myapp.A");
    assert_stdout_contains(&output, "myapp.B");
    assert_stdout_excludes(&output, "other.C");
}

#[test]
fn test_list_never_prints_values() {
    let t = Test::with_params(APP_PARAMS);

    let output = t.list("webapp");
    assert_success(&output);
    assert_stdout_contains(&output, "DATABASE_URL");
    assert_stdout_excludes(&output, "postgres://");
    assert_stdout_excludes(&output, "sk-test-12345");
}

#[test]
fn test_list_json() {
    let t = Test::with_params(MIXED_PARAMS);

    let output = t.list_json("myapp");
    assert_success(&output);

    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([
            { "name": "myapp.A", "key": "A" },
            { "name": "myapp.B", "key": "B" },
        ])
    );
}

#[test]
fn test_list_empty_warns() {
    let t = Test::with_params(MIXED_PARAMS);

    let output = t.list("nothing");
    assert_success(&output);
    assert_stderr_contains(&output, "no parameters found under prefix nothing");
}

#[test]
fn test_list_json_empty_is_empty_array() {
    let t = Test::new();

    let output = t.list_json("myapp");
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "[]");
}
