//! Test fixtures and constants.

/// Parameters under two prefixes plus a lookalike.
pub const MIXED_PARAMS: &[(&str, &str)] = &[
    ("myapp.A", "1"),
    ("myapp.B", "2"),
    ("other.C", "3"),
];

/// Realistic application parameters.
pub const APP_PARAMS: &[(&str, &str)] = &[
    ("webapp.DATABASE_URL", "postgres://db.internal:5432/app"),
    ("webapp.API_KEY", "sk-test-12345"),
    ("webapp.GREETING", "hello world"),
    ("webapp.QUOTE", "it's fine"),
    ("worker.QUEUE_URL", "https://sqs.example/queue"),
];

/// `count` parameters named `<prefix>.KEY_NN` with value `value-NN`.
pub fn numbered_params(prefix: &str, count: usize) -> Vec<(String, String)> {
    (0..count)
        .map(|i| (format!("{}.KEY_{:02}", prefix, i), format!("value-{:02}", i)))
        .collect()
}
