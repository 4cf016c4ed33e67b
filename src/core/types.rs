//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

use std::collections::BTreeMap;

/// A parameter name as assigned by the store (e.g. `myapp.DB_HOST`).
pub type ParameterName = String;

/// An env key, i.e. a parameter name with the prefix stripped (e.g. `DB_HOST`).
pub type EnvKey = String;

/// A group of parameter names fetched with a single store call.
///
/// Never longer than the configured batch size.
pub type Batch = Vec<ParameterName>;

/// Stripped keys and decrypted values produced by one batch.
pub type PartialResult = BTreeMap<EnvKey, String>;

/// The final key/value mapping handed to the output sinks.
///
/// Ordered so rendered files are stable between runs.
pub type EnvMap = BTreeMap<EnvKey, String>;
