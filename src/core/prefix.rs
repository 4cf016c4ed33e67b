//! Prefix selection and stripping.
//!
//! Parameter names are namespaced as `<prefix>.<KEY>`. The filter keeps the
//! names belonging to the configured prefix, and [`Prefix::strip`] turns a
//! kept name back into the env key.

use std::fmt;

use tracing::warn;

use crate::core::constants::SEPARATOR;
use crate::core::types::ParameterName;
use crate::error::{ConfigError, Result};

/// How a name is matched against the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefixMatch {
    /// Plain string prefix: `myapp` also matches `myapp2.X`.
    #[default]
    Loose,
    /// The prefix must be followed by the separator: `myapp` only matches `myapp.X`.
    Namespace,
}

/// A validated, non-empty parameter name prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    value: String,
    namespace: String,
}

impl Prefix {
    /// Validate and wrap a prefix.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyPrefix` if nothing is left after trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return Err(ConfigError::EmptyPrefix.into());
        }
        Ok(Self {
            value: value.to_string(),
            namespace: format!("{}{}", value, SEPARATOR),
        })
    }

    /// The prefix as configured.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The prefix followed by the separator (`myapp.`).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Whether `name` belongs to this prefix under the given match mode.
    pub fn matches(&self, name: &str, mode: PrefixMatch) -> bool {
        match mode {
            PrefixMatch::Loose => name.starts_with(&self.value),
            PrefixMatch::Namespace => name.starts_with(&self.namespace),
        }
    }

    /// Strip the literal `<prefix>.` from the start of `name`.
    ///
    /// A name that passed a loose filter without the separator (`myapp2.X`
    /// for prefix `myapp`) is returned unchanged and reported.
    pub fn strip<'a>(&self, name: &'a str) -> &'a str {
        match name.strip_prefix(&self.namespace) {
            Some(key) => key,
            None => {
                warn!(
                    name,
                    prefix = %self.value,
                    "name matched prefix without separator, not stripped"
                );
                name
            }
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Keep the names that belong to `prefix`, preserving their order.
pub fn filter(names: Vec<ParameterName>, prefix: &Prefix, mode: PrefixMatch) -> Vec<ParameterName> {
    names
        .into_iter()
        .filter(|name| prefix.matches(name, mode))
        .collect()
}
