//! Environment variable name validation.
//!
//! Keys end up as `export KEY=...` lines in a script every login shell
//! sources, so anything that is not a plain variable name is refused.

use tracing::warn;

use crate::core::types::EnvMap;
use crate::error::{Result, ValidationError};

/// Validate an environment variable name.
///
/// Names must be valid shell variable names:
/// - Only ASCII letters, digits and underscore
/// - Cannot start with a digit
/// - Cannot be empty
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_key(key: &str) -> Result<()> {
    let Some(first) = key.chars().next() else {
        return Err(ValidationError::EmptyKey.into());
    };

    if first.is_ascii_digit() {
        return Err(ValidationError::InvalidKey {
            key: key.to_string(),
            reason: "cannot start with a digit".to_string(),
        }
        .into());
    }

    if let Some((i, ch)) = key
        .chars()
        .enumerate()
        .find(|(_, ch)| !ch.is_ascii_alphanumeric() && *ch != '_')
    {
        return Err(ValidationError::InvalidKey {
            key: key.to_string(),
            reason: format!(
                "invalid character {:?} at position {}. Only letters, digits and underscore are allowed",
                ch,
                i + 1
            ),
        }
        .into());
    }

    Ok(())
}

/// Whether `key` can be exported. Invalid keys are reported at warn level.
pub fn is_exportable(key: &str) -> bool {
    match validate_key(key) {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "skipping parameter");
            false
        }
    }
}

/// Drop every entry whose key cannot be exported.
pub fn exportable(env: EnvMap) -> EnvMap {
    env.into_iter().filter(|(key, _)| is_exportable(key)).collect()
}
