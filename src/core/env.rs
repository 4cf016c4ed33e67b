//! Rendering and writing of the retrieved environment.
//!
//! The default output is a shell script of `export KEY=VALUE` lines placed
//! in `/etc/profile.d/` so login shells pick it up.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::EnvMap;
use crate::core::validation::is_exportable;
use crate::error::{OutputError, Result};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `export KEY=VALUE` lines for sourcing from a shell
    #[default]
    Shell,
    /// `KEY=VALUE` lines in .env style
    Dotenv,
    /// A JSON object
    Json,
}

/// Render `env` in the given format.
///
/// Keys that are not valid variable names are skipped.
///
/// # Errors
///
/// Returns `OutputError::Serialize` if JSON serialization fails.
pub fn render(env: &EnvMap, format: Format) -> Result<String> {
    let entries = env.iter().filter(|(key, _)| is_exportable(key));
    let output = match format {
        Format::Shell => entries
            .map(|(key, value)| format!("export {}={}\n", key, shell_quote(value)))
            .collect(),
        Format::Dotenv => entries
            .map(|(key, value)| {
                if needs_quotes(value) {
                    format!("{}=\"{}\"\n", key, escape_env_value(value))
                } else {
                    format!("{}={}\n", key, value)
                }
            })
            .collect(),
        Format::Json => {
            let exported: EnvMap = entries
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            let mut json = serde_json::to_string_pretty(&exported).map_err(OutputError::from)?;
            json.push('\n');
            json
        }
    };
    Ok(output)
}

/// Write `env` to `path`, creating parent directories as needed.
///
/// On Unix the file is given `mode` even when it already existed.
///
/// # Errors
///
/// Returns `OutputError::Write` if the directory or file cannot be written.
pub fn write(env: &EnvMap, path: &Path, format: Format, mode: u32) -> Result<()> {
    let content = render(env, format)?;
    let write_err = |source| OutputError::Write {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, content).map_err(write_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).map_err(write_err)?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    debug!(path = %path.display(), keys = env.len(), "env file written");
    Ok(())
}

/// Quote a value for a POSIX shell. Safe values are left bare.
fn shell_quote(value: &str) -> String {
    let safe = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./:@%+,=".contains(c));
    if safe {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || value.chars().any(|c| {
            c.is_whitespace() || matches!(c, '#' | '=' | '"' | '\'' | '\\' | '$' | '`')
        })
}

fn escape_env_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '$' => escaped.push_str("\\$"),
            '`' => escaped.push_str("\\`"),
            _ => escaped.push(c),
        }
    }
    escaped
}
