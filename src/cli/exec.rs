//! Exec command.
//!
//! Runs a command with the retrieved parameters injected as environment
//! variables. On Unix this process is replaced by the command.

use crate::core::exec;
use crate::core::types::EnvMap;
use crate::error::Result;

/// Exec `command` with `env`. Only returns on failure (or on non-Unix exit).
pub fn execute(command: &[String], env: EnvMap) -> Result<()> {
    let exit_code = exec::exec(command, env)?;
    std::process::exit(exit_code);
}
