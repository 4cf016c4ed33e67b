//! Running a command with the retrieved environment.
//!
//! The child inherits the current environment plus every retrieved key.
//! On Unix the current process is replaced; elsewhere the child is spawned
//! and its exit code returned.

use std::process::Command;

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::types::EnvMap;
use crate::core::validation::is_exportable;
use crate::error::{OutputError, Result};

/// Build the command for `args` with `env` layered over the inherited environment.
///
/// Keys that are not valid variable names are left out.
///
/// # Errors
///
/// Returns `OutputError::NoCommand` if `args` is empty, or
/// `OutputError::CommandNotFound` if the program cannot be resolved.
pub fn command(args: &[String], env: EnvMap) -> Result<Command> {
    let (program, rest) = args.split_first().ok_or(OutputError::NoCommand)?;
    let resolved =
        which::which(program).map_err(|_| OutputError::CommandNotFound(program.clone()))?;
    debug!(program = %resolved.display(), args = rest.len(), keys = env.len(), "prepared command");

    let mut cmd = Command::new(resolved);
    cmd.args(rest);

    // Command keeps its own copy; only our String is zeroed on drop.
    for (key, value) in env {
        let value = Zeroizing::new(value);
        if is_exportable(&key) {
            cmd.env(key, value.as_str());
        }
    }

    Ok(cmd)
}

/// Replace the current process with `args`, run with `env`.
///
/// Only returns on failure.
///
/// # Errors
///
/// Returns the error that prevented the exec.
#[cfg(unix)]
pub fn exec(args: &[String], env: EnvMap) -> Result<i32> {
    use std::os::unix::process::CommandExt;

    let mut cmd = command(args, env)?;
    Err(cmd.exec().into())
}

/// Run `args` with `env` and return its exit code (1 if killed).
///
/// # Errors
///
/// Returns an error if the command cannot be started.
#[cfg(not(unix))]
pub fn exec(args: &[String], env: EnvMap) -> Result<i32> {
    let status = command(args, env)?.status()?;
    Ok(status.code().unwrap_or(1))
}
