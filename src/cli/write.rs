//! Write command.
//!
//! Retrieves the parameters and writes them where a login shell will source
//! them. Nothing is written if retrieval fails.

use std::path::{Path, PathBuf};

use crate::cli::output;
use crate::core::config::Config;
use crate::core::constants::{ENV_LOADER_MODE, ENV_LOADER_PATH};
use crate::core::env::{self, Format};
use crate::error::Result;

/// Retrieve and write to `output` (default: the profile.d loader, `-` for stdout).
pub async fn execute(config: Config, output: Option<PathBuf>, format: Format) -> Result<()> {
    let vars = crate::cli::retrieve(config).await?;

    let target = output.unwrap_or_else(|| PathBuf::from(ENV_LOADER_PATH));
    if target == Path::new("-") {
        output::raw(&env::render(&vars, format)?);
        return Ok(());
    }

    if vars.is_empty() {
        output::warn("no parameters matched the prefix");
    }

    env::write(&vars, &target, format, ENV_LOADER_MODE)?;
    output::success(&format!(
        "wrote {} variables to {}",
        vars.len(),
        output::path(&target.display().to_string())
    ));
    Ok(())
}
