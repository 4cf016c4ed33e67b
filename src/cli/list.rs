//! List command - show which parameters would be loaded.

use crate::cli::output;
use crate::core::config::Config;
use crate::error::{OutputError, Result};
use tokio_util::sync::CancellationToken;

/// List matching names and the env keys they map to. Values are not fetched.
pub async fn execute(config: Config, json: bool) -> Result<()> {
    let pipeline = crate::cli::pipeline(config).await?;
    let names = pipeline.matching_names(CancellationToken::new()).await?;
    let prefix = &pipeline.config().prefix;

    if json {
        let entries: Vec<_> = names
            .iter()
            .map(|name| {
                serde_json::json!({
                    "name": name,
                    "key": prefix.strip(name),
                })
            })
            .collect();
        let json = serde_json::to_string_pretty(&entries).map_err(OutputError::from)?;
        println!("{}", json);
        return Ok(());
    }

    if names.is_empty() {
        output::warn(&format!("no parameters found under prefix {}", prefix));
        return Ok(());
    }

    let width = names.iter().map(|n| prefix.strip(n).len()).max().unwrap_or(0);
    for name in &names {
        output::kv(prefix.strip(name), name, width);
    }
    Ok(())
}
