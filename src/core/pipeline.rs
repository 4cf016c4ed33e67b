//! Retrieval pipeline.
//!
//! Wires listing, filtering, batching and fetching into one cancellable
//! operation:
//!
//! ```text
//! Idle → Listing → Filtering → Fetching → Merged
//!           └──────────┴───────────┴────→ Failed
//! ```
//!
//! Every stage fails fast. Nothing is retried here; callers re-run the
//! whole pipeline if they want another attempt.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::core::batch::{batch_count, batches};
use crate::core::config::Config;
use crate::core::fetch::Fetcher;
use crate::core::lister::list_keys;
use crate::core::prefix;
use crate::core::store::ParameterStore;
use crate::core::types::{EnvMap, ParameterName};
use crate::core::validation::exportable;
use crate::error::{Result, StoreError};

/// Pipeline progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Listing,
    Filtering,
    Fetching,
    /// Terminal success.
    Merged,
    /// Terminal failure.
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Listing => "listing",
            Self::Filtering => "filtering",
            Self::Fetching => "fetching",
            Self::Merged => "merged",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Retrieves every parameter under the configured prefix as an [`EnvMap`].
pub struct Pipeline<S: ?Sized> {
    store: Arc<S>,
    config: Config,
    stage: watch::Sender<Stage>,
}

impl<S: ParameterStore + ?Sized + 'static> Pipeline<S> {
    pub fn new(store: Arc<S>, config: Config) -> Self {
        let (stage, _) = watch::channel(Stage::Idle);
        Self {
            store,
            config,
            stage,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current stage.
    pub fn stage(&self) -> Stage {
        *self.stage.borrow()
    }

    /// Receive stage transitions as they happen.
    pub fn subscribe(&self) -> watch::Receiver<Stage> {
        self.stage.subscribe()
    }

    /// Run the whole pipeline.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any stage, `StoreError::Cancelled`
    /// if `cancel` fires, or `StoreError::TimedOut` if the configured
    /// deadline passes. Outstanding fetches are stopped before returning.
    pub async fn run(&self, cancel: CancellationToken) -> Result<EnvMap> {
        let result = match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, self.execute(cancel))
                .await
                .unwrap_or_else(|_| Err(StoreError::TimedOut(limit).into())),
            None => self.execute(cancel).await,
        };

        match &result {
            Ok(env) => {
                self.enter(Stage::Merged);
                info!(keys = env.len(), prefix = %self.config.prefix, "parameters retrieved");
            }
            Err(err) => {
                warn!(stage = %self.stage(), error = %err, "pipeline failed");
                self.enter(Stage::Failed);
            }
        }
        result
    }

    /// List and filter without fetching any value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if listing fails.
    pub async fn matching_names(&self, cancel: CancellationToken) -> Result<Vec<ParameterName>> {
        self.enter(Stage::Listing);
        let names = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(StoreError::Cancelled.into()),
            listed = list_keys(&*self.store) => listed?,
        };

        self.enter(Stage::Filtering);
        let total = names.len();
        let matched = prefix::filter(names, &self.config.prefix, self.config.prefix_match);
        debug!(total, matched = matched.len(), "filtered names");
        Ok(matched)
    }

    async fn execute(&self, cancel: CancellationToken) -> Result<EnvMap> {
        let keys = self.matching_names(cancel.clone()).await?;

        self.enter(Stage::Fetching);
        debug!(
            keys = keys.len(),
            batches = batch_count(keys.len(), self.config.batch_size),
            "fetching values"
        );

        let env = Fetcher::new(Arc::clone(&self.store), self.config.concurrency)
            .fetch_all(
                batches(&keys, self.config.batch_size),
                &self.config.prefix,
                cancel,
            )
            .await?;
        Ok(exportable(env))
    }

    fn enter(&self, stage: Stage) {
        let previous = self.stage.send_replace(stage);
        debug!(from = %previous, to = %stage, "pipeline stage");
    }
}
