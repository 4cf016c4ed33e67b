//! Parallel batch fetching.
//!
//! One task is spawned per batch. A semaphore caps how many of them talk to
//! the store at once, and every task hands its partial result to a single
//! consumer loop over an mpsc channel:
//!
//! ```text
//! batches ─┬─ task 0 ─┐
//!          ├─ task 1 ─┼─ mpsc ─▶ merge loop ─▶ EnvMap
//!          └─ task n ─┘
//! ```
//!
//! The merge loop also joins the tasks. The first failed task cancels the
//! shared token and its error is returned straight away; the remaining tasks
//! are aborted when the `JoinSet` is dropped.

use std::num::NonZeroUsize;
use std::sync::Arc;

use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::core::merge::merge_into;
use crate::core::prefix::Prefix;
use crate::core::store::ParameterStore;
use crate::core::types::{Batch, EnvMap, PartialResult};
use crate::error::{Error, Result, StoreError};

/// Fetches batches concurrently and merges them into one [`EnvMap`].
pub struct Fetcher<S: ?Sized> {
    store: Arc<S>,
    concurrency: NonZeroUsize,
    decrypt: bool,
}

impl<S: ParameterStore + ?Sized + 'static> Fetcher<S> {
    /// Create a fetcher that decrypts secure values.
    pub fn new(store: Arc<S>, concurrency: NonZeroUsize) -> Self {
        Self {
            store,
            concurrency,
            decrypt: true,
        }
    }

    /// Ask the store for raw (possibly encrypted) values instead.
    pub fn without_decryption(mut self) -> Self {
        self.decrypt = false;
        self
    }

    /// Fetch every batch and merge the results.
    ///
    /// Keys are stripped of `<prefix>.`. Batches may complete in any order.
    ///
    /// # Arguments
    ///
    /// * `batches` - Batches of names, each fetched by its own task
    /// * `prefix` - Prefix to strip from fetched names
    /// * `cancel` - Caller cancellation; observed by every task
    ///
    /// # Errors
    ///
    /// Returns `StoreError::BatchFailed` for the first failing batch,
    /// or `StoreError::Cancelled` if `cancel` fires first. No partial map is
    /// returned in either case.
    pub async fn fetch_all(
        &self,
        batches: impl IntoIterator<Item = Batch>,
        prefix: &Prefix,
        cancel: CancellationToken,
    ) -> Result<EnvMap> {
        // Cancelled on every exit path so no task outlives this call.
        let token = cancel.child_token();
        let _guard = token.clone().drop_guard();

        let permits = Arc::new(Semaphore::new(self.concurrency.get()));
        let (tx, mut rx) = mpsc::channel::<PartialResult>(self.concurrency.get());
        let mut tasks = JoinSet::new();

        for (index, batch) in batches.into_iter().enumerate() {
            let task = BatchTask {
                index,
                batch,
                store: Arc::clone(&self.store),
                prefix: prefix.clone(),
                decrypt: self.decrypt,
                permits: Arc::clone(&permits),
                token: token.clone(),
                results: tx.clone(),
            };
            tasks.spawn(task.run());
        }
        drop(tx);

        debug!(
            batches = tasks.len(),
            concurrency = self.concurrency.get(),
            "dispatched fetch tasks"
        );

        let mut env = EnvMap::new();
        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    return Err(StoreError::Cancelled.into());
                }
                joined = tasks.join_next() => match joined {
                    None => break,
                    Some(Ok(Ok(()))) => {}
                    Some(Ok(Err(err))) => {
                        token.cancel();
                        return Err(err);
                    }
                    Some(Err(err)) => {
                        token.cancel();
                        return Err(StoreError::TaskFailed(err.to_string()).into());
                    }
                },
                Some(partial) = rx.recv() => merge_into(&mut env, partial),
            }
        }

        // Every task has finished; take what is still queued.
        while let Some(partial) = rx.recv().await {
            merge_into(&mut env, partial);
        }

        debug!(keys = env.len(), "merged batch results");
        Ok(env)
    }
}

/// Everything one fetch task owns.
struct BatchTask<S: ?Sized> {
    index: usize,
    batch: Batch,
    store: Arc<S>,
    prefix: Prefix,
    decrypt: bool,
    permits: Arc<Semaphore>,
    token: CancellationToken,
    results: mpsc::Sender<PartialResult>,
}

impl<S: ParameterStore + ?Sized> BatchTask<S> {
    async fn run(self) -> Result<()> {
        let _permit = tokio::select! {
            biased;
            _ = self.token.cancelled() => return Err(StoreError::Cancelled.into()),
            permit = Arc::clone(&self.permits).acquire_owned() => {
                permit.map_err(|_| StoreError::Cancelled)?
            }
        };

        trace!(batch = self.index, names = self.batch.len(), "fetching batch");
        let values = tokio::select! {
            biased;
            _ = self.token.cancelled() => return Err(StoreError::Cancelled.into()),
            result = self.store.get_values(&self.batch, self.decrypt) => {
                result.map_err(|err| batch_failed(self.index, err))?
            }
        };

        let partial: PartialResult = values
            .into_iter()
            .map(|(name, value)| (self.prefix.strip(&name).to_string(), value))
            .collect();
        trace!(batch = self.index, keys = partial.len(), "batch fetched");

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(StoreError::Cancelled.into()),
            sent = self.results.send(partial) => sent.map_err(|_| StoreError::Cancelled.into()),
        }
    }
}

fn batch_failed(index: usize, err: Error) -> Error {
    let source = match err {
        Error::Store(store) => store,
        other => StoreError::unavailable("GetParameters", other),
    };
    StoreError::BatchFailed {
        index,
        source: Box::new(source),
    }
    .into()
}
