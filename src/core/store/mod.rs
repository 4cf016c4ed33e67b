//! Parameter store access.
//!
//! The pipeline only needs two capabilities from a store: page through the
//! names it holds, and fetch the (decrypted) values for a handful of names.
//! Both are expressed by the [`ParameterStore`] trait.
//!
//! ## Backends
//!
//! - **SSM**: Feature-gated (`aws`). AWS Systems Manager Parameter Store.
//! - **File**: A local TOML file, for offline work and tests.
//! - **Memory**: An in-process map, for tests and embedding.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `ParameterStore` trait
//! 2. Add the implementation in a new file
//! 3. Add a variant to [`StoreBackend`] if the CLI should be able to select it

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::core::types::ParameterName;
use crate::error::Result;

mod backend;
mod file;
mod memory;

#[cfg(feature = "aws")]
pub mod ssm;

pub use backend::StoreBackend;
pub use file::FileStore;
pub use memory::MemoryStore;
#[cfg(feature = "aws")]
pub use ssm::SsmStore;

/// One page of parameter names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePage {
    /// Names on this page.
    pub names: Vec<ParameterName>,
    /// Token for the next page, `None` on the last page.
    pub next_token: Option<String>,
}

/// Remote key/value parameter store.
///
/// Implementations must be shareable across fetch tasks.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetch one page of stored names.
    ///
    /// # Arguments
    ///
    /// * `next_token` - Token returned by the previous page, `None` for the first page
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the store cannot be reached.
    async fn list_page(&self, next_token: Option<String>) -> Result<NamePage>;

    /// Fetch the values of `names`.
    ///
    /// Names unknown to the store are absent from the returned map.
    ///
    /// # Arguments
    ///
    /// * `names` - Names to fetch, at most the provider batch limit
    /// * `decrypt` - Whether secure values should be decrypted
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the call fails.
    async fn get_values(
        &self,
        names: &[ParameterName],
        decrypt: bool,
    ) -> Result<BTreeMap<ParameterName, String>>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}
