//! In-memory parameter store.

use std::collections::BTreeMap;

use async_trait::async_trait;

use super::{NamePage, ParameterStore};
use crate::core::types::ParameterName;
use crate::error::{Result, StoreError};

/// Parameter store backed by a map, paged like the remote one.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    parameters: BTreeMap<ParameterName, String>,
    page_size: usize,
}

impl MemoryStore {
    /// Default number of names per listing page.
    pub const DEFAULT_PAGE_SIZE: usize = 50;

    pub fn new(parameters: BTreeMap<ParameterName, String>) -> Self {
        Self {
            parameters,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }

    /// Build a store from `(name, value)` pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Set the listing page size (minimum 1).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

/// Page through `names` using decimal offsets as tokens.
pub(super) fn page_of<'a>(
    names: impl ExactSizeIterator<Item = &'a ParameterName>,
    page_size: usize,
    next_token: Option<String>,
) -> Result<NamePage> {
    let total = names.len();
    let start = match next_token {
        Some(token) => token
            .parse::<usize>()
            .map_err(|_| {
                StoreError::unavailable("list", format!("invalid page token {:?}", token))
            })?,
        None => 0,
    };
    let page: Vec<ParameterName> = names.skip(start).take(page_size).cloned().collect();
    let end = start + page.len();
    Ok(NamePage {
        names: page,
        next_token: (end < total).then(|| end.to_string()),
    })
}

#[async_trait]
impl ParameterStore for MemoryStore {
    async fn list_page(&self, next_token: Option<String>) -> Result<NamePage> {
        page_of(self.parameters.keys(), self.page_size, next_token)
    }

    async fn get_values(
        &self,
        names: &[ParameterName],
        _decrypt: bool,
    ) -> Result<BTreeMap<ParameterName, String>> {
        Ok(names
            .iter()
            .filter_map(|name| {
                self.parameters
                    .get(name)
                    .map(|value| (name.clone(), value.clone()))
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
