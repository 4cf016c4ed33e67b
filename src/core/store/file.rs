//! File-backed parameter store.
//!
//! Reads parameters from a TOML file so the tool can run without AWS:
//!
//! ```toml
//! page_size = 10
//!
//! [parameters]
//! "myapp.DB_HOST" = "localhost"
//! "myapp.DB_PASS" = "hunter2"
//! ```
//!
//! Names must be quoted since they contain the `.` separator.

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::memory::page_of;
use super::{NamePage, ParameterStore};
use crate::core::types::ParameterName;
use crate::error::{Result, StoreError};

#[derive(Debug, Deserialize)]
struct StoreFile {
    #[serde(default)]
    page_size: Option<usize>,
    #[serde(default)]
    parameters: BTreeMap<ParameterName, String>,
}

/// Parameter store read once from a TOML file.
#[derive(Debug, Clone)]
pub struct FileStore {
    parameters: BTreeMap<ParameterName, String>,
    page_size: usize,
}

impl FileStore {
    /// Load the store file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ReadFile` if the file cannot be read,
    /// or `StoreError::Parse` if it is not valid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        debug!(path = %shown, "loading parameter file");

        let contents = std::fs::read_to_string(path).map_err(|source| StoreError::ReadFile {
            path: shown.clone(),
            source,
        })?;
        let file: StoreFile = toml::from_str(&contents).map_err(|source| StoreError::Parse {
            path: shown.clone(),
            source,
        })?;

        debug!(parameters = file.parameters.len(), "parameter file loaded");
        Ok(Self {
            parameters: file.parameters,
            page_size: file.page_size.unwrap_or(50).max(1),
        })
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

#[async_trait]
impl ParameterStore for FileStore {
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
            .filter_map(|name| self.parameters.get_key_value(name))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
