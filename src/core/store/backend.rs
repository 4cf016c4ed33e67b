//! Store backend selection and dispatch.
//!
//! Two modes:
//! - **Ssm** (default): AWS Systems Manager Parameter Store
//! - **File**: a local TOML parameter file (`--store-file`)

use std::collections::BTreeMap;

use async_trait::async_trait;
use tracing::debug;

use super::{FileStore, NamePage, ParameterStore};
use crate::core::config::Config;
use crate::core::types::ParameterName;
use crate::error::Result;

/// Parameter store selected from configuration.
#[derive(Debug)]
pub enum StoreBackend {
    /// Local TOML file
    File(FileStore),

    /// AWS SSM Parameter Store
    #[cfg(feature = "aws")]
    Ssm(super::ssm::SsmStore),
}

impl StoreBackend {
    /// Create a store backend from configuration.
    ///
    /// A configured store file wins over SSM.
    pub async fn from_config(config: &Config) -> Result<Self> {
        if let Some(path) = &config.store_file {
            debug!(path = %path.display(), "creating file store backend");
            return Ok(Self::File(FileStore::load(path)?));
        }

        #[cfg(feature = "aws")]
        {
            debug!("creating ssm store backend");
            return Ok(Self::Ssm(super::ssm::SsmStore::connect(&config.aws).await?));
        }

        #[cfg(not(feature = "aws"))]
        {
            return Err(crate::error::Error::Other(
                "SSM support not compiled. Rebuild with: cargo install ssm2env --features aws, or pass --store-file".to_string(),
            ));
        }
    }

    fn inner(&self) -> &dyn ParameterStore {
        match self {
            Self::File(store) => store,
            #[cfg(feature = "aws")]
            Self::Ssm(store) => store,
        }
    }
}

#[async_trait]
impl ParameterStore for StoreBackend {
    async fn list_page(&self, next_token: Option<String>) -> Result<NamePage> {
        self.inner().list_page(next_token).await
    }

    async fn get_values(
        &self,
        names: &[ParameterName],
        decrypt: bool,
    ) -> Result<BTreeMap<ParameterName, String>> {
        self.inner().get_values(names, decrypt).await
    }

    fn name(&self) -> &'static str {
        self.inner().name()
    }
}
