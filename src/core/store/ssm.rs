//! AWS SSM Parameter Store backend.
//!
//! Enable with `--features aws` (on by default).
//!
//! ## Session
//!
//! The region comes from `SSM2ENV_REGION` when set, otherwise from the
//! default provider chain (`AWS_REGION`, the shared profile, then instance
//! metadata). Credentials come from the default chain, or from STS when
//! `SSM2ENV_ASSUME_ROLE_ARN` names a role to assume.

use std::collections::BTreeMap;

use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::sts::AssumeRoleProvider;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::Client;
use tracing::{debug, info, trace, warn};

use super::{NamePage, ParameterStore};
use crate::core::config::AwsSettings;
use crate::core::constants::{LIST_PAGE_SIZE, ROLE_SESSION_NAME};
use crate::core::types::ParameterName;
use crate::error::{Result, StoreError};

/// Parameter store client for AWS SSM.
#[derive(Debug, Clone)]
pub struct SsmStore {
    client: Client,
}

impl SsmStore {
    /// Wrap an already configured SSM client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a session from `settings` and create the SSM client.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if no region can be resolved.
    pub async fn connect(settings: &AwsSettings) -> Result<Self> {
        let region = RegionProviderChain::first_try(settings.region.clone().map(Region::new))
            .or_default_provider();

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;

        let Some(region) = sdk_config.region() else {
            return Err(StoreError::unavailable(
                "session",
                "no region configured and none found in instance metadata",
            )
            .into());
        };
        debug!(region = %region, "aws session ready");

        let mut builder = aws_sdk_ssm::config::Builder::from(&sdk_config);

        if let Some(role_arn) = &settings.assume_role_arn {
            info!(role_arn = %role_arn, "assuming role");
            let provider = AssumeRoleProvider::builder(role_arn)
                .session_name(ROLE_SESSION_NAME)
                .configure(&sdk_config)
                .build()
                .await;
            builder = builder.credentials_provider(provider);
        }

        if let Some(endpoint) = &settings.endpoint_url {
            info!(endpoint = %endpoint, "using custom SSM endpoint");
            builder = builder.endpoint_url(endpoint);
        }

        Ok(Self::new(Client::from_conf(builder.build())))
    }
}

#[async_trait]
impl ParameterStore for SsmStore {
    async fn list_page(&self, next_token: Option<String>) -> Result<NamePage> {
        let output = self
            .client
            .describe_parameters()
            .max_results(LIST_PAGE_SIZE)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| StoreError::unavailable("DescribeParameters", DisplayErrorContext(&e)))?;

        let names: Vec<ParameterName> = output
            .parameters()
            .iter()
            .filter_map(|p| p.name())
            .map(str::to_string)
            .collect();
        trace!(names = names.len(), "listed page");

        Ok(NamePage {
            names,
            next_token: output.next_token().map(str::to_string),
        })
    }

    async fn get_values(
        &self,
        names: &[ParameterName],
        decrypt: bool,
    ) -> Result<BTreeMap<ParameterName, String>> {
        let output = self
            .client
            .get_parameters()
            .set_names(Some(names.to_vec()))
            .with_decryption(decrypt)
            .send()
            .await
            .map_err(|e| StoreError::unavailable("GetParameters", DisplayErrorContext(&e)))?;

        for name in output.invalid_parameters() {
            warn!(name = %name, "parameter vanished between listing and fetch");
        }

        Ok(output
            .parameters()
            .iter()
            .filter_map(|p| Some((p.name()?.to_string(), p.value()?.to_string())))
            .collect())
    }

    fn name(&self) -> &'static str {
        "ssm"
    }
}
