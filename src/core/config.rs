//! Configuration resolution.
//!
//! Settings are resolved once at startup and passed explicitly to the
//! pipeline. Sources, lowest precedence first:
//!
//! 1. an optional TOML file (`--config`)
//! 2. `SSM2ENV_*` environment variables
//! 3. command-line flags

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::core::constants::{
    ASSUME_ROLE_ENV, BATCH_SIZE_ENV, CONCURRENCY_ENV, DEFAULT_BATCH_SIZE, DEFAULT_CONCURRENCY,
    ENDPOINT_ENV, MAX_BATCH_SIZE, PREFIX_ENV, REGION_ENV, STORE_FILE_ENV,
};
use crate::core::prefix::{Prefix, PrefixMatch};
use crate::error::{ConfigError, Result};

/// Session settings consumed only when building the SSM client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AwsSettings {
    /// Region override; the default provider chain is used when absent.
    #[serde(default)]
    pub region: Option<String>,
    /// Role to assume before creating the client.
    #[serde(default)]
    pub assume_role_arn: Option<String>,
    /// Endpoint override for SSM-compatible emulators.
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

/// Resolved pipeline configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub prefix: Prefix,
    pub prefix_match: PrefixMatch,
    pub batch_size: NonZeroUsize,
    pub concurrency: NonZeroUsize,
    /// Deadline for the whole retrieval.
    pub timeout: Option<Duration>,
    /// Read parameters from this TOML file instead of SSM.
    pub store_file: Option<PathBuf>,
    pub aws: AwsSettings,
}

/// Contents of the optional `--config` file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub prefix: Option<String>,
    pub strict_prefix: Option<bool>,
    pub batch_size: Option<usize>,
    pub concurrency: Option<usize>,
    pub timeout_secs: Option<u64>,
    pub store_file: Option<PathBuf>,
    #[serde(default)]
    pub aws: AwsSettings,
}

impl ConfigFile {
    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse`.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config file");
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let file = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        Ok(file)
    }
}

/// Values given on the command line. They win over everything else.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub prefix: Option<String>,
    pub strict_prefix: bool,
    pub batch_size: Option<usize>,
    pub concurrency: Option<usize>,
    pub timeout: Option<Duration>,
    pub store_file: Option<PathBuf>,
}

impl Config {
    /// Configuration for `prefix` with every other setting at its default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyPrefix` if the prefix is blank.
    pub fn new(prefix: &str) -> Result<Self> {
        Ok(Self {
            prefix: Prefix::new(prefix)?,
            prefix_match: PrefixMatch::default(),
            batch_size: batch_size(DEFAULT_BATCH_SIZE)?,
            concurrency: concurrency(DEFAULT_CONCURRENCY)?,
            timeout: None,
            store_file: None,
            aws: AwsSettings::default(),
        })
    }

    /// Resolve configuration from the process environment.
    ///
    /// # Arguments
    ///
    /// * `config_file` - Optional path to a TOML config file
    /// * `overrides` - Command-line values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingPrefix` if no prefix is given anywhere,
    /// or another `ConfigError` if a value is out of range.
    pub fn load(config_file: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let file = match config_file {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };
        Self::resolve(file, |var| std::env::var(var).ok(), overrides)
    }

    /// Merge the three sources. `env` looks up an environment variable.
    pub fn resolve(
        file: ConfigFile,
        env: impl Fn(&str) -> Option<String>,
        overrides: Overrides,
    ) -> Result<Self> {
        let env = |var: &str| env(var).filter(|v| !v.is_empty());

        let prefix = overrides
            .prefix
            .or_else(|| env(PREFIX_ENV))
            .or(file.prefix)
            .ok_or(ConfigError::MissingPrefix(PREFIX_ENV))?;

        let strict = overrides.strict_prefix || file.strict_prefix.unwrap_or(false);

        let batch = match overrides.batch_size {
            Some(n) => n,
            None => match env(BATCH_SIZE_ENV) {
                Some(raw) => parse_number(BATCH_SIZE_ENV, &raw)?,
                None => file.batch_size.unwrap_or(DEFAULT_BATCH_SIZE),
            },
        };

        let workers = match overrides.concurrency {
            Some(n) => n,
            None => match env(CONCURRENCY_ENV) {
                Some(raw) => parse_number(CONCURRENCY_ENV, &raw)?,
                None => file.concurrency.unwrap_or(DEFAULT_CONCURRENCY),
            },
        };

        let aws = AwsSettings {
            region: env(REGION_ENV).or(file.aws.region),
            assume_role_arn: env(ASSUME_ROLE_ENV).or(file.aws.assume_role_arn),
            endpoint_url: env(ENDPOINT_ENV).or(file.aws.endpoint_url),
        };

        let config = Self {
            prefix: Prefix::new(prefix)?,
            prefix_match: if strict {
                PrefixMatch::Namespace
            } else {
                PrefixMatch::Loose
            },
            batch_size: batch_size(batch)?,
            concurrency: concurrency(workers)?,
            timeout: overrides
                .timeout
                .or(file.timeout_secs.map(Duration::from_secs)),
            store_file: overrides
                .store_file
                .or_else(|| env(STORE_FILE_ENV).map(PathBuf::from))
                .or(file.store_file),
            aws,
        };

        debug!(
            prefix = %config.prefix,
            batch_size = config.batch_size.get(),
            concurrency = config.concurrency.get(),
            strict = strict,
            "config resolved"
        );

        Ok(config)
    }
}

fn parse_number(var: &'static str, raw: &str) -> Result<usize> {
    raw.trim().parse().map_err(|_| {
        ConfigError::InvalidNumber {
            var,
            value: raw.to_string(),
        }
        .into()
    })
}

fn batch_size(value: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(value)
        .filter(|n| n.get() <= MAX_BATCH_SIZE)
        .ok_or_else(|| {
            ConfigError::InvalidBatchSize {
                value,
                max: MAX_BATCH_SIZE,
            }
            .into()
        })
}

fn concurrency(value: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(value).ok_or_else(|| ConfigError::InvalidConcurrency(value).into())
}
