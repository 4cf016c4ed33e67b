//! Constants used throughout ssm2env.
//!
//! Centralizes environment variable names, provider limits and default paths.

/// Environment variable holding the parameter name prefix.
pub const PREFIX_ENV: &str = "SSM2ENV_PREFIX";

/// Environment variable naming an IAM role to assume before talking to SSM.
pub const ASSUME_ROLE_ENV: &str = "SSM2ENV_ASSUME_ROLE_ARN";

/// Environment variable overriding the AWS region.
pub const REGION_ENV: &str = "SSM2ENV_REGION";

/// Environment variable overriding the SSM endpoint (LocalStack and friends).
pub const ENDPOINT_ENV: &str = "SSM2ENV_ENDPOINT_URL";

/// Environment variable pointing at a local TOML parameter file.
pub const STORE_FILE_ENV: &str = "SSM2ENV_STORE_FILE";

/// Environment variable overriding the batch size.
pub const BATCH_SIZE_ENV: &str = "SSM2ENV_BATCH_SIZE";

/// Environment variable overriding the fetch concurrency.
pub const CONCURRENCY_ENV: &str = "SSM2ENV_CONCURRENCY";

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "SSM2ENV_LOG";

/// Separator between the prefix and the env key in a parameter name.
pub const SEPARATOR: char = '.';

/// Maximum number of names accepted by one `GetParameters` call.
pub const MAX_BATCH_SIZE: usize = 10;

/// Default number of names per batch.
pub const DEFAULT_BATCH_SIZE: usize = MAX_BATCH_SIZE;

/// Default number of batches fetched at the same time.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Page size requested from `DescribeParameters` (the API maximum).
pub const LIST_PAGE_SIZE: i32 = 50;

/// Loader script sourced by login shells.
pub const ENV_LOADER_PATH: &str = "/etc/profile.d/loadenv_fromssm.sh";

/// Mode of the loader script (world readable, writable and executable).
pub const ENV_LOADER_MODE: u32 = 0o777;

/// Session name used when assuming a role.
pub const ROLE_SESSION_NAME: &str = "ssm2env";
