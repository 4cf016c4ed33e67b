//! Command-line interface.

pub mod completions;
pub mod exec;
pub mod list;
pub mod output;
pub mod write;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use crate::core::config::{Config, Overrides};
use crate::core::env::Format;
use crate::core::store::StoreBackend;
use crate::core::Pipeline;
use crate::error::{OutputError, Result};

/// ssm2env - Parameter Store values as environment variables.
#[derive(Parser, Debug)]
#[command(
    name = "ssm2env",
    about = "Load parameters stored under a prefix in AWS SSM as environment variables",
    version,
    after_help = "The prefix is read from SSM2ENV_PREFIX unless --prefix is given."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Flags overriding the environment and the config file.
#[derive(Args, Debug, Default)]
pub struct SettingsArgs {
    /// Parameter name prefix (default: $SSM2ENV_PREFIX)
    #[arg(long, global = true)]
    pub prefix: Option<String>,

    /// Only match names of the form <prefix>.KEY
    #[arg(long, global = true)]
    pub strict_prefix: bool,

    /// Names per GetParameters call (1-10)
    #[arg(long, global = true, value_name = "N")]
    pub batch_size: Option<usize>,

    /// Batches fetched at the same time
    #[arg(long, global = true, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Give up after this many seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Read parameters from a local TOML file instead of SSM
    #[arg(long, global = true, value_name = "PATH")]
    pub store_file: Option<PathBuf>,
}

impl From<SettingsArgs> for Overrides {
    fn from(args: SettingsArgs) -> Self {
        Self {
            prefix: args.prefix,
            strict_prefix: args.strict_prefix,
            batch_size: args.batch_size,
            concurrency: args.concurrency,
            timeout: args.timeout.map(Duration::from_secs),
            store_file: args.store_file,
        }
    }
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the values to the profile.d loader script (default)
    Write {
        /// Destination file, or - for stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: Format,
    },

    /// Run a command with the values injected as environment variables
    Exec {
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// List matching parameter names without fetching values
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Execute a parsed command line.
///
/// Configuration is resolved before any store access, so a missing prefix
/// fails without touching AWS.
pub fn execute(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Command::Write {
        output: None,
        format: Format::default(),
    });
    let config_file = cli.config.as_deref();
    let overrides: Overrides = cli.settings.into();

    match command {
        Command::Completions { shell } => completions::execute(shell),
        Command::Write { output, format } => {
            let config = Config::load(config_file, overrides)?;
            runtime()?.block_on(write::execute(config, output, format))
        }
        Command::List { json } => {
            let config = Config::load(config_file, overrides)?;
            runtime()?.block_on(list::execute(config, json))
        }
        Command::Exec { command } => {
            if command.is_empty() {
                return Err(OutputError::NoCommand.into());
            }
            let config = Config::load(config_file, overrides)?;
            let env = runtime()?.block_on(retrieve(config))?;
            exec::execute(&command, env)
        }
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

/// Build the configured store and pipeline.
pub(crate) async fn pipeline(config: Config) -> Result<Pipeline<StoreBackend>> {
    let store = StoreBackend::from_config(&config).await?;
    Ok(Pipeline::new(Arc::new(store), config))
}

/// Run the pipeline, cancelling it on Ctrl-C.
pub(crate) async fn retrieve(config: Config) -> Result<crate::core::EnvMap> {
    let pipeline = pipeline(config).await?;
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });
    pipeline.run(cancel).await
}
