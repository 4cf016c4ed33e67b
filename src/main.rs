//! ssm2env - Parameter Store values as environment variables.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ssm2env::cli::output;
use ssm2env::cli::{execute, Cli};
use ssm2env::core::constants::{LOG_ENV, PREFIX_ENV};
use ssm2env::error::{ConfigError, Error, OutputError, StoreError};

const AWS_HINT: &str =
    "check AWS credentials, region and ssm:DescribeParameters / ssm:GetParameters access";

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ssm2env=debug")
        } else {
            EnvFilter::new("ssm2env=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        let prefix_hint = format!("export {}=<prefix> or pass --prefix", PREFIX_ENV);
        let suggestion = match &e {
            Error::Config(ConfigError::MissingPrefix(_) | ConfigError::EmptyPrefix) => {
                Some(prefix_hint.as_str())
            }
            Error::Store(StoreError::Unavailable { .. } | StoreError::BatchFailed { .. }) => {
                Some(AWS_HINT)
            }
            Error::Output(OutputError::Write { .. }) => {
                Some("writing to /etc/profile.d usually needs root; try --output")
            }
            Error::Output(OutputError::NoCommand) => {
                Some("usage: ssm2env exec -- <command> [args...]")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
