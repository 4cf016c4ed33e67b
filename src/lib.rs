//! ssm2env - Parameter Store values as environment variables.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── write         # Write the profile.d loader script
//! │   ├── exec          # Run a command with the values injected
//! │   ├── list          # Show matching names without fetching
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # Flag / env / file configuration
//!     ├── store/        # Parameter store backends
//!     │   ├── mod       # ParameterStore trait
//!     │   ├── ssm       # AWS SSM implementation
//!     │   ├── file      # TOML file implementation
//!     │   └── memory    # In-memory implementation
//!     ├── lister        # Paged listing of every name
//!     ├── prefix        # Prefix filter and stripping
//!     ├── batch         # Provider-sized batches
//!     ├── fetch         # Concurrent batch fetching
//!     ├── merge         # Partial result merging
//!     ├── pipeline      # Cancellable end-to-end retrieval
//!     ├── validation    # Exportable variable names
//!     ├── env           # Rendering and writing output
//!     └── exec          # Process replacement
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use ssm2env::core::config::Config;
//! use ssm2env::core::store::MemoryStore;
//! use ssm2env::core::Pipeline;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn demo() -> ssm2env::error::Result<()> {
//! let store = MemoryStore::from_pairs([("myapp.DB_HOST", "db.internal")]);
//! let pipeline = Pipeline::new(Arc::new(store), Config::new("myapp")?);
//! let env = pipeline.run(CancellationToken::new()).await?;
//! assert_eq!(env["DB_HOST"], "db.internal");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
