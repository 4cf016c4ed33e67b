//! Core library components.
//!
//! This module contains the retrieval pipeline, the parameter store
//! abstraction, configuration handling and the output sinks.

pub mod batch;
pub mod config;
pub mod constants;
pub mod env;
pub mod exec;
pub mod fetch;
pub mod lister;
pub mod merge;
pub mod pipeline;
pub mod prefix;
pub mod store;
pub mod types;
pub mod validation;

pub use pipeline::{Pipeline, Stage};
pub use types::EnvMap;
