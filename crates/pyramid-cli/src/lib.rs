//! Pyramid CLI
//!
//! Library half of the `pyramid` binary: configuration loading, logging
//! setup and the subcommand implementations.

#![warn(missing_docs)]

pub mod commands;
pub mod config;
pub mod logging;

pub use config::{PyramidConfig, DEFAULT_LOG_FILTER};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
