//! CLI, configuration and subcommands.
//!
//! This crate provides the `shiftcal` command-line interface.

pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;

pub use cli::Cli;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
