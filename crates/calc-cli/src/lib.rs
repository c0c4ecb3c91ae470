//! Command-line front end for the calculation service.
//!
//! Loads a TOML configuration, installs structured logging and drives the
//! `calc-core` service against an in-process store.

pub mod cli;
pub mod config;
pub mod logging;

pub use cli::{App, BatchEntry, BatchOutcome, Cli, Command, OutputFormat};
pub use config::{CalcConfig, ConfigSource, LoggingConfig};
