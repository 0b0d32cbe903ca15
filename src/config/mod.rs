//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the service
//! configuration from a TOML file.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml` by default) contains:
//! - **log_level** / **log_console_interval**: logging verbosity and how often
//!   the statistics summary line is written
//! - **fizzbuzz_config**: limits applied to incoming FizzBuzz requests
//! - **http_server**: bind address, worker count and connection timeouts
//! - **sentry_config**: optional error reporting
//!
//! Every section falls back to its defaults when omitted.
//!
//! # Example
//!
//! ```rust,ignore
//! use fizzbuzz_actix::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, writing a default one if requested
//! let config = Configuration::load_from_file("config.toml", false)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration error enumeration.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
