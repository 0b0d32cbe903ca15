//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// FizzBuzz request limits.
pub mod fizzbuzz_config;

/// HTTP server configuration (address, workers, timeouts).
pub mod http_server_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
