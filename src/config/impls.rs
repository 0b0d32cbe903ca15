//! Implementation blocks for configuration structures.

/// Loading, saving and validating `Configuration`.
pub mod configuration;

/// Defaults for the FizzBuzz section.
pub mod fizzbuzz_config;

/// Defaults for the HTTP server section.
pub mod http_server_config;

/// Defaults for the Sentry section.
pub mod sentry_config;
