//! Enumerations for FizzBuzz request handling.

/// Reasons a FizzBuzz query is rejected before reaching the core.
pub mod params_error;
