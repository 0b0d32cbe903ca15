//! Common utilities and shared functionality.
//!
//! This module contains helper functions used across the other modules.
//!
//! # Utilities
//!
//! - Query string parsing
//! - Logging setup
//!
//! # Example
//!
//! ```rust
//! use fizzbuzz_actix::common::common::parse_query;
//!
//! let params = parse_query("str1=Fizz&str2=Buzz%21");
//! assert_eq!(params["str2"], vec!["Buzz!".to_string()]);
//! ```

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Unit tests for the shared helpers.
#[cfg(test)]
mod tests;
