//! FizzBuzz sequence generation and request parameters.
//!
//! This module contains the parameter tuple that identifies one FizzBuzz
//! request, the validation that turns a raw query string into that tuple,
//! and the pure generator producing the response sequence.
//!
//! # Sequence Rules
//!
//! For every `i` in `1..=limit`:
//! - divisible by `int1` and `int2` -> `str1` followed by `str2`
//! - divisible by `int1` only -> `str1`
//! - divisible by `int2` only -> `str2`
//! - otherwise the decimal representation of `i`
//!
//! # Example
//!
//! ```rust
//! use fizzbuzz_actix::fizzbuzz::fizzbuzz::generate;
//! use fizzbuzz_actix::fizzbuzz::structs::fizzbuzz_params::FizzBuzzParams;
//!
//! let params = FizzBuzzParams::new(3, 5, 5, "Fizz", "Buzz");
//! assert_eq!(generate(&params), vec!["1", "2", "Fizz", "4", "Buzz"]);
//! ```

/// Parameter validation errors.
pub mod enums;

/// Implementation blocks for the parameter tuple.
pub mod impls;

/// Data structures for FizzBuzz requests.
pub mod structs;

/// The sequence generator.
#[allow(clippy::module_inception)]
pub mod fizzbuzz;

/// Unit tests for sequence generation and validation.
#[cfg(test)]
mod tests;
