//! Implementation blocks for FizzBuzz data structures.

/// Construction, query validation and sequence generation for `FizzBuzzParams`.
pub mod fizzbuzz_params;
