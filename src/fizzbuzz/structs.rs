//! FizzBuzz data structures.

/// The five-field tuple identifying one distinct FizzBuzz request.
pub mod fizzbuzz_params;
