//! Request statistics tracking.
//!
//! This module counts how many times each distinct `FizzBuzzParams`
//! combination has been requested and answers which combination is the most
//! popular one.
//!
//! # Thread Safety
//!
//! The table lives behind a single `parking_lot::Mutex`. Every operation,
//! including the full scan of `most_frequent`, runs as one critical section,
//! so concurrent `record` calls never lose an update and a scan never
//! observes a half-applied increment. Readers and writers share the same
//! lock; critical sections are in-memory only and never span an `.await`
//! or any I/O.
//!
//! # Example
//!
//! ```rust
//! use fizzbuzz_actix::fizzbuzz::structs::fizzbuzz_params::FizzBuzzParams;
//! use fizzbuzz_actix::stats::structs::stats_tracker::StatsTracker;
//!
//! let tracker = StatsTracker::new();
//! let params = FizzBuzzParams::new(3, 5, 15, "Fizz", "Buzz");
//! tracker.record(&params);
//! tracker.record(&params);
//!
//! let entry = tracker.most_frequent();
//! assert_eq!(entry.params, params);
//! assert_eq!(entry.hits, 2);
//! ```

/// Implementation blocks for the tracker and its entries.
pub mod impls;

/// Statistics data structures.
pub mod structs;

/// Type aliases for the statistics table.
pub mod types;
