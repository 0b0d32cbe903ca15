//! Statistics data structures.

/// One parameter combination together with its hit count.
pub mod stats_entry;

/// The shared hit-count table and its lock.
pub mod stats_tracker;
