//! Implementation blocks for statistics data structures.

/// Helpers on `StatsEntry`.
pub mod stats_entry;

/// `record`, `most_frequent` and the read helpers of `StatsTracker`.
pub mod stats_tracker;
