//! Type aliases for statistics storage.

/// HashMap keyed by request parameters, hashed with ahash.
pub mod stats_table;
