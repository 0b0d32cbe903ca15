use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_tracker::StatsTracker;

/// Shared application data available to all HTTP request handlers.
///
/// Both fields are `Arc`s so every actix worker sees the same tracker.
#[derive(Debug)]
pub struct HttpServiceData {
    pub stats_tracker: Arc<StatsTracker>,
    pub config: Arc<Configuration>,
}
