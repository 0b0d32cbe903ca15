use std::sync::Arc;
use parking_lot::Mutex;
use crate::stats::types::stats_table::StatsTable;

/// Owner of the hit-count table.
///
/// Created once at startup and shared between request handlers behind an
/// `Arc`. The table is only reachable through the methods on this type.
#[derive(Debug)]
pub struct StatsTracker {
    pub(crate) table: Arc<Mutex<StatsTable>>,
}
