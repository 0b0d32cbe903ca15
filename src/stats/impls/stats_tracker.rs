use std::sync::Arc;
use log::debug;
use parking_lot::Mutex;
use crate::fizzbuzz::structs::fizzbuzz_params::FizzBuzzParams;
use crate::stats::structs::stats_entry::StatsEntry;
use crate::stats::structs::stats_tracker::StatsTracker;
use crate::stats::types::stats_table::StatsTable;

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsTracker {
    pub fn new() -> StatsTracker
    {
        StatsTracker {
            table: Arc::new(Mutex::new(StatsTable::default())),
        }
    }

    /// Adds one hit for `params` and returns its new count.
    pub fn record(&self, params: &FizzBuzzParams) -> u64
    {
        let map = self.table.clone();
        let hits = {
            let mut lock = map.lock();
            match lock.get_mut(params) {
                Some(hits) => {
                    *hits += 1;
                    *hits
                }
                None => {
                    lock.insert(params.clone(), 1);
                    1
                }
            }
        };
        debug!("[STATS] Recorded hit {} for {:?}", hits, params);
        hits
    }

    /// Returns the combination with the highest hit count.
    ///
    /// Among tied combinations the winner is whichever the table iterates
    /// first, which is unspecified. An empty table yields
    /// `StatsEntry::default()`.
    pub fn most_frequent(&self) -> StatsEntry
    {
        let map = self.table.clone();
        let lock = map.lock();
        let mut best: Option<(&FizzBuzzParams, u64)> = None;
        for (params, hits) in lock.iter() {
            if *hits > best.map_or(0, |(_, max)| max) {
                best = Some((params, *hits));
            }
        }
        match best {
            None => StatsEntry::default(),
            Some((params, hits)) => StatsEntry {
                params: params.clone(),
                hits
            }
        }
    }

    pub fn hits(&self, params: &FizzBuzzParams) -> u64
    {
        let map = self.table.clone();
        let lock = map.lock();
        lock.get(params).copied().unwrap_or(0)
    }

    pub fn distinct(&self) -> usize
    {
        let map = self.table.clone();
        let lock = map.lock();
        lock.len()
    }

    pub fn total_hits(&self) -> u64
    {
        let map = self.table.clone();
        let lock = map.lock();
        lock.values().sum()
    }
}
