use crate::stats::structs::stats_entry::StatsEntry;

impl StatsEntry {
    /// True for the placeholder entry returned before any hit was recorded.
    pub fn is_empty(&self) -> bool
    {
        self.hits == 0
    }
}
