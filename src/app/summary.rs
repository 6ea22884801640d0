use formica_core::ColonyStats;
use serde::{Deserialize, Serialize};

/// Outcome of a headless run.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RunSummary {
    /// Ticks executed by this run.
    pub ticks: u64,
    /// Session tick count after the run.
    pub total_ticks: u64,
    /// Counted over this run only, like `ticks`.
    pub pickups: u64,
    pub nest_returns: u64,
    pub sources_exhausted: u64,
    pub elapsed_ms: u64,
    pub fingerprint: String,
    pub stats: ColonyStats,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ticks:             {} ({} total)", self.ticks, self.total_ticks)?;
        writeln!(f, "elapsed:           {} ms", self.elapsed_ms)?;
        writeln!(f, "food pickups:      {}", self.pickups)?;
        writeln!(f, "nest returns:      {}", self.nest_returns)?;
        writeln!(f, "sources exhausted: {}", self.sources_exhausted)?;
        writeln!(
            f,
            "agents:            {} seeking, {} returning, {} carrying",
            self.stats.seeking, self.stats.returning, self.stats.carrying
        )?;
        writeln!(
            f,
            "food left:         {} units in {} sources",
            self.stats.food_units_left, self.stats.food_sources_left
        )?;
        write!(
            f,
            "trail cells:       {} active, total strength {:.1}",
            self.stats.active_cells, self.stats.total_trail_strength
        )
    }
}
