//! Performance metrics collection for the simulation.
//!
//! Provides structured logging and counters for monitoring a running colony.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Counter incremented on every food pickup.
pub const FOOD_PICKUPS: &str = "food_pickups";
/// Counter incremented each time a source runs out.
pub const SOURCES_EXHAUSTED: &str = "sources_exhausted";
/// Counter incremented when a returning agent reaches the nest.
pub const NEST_RETURNS: &str = "nest_returns";

/// Metrics collector for a simulation session.
pub struct Metrics {
    tick_count: AtomicU64,
    last_tick_nanos: AtomicU64,
    counters: Mutex<HashMap<String, AtomicU64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("tick_count", &self.tick_count())
            .field("elapsed", &self.elapsed())
            .finish_non_exhaustive()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            last_tick_nanos: AtomicU64::new(0),
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&self, duration: Duration) {
        self.tick_count.fetch_add(1, Ordering::Relaxed);
        self.last_tick_nanos
            .store(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    /// Adds `by` to a named counter.
    pub fn add_to_counter(&self, name: &str, by: u64) {
        if by == 0 {
            return;
        }
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(by, Ordering::Relaxed);
    }

    /// Increments a named counter.
    pub fn increment_counter(&self, name: &str) {
        self.add_to_counter(name, 1);
    }

    /// Current value of a named counter, zero if never touched.
    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .get(name)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    /// Gets the current tick count.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn last_tick_duration(&self) -> Duration {
        Duration::from_nanos(self.last_tick_nanos.load(Ordering::Relaxed))
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honors `RUST_LOG`, defaulting to `info`. Safe to call more than once.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
