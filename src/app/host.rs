//! Host-side driver for a simulation session.
//!
//! The core has no notion of pausing. The host owns the start/pause signal
//! and simply does not step while paused, handing out end-of-tick snapshots
//! for whatever renders the colony.

use super::summary::RunSummary;
use formica_core::metrics::{self, Metrics};
use formica_core::{Simulation, TickReport, WorldSnapshot};
use std::time::{Duration, Instant};

/// Session counters read at one instant, so a run can report its own share.
struct CounterBaseline {
    pickups: u64,
    nest_returns: u64,
    sources_exhausted: u64,
}

impl CounterBaseline {
    fn read(m: &Metrics) -> Self {
        Self {
            pickups: m.counter(metrics::FOOD_PICKUPS),
            nest_returns: m.counter(metrics::NEST_RETURNS),
            sources_exhausted: m.counter(metrics::SOURCES_EXHAUSTED),
        }
    }
}

/// Drives a [`Simulation`] one frame at a time.
pub struct SimulationHost {
    sim: Simulation,
    running: bool,
    frame_count: u64,
}

impl SimulationHost {
    /// Wraps `sim`. Hosts start paused, the same as an interactive session
    /// waiting for its first click.
    pub fn new(sim: Simulation) -> Self {
        Self {
            sim,
            running: false,
            frame_count: 0,
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            tracing::info!(tick = self.sim.tick(), "Simulation started");
        }
        self.running = true;
    }

    pub fn pause(&mut self) {
        if self.running {
            tracing::info!(tick = self.sim.tick(), "Simulation paused");
        }
        self.running = false;
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames presented so far, paused or not.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Presents one frame: steps once if running. Returns the tick report
    /// when a tick ran.
    pub fn frame(&mut self) -> Option<TickReport> {
        self.frame_count += 1;
        self.running.then(|| self.sim.step())
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        self.sim.snapshot()
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    /// Runs until `ticks` more ticks have completed, starting the host if
    /// it is paused. With `realtime`, frames are paced at the configured
    /// target FPS.
    pub fn run_for(&mut self, ticks: u64, realtime: bool) -> RunSummary {
        let frame_time = Duration::from_secs_f64(1.0 / self.sim.config().target_fps as f64);
        let started = Instant::now();
        let start_tick = self.sim.tick();
        let baseline = CounterBaseline::read(self.sim.metrics());
        self.start();

        while self.sim.tick() - start_tick < ticks {
            let frame_started = Instant::now();
            self.frame();
            if realtime {
                if let Some(rest) = frame_time.checked_sub(frame_started.elapsed()) {
                    std::thread::sleep(rest);
                }
            }
        }

        let now = CounterBaseline::read(self.sim.metrics());
        RunSummary {
            ticks: self.sim.tick() - start_tick,
            total_ticks: self.sim.tick(),
            pickups: now.pickups - baseline.pickups,
            nest_returns: now.nest_returns - baseline.nest_returns,
            sources_exhausted: now.sources_exhausted - baseline.sources_exhausted,
            elapsed_ms: started.elapsed().as_millis() as u64,
            fingerprint: self.sim.config().fingerprint(),
            stats: self.sim.stats(),
        }
    }
}
