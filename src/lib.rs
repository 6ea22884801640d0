//! Formica: a pheromone-trail foraging colony.
//!
//! The simulation engine lives in `formica_core`; this crate adds the host
//! that owns the start/pause signal and drives headless runs.

pub mod app;

pub use formica_core as core;
pub use formica_data as data;

pub use app::{RunSummary, SimulationHost};
