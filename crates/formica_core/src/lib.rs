//! # Formica Core
//!
//! The simulation engine for Formica, a pheromone-trail foraging colony.
//!
//! This crate contains the deterministic simulation logic:
//! - A dense pheromone field with decay, deposit and windowed max-queries
//! - The per-agent foraging state machine
//! - Steering and toroidal integration
//! - Tick orchestration, snapshots and metrics
//!
//! ## Example
//!
//! ```
//! use formica_core::config::SimConfig;
//! use formica_core::world::Simulation;
//!
//! let mut config = SimConfig::default();
//! config.world.seed = Some(42);
//! config.world.agent_count = 50;
//!
//! let mut sim = Simulation::new(config).expect("valid config");
//! for _ in 0..10 {
//!     sim.step();
//! }
//! assert_eq!(sim.tick(), 10);
//! ```

/// Foraging state machine deciding each agent's heading
pub mod behavior;
/// Configuration management for simulation parameters
pub mod config;
/// Error types for session construction
pub mod error;
/// Performance metrics collection and logging
pub mod metrics;
/// Pheromone grid for trail communication
pub mod pheromone;
/// End-of-tick snapshots and colony statistics
pub mod snapshot;
/// Steering force and toroidal movement
pub mod steering;
/// Simulation session and tick ordering
pub mod world;

pub use config::{BehaviorMode, SimConfig};
pub use error::{Result, SimError};
pub use metrics::{init_logging, Metrics};
pub use pheromone::PheromoneField;
pub use snapshot::{ColonyStats, WorldSnapshot};
pub use steering::SteeringLogic;
pub use world::{Simulation, TickReport};
