//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! a `config.toml` file. Every section has defaults matching the classic
//! 800x600 colony, so a file only needs the values it overrides.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 400
//! height = 300
//! agent_count = 200
//! seed = 42
//!
//! [pheromone]
//! decay_rate = 0.02
//!
//! [forage]
//! behavior = "Forage"
//! ```

use crate::error::{ensure_config, Result};
use formica_data::Vector2D;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// World dimensions, population and nest placement.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u32,
    pub height: u32,
    pub agent_count: usize,
    pub food_count: usize,
    /// Units in each food source at start.
    pub food_amount: i32,
    pub nest_x: f64,
    pub nest_y: f64,
    /// Seed for the session RNG. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            agent_count: 1000,
            food_count: 100,
            food_amount: 100,
            nest_x: 400.0,
            nest_y: 300.0,
            seed: None,
        }
    }
}

/// Pheromone field parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PheromoneConfig {
    /// Fraction of strength lost per tick, in `[0, 1)`.
    pub decay_rate: f32,
    /// Half-width of the square window scanned for the strongest trail.
    pub sense_radius: i32,
}

impl Default for PheromoneConfig {
    fn default() -> Self {
        Self {
            decay_rate: 0.05,
            sense_radius: 5,
        }
    }
}

/// Which per-agent routine the orchestrator runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BehaviorMode {
    /// Seek food, carry it home, lay home trails.
    #[default]
    Forage,
    /// Wander only, tagging cells with zero-strength food marks.
    IdleRoam,
}

/// Foraging state-machine parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ForageConfig {
    pub behavior: BehaviorMode,
    pub detection_radius: f64,
    pub capture_radius: f64,
    /// Distance from the nest at which a returning agent counts as home.
    pub nest_radius: f64,
    /// Per-axis step of the random walk.
    pub wander_strength: f64,
    pub initial_trail_strength: f32,
    /// Subtracted from an agent's trail strength on every returning tick.
    pub trail_decrement: f32,
}

impl Default for ForageConfig {
    fn default() -> Self {
        Self {
            behavior: BehaviorMode::Forage,
            detection_radius: 50.0,
            capture_radius: 2.0,
            nest_radius: 2.0,
            wander_strength: 0.1,
            initial_trail_strength: 100.0,
            trail_decrement: 1.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SteeringConfig {
    pub max_speed: f64,
    pub steer_strength: f64,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            max_speed: 2.0,
            steer_strength: 2.0,
        }
    }
}

/// Complete session configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    pub world: WorldConfig,
    pub pheromone: PheromoneConfig,
    pub forage: ForageConfig,
    pub steering: SteeringConfig,
    /// Ticks between periodic summary log lines.
    pub log_interval: u64,
    /// Pacing for hosts that run in real time.
    pub target_fps: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            pheromone: PheromoneConfig::default(),
            forage: ForageConfig::default(),
            steering: SteeringConfig::default(),
            log_interval: 1000,
            target_fps: 60,
        }
    }
}

/// Largest pheromone grid a session may allocate, in cells.
pub const MAX_GRID_CELLS: u64 = 1 << 26;

/// Largest sensing half-width; the window scan is `(2r + 1)^2` cells per agent.
pub const MAX_SENSE_RADIUS: i32 = 64;

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

impl SimConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns the first violation found as `SimError::InvalidConfig`.
    pub fn validate(&self) -> Result<()> {
        let w = &self.world;
        ensure_config!(w.width > 0, "World width must be positive");
        ensure_config!(w.height > 0, "World height must be positive");
        ensure_config!(
            u64::from(w.width)
                .checked_mul(u64::from(w.height))
                .is_some_and(|cells| cells <= MAX_GRID_CELLS),
            "World {}x{} exceeds the {} cell grid limit",
            w.width,
            w.height,
            MAX_GRID_CELLS
        );
        ensure_config!(
            w.food_count == 0 || w.food_amount > 0,
            "Food amount must be positive when food sources are placed"
        );
        ensure_config!(
            w.nest_x.is_finite()
                && w.nest_y.is_finite()
                && w.nest_x >= 0.0
                && w.nest_y >= 0.0
                && w.nest_x < f64::from(w.width)
                && w.nest_y < f64::from(w.height),
            "Nest ({}, {}) must lie inside the {}x{} world",
            w.nest_x,
            w.nest_y,
            w.width,
            w.height
        );

        let p = &self.pheromone;
        ensure_config!(
            p.decay_rate.is_finite() && (0.0..1.0).contains(&p.decay_rate),
            "Pheromone decay rate must be in [0.0, 1.0)"
        );
        ensure_config!(p.sense_radius >= 0, "Sense radius must be non-negative");
        ensure_config!(
            p.sense_radius <= MAX_SENSE_RADIUS,
            "Sense radius too large (max {})",
            MAX_SENSE_RADIUS
        );

        let f = &self.forage;
        ensure_config!(
            non_negative(f.detection_radius),
            "Detection radius must be non-negative"
        );
        ensure_config!(
            non_negative(f.capture_radius),
            "Capture radius must be non-negative"
        );
        ensure_config!(non_negative(f.nest_radius), "Nest radius must be non-negative");
        ensure_config!(
            non_negative(f.wander_strength),
            "Wander strength must be non-negative"
        );
        ensure_config!(
            f.initial_trail_strength.is_finite() && f.initial_trail_strength >= 0.0,
            "Initial trail strength must be non-negative"
        );
        ensure_config!(
            f.trail_decrement.is_finite() && f.trail_decrement >= 0.0,
            "Trail decrement must be non-negative"
        );

        let s = &self.steering;
        ensure_config!(non_negative(s.max_speed), "Max speed must be non-negative");
        ensure_config!(
            non_negative(s.steer_strength),
            "Steer strength must be non-negative"
        );

        ensure_config!(self.log_interval > 0, "Log interval must be positive");
        ensure_config!(self.target_fps > 0, "Target FPS must be positive");
        ensure_config!(self.target_fps <= 240, "Target FPS too high (max 240)");

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    #[must_use]
    pub fn nest(&self) -> Vector2D {
        Vector2D::new(self.world.nest_x, self.world.nest_y)
    }

    /// Stable hash of every parameter that affects simulation results.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.pheromone).as_bytes());
        hasher.update(format!("{:?}", self.forage).as_bytes());
        hasher.update(format!("{:?}", self.steering).as_bytes());
        hex::encode(hasher.finalize())
    }
}
