use super::vector::Vector2D;
use serde::{Deserialize, Serialize};

/// Foraging state of an agent.
///
/// Only the two live states are modeled. Richer behaviors (dedicated wander,
/// pheromone-follow or empty-handed return phases) would be added here as new
/// variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AgentState {
    /// Searching for food, following home trails when any are sensed.
    #[default]
    SeekingFood,
    /// Heading straight for the nest while laying a home trail.
    ReturningHome,
}

/// A single forager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// World position. Wrapped into the world bounds before each move.
    pub position: Vector2D,
    /// Current velocity, never longer than the configured max speed.
    pub velocity: Vector2D,
    /// Heading accumulator written by the behavior layer.
    pub desired_direction: Vector2D,
    /// Set on pickup. Nothing in the simulation reads or clears it.
    pub carrying_food: bool,
    pub state: AgentState,
    /// Strength of the next home-trail deposit. Not floored at zero.
    pub trail_strength: f32,
}

impl Agent {
    #[must_use]
    pub fn new(position: Vector2D, velocity: Vector2D, trail_strength: f32) -> Self {
        Self {
            position,
            velocity,
            desired_direction: Vector2D::ZERO,
            carrying_food: false,
            state: AgentState::SeekingFood,
            trail_strength,
        }
    }

    #[must_use]
    pub fn is_returning(&self) -> bool {
        self.state == AgentState::ReturningHome
    }
}
