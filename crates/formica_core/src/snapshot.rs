//! End-of-tick views handed to hosts and renderers.

use crate::pheromone::PheromoneField;
use formica_data::{Agent, AgentState, FoodSource, Vector2D};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Aggregate colony figures.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ColonyStats {
    pub seeking: usize,
    pub returning: usize,
    pub carrying: usize,
    pub food_sources_left: usize,
    pub food_units_left: i64,
    pub total_trail_strength: f64,
    /// Cells above the visibility threshold used by renderers.
    pub active_cells: usize,
}

impl ColonyStats {
    /// Strength below which a cell is treated as empty for display.
    pub const ACTIVE_THRESHOLD: f32 = 0.01;

    #[must_use]
    pub fn collect(agents: &[Agent], food: &[FoodSource], field: &PheromoneField) -> Self {
        let returning = agents
            .iter()
            .filter(|a| a.state == AgentState::ReturningHome)
            .count();
        let live_food = food.iter().filter(|f| f.exists);
        Self {
            seeking: agents.len() - returning,
            returning,
            carrying: agents.iter().filter(|a| a.carrying_food).count(),
            food_sources_left: live_food.clone().count(),
            food_units_left: live_food.map(|f| i64::from(f.amount)).sum(),
            total_trail_strength: field.total_strength(),
            active_cells: field.active_cells(Self::ACTIVE_THRESHOLD),
        }
    }
}

/// A consistent copy of the simulation between two ticks.
///
/// The field is shared, not copied; the simulation clones it on its next
/// write, so a snapshot never observes a later tick.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub width: u32,
    pub height: u32,
    pub nest: Vector2D,
    pub agents: Vec<Agent>,
    pub food: Vec<FoodSource>,
    pub pheromones: Arc<PheromoneField>,
    pub stats: ColonyStats,
}
