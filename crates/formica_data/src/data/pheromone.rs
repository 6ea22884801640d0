use serde::{Deserialize, Serialize};

/// Which kind of trail a cell last received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TrailType {
    /// Laid by idle roamers. Also the tag of every untouched cell.
    #[default]
    FoodMark,
    /// Laid by agents carrying food back to the nest.
    HomeMark,
}

/// A single cell in the pheromone field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PheromoneCell {
    pub trail_type: TrailType,
    /// Never negative.
    pub strength: f32,
}

impl PheromoneCell {
    /// Multiplies the strength by `factor`, expected in `(0, 1]`.
    pub fn decay(&mut self, factor: f32) {
        self.strength *= factor;
    }

    /// Retags the cell and adds `amount`. Negative amounts add nothing.
    pub fn deposit(&mut self, trail_type: TrailType, amount: f32) {
        self.trail_type = trail_type;
        self.strength += amount.max(0.0);
    }
}
