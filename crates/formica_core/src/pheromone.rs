//! Pheromone field: the shared trail memory agents read and write.
//!
//! One cell per integer world coordinate, stored row-major. Trails decay
//! multiplicatively once per tick and accumulate additively on deposit; there
//! is no spreading between neighboring cells.

use formica_data::{PheromoneCell, TrailType, Vector2D};
use serde::{Deserialize, Serialize};

/// A request to deposit pheromone at a location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PheromoneDeposit {
    pub x: i32,
    pub y: i32,
    pub trail_type: TrailType,
    pub amount: f32,
}

/// Grid-based pheromone map for the world.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PheromoneField {
    cells: Vec<PheromoneCell>,
    width: u32,
    height: u32,
    /// Fraction of strength lost per tick.
    decay_rate: f32,
}

impl PheromoneField {
    #[must_use]
    pub fn new(width: u32, height: u32, decay_rate: f32) -> Self {
        Self {
            cells: vec![PheromoneCell::default(); width as usize * height as usize],
            width,
            height,
            decay_rate,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn decay_rate(&self) -> f32 {
        self.decay_rate
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Multiplies every cell by `1 - decay_rate`. Call once per tick.
    pub fn decay_all(&mut self) {
        let factor = 1.0 - self.decay_rate;
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.cells.par_iter_mut().for_each(|cell| cell.decay(factor));
        }
        #[cfg(not(feature = "parallel"))]
        for cell in &mut self.cells {
            cell.decay(factor);
        }
    }

    /// Retags the cell at `(x, y)` and adds `amount` to it.
    ///
    /// Coordinates outside the grid are ignored.
    pub fn deposit(&mut self, x: i32, y: i32, trail_type: TrailType, amount: f32) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx].deposit(trail_type, amount);
        }
    }

    pub fn apply(&mut self, deposit: PheromoneDeposit) {
        self.deposit(deposit.x, deposit.y, deposit.trail_type, deposit.amount);
    }

    /// Offset from `center`'s cell to the strongest cell within `radius`.
    ///
    /// Scans `dx` ascending, then `dy` ascending, and keeps the first cell
    /// whose strength strictly beats everything seen so far. With a `filter`,
    /// only cells tagged with that trail type are considered. Returns `(0, 0)`
    /// when nothing in range has positive strength.
    #[must_use]
    pub fn strongest_in_window(
        &self,
        center: Vector2D,
        radius: i32,
        filter: Option<TrailType>,
    ) -> (i32, i32) {
        let (cx, cy) = center.cell();
        let mut best = (0, 0);
        let mut max_strength = 0.0f32;

        for dx in -radius..=radius {
            for dy in -radius..=radius {
                let Some(idx) = self.index(cx.saturating_add(dx), cy.saturating_add(dy)) else {
                    continue;
                };
                let cell = &self.cells[idx];
                if filter.is_some_and(|t| t != cell.trail_type) {
                    continue;
                }
                if cell.strength > max_strength {
                    max_strength = cell.strength;
                    best = (dx, dy);
                }
            }
        }
        best
    }

    /// Cell at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<&PheromoneCell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[PheromoneCell] {
        &self.cells
    }

    #[must_use]
    pub fn total_strength(&self) -> f64 {
        self.cells.iter().map(|c| f64::from(c.strength)).sum()
    }

    /// Number of cells stronger than `threshold`.
    #[must_use]
    pub fn active_cells(&self, threshold: f32) -> usize {
        self.cells.iter().filter(|c| c.strength > threshold).count()
    }
}
