use serde::{Deserialize, Serialize};

/// A finite pile of food at a fixed grid position.
///
/// Once `exists` turns false it never turns back; sources do not respawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodSource {
    pub x: i32,
    pub y: i32,
    /// Units left. Each pickup removes one.
    pub amount: i32,
    pub exists: bool,
}

impl FoodSource {
    #[must_use]
    pub fn new(x: i32, y: i32, amount: i32) -> Self {
        Self {
            x,
            y,
            amount,
            exists: amount > 0,
        }
    }

    /// Removes one unit. Returns `true` if this emptied the source.
    pub fn take_one(&mut self) -> bool {
        self.amount -= 1;
        if self.amount <= 0 && self.exists {
            self.exists = false;
            return true;
        }
        false
    }
}
