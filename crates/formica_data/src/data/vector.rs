//! 2D vector math used by every other part of the simulation.
//!
//! All operations are total: zero-length normalization and division by zero
//! return the input unchanged instead of producing NaN or infinity.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Immutable 2D vector in world space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction. The zero vector is returned as is.
    #[must_use]
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            return self;
        }
        Self::new(self.x / mag, self.y / mag)
    }

    /// Scales the vector down to exactly `max` if it is longer than `max`.
    #[must_use]
    pub fn clamp_magnitude(self, max: f64) -> Self {
        let mag = self.magnitude();
        if mag > max {
            self.scale(max / mag)
        } else {
            self
        }
    }

    #[must_use]
    pub fn scale(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Component-wise division. Dividing by zero returns `self`.
    #[must_use]
    pub fn divide(self, scalar: f64) -> Self {
        if scalar == 0.0 {
            return self;
        }
        Self::new(self.x / scalar, self.y / scalar)
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Truncates both components toward zero, giving the grid cell the
    /// point falls in.
    #[must_use]
    pub fn cell(self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl From<(i32, i32)> for Vector2D {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}
