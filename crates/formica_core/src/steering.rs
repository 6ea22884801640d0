//! Steering and integration.
//!
//! Converts an agent's desired heading into a capped velocity change, then
//! moves it across a toroidal world. Unit mass and unit timestep: the
//! steering force is applied directly as a velocity delta.

use crate::config::SteeringConfig;
use formica_data::{Agent, Vector2D};

/// Velocity delta pulling `velocity` toward `desired_direction * max_speed`,
/// capped at `steer_strength`.
#[must_use]
pub fn steering_force(
    desired_direction: Vector2D,
    velocity: Vector2D,
    config: &SteeringConfig,
) -> Vector2D {
    let desired_velocity = desired_direction * config.max_speed;
    ((desired_velocity - velocity) * config.steer_strength).clamp_magnitude(config.steer_strength)
}

/// Moves a coordinate that left `[0, extent)` to the opposite edge.
#[inline]
fn wrap_axis(value: f64, extent: f64) -> f64 {
    if value < 0.0 {
        extent - 1.0
    } else if value >= extent {
        0.0
    } else {
        value
    }
}

/// Wraps `position` onto the torus. In-bounds positions are returned as is.
#[must_use]
pub fn wrap_position(position: Vector2D, width: u32, height: u32) -> Vector2D {
    Vector2D::new(
        wrap_axis(position.x, f64::from(width)),
        wrap_axis(position.y, f64::from(height)),
    )
}

/// Movement applied to agents after their heading has been decided.
pub trait SteeringLogic {
    /// Accelerates toward the desired heading, capping speed.
    fn steer(&mut self, config: &SteeringConfig);
    /// Wraps the position into the world, then advances it by the velocity.
    fn integrate(&mut self, width: u32, height: u32);
}

impl SteeringLogic for Agent {
    fn steer(&mut self, config: &SteeringConfig) {
        let force = steering_force(self.desired_direction, self.velocity, config);
        self.velocity = (self.velocity + force).clamp_magnitude(config.max_speed);
    }

    fn integrate(&mut self, width: u32, height: u32) {
        self.position = wrap_position(self.position, width, height) + self.velocity;
    }
}
