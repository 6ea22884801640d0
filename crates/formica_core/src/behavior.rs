//! Per-agent foraging state machine.
//!
//! Each tick an agent picks a desired heading from what it senses and, as a
//! side effect, may pick up food or lay a home trail. Steering and movement
//! happen afterwards in [`crate::steering`].

use crate::config::ForageConfig;
use crate::pheromone::PheromoneField;
use formica_data::{Agent, AgentState, FoodSource, TrailType, Vector2D};
use rand::Rng;

/// Read-only parameters the state machine needs.
#[derive(Debug, Clone, Copy)]
pub struct ForageContext<'a> {
    pub forage: &'a ForageConfig,
    pub sense_radius: i32,
    pub nest: Vector2D,
}

/// A state transition worth counting or logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorEvent {
    /// Took one unit from `source`; `exhausted` if it was the last one.
    FoodPickedUp { source: usize, exhausted: bool },
    /// Arrived at the nest and went back to searching.
    ReachedNest,
}

/// Distance between the grid cells two points fall in.
fn cell_distance(a: (i32, i32), b: (i32, i32)) -> f64 {
    Vector2D::from(a).distance(Vector2D::from(b))
}

/// Index of the first existing food source closer than `radius` to
/// `position`'s cell, scanning in index order.
#[must_use]
pub fn food_nearby(position: Vector2D, food: &[FoodSource], radius: f64) -> Option<usize> {
    let cell = position.cell();
    food.iter().position(|f| f.exists && cell_distance(cell, (f.x, f.y)) < radius)
}

/// Nudges `desired` by `{-1, 0, 1} * strength` per axis and renormalizes.
#[must_use]
pub fn wander<R: Rng + ?Sized>(desired: Vector2D, strength: f64, rng: &mut R) -> Vector2D {
    let jitter = Vector2D::new(
        f64::from(rng.gen_range(-1..=1)) * strength,
        f64::from(rng.gen_range(-1..=1)) * strength,
    );
    (desired + jitter).normalize()
}

/// Runs one tick of the foraging state machine for `agent`.
///
/// Deposits go straight into `field`, so agents updated later in the same
/// tick already sense them.
pub fn update_state<R: Rng + ?Sized>(
    agent: &mut Agent,
    field: &mut PheromoneField,
    food: &mut [FoodSource],
    ctx: &ForageContext<'_>,
    rng: &mut R,
) -> Option<BehaviorEvent> {
    match agent.state {
        AgentState::SeekingFood => seek_food(agent, field, food, ctx, rng),
        AgentState::ReturningHome => return_home(agent, field, ctx),
    }
}

fn seek_food<R: Rng + ?Sized>(
    agent: &mut Agent,
    field: &PheromoneField,
    food: &mut [FoodSource],
    ctx: &ForageContext<'_>,
    rng: &mut R,
) -> Option<BehaviorEvent> {
    let offset = field.strongest_in_window(
        agent.position,
        ctx.sense_radius,
        Some(TrailType::HomeMark),
    );
    if offset != (0, 0) {
        agent.desired_direction = Vector2D::from(offset).normalize();
    } else {
        agent.desired_direction =
            wander(agent.desired_direction, ctx.forage.wander_strength, rng);
    }

    let source = food_nearby(agent.position, food, ctx.forage.detection_radius)?;
    let target = &mut food[source];
    let target_pos = Vector2D::from((target.x, target.y));
    agent.desired_direction = (target_pos - agent.position).normalize();

    if cell_distance(agent.position.cell(), (target.x, target.y)) < ctx.forage.capture_radius {
        agent.carrying_food = true;
        let exhausted = target.take_one();
        agent.state = AgentState::ReturningHome;
        tracing::debug!(
            source,
            remaining = target.amount,
            exhausted,
            "Agent picked up food"
        );
        return Some(BehaviorEvent::FoodPickedUp { source, exhausted });
    }
    None
}

fn return_home(
    agent: &mut Agent,
    field: &mut PheromoneField,
    ctx: &ForageContext<'_>,
) -> Option<BehaviorEvent> {
    let (cx, cy) = agent.position.cell();
    field.deposit(cx, cy, TrailType::HomeMark, agent.trail_strength);
    agent.trail_strength -= ctx.forage.trail_decrement;

    agent.desired_direction = (ctx.nest - agent.position).normalize();

    if cell_distance(agent.position.cell(), ctx.nest.cell()) < ctx.forage.nest_radius {
        agent.state = AgentState::SeekingFood;
        agent.trail_strength = ctx.forage.initial_trail_strength;
        tracing::debug!(x = agent.position.x, y = agent.position.y, "Agent reached nest");
        return Some(BehaviorEvent::ReachedNest);
    }
    None
}

/// Heading update for [`crate::config::BehaviorMode::IdleRoam`].
///
/// Pure random walk that tags the agent's cell with a zero-strength food
/// mark. Never changes the agent's state.
pub fn idle_roam<R: Rng + ?Sized>(
    agent: &mut Agent,
    field: &mut PheromoneField,
    wander_strength: f64,
    rng: &mut R,
) {
    agent.desired_direction = wander(agent.desired_direction, wander_strength, rng);
    let (cx, cy) = agent.position.cell();
    field.deposit(cx, cy, TrailType::FoodMark, 0.0);
}
