mod common;

use common::{AgentBuilder, WorldBuilder};
use formica_core::steering::wrap_position;
use formica_data::{AgentState, TrailType, Vector2D};

#[test]
fn test_lone_agent_without_food_keeps_seeking() {
    let mut sim = WorldBuilder::new()
        .with_seed(7)
        .with_agent(AgentBuilder::new().at(3.0, 97.0).moving(-1.0, 1.0).build())
        .build();
    let (width, height) = (100, 100);
    let max_speed = sim.config().steering.max_speed;

    for _ in 0..1000 {
        sim.step();
        let agent = &sim.agents()[0];
        assert_eq!(agent.state, AgentState::SeekingFood);
        assert!(!agent.carrying_food);
        // The next move starts from the wrapped position.
        assert_in_bounds!(wrap_position(agent.position, width, height), width, height);
        assert!(agent.position.x >= -max_speed && agent.position.x < width as f64 + max_speed);
        assert!(agent.position.y >= -max_speed && agent.position.y < height as f64 + max_speed);
    }
    assert_eq!(sim.tick(), 1000);
    assert_eq!(sim.pheromones().total_strength(), 0.0);
}

#[test]
fn test_agent_next_to_food_picks_it_up() {
    let mut sim = WorldBuilder::new()
        .with_food(20, 20, 100)
        .with_agent(AgentBuilder::new().at(20.0, 21.0).build())
        .build();

    let report = sim.step();

    let agent = &sim.agents()[0];
    assert!(agent.carrying_food);
    assert_eq!(agent.state, AgentState::ReturningHome);
    assert_eq!(sim.food()[0].amount, 99);
    assert!(sim.food()[0].exists);
    assert_eq!(report.pickups, 1);
    assert!(report.exhausted.is_empty());
}

#[test]
fn test_returning_agent_at_nest_resets() {
    let mut sim = WorldBuilder::new()
        .with_agent(AgentBuilder::new().at(50.0, 50.0).returning().build())
        .build();

    let report = sim.step();

    let agent = &sim.agents()[0];
    assert_eq!(agent.state, AgentState::SeekingFood);
    assert_eq!(agent.trail_strength, 100.0);
    assert_eq!(report.nest_returns, 1);
    let cell = sim.pheromones().cell(50, 50).unwrap();
    assert_eq!(cell.trail_type, TrailType::HomeMark);
    assert_eq!(cell.strength, 100.0);
}

#[test]
fn test_trail_decays_over_three_ticks() {
    let mut sim = WorldBuilder::new().build();
    sim.pheromones_mut().deposit(5, 5, TrailType::HomeMark, 10.0);

    for _ in 0..3 {
        sim.step();
    }

    let strength = sim.pheromones().cell(5, 5).unwrap().strength;
    assert_close!(strength, 8.573_75_f32, 1e-4);
}

#[test]
fn test_last_unit_is_taken_once() {
    let mut sim = WorldBuilder::new()
        .with_food(20, 20, 1)
        .with_agent(AgentBuilder::new().at(20.0, 21.0).build())
        .with_agent(AgentBuilder::new().at(21.0, 20.0).build())
        .build();

    let report = sim.step();

    assert_eq!(report.pickups, 1);
    assert_eq!(report.exhausted, vec![0]);
    assert_eq!(sim.food()[0].amount, 0);
    assert!(!sim.food()[0].exists);
    assert!(sim.agents()[0].carrying_food);
    assert!(!sim.agents()[1].carrying_food);
    assert_eq!(sim.agents()[1].state, AgentState::SeekingFood);

    for _ in 0..20 {
        assert_eq!(sim.step().pickups, 0);
    }
    assert_eq!(sim.food()[0].amount, 0);
}

#[test]
fn test_wraps_once_per_tick() {
    let mut sim = WorldBuilder::new()
        .with_config(|c| c.forage.wander_strength = 0.0)
        .with_agent(
            AgentBuilder::new()
                .at(-1.0, 10.0)
                .moving(-2.0, 0.0)
                .heading(-1.0, 0.0)
                .build(),
        )
        .with_agent(
            AgentBuilder::new()
                .at(100.0, 10.0)
                .moving(2.0, 0.0)
                .heading(1.0, 0.0)
                .build(),
        )
        .build();

    sim.step();

    assert_eq!(sim.agents()[0].position, Vector2D::new(97.0, 10.0));
    assert_eq!(sim.agents()[1].position, Vector2D::new(2.0, 10.0));
}

#[test]
fn test_later_agent_senses_same_tick_deposit() {
    let mut sim = WorldBuilder::new()
        .with_config(|c| c.forage.wander_strength = 0.0)
        .with_agent(AgentBuilder::new().at(30.0, 30.0).returning().build())
        .with_agent(AgentBuilder::new().at(33.0, 30.0).heading(0.0, 1.0).build())
        .build();

    sim.step();

    assert_eq!(sim.agents()[1].desired_direction, Vector2D::new(-1.0, 0.0));
}

#[test]
fn test_earlier_agent_misses_same_tick_deposit() {
    let mut sim = WorldBuilder::new()
        .with_config(|c| c.forage.wander_strength = 0.0)
        .with_agent(AgentBuilder::new().at(33.0, 30.0).heading(0.0, 1.0).build())
        .with_agent(AgentBuilder::new().at(30.0, 30.0).returning().build())
        .build();

    sim.step();

    assert_eq!(sim.agents()[0].desired_direction, Vector2D::new(0.0, 1.0));
}

#[test]
fn test_carry_flag_does_not_gate_pickup() {
    let mut sim = WorldBuilder::new()
        .with_food(51, 50, 100)
        .with_agent(AgentBuilder::new().at(50.0, 50.0).returning().build())
        .build();

    let first = sim.step();
    assert_eq!(first.nest_returns, 1);
    assert!(sim.agents()[0].carrying_food);
    assert_eq!(sim.agents()[0].state, AgentState::SeekingFood);

    let second = sim.step();
    assert_eq!(second.pickups, 1);
    assert!(sim.agents()[0].carrying_food);
    assert_eq!(sim.agents()[0].state, AgentState::ReturningHome);
    assert_eq!(sim.food()[0].amount, 99);
}

#[test]
fn test_colony_brings_food_home() {
    let mut builder = WorldBuilder::new().with_seed(11).with_food(60, 50, 500);
    for i in 0..30 {
        let x = 20.0 + (i % 6) as f64 * 10.0;
        let y = 20.0 + (i / 6) as f64 * 12.0;
        builder = builder.with_agent(AgentBuilder::new().at(x, y).build());
    }
    let mut sim = builder.build();

    let mut pickups = 0u64;
    let mut returns = 0u64;
    for _ in 0..1000 {
        let report = sim.step();
        pickups += u64::from(report.pickups);
        returns += u64::from(report.nest_returns);
    }

    assert!(pickups > 0, "No agent ever reached the food");
    assert!(returns > 0, "No agent ever made it back to the nest");
    assert_eq!(i64::from(sim.food()[0].amount), 500 - pickups as i64);
    assert_eq!(
        sim.metrics().counter(formica_core::metrics::FOOD_PICKUPS),
        pickups
    );
    assert!(sim.pheromones().total_strength() > 0.0);
}
