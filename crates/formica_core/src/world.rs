//! Simulation session and tick orchestration.
//!
//! A tick decays the whole pheromone field once, then walks every agent in
//! index order: sense, decide, deposit, steer, move. Agents later in the
//! order see deposits made earlier in the same tick.

use crate::behavior::{self, BehaviorEvent, ForageContext};
use crate::config::{BehaviorMode, SimConfig};
use crate::error::Result;
use crate::metrics::{self, Metrics};
use crate::pheromone::PheromoneField;
use crate::snapshot::{ColonyStats, WorldSnapshot};
use crate::steering::SteeringLogic;
use formica_data::{Agent, FoodSource, Vector2D};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// What happened during one tick.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Tick number just completed, starting at 1.
    pub tick: u64,
    pub pickups: u32,
    pub nest_returns: u32,
    /// Indices of food sources emptied this tick.
    pub exhausted: Vec<usize>,
}

/// A running colony.
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    tick: u64,
    agents: Vec<Agent>,
    food: Vec<FoodSource>,
    pheromones: Arc<PheromoneField>,
    rng: ChaCha8Rng,
    metrics: Metrics,
}

impl Simulation {
    /// Validates `config` and populates the world with randomly placed agents
    /// and food sources.
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let (width, height) = (config.world.width, config.world.height);
        let agents = (0..config.world.agent_count)
            .map(|_| {
                let position = Vector2D::new(
                    f64::from(rng.gen_range(0..width)),
                    f64::from(rng.gen_range(0..height)),
                );
                let velocity = Vector2D::new(
                    f64::from(rng.gen_range(-1..=1)),
                    f64::from(rng.gen_range(-1..=1)),
                );
                Agent::new(position, velocity, config.forage.initial_trail_strength)
            })
            .collect();
        let food = (0..config.world.food_count)
            .map(|_| {
                FoodSource::new(
                    rng.gen_range(0..width) as i32,
                    rng.gen_range(0..height) as i32,
                    config.world.food_amount,
                )
            })
            .collect();

        Self::assemble(config, agents, food, rng)
    }

    /// Builds a session with caller-placed agents and food, ignoring the
    /// configured counts.
    pub fn with_population(
        config: SimConfig,
        agents: Vec<Agent>,
        food: Vec<FoodSource>,
    ) -> Result<Self> {
        config.validate()?;
        let rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::assemble(config, agents, food, rng)
    }

    fn assemble(
        config: SimConfig,
        agents: Vec<Agent>,
        food: Vec<FoodSource>,
        rng: ChaCha8Rng,
    ) -> Result<Self> {
        let pheromones = PheromoneField::new(
            config.world.width,
            config.world.height,
            config.pheromone.decay_rate,
        );
        tracing::info!(
            width = config.world.width,
            height = config.world.height,
            agents = agents.len(),
            food_sources = food.len(),
            fingerprint = %config.fingerprint(),
            "Simulation initialized"
        );
        Ok(Self {
            config,
            tick: 0,
            agents,
            food,
            pheromones: Arc::new(pheromones),
            rng,
            metrics: Metrics::new(),
        })
    }

    /// Advances one tick using the session RNG.
    pub fn step(&mut self) -> TickReport {
        let started = Instant::now();
        let mut report = TickReport::default();
        run_tick(
            &self.config,
            &mut self.agents,
            &mut self.food,
            Arc::make_mut(&mut self.pheromones),
            &mut self.rng,
            &mut report,
        );
        self.finish_tick(started, report)
    }

    /// Advances one tick drawing randomness from `rng` instead of the
    /// session RNG.
    pub fn step_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickReport {
        let started = Instant::now();
        let mut report = TickReport::default();
        run_tick(
            &self.config,
            &mut self.agents,
            &mut self.food,
            Arc::make_mut(&mut self.pheromones),
            rng,
            &mut report,
        );
        self.finish_tick(started, report)
    }

    fn finish_tick(&mut self, started: Instant, mut report: TickReport) -> TickReport {
        self.tick += 1;
        report.tick = self.tick;

        self.metrics.record_tick(started.elapsed());
        self.metrics
            .add_to_counter(metrics::FOOD_PICKUPS, u64::from(report.pickups));
        self.metrics
            .add_to_counter(metrics::NEST_RETURNS, u64::from(report.nest_returns));
        self.metrics
            .add_to_counter(metrics::SOURCES_EXHAUSTED, report.exhausted.len() as u64);

        for &source in &report.exhausted {
            let f = &self.food[source];
            tracing::info!(tick = self.tick, source, x = f.x, y = f.y, "Food source exhausted");
        }

        if self.tick % self.config.log_interval == 0 {
            let stats = self.stats();
            tracing::info!(
                tick = self.tick,
                seeking = stats.seeking,
                returning = stats.returning,
                food_units_left = stats.food_units_left,
                active_cells = stats.active_cells,
                duration_us = self.metrics.last_tick_duration().as_micros() as u64,
                "Simulation tick"
            );
        }
        report
    }

    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Mutable access for scenario setup between ticks.
    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    #[must_use]
    pub fn food(&self) -> &[FoodSource] {
        &self.food
    }

    pub fn food_mut(&mut self) -> &mut [FoodSource] {
        &mut self.food
    }

    #[must_use]
    pub fn pheromones(&self) -> &PheromoneField {
        &self.pheromones
    }

    pub fn pheromones_mut(&mut self) -> &mut PheromoneField {
        Arc::make_mut(&mut self.pheromones)
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    #[must_use]
    pub fn stats(&self) -> ColonyStats {
        ColonyStats::collect(&self.agents, &self.food, &self.pheromones)
    }

    /// Consistent end-of-tick copy for renderers.
    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            width: self.config.world.width,
            height: self.config.world.height,
            nest: self.config.nest(),
            agents: self.agents.clone(),
            food: self.food.clone(),
            pheromones: Arc::clone(&self.pheromones),
            stats: self.stats(),
        }
    }
}

fn run_tick<R: Rng + ?Sized>(
    config: &SimConfig,
    agents: &mut [Agent],
    food: &mut [FoodSource],
    field: &mut PheromoneField,
    rng: &mut R,
    report: &mut TickReport,
) {
    field.decay_all();

    let ctx = ForageContext {
        forage: &config.forage,
        sense_radius: config.pheromone.sense_radius,
        nest: config.nest(),
    };
    let (width, height) = (config.world.width, config.world.height);

    for agent in agents.iter_mut() {
        match config.forage.behavior {
            BehaviorMode::Forage => {
                match behavior::update_state(agent, field, food, &ctx, rng) {
                    Some(BehaviorEvent::FoodPickedUp { source, exhausted }) => {
                        report.pickups += 1;
                        if exhausted {
                            report.exhausted.push(source);
                        }
                    }
                    Some(BehaviorEvent::ReachedNest) => report.nest_returns += 1,
                    None => {}
                }
            }
            BehaviorMode::IdleRoam => {
                behavior::idle_roam(agent, field, config.forage.wander_strength, rng);
            }
        }
        agent.steer(&config.steering);
        agent.integrate(width, height);
    }
}
