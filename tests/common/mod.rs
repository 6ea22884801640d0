pub mod macros;

use formica_core::config::SimConfig;
use formica_core::world::Simulation;
use formica_data::{Agent, AgentState, FoodSource, Vector2D};

#[allow(dead_code)]
pub struct WorldBuilder {
    config: SimConfig,
    agents: Vec<Agent>,
    food: Vec<FoodSource>,
}

#[allow(dead_code)]
impl WorldBuilder {
    /// 100x100 world with the nest in the middle, no agents and no food.
    pub fn new() -> Self {
        let mut config = SimConfig::default();
        config.world.width = 100;
        config.world.height = 100;
        config.world.nest_x = 50.0;
        config.world.nest_y = 50.0;
        config.world.agent_count = 0;
        config.world.food_count = 0;
        config.world.seed = Some(0);
        Self {
            config,
            agents: Vec::new(),
            food: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn with_food(mut self, x: i32, y: i32, amount: i32) -> Self {
        self.food.push(FoodSource::new(x, y, amount));
        self
    }

    pub fn build(self) -> Simulation {
        Simulation::with_population(self.config, self.agents, self.food)
            .expect("Failed to create simulation in test builder")
    }
}

#[allow(dead_code)]
pub struct AgentBuilder {
    position: Vector2D,
    velocity: Vector2D,
    desired: Vector2D,
    state: AgentState,
    trail_strength: f32,
    carrying_food: bool,
}

#[allow(dead_code)]
impl AgentBuilder {
    pub fn new() -> Self {
        Self {
            position: Vector2D::new(10.0, 10.0),
            velocity: Vector2D::ZERO,
            desired: Vector2D::ZERO,
            state: AgentState::SeekingFood,
            trail_strength: 100.0,
            carrying_food: false,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Vector2D::new(x, y);
        self
    }

    pub fn moving(mut self, vx: f64, vy: f64) -> Self {
        self.velocity = Vector2D::new(vx, vy);
        self
    }

    pub fn heading(mut self, x: f64, y: f64) -> Self {
        self.desired = Vector2D::new(x, y);
        self
    }

    pub fn returning(mut self) -> Self {
        self.state = AgentState::ReturningHome;
        self.carrying_food = true;
        self
    }

    pub fn with_trail_strength(mut self, strength: f32) -> Self {
        self.trail_strength = strength;
        self
    }

    pub fn build(self) -> Agent {
        let mut agent = Agent::new(self.position, self.velocity, self.trail_strength);
        agent.desired_direction = self.desired;
        agent.state = self.state;
        agent.carrying_food = self.carrying_food;
        agent
    }
}
