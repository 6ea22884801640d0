use anyhow::{Context, Result};
use clap::Parser;
use formica_core::{BehaviorMode, SimConfig, Simulation};
use formica_lib::SimulationHost;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path. Built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 1000)]
    ticks: u64,

    /// RNG seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Override the number of agents
    #[arg(long)]
    agents: Option<usize>,

    /// Override the number of food sources
    #[arg(long)]
    food: Option<usize>,

    /// Agent behavior
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Pace ticks at the configured target FPS
    #[arg(long)]
    realtime: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Forage,
    IdleRoam,
}

impl From<Mode> for BehaviorMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Forage => BehaviorMode::Forage,
            Mode::IdleRoam => BehaviorMode::IdleRoam,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    formica_core::init_logging();

    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }
    if let Some(agents) = args.agents {
        config.world.agent_count = agents;
    }
    if let Some(food) = args.food {
        config.world.food_count = food;
    }
    if let Some(mode) = args.mode {
        config.forage.behavior = mode.into();
    }

    let sim = Simulation::new(config).context("building simulation")?;
    let mut host = SimulationHost::new(sim);
    let summary = host.run_for(args.ticks, args.realtime);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}
