use anyhow::Context;
use clap::Parser;
use rally_core::{Difficulty, GameMode, MatchSetup, Side};
use rally_sim::{MatchSim, SimConfig, SimParams};
use std::path::PathBuf;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless pickleball match simulation", long_about = None)]
struct Args {
    /// RNG seed for the paddle AI
    #[arg(long, default_value_t = SimParams::DEFAULT_SEED)]
    seed: u64,
    /// training | competition
    #[arg(long, default_value = "competition")]
    mode: GameMode,
    /// Left difficulty: easy | medium | hard
    #[arg(long, default_value = "medium")]
    left: Difficulty,
    /// Right difficulty: easy | medium | hard
    #[arg(long, default_value = "medium")]
    right: Difficulty,
    #[arg(long)]
    left_name: Option<String>,
    #[arg(long)]
    right_name: Option<String>,
    /// RON file with simulation and rally tuning
    #[arg(long)]
    config: Option<PathBuf>,
    /// Stop after this much simulated time even without a winner
    #[arg(long, default_value_t = 600.0)]
    max_seconds: f32,
    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimConfig::load_from_file(path)?,
        None => SimConfig::default(),
    };
    for warning in config.validate() {
        tracing::warn!("config: {warning}");
    }

    let mut setup = MatchSetup {
        mode: args.mode,
        left_difficulty: args.left,
        right_difficulty: args.right,
        ..MatchSetup::default()
    };
    if let Some(name) = &args.left_name {
        setup.set_name(Side::Left, name);
    }
    if let Some(name) = &args.right_name {
        setup.set_name(Side::Right, name);
    }

    tracing::info!(seed = args.seed, mode = %setup.mode, "starting match");
    let mut sim = MatchSim::new(config, setup, args.seed);
    let result = sim.run(args.max_seconds);

    if args.json {
        let text = serde_json::to_string_pretty(&result).context("serialize match result")?;
        println!("{text}");
    } else {
        print!("{result}");
    }
    Ok(())
}
