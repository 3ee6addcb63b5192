//! Batch runner: plays a number of MCTS-vs-MCTS games and prints the tally

use anyhow::Result;
use clap::Parser;
use othello_core::Color;
use othello_mcts::{MctsConfig, SearchPolicy};
use othello_selfplay::play_match;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    games: usize,

    /// Search policy for Black (naive or smart)
    #[arg(long, default_value_t = SearchPolicy::Smart)]
    black_policy: SearchPolicy,

    /// Search policy for White (naive or smart)
    #[arg(long, default_value_t = SearchPolicy::Naive)]
    white_policy: SearchPolicy,

    /// Think time per move for Black in milliseconds
    #[arg(long, default_value_t = 2000)]
    black_ms: u64,

    /// Think time per move for White in milliseconds
    #[arg(long, default_value_t = 1000)]
    white_ms: u64,

    /// Simulation ceiling per move
    #[arg(short, long, default_value_t = 200_000)]
    simulations: u32,

    /// UCT exploration constant
    #[arg(long, default_value_t = std::f64::consts::SQRT_2)]
    exploration: f64,

    /// Seed for the rollout RNG
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    fn config_for(&self, color: Color) -> MctsConfig {
        let (policy, ms) = match color {
            Color::Black => (self.black_policy, self.black_ms),
            Color::White => (self.white_policy, self.white_ms),
        };
        let config = MctsConfig::default()
            .with_policy(policy)
            .with_color_time_budget_ms(color, ms)
            .with_simulation_ceiling(self.simulations)
            .with_exploration(self.exploration);
        match self.seed {
            // distinct streams for the two sides
            Some(seed) => config.with_seed(seed.wrapping_add(color.index() as u64)),
            None => config,
        }
    }
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(if args.debug { "debug" } else { "info" });

    let black = args.config_for(Color::Black);
    let white = args.config_for(Color::White);
    black.validate()?;
    white.validate()?;

    info!(
        games = args.games,
        black = %black.policy,
        white = %white.policy,
        black_ms = args.black_ms,
        white_ms = args.white_ms,
        simulations = args.simulations,
        "starting match"
    );

    let summary = play_match(args.games, &black, &white)?;
    println!("{summary}");

    Ok(())
}
