use anyhow::{Context, Result};
use clap::Parser;

use encounter_runtime::simulate_batch;

use super::ConfigArgs;

/// Play many autopilot games in parallel
#[derive(Parser)]
pub struct Simulate {
    /// Number of games
    #[arg(short, long, default_value = "100")]
    games: u64,

    /// Seed of the first game; game `i` uses `seed + i`
    #[arg(short, long, default_value = "0")]
    seed: u64,

    /// Stop a game after this many actions
    #[arg(long, default_value = "1000")]
    max_actions: usize,

    /// Print per-game results as well as the aggregate
    #[arg(long)]
    per_game: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

impl Simulate {
    pub fn execute(self) -> Result<()> {
        let config = self.config.load()?;
        let seeds: Vec<u64> = (0..self.games)
            .map(|offset| self.seed.wrapping_add(offset))
            .collect();

        let mut summary = simulate_batch(&config, &seeds, self.max_actions)
            .context("simulation failed")?;
        if !self.per_game {
            summary.games.clear();
        }

        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }
}
