//! Headless autopilot simulation.
//!
//! Each game owns its own session, snapshot, and seeded source, so games run
//! in parallel on the rayon pool with no shared mutable state.

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use encounter_core::GameConfig;

use crate::api::Result;
use crate::providers::Autopilot;
use crate::session::Session;

/// Outcome of one simulated game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub seed: u64,
    pub actions: usize,
    pub draws: usize,
    pub battles_won: u32,
    pub enemies_defeated: u32,
    pub player_defeated: bool,
    pub final_shield: u32,
    pub rejected_actions: usize,
    pub state_root: String,
}

/// Aggregate over a batch of games.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub games: Vec<GameSummary>,
    pub total_battles_won: u64,
    pub mean_battles_won: f64,
    pub max_battles_won: u32,
    pub defeats: usize,
}

impl SimulationSummary {
    fn from_games(games: Vec<GameSummary>) -> Self {
        let total_battles_won: u64 = games.iter().map(|game| u64::from(game.battles_won)).sum();
        let mean_battles_won = if games.is_empty() {
            0.0
        } else {
            total_battles_won as f64 / games.len() as f64
        };
        Self {
            total_battles_won,
            mean_battles_won,
            max_battles_won: games.iter().map(|game| game.battles_won).max().unwrap_or(0),
            defeats: games.iter().filter(|game| game.player_defeated).count(),
            games,
        }
    }
}

/// Plays one game with the default autopilot.
pub fn simulate_encounter(
    config: &GameConfig,
    seed: u64,
    max_actions: usize,
) -> Result<GameSummary> {
    let mut session = Session::new(config.clone(), seed)?;
    let mut autopilot = Autopilot::default();
    let actions = session.run(&mut autopilot, max_actions);

    let state = session.state();
    Ok(GameSummary {
        seed,
        actions,
        draws: session.log().draws().len(),
        battles_won: state.battles_won,
        enemies_defeated: state.enemies_defeated,
        player_defeated: state.player.defeated,
        final_shield: state.player.shield,
        rejected_actions: session.log().failures(),
        state_root: hex::encode(state.state_root()),
    })
}

/// Plays one game per seed in parallel; results keep the order of `seeds`.
pub fn simulate_batch(
    config: &GameConfig,
    seeds: &[u64],
    max_actions: usize,
) -> Result<SimulationSummary> {
    let games = seeds
        .par_iter()
        .map(|&seed| simulate_encounter(config, seed, max_actions))
        .collect::<Result<Vec<_>>>()?;

    let summary = SimulationSummary::from_games(games);
    info!(
        target: "runtime::simulation",
        games = summary.games.len(),
        mean_battles_won = summary.mean_battles_won,
        max_battles_won = summary.max_battles_won,
        "Simulation batch finished"
    );
    Ok(summary)
}
