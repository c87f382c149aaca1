//! Deterministic re-execution of recorded sessions.
//!
//! The reducer consumes draws strictly in order, so the same starting
//! snapshot, actions, and draw values always reproduce the same states and
//! narration. [`verify_log`] uses that to check every recorded state root.

use encounter_content::Scenario;
use encounter_core::{Action, EncounterState, GameConfig, ScriptedDraws, transition};
use tracing::{debug, warn};

use crate::api::{Result, RuntimeError};
use crate::repository::ActionLog;

/// Final snapshot of a replay plus what it produced along the way.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplayOutcome {
    pub state: EncounterState,
    /// Narration appended by the replayed actions, in order.
    pub narration: Vec<String>,
    pub draws_consumed: usize,
    /// Actions that were rejected.
    pub failures: usize,
}

impl ReplayOutcome {
    pub fn root_hex(&self) -> String {
        hex::encode(self.state.state_root())
    }
}

/// Re-runs `actions` from `initial`, feeding `draws` in order.
///
/// The draw list cycles when exhausted, matching [`ScriptedDraws`].
pub fn replay(
    config: &GameConfig,
    initial: &EncounterState,
    actions: &[Action],
    draws: &[f64],
) -> ReplayOutcome {
    let mut source = ScriptedDraws::new(draws.to_vec());
    let mut state = initial.clone();
    let mut narration = Vec::new();
    let mut failures = 0;

    for action in actions {
        let outcome = transition(&state, action, config, &mut source);
        if outcome.result.is_err() {
            failures += 1;
        }
        narration.extend(outcome.narration);
        state = outcome.state;
    }

    debug!(
        target: "runtime::replay",
        actions = actions.len(),
        draws = source.consumed(),
        failures,
        "Replay finished"
    );

    ReplayOutcome {
        state,
        narration,
        draws_consumed: source.consumed(),
        failures,
    }
}

/// Runs a scenario from a fresh game.
pub fn replay_scenario(config: &GameConfig, scenario: &Scenario) -> ReplayOutcome {
    replay(
        config,
        &EncounterState::new(config),
        &scenario.actions,
        &scenario.draws,
    )
}

/// Re-executes every log entry with its recorded draws and checks roots.
///
/// Returns the final snapshot when every entry matches.
pub fn verify_log(
    config: &GameConfig,
    initial: &EncounterState,
    log: &ActionLog,
) -> Result<EncounterState> {
    let mut state = initial.clone();

    for entry in log.entries() {
        let mut source = ScriptedDraws::new(entry.draws.clone());
        let outcome = transition(&state, &entry.action, config, &mut source);

        if outcome.draws != entry.draws.len() {
            warn!(
                target: "runtime::replay",
                index = entry.index,
                expected = entry.draws.len(),
                actual = outcome.draws,
                "Draw count mismatch"
            );
            return Err(RuntimeError::DrawCountMismatch {
                index: entry.index,
                action: entry.action,
                expected: entry.draws.len(),
                actual: outcome.draws,
            });
        }

        let root = outcome.state.state_root();
        if root != entry.state_root {
            warn!(target: "runtime::replay", index = entry.index, "State root mismatch");
            return Err(RuntimeError::ReplayDivergence {
                index: entry.index,
                action: entry.action,
                expected: entry.root_hex(),
                actual: hex::encode(root),
            });
        }

        state = outcome.state;
    }

    Ok(state)
}
