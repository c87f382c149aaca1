use crate::action::{Action, ActionResult, narration};
use crate::config::GameConfig;
use crate::env::{EncounterEnv, RandomSource};
use crate::state::EncounterState;

use super::{ExecuteError, GameEngine};

/// Successful execution details.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    pub result: ActionResult,
    /// Lines appended by this transition.
    pub narration: Vec<String>,
    /// Draws consumed from the randomness source.
    pub draws: usize,
}

/// Result of [`transition`]: always a usable snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: EncounterState,
    /// Lines appended by this call, including the error line on failure.
    pub narration: Vec<String>,
    pub draws: usize,
    pub result: Result<ActionResult, ExecuteError>,
}

impl Transition {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&ExecuteError> {
        self.result.as_ref().err()
    }
}

/// Applies `action` to a clone of `snapshot`.
///
/// The caller's snapshot is never mutated; on error the clone is dropped.
pub fn try_transition(
    snapshot: &EncounterState,
    action: &Action,
    config: &GameConfig,
    rng: &mut dyn RandomSource,
) -> Result<(EncounterState, ExecutionOutcome), ExecuteError> {
    let mut env = EncounterEnv::new(config, rng);
    apply_to_clone(snapshot, action, &mut env)
}

/// Infallible boundary used by callers that keep a session alive.
///
/// On failure the returned state is the original snapshot with one
/// `Error: ...` narration line appended.
pub fn transition(
    snapshot: &EncounterState,
    action: &Action,
    config: &GameConfig,
    rng: &mut dyn RandomSource,
) -> Transition {
    let mut env = EncounterEnv::new(config, rng);
    match apply_to_clone(snapshot, action, &mut env) {
        Ok((state, outcome)) => Transition {
            state,
            narration: outcome.narration,
            draws: outcome.draws,
            result: Ok(outcome.result),
        },
        Err(error) => {
            let line = narration::error(&error.reason());
            let mut state = snapshot.clone();
            state.narrate(line.clone());
            Transition {
                state,
                narration: vec![line],
                draws: env.draws(),
                result: Err(error),
            }
        }
    }
}

fn apply_to_clone(
    snapshot: &EncounterState,
    action: &Action,
    env: &mut EncounterEnv<'_>,
) -> Result<(EncounterState, ExecutionOutcome), ExecuteError> {
    let mut next = snapshot.clone();
    let logged = next.messages.len();

    let result = GameEngine::new(&mut next).execute(env, action)?;

    let start = match result {
        ActionResult::Restarted { log_cleared: true } => 0,
        _ => logged,
    };
    let narration = next.messages[start..].to_vec();

    Ok((
        next,
        ExecutionOutcome {
            result,
            narration,
            draws: env.draws(),
        },
    ))
}
