//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`EncounterState`]. It
//! checks scene legality, drives the transition phases, and verifies state
//! invariants before counting the transition. [`try_transition`] and
//! [`transition`] wrap it with clone-then-mutate so a caller's snapshot is
//! never touched.

mod errors;
mod reducer;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use reducer::{ExecutionOutcome, Transition, transition, try_transition};

use crate::action::{Action, ActionResult};
use crate::env::EncounterEnv;
use crate::state::EncounterState;

/// Engine that applies one action at a time to a borrowed state.
///
/// The state is mutated in place; on error it may hold a partial mutation,
/// so callers work on a clone (see [`try_transition`]).
pub struct GameEngine<'a> {
    state: &'a mut EncounterState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut EncounterState) -> Self {
        Self { state }
    }

    /// Executes an action through the pipeline.
    ///
    /// Scene legality is checked before any phase runs, so a rejected action
    /// never consumes a draw. The nonce advances only on success.
    pub fn execute(
        &mut self,
        env: &mut EncounterEnv<'_>,
        action: &Action,
    ) -> Result<ActionResult, ExecuteError> {
        self.validate_scene(action)?;

        let result = transition::execute_transition(action, self.state, env)?;

        self.state.check_invariants()?;
        self.state.nonce += 1;

        Ok(result)
    }

    fn validate_scene(&self, action: &Action) -> Result<(), ExecuteError> {
        let scene = self.state.scene;
        if action.is_legal_in(scene) {
            Ok(())
        } else {
            Err(ExecuteError::InvalidActionForScene {
                action: action.tag(),
                scene,
            })
        }
    }
}
