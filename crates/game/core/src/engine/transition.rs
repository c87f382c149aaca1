//! Action transition dispatch and execution logic.

use crate::action::{
    Action, ActionResult, ActionTransition, CancelAttackAction, ConcedeAction,
    ConfirmAttackAction, FocusShieldAction, RestartAction, SaveAction, SelectAttackAction,
    StartBattleAction,
};
use crate::env::EncounterEnv;
use crate::state::EncounterState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut EncounterState,
    env: &mut EncounterEnv<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes each action to its transition and wraps the result in [`ActionResult`].
pub(super) fn execute_transition(
    action: &Action,
    state: &mut EncounterState,
    env: &mut EncounterEnv<'_>,
) -> Result<ActionResult, ExecuteError> {
    match *action {
        Action::Battle => {
            let report = drive_transition(&StartBattleAction, state, env)
                .map_err(ExecuteError::Battle)?;
            Ok(report.map_or(ActionResult::BattleRefused, ActionResult::BattleStarted))
        }
        Action::Save => {
            match drive_transition(&SaveAction, state, env).map_err(ExecuteError::Save)? {}
        }
        Action::Restart => {
            let log_cleared =
                drive_transition(&RestartAction, state, env).map_err(ExecuteError::Restart)?;
            Ok(ActionResult::Restarted { log_cleared })
        }
        Action::SelectAttack => {
            drive_transition(&SelectAttackAction, state, env)
                .map_err(ExecuteError::SelectAttack)?;
            Ok(ActionResult::TargetSelection)
        }
        Action::ConfirmAttack { target } => {
            let report = drive_transition(&ConfirmAttackAction::new(target), state, env)
                .map_err(ExecuteError::ConfirmAttack)?;
            Ok(ActionResult::Attack(report))
        }
        Action::Shield => {
            let report =
                drive_transition(&FocusShieldAction, state, env).map_err(ExecuteError::Shield)?;
            Ok(ActionResult::Shield(report))
        }
        Action::CancelAttack => {
            drive_transition(&CancelAttackAction, state, env)
                .map_err(ExecuteError::CancelAttack)?;
            Ok(ActionResult::AttackCancelled)
        }
        Action::Concede => {
            let dismissed =
                drive_transition(&ConcedeAction, state, env).map_err(ExecuteError::Concede)?;
            Ok(ActionResult::Conceded { dismissed })
        }
    }
}
