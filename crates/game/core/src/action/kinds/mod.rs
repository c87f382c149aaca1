//! One transition struct per action.
//!
//! - `menu`: actions accepted between battles
//! - `battle`: actions accepted during a battle
//! - `enemy_phase`: the counter-attack shared by attack and shield

mod battle;
mod enemy_phase;
mod menu;

pub use battle::{
    CancelAttackAction, ConcedeAction, ConfirmAttackAction, FocusShieldAction, SelectAttackAction,
};
pub use enemy_phase::run_enemy_phase;
pub use menu::{RestartAction, SaveAction, StartBattleAction};

use crate::action::ActionError;
use crate::state::EncounterState;

/// Menu actions require an empty roster.
fn ensure_menu(state: &EncounterState) -> Result<(), ActionError> {
    if state.enemies.is_empty() {
        Ok(())
    } else {
        Err(unknown_scene(state))
    }
}

/// Battle actions require a non-empty roster.
fn ensure_battle(state: &EncounterState) -> Result<(), ActionError> {
    if state.enemies.is_empty() {
        Err(unknown_scene(state))
    } else {
        Ok(())
    }
}

fn unknown_scene(state: &EncounterState) -> ActionError {
    ActionError::UnknownScene {
        scene: state.scene,
        roster_len: state.enemies.len(),
    }
}
