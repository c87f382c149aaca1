//! Simple automated player used for simulation and smoke tests.

use encounter_core::{Action, EncounterState, GameConfig, GameScene};

use crate::api::ActionProvider;

/// Plays battles until the player falls.
///
/// - Menu: start a battle, or stop once the player is defeated
/// - Battle idle: focus the shield when it is at or below the threshold,
///   otherwise select an attack
/// - Target selection: attack the enemy with the least shield left
#[derive(Clone, Copy, Debug)]
pub struct Autopilot {
    /// Shield percentage at or below which the autopilot defends.
    pub defend_below_percent: u32,
}

impl Autopilot {
    pub const DEFAULT_DEFEND_BELOW_PERCENT: u32 = 30;

    pub fn new(defend_below_percent: u32) -> Self {
        Self {
            defend_below_percent,
        }
    }

    fn should_defend(&self, state: &EncounterState) -> bool {
        let player = &state.player;
        u64::from(player.shield) * 100
            <= u64::from(player.shield_max) * u64::from(self.defend_below_percent)
    }

    fn weakest_target(state: &EncounterState) -> Option<usize> {
        state
            .enemies
            .iter()
            .enumerate()
            .min_by_key(|(_, enemy)| enemy.shield)
            .map(|(index, _)| index)
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEFEND_BELOW_PERCENT)
    }
}

impl ActionProvider for Autopilot {
    fn provide_action(&mut self, state: &EncounterState, _config: &GameConfig) -> Option<Action> {
        match state.scene {
            GameScene::Menu if state.player.defeated => None,
            GameScene::Menu => Some(Action::Battle),
            GameScene::BattleBase if self.should_defend(state) => Some(Action::Shield),
            GameScene::BattleBase => Some(Action::SelectAttack),
            GameScene::SelectingTarget => Some(Action::ConfirmAttack {
                target: Self::weakest_target(state),
            }),
        }
    }
}
