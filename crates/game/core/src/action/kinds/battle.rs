//! Actions accepted during a battle.

use super::{enemy_phase::run_enemy_phase, ensure_battle};
use crate::action::narration;
use crate::action::{ActionError, ActionTransition, AttackReport, ShieldReport, VictoryReport};
use crate::combat::{apply_damage, heal_shield, resolve_fusion, roll_weapon_damage};
use crate::env::EncounterEnv;
use crate::state::{EncounterState, GameScene};

/// Enters target selection. Consumes no draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectAttackAction;

impl ActionTransition for SelectAttackAction {
    type Error = ActionError;
    type Result = ();

    fn pre_validate(

        &self,

        state: &EncounterState,

        _env: &EncounterEnv<'_>,

    ) -> Result<(), Self::Error> {
        ensure_battle(state)
    }

    fn apply(
        &self,
        state: &mut EncounterState,
        _env: &mut EncounterEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        state.scene = GameScene::SelectingTarget;
        state.narrate(narration::CHOOSE_TARGET);
        Ok(())
    }
}

/// Leaves target selection. Consumes no draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CancelAttackAction;

impl ActionTransition for CancelAttackAction {
    type Error = ActionError;
    type Result = ();

    fn pre_validate(

        &self,

        state: &EncounterState,

        _env: &EncounterEnv<'_>,

    ) -> Result<(), Self::Error> {
        ensure_battle(state)
    }

    fn apply(
        &self,
        state: &mut EncounterState,
        _env: &mut EncounterEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        state.scene = GameScene::BattleBase;
        state.narrate(narration::ATTACK_CANCELLED);
        Ok(())
    }
}

/// Resolves the player's attack against a roster position.
///
/// Draw order: player damage, then one fusion pick when the target falls
/// and a compatible survivor exists, then one roll per surviving enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfirmAttackAction {
    pub target: Option<usize>,
}

impl ConfirmAttackAction {
    pub fn new(target: Option<usize>) -> Self {
        Self { target }
    }

    fn target_index(&self, state: &EncounterState) -> Result<usize, ActionError> {
        let roster_len = state.enemies.len();
        match self.target {
            Some(index) if index < roster_len => Ok(index),
            index => Err(ActionError::TargetOutOfRange { index, roster_len }),
        }
    }
}

impl ActionTransition for ConfirmAttackAction {
    type Error = ActionError;
    type Result = AttackReport;

    fn pre_validate(

        &self,

        state: &EncounterState,

        _env: &EncounterEnv<'_>,

    ) -> Result<(), Self::Error> {
        ensure_battle(state)?;
        self.target_index(state).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut EncounterState,
        env: &mut EncounterEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let index = self.target_index(state)?;
        let weapon = state.player.weapon;
        let damage = roll_weapon_damage(&weapon, &mut *env);

        let target = state
            .enemies
            .get_mut(index)
            .ok_or(ActionError::TargetOutOfRange {
                index: Some(index),
                roster_len: 0,
            })?;
        let outcome = apply_damage(target, damage);
        let (target_id, label) = (target.id, target.label());
        state.narrate(narration::player_attack(&label, damage));

        let mut report = AttackReport {
            target: target_id,
            damage,
            defeated: outcome.defeated,
            fusion: None,
            victory: None,
            enemy_phase: None,
        };

        if !outcome.defeated {
            report.enemy_phase = Some(run_enemy_phase(state, env));
            return Ok(report);
        }

        let Some(fallen) = state.enemies.pop_at(index) else {
            return Err(ActionError::TargetOutOfRange {
                index: Some(index),
                roster_len: state.enemies.len(),
            });
        };
        state.narrate(narration::enemy_defeated(&label));
        state.enemies_defeated += 1;

        report.fusion = resolve_fusion(&mut state.enemies, &fallen, &mut *env);
        if let Some(fusion) = &report.fusion {
            state.narrate(narration::fusion(fusion));
        }

        if state.enemies.is_empty() {
            let config = env.config();
            let recharge = config.victory_recharge(fallen.level);
            let max = state.player.shield_max;
            let gained = heal_shield(&mut state.player, recharge, max);
            state.narrate(narration::victory_recharge(recharge, state.player.shield, max));
            state.battles_won += 1;
            state.scene = GameScene::Menu;
            state.narrate(narration::battle_won(state.battles_won));
            report.victory = Some(VictoryReport {
                recharge,
                gained,
                battles_won: state.battles_won,
            });
        } else {
            report.enemy_phase = Some(run_enemy_phase(state, env));
        }

        Ok(report)
    }

    fn post_validate(

        &self,

        state: &EncounterState,

        _env: &EncounterEnv<'_>,

    ) -> Result<(), Self::Error> {
        debug_assert!(state.scene != GameScene::SelectingTarget);
        Ok(())
    }
}

/// Focuses the shield, then the enemies strike.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusShieldAction;

impl ActionTransition for FocusShieldAction {
    type Error = ActionError;
    type Result = ShieldReport;

    fn pre_validate(

        &self,

        state: &EncounterState,

        _env: &EncounterEnv<'_>,

    ) -> Result<(), Self::Error> {
        ensure_battle(state)
    }

    fn apply(
        &self,
        state: &mut EncounterState,
        env: &mut EncounterEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let recharge = env.config().focused_recharge();
        let max = state.player.shield_max;
        let gained = heal_shield(&mut state.player, recharge, max);
        state.narrate(narration::focus_recharge(recharge, state.player.shield, max));

        let enemy_phase = run_enemy_phase(state, env);
        Ok(ShieldReport {
            recharge,
            gained,
            enemy_phase,
        })
    }
}

/// Gives up the battle: the player is defeated and the roster dismissed.
///
/// The player's shield also drops to 0, since a defeated combatant never
/// holds shield. `enemies_defeated` keeps whatever was accrued so far.
/// Returns how many enemies were dismissed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConcedeAction;

impl ActionTransition for ConcedeAction {
    type Error = ActionError;
    type Result = usize;

    fn pre_validate(

        &self,

        state: &EncounterState,

        _env: &EncounterEnv<'_>,

    ) -> Result<(), Self::Error> {
        ensure_battle(state)
    }

    fn apply(
        &self,
        state: &mut EncounterState,
        _env: &mut EncounterEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        state.narrate(narration::conceded(state.battles_won));
        state.narrate(narration::RESTART_HINT);
        state.player.defeated = true;
        state.player.shield = 0;
        let dismissed = state.dismiss_roster();
        state.scene = GameScene::Menu;
        Ok(dismissed)
    }

    fn post_validate(

        &self,

        state: &EncounterState,

        _env: &EncounterEnv<'_>,

    ) -> Result<(), Self::Error> {
        debug_assert!(state.player.defeated);
        debug_assert!(state.enemies.is_empty());
        Ok(())
    }
}
