//! Actions accepted from the menu.

use core::convert::Infallible;

use super::ensure_menu;
use crate::action::narration::{self, narrate_status};
use crate::action::{ActionError, ActionTransition, BattleReport};
use crate::combat::{WeaponKind, create_enemy};
use crate::config::{GameConfig, RestartPolicy};
use crate::env::{EncounterEnv, select_random};
use crate::state::{EncounterState, GameScene, Roster};

/// Spawns a fresh roster at the current level.
///
/// A defeated player is refused without any state change; the result is
/// `None` in that case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StartBattleAction;

impl ActionTransition for StartBattleAction {
    type Error = ActionError;
    type Result = Option<BattleReport>;

    fn pre_validate(

        &self,

        state: &EncounterState,

        env: &EncounterEnv<'_>,

    ) -> Result<(), Self::Error> {
        ensure_menu(state)?;

        let requested = env.config().roster_size;
        if requested > GameConfig::MAX_ROSTER {
            return Err(ActionError::RosterFull {
                requested,
                capacity: GameConfig::MAX_ROSTER,
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut EncounterState,
        env: &mut EncounterEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        if state.player.defeated {
            state.narrate(narration::BATTLE_REFUSED);
            return Ok(None);
        }

        let config = env.config();
        let level = state.battles_won;
        let mut spawned = Roster::new();
        for _ in 0..config.roster_size {
            // One draw per enemy, even though the table is fixed.
            let kind = select_random(&WeaponKind::SPAWNABLE, &mut *env)
                .copied()
                .unwrap_or(WeaponKind::Dagger);
            let enemy = create_enemy(state, level, kind, config);
            spawned.try_push(enemy).map_err(|_| ActionError::RosterFull {
                requested: config.roster_size,
                capacity: GameConfig::MAX_ROSTER,
            })?;
        }

        let report = BattleReport {
            level,
            enemies: spawned.iter().map(|enemy| enemy.id).collect(),
        };
        state.enemies = spawned;
        state.scene = GameScene::BattleBase;
        state.narrate(narration::battle_started(
            state.battles_won + 1,
            state.enemies.len(),
        ));
        narrate_status(state);

        Ok(Some(report))
    }
}

/// Starts a new game, keeping or clearing the log per the restart policy.
///
/// Returns whether the log was cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RestartAction;

impl ActionTransition for RestartAction {
    type Error = ActionError;
    type Result = bool;

    fn pre_validate(

        &self,

        state: &EncounterState,

        _env: &EncounterEnv<'_>,

    ) -> Result<(), Self::Error> {
        ensure_menu(state)
    }

    fn apply(
        &self,
        state: &mut EncounterState,
        env: &mut EncounterEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let config = env.config();
        state.reset(config);

        let log_cleared = config.restart_policy == RestartPolicy::ClearLog;
        if log_cleared {
            state.messages.clear();
        }
        state.narrate(narration::NEW_GAME);
        narrate_status(state);

        Ok(log_cleared)
    }

    fn post_validate(

        &self,

        state: &EncounterState,

        env: &EncounterEnv<'_>,

    ) -> Result<(), Self::Error> {
        debug_assert!(!state.player.defeated);
        debug_assert_eq!(state.player.shield_max, env.config().player_shield_max);
        debug_assert_eq!(state.enemy_num(), 0);
        Ok(())
    }
}

/// Persistence is not supported; always fails before touching the state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaveAction;

impl ActionTransition for SaveAction {
    type Error = ActionError;
    type Result = Infallible;

    fn pre_validate(

        &self,

        _state: &EncounterState,

        _env: &EncounterEnv<'_>,

    ) -> Result<(), Self::Error> {
        Err(ActionError::NotImplemented("Saving"))
    }

    fn apply(
        &self,
        _state: &mut EncounterState,
        _env: &mut EncounterEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        Err(ActionError::NotImplemented("Saving"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Weapon;
    use crate::env::ScriptedDraws;
    use crate::state::CombatantId;

    #[test]
    fn battle_spawns_roster_with_one_draw_per_enemy() {
        let config = GameConfig::default();
        let mut state = EncounterState::new(&config);
        state.battles_won = 2;
        let mut draws = ScriptedDraws::new(vec![0.1, 0.7, 0.4]);
        let mut env = EncounterEnv::new(&config, &mut draws);

        StartBattleAction.pre_validate(&state, &env).expect("menu");
        let report = StartBattleAction
            .apply(&mut state, &mut env)
            .expect("apply")
            .expect("battle started");

        assert_eq!(env.draws(), 3);
        assert_eq!(report.level, 2);
        assert_eq!(
            report.enemies,
            vec![CombatantId(1), CombatantId(2), CombatantId(3)]
        );
        let kinds: Vec<WeaponKind> = state.enemies.iter().map(|e| e.weapon.kind).collect();
        assert_eq!(
            kinds,
            vec![WeaponKind::Dagger, WeaponKind::Stick, WeaponKind::Dagger]
        );
        assert!(state.enemies.iter().all(|e| e.level == 2 && e.shield == 20));
        assert_eq!(state.scene, GameScene::BattleBase);
        assert_eq!(state.messages[0], "Battle 3 begins against 3 enemies!");
    }

    #[test]
    fn defeated_player_is_refused_without_draws() {
        let config = GameConfig::default();
        let mut state = EncounterState::new(&config);
        state.player.defeated = true;
        state.player.shield = 0;
        let mut draws = ScriptedDraws::new(vec![0.5]);
        let mut env = EncounterEnv::new(&config, &mut draws);

        let result = StartBattleAction.apply(&mut state, &mut env).expect("apply");

        assert_eq!(result, None);
        assert_eq!(env.draws(), 0);
        assert!(state.enemies.is_empty());
        assert_eq!(state.scene, GameScene::Menu);
        assert_eq!(state.messages, vec![narration::BATTLE_REFUSED.to_string()]);
    }

    #[test]
    fn oversized_roster_is_rejected_up_front() {
        let config = GameConfig::default().with_roster_size(GameConfig::MAX_ROSTER + 1);
        let state = EncounterState::new(&config);
        let mut draws = ScriptedDraws::new(vec![0.5]);
        let env = EncounterEnv::new(&config, &mut draws);

        assert_eq!(
            StartBattleAction.pre_validate(&state, &env),
            Err(ActionError::RosterFull {
                requested: GameConfig::MAX_ROSTER + 1,
                capacity: GameConfig::MAX_ROSTER,
            })
        );
    }

    #[test]
    fn restart_resets_counters_and_respects_policy() {
        for (policy, expect_cleared) in [
            (RestartPolicy::PreserveLog, false),
            (RestartPolicy::ClearLog, true),
        ] {
            let config = GameConfig::default().with_restart_policy(policy);
            let mut state = EncounterState::new(&config);
            state.narrate("old line");
            state.battles_won = 4;
            state.enemies_defeated = 12;
            state.player = crate::state::Combatant::player(
                0,
                50,
                Weapon::new(WeaponKind::Spear, 1, 1, 1),
            );
            state.player.defeated = true;
            let mut draws = ScriptedDraws::new(Vec::new());
            let mut env = EncounterEnv::new(&config, &mut draws);

            let cleared = RestartAction.apply(&mut state, &mut env).expect("restart");

            assert_eq!(cleared, expect_cleared);
            assert_eq!(state.battles_won, 0);
            assert_eq!(state.enemies_defeated, 0);
            assert!(!state.player.defeated);
            assert_eq!(state.player.weapon, config.player_weapon);
            assert_eq!(state.messages.contains(&"old line".to_string()), !expect_cleared);
            assert!(state.messages.contains(&narration::NEW_GAME.to_string()));
        }
    }

    #[test]
    fn save_is_not_implemented() {
        let config = GameConfig::default();
        let state = EncounterState::new(&config);
        let mut draws = ScriptedDraws::new(Vec::new());
        let env = EncounterEnv::new(&config, &mut draws);

        assert_eq!(
            SaveAction.pre_validate(&state, &env),
            Err(ActionError::NotImplemented("Saving"))
        );
    }
}
