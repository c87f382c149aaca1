//! Enemy counter-attack.

use crate::action::narration::{self, narrate_status};
use crate::action::{EnemyPhaseReport, EnemyStrike};
use crate::combat::{apply_damage, heal_shield, roll_weapon_damage};
use crate::env::EncounterEnv;
use crate::state::{EncounterState, GameScene};

/// Every surviving enemy hits the player once, in roster order.
///
/// Stops at the first hit that defeats the player: the roster is dismissed
/// and the scene returns to the menu. A surviving player gets the passive
/// recharge and the scene settles on `BattleBase`.
pub fn run_enemy_phase(state: &mut EncounterState, env: &mut EncounterEnv<'_>) -> EnemyPhaseReport {
    let mut report = EnemyPhaseReport::default();

    for index in 0..state.enemies.len() {
        let enemy = &state.enemies[index];
        let (id, weapon, label) = (enemy.id, enemy.weapon, enemy.label());

        let damage = roll_weapon_damage(&weapon, &mut *env);
        let outcome = apply_damage(&mut state.player, damage);
        state.narrate(narration::enemy_attack(&label, damage));
        report.strikes.push(EnemyStrike {
            enemy: id,
            damage,
            player_shield: state.player.shield,
        });

        if outcome.defeated {
            narrate_status(state);
            state.narrate(narration::game_over(state.battles_won));
            state.narrate(narration::RESTART_HINT);
            report.player_defeated = true;
            report.dismissed = state.dismiss_roster();
            state.scene = GameScene::Menu;
            return report;
        }
    }

    let amount = env.config().base_shield_recharge;
    let max = state.player.shield_max;
    report.recharge = Some(heal_shield(&mut state.player, amount, max));
    state.narrate(narration::passive_recharge(amount, state.player.shield, max));
    narrate_status(state);
    state.scene = GameScene::BattleBase;

    report
}
