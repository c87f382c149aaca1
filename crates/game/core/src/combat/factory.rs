//! Enemy construction.

use super::weapon::{WeaponKind, create_weapon};
use crate::config::GameConfig;
use crate::state::{Combatant, EncounterState};

/// Build a full-shield enemy, allocating the next id from `state`.
///
/// The enemy is returned rather than pushed so callers decide roster
/// placement and capacity handling.
pub fn create_enemy(
    state: &mut EncounterState,
    level: u32,
    kind: WeaponKind,
    config: &GameConfig,
) -> Combatant {
    let id = state.allocate_enemy_id();
    Combatant::enemy(id, level, config.enemy_shield_max, create_weapon(level, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CombatantId;

    #[test]
    fn enemies_get_sequential_ids_and_full_shield() {
        let config = GameConfig::default();
        let mut state = EncounterState::new(&config);

        let first = create_enemy(&mut state, 2, WeaponKind::Stick, &config);
        let second = create_enemy(&mut state, 2, WeaponKind::Dagger, &config);

        assert_eq!(first.id, CombatantId(1));
        assert_eq!(second.id, CombatantId(2));
        assert_eq!(first.shield, 20);
        assert_eq!(first.shield_max, 20);
        assert!(!first.defeated);
        assert_eq!(first.weapon, create_weapon(2, WeaponKind::Stick));
        assert_eq!(state.enemy_num(), 2);
    }
}
