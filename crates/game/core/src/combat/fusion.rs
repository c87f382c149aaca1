//! Weapon fusion after an enemy falls.

use super::weapon::{WeaponKind, create_weapon};
use crate::env::{RandomSource, select_random};
use crate::state::{Combatant, CombatantId};

/// Which surviving enemy absorbed a fallen ally's weapon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FusionReport {
    pub fallen: CombatantId,
    pub fallen_kind: WeaponKind,
    pub recipient: CombatantId,
    /// Weapon kind the recipient held before fusing.
    pub absorbed_kind: WeaponKind,
}

/// Replace `recipient`'s weapon with a spear scaled to `level`.
pub fn fuse_weapon(recipient: &mut Combatant, level: u32) {
    recipient.weapon = create_weapon(level, WeaponKind::Spear);
}

/// Roster positions of survivors wielding `kind`, in roster order.
pub fn fusion_candidates(roster: &[Combatant], kind: WeaponKind) -> Vec<usize> {
    roster
        .iter()
        .enumerate()
        .filter(|(_, enemy)| enemy.weapon.kind == kind)
        .map(|(index, _)| index)
        .collect()
}

/// Run the fusion rule for a fallen enemy against the surviving roster.
///
/// Consumes one draw only when at least one survivor wields the compatible
/// kind; the chosen survivor's weapon becomes a spear at its own level.
pub fn resolve_fusion(
    roster: &mut [Combatant],
    fallen: &Combatant,
    rng: &mut dyn RandomSource,
) -> Option<FusionReport> {
    let compatible = fallen.weapon.kind.compatible()?;
    let candidates = fusion_candidates(roster, compatible);
    let index = *select_random(&candidates, rng)?;

    let recipient = &mut roster[index];
    let absorbed_kind = recipient.weapon.kind;
    let level = recipient.level;
    fuse_weapon(recipient, level);

    Some(FusionReport {
        fallen: fallen.id,
        fallen_kind: fallen.weapon.kind,
        recipient: recipient.id,
        absorbed_kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedDraws;

    fn enemy(id: u32, level: u32, kind: WeaponKind) -> Combatant {
        Combatant::enemy(CombatantId(id), level, 20, create_weapon(level, kind))
    }

    #[test]
    fn dagger_fuses_into_a_stick_wielder() {
        let fallen = enemy(1, 0, WeaponKind::Dagger);
        let mut roster = vec![
            enemy(2, 3, WeaponKind::Dagger),
            enemy(3, 3, WeaponKind::Stick),
            enemy(4, 4, WeaponKind::Stick),
        ];
        // floor(0.6 * 2) = 1, so the second stick wielder.
        let mut draws = ScriptedDraws::new(vec![0.6]);

        let report = resolve_fusion(&mut roster, &fallen, &mut draws).expect("fusion");

        assert_eq!(report.recipient, CombatantId(4));
        assert_eq!(report.absorbed_kind, WeaponKind::Stick);
        assert_eq!(roster[2].weapon, create_weapon(4, WeaponKind::Spear));
        assert_eq!(roster[1].weapon.kind, WeaponKind::Stick);
        assert_eq!(roster[0].weapon.kind, WeaponKind::Dagger);
        assert_eq!(draws.consumed(), 1);
    }

    #[test]
    fn no_compatible_survivor_means_no_draw() {
        let fallen = enemy(1, 0, WeaponKind::Dagger);
        let mut roster = vec![enemy(2, 0, WeaponKind::Dagger)];
        let mut draws = ScriptedDraws::new(vec![0.3]);

        assert_eq!(resolve_fusion(&mut roster, &fallen, &mut draws), None);
        assert_eq!(draws.consumed(), 0);
        assert_eq!(roster[0].weapon.kind, WeaponKind::Dagger);
    }

    #[test]
    fn spears_never_fuse() {
        let fallen = enemy(1, 0, WeaponKind::Spear);
        let mut roster = vec![enemy(2, 0, WeaponKind::Stick)];
        let mut draws = ScriptedDraws::new(vec![0.3]);

        assert_eq!(resolve_fusion(&mut roster, &fallen, &mut draws), None);
        assert_eq!(draws.consumed(), 0);
    }
}
