//! Weapons and damage rolls.

use crate::env::{RandomSource, scaled_floor};

/// Weapon families.
///
/// Strength scales enemy weapon damage; compatibility drives weapon fusion.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponKind {
    Dagger,
    Stick,
    Spear,
}

impl WeaponKind {
    /// Kinds an enemy can be spawned with.
    pub const SPAWNABLE: [WeaponKind; 2] = [WeaponKind::Dagger, WeaponKind::Stick];

    /// Damage multiplier per level.
    pub const fn strength(self) -> u32 {
        match self {
            WeaponKind::Dagger => 2,
            WeaponKind::Stick => 2,
            WeaponKind::Spear => 7,
        }
    }

    /// The kind a fallen wielder's weapon can fuse into, if any.
    ///
    /// Daggers and sticks bind together into a spear; spears have no partner.
    pub const fn compatible(self) -> Option<WeaponKind> {
        match self {
            WeaponKind::Dagger => Some(WeaponKind::Stick),
            WeaponKind::Stick => Some(WeaponKind::Dagger),
            WeaponKind::Spear => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            WeaponKind::Dagger => "Dagger",
            WeaponKind::Stick => "Stick",
            WeaponKind::Spear => "Spear",
        }
    }

    pub const fn name_plural(self) -> &'static str {
        match self {
            WeaponKind::Dagger => "Daggers",
            WeaponKind::Stick => "Sticks",
            WeaponKind::Spear => "Spears",
        }
    }
}

/// Value object describing how hard a combatant hits.
///
/// A roll deals `base_damage + floor(draw * bonus_damage_max) + bonus_damage_min`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub kind: WeaponKind,
    pub base_damage: u32,
    pub bonus_damage_min: u32,
    pub bonus_damage_max: u32,
}

impl Weapon {
    pub const fn new(
        kind: WeaponKind,
        base_damage: u32,
        bonus_damage_min: u32,
        bonus_damage_max: u32,
    ) -> Self {
        Self {
            kind,
            base_damage,
            bonus_damage_min,
            bonus_damage_max,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub const fn name_plural(&self) -> &'static str {
        self.kind.name_plural()
    }

    /// Smallest possible roll.
    pub const fn min_damage(&self) -> u32 {
        self.base_damage.saturating_add(self.bonus_damage_min)
    }

    /// Largest possible roll.
    pub const fn max_damage(&self) -> u32 {
        self.base_damage
            .saturating_add(self.bonus_damage_min)
            .saturating_add(self.bonus_damage_max.saturating_sub(1))
    }
}

/// Roll the weapon's damage, consuming exactly one draw.
pub fn roll_weapon_damage(weapon: &Weapon, rng: &mut dyn RandomSource) -> u32 {
    weapon
        .base_damage
        .saturating_add(scaled_floor(rng, weapon.bonus_damage_max))
        .saturating_add(weapon.bonus_damage_min)
}

/// Build a weapon of `kind` scaled to `level`.
///
/// ```text
/// base_damage      = (level + 1) * strength(kind)
/// bonus_damage_min = 1 + level / 10
/// bonus_damage_max = 2 + level / 5
/// ```
pub fn create_weapon(level: u32, kind: WeaponKind) -> Weapon {
    Weapon {
        kind,
        base_damage: level.saturating_add(1).saturating_mul(kind.strength()),
        bonus_damage_min: 1 + level / 10,
        bonus_damage_max: 2 + level / 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedDraws;

    #[test]
    fn create_weapon_follows_level_formula() {
        assert_eq!(create_weapon(0, WeaponKind::Dagger), Weapon::new(WeaponKind::Dagger, 2, 1, 2));
        assert_eq!(create_weapon(0, WeaponKind::Spear), Weapon::new(WeaponKind::Spear, 7, 1, 2));
        assert_eq!(
            create_weapon(12, WeaponKind::Stick),
            Weapon::new(WeaponKind::Stick, 26, 2, 4)
        );
    }

    #[test]
    fn roll_matches_floor_formula() {
        let weapon = Weapon::new(WeaponKind::Dagger, 3, 0, 2);
        let mut draws = ScriptedDraws::new(vec![0.5, 0.0, 0.49]);
        assert_eq!(roll_weapon_damage(&weapon, &mut draws), 4);
        assert_eq!(roll_weapon_damage(&weapon, &mut draws), 3);
        assert_eq!(roll_weapon_damage(&weapon, &mut draws), 3);
        assert_eq!(draws.consumed(), 3);
    }

    #[test]
    fn roll_stays_within_bounds() {
        let weapon = create_weapon(7, WeaponKind::Stick);
        for step in 0..100 {
            let value = f64::from(step) / 100.0;
            let mut source = move || value;
            let damage = roll_weapon_damage(&weapon, &mut source);
            assert!(damage >= weapon.min_damage());
            assert!(damage <= weapon.max_damage());
        }
    }

    #[test]
    fn zero_bonus_range_is_deterministic_but_still_draws() {
        let weapon = Weapon::new(WeaponKind::Spear, 5, 1, 0);
        let mut draws = ScriptedDraws::new(vec![0.99]);
        assert_eq!(roll_weapon_damage(&weapon, &mut draws), 6);
        assert_eq!(draws.consumed(), 1);
        assert_eq!(weapon.min_damage(), weapon.max_damage());
    }

    #[test]
    fn compatibility_is_symmetric_for_dagger_and_stick() {
        assert_eq!(WeaponKind::Dagger.compatible(), Some(WeaponKind::Stick));
        assert_eq!(WeaponKind::Stick.compatible(), Some(WeaponKind::Dagger));
        assert_eq!(WeaponKind::Spear.compatible(), None);
    }

    #[test]
    fn extreme_levels_and_weapons_saturate() {
        let weapon = create_weapon(u32::MAX, WeaponKind::Spear);
        assert_eq!(weapon.base_damage, u32::MAX);

        let mut draws = ScriptedDraws::new(vec![0.99]);
        assert_eq!(roll_weapon_damage(&weapon, &mut draws), u32::MAX);
    }
}
