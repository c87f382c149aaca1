//! Shield damage and recharge.

use crate::state::Combatant;

/// Outcome of one hit against a shield.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageOutcome {
    /// Shield actually removed.
    pub absorbed: u32,
    /// True when this hit defeated the combatant.
    pub defeated: bool,
}

/// Apply `amount` damage to a combatant.
///
/// Damage that reaches the remaining shield (inclusive) defeats the
/// combatant and zeroes the shield; anything less is subtracted.
pub fn apply_damage(combatant: &mut Combatant, amount: u32) -> DamageOutcome {
    if amount >= combatant.shield {
        let absorbed = combatant.shield;
        combatant.shield = 0;
        combatant.defeated = true;
        DamageOutcome {
            absorbed,
            defeated: true,
        }
    } else {
        combatant.shield -= amount;
        DamageOutcome {
            absorbed: amount,
            defeated: false,
        }
    }
}

/// Recharge a shield by `amount`, capped at `max`.
///
/// Never touches the `defeated` flag. Returns the shield actually gained.
pub fn heal_shield(combatant: &mut Combatant, amount: u32, max: u32) -> u32 {
    let before = combatant.shield;
    combatant.shield = combatant.shield.saturating_add(amount).min(max).max(before);
    combatant.shield.saturating_sub(before)
}
