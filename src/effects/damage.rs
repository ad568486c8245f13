//! Damage and block arithmetic.
//!
//! All multipliers are integer percentages with floor division, so the
//! same inputs give the same result on every platform.

use serde::{Deserialize, Serialize};

/// Attacker-side damage modifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackerMods {
    pub strength: i32,
    pub weak: i32,
}

/// Defender-side damage modifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenderMods {
    pub vulnerable: i32,
}

/// Block modifiers of the entity gaining block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockMods {
    pub dexterity: i32,
    pub frail: i32,
}

/// Knobs beyond the basic formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageOptions {
    /// Strength counts this many times (Heavy Blade).
    pub strength_multiplier: i32,
    /// Damage percentage against a vulnerable defender.
    pub vulnerable_percent: i32,
    /// Double the final damage (Pen Nib).
    pub double: bool,
}

impl Default for DamageOptions {
    fn default() -> Self {
        Self {
            strength_multiplier: 1,
            vulnerable_percent: 150,
            double: false,
        }
    }
}

/// Damage of one hit: base + strength, then weak, then vulnerable.
///
/// ```
/// use spire_sim::effects::{compute_damage, AttackerMods, DefenderMods};
///
/// let vulnerable = DefenderMods { vulnerable: 1 };
/// assert_eq!(compute_damage(10, AttackerMods::default(), vulnerable), 15);
/// assert_eq!(compute_damage(10, AttackerMods { strength: 2, weak: 1 }, vulnerable), 13);
/// ```
#[must_use]
pub fn compute_damage(base: i32, attacker: AttackerMods, defender: DefenderMods) -> i32 {
    compute_damage_with(base, attacker, defender, DamageOptions::default())
}

/// `compute_damage` with a strength multiplier, a custom vulnerable
/// percentage and optional doubling (applied after vulnerable).
#[must_use]
pub fn compute_damage_with(
    base: i32,
    attacker: AttackerMods,
    defender: DefenderMods,
    opts: DamageOptions,
) -> i32 {
    let mut damage = base + attacker.strength * opts.strength_multiplier;
    if attacker.weak > 0 {
        damage = (damage * 3).div_euclid(4);
    }
    if defender.vulnerable > 0 {
        damage = (damage * opts.vulnerable_percent).div_euclid(100);
    }
    if opts.double {
        damage *= 2;
    }
    damage.max(0)
}

/// Block gained: base + dexterity, then frail.
#[must_use]
pub fn compute_block(base: i32, mods: BlockMods) -> i32 {
    let mut block = base + mods.dexterity;
    if mods.frail > 0 {
        block = (block * 3).div_euclid(4);
    }
    block.max(0)
}
