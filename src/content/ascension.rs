//! Ascension levels: cumulative difficulty modifiers for runs.
//!
//! Each level keeps every modifier of the levels below it. Multipliers are
//! whole percents; scaled HP rounds up and scaled damage rounds down.

use serde::{Deserialize, Serialize};

use super::enemy::EnemyKind;

/// Highest ascension level. Higher levels behave like this one.
pub const MAX_ASCENSION: u32 = 10;

/// Modifiers in force at one ascension level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AscensionModifiers {
    pub level: u32,
    /// Enemy HP in percent of the rolled value.
    pub enemy_hp_percent: i32,
    /// Extra boss HP in percent, applied after `enemy_hp_percent`.
    pub boss_hp_percent: i32,
    /// Base damage of enemy attacks in percent.
    pub enemy_damage_percent: i32,
    pub elite_strength: i32,
    pub boss_strength: i32,
    /// A Wound joins the starting deck.
    pub start_with_wound: bool,
    /// Cap on the heal after each floor, in percent of max HP.
    pub floor_heal_percent: i32,
}

impl Default for AscensionModifiers {
    fn default() -> Self {
        Self::for_level(0)
    }
}

impl AscensionModifiers {
    /// The modifiers of `level`, clamped to `MAX_ASCENSION`.
    #[must_use]
    pub const fn for_level(level: u32) -> Self {
        let level = if level > MAX_ASCENSION { MAX_ASCENSION } else { level };
        Self {
            level,
            enemy_hp_percent: match level {
                0 => 100,
                1..=6 => 110,
                _ => 120,
            },
            boss_hp_percent: if level >= 5 { 105 } else { 100 },
            enemy_damage_percent: if level >= 10 { 110 } else { 100 },
            elite_strength: if level >= 3 { 1 } else { 0 },
            boss_strength: if level >= 5 { 1 } else { 0 },
            start_with_wound: level >= 2,
            floor_heal_percent: if level >= 4 { 25 } else { 30 },
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.level > 0
    }

    /// Scale an HP value of an enemy of `kind`.
    #[must_use]
    pub fn scale_hp(&self, hp: i32, kind: EnemyKind) -> i32 {
        let hp = percent_ceil(hp, self.enemy_hp_percent);
        if kind == EnemyKind::Boss {
            percent_ceil(hp, self.boss_hp_percent)
        } else {
            hp
        }
    }

    /// Strength an enemy of `kind` starts the combat with.
    #[must_use]
    pub const fn bonus_strength(&self, kind: EnemyKind) -> i32 {
        match kind {
            EnemyKind::Elite => self.elite_strength,
            EnemyKind::Boss => self.boss_strength,
            EnemyKind::Normal | EnemyKind::Minion => 0,
        }
    }

    /// Scale the base damage of an enemy attack.
    #[must_use]
    pub fn scale_damage(&self, damage: i32) -> i32 {
        damage * self.enemy_damage_percent / 100
    }

    /// HP restored after a floor: `heal_per_floor`, capped by the level's
    /// share of max HP.
    #[must_use]
    pub fn floor_heal(&self, heal_per_floor: i32, max_hp: i32) -> i32 {
        heal_per_floor.min(max_hp * self.floor_heal_percent / 100).max(0)
    }
}

fn percent_ceil(value: i32, percent: i32) -> i32 {
    (value * percent + 99) / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_zero_changes_nothing() {
        let mods = AscensionModifiers::for_level(0);
        assert!(!mods.is_active());
        assert_eq!(mods.scale_hp(140, EnemyKind::Boss), 140);
        assert_eq!(mods.scale_damage(35), 35);
        assert_eq!(mods.bonus_strength(EnemyKind::Elite), 0);
        assert!(!mods.start_with_wound);
    }

    #[test]
    fn test_levels_accumulate() {
        let one = AscensionModifiers::for_level(1);
        assert_eq!(one.scale_hp(44, EnemyKind::Normal), 49);
        assert!(!one.start_with_wound);

        let three = AscensionModifiers::for_level(3);
        assert!(three.start_with_wound);
        assert_eq!(three.bonus_strength(EnemyKind::Elite), 1);
        assert_eq!(three.bonus_strength(EnemyKind::Boss), 0);

        let five = AscensionModifiers::for_level(5);
        // 140 -> 154 -> 162 (161.7 rounded up)
        assert_eq!(five.scale_hp(140, EnemyKind::Boss), 162);
        assert_eq!(five.bonus_strength(EnemyKind::Boss), 1);
        assert_eq!(five.bonus_strength(EnemyKind::Minion), 0);

        let seven = AscensionModifiers::for_level(7);
        assert_eq!(seven.scale_hp(50, EnemyKind::Normal), 60);
    }

    #[test]
    fn test_damage_scales_only_at_ten() {
        assert_eq!(AscensionModifiers::for_level(9).scale_damage(35), 35);
        assert_eq!(AscensionModifiers::for_level(10).scale_damage(35), 38);
        assert_eq!(AscensionModifiers::for_level(25), AscensionModifiers::for_level(MAX_ASCENSION));
    }

    #[test]
    fn test_floor_heal_is_capped() {
        let base = AscensionModifiers::for_level(0);
        assert_eq!(base.floor_heal(6, 80), 6);
        assert_eq!(base.floor_heal(40, 80), 24);
        assert_eq!(AscensionModifiers::for_level(4).floor_heal(40, 80), 20);
        assert_eq!(base.floor_heal(-3, 80), 0);
    }
}
