//! One-shot lifecycle transitions applied by the engine.

use crate::effects::apply_status;
use crate::content::StatusKind;

use super::enemy::{EnemyFlags, EnemyInstance};

/// Bring a dead enemy back once: full HP, vulnerable and weak cleared,
/// `strength` gained. Returns `false` if it was already reborn.
pub fn rebirth(enemy: &mut EnemyInstance, strength: i32) -> bool {
    if enemy.flags.contains(EnemyFlags::REBORN) {
        return false;
    }
    enemy.vitals.hp = enemy.vitals.max_hp;
    enemy.statuses.clear_debuffs();
    apply_status(&mut enemy.statuses, StatusKind::Strength, strength);
    enemy.flags.insert(EnemyFlags::REBORN);
    tracing::debug!(enemy = enemy.name(), id = %enemy.id, "reborn");
    true
}

/// Mark the enemy as woken up if it lost HP while asleep.
pub fn wake_on_hp_loss(enemy: &mut EnemyInstance, hp_lost: i32) {
    if hp_lost > 0 && enemy.template.passives.asleep && !enemy.flags.contains(EnemyFlags::WOKEN_UP) {
        enemy.flags.insert(EnemyFlags::WOKEN_UP);
        tracing::debug!(enemy = enemy.name(), id = %enemy.id, "woke up");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::content::Catalog;
    use crate::core::EntityId;

    fn awakened() -> EnemyInstance {
        let catalog = Catalog::base();
        EnemyInstance::with_hp(EntityId(0), Arc::clone(catalog.enemy("awakened_one").unwrap()), 300)
    }

    #[test]
    fn test_rebirth_once() {
        let mut e = awakened();
        e.vitals.hp = 0;
        e.statuses.vulnerable = 2;
        e.statuses.weak = 1;
        assert!(e.is_pending_rebirth());
        assert!(rebirth(&mut e, 2));
        assert_eq!(e.vitals.hp, 300);
        assert_eq!((e.statuses.vulnerable, e.statuses.weak, e.statuses.strength), (0, 0, 2));

        e.vitals.hp = 0;
        assert!(!e.is_pending_rebirth());
        assert!(!rebirth(&mut e, 2));
        assert_eq!(e.vitals.hp, 0);
        assert!(e.is_defeated());
    }

    #[test]
    fn test_block_only_does_not_wake() {
        let catalog = Catalog::base();
        let mut e = EnemyInstance::with_hp(EntityId(0), Arc::clone(catalog.enemy("lagavulin").unwrap()), 120);
        wake_on_hp_loss(&mut e, 0);
        assert!(!e.flags.contains(EnemyFlags::WOKEN_UP));
        wake_on_hp_loss(&mut e, 3);
        assert!(e.flags.contains(EnemyFlags::WOKEN_UP));
    }
}
