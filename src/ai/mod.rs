//! Enemy move selection.
//!
//! `decide` maps `(instance, turn, last move, allies, rng)` to a move index.
//! It reads the instance and never writes to it: one-shot flags such as
//! `HAS_SPLIT` or `ANGERED` are set by the combat engine when the chosen
//! move executes, so the same inputs always give the same move.
//!
//! Data-authored enemies use one of the `AiSpec` patterns in `patterns`;
//! built-in enemies may carry a `NativeAi` procedure from `native`.

pub mod native;
pub mod patterns;

use crate::content::AiSpec;
use crate::core::{GameRng, SimError};
use crate::entities::EnemyInstance;

/// Choose the next move index for `enemy`.
///
/// `allies` is the whole enemy group, `enemy` included.
pub fn decide(
    enemy: &EnemyInstance,
    turn: u32,
    last_move: Option<usize>,
    allies: &[EnemyInstance],
    rng: &mut GameRng,
) -> Result<usize, SimError> {
    let len = enemy.template.moveset.len();
    let index = match enemy.template.ai {
        AiSpec::Sequential => patterns::sequential(len, turn),
        AiSpec::Random => patterns::random(len, rng),
        AiSpec::FirstThenRandom => patterns::first_then_random(len, turn, rng),
        AiSpec::Weighted => patterns::weighted(len, turn, last_move, rng),
        AiSpec::PhaseShift { split_turn } => patterns::phase_shift(len, turn, split_turn),
        AiSpec::Native { behavior } => native::decide(behavior, enemy, turn, last_move, allies, rng)?,
    };

    if index >= len {
        return Err(SimError::unknown(
            crate::core::RecordKind::Move,
            format!("{}[{index}]", enemy.template.id),
        ));
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::content::Catalog;
    use crate::core::EntityId;
    use crate::entities::EnemyFlags;

    fn instance(catalog: &Catalog, id: &str) -> EnemyInstance {
        let template = Arc::clone(catalog.enemy(id).unwrap());
        let hp = template.hp.min();
        EnemyInstance::with_hp(EntityId(0), template, hp)
    }

    fn move_id(enemy: &EnemyInstance, index: usize) -> String {
        enemy.template.moveset[index].id.to_string()
    }

    #[test]
    fn test_boss_split_threshold() {
        let catalog = Catalog::base();
        let mut boss = instance(&catalog, "slime_boss");
        let mut rng = GameRng::new(2);

        for turn in 0..30 {
            let pick = decide(&boss, turn, None, &[], &mut rng).unwrap();
            assert_ne!(move_id(&boss, pick), "split");
        }

        boss.vitals.hp = boss.vitals.max_hp / 2;
        for turn in 0..30 {
            let pick = decide(&boss, turn, None, &[], &mut rng).unwrap();
            assert_eq!(move_id(&boss, pick), "split");
        }

        boss.flags.insert(EnemyFlags::HAS_SPLIT);
        for hp in [69, 30, 1] {
            boss.vitals.hp = hp;
            let pick = decide(&boss, 4, None, &[], &mut rng).unwrap();
            assert_ne!(move_id(&boss, pick), "split");
        }
    }

    #[test]
    fn test_decide_is_replayable() {
        let catalog = Catalog::base();
        for template in catalog.enemies().iter() {
            let enemy = EnemyInstance::with_hp(EntityId(0), Arc::clone(template), template.hp.min().max(1));
            let group = vec![enemy.clone()];
            let mut a = GameRng::new(77);
            let mut b = GameRng::new(77);
            for turn in 0..12 {
                let x = decide(&enemy, turn, Some(0), &group, &mut a);
                let y = decide(&enemy, turn, Some(0), &group, &mut b);
                assert_eq!(x, y, "{} turn {turn}", template.id);
                assert!(x.is_ok(), "{} turn {turn}: {x:?}", template.id);
            }
        }
    }

    #[test]
    fn test_decide_leaves_flags_alone() {
        let catalog = Catalog::base();
        let mut champ = instance(&catalog, "the_champ");
        champ.vitals.hp = 100;
        let before = champ.flags;
        let mut rng = GameRng::new(3);
        let pick = decide(&champ, 5, None, &[], &mut rng).unwrap();
        assert_eq!(move_id(&champ, pick), "anger");
        assert_eq!(champ.flags, before);
    }

    #[test]
    fn test_mystic_heals_hurt_ally() {
        let catalog = Catalog::base();
        let mystic = instance(&catalog, "mystic");
        let mut centurion = instance(&catalog, "centurion");
        centurion.id = EntityId(1);
        let mut rng = GameRng::new(1);

        let group = vec![mystic.clone(), centurion.clone()];
        assert_eq!(move_id(&mystic, decide(&mystic, 1, None, &group, &mut rng).unwrap()), "attack");

        centurion.vitals.hp = 10;
        let group = vec![mystic.clone(), centurion];
        assert_eq!(move_id(&mystic, decide(&mystic, 1, None, &group, &mut rng).unwrap()), "heal");
    }

    #[test]
    fn test_guardian_modes() {
        let catalog = Catalog::base();
        let mut guardian = instance(&catalog, "the_guardian");
        let mut rng = GameRng::new(1);
        let offensive: Vec<String> = (0..3)
            .map(|t| move_id(&guardian, decide(&guardian, t, None, &[], &mut rng).unwrap()))
            .collect();
        assert_eq!(offensive, ["vent_steam", "roll_attack", "fierce_bash"]);

        guardian.flags.insert(EnemyFlags::DEFENSIVE_MODE);
        let defensive: Vec<String> = (0..4)
            .map(|t| move_id(&guardian, decide(&guardian, t, None, &[], &mut rng).unwrap()))
            .collect();
        assert_eq!(defensive, ["charging_up", "whirlwind", "twin_slam", "mode_shift"]);
    }

    #[test]
    fn test_awakened_one_rebirth_choice() {
        let catalog = Catalog::base();
        let mut boss = instance(&catalog, "awakened_one");
        boss.vitals.hp = 0;
        let mut rng = GameRng::new(1);
        let pick = decide(&boss, 6, None, &[], &mut rng).unwrap();
        assert_eq!(move_id(&boss, pick), "rebirth");
    }

    #[test]
    fn test_missing_native_move_is_unknown_reference() {
        let catalog = Catalog::base();
        let mut template = (**catalog.enemy("cultist").unwrap()).clone();
        template.moveset.retain(|m| m.id != "incantation");
        let enemy = EnemyInstance::with_hp(EntityId(0), Arc::new(template), 50);
        let mut rng = GameRng::new(1);
        let err = decide(&enemy, 0, None, &[], &mut rng).unwrap_err();
        assert!(matches!(err, SimError::UnknownReference { .. }));
    }
}
