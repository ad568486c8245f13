//! Base relic table.

use crate::content::relic::{RelicDefinition, RelicEffect, RelicRarity, RelicTrigger};

use RelicEffect as E;
use RelicRarity::{Boss, Common, Rare, Shop, Starter, Uncommon};
use RelicTrigger as T;

/// Every base relic, in catalog order.
pub fn base_relics() -> Vec<RelicDefinition> {
    vec![
        // Starter
        RelicDefinition::new("burning_blood", "Burning Blood", Starter, T::CombatEnd, E::Heal { amount: 6 }),
        // Common
        RelicDefinition::new("anchor", "Anchor", Common, T::CombatStart, E::Block { amount: 10 }),
        RelicDefinition::new("bag_of_preparation", "Bag of Preparation", Common, T::CombatStart, E::Draw { amount: 2 }),
        RelicDefinition::new("blood_vial", "Blood Vial", Common, T::CombatStart, E::Heal { amount: 2 }),
        RelicDefinition::new("bronze_scales", "Bronze Scales", Common, T::DamageTaken, E::Thorns { amount: 3 }),
        RelicDefinition::new("centennial_puzzle", "Centennial Puzzle", Common, T::FirstHpLoss, E::Draw { amount: 3 })
            .once_per_combat(),
        RelicDefinition::new("lantern", "Lantern", Common, T::TurnStart, E::Energy { amount: 1 }).on_turn(1),
        RelicDefinition::new("nunchaku", "Nunchaku", Common, T::AttackPlayed, E::Energy { amount: 1 }).every(10),
        RelicDefinition::new("oddly_smooth_stone", "Oddly Smooth Stone", Common, T::CombatStart, E::Dexterity { amount: 1 }),
        RelicDefinition::new("orichalcum", "Orichalcum", Common, T::TurnEnd, E::BlockIfNone { amount: 6 }),
        RelicDefinition::new("pen_nib", "Pen Nib", Common, T::AttackPlayed, E::DoubleDamage).every(10),
        RelicDefinition::new("vajra", "Vajra", Common, T::CombatStart, E::Strength { amount: 1 }),
        RelicDefinition::new("bag_of_marbles", "Bag of Marbles", Common, T::CombatStart, E::Vulnerable { amount: 1 }),
        RelicDefinition::new("red_skull", "Red Skull", Common, T::Passive, E::StrengthIfLowHp { amount: 3, threshold_pct: 50 }),
        RelicDefinition::new("happy_flower", "Happy Flower", Common, T::TurnStart, E::Energy { amount: 1 }).every(3),
        RelicDefinition::new("regal_pillow", "Regal Pillow", Common, T::Rest, E::Heal { amount: 15 }),
        // Uncommon
        RelicDefinition::new("horn_cleat", "Horn Cleat", Uncommon, T::TurnStart, E::Block { amount: 14 }).on_turn(2),
        RelicDefinition::new("kunai", "Kunai", Uncommon, T::AttackPlayed, E::Dexterity { amount: 1 })
            .every(3)
            .reset_each_turn(),
        RelicDefinition::new("shuriken", "Shuriken", Uncommon, T::AttackPlayed, E::Strength { amount: 1 })
            .every(3)
            .reset_each_turn(),
        RelicDefinition::new("ornamental_fan", "Ornamental Fan", Uncommon, T::AttackPlayed, E::Block { amount: 4 })
            .every(3)
            .reset_each_turn(),
        RelicDefinition::new("letter_opener", "Letter Opener", Uncommon, T::SkillPlayed, E::DamageAll { amount: 5 })
            .every(3)
            .reset_each_turn(),
        RelicDefinition::new("meat_on_the_bone", "Meat on the Bone", Uncommon, T::CombatEnd, E::HealIfLowHp { amount: 12, threshold_pct: 50 }),
        RelicDefinition::new("mercury_hourglass", "Mercury Hourglass", Uncommon, T::TurnStart, E::DamageAll { amount: 3 }),
        RelicDefinition::new("paper_phrog", "Paper Phrog", Uncommon, T::Passive, E::VulnerableBonus { percent: 25 }),
        RelicDefinition::new("self_forming_clay", "Self-Forming Clay", Uncommon, T::HpLoss, E::BlockNextTurn { amount: 3 }),
        RelicDefinition::new("strike_dummy", "Strike Dummy", Uncommon, T::StrikePlayed, E::Damage { amount: 3 }),
        RelicDefinition::new("torii", "Torii", Uncommon, T::DamageReceived, E::ReduceLowDamage { threshold: 5 }),
        RelicDefinition::new("gremlin_horn", "Gremlin Horn", Uncommon, T::Exhaust, E::Draw { amount: 1 }),
        RelicDefinition::new("du_vu_doll", "Du-Vu Doll", Uncommon, T::CombatStart, E::StrengthPerCurse { amount: 1 }),
        // Rare
        RelicDefinition::new("incense_burner", "Incense Burner", Rare, T::TurnEnd, E::Intangible { amount: 1 }).every(6),
        RelicDefinition::new("mango", "Mango", Rare, T::Pickup, E::MaxHp { amount: 14 }),
        RelicDefinition::new("tungsten_rod", "Tungsten Rod", Rare, T::HpLoss, E::ReduceHpLoss { amount: 1 }),
        RelicDefinition::new("magic_flower", "Magic Flower", Rare, T::Passive, E::HealingBonus { percent: 50 }),
        RelicDefinition::new("ice_cream", "Ice Cream", Rare, T::Passive, E::ConserveEnergy),
        RelicDefinition::new("singing_bowl", "Singing Bowl", Rare, T::CardReward, E::MaxHp { amount: 2 }),
        // Boss
        RelicDefinition::new("cursed_key", "Cursed Key", Boss, T::Passive, E::ExtraEnergy { amount: 1 }),
        RelicDefinition::new("snecko_eye", "Snecko Eye", Boss, T::Passive, E::ExtraDraw { amount: 2 }),
        RelicDefinition::new("velvet_choker", "Velvet Choker", Boss, T::Passive, E::CardLimit { limit: 6 }),
        // Shop
        RelicDefinition::new("strawberry", "Strawberry", Shop, T::Pickup, E::MaxHp { amount: 7 }),
    ]
}
