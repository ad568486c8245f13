//! Base card table.

use crate::content::card::{CardDefinition, CardRarity, CardSpecial, CardUpgrade, Cost};
use crate::content::effect::{Effect, StatusKind};

use CardRarity::{Basic, Common, Rare, Uncommon};
use StatusKind::{Strength, Vulnerable, Weak};

/// Every base card, in catalog order.
pub fn base_cards() -> Vec<CardDefinition> {
    vec![
        // Basic
        CardDefinition::attack("strike", "Strike", 1)
            .with_rarity(Basic)
            .with_damage(6)
            .with_upgrade(CardUpgrade::new().damage(9)),
        CardDefinition::skill("defend", "Defend", 1)
            .with_rarity(Basic)
            .with_block(5)
            .with_upgrade(CardUpgrade::new().block(8)),
        CardDefinition::attack("bash", "Bash", 2)
            .with_rarity(Basic)
            .with_damage(8)
            .with_effect(Effect::new(Vulnerable, 2))
            .with_upgrade(CardUpgrade::new().damage(10).effects(vec![Effect::new(Vulnerable, 3)])),
        // Common attacks
        CardDefinition::attack("anger", "Anger", 0)
            .with_rarity(Common)
            .with_damage(6)
            .with_special(CardSpecial::CopyToDiscard)
            .with_upgrade(CardUpgrade::new().damage(8)),
        CardDefinition::attack("cleave", "Cleave", 1)
            .with_rarity(Common)
            .with_damage(8)
            .target_all()
            .with_upgrade(CardUpgrade::new().damage(11)),
        CardDefinition::attack("clothesline", "Clothesline", 2)
            .with_rarity(Common)
            .with_damage(12)
            .with_effect(Effect::new(Weak, 2))
            .with_upgrade(CardUpgrade::new().damage(14).effects(vec![Effect::new(Weak, 3)])),
        CardDefinition::attack("iron_wave", "Iron Wave", 1)
            .with_rarity(Common)
            .with_damage(5)
            .with_block(5)
            .with_upgrade(CardUpgrade::new().damage(7).block(7)),
        CardDefinition::attack("pommel_strike", "Pommel Strike", 1)
            .with_rarity(Common)
            .with_damage(9)
            .with_draw(1)
            .with_upgrade(CardUpgrade::new().damage(10).draw(2)),
        CardDefinition::attack("sword_boomerang", "Sword Boomerang", 1)
            .with_rarity(Common)
            .with_damage(3)
            .with_hits(3)
            .random_target()
            .with_upgrade(CardUpgrade::new().hits(4)),
        CardDefinition::attack("thunderclap", "Thunderclap", 1)
            .with_rarity(Common)
            .with_damage(4)
            .target_all()
            .with_effect(Effect::new(Vulnerable, 1))
            .with_upgrade(CardUpgrade::new().damage(7)),
        CardDefinition::attack("twin_strike", "Twin Strike", 1)
            .with_rarity(Common)
            .with_damage(5)
            .with_hits(2)
            .with_upgrade(CardUpgrade::new().damage(7)),
        CardDefinition::attack("body_slam", "Body Slam", 1)
            .with_rarity(Common)
            .with_special(CardSpecial::DamageEqualsBlock)
            .with_upgrade(CardUpgrade::new().cost(0)),
        CardDefinition::attack("heavy_blade", "Heavy Blade", 2)
            .with_rarity(Common)
            .with_damage(14)
            .with_strength_multiplier(3)
            .with_upgrade(CardUpgrade::new().strength_multiplier(5)),
        // Common skills
        CardDefinition::skill("flex", "Flex", 0)
            .with_rarity(Common)
            .with_special(CardSpecial::Flex { amount: 2 })
            .with_upgrade(CardUpgrade::new().special(CardSpecial::Flex { amount: 4 })),
        CardDefinition::skill("shrug_it_off", "Shrug It Off", 1)
            .with_rarity(Common)
            .with_block(8)
            .with_draw(1)
            .with_upgrade(CardUpgrade::new().block(11)),
        CardDefinition::skill("true_grit", "True Grit", 1)
            .with_rarity(Common)
            .with_block(7)
            .with_upgrade(CardUpgrade::new().block(9)),
        // Uncommon
        CardDefinition::skill("bloodletting", "Bloodletting", 0)
            .with_rarity(Uncommon)
            .with_hp_cost(3)
            .with_energy(2)
            .with_upgrade(CardUpgrade::new().energy(3)),
        CardDefinition::attack("carnage", "Carnage", 2)
            .with_rarity(Uncommon)
            .with_damage(20)
            .with_upgrade(CardUpgrade::new().damage(28)),
        CardDefinition::attack("hemokinesis", "Hemokinesis", 1)
            .with_rarity(Uncommon)
            .with_damage(15)
            .with_hp_cost(2)
            .with_upgrade(CardUpgrade::new().damage(20)),
        CardDefinition::attack("pummel", "Pummel", 1)
            .with_rarity(Uncommon)
            .with_damage(2)
            .with_hits(4)
            .exhausts()
            .with_upgrade(CardUpgrade::new().hits(5)),
        CardDefinition::attack("uppercut", "Uppercut", 2)
            .with_rarity(Uncommon)
            .with_damage(13)
            .with_effect(Effect::new(Weak, 1))
            .with_effect(Effect::new(Vulnerable, 1))
            .with_upgrade(CardUpgrade::new().effects(vec![Effect::new(Weak, 2), Effect::new(Vulnerable, 2)])),
        CardDefinition::attack("whirlwind", "Whirlwind", 0)
            .with_cost(Cost::X)
            .with_rarity(Uncommon)
            .with_damage(5)
            .target_all()
            .with_upgrade(CardUpgrade::new().damage(8)),
        CardDefinition::skill("entrench", "Entrench", 2)
            .with_rarity(Uncommon)
            .with_special(CardSpecial::DoubleBlock)
            .with_upgrade(CardUpgrade::new().cost(1)),
        CardDefinition::skill("ghostly_armor", "Ghostly Armor", 1)
            .with_rarity(Uncommon)
            .with_block(10)
            .with_upgrade(CardUpgrade::new().block(13)),
        CardDefinition::skill("rage", "Rage", 0)
            .with_rarity(Uncommon)
            .with_special(CardSpecial::Rage { amount: 3 })
            .with_upgrade(CardUpgrade::new().special(CardSpecial::Rage { amount: 5 })),
        CardDefinition::skill("seeing_red", "Seeing Red", 1)
            .with_rarity(Uncommon)
            .with_energy(2)
            .exhausts()
            .with_upgrade(CardUpgrade::new().cost(0)),
        CardDefinition::skill("disarm", "Disarm", 1)
            .with_rarity(Uncommon)
            .with_effect(Effect::new(StatusKind::StrengthDown, 2))
            .exhausts()
            .with_upgrade(CardUpgrade::new().effects(vec![Effect::new(StatusKind::StrengthDown, 3)])),
        CardDefinition::power("inflame", "Inflame", 1)
            .with_rarity(Uncommon)
            .with_effect(Effect::new(Strength, 2).on_self())
            .with_upgrade(CardUpgrade::new().effects(vec![Effect::new(Strength, 3).on_self()])),
        CardDefinition::power("metallicize", "Metallicize", 1)
            .with_rarity(Uncommon)
            .with_special(CardSpecial::Metallicize { amount: 3 })
            .with_upgrade(CardUpgrade::new().special(CardSpecial::Metallicize { amount: 4 })),
        // Rare
        CardDefinition::attack("bludgeon", "Bludgeon", 3)
            .with_rarity(Rare)
            .with_damage(32)
            .with_upgrade(CardUpgrade::new().damage(42)),
        CardDefinition::skill("impervious", "Impervious", 2)
            .with_rarity(Rare)
            .with_block(30)
            .exhausts()
            .with_upgrade(CardUpgrade::new().block(40)),
        CardDefinition::skill("limit_break", "Limit Break", 1)
            .with_rarity(Rare)
            .with_special(CardSpecial::DoubleStrength)
            .exhausts()
            .with_upgrade(CardUpgrade::new().exhaust(false)),
        CardDefinition::power("barricade", "Barricade", 3)
            .with_rarity(Rare)
            .with_special(CardSpecial::Barricade)
            .with_upgrade(CardUpgrade::new().cost(2)),
        CardDefinition::power("demon_form", "Demon Form", 3)
            .with_rarity(Rare)
            .with_special(CardSpecial::DemonForm { amount: 2 })
            .with_upgrade(CardUpgrade::new().special(CardSpecial::DemonForm { amount: 3 })),
        // Status
        CardDefinition::status("wound", "Wound"),
        CardDefinition::status("dazed", "Dazed").exhausts(),
        CardDefinition::status("burn", "Burn")
            .with_special(CardSpecial::Burn { damage: 2 })
            .with_upgrade(CardUpgrade::new().special(CardSpecial::Burn { damage: 4 })),
        {
            // Slimed can be played for 1 to get rid of it.
            let mut slimed = CardDefinition::status("slimed", "Slimed").exhausts();
            slimed.cost = Cost::Fixed(1);
            slimed.unplayable = false;
            slimed
        },
    ]
}

/// Card ids and counts of the starter deck.
pub const STARTER_DECK: &[(&str, usize)] = &[("strike", 5), ("defend", 4), ("bash", 1)];
