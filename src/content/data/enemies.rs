//! Base enemy table.

use crate::content::effect::{Effect, StatusKind};
use crate::content::enemy::{
    AiSpec, EnemyKind, EnemyTemplate, HpRange, Intent, Move, NativeAi, Passives, StrengthTier,
};
use crate::content::special::{OneShot, Pile, SpawnRecipe, SpecialEffect};

use EnemyKind::{Boss, Elite, Minion, Normal};
use Intent::*;
use StatusKind::*;
use StrengthTier::{Medium, Weak as WeakTier};

const fn hp(min: i32, max: i32) -> HpRange {
    HpRange::Range { min, max }
}

fn mv(id: &str, name: &str, intent: Intent) -> Move {
    Move::new(id, name, intent)
}

fn fx(kind: StatusKind, amount: i32) -> Effect {
    Effect::new(kind, amount)
}

fn add(card: &str, count: u32) -> SpecialEffect {
    SpecialEffect::add_cards(card, count, Pile::Discard)
}

/// Every base enemy, in catalog order.
pub fn base_enemies() -> Vec<EnemyTemplate> {
    let mut all = Vec::with_capacity(48);
    all.extend(act_one());
    all.extend(act_two());
    all.extend(act_three());
    all.extend(bosses());
    all.extend(spawned());
    all
}

fn act_one() -> Vec<EnemyTemplate> {
    vec![
        EnemyTemplate::new("cultist", "Cultist", Normal, 1, hp(48, 54))
            .with_tier(Medium)
            .with_move(mv("incantation", "Incantation", Buff).with_effect(fx(Ritual, 3)))
            .with_move(Move::attack("dark_strike", "Dark Strike", 6))
            .native(NativeAi::Cultist),
        EnemyTemplate::new("jaw_worm", "Jaw Worm", Normal, 1, hp(42, 46))
            .with_move(Move::attack("chomp", "Chomp", 12))
            .with_move(Move::attack("thrash", "Thrash", 7).with_intent(AttackDefend).with_block(5))
            .with_move(mv("bellow", "Bellow", DefendBuff).with_block(6).with_effect(fx(Strength, 4)))
            .native(NativeAi::JawWorm),
        EnemyTemplate::new("louse_red", "Red Louse", Normal, 1, hp(10, 15))
            .with_tier(WeakTier)
            .with_move(mv("bite", "Bite", Attack).with_damage_range(5, 7))
            .with_move(mv("grow", "Grow", Buff).with_effect(fx(Strength, 2)))
            .native(NativeAi::RedLouse),
        EnemyTemplate::new("louse_green", "Green Louse", Normal, 1, hp(11, 17))
            .with_tier(WeakTier)
            .with_move(mv("bite", "Bite", Attack).with_damage_range(5, 7))
            .with_move(mv("spit_web", "Spit Web", Debuff).with_effect(fx(Weak, 1)))
            .native(NativeAi::GreenLouse),
        EnemyTemplate::new("slime_small", "Acid Slime (S)", Normal, 1, hp(8, 12))
            .with_tier(WeakTier)
            .with_move(mv("lick", "Lick", Debuff).with_effect(fx(Weak, 1)))
            .with_move(Move::attack("tackle", "Tackle", 3))
            .native(NativeAi::AcidSlimeSmall),
        EnemyTemplate::new("slime_medium", "Acid Slime (M)", Normal, 1, hp(28, 32))
            .with_tier(Medium)
            .with_move(
                Move::attack("corrosive_spit", "Corrosive Spit", 7)
                    .with_intent(AttackDebuff)
                    .with_special(add("slimed", 1)),
            )
            .with_move(mv("lick", "Lick", Debuff).with_effect(fx(Weak, 1)))
            .with_move(Move::attack("tackle", "Tackle", 10))
            .native(NativeAi::AcidSlimeMedium)
            .on_death(SpawnRecipe::AcidSlimeSmallPair),
        EnemyTemplate::new("slime_large", "Acid Slime (L)", Elite, 1, hp(95, 105))
            .with_move(
                Move::attack("corrosive_spit", "Corrosive Spit", 12)
                    .with_intent(AttackDebuff)
                    .with_special(add("slimed", 1)),
            )
            .with_move(mv("lick", "Lick", Debuff).with_effect(fx(Weak, 2)))
            .with_move(Move::attack("tackle", "Tackle", 18))
            .with_move(mv("split", "Split", Unknown).with_special(SpecialEffect::Split {
                recipe: SpawnRecipe::AcidSlimeMediumSplit,
            }))
            .native(NativeAi::AcidSlimeLarge),
        EnemyTemplate::new("spike_slime_small", "Spike Slime (S)", Normal, 1, hp(10, 14))
            .with_tier(WeakTier)
            .with_move(Move::attack("tackle", "Tackle", 5))
            .with_ai(AiSpec::Sequential),
        EnemyTemplate::new("spike_slime_medium", "Spike Slime (M)", Normal, 1, hp(28, 32))
            .with_tier(Medium)
            .with_move(Move::attack("flame_tackle", "Flame Tackle", 8).with_special(add("slimed", 1)))
            .with_move(mv("lick", "Lick", Debuff).with_effect(fx(Frail, 1)))
            .native(NativeAi::SpikeSlimeMedium)
            .on_death(SpawnRecipe::SpikeSlimeSmallPair),
        EnemyTemplate::new("fungi_beast", "Fungi Beast", Normal, 1, hp(22, 28))
            .with_tier(WeakTier)
            .with_move(Move::attack("bite", "Bite", 6))
            .with_move(mv("grow", "Grow", Buff).with_effect(fx(Strength, 2)))
            .native(NativeAi::FungiBeast),
        EnemyTemplate::new("looter", "Looter", Normal, 1, hp(44, 48))
            .with_move(Move::attack("mug", "Mug", 10))
            .with_move(Move::attack("lunge", "Lunge", 12))
            .with_move(
                mv("smoke_bomb", "Smoke Bomb", DefendBuff)
                    .with_block(6)
                    .with_special(SpecialEffect::KillSelf),
            )
            .native(NativeAi::Looter),
        EnemyTemplate::new("gremlin_nob", "Gremlin Nob", Elite, 1, hp(106, 118))
            .with_move(
                mv("bellow", "Bellow", Buff)
                    .with_effect(fx(Enrage, 3))
                    .with_effect(fx(Strength, 2)),
            )
            .with_move(Move::attack("rush", "Rush", 18))
            .with_move(
                Move::attack("skull_bash", "Skull Bash", 10)
                    .with_intent(AttackDebuff)
                    .with_effect(fx(Vulnerable, 2)),
            )
            .native(NativeAi::GremlinNob),
        EnemyTemplate::new("lagavulin", "Lagavulin", Elite, 1, hp(120, 128))
            .with_move(mv("sleep", "Sleeping...", Sleeping))
            .with_move(Move::attack("attack", "Attack", 20))
            .with_move(
                mv("siphon_soul", "Siphon Soul", StrongDebuff)
                    .with_effect(fx(StrengthDown, 2))
                    .with_effect(fx(DexterityDown, 2)),
            )
            .with_passives(Passives {
                metallicize: 10,
                retain_block: true,
                asleep: true,
                ..Passives::default()
            })
            .native(NativeAi::Lagavulin),
        EnemyTemplate::new("sentry", "Sentry", Elite, 1, hp(38, 42))
            .with_move(Move::attack("bolt", "Bolt", 9))
            .with_move(
                Move::attack("beam", "Beam", 9)
                    .with_intent(AttackDebuff)
                    .with_special(add("dazed", 1)),
            )
            .with_passives(Passives {
                artifact: 1,
                ..Passives::default()
            })
            .with_spawn_count(3)
            .native(NativeAi::Sentry),
    ]
}

fn act_two() -> Vec<EnemyTemplate> {
    vec![
        EnemyTemplate::new("chosen", "Chosen", Normal, 2, hp(62, 68))
            .with_move(Move::attack("poke", "Poke", 5).with_hits(2))
            .with_move(
                Move::attack("zap", "Zap", 12)
                    .with_intent(AttackDebuff)
                    .with_effect(fx(Vulnerable, 2)),
            )
            .with_move(
                mv("debilitate", "Debilitate", Debuff)
                    .with_effect(fx(Weak, 2))
                    .with_effect(fx(Vulnerable, 2)),
            )
            .with_move(mv("hex", "Hex", Debuff).with_special(SpecialEffect::add_cards("dazed", 1, Pile::Draw)))
            .native(NativeAi::Chosen),
        EnemyTemplate::new("byrd", "Byrd", Normal, 2, hp(25, 31))
            .with_tier(Medium)
            .with_move(mv("caw", "Caw", Buff).with_effect(fx(Strength, 1)))
            .with_move(Move::attack("peck", "Peck", 1).with_hits(5))
            .with_move(Move::attack("swoop", "Swoop", 12))
            .with_move(mv("fly", "Fly", Buff).with_special(SpecialEffect::GainFlight { amount: 3 }))
            .with_passives(Passives {
                flying: true,
                ..Passives::default()
            })
            .native(NativeAi::Byrd),
        EnemyTemplate::new("snake_plant", "Snake Plant", Normal, 2, hp(52, 58))
            .with_move(Move::attack("chomp", "Chomp", 5).with_hits(3))
            .with_move(
                mv("enfeeble", "Enfeeble", Debuff)
                    .with_effect(fx(Weak, 2))
                    .with_effect(fx(Frail, 2)),
            )
            .native(NativeAi::SnakePlant),
        EnemyTemplate::new("centurion", "Centurion", Normal, 2, hp(56, 62))
            .with_move(Move::attack("slash", "Slash", 10))
            .with_move(Move::attack("fury", "Fury", 5).with_hits(3))
            .with_move(mv("defend", "Defend", Defend).with_block(12))
            .paired_with("mystic")
            .native(NativeAi::Centurion),
        EnemyTemplate::new("mystic", "Mystic", Normal, 2, hp(50, 56))
            .with_tier(Medium)
            .with_move(mv("heal", "Heal", Buff).with_special(SpecialEffect::HealLowestAlly { amount: 12 }))
            .with_move(Move::attack("attack", "Attack", 8))
            .paired_with("centurion")
            .native(NativeAi::Mystic),
        EnemyTemplate::new("book_of_stabbing", "Book of Stabbing", Elite, 2, hp(180, 192))
            .with_move(
                Move::attack("multi_stab", "Multi Stab", 7)
                    .with_hits(3)
                    .with_special(SpecialEffect::EscalateHits { step: 1 }),
            )
            .with_move(Move::attack("single_stab", "Single Stab", 24))
            .native(NativeAi::BookOfStabbing),
        EnemyTemplate::new("gremlin_leader", "Gremlin Leader", Elite, 2, hp(160, 172))
            .with_move(mv("encourage", "Encourage", Buff).with_special(SpecialEffect::BuffAllies { strength: 3 }))
            .with_move(mv("rally", "Rally!", Buff).with_special(SpecialEffect::Summon {
                recipe: SpawnRecipe::Gremlins,
            }))
            .with_move(Move::attack("stab", "Stab", 7).with_hits(4))
            .native(NativeAi::GremlinLeader),
        EnemyTemplate::new("slaver_blue", "Slaver", Normal, 2, hp(46, 50))
            .with_move(Move::attack("stab", "Stab", 12))
            .with_move(
                Move::attack("rake", "Rake", 7)
                    .with_intent(AttackDebuff)
                    .with_effect(fx(Weak, 1)),
            )
            .with_move(mv("entangle", "Entangle", Debuff).with_effect(fx(Entangle, 1)))
            .native(NativeAi::Slaver),
        EnemyTemplate::new("snecko", "Snecko", Normal, 2, hp(60, 66))
            .with_move(Move::attack("bite", "Bite", 15))
            .with_move(
                Move::attack("tail_whip", "Tail Whip", 8)
                    .with_intent(AttackDebuff)
                    .with_effect(fx(Frail, 2)),
            )
            .with_ai(AiSpec::Sequential),
        EnemyTemplate::new("shelled_parasite", "Shelled Parasite", Normal, 2, hp(68, 72))
            .with_move(mv("shell", "Shell", Defend).with_block(14))
            .with_move(
                Move::attack("suck", "Suck", 10)
                    .with_intent(AttackBuff)
                    .with_special(SpecialEffect::HealSelf { amount: 5 }),
            )
            .with_move(Move::attack("double_tap", "Double Tap", 6).with_hits(2))
            .with_passives(Passives {
                retain_block: true,
                ..Passives::default()
            })
            .native(NativeAi::ShelledParasite),
        EnemyTemplate::new("spheric_guardian", "Spheric Guardian", Normal, 2, hp(44, 48))
            .with_move(Move::attack("slam", "Slam", 10))
            .with_move(
                mv("activate", "Activate", DefendBuff)
                    .with_block(25)
                    .with_effect(fx(Strength, 2)),
            )
            .with_move(mv("harden", "Harden", Defend).with_block(15))
            .with_passives(Passives {
                retain_block: true,
                ..Passives::default()
            })
            .native(NativeAi::SphericGuardian),
    ]
}

fn act_three() -> Vec<EnemyTemplate> {
    vec![
        EnemyTemplate::new("writhing_mass", "Writhing Mass", Normal, 3, hp(88, 96))
            .with_move(
                Move::attack("implant", "Implant", 12)
                    .with_special(SpecialEffect::add_cards("wound", 1, Pile::Draw)),
            )
            .with_move(Move::attack("flail", "Flail", 12))
            .with_move(
                mv("wither", "Wither", StrongDebuff)
                    .with_effect(fx(Weak, 2))
                    .with_effect(fx(Vulnerable, 2)),
            )
            .with_move(Move::attack("multi_strike", "Multi Strike", 7).with_hits(3))
            .native(NativeAi::WrithingMass),
        EnemyTemplate::new("giant_head", "Giant Head", Elite, 3, hp(520, 560))
            .with_move(mv("count", "Count", Unknown).with_special(SpecialEffect::Count))
            .with_move(
                mv("glare", "Glare", Debuff)
                    .with_effect(fx(Weak, 2))
                    .with_effect(fx(Frail, 1)),
            )
            .with_move(Move::attack("dark_echo", "Dark Echo", 45))
            .with_passives(Passives {
                slow_limit: 4,
                ..Passives::default()
            })
            .native(NativeAi::GiantHead),
        EnemyTemplate::new("reptomancer", "Reptomancer", Elite, 3, hp(200, 216))
            .with_move(mv("summon", "Summon", Buff).with_special(SpecialEffect::Summon {
                recipe: SpawnRecipe::Daggers,
            }))
            .with_move(Move::attack("snake_strike", "Snake Strike", 15).with_hits(2))
            .with_move(Move::attack("big_bite", "Big Bite", 34))
            .native(NativeAi::Reptomancer),
        EnemyTemplate::new("orb_walker", "Orb Walker", Normal, 3, hp(90, 96))
            .with_move(Move::attack("laser", "Laser", 10))
            .with_move(Move::attack("claw", "Claw", 15))
            .with_move(
                Move::attack("burn_strike", "Burn Strike", 11)
                    .with_intent(AttackDebuff)
                    .with_special(add("burn", 2)),
            )
            .native(NativeAi::OrbWalker),
        EnemyTemplate::new("spiker", "Spiker", Normal, 3, hp(42, 56))
            .with_move(Move::attack("cut", "Cut", 7))
            .with_move(mv("spike", "Spike", Buff).with_effect(fx(Thorns, 2)))
            .with_passives(Passives {
                thorns: 3,
                ..Passives::default()
            })
            .native(NativeAi::Spiker),
    ]
}

fn bosses() -> Vec<EnemyTemplate> {
    vec![
        EnemyTemplate::new("slime_boss", "Slime Boss", Boss, 1, HpRange::Fixed(140))
            .with_move(mv("goop_spray", "Goop Spray", Debuff).with_special(add("slimed", 3)))
            .with_move(mv("preparing", "Preparing...", Unknown))
            .with_move(Move::attack("slam", "Slam", 35))
            .with_move(mv("split", "Split", Unknown).with_special(SpecialEffect::Split {
                recipe: SpawnRecipe::SlimeBossSplit,
            }))
            .native(NativeAi::SlimeBoss),
        EnemyTemplate::new("the_guardian", "The Guardian", Boss, 1, HpRange::Fixed(240))
            .with_move(mv("charging_up", "Charging Up", Defend).with_block(9))
            .with_move(Move::attack("fierce_bash", "Fierce Bash", 32))
            .with_move(
                mv("vent_steam", "Vent Steam", Debuff)
                    .with_effect(fx(Weak, 2))
                    .with_effect(fx(Vulnerable, 2)),
            )
            .with_move(Move::attack("whirlwind", "Whirlwind", 5).with_hits(4))
            .with_move(Move::attack("roll_attack", "Roll Attack", 9))
            .with_move(Move::attack("twin_slam", "Twin Slam", 8).with_hits(2))
            .with_move(
                mv("mode_shift", "Mode Shift", DefendBuff)
                    .with_block(20)
                    .with_special(SpecialEffect::ModeShift),
            )
            .with_passives(Passives {
                retain_block: true,
                ..Passives::default()
            })
            .native(NativeAi::Guardian),
        EnemyTemplate::new("hexaghost", "Hexaghost", Boss, 1, HpRange::Fixed(250))
            .with_move(mv("activate", "Activate", Unknown))
            .with_move(
                Move::attack("divider", "Divider", 6)
                    .with_hits(6)
                    .with_special(SpecialEffect::HpScaledDamage { divisor: 12 }),
            )
            .with_move(
                Move::attack("sear", "Sear", 6)
                    .with_intent(AttackDebuff)
                    .with_special(add("burn", 1)),
            )
            .with_move(Move::attack("tackle", "Tackle", 5).with_hits(2))
            .with_move(
                mv("inflame", "Inflame", Buff)
                    .with_effect(fx(Strength, 2))
                    .with_special(SpecialEffect::UpgradeBurns),
            )
            .with_move(
                Move::attack("inferno", "Inferno", 2)
                    .with_hits(6)
                    .with_special(add("burn", 6)),
            )
            .native(NativeAi::Hexaghost),
        EnemyTemplate::new("the_champ", "The Champ", Boss, 2, HpRange::Fixed(420))
            .with_move(
                mv("defensive_stance", "Defensive Stance", DefendBuff)
                    .with_block(15)
                    .with_effect(fx(Metallicize, 5)),
            )
            .with_move(
                Move::attack("face_slap", "Face Slap", 12)
                    .with_intent(AttackDebuff)
                    .with_effect(fx(Frail, 2))
                    .with_effect(fx(Vulnerable, 2)),
            )
            .with_move(Move::attack("heavy_slash", "Heavy Slash", 16))
            .with_move(Move::attack("execute", "Execute", 10).with_hits(2))
            .with_move(
                mv("taunt", "Taunt", Debuff)
                    .with_effect(fx(Weak, 2))
                    .with_effect(fx(Vulnerable, 2)),
            )
            .with_move(
                mv("anger", "ANGER!", Buff)
                    .with_effect(fx(Strength, 6))
                    .with_special(SpecialEffect::ClearDebuffs {
                        mark: Some(OneShot::Angered),
                    }),
            )
            .with_passives(Passives {
                retain_block: true,
                ..Passives::default()
            })
            .native(NativeAi::Champ),
        EnemyTemplate::new("awakened_one", "Awakened One", Boss, 3, HpRange::Fixed(300))
            .with_move(Move::attack("slash", "Slash", 20))
            .with_move(Move::attack("soul_strike", "Soul Strike", 6).with_hits(4))
            .with_move(Move::attack("dark_echo", "Dark Echo", 40))
            .with_move(mv("rebirth", "Rebirth", Buff).with_special(SpecialEffect::Rebirth { strength: 2 }))
            .with_move(Move::attack("tackle", "Tackle", 10))
            .with_passives(Passives {
                can_rebirth: true,
                ..Passives::default()
            })
            .native(NativeAi::AwakenedOne),
        EnemyTemplate::new("time_eater", "Time Eater", Boss, 3, HpRange::Fixed(456))
            .with_move(Move::attack("reverberate", "Reverberate", 7).with_hits(3))
            .with_move(Move::attack("head_slam", "Head Slam", 26))
            .with_move(
                Move::attack("ripple", "Ripple", 10)
                    .with_intent(AttackDebuff)
                    .with_effect(fx(DrawReduction, 1)),
            )
            .with_move(
                mv("haste", "Haste", Buff)
                    .with_effect(fx(Strength, 2))
                    .with_special(SpecialEffect::ClearDebuffs {
                        mark: Some(OneShot::Hasted),
                    }),
            )
            .native(NativeAi::TimeEater),
        EnemyTemplate::new("corrupt_heart", "Corrupt Heart", Boss, 4, HpRange::Fixed(800))
            .with_move(
                mv("debilitate", "Debilitate", StrongDebuff)
                    .with_effect(fx(Vulnerable, 2))
                    .with_effect(fx(Weak, 2))
                    .with_effect(fx(Frail, 2)),
            )
            .with_move(Move::attack("blood_shots", "Blood Shots", 2).with_hits(15))
            .with_move(
                Move::attack("echo", "Echo", 40)
                    .with_intent(AttackDebuff)
                    .with_special(SpecialEffect::AddCards {
                        cards: ["dazed", "slimed", "wound", "burn"].iter().map(|&c| c.into()).collect(),
                        count: 1,
                        pile: Pile::Draw,
                    }),
            )
            .with_move(
                mv("buff", "Buff", Buff)
                    .with_effect(fx(Strength, 2))
                    .with_effect(fx(Artifact, 2))
                    .with_special(SpecialEffect::BeatOfDeath { damage: 1 }),
            )
            .with_passives(Passives {
                invincible: 300,
                ..Passives::default()
            })
            .native(NativeAi::CorruptHeart),
    ]
}

/// Templates that only exist as spawn recipe output.
fn spawned() -> Vec<EnemyTemplate> {
    vec![
        EnemyTemplate::new("slime_large_acid", "Acid Slime (L)", Minion, 1, hp(65, 69))
            .with_move(
                Move::attack("corrosive_spit", "Corrosive Spit", 12)
                    .with_intent(AttackDebuff)
                    .with_special(add("slimed", 1)),
            )
            .with_move(mv("lick", "Lick", Debuff).with_effect(fx(Weak, 2)))
            .with_move(Move::attack("tackle", "Tackle", 18))
            .native(NativeAi::SplitSlime),
        EnemyTemplate::new("slime_large_spike", "Spike Slime (L)", Minion, 1, hp(64, 70))
            .with_move(Move::attack("flame_tackle", "Flame Tackle", 16).with_special(add("slimed", 1)))
            .with_move(mv("lick", "Lick", Debuff).with_effect(fx(Frail, 2)))
            .native(NativeAi::SplitSlime),
        EnemyTemplate::new("dagger", "Dagger", Minion, 3, hp(20, 25))
            .with_move(Move::attack("stab", "Stab", 9))
            .with_move(Move::attack("explode", "Explode!", 25).with_special(SpecialEffect::KillSelf))
            .native(NativeAi::Dagger),
        EnemyTemplate::new("gremlin_mad", "Mad Gremlin", Minion, 2, hp(12, 19))
            .with_move(Move::attack("scratch", "Scratch", 4)),
        EnemyTemplate::new("gremlin_sneaky", "Sneaky Gremlin", Minion, 2, hp(12, 19))
            .with_move(Move::attack("puncture", "Puncture", 9)),
        EnemyTemplate::new("gremlin_fat", "Fat Gremlin", Minion, 2, hp(12, 19))
            .with_move(Move::attack("smash", "Smash", 4))
            .with_move(
                mv("shield_bash", "Shield Bash", DefendBuff)
                    .with_block(6)
                    .with_effect(fx(Weak, 1)),
            ),
        EnemyTemplate::new("gremlin_wizard", "Gremlin Wizard", Minion, 2, hp(12, 19))
            .with_move(mv("charge", "Charging...", Buff))
            .with_move(Move::attack("ultimate_blast", "Ultimate Blast", 25)),
        EnemyTemplate::new("gremlin_shield", "Shield Gremlin", Minion, 2, hp(12, 19))
            .with_move(mv("protect", "Protect", Defend).with_block(8))
            .with_move(Move::attack("shield_bash", "Shield Bash", 6)),
    ]
}

