//! Built-in decision procedures.
//!
//! Moves are looked up by id, so reordering a built-in moveset through an
//! override keeps the behaviour intact. A procedure that names a move the
//! template no longer has fails with `SimError::UnknownReference`.

use crate::content::NativeAi;
use crate::core::{GameRng, RecordKind, SimError};
use crate::entities::{EnemyFlags, EnemyInstance};

/// Inputs of one decision.
struct Ctx<'a> {
    enemy: &'a EnemyInstance,
    turn: u32,
    last_move: Option<usize>,
    allies: &'a [EnemyInstance],
}

impl Ctx<'_> {
    fn pick(&self, id: &str) -> Result<usize, SimError> {
        self.enemy
            .template
            .move_index(id)
            .ok_or_else(|| SimError::unknown(RecordKind::Move, format!("{}.{id}", self.enemy.template.id)))
    }

    fn last_was(&self, id: &str) -> bool {
        self.last_move
            .and_then(|i| self.enemy.move_at(i))
            .is_some_and(|m| m.id == id)
    }

    fn flag(&self, flag: EnemyFlags) -> bool {
        self.enemy.flags.contains(flag)
    }

    fn at_or_below_half(&self) -> bool {
        self.enemy.vitals.hp * 2 <= self.enemy.vitals.max_hp
    }

    fn even_turn(&self) -> bool {
        self.turn % 2 == 0
    }
}

/// Pick the next move index for a built-in enemy.
pub fn decide(
    behavior: NativeAi,
    enemy: &EnemyInstance,
    turn: u32,
    last_move: Option<usize>,
    allies: &[EnemyInstance],
    rng: &mut GameRng,
) -> Result<usize, SimError> {
    let cx = Ctx {
        enemy,
        turn,
        last_move,
        allies,
    };

    match behavior {
        NativeAi::Cultist => cx.pick(if turn == 0 { "incantation" } else { "dark_strike" }),

        NativeAi::JawWorm => {
            if turn == 0 {
                return cx.pick("chomp");
            }
            let roll = rng.next_f64();
            if roll < 0.45 && !cx.last_was("chomp") {
                cx.pick("chomp")
            } else if roll < 0.75 && !cx.last_was("thrash") {
                cx.pick("thrash")
            } else {
                cx.pick("bellow")
            }
        }

        NativeAi::RedLouse => louse(&cx, "grow", rng),
        NativeAi::GreenLouse => louse(&cx, "spit_web", rng),

        NativeAi::AcidSlimeSmall => {
            if rng.next_f64() < 0.5 && !cx.last_was("lick") {
                cx.pick("lick")
            } else {
                cx.pick("tackle")
            }
        }

        NativeAi::AcidSlimeMedium => acid_slime(&cx, 0.4, 0.7, rng),

        NativeAi::AcidSlimeLarge => {
            if enemy.should_split() {
                return cx.pick("split");
            }
            acid_slime(&cx, 0.35, 0.65, rng)
        }

        NativeAi::SpikeSlimeMedium => {
            if rng.next_f64() < 0.7 || cx.last_was("lick") {
                cx.pick("flame_tackle")
            } else {
                cx.pick("lick")
            }
        }

        NativeAi::SplitSlime => {
            let len = enemy.template.moveset.len();
            if len == 0 {
                return Err(SimError::unknown(RecordKind::Move, enemy.template.id.as_str()));
            }
            let roll = rng.next_f64();
            Ok(if roll < 0.5 && last_move != Some(0) {
                0
            } else if len > 1 && roll < 0.8 {
                1
            } else {
                len - 1
            })
        }

        NativeAi::FungiBeast => {
            if turn == 0 || rng.next_f64() < 0.65 {
                cx.pick("bite")
            } else {
                cx.pick("grow")
            }
        }

        NativeAi::Looter => match turn {
            0 | 1 => cx.pick("mug"),
            2 => cx.pick("smoke_bomb"),
            _ => cx.pick("lunge"),
        },

        NativeAi::GremlinNob => {
            if turn == 0 {
                return cx.pick("bellow");
            }
            if rng.next_f64() < 0.6 && !cx.last_was("rush") {
                return cx.pick("rush");
            }
            if rng.next_f64() < 0.4 {
                return cx.pick("rush");
            }
            cx.pick("skull_bash")
        }

        NativeAi::Lagavulin => {
            if enemy.template.passives.asleep && !cx.flag(EnemyFlags::WOKEN_UP) && turn < 3 {
                cx.pick("sleep")
            } else if cx.even_turn() {
                cx.pick("siphon_soul")
            } else {
                cx.pick("attack")
            }
        }

        NativeAi::Sentry => {
            if turn == 0 {
                return cx.pick("bolt");
            }
            let beam_on_odd = enemy.slot % 2 == 0;
            if (turn % 2 == 1) == beam_on_odd {
                cx.pick("beam")
            } else {
                cx.pick("bolt")
            }
        }

        NativeAi::Chosen => {
            if turn == 0 {
                return cx.pick("hex");
            }
            let roll = rng.next_f64();
            if roll < 0.5 && !cx.last_was("poke") {
                cx.pick("poke")
            } else if roll < 0.8 {
                cx.pick("zap")
            } else {
                cx.pick("debilitate")
            }
        }

        NativeAi::Byrd => {
            if !enemy.vitals.grounded && rng.next_f64() < 0.5 {
                return cx.pick("fly");
            }
            let roll = rng.next_f64();
            if roll < 0.4 {
                cx.pick("caw")
            } else if roll < 0.7 {
                cx.pick("peck")
            } else {
                cx.pick("swoop")
            }
        }

        NativeAi::SnakePlant => {
            if rng.next_f64() < 0.65 || cx.last_was("enfeeble") {
                cx.pick("chomp")
            } else {
                cx.pick("enfeeble")
            }
        }

        NativeAi::Centurion => {
            let roll = rng.next_f64();
            if roll < 0.45 && !cx.last_was("slash") {
                cx.pick("slash")
            } else if roll < 0.8 {
                cx.pick("fury")
            } else {
                cx.pick("defend")
            }
        }

        NativeAi::BookOfStabbing => cx.pick(if cx.even_turn() { "multi_stab" } else { "single_stab" }),

        NativeAi::GremlinLeader => {
            if turn % 4 == 0 {
                cx.pick("rally")
            } else if cx.even_turn() {
                cx.pick("encourage")
            } else {
                cx.pick("stab")
            }
        }

        NativeAi::Slaver => {
            if turn == 0 {
                cx.pick("entangle")
            } else if rng.next_f64() < 0.55 {
                cx.pick("stab")
            } else {
                cx.pick("rake")
            }
        }

        NativeAi::Mystic => {
            let ally_hurt = cx
                .allies
                .iter()
                .any(|a| a.id != enemy.id && a.is_alive() && a.vitals.hp * 2 < a.vitals.max_hp);
            cx.pick(if ally_hurt { "heal" } else { "attack" })
        }

        NativeAi::ShelledParasite => {
            if turn == 0 {
                cx.pick("shell")
            } else if turn % 2 == 1 {
                cx.pick("suck")
            } else {
                cx.pick("double_tap")
            }
        }

        NativeAi::SphericGuardian => {
            if turn == 0 {
                cx.pick("activate")
            } else if cx.last_was("slam") || cx.last_was("activate") {
                cx.pick("harden")
            } else {
                cx.pick("slam")
            }
        }

        NativeAi::WrithingMass => {
            let roll = rng.next_f64();
            cx.pick(if roll < 0.1 {
                "implant"
            } else if roll < 0.4 {
                "flail"
            } else if roll < 0.6 {
                "wither"
            } else {
                "multi_strike"
            })
        }

        NativeAi::GiantHead => {
            let limit = enemy.template.passives.slow_limit;
            if limit > 0 && enemy.slow_count >= limit {
                cx.pick("dark_echo")
            } else if cx.even_turn() {
                cx.pick("count")
            } else {
                cx.pick("glare")
            }
        }

        NativeAi::Reptomancer => {
            if turn % 3 == 0 {
                cx.pick("summon")
            } else if rng.next_f64() < 0.4 {
                cx.pick("snake_strike")
            } else {
                cx.pick("big_bite")
            }
        }

        NativeAi::Dagger => cx.pick(if turn >= 2 { "explode" } else { "stab" }),

        NativeAi::OrbWalker => {
            let roll = rng.next_f64();
            cx.pick(if roll < 0.4 {
                "laser"
            } else if roll < 0.7 {
                "claw"
            } else {
                "burn_strike"
            })
        }

        NativeAi::Spiker => cx.pick(if turn % 3 == 0 { "spike" } else { "cut" }),

        NativeAi::SlimeBoss => {
            if enemy.should_split() {
                return cx.pick("split");
            }
            cx.pick(match turn % 3 {
                0 => "goop_spray",
                1 => "preparing",
                _ => "slam",
            })
        }

        NativeAi::Guardian => {
            if cx.flag(EnemyFlags::DEFENSIVE_MODE) {
                cx.pick(match turn % 4 {
                    0 => "charging_up",
                    1 => "whirlwind",
                    2 => "twin_slam",
                    _ => "mode_shift",
                })
            } else {
                cx.pick(match turn % 3 {
                    0 => "vent_steam",
                    1 => "roll_attack",
                    _ => "fierce_bash",
                })
            }
        }

        NativeAi::Hexaghost => match turn {
            0 => cx.pick("activate"),
            1 => cx.pick("divider"),
            _ => cx.pick(match (turn - 2) % 7 {
                0 | 1 => "sear",
                2 | 3 => "tackle",
                4 => "inflame",
                _ => "inferno",
            }),
        },

        NativeAi::Champ => {
            if !cx.flag(EnemyFlags::ANGERED) && cx.at_or_below_half() {
                return cx.pick("anger");
            }
            let roll = rng.next_f64();
            cx.pick(if roll < 0.2 {
                "defensive_stance"
            } else if roll < 0.4 {
                "face_slap"
            } else if roll < 0.6 {
                "heavy_slash"
            } else if roll < 0.8 {
                "execute"
            } else {
                "taunt"
            })
        }

        NativeAi::AwakenedOne => {
            if enemy.is_pending_rebirth() {
                return cx.pick("rebirth");
            }
            let roll = rng.next_f64();
            if cx.flag(EnemyFlags::REBORN) {
                return cx.pick(if roll < 0.5 { "slash" } else { "soul_strike" });
            }
            cx.pick(if roll < 0.25 {
                "slash"
            } else if roll < 0.5 {
                "soul_strike"
            } else if roll < 0.75 {
                "dark_echo"
            } else {
                "tackle"
            })
        }

        NativeAi::TimeEater => {
            if !cx.flag(EnemyFlags::HASTED) && cx.at_or_below_half() {
                return cx.pick("haste");
            }
            let roll = rng.next_f64();
            cx.pick(if roll < 0.33 {
                "reverberate"
            } else if roll < 0.66 {
                "head_slam"
            } else {
                "ripple"
            })
        }

        NativeAi::CorruptHeart => {
            if turn == 0 {
                return cx.pick("debilitate");
            }
            cx.pick(match (turn - 1) % 3 {
                0 => "blood_shots",
                1 => "echo",
                _ => "buff",
            })
        }
    }
}

fn louse(cx: &Ctx<'_>, buff: &str, rng: &mut GameRng) -> Result<usize, SimError> {
    if rng.next_f64() < 0.8 || cx.last_was(buff) {
        cx.pick("bite")
    } else {
        cx.pick(buff)
    }
}

fn acid_slime(cx: &Ctx<'_>, spit: f64, lick: f64, rng: &mut GameRng) -> Result<usize, SimError> {
    let roll = rng.next_f64();
    if roll < spit && !cx.last_was("corrosive_spit") {
        cx.pick("corrosive_spit")
    } else if roll < lick && !cx.last_was("lick") {
        cx.pick("lick")
    } else {
        cx.pick("tackle")
    }
}
