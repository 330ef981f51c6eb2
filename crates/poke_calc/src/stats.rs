//! Stat computation: the level/IV/EV/nature formulas and boost stages.
//!
//! Everything here is exact integer math. Each division site is a
//! deliberate truncation point; reordering operations changes results.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl Stat {
    pub fn name(self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Atk => "Atk",
            Stat::Def => "Def",
            Stat::Spa => "SpA",
            Stat::Spd => "SpD",
            Stat::Spe => "Spe",
        }
    }
}

/// Fully computed stats for one combatant at its level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatBlock {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spa: u32,
    pub spd: u32,
    pub spe: u32,
}

impl StatBlock {
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }
}

/// Max HP from base stat, IVs, EVs and level.
///
/// A base HP of 1 is the fixed-HP special case (Shedinja): always 1,
/// regardless of level or investment.
pub fn compute_hp(base: u16, iv: u8, ev: u16, level: u8) -> u32 {
    if base == 1 {
        return 1;
    }
    (2 * base as u32 + iv as u32 + ev as u32 / 4) * level as u32 / 100 + level as u32 + 10
}

/// A non-HP stat. `nature_num` is the nature multiplier numerator over
/// 10 (9, 10 or 11); the nature division truncates after the +5.
pub fn compute_stat(base: u16, iv: u8, ev: u16, level: u8, nature_num: u32) -> u32 {
    let raw = (2 * base as u32 + iv as u32 + ev as u32 / 4) * level as u32 / 100 + 5;
    raw * nature_num / 10
}

/// Stage multipliers for boosts -6..=+6, as (numerator, denominator).
pub const BOOST_TABLE: [(u32, u32); 13] = [
    (2, 8),
    (2, 7),
    (2, 6),
    (2, 5),
    (2, 4),
    (2, 3),
    (2, 2),
    (3, 2),
    (4, 2),
    (5, 2),
    (6, 2),
    (7, 2),
    (8, 2),
];

/// Apply a boost stage to a stat, truncating.
pub fn apply_boost(stat: u32, boost: i8) -> u32 {
    debug_assert!((-6..=6).contains(&boost));
    let (num, den) = BOOST_TABLE[(boost + 6) as usize];
    stat * num / den
}
