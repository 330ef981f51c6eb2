//! The damage formula's arithmetic primitives.
//!
//! All of this is exact integer math. The games truncate or round at
//! fixed points in the computation, and reproducing their output means
//! reproducing every one of those points in order.

use super::modifier::Modifier;

/// The games' rounding: round half down.
///
/// `pokeround(n, d)` is `n/d` rounded, with an exact half going down
/// where ordinary rounding would go up.
pub fn pokeround(numerator: u64, denominator: u64) -> u64 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder * 2 > denominator {
        quotient + 1
    } else {
        quotient
    }
}

/// Apply a single 4096-scale modifier with games' rounding. A neutral
/// modifier leaves the value untouched rather than re-rounding it.
pub fn apply_modifier(value: u32, modifier: Modifier) -> u32 {
    if modifier.is_neutral() {
        return value;
    }
    pokeround(value as u64 * modifier.0 as u64, 4096) as u32
}

/// Collapse a list of 4096-scale modifiers into one, rounding after
/// each step exactly as the games do: `m := (m * next + 0x800) >> 12`.
pub fn chain_mods(mods: &[Modifier]) -> u32 {
    let mut result: u64 = 4096;
    for m in mods {
        result = (result * m.0 as u64 + 0x800) >> 12;
    }
    result as u32
}

/// Apply a pre-chained modifier (which may exceed `u16`).
pub fn apply_chained(value: u32, chained: u32) -> u32 {
    if chained == 4096 {
        return value;
    }
    pokeround(value as u64 * chained as u64, 4096) as u32
}

/// The shared core of every generation's formula:
/// `floor(floor(2*level/5 + 2) * power * attack / defense) / 50 + 2`.
pub fn get_base_damage(level: u32, power: u32, attack: u32, defense: u32) -> u32 {
    let level_factor = 2 * level / 5 + 2;
    let numerator = level_factor as u64 * power as u64 * attack as u64;
    (numerator / defense as u64 / 50) as u32 + 2
}

/// One damage roll: `floor(damage * roll / 100)`, never below 1 for a
/// hit that connects. Immune hits must be resolved to zero before the
/// roll stage, or the clamp would turn them into 1.
pub fn damage_roll(damage: u32, roll: u32) -> u32 {
    ((damage as u64 * roll as u64 / 100) as u32).max(1)
}

/// All sixteen rolls, 85% through 100%, lowest first.
pub fn all_damage_rolls(damage: u32) -> [u32; 16] {
    let mut rolls = [0u32; 16];
    for (i, roll) in (85..=100).enumerate() {
        rolls[i] = damage_roll(damage, roll);
    }
    rolls
}
