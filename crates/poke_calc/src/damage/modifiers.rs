//! Resolution of declared effects into concrete modifier lists.
//!
//! Everything here returns modifiers in their canonical application
//! order; the pipelines decide how to apply them (sequential truncation
//! in Gen 3, 4096 chaining from Gen 4 on).

use super::context::{DamageContext, Role};
use super::generations::GenMechanics;
use super::modifier::Modifier;
use crate::dex::{EffectTarget, Fraction};
use crate::field::Weather;
use crate::stats::{apply_boost, Stat};
use crate::types::Type;

/// The attacker's offensive stat after boosts. On a crit, a negative
/// offensive boost is ignored.
pub fn offensive_stat(ctx: &DamageContext) -> u32 {
    let stat = if ctx.physical { Stat::Atk } else { Stat::Spa };
    let mut boost = ctx.attacker.boosts.get(stat);
    if ctx.is_crit && boost < 0 {
        boost = 0;
    }
    apply_boost(ctx.attacker.stats.get(stat), boost)
}

/// The defender's defensive stat after boosts. On a crit, a positive
/// defensive boost is ignored.
pub fn defensive_stat(ctx: &DamageContext) -> u32 {
    let stat = if ctx.defense_physical { Stat::Def } else { Stat::Spd };
    let mut boost = ctx.defender.boosts.get(stat);
    if ctx.is_crit && boost > 0 {
        boost = 0;
    }
    apply_boost(ctx.defender.stats.get(stat), boost)
}

fn declared_fractions(ctx: &DamageContext, role: Role, target: EffectTarget) -> Vec<Fraction> {
    let holder = ctx.holder(role);
    let mut out = Vec::new();
    // Items first, then abilities, matching the games' order.
    if let Some(item) = holder.item {
        for effect in &item.effects {
            if effect.target == target && ctx.effect_applies(effect, role) {
                out.push(effect.fraction());
            }
        }
    }
    if let Some(ability) = holder.ability {
        for effect in &ability.effects {
            if effect.target == target && ctx.effect_applies(effect, role) {
                out.push(effect.fraction());
            }
        }
    }
    out
}

/// Multipliers on the attacker's offensive stat (Choice items, Huge
/// Power, Guts and friends).
pub fn attack_fractions(ctx: &DamageContext) -> Vec<Fraction> {
    declared_fractions(ctx, Role::Attacker, EffectTarget::Attack)
}

/// Multipliers on the defender's defensive stat, plus the sandstorm
/// special-defense boost Rock-types get from Gen 4 on.
pub fn defense_fractions(ctx: &DamageContext) -> Vec<Fraction> {
    let mut out = declared_fractions(ctx, Role::Defender, EffectTarget::Defense);
    if ctx.generation.sand_boosts_rock_spd()
        && ctx.weather == Some(Weather::Sand)
        && ctx.defender.has_type(Type::Rock)
        && !ctx.physical
    {
        out.push(Fraction::new(3, 2));
    }
    out
}

/// The attacker's declared base-power multipliers (Technician, pinch
/// abilities). Terrain and Helping Hand are layered on by the modern
/// pipeline since Gen 3 never modified base power.
pub fn base_power_fractions(ctx: &DamageContext) -> Vec<Fraction> {
    let holder = ctx.attacker;
    let mut out = Vec::new();
    if let Some(ability) = holder.ability {
        for effect in &ability.effects {
            if effect.target == EffectTarget::BasePower && ctx.effect_applies(effect, Role::Attacker)
            {
                out.push(effect.fraction());
            }
        }
    }
    out
}

/// Final-damage multipliers from the attacker's held item. Skipped
/// entirely when the attacker's ability ignores its damage item and the
/// item is one that exacts recoil (Sheer Force holding Life Orb).
pub fn item_damage_fractions(ctx: &DamageContext) -> Vec<Fraction> {
    let attacker = ctx.attacker;
    let item = match attacker.item {
        Some(item) => item,
        None => return Vec::new(),
    };
    if item.recoil.is_some() && attacker.ability_has(|a| a.suppresses_item_damage) {
        return Vec::new();
    }
    let mut out = Vec::new();
    for effect in &item.effects {
        if effect.target == EffectTarget::DamageDealt && ctx.effect_applies(effect, Role::Attacker)
        {
            out.push(effect.fraction());
        }
    }
    out
}

/// Final-damage multipliers from the attacker's ability (Sheer Force,
/// Tough Claws, the move-class boosts).
pub fn offensive_ability_fractions(ctx: &DamageContext) -> Vec<Fraction> {
    let mut out = Vec::new();
    if let Some(ability) = ctx.attacker.ability {
        for effect in &ability.effects {
            if effect.target == EffectTarget::DamageDealt && ctx.effect_applies(effect, Role::Attacker)
            {
                out.push(effect.fraction());
            }
        }
    }
    out
}

/// Final-damage multipliers from the defender's ability (Filter,
/// Multiscale, Thick Fat and friends).
pub fn defensive_ability_fractions(ctx: &DamageContext) -> Vec<Fraction> {
    let mut out = Vec::new();
    if let Some(ability) = ctx.defender.ability {
        for effect in &ability.effects {
            if effect.target == EffectTarget::DamageTaken && ctx.effect_applies(effect, Role::Defender)
            {
                out.push(effect.fraction());
            }
        }
    }
    out
}

pub fn fractions_to_modifiers(fractions: &[Fraction]) -> Vec<Modifier> {
    fractions
        .iter()
        .map(|f| Modifier(f.to_fixed4096()))
        .collect()
}
