//! The two damage pipelines.
//!
//! Gen 3 multiplies damage through a fixed sequence of steps, truncating
//! after every one. Gen 4 onward collapses everything into a single
//! 4096-fixed-point chain applied once. The steps and their order are
//! load-bearing; resist the urge to merge them.

use super::context::DamageContext;
use super::formula::{apply_chained, chain_mods, get_base_damage};
use super::generations::{GenMechanics, Generation};
use super::modifier::{modifier, Modifier};
use super::modifiers;
use crate::dex::Fraction;
use crate::field::{Terrain, Weather};
use crate::types::Type;

/// A pipeline computes fully modified damage, before the 16 rolls.
/// Callers resolve immunity first; these run only for connecting hits.
pub(crate) trait DamagePipeline: Sync {
    fn modified_damage(&self, ctx: &DamageContext) -> u32;
}

pub(crate) fn pipeline_for(generation: Generation) -> &'static dyn DamagePipeline {
    if generation == Generation::Gen3 {
        &GEN3_PIPELINE
    } else {
        &MODERN_PIPELINE
    }
}

static GEN3_PIPELINE: Gen3Pipeline = Gen3Pipeline;
static MODERN_PIPELINE: ModernPipeline = ModernPipeline;

/// Rain and sun scale Fire and Water damage by 3/2 or 1/2; the harsh
/// variants behave like their base weather here.
fn weather_fraction(weather: Weather, move_type: Type) -> Option<Fraction> {
    match (weather, move_type) {
        (Weather::Sun | Weather::HarshSun, Type::Fire) => Some(Fraction::new(3, 2)),
        (Weather::Sun | Weather::HarshSun, Type::Water) => Some(Fraction::new(1, 2)),
        (Weather::Rain | Weather::HeavyRain, Type::Water) => Some(Fraction::new(3, 2)),
        (Weather::Rain | Weather::HeavyRain, Type::Fire) => Some(Fraction::new(1, 2)),
        _ => None,
    }
}

fn terrain_boosts_move(terrain: Terrain, move_type: Type) -> bool {
    matches!(
        (terrain, move_type),
        (Terrain::Electric, Type::Electric)
            | (Terrain::Grassy, Type::Grass)
            | (Terrain::Psychic, Type::Psychic)
    )
}

fn burn_applies(ctx: &DamageContext) -> bool {
    ctx.physical
        && ctx.attacker.is_burned()
        && !ctx.attacker.ability_has(|a| a.ignores_burn)
}

fn stab_fraction(ctx: &DamageContext) -> Fraction {
    ctx.attacker
        .ability
        .and_then(|a| a.stab_mod)
        .unwrap_or(Fraction::new(3, 2))
}

/// Ruby/Sapphire/Emerald: every step floors, in this order: stat mods,
/// base damage, burn, screens, weather, pinch abilities, crit, same-type
/// bonus, type effectiveness, type-boost item.
struct Gen3Pipeline;

impl DamagePipeline for Gen3Pipeline {
    fn modified_damage(&self, ctx: &DamageContext) -> u32 {
        debug_assert!(ctx.effectiveness > 0);

        let mut attack = modifiers::offensive_stat(ctx);
        for frac in modifiers::attack_fractions(ctx) {
            attack = frac.apply_floor(attack);
        }
        let mut defense = modifiers::defensive_stat(ctx);
        for frac in modifiers::defense_fractions(ctx) {
            defense = frac.apply_floor(defense);
        }

        let mut damage = get_base_damage(
            ctx.attacker.level as u32,
            ctx.mv.base_power as u32,
            attack,
            defense.max(1),
        );

        if burn_applies(ctx) {
            damage /= 2;
        }

        if !ctx.is_crit && ctx.field.screen_applies(ctx.physical) {
            damage = if ctx.field.is_doubles {
                damage * 2 / 3
            } else {
                damage / 2
            };
        }

        if let Some(weather) = ctx.weather {
            if let Some(frac) = weather_fraction(weather, ctx.mv.typ) {
                damage = frac.apply_floor(damage);
            }
        }

        // Pinch abilities are this era's only base-power effects; they
        // land here as a damage step.
        for frac in modifiers::base_power_fractions(ctx) {
            damage = frac.apply_floor(damage);
        }

        if ctx.is_crit {
            damage *= 2;
        }

        if ctx.has_stab() {
            damage = stab_fraction(ctx).apply_floor(damage);
        }

        damage = damage * ctx.effectiveness as u32 / 4;

        if let Some(item) = ctx.attacker.item {
            if item.boosts_type == Some(ctx.mv.typ) {
                damage = damage * 11 / 10;
            }
        }

        damage
    }
}

/// Gen 4 onward: base power, attack and defense each get their own
/// chain, then one final chain covers everything from the spread
/// penalty down to Friend Guard.
struct ModernPipeline;

impl DamagePipeline for ModernPipeline {
    fn modified_damage(&self, ctx: &DamageContext) -> u32 {
        debug_assert!(ctx.effectiveness > 0);

        let mut bp_mods = modifiers::fractions_to_modifiers(&modifiers::base_power_fractions(ctx));
        if ctx.generation.has_terrain() {
            if let Some(terrain) = ctx.field.terrain {
                if terrain_boosts_move(terrain, ctx.mv.typ) {
                    bp_mods.push(ctx.generation.terrain_boost());
                }
            }
        }
        if ctx.field.attacker_side.helping_hand {
            bp_mods.push(Modifier::ONE_POINT_FIVE);
        }
        let base_power = apply_chained(ctx.mv.base_power as u32, chain_mods(&bp_mods)).max(1);

        let attack_mods =
            modifiers::fractions_to_modifiers(&modifiers::attack_fractions(ctx));
        let attack = apply_chained(modifiers::offensive_stat(ctx), chain_mods(&attack_mods));

        let defense_mods =
            modifiers::fractions_to_modifiers(&modifiers::defense_fractions(ctx));
        let defense =
            apply_chained(modifiers::defensive_stat(ctx), chain_mods(&defense_mods)).max(1);

        let base = get_base_damage(
            ctx.attacker.level as u32,
            base_power,
            attack,
            defense,
        );

        let mut mods: Vec<Modifier> = Vec::new();

        if ctx.field.is_doubles && ctx.mv.hits_multiple {
            mods.push(Modifier::THREE_QUARTERS);
        }

        if let Some(weather) = ctx.weather {
            if let Some(frac) = weather_fraction(weather, ctx.mv.typ) {
                mods.push(Modifier(frac.to_fixed4096()));
            }
        }

        if ctx.is_crit {
            mods.push(ctx.generation.crit_modifier());
        }

        if ctx.has_stab() {
            mods.push(Modifier(stab_fraction(ctx).to_fixed4096()));
        }

        mods.push(Modifier((ctx.effectiveness as u16) << 10));

        if burn_applies(ctx) {
            mods.push(Modifier::HALF);
        }

        if !ctx.is_crit && ctx.field.screen_applies(ctx.physical) {
            mods.push(if ctx.field.is_doubles {
                Modifier::TWO_THIRDS
            } else {
                Modifier::HALF
            });
        }

        if let Some(item) = ctx.attacker.item {
            if item.boosts_type == Some(ctx.mv.typ) {
                mods.push(modifier!(1.2));
            }
        }
        for frac in modifiers::item_damage_fractions(ctx) {
            mods.push(Modifier(frac.to_fixed4096()));
        }

        for frac in modifiers::offensive_ability_fractions(ctx) {
            mods.push(Modifier(frac.to_fixed4096()));
        }
        for frac in modifiers::defensive_ability_fractions(ctx) {
            mods.push(Modifier(frac.to_fixed4096()));
        }

        if ctx.generation.has_terrain()
            && ctx.field.terrain == Some(Terrain::Misty)
            && ctx.mv.typ == Type::Dragon
        {
            mods.push(Modifier::HALF);
        }

        if ctx.field.is_doubles && ctx.field.defender_side.friend_guard {
            mods.push(Modifier::THREE_QUARTERS);
        }

        apply_chained(base, chain_mods(&mods))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::{CombatantSpec, Status};
    use crate::dex;
    use crate::field::Field;

    fn modified(
        attacker: &CombatantSpec,
        defender: &CombatantSpec,
        move_name: &str,
        field: &Field,
        generation: Generation,
        is_crit: bool,
    ) -> u32 {
        let attacker = attacker.resolve().unwrap();
        let defender = defender.resolve().unwrap();
        let ctx = DamageContext::new(
            &attacker,
            &defender,
            dex::move_data(move_name).unwrap(),
            field,
            generation,
            is_crit,
        );
        pipeline_for(generation).modified_damage(&ctx)
    }

    #[test]
    fn test_modern_neutral_with_stab() {
        // Garchomp Atk 296, Mew Def 236. Base: 42*100*296/236 = 5267,
        // /50 = 105, +2 = 107. Chain: stab 6144, neutral type 4096.
        // 107 * 6144/4096 = 160.5, half rounds down to 160.
        let damage = modified(
            &CombatantSpec::named("Garchomp"),
            &CombatantSpec::named("Mew"),
            "Earthquake",
            &Field::default(),
            Generation::Gen9,
            false,
        );
        assert_eq!(damage, 160);
    }

    #[test]
    fn test_gen3_sequence_with_stab_and_effectiveness() {
        // Swampert SpA 206, Charizard SpD 206. Base: 42*90*206/206 =
        // 3780, /50 = 75, +2 = 77. Stab floor: 77*3/2 = 115. Water vs
        // Fire/Flying is 2x: 115*8/4 = 230.
        let damage = modified(
            &CombatantSpec::named("Swampert"),
            &CombatantSpec::named("Charizard"),
            "Surf",
            &Field::default(),
            Generation::Gen3,
            false,
        );
        assert_eq!(damage, 230);
    }

    #[test]
    fn test_gen3_pinch_ability_slot() {
        // Charizard SpA 254 with Blaze in range, Venusaur SpD 236.
        // Base: 42*90*254/236 = 4068, /50 = 81, +2 = 83. Pinch: 83*3/2
        // = 124. Stab: 124*3/2 = 186. Fire vs Grass/Poison 2x: 372.
        let mut attacker = CombatantSpec::named("Charizard");
        attacker.ability = Some("Blaze".to_owned());
        attacker.current_hp = Some(99);
        let damage = modified(
            &attacker,
            &CombatantSpec::named("Venusaur"),
            "Flamethrower",
            &Field::default(),
            Generation::Gen3,
            false,
        );
        assert_eq!(damage, 372);
    }

    #[test]
    fn test_gen3_crit_ignores_screens() {
        let attacker = CombatantSpec::named("Garchomp");
        let defender = CombatantSpec::named("Mew");
        let mut field = Field::default();
        field.defender_side.reflect = true;

        let screened = modified(
            &attacker,
            &defender,
            "Earthquake",
            &field,
            Generation::Gen3,
            false,
        );
        let crit = modified(
            &attacker,
            &defender,
            "Earthquake",
            &field,
            Generation::Gen3,
            true,
        );
        // Base 107. Screened: 107/2 = 53, stab 53*3/2 = 79. Crit
        // bypasses the screen: 107*2 = 214, stab 214*3/2 = 321.
        assert_eq!(screened, 79);
        assert_eq!(crit, 321);
    }

    #[test]
    fn test_modern_burn_and_guts() {
        let mut burned = CombatantSpec::named("Garchomp");
        burned.status = Some(Status::Brn);
        let plain = CombatantSpec::named("Garchomp");
        let defender = CombatantSpec::named("Mew");
        let field = Field::default();

        let full = modified(&plain, &defender, "Earthquake", &field, Generation::Gen9, false);
        let halved = modified(&burned, &defender, "Earthquake", &field, Generation::Gen9, false);
        assert_eq!(halved, full / 2);

        let mut guts = burned.clone();
        guts.ability = Some("Guts".to_owned());
        let boosted = modified(&guts, &defender, "Earthquake", &field, Generation::Gen9, false);
        // Guts ignores the burn and boosts attack by half.
        assert!(boosted > full);
    }

    #[test]
    fn test_crit_modifier_depends_on_generation() {
        let attacker = CombatantSpec::named("Garchomp");
        let defender = CombatantSpec::named("Mew");
        let field = Field::default();

        let gen9 = modified(&attacker, &defender, "Earthquake", &field, Generation::Gen9, true);
        let gen4 = modified(&attacker, &defender, "Earthquake", &field, Generation::Gen4, true);
        // Gen 9: chain [6144, 6144] = 9216, 107*9216/4096 = 240.75,
        // rounds to 241. Gen 4: chain [8192, 6144] = 12288, 107*3 = 321.
        assert_eq!(gen9, 241);
        assert_eq!(gen4, 321);
    }

    #[test]
    fn test_spread_and_friend_guard_need_doubles() {
        let attacker = CombatantSpec::named("Garchomp");
        let defender = CombatantSpec::named("Mew");
        let mut field = Field::default();
        field.defender_side.friend_guard = true;

        let singles = modified(&attacker, &defender, "Earthquake", &field, Generation::Gen9, false);
        assert_eq!(singles, 160);

        field.is_doubles = true;
        let doubles = modified(&attacker, &defender, "Earthquake", &field, Generation::Gen9, false);
        // Spread and Friend Guard each add 3072: chain [3072, 6144,
        // 4096, 3072] = 3456, 107*3456/4096 = 90.28, rounds to 90.
        assert_eq!(doubles, 90);
    }
}
