//! Damage estimation: a named matchup in, sixteen rolls and everything
//! derived from them out.

mod context;
mod formula;
mod modifier;
mod modifiers;
mod pipeline;

pub mod generations;

pub use generations::Generation;

use serde::{Deserialize, Serialize};

use crate::combatant::{Combatant, CombatantSpec};
use crate::dex::{self, MoveCategory, MoveData, MoveKind};
use crate::error::{CalcError, CalcResult};
use crate::field::Field;

use context::DamageContext;
use formula::all_damage_rolls;
use pipeline::pipeline_for;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageRequest {
    #[serde(default = "default_generation")]
    pub generation: u8,
    pub attacker: CombatantSpec,
    pub defender: CombatantSpec,
    #[serde(rename = "move")]
    pub move_name: String,
    #[serde(default)]
    pub is_crit: bool,
    #[serde(default)]
    pub field: Field,
}

fn default_generation() -> u8 {
    9
}

impl DamageRequest {
    pub fn new(
        attacker: CombatantSpec,
        defender: CombatantSpec,
        move_name: impl Into<String>,
    ) -> Self {
        DamageRequest {
            generation: default_generation(),
            attacker,
            defender,
            move_name: move_name.into(),
            is_crit: false,
            field: Field::default(),
        }
    }
}

/// KO odds against the defender's current HP.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KoChance {
    /// 1.0 guaranteed, 0.5 likely, 0.25 unlikely, 0.0 no KO in range.
    pub chance: f64,
    /// Hits needed, 0 when no KO is in range within four hits.
    pub n: u8,
    pub text: String,
}

impl KoChance {
    fn none() -> Self {
        KoChance {
            chance: 0.0,
            n: 0,
            text: "not a KO".to_owned(),
        }
    }
}

/// Damage the attacker takes back, summed over move recoil (from the
/// average roll) and item recoil (from max HP).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recoil {
    pub damage: u32,
    pub percent: f64,
}

/// HP a draining move recovers, bounded by the attacker's max HP.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recovery {
    pub min: u32,
    pub max: u32,
    pub min_percent: f64,
    pub max_percent: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageResult {
    /// The sixteen rolls, 85% to 100%, lowest first.
    pub rolls: [u32; 16],
    pub min: u32,
    pub max: u32,
    /// Percentages of the defender's max HP.
    pub min_percent: f64,
    pub max_percent: f64,
    /// Display multiplier: 0.0, 0.25, 0.5, 1.0, 2.0 or 4.0.
    pub type_effectiveness: f64,
    pub is_stab: bool,
    pub ko: KoChance,
    pub recoil: Option<Recoil>,
    pub recovery: Option<Recovery>,
    pub description: String,
}

/// Run one damage estimate.
pub fn calculate(request: &DamageRequest) -> CalcResult<DamageResult> {
    let generation = Generation::from_num(request.generation).ok_or_else(|| {
        CalcError::invalid_input(format!(
            "generation must be between 3 and 9, got {}",
            request.generation
        ))
    })?;
    let attacker = request.attacker.resolve()?;
    let defender = request.defender.resolve()?;
    let mv = dex::move_data(&request.move_name)?;

    match mv.kind {
        MoveKind::Standard => {}
        MoveKind::FixedDamage => {
            return Err(CalcError::unsupported(format!(
                "{} deals fixed damage",
                mv.name
            )))
        }
        MoveKind::VariablePower => {
            return Err(CalcError::unsupported(format!(
                "{} has variable power",
                mv.name
            )))
        }
        MoveKind::MultiHit => {
            return Err(CalcError::unsupported(format!(
                "{} hits a variable number of times",
                mv.name
            )))
        }
        MoveKind::Ohko => {
            return Err(CalcError::unsupported(format!(
                "{} is a one-hit KO move",
                mv.name
            )))
        }
    }

    let ctx = DamageContext::new(
        &attacker,
        &defender,
        mv,
        &request.field,
        generation,
        request.is_crit,
    );

    // Status moves and immune hits produce a well-formed zero result,
    // not an error. The rolls' minimum-1 clamp must never see these.
    if mv.category == MoveCategory::Status || mv.base_power == 0 || ctx.effectiveness == 0 {
        return Ok(zero_result(request, &ctx));
    }

    let modified = pipeline_for(generation).modified_damage(&ctx);
    let rolls = all_damage_rolls(modified);
    let min = rolls[0];
    let max = rolls[15];
    let max_hp = defender.max_hp();

    let ko = ko_chance(&rolls, defender.current_hp);
    let recoil = recoil_for(&attacker, mv, min, max);
    let recovery = recovery_for(&attacker, mv, min, max);
    let description = build_description(
        request,
        &ctx,
        min,
        max,
        percent(min, max_hp),
        percent(max, max_hp),
        &ko.text,
    );

    Ok(DamageResult {
        rolls,
        min,
        max,
        min_percent: percent(min, max_hp),
        max_percent: percent(max, max_hp),
        type_effectiveness: ctx.effectiveness as f64 / 4.0,
        is_stab: ctx.has_stab(),
        ko,
        recoil,
        recovery,
        description,
    })
}

fn percent(value: u32, of: u32) -> f64 {
    value as f64 / of as f64 * 100.0
}

fn zero_result(request: &DamageRequest, ctx: &DamageContext) -> DamageResult {
    let ko = KoChance::none();
    let description = build_description(request, ctx, 0, 0, 0.0, 0.0, &ko.text);
    DamageResult {
        rolls: [0; 16],
        min: 0,
        max: 0,
        min_percent: 0.0,
        max_percent: 0.0,
        type_effectiveness: ctx.effectiveness as f64 / 4.0,
        is_stab: ctx.has_stab(),
        ko,
        recoil: None,
        recovery: None,
        description,
    }
}

fn ko_chance(rolls: &[u32; 16], target_hp: u32) -> KoChance {
    let min = rolls[0];
    let max = rolls[15];
    if max == 0 {
        return KoChance::none();
    }
    if min >= target_hp {
        return KoChance {
            chance: 1.0,
            n: 1,
            text: "guaranteed OHKO".to_owned(),
        };
    }
    if max >= target_hp {
        let favorable = rolls.iter().filter(|&&roll| roll >= target_hp).count();
        let chance = favorable as f64 / 16.0;
        return KoChance {
            chance,
            n: 1,
            text: format!("{:.1}% chance to OHKO", chance * 100.0),
        };
    }
    for n in 2..=4u32 {
        if min * n >= target_hp {
            return KoChance {
                chance: 1.0,
                n: n as u8,
                text: format!("guaranteed {n}HKO"),
            };
        }
        if max * n >= target_hp {
            // No per-roll distribution over several hits; the average
            // roll decides between likely and unlikely.
            let average = (min + max) / 2;
            return if average * n >= target_hp {
                KoChance {
                    chance: 0.5,
                    n: n as u8,
                    text: format!("possible {n}HKO"),
                }
            } else {
                KoChance {
                    chance: 0.25,
                    n: n as u8,
                    text: format!("possible {n}HKO (unlikely)"),
                }
            };
        }
    }
    KoChance::none()
}

fn recoil_for(attacker: &Combatant, mv: &MoveData, min: u32, max: u32) -> Option<Recoil> {
    let mut damage = 0u32;
    if let Some(frac) = mv.recoil {
        if !attacker.ability_has(|a| a.suppresses_move_recoil) {
            damage += frac.apply_floor((min + max) / 2);
        }
    }
    if let Some(item) = attacker.item {
        if let Some(frac) = item.recoil {
            if !attacker.ability_has(|a| a.suppresses_item_recoil) {
                damage += frac.apply_floor(attacker.max_hp());
            }
        }
    }
    if damage == 0 {
        return None;
    }
    Some(Recoil {
        damage,
        percent: percent(damage, attacker.max_hp()),
    })
}

fn recovery_for(attacker: &Combatant, mv: &MoveData, min: u32, max: u32) -> Option<Recovery> {
    let frac = mv.drain?;
    let cap = attacker.max_hp();
    let min_recovered = frac.apply_floor(min).min(cap);
    let max_recovered = frac.apply_floor(max).min(cap);
    Some(Recovery {
        min: min_recovered,
        max: max_recovered,
        min_percent: percent(min_recovered, cap),
        max_percent: percent(max_recovered, cap),
    })
}

/// One-line summary in the familiar calculator format:
/// `252 Atk Garchomp Earthquake vs. 0 HP / 0 Def Mew: 136-160 (39.9 - 46.9%) -- guaranteed 3HKO`
fn build_description(
    request: &DamageRequest,
    ctx: &DamageContext,
    min: u32,
    max: u32,
    min_percent: f64,
    max_percent: f64,
    ko_text: &str,
) -> String {
    let (atk_label, atk_ev, atk_boost) = if ctx.physical {
        ("Atk", request.attacker.evs.atk, ctx.attacker.boosts.atk)
    } else {
        ("SpA", request.attacker.evs.spa, ctx.attacker.boosts.spa)
    };
    // The defender side follows the stat the hit resolved against,
    // which Psyshock-style moves override.
    let (def_label, def_ev) = if ctx.defense_physical {
        ("Def", request.defender.evs.def)
    } else {
        ("SpD", request.defender.evs.spd)
    };

    let mut out = String::new();
    if atk_boost != 0 {
        out.push_str(&format!("{atk_boost:+} "));
    }
    out.push_str(&format!(
        "{atk_ev} {atk_label} {} {} vs. {} HP / {def_ev} {def_label} {}: {min}-{max} ({min_percent:.1} - {max_percent:.1}%) -- {ko_text}",
        ctx.attacker.species.name, ctx.mv.name, request.defender.evs.hp, ctx.defender.species.name,
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(attacker: &str, defender: &str, move_name: &str) -> DamageRequest {
        DamageRequest::new(
            CombatantSpec::named(attacker),
            CombatantSpec::named(defender),
            move_name,
        )
    }

    #[test]
    fn test_calculate_end_to_end() {
        let result = calculate(&request("Garchomp", "Mew", "Earthquake")).unwrap();
        assert_eq!(result.min, 136);
        assert_eq!(result.max, 160);
        assert_eq!(result.rolls[0], 136);
        assert_eq!(result.rolls[15], 160);
        assert!(result.is_stab);
        assert_eq!(result.type_effectiveness, 1.0);
        assert_eq!(result.ko.text, "guaranteed 3HKO");
        assert_eq!(
            result.description,
            "0 Atk Garchomp Earthquake vs. 0 HP / 0 Def Mew: 136-160 (39.9 - 46.9%) -- guaranteed 3HKO"
        );
    }

    #[test]
    fn test_ohko_chance_counts_rolls() {
        let mut req = request("Garchomp", "Mew", "Earthquake");
        req.defender.current_hp = Some(150);
        let result = calculate(&req).unwrap();
        // Rolls 150..=160 clear 150: seven of sixteen.
        assert_eq!(result.ko.n, 1);
        assert_eq!(result.ko.chance, 7.0 / 16.0);
        assert_eq!(result.ko.text, "43.8% chance to OHKO");
    }

    #[test]
    fn test_status_move_zero_result() {
        let result = calculate(&request("Pikachu", "Mew", "Thunder Wave")).unwrap();
        assert_eq!(result.max, 0);
        assert_eq!(result.rolls, [0; 16]);
        assert_eq!(result.ko.text, "not a KO");
        assert_eq!(result.recoil, None);
    }

    #[test]
    fn test_immunity_is_zero_not_one() {
        let result = calculate(&request("Pikachu", "Garchomp", "Thunderbolt")).unwrap();
        assert_eq!(result.max, 0);
        assert_eq!(result.min, 0);
        assert_eq!(result.type_effectiveness, 0.0);

        // Ability immunity behaves the same as chart immunity.
        let mut req = request("Garchomp", "Gengar", "Earthquake");
        req.defender.ability = Some("Levitate".to_owned());
        let result = calculate(&req).unwrap();
        assert_eq!(result.max, 0);
    }

    #[test]
    fn test_unsupported_moves() {
        for (mv, what) in [
            ("Seismic Toss", "fixed damage"),
            ("Grass Knot", "variable power"),
            ("Rock Blast", "variable number"),
            ("Fissure", "one-hit KO"),
        ] {
            let err = calculate(&request("Machamp", "Snorlax", mv)).unwrap_err();
            match err {
                CalcError::Unsupported { reason } => assert!(
                    reason.contains(what),
                    "reason {reason:?} should mention {what:?}"
                ),
                other => panic!("expected Unsupported, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_generation_bounds() {
        let mut req = request("Garchomp", "Mew", "Earthquake");
        req.generation = 2;
        assert!(matches!(
            calculate(&req),
            Err(CalcError::InvalidInput { .. })
        ));
        req.generation = 10;
        assert!(calculate(&req).is_err());
    }

    #[test]
    fn test_recoil_from_move_and_item() {
        let mut req = request("Staraptor", "Mew", "Brave Bird");
        let result = calculate(&req).unwrap();
        let recoil = result.recoil.unwrap();
        // A third of the average roll.
        let average = (result.min + result.max) / 2;
        assert_eq!(recoil.damage, average / 3);

        // Life Orb adds a tenth of max HP on top.
        req.attacker.item = Some("Life Orb".to_owned());
        let result = calculate(&req).unwrap();
        let average = (result.min + result.max) / 2;
        let attacker = req.attacker.resolve().unwrap();
        assert_eq!(
            result.recoil.unwrap().damage,
            average / 3 + attacker.max_hp() / 10
        );

        // Rock Head suppresses the move's recoil entirely.
        req.attacker.item = None;
        req.attacker.ability = Some("Rock Head".to_owned());
        let result = calculate(&req).unwrap();
        assert_eq!(result.recoil, None);
    }

    #[test]
    fn test_drain_recovery() {
        let req = request("Venusaur", "Swampert", "Giga Drain");
        let result = calculate(&req).unwrap();
        let recovery = result.recovery.unwrap();
        assert_eq!(recovery.min, result.min / 2);
        assert_eq!(recovery.max, result.max / 2);
        assert!(recovery.max_percent > 0.0);
    }

    #[test]
    fn test_boost_prefix_in_description() {
        let mut req = request("Garchomp", "Mew", "Earthquake");
        req.attacker.boosts.atk = 2;
        let result = calculate(&req).unwrap();
        assert!(
            result.description.starts_with("+2 0 Atk Garchomp"),
            "got {:?}",
            result.description
        );

        req.attacker.boosts.atk = -1;
        let result = calculate(&req).unwrap();
        assert!(result.description.starts_with("-1 0 Atk Garchomp"));
    }

    #[test]
    fn test_request_json_shape() {
        let req: DamageRequest = serde_json::from_str(
            r#"{
                "generation": 4,
                "attacker": {"species": "Garchomp", "evs": {"atk": 252}},
                "defender": {"species": "Mew"},
                "move": "Earthquake",
                "isCrit": true,
                "field": {"isDoubles": true}
            }"#,
        )
        .unwrap();
        assert_eq!(req.generation, 4);
        assert_eq!(req.move_name, "Earthquake");
        assert!(req.is_crit);
        assert!(req.field.is_doubles);

        let req: DamageRequest = serde_json::from_str(
            r#"{"attacker": {"species": "A"}, "defender": {"species": "B"}, "move": "Tackle"}"#,
        )
        .unwrap();
        assert_eq!(req.generation, 9);
        assert!(!req.is_crit);
    }
}
