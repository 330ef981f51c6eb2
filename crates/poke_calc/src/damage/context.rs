//! The resolved context for one damage calculation.
//!
//! Built once per request and then read-only: both pipelines and the
//! declared-effect evaluation work entirely off this.

use super::generations::{GenMechanics, Generation};
use crate::combatant::Combatant;
use crate::dex::{Effect, Gate, MoveData, MoveFlags};
use crate::field::{Field, Weather};
use crate::types::EFF_NEUTRAL;

/// Which side of the calculation owns an effect under evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Attacker,
    Defender,
}

pub struct DamageContext<'a> {
    pub attacker: &'a Combatant,
    pub defender: &'a Combatant,
    pub mv: &'static MoveData,
    pub field: &'a Field,
    pub generation: Generation,
    pub is_crit: bool,
    /// Combined effectiveness on the 4-scale, generation chart and
    /// ability immunities already applied. Zero means the move does not
    /// affect the defender at all.
    pub effectiveness: u8,
    /// Field weather after Cloud Nine/Air Lock suppression.
    pub weather: Option<Weather>,
    /// Whether the move's own category is physical. Burn, screens and
    /// category gates all read this one.
    pub physical: bool,
    /// Whether the hit resolves against Defense rather than Sp. Def.
    /// Differs from `physical` only for defensive-category overrides
    /// (Psyshock), and only where the category split applies.
    pub defense_physical: bool,
}

impl<'a> DamageContext<'a> {
    pub fn new(
        attacker: &'a Combatant,
        defender: &'a Combatant,
        mv: &'static MoveData,
        field: &'a Field,
        generation: Generation,
        is_crit: bool,
    ) -> Self {
        let suppressed = attacker.ability_has(|a| a.suppresses_weather)
            || defender.ability_has(|a| a.suppresses_weather);
        let weather = if suppressed { None } else { field.weather };

        let physical = if generation.uses_category_split() {
            mv.category == crate::dex::MoveCategory::Physical
        } else {
            mv.typ.is_physical_in_gen3()
        };
        let defense_physical = if generation.uses_category_split() {
            mv.defensive_category.unwrap_or(mv.category) == crate::dex::MoveCategory::Physical
        } else {
            physical
        };

        let mut effectiveness =
            generation.type_effectiveness(mv.typ, defender.species.type1(), defender.species.type2());
        if defender.ability_has(|a| a.immune_to == Some(mv.typ)) {
            effectiveness = 0;
        }

        DamageContext {
            attacker,
            defender,
            mv,
            field,
            generation,
            is_crit,
            effectiveness,
            weather,
            physical,
            defense_physical,
        }
    }

    pub fn holder(&self, role: Role) -> &Combatant {
        match role {
            Role::Attacker => self.attacker,
            Role::Defender => self.defender,
        }
    }

    /// Attacker gets the same-type bonus: shares a type with the move,
    /// or its ability grants the bonus on everything.
    pub fn has_stab(&self) -> bool {
        self.attacker.has_type(self.mv.typ)
            || self.attacker.ability_has(|a| a.stab_any_type)
    }

    pub fn gate_passes(&self, gate: &Gate, role: Role) -> bool {
        match gate {
            Gate::PhysicalMove => self.physical,
            Gate::SpecialMove => !self.physical,
            Gate::ContactMove => self.mv.flags.contains(MoveFlags::CONTACT),
            Gate::PunchMove => self.mv.flags.contains(MoveFlags::PUNCH),
            Gate::BiteMove => self.mv.flags.contains(MoveFlags::BITE),
            Gate::SoundMove => self.mv.flags.contains(MoveFlags::SOUND),
            Gate::PulseMove => self.mv.flags.contains(MoveFlags::PULSE),
            Gate::RecoilMove => self.mv.has_recoil(),
            Gate::SecondaryEffectMove => self.mv.flags.contains(MoveFlags::SECONDARY),
            Gate::MoveType(typ) => self.mv.typ == *typ,
            Gate::MoveTypeIn(types) => types.contains(&self.mv.typ),
            Gate::BasePowerAtMost(limit) => self.mv.base_power <= *limit,
            Gate::HolderStatused => self.holder(role).is_statused(),
            Gate::PinchHp => self.holder(role).in_pinch(),
            Gate::HolderFullHp => self.holder(role).at_full_hp(),
            Gate::SuperEffective => self.effectiveness > EFF_NEUTRAL,
            Gate::Weather(gate) => self.weather.map_or(false, |w| gate.matches(w)),
            Gate::Terrain(terrain) => {
                self.generation.has_terrain() && self.field.terrain == Some(*terrain)
            }
        }
    }

    pub fn effect_applies(&self, effect: &Effect, role: Role) -> bool {
        effect.when.iter().all(|gate| self.gate_passes(gate, role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::CombatantSpec;
    use crate::dex;
    use crate::field::Terrain;

    fn context<'a>(
        attacker: &'a Combatant,
        defender: &'a Combatant,
        move_name: &str,
        field: &'a Field,
        generation: Generation,
    ) -> DamageContext<'a> {
        DamageContext::new(
            attacker,
            defender,
            dex::move_data(move_name).unwrap(),
            field,
            generation,
            false,
        )
    }

    #[test]
    fn test_split_by_generation() {
        let attacker = CombatantSpec::named("Gengar").resolve().unwrap();
        let defender = CombatantSpec::named("Snorlax").resolve().unwrap();
        let field = Field::default();

        // Shadow Ball is special from Gen 4 on, but Ghost is a physical
        // type in Gen 3.
        let ctx = context(&attacker, &defender, "Shadow Ball", &field, Generation::Gen4);
        assert!(!ctx.physical);
        let ctx = context(&attacker, &defender, "Shadow Ball", &field, Generation::Gen3);
        assert!(ctx.physical);
    }

    #[test]
    fn test_ability_immunity_zeroes_effectiveness() {
        let attacker = CombatantSpec::named("Pikachu").resolve().unwrap();
        let mut spec = CombatantSpec::named("Gengar");
        spec.ability = Some("Levitate".to_owned());
        let defender = spec.resolve().unwrap();
        let field = Field::default();

        let ctx = context(&attacker, &defender, "Earthquake", &field, Generation::Gen9);
        assert_eq!(ctx.effectiveness, 0);
        // Other moves are untouched.
        let ctx = context(&attacker, &defender, "Thunderbolt", &field, Generation::Gen9);
        assert_eq!(ctx.effectiveness, 4);
    }

    #[test]
    fn test_weather_suppression() {
        let attacker = CombatantSpec::named("Charizard").resolve().unwrap();
        let mut spec = CombatantSpec::named("Golduck");
        spec.ability = Some("Cloud Nine".to_owned());
        let defender = spec.resolve().unwrap();
        let field = Field {
            weather: Some(Weather::Sun),
            ..Field::default()
        };

        let ctx = context(&attacker, &defender, "Flamethrower", &field, Generation::Gen9);
        assert_eq!(ctx.weather, None);
    }

    #[test]
    fn test_terrain_gate_requires_generation() {
        let attacker = CombatantSpec::named("Pikachu").resolve().unwrap();
        let defender = CombatantSpec::named("Snorlax").resolve().unwrap();
        let field = Field {
            terrain: Some(Terrain::Electric),
            ..Field::default()
        };

        let gate = Gate::Terrain(Terrain::Electric);
        let ctx = context(&attacker, &defender, "Thunderbolt", &field, Generation::Gen9);
        assert!(ctx.gate_passes(&gate, Role::Attacker));
        let ctx = context(&attacker, &defender, "Thunderbolt", &field, Generation::Gen5);
        assert!(!ctx.gate_passes(&gate, Role::Attacker));
    }

    #[test]
    fn test_role_sensitive_gates() {
        let mut spec = CombatantSpec::named("Machamp");
        spec.status = Some(crate::combatant::Status::Brn);
        let attacker = spec.resolve().unwrap();
        let defender = CombatantSpec::named("Snorlax").resolve().unwrap();
        let field = Field::default();

        let ctx = context(&attacker, &defender, "Close Combat", &field, Generation::Gen9);
        assert!(ctx.gate_passes(&Gate::HolderStatused, Role::Attacker));
        assert!(!ctx.gate_passes(&Gate::HolderStatused, Role::Defender));
        assert!(ctx.gate_passes(&Gate::HolderFullHp, Role::Defender));
    }

    #[test]
    fn test_stab_from_type_or_ability() {
        let attacker = CombatantSpec::named("Charizard").resolve().unwrap();
        let defender = CombatantSpec::named("Snorlax").resolve().unwrap();
        let field = Field::default();
        let ctx = context(&attacker, &defender, "Flamethrower", &field, Generation::Gen9);
        assert!(ctx.has_stab());
        let ctx = context(&attacker, &defender, "Earthquake", &field, Generation::Gen9);
        assert!(!ctx.has_stab());

        let mut spec = CombatantSpec::named("Cinderace");
        spec.ability = Some("Libero".to_owned());
        let attacker = spec.resolve().unwrap();
        let ctx = context(&attacker, &defender, "Earthquake", &field, Generation::Gen9);
        assert!(ctx.has_stab());
    }
}
