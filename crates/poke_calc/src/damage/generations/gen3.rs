//! Ruby/Sapphire/Emerald mechanics.
//!
//! The split is by move type, crits double, and there is no terrain or
//! sandstorm special-defense boost. The sequential damage pipeline
//! itself is selected per generation elsewhere.

use super::{legacy_type_effectiveness, GenMechanics};
use crate::damage::modifier::Modifier;
use crate::types::Type;

pub struct Gen3Mechanics;

impl GenMechanics for Gen3Mechanics {
    fn crit_modifier(&self) -> Modifier {
        Modifier::DOUBLE
    }

    fn uses_category_split(&self) -> bool {
        false
    }

    fn type_effectiveness(&self, atk: Type, def_type1: Type, def_type2: Option<Type>) -> u8 {
        legacy_type_effectiveness(atk, def_type1, def_type2)
    }

    fn has_terrain(&self) -> bool {
        false
    }

    fn sand_boosts_rock_spd(&self) -> bool {
        false
    }
}
