//! Black/White mechanics. Last generation with 2x crits and the chart
//! where Steel resists Ghost and Dark.

use super::{legacy_type_effectiveness, GenMechanics};
use crate::damage::modifier::Modifier;
use crate::types::Type;

pub struct Gen5Mechanics;

impl GenMechanics for Gen5Mechanics {
    fn crit_modifier(&self) -> Modifier {
        Modifier::DOUBLE
    }

    fn type_effectiveness(&self, atk: Type, def_type1: Type, def_type2: Option<Type>) -> u8 {
        legacy_type_effectiveness(atk, def_type1, def_type2)
    }

    fn has_terrain(&self) -> bool {
        false
    }
}
