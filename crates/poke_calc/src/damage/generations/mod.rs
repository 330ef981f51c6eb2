//! Per-generation rule variations.
//!
//! The trait's defaults describe Gen 9; older generations override the
//! handful of rules that differed. Gen 3 additionally swaps the whole
//! modifier pipeline (sequential truncation instead of 4096 chaining),
//! which lives in [`super::pipeline`].

mod gen3;
mod gen4;
mod gen5;
mod gen6;
mod gen7;
mod gen8;
mod gen9;

pub use gen3::Gen3Mechanics;
pub use gen4::Gen4Mechanics;
pub use gen5::Gen5Mechanics;
pub use gen6::Gen6Mechanics;
pub use gen7::Gen7Mechanics;
pub use gen8::Gen8Mechanics;
pub use gen9::Gen9Mechanics;

use crate::damage::modifier::{modifier, Modifier};
use crate::types::{self, Type};

/// Mechanics that vary by generation. Defaults are current (Gen 9)
/// behavior.
pub trait GenMechanics {
    /// Critical hits dealt 2x through Gen 5, 1.5x from Gen 6 on.
    fn crit_modifier(&self) -> Modifier {
        Modifier::ONE_POINT_FIVE
    }

    /// Whether the physical/special split follows the move's category.
    /// Gen 3 splits by the move's type instead.
    fn uses_category_split(&self) -> bool {
        true
    }

    /// Combined type effectiveness on the 4-scale. Gens 3 through 5 use
    /// the chart where Steel still resists Ghost and Dark.
    fn type_effectiveness(&self, atk: Type, def_type1: Type, def_type2: Option<Type>) -> u8 {
        types::type_effectiveness(atk, def_type1, def_type2)
    }

    /// Terrains exist from Gen 6 on.
    fn has_terrain(&self) -> bool {
        true
    }

    /// Base-power boost for a move matching the active terrain. Gens 6
    /// and 7 used 1.5x; Gen 8 reduced it to 1.3x.
    fn terrain_boost(&self) -> Modifier {
        modifier!(1.3)
    }

    /// Sandstorm boosts Rock-types' special defense from Gen 4 on.
    fn sand_boosts_rock_spd(&self) -> bool {
        true
    }
}

/// Effectiveness for generations before the Gen 6 chart change: Steel
/// still resists Ghost and Dark.
pub(crate) fn legacy_type_effectiveness(atk: Type, def_type1: Type, def_type2: Option<Type>) -> u8 {
    fn single(atk: Type, def: Type) -> u8 {
        let eff = types::single_effectiveness(atk, def);
        if def == Type::Steel && matches!(atk, Type::Ghost | Type::Dark) {
            eff / 2
        } else {
            eff
        }
    }
    let e1 = single(atk, def_type1);
    let e2 = match def_type2 {
        Some(t2) if t2 != def_type1 => single(atk, t2),
        _ => types::EFF_NEUTRAL,
    };
    types::combine_effectiveness(e1, e2)
}

/// A supported generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Generation {
    Gen3,
    Gen4,
    Gen5,
    Gen6,
    Gen7,
    Gen8,
    Gen9,
}

impl Generation {
    pub fn from_num(num: u8) -> Option<Generation> {
        match num {
            3 => Some(Generation::Gen3),
            4 => Some(Generation::Gen4),
            5 => Some(Generation::Gen5),
            6 => Some(Generation::Gen6),
            7 => Some(Generation::Gen7),
            8 => Some(Generation::Gen8),
            9 => Some(Generation::Gen9),
            _ => None,
        }
    }

    pub fn num(self) -> u8 {
        match self {
            Generation::Gen3 => 3,
            Generation::Gen4 => 4,
            Generation::Gen5 => 5,
            Generation::Gen6 => 6,
            Generation::Gen7 => 7,
            Generation::Gen8 => 8,
            Generation::Gen9 => 9,
        }
    }

    pub fn mechanics(self) -> &'static dyn GenMechanics {
        match self {
            Generation::Gen3 => &Gen3Mechanics,
            Generation::Gen4 => &Gen4Mechanics,
            Generation::Gen5 => &Gen5Mechanics,
            Generation::Gen6 => &Gen6Mechanics,
            Generation::Gen7 => &Gen7Mechanics,
            Generation::Gen8 => &Gen8Mechanics,
            Generation::Gen9 => &Gen9Mechanics,
        }
    }
}

impl GenMechanics for Generation {
    fn crit_modifier(&self) -> Modifier {
        self.mechanics().crit_modifier()
    }

    fn uses_category_split(&self) -> bool {
        self.mechanics().uses_category_split()
    }

    fn type_effectiveness(&self, atk: Type, def_type1: Type, def_type2: Option<Type>) -> u8 {
        self.mechanics().type_effectiveness(atk, def_type1, def_type2)
    }

    fn has_terrain(&self) -> bool {
        self.mechanics().has_terrain()
    }

    fn terrain_boost(&self) -> Modifier {
        self.mechanics().terrain_boost()
    }

    fn sand_boosts_rock_spd(&self) -> bool {
        self.mechanics().sand_boosts_rock_spd()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_num_round_trip() {
        for num in 3..=9 {
            assert_eq!(Generation::from_num(num).unwrap().num(), num);
        }
        assert_eq!(Generation::from_num(2), None);
        assert_eq!(Generation::from_num(10), None);
    }

    #[test]
    fn test_crit_by_generation() {
        assert_eq!(Generation::Gen4.crit_modifier(), Modifier::DOUBLE);
        assert_eq!(Generation::Gen5.crit_modifier(), Modifier::DOUBLE);
        assert_eq!(Generation::Gen6.crit_modifier(), Modifier::ONE_POINT_FIVE);
        assert_eq!(Generation::Gen9.crit_modifier(), Modifier::ONE_POINT_FIVE);
    }

    #[test]
    fn test_steel_ghost_dark_chart_change() {
        for gen in [Generation::Gen3, Generation::Gen4, Generation::Gen5] {
            assert_eq!(gen.type_effectiveness(Type::Ghost, Type::Steel, None), 2);
            assert_eq!(gen.type_effectiveness(Type::Dark, Type::Steel, None), 2);
        }
        for gen in [Generation::Gen6, Generation::Gen9] {
            assert_eq!(gen.type_effectiveness(Type::Ghost, Type::Steel, None), 4);
            assert_eq!(gen.type_effectiveness(Type::Dark, Type::Steel, None), 4);
        }
        // The legacy chart only touches Steel.
        assert_eq!(
            Generation::Gen3.type_effectiveness(Type::Ghost, Type::Psychic, None),
            8
        );
    }

    #[test]
    fn test_terrain_availability_and_boost() {
        assert!(!Generation::Gen3.has_terrain());
        assert!(!Generation::Gen5.has_terrain());
        assert!(Generation::Gen6.has_terrain());
        assert_eq!(Generation::Gen6.terrain_boost(), Modifier::ONE_POINT_FIVE);
        assert_eq!(Generation::Gen7.terrain_boost(), Modifier::ONE_POINT_FIVE);
        assert_eq!(Generation::Gen8.terrain_boost(), Modifier(5325));
        assert_eq!(Generation::Gen9.terrain_boost(), Modifier(5325));
    }

    #[test]
    fn test_split_and_sand() {
        assert!(!Generation::Gen3.uses_category_split());
        assert!(Generation::Gen4.uses_category_split());
        assert!(!Generation::Gen3.sand_boosts_rock_spd());
        assert!(Generation::Gen4.sand_boosts_rock_spd());
    }
}
