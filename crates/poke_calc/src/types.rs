//! Elemental types and the type-effectiveness chart.
//!
//! Effectiveness values use a fixed-point 4-scale so that dual-type
//! products stay in integer math:
//! 0 = immune, 1 = 0.25x, 2 = 0.5x, 4 = 1x, 8 = 2x, 16 = 4x.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// The 18 elemental types (Gen 6+ chart; older charts are expressed as
/// generation overrides on top of this one).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

pub const TYPE_COUNT: usize = 18;

impl Type {
    pub const ALL: [Type; TYPE_COUNT] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }

    /// In Gen 3 the physical/special split is decided by the move's type,
    /// not its category.
    pub fn is_physical_in_gen3(self) -> bool {
        matches!(
            self,
            Type::Normal
                | Type::Fighting
                | Type::Flying
                | Type::Ground
                | Type::Rock
                | Type::Bug
                | Type::Ghost
                | Type::Poison
                | Type::Steel
        )
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Type {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Type::ALL
            .iter()
            .copied()
            .find(|t| t.name().to_ascii_lowercase() == lower)
            .ok_or_else(|| CalcError::not_found("type", s))
    }
}

/// Neutral effectiveness on the 4-scale.
pub const EFF_NEUTRAL: u8 = 4;

/// Base type chart (Gen 6+). Rows are the attacking type, columns the
/// defending type, in `Type::ALL` order.
#[rustfmt::skip]
const TYPE_CHART: [[u8; TYPE_COUNT]; TYPE_COUNT] = [
    //        Nor Fir Wat Ele Gra Ice Fig Poi Gro Fly Psy Bug Roc Gho Dra Dar Ste Fai
    /* Nor */ [ 4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  2,  0,  4,  4,  2,  4],
    /* Fir */ [ 4,  2,  2,  4,  8,  8,  4,  4,  4,  4,  4,  8,  2,  4,  2,  4,  8,  4],
    /* Wat */ [ 4,  8,  2,  4,  2,  4,  4,  4,  8,  4,  4,  4,  8,  4,  2,  4,  4,  4],
    /* Ele */ [ 4,  4,  8,  2,  2,  4,  4,  4,  0,  8,  4,  4,  4,  4,  2,  4,  4,  4],
    /* Gra */ [ 4,  2,  8,  4,  2,  4,  4,  2,  8,  2,  4,  2,  8,  4,  2,  4,  2,  4],
    /* Ice */ [ 4,  2,  2,  4,  8,  2,  4,  4,  8,  8,  4,  4,  4,  4,  8,  4,  2,  4],
    /* Fig */ [ 8,  4,  4,  4,  4,  8,  4,  2,  4,  2,  2,  2,  8,  0,  4,  8,  8,  2],
    /* Poi */ [ 4,  4,  4,  4,  8,  4,  4,  2,  2,  4,  4,  4,  2,  2,  4,  4,  0,  8],
    /* Gro */ [ 4,  8,  4,  8,  2,  4,  4,  8,  4,  0,  4,  2,  8,  4,  4,  4,  8,  4],
    /* Fly */ [ 4,  4,  4,  2,  8,  4,  8,  4,  4,  4,  4,  8,  2,  4,  4,  4,  2,  4],
    /* Psy */ [ 4,  4,  4,  4,  4,  4,  8,  8,  4,  4,  2,  4,  4,  4,  4,  0,  2,  4],
    /* Bug */ [ 4,  2,  4,  4,  8,  4,  2,  2,  4,  2,  8,  4,  4,  2,  4,  8,  2,  2],
    /* Roc */ [ 4,  8,  4,  4,  4,  8,  2,  4,  2,  8,  4,  8,  4,  4,  4,  4,  2,  4],
    /* Gho */ [ 0,  4,  4,  4,  4,  4,  4,  4,  4,  4,  8,  4,  4,  8,  4,  2,  4,  4],
    /* Dra */ [ 4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  8,  4,  2,  0],
    /* Dar */ [ 4,  4,  4,  4,  4,  4,  2,  4,  4,  4,  8,  4,  4,  8,  4,  2,  4,  2],
    /* Ste */ [ 4,  2,  2,  2,  4,  8,  4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  2,  8],
    /* Fai */ [ 4,  2,  4,  4,  4,  4,  8,  2,  4,  4,  4,  4,  4,  4,  8,  8,  2,  4],
];

/// Effectiveness of one attacking type against one defending type.
pub fn single_effectiveness(atk: Type, def: Type) -> u8 {
    TYPE_CHART[atk as usize][def as usize]
}

/// Product of two per-type values, staying on the 4-scale: `e1 * e2 / 4`.
pub fn combine_effectiveness(e1: u8, e2: u8) -> u8 {
    (e1 as u16 * e2 as u16 / 4) as u8
}

/// Combined effectiveness against a possibly dual-typed defender.
pub fn type_effectiveness(atk: Type, def_type1: Type, def_type2: Option<Type>) -> u8 {
    let e1 = single_effectiveness(atk, def_type1);
    let e2 = match def_type2 {
        Some(t2) if t2 != def_type1 => single_effectiveness(atk, t2),
        _ => EFF_NEUTRAL,
    };
    combine_effectiveness(e1, e2)
}

/// Multiplier for a 4-scale effectiveness value (display only).
pub fn effectiveness_multiplier(eff: u8) -> f64 {
    eff as f64 / 4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_basics() {
        assert_eq!(single_effectiveness(Type::Water, Type::Fire), 8);
        assert_eq!(single_effectiveness(Type::Fire, Type::Water), 2);
        assert_eq!(single_effectiveness(Type::Electric, Type::Ground), 0);
        assert_eq!(single_effectiveness(Type::Normal, Type::Ghost), 0);
        assert_eq!(single_effectiveness(Type::Dragon, Type::Fairy), 0);
        assert_eq!(single_effectiveness(Type::Ghost, Type::Steel), 4);
        assert_eq!(single_effectiveness(Type::Dark, Type::Steel), 4);
    }

    #[test]
    fn test_dual_type_product() {
        // Rock vs Fire/Flying (Charizard): 2x * 2x = 4x
        assert_eq!(
            type_effectiveness(Type::Rock, Type::Fire, Some(Type::Flying)),
            16
        );
        // Grass vs Water/Ground (Swampert): 2x * 2x = 4x
        assert_eq!(
            type_effectiveness(Type::Grass, Type::Water, Some(Type::Ground)),
            16
        );
        // Electric vs Water/Ground: immunity wins, exactly zero
        assert_eq!(
            type_effectiveness(Type::Electric, Type::Water, Some(Type::Ground)),
            0
        );
        // Fighting vs Ghost/Dark (Spiritomb pre-fairy): 0 * 2 = 0
        assert_eq!(
            type_effectiveness(Type::Fighting, Type::Ghost, Some(Type::Dark)),
            0
        );
    }

    #[test]
    fn test_dual_type_commutative() {
        for atk in Type::ALL {
            assert_eq!(
                type_effectiveness(atk, Type::Fire, Some(Type::Flying)),
                type_effectiveness(atk, Type::Flying, Some(Type::Fire)),
            );
            assert_eq!(
                type_effectiveness(atk, Type::Steel, Some(Type::Fairy)),
                type_effectiveness(atk, Type::Fairy, Some(Type::Steel)),
            );
        }
    }

    #[test]
    fn test_monotype_ignores_duplicate() {
        // A monotype defender repeated in both slots counts once.
        assert_eq!(
            type_effectiveness(Type::Water, Type::Fire, Some(Type::Fire)),
            8
        );
        assert_eq!(type_effectiveness(Type::Water, Type::Fire, None), 8);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("fire".parse::<Type>().unwrap(), Type::Fire);
        assert_eq!("FAIRY".parse::<Type>().unwrap(), Type::Fairy);
        assert!("shadow".parse::<Type>().is_err());
    }

    #[test]
    fn test_gen3_physical_types() {
        assert!(Type::Rock.is_physical_in_gen3());
        assert!(Type::Ghost.is_physical_in_gen3());
        assert!(!Type::Fire.is_physical_in_gen3());
        assert!(!Type::Dark.is_physical_in_gen3());
    }
}
