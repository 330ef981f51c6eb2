//! Battle-field state: weather, terrain, side conditions.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Sun,
    Rain,
    Sand,
    Snow,
    Hail,
    HarshSun,
    HeavyRain,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Electric,
    Grassy,
    Misty,
    Psychic,
}

/// Conditions on one side of the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SideConditions {
    pub reflect: bool,
    pub light_screen: bool,
    pub aurora_veil: bool,
    pub helping_hand: bool,
    pub friend_guard: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Field {
    pub weather: Option<Weather>,
    pub terrain: Option<Terrain>,
    pub is_doubles: bool,
    /// Conditions on the attacker's side (Helping Hand).
    pub attacker_side: SideConditions,
    /// Conditions on the defender's side (screens, Friend Guard).
    pub defender_side: SideConditions,
}

impl Field {
    /// Whether a damage-halving screen covers the defender against a hit
    /// resolved as physical or special. Aurora Veil covers both.
    pub fn screen_applies(&self, physical: bool) -> bool {
        if self.defender_side.aurora_veil {
            return true;
        }
        if physical {
            self.defender_side.reflect
        } else {
            self.defender_side.light_screen
        }
    }
}
