//! Sun/Moon mechanics. Identical to Gen 6 for our purposes; terrains
//! still grant 1.5x.

use super::GenMechanics;
use crate::damage::modifier::Modifier;

pub struct Gen7Mechanics;

impl GenMechanics for Gen7Mechanics {
    fn terrain_boost(&self) -> Modifier {
        Modifier::ONE_POINT_FIVE
    }
}
