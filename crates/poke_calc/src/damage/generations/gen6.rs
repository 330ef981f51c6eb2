//! X/Y mechanics: 1.5x crits, the modern chart with Fairy, and the
//! original 1.5x terrain boost.

use super::GenMechanics;
use crate::damage::modifier::Modifier;

pub struct Gen6Mechanics;

impl GenMechanics for Gen6Mechanics {
    fn terrain_boost(&self) -> Modifier {
        Modifier::ONE_POINT_FIVE
    }
}
