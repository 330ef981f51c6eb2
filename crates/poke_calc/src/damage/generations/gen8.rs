//! Sword/Shield mechanics: the terrain boost drops to 1.3x. Everything
//! else matches current behavior.

use super::GenMechanics;

pub struct Gen8Mechanics;

impl GenMechanics for Gen8Mechanics {}
