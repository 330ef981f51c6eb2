//! Scarlet/Violet mechanics, the trait's reference behavior.

use super::GenMechanics;

pub struct Gen9Mechanics;

impl GenMechanics for Gen9Mechanics {}
