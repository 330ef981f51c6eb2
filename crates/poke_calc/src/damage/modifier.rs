//! Damage modifiers in 4096-based fixed point.
//!
//! From Gen 4 on the games express every damage multiplier as `x/4096`
//! and fold them pairwise on that scale, rounding each step (see
//! [`chain_mods`](super::formula::chain_mods)). Working on the same
//! scale keeps results bit-exact.

use std::fmt;

/// A multiplier on the 4096 scale: `Modifier(4096)` is 1.0x.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Modifier(pub u16);

/// Build a [`Modifier`] from a literal, rounding half up.
macro_rules! modifier {
    ($val:expr) => {
        $crate::damage::modifier::Modifier(($val * 4096.0 + 0.5) as u16)
    };
}
pub(crate) use modifier;

impl Modifier {
    pub const ONE: Modifier = Modifier(4096);
    pub const HALF: Modifier = Modifier(2048);
    pub const THREE_QUARTERS: Modifier = Modifier(3072);
    /// The games use 2732 for screens in doubles, not the rounded 2731.
    pub const TWO_THIRDS: Modifier = Modifier(2732);
    pub const ONE_POINT_FIVE: Modifier = Modifier(6144);
    pub const DOUBLE: Modifier = Modifier(8192);

    pub fn is_neutral(self) -> bool {
        self.0 == 4096
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 4096.0
    }
}

impl fmt::Debug for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Modifier({} = {:.2}x)", self.0, self.as_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_macro() {
        assert_eq!(modifier!(1.0), Modifier::ONE);
        assert_eq!(modifier!(0.5), Modifier::HALF);
        assert_eq!(modifier!(1.5), Modifier::ONE_POINT_FIVE);
        assert_eq!(modifier!(2.0), Modifier::DOUBLE);
        assert_eq!(modifier!(1.2), Modifier(4915));
        assert_eq!(modifier!(1.3), Modifier(5325));
    }

    #[test]
    fn test_constants() {
        assert!(Modifier::ONE.is_neutral());
        assert!(!Modifier::HALF.is_neutral());
        assert_eq!(Modifier::TWO_THIRDS.0, 2732);
        assert_eq!(Modifier::THREE_QUARTERS.as_f64(), 0.75);
    }
}
