//! Battle damage and capture estimation for the core series games.
//!
//! The crate resolves named matchups against an embedded data set and
//! reproduces the games' integer damage math exactly: Gen 3 with its
//! sequential truncating modifier steps, Gen 4 onward with the
//! 4096-fixed-point modifier chain. On top of the sixteen damage rolls
//! it derives KO odds, recoil, drain recovery and the familiar one-line
//! summary.
//!
//! ```no_run
//! use poke_calc::{calculate, CombatantSpec, DamageRequest};
//!
//! let request = DamageRequest::new(
//!     CombatantSpec::named("Garchomp"),
//!     CombatantSpec::named("Mew"),
//!     "Earthquake",
//! );
//! let result = calculate(&request)?;
//! println!("{}", result.description);
//! # Ok::<(), poke_calc::CalcError>(())
//! ```

pub mod catch;
pub mod combatant;
pub mod damage;
pub mod dex;
pub mod error;
pub mod field;
pub mod stats;
pub mod types;

pub use catch::{estimate_catch, CatchRequest, CatchResult};
pub use combatant::{Boosts, Combatant, CombatantSpec, Evs, Ivs, Status};
pub use damage::{
    calculate, DamageRequest, DamageResult, Generation, KoChance, Recoil, Recovery,
};
pub use error::{CalcError, CalcResult};
pub use field::{Field, SideConditions, Terrain, Weather};
pub use types::Type;
