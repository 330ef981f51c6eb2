//! Embedded data set: species, moves, abilities, items, natures.
//!
//! The JSON under `data/` is compiled into the binary and parsed once on
//! first access. Lookups accept display names ("Thick Fat") or ids
//! ("thickfat") interchangeably.

mod records;

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub use records::{
    AbilityData, AbilitySlots, Accuracy, BaseStats, Effect, EffectTarget, Fraction, Gate,
    ItemData, MoveCategory, MoveData, MoveFlags, MoveKind, NatureData, SpeciesData, WeatherGate,
};

use crate::error::{CalcError, CalcResult};

/// Normalize a display name to its id: lowercase, alphanumerics only.
/// "Farfetch'd" and "farfetchd" map to the same id.
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

struct Table<T> {
    entries: Vec<T>,
    by_id: HashMap<String, usize>,
}

impl<T> Table<T> {
    fn new(entries: Vec<T>, name: impl Fn(&T) -> &str) -> Self {
        let by_id = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (to_id(name(e)), i))
            .collect();
        Table { entries, by_id }
    }

    fn get(&self, name: &str) -> Option<&T> {
        self.by_id.get(&to_id(name)).map(|&i| &self.entries[i])
    }
}

struct Dex {
    species: Table<SpeciesData>,
    moves: Table<MoveData>,
    abilities: Table<AbilityData>,
    items: Table<ItemData>,
    natures: Table<NatureData>,
}

// Embedded data is a build artifact; a parse failure here is a defect in
// the shipped JSON, not a runtime condition.
static DEX: Lazy<Dex> = Lazy::new(|| {
    let species: Vec<SpeciesData> =
        serde_json::from_str(include_str!("../../data/species.json")).expect("valid species.json");
    let moves: Vec<MoveData> =
        serde_json::from_str(include_str!("../../data/moves.json")).expect("valid moves.json");
    let abilities: Vec<AbilityData> =
        serde_json::from_str(include_str!("../../data/abilities.json"))
            .expect("valid abilities.json");
    let items: Vec<ItemData> =
        serde_json::from_str(include_str!("../../data/items.json")).expect("valid items.json");
    let natures: Vec<NatureData> =
        serde_json::from_str(include_str!("../../data/natures.json")).expect("valid natures.json");

    Dex {
        species: Table::new(species, |s| &s.name),
        moves: Table::new(moves, |m| &m.name),
        abilities: Table::new(abilities, |a| &a.name),
        items: Table::new(items, |i| &i.name),
        natures: Table::new(natures, |n| &n.name),
    }
});

pub fn species(name: &str) -> CalcResult<&'static SpeciesData> {
    DEX.species
        .get(name)
        .ok_or_else(|| CalcError::not_found("species", name))
}

pub fn move_data(name: &str) -> CalcResult<&'static MoveData> {
    DEX.moves
        .get(name)
        .ok_or_else(|| CalcError::not_found("move", name))
}

pub fn ability(name: &str) -> CalcResult<&'static AbilityData> {
    DEX.abilities
        .get(name)
        .ok_or_else(|| CalcError::not_found("ability", name))
}

pub fn item(name: &str) -> CalcResult<&'static ItemData> {
    DEX.items
        .get(name)
        .ok_or_else(|| CalcError::not_found("item", name))
}

pub fn nature(name: &str) -> CalcResult<&'static NatureData> {
    DEX.natures
        .get(name)
        .ok_or_else(|| CalcError::not_found("nature", name))
}
