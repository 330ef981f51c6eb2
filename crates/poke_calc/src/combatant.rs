//! Combatant resolution: from a request spec naming things by string to
//! a resolved combatant holding data records and computed stats.
//!
//! Missing fields take competitive defaults (level 100, 31 IVs, 0 EVs,
//! neutral nature, full HP). Out-of-range values are rejected with an
//! error, never clamped.

use serde::{Deserialize, Serialize};

use crate::dex::{self, AbilityData, ItemData, SpeciesData};
use crate::error::{CalcError, CalcResult};
use crate::stats::{apply_boost, compute_hp, compute_stat, Stat, StatBlock};
use crate::types::Type;

/// Non-volatile status conditions, by their usual short codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Brn,
    Par,
    Psn,
    Tox,
    Slp,
    Frz,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ivs {
    pub hp: u8,
    pub atk: u8,
    pub def: u8,
    pub spa: u8,
    pub spd: u8,
    pub spe: u8,
}

impl Default for Ivs {
    fn default() -> Self {
        Ivs {
            hp: 31,
            atk: 31,
            def: 31,
            spa: 31,
            spd: 31,
            spe: 31,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Evs {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Boosts {
    pub atk: i8,
    pub def: i8,
    pub spa: i8,
    pub spd: i8,
    pub spe: i8,
}

impl Boosts {
    pub fn get(&self, stat: Stat) -> i8 {
        match stat {
            Stat::Hp => 0,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }
}

/// One combatant as named in a request.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatantSpec {
    pub species: String,
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default)]
    pub ivs: Ivs,
    #[serde(default)]
    pub evs: Evs,
    #[serde(default = "default_nature")]
    pub nature: String,
    #[serde(default)]
    pub ability: Option<String>,
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub boosts: Boosts,
    /// Defaults to max HP.
    #[serde(default)]
    pub current_hp: Option<u32>,
}

fn default_level() -> u8 {
    100
}

fn default_nature() -> String {
    "Hardy".to_owned()
}

impl CombatantSpec {
    /// A spec with just a species name and all defaults.
    pub fn named(species: impl Into<String>) -> Self {
        CombatantSpec {
            species: species.into(),
            level: default_level(),
            ivs: Ivs::default(),
            evs: Evs::default(),
            nature: default_nature(),
            ability: None,
            item: None,
            status: None,
            boosts: Boosts::default(),
            current_hp: None,
        }
    }

    pub fn resolve(&self) -> CalcResult<Combatant> {
        let species = dex::species(&self.species)?;
        let nature = dex::nature(&self.nature)?;
        let ability = self.ability.as_deref().map(dex::ability).transpose()?;
        let item = self.item.as_deref().map(dex::item).transpose()?;

        if !(1..=100).contains(&self.level) {
            return Err(CalcError::invalid_input(format!(
                "level must be between 1 and 100, got {}",
                self.level
            )));
        }
        for (name, iv) in [
            ("hp", self.ivs.hp),
            ("atk", self.ivs.atk),
            ("def", self.ivs.def),
            ("spa", self.ivs.spa),
            ("spd", self.ivs.spd),
            ("spe", self.ivs.spe),
        ] {
            if iv > 31 {
                return Err(CalcError::invalid_input(format!(
                    "{name} IV must be between 0 and 31, got {iv}"
                )));
            }
        }
        for (name, ev) in [
            ("hp", self.evs.hp),
            ("atk", self.evs.atk),
            ("def", self.evs.def),
            ("spa", self.evs.spa),
            ("spd", self.evs.spd),
            ("spe", self.evs.spe),
        ] {
            if ev > 252 {
                return Err(CalcError::invalid_input(format!(
                    "{name} EV must be between 0 and 252, got {ev}"
                )));
            }
        }
        for (name, boost) in [
            ("atk", self.boosts.atk),
            ("def", self.boosts.def),
            ("spa", self.boosts.spa),
            ("spd", self.boosts.spd),
            ("spe", self.boosts.spe),
        ] {
            if !(-6..=6).contains(&boost) {
                return Err(CalcError::invalid_input(format!(
                    "{name} boost must be between -6 and +6, got {boost}"
                )));
            }
        }

        let base = &species.base_stats;
        let stats = StatBlock {
            hp: compute_hp(base.hp, self.ivs.hp, self.evs.hp, self.level),
            atk: compute_stat(
                base.atk,
                self.ivs.atk,
                self.evs.atk,
                self.level,
                nature.modifier_num(Stat::Atk),
            ),
            def: compute_stat(
                base.def,
                self.ivs.def,
                self.evs.def,
                self.level,
                nature.modifier_num(Stat::Def),
            ),
            spa: compute_stat(
                base.spa,
                self.ivs.spa,
                self.evs.spa,
                self.level,
                nature.modifier_num(Stat::Spa),
            ),
            spd: compute_stat(
                base.spd,
                self.ivs.spd,
                self.evs.spd,
                self.level,
                nature.modifier_num(Stat::Spd),
            ),
            spe: compute_stat(
                base.spe,
                self.ivs.spe,
                self.evs.spe,
                self.level,
                nature.modifier_num(Stat::Spe),
            ),
        };

        let current_hp = self.current_hp.unwrap_or(stats.hp);
        if current_hp == 0 || current_hp > stats.hp {
            return Err(CalcError::invalid_input(format!(
                "current HP must be between 1 and {}, got {current_hp}",
                stats.hp
            )));
        }

        Ok(Combatant {
            species,
            level: self.level,
            stats,
            boosts: self.boosts,
            status: self.status,
            ability,
            item,
            current_hp,
        })
    }
}

/// A fully resolved combatant, ready for the damage pipelines.
#[derive(Clone, Debug)]
pub struct Combatant {
    pub species: &'static SpeciesData,
    pub level: u8,
    pub stats: StatBlock,
    pub boosts: Boosts,
    pub status: Option<Status>,
    pub ability: Option<&'static AbilityData>,
    pub item: Option<&'static ItemData>,
    pub current_hp: u32,
}

impl Combatant {
    pub fn max_hp(&self) -> u32 {
        self.stats.hp
    }

    pub fn has_type(&self, typ: Type) -> bool {
        self.species.has_type(typ)
    }

    pub fn is_statused(&self) -> bool {
        self.status.is_some()
    }

    pub fn is_burned(&self) -> bool {
        self.status == Some(Status::Brn)
    }

    pub fn at_full_hp(&self) -> bool {
        self.current_hp == self.max_hp()
    }

    /// At or below a third of max HP, the threshold for pinch abilities.
    pub fn in_pinch(&self) -> bool {
        self.current_hp * 3 <= self.max_hp()
    }

    /// A stat after boosts, without any crit filtering.
    pub fn boosted_stat(&self, stat: Stat) -> u32 {
        apply_boost(self.stats.get(stat), self.boosts.get(stat))
    }

    pub fn ability_has(&self, pred: impl Fn(&AbilityData) -> bool) -> bool {
        self.ability.map_or(false, pred)
    }
}
