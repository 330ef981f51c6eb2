//! Record types for the embedded data set.
//!
//! Ability and item behavior is data, not code: each record declares its
//! modifiers as exact rationals gated on observable conditions, and the
//! damage pipelines interpret them. Adding an ability is a JSON edit.

use bitflags::bitflags;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::field::{Terrain, Weather};
use crate::stats::Stat;
use crate::types::Type;

/// An exact rational. Kept as a pair so pipelines can choose between
/// floor application (Gen 3) and 4096-fixed-point application (Gen 4+).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    pub num: u32,
    pub den: u32,
}

impl Fraction {
    pub const fn new(num: u32, den: u32) -> Self {
        Fraction { num, den }
    }

    /// `floor(value * num / den)`, the Gen 3 application.
    pub fn apply_floor(self, value: u32) -> u32 {
        value * self.num / self.den
    }

    /// Round-half-up conversion to the 4096 fixed-point scale.
    ///
    /// Non-obvious game constants (Life Orb 5324, Muscle Band 4505) are
    /// declared over a 4096 denominator so they convert to themselves.
    pub fn to_fixed4096(self) -> u16 {
        ((self.num * 4096 + self.den / 2) / self.den) as u16
    }
}

/// Which quantity a declared effect multiplies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectTarget {
    /// The attacker's effective offensive stat.
    Attack,
    /// The defender's effective defensive stat.
    Defense,
    /// The move's base power, before base damage.
    BasePower,
    /// Final damage, applied from the attacker's side.
    DamageDealt,
    /// Final damage, applied from the defender's side.
    DamageTaken,
}

/// Observable conditions an effect is gated on. All gates in a `when`
/// list must hold for the effect to apply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    PhysicalMove,
    SpecialMove,
    ContactMove,
    PunchMove,
    BiteMove,
    SoundMove,
    PulseMove,
    RecoilMove,
    SecondaryEffectMove,
    MoveType(Type),
    MoveTypeIn(Vec<Type>),
    BasePowerAtMost(u16),
    /// Holder has a non-volatile status condition.
    HolderStatused,
    /// Holder is at or below a third of max HP.
    PinchHp,
    HolderFullHp,
    SuperEffective,
    Weather(WeatherGate),
    Terrain(Terrain),
}

/// Weather gates match families, not exact states: ordinary and harsh
/// sun both count as sun.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherGate {
    Sun,
    Rain,
    Sand,
    Snow,
}

impl WeatherGate {
    pub fn matches(self, weather: Weather) -> bool {
        match self {
            WeatherGate::Sun => matches!(weather, Weather::Sun | Weather::HarshSun),
            WeatherGate::Rain => matches!(weather, Weather::Rain | Weather::HeavyRain),
            WeatherGate::Sand => weather == Weather::Sand,
            WeatherGate::Snow => matches!(weather, Weather::Snow | Weather::Hail),
        }
    }
}

/// One declared modifier: multiply `target` by `num/den` whenever every
/// gate in `when` holds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub target: EffectTarget,
    pub num: u32,
    pub den: u32,
    #[serde(default)]
    pub when: Vec<Gate>,
}

impl Effect {
    pub fn fraction(&self) -> Fraction {
        Fraction::new(self.num, self.den)
    }
}

bitflags! {
    /// Move flags consulted by gates.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct MoveFlags: u16 {
        const CONTACT = 1 << 0;
        const PUNCH = 1 << 1;
        const BITE = 1 << 2;
        const SOUND = 1 << 3;
        const PULSE = 1 << 4;
        /// Has a secondary effect (Sheer Force interacts with these).
        const SECONDARY = 1 << 5;
    }
}

impl MoveFlags {
    fn from_json_name(name: &str) -> Option<MoveFlags> {
        match name {
            "contact" => Some(MoveFlags::CONTACT),
            "punch" => Some(MoveFlags::PUNCH),
            "bite" => Some(MoveFlags::BITE),
            "sound" => Some(MoveFlags::SOUND),
            "pulse" => Some(MoveFlags::PULSE),
            "secondary" => Some(MoveFlags::SECONDARY),
            _ => None,
        }
    }
}

// Flags are a JSON list of names, e.g. ["contact", "punch"].
impl<'de> Deserialize<'de> for MoveFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        let mut flags = MoveFlags::empty();
        for name in &names {
            match MoveFlags::from_json_name(name) {
                Some(flag) => flags |= flag,
                None => return Err(de::Error::custom(format!("unknown move flag {name:?}"))),
            }
        }
        Ok(flags)
    }
}

impl Serialize for MoveFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut names = Vec::new();
        for (name, flag) in [
            ("contact", MoveFlags::CONTACT),
            ("punch", MoveFlags::PUNCH),
            ("bite", MoveFlags::BITE),
            ("sound", MoveFlags::SOUND),
            ("pulse", MoveFlags::PULSE),
            ("secondary", MoveFlags::SECONDARY),
        ] {
            if self.contains(flag) {
                names.push(name);
            }
        }
        names.serialize(serializer)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

/// How a move's damage is produced. Anything but `Standard` cannot be
/// expressed by the damage formula and is reported as unsupported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    Standard,
    FixedDamage,
    VariablePower,
    MultiHit,
    Ohko,
}

impl Default for MoveKind {
    fn default() -> Self {
        MoveKind::Standard
    }
}

/// Move accuracy: a percentage, or the sentinel the data writes as
/// `true` for moves that never check accuracy (Aura Sphere).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accuracy {
    Percent(u8),
    AlwaysHits,
}

impl Accuracy {
    /// Accuracy as a percentage; always-hits reads as 100.
    pub fn percent(self) -> u8 {
        match self {
            Accuracy::Percent(p) => p,
            Accuracy::AlwaysHits => 100,
        }
    }
}

impl<'de> Deserialize<'de> for Accuracy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Sentinel(bool),
            Percent(u8),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Sentinel(true) => Ok(Accuracy::AlwaysHits),
            Raw::Sentinel(false) => Err(de::Error::custom("accuracy cannot be false")),
            Raw::Percent(p) if (1..=100).contains(&p) => Ok(Accuracy::Percent(p)),
            Raw::Percent(p) => Err(de::Error::custom(format!("accuracy {p} out of range"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveData {
    pub name: String,
    #[serde(rename = "type")]
    pub typ: Type,
    pub category: MoveCategory,
    /// Defense stat the hit resolves against when it differs from the
    /// category (Psyshock).
    #[serde(default)]
    pub defensive_category: Option<MoveCategory>,
    #[serde(default)]
    pub base_power: u16,
    pub accuracy: Accuracy,
    #[serde(default)]
    pub flags: MoveFlags,
    #[serde(default)]
    pub kind: MoveKind,
    /// Recoil as a fraction of damage dealt.
    #[serde(default)]
    pub recoil: Option<Fraction>,
    /// HP recovered as a fraction of damage dealt.
    #[serde(default)]
    pub drain: Option<Fraction>,
    /// Targets every opponent, so the doubles spread penalty applies.
    #[serde(default)]
    pub hits_multiple: bool,
    /// Display text; the damage math never reads it.
    #[serde(default)]
    pub short_desc: Option<String>,
}

impl MoveData {
    pub fn has_recoil(&self) -> bool {
        self.recoil.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl BaseStats {
    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }
}

/// The ability slots a species can carry: two normal, one hidden.
/// Reference data; requests name the chosen ability directly.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AbilitySlots {
    #[serde(rename = "0", default)]
    pub slot0: Option<String>,
    #[serde(rename = "1", default)]
    pub slot1: Option<String>,
    #[serde(rename = "H", default)]
    pub hidden: Option<String>,
}

impl AbilitySlots {
    /// Filled slots in order: 0, 1, hidden.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [
            self.slot0.as_deref(),
            self.slot1.as_deref(),
            self.hidden.as_deref(),
        ]
        .into_iter()
        .flatten()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesData {
    /// National dex number.
    pub num: u16,
    pub name: String,
    pub types: Vec<Type>,
    pub base_stats: BaseStats,
    #[serde(default)]
    pub abilities: AbilitySlots,
    /// Canonical species name for alternate forms.
    #[serde(default)]
    pub base_species: Option<String>,
    /// Capture rate, 3..=255.
    pub catch_rate: u16,
}

impl SpeciesData {
    pub fn type1(&self) -> Type {
        self.types[0]
    }

    pub fn type2(&self) -> Option<Type> {
        self.types.get(1).copied()
    }

    pub fn has_type(&self, typ: Type) -> bool {
        self.types.contains(&typ)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityData {
    pub name: String,
    #[serde(default)]
    pub effects: Vec<Effect>,
    /// Grants immunity to moves of this type.
    #[serde(default)]
    pub immune_to: Option<Type>,
    /// Negates weather for the whole field (Cloud Nine, Air Lock).
    #[serde(default)]
    pub suppresses_weather: bool,
    /// Burn does not halve physical damage (Guts).
    #[serde(default)]
    pub ignores_burn: bool,
    /// Every move gets the same-type bonus (Protean, Libero).
    #[serde(default)]
    pub stab_any_type: bool,
    /// Replacement same-type bonus (Adaptability's 2x).
    #[serde(default)]
    pub stab_mod: Option<Fraction>,
    #[serde(default)]
    pub suppresses_move_recoil: bool,
    #[serde(default)]
    pub suppresses_item_recoil: bool,
    /// Holder's own damage-boosting item is ignored (Sheer Force + Life Orb).
    #[serde(default)]
    pub suppresses_item_damage: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemData {
    pub name: String,
    #[serde(default)]
    pub effects: Vec<Effect>,
    /// Boosts same-typed moves; the magnitude is generation-dependent,
    /// so pipelines supply it.
    #[serde(default)]
    pub boosts_type: Option<Type>,
    /// Recoil per use as a fraction of the holder's max HP (Life Orb).
    #[serde(default)]
    pub recoil: Option<Fraction>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NatureData {
    pub name: String,
    #[serde(default)]
    pub plus: Option<Stat>,
    #[serde(default)]
    pub minus: Option<Stat>,
}

impl NatureData {
    /// Stat multiplier numerator over 10: 11 for the boosted stat, 9 for
    /// the hindered one, 10 otherwise. Neutral natures return 10 for all.
    pub fn modifier_num(&self, stat: Stat) -> u32 {
        if self.plus == self.minus {
            return 10;
        }
        if self.plus == Some(stat) {
            11
        } else if self.minus == Some(stat) {
            9
        } else {
            10
        }
    }
}
