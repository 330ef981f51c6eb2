//! Capture probability estimation using the Gen 3/4 capture formula.
//!
//! The per-throw probability comes from the games' shake-check
//! approximation: `b = floor(1048560 / (16711680/a)^(1/4))` and four
//! independent shakes at `b/65536`.

use phf::phf_map;
use serde::{Deserialize, Serialize};

use crate::combatant::Status;
use crate::dex::{self, to_id, SpeciesData};
use crate::error::{CalcError, CalcResult};
use crate::types::Type;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Ball {
    Poke,
    Premier,
    Luxury,
    Great,
    Ultra,
    Master,
    Repeat,
    Timer,
    Net,
    Nest,
    Dive,
    Dusk,
}

static BALLS: phf::Map<&'static str, Ball> = phf_map! {
    "pokeball" => Ball::Poke,
    "poke" => Ball::Poke,
    "premierball" => Ball::Premier,
    "premier" => Ball::Premier,
    "luxuryball" => Ball::Luxury,
    "luxury" => Ball::Luxury,
    "greatball" => Ball::Great,
    "great" => Ball::Great,
    "ultraball" => Ball::Ultra,
    "ultra" => Ball::Ultra,
    "masterball" => Ball::Master,
    "master" => Ball::Master,
    "repeatball" => Ball::Repeat,
    "repeat" => Ball::Repeat,
    "timerball" => Ball::Timer,
    "timer" => Ball::Timer,
    "netball" => Ball::Net,
    "net" => Ball::Net,
    "nestball" => Ball::Nest,
    "nest" => Ball::Nest,
    "diveball" => Ball::Dive,
    "dive" => Ball::Dive,
    "duskball" => Ball::Dusk,
    "dusk" => Ball::Dusk,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatchRequest {
    pub species: String,
    /// The wild target's level; only the Nest Ball cares.
    #[serde(default = "default_level")]
    pub level: u8,
    pub ball: String,
    #[serde(default)]
    pub status: Option<Status>,
    /// Remaining HP as a percentage, (0, 100].
    #[serde(default = "default_hp_percent")]
    pub hp_percent: f64,
    /// Turns elapsed, for the Timer Ball.
    #[serde(default)]
    pub turns: u32,
    /// Species registered as caught, for the Repeat Ball.
    #[serde(default)]
    pub caught_before: bool,
    #[serde(default)]
    pub underwater: bool,
    #[serde(default)]
    pub cave_or_night: bool,
    /// Throws for the cumulative probability.
    #[serde(default = "default_throws")]
    pub throws: u32,
}

fn default_level() -> u8 {
    50
}

fn default_hp_percent() -> f64 {
    100.0
}

fn default_throws() -> u32 {
    1
}

impl CatchRequest {
    pub fn new(species: impl Into<String>, ball: impl Into<String>) -> Self {
        CatchRequest {
            species: species.into(),
            level: default_level(),
            ball: ball.into(),
            status: None,
            hp_percent: default_hp_percent(),
            turns: 0,
            caught_before: false,
            underwater: false,
            cave_or_night: false,
            throws: default_throws(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatchResult {
    /// Per-throw capture probability.
    pub probability: f64,
    /// Probability of at least one capture in `throws` throws.
    pub cumulative_probability: f64,
    pub expected_throws: f64,
    pub ball_modifier: f64,
    pub status_modifier: f64,
}

pub fn estimate_catch(request: &CatchRequest) -> CalcResult<CatchResult> {
    let species = dex::species(&request.species)?;

    if !(1..=100).contains(&request.level) {
        return Err(CalcError::invalid_input(format!(
            "level must be between 1 and 100, got {}",
            request.level
        )));
    }
    if !(request.hp_percent > 0.0 && request.hp_percent <= 100.0) {
        return Err(CalcError::invalid_input(format!(
            "hp percent must be in (0, 100], got {}",
            request.hp_percent
        )));
    }
    if request.throws == 0 {
        return Err(CalcError::invalid_input("throws must be at least 1"));
    }

    let ball = BALLS
        .get(to_id(&request.ball).as_str())
        .copied()
        .ok_or_else(|| CalcError::not_found("ball", &request.ball))?;

    let ball_modifier = ball_modifier(ball, request, species);
    let status_modifier = status_modifier(request.status);

    let probability = single_throw_probability(
        species.catch_rate,
        ball_modifier,
        status_modifier,
        request.hp_percent,
    );
    let cumulative_probability = if probability >= 1.0 {
        1.0
    } else {
        1.0 - (1.0 - probability).powi(request.throws as i32)
    };

    Ok(CatchResult {
        probability,
        cumulative_probability,
        expected_throws: 1.0 / probability,
        ball_modifier,
        status_modifier,
    })
}

fn ball_modifier(ball: Ball, request: &CatchRequest, species: &SpeciesData) -> f64 {
    match ball {
        Ball::Poke | Ball::Premier | Ball::Luxury => 1.0,
        Ball::Great => 1.5,
        Ball::Ultra => 2.0,
        Ball::Master => 255.0,
        Ball::Repeat => {
            if request.caught_before {
                3.0
            } else {
                1.0
            }
        }
        Ball::Timer => ((request.turns as f64 + 10.0) / 10.0).min(4.0),
        Ball::Net => {
            if species.has_type(Type::Water) || species.has_type(Type::Bug) {
                3.0
            } else {
                1.0
            }
        }
        Ball::Nest => ((41.0 - request.level as f64) / 10.0).clamp(1.0, 4.0),
        Ball::Dive => {
            if request.underwater {
                3.5
            } else {
                1.0
            }
        }
        Ball::Dusk => {
            if request.cave_or_night {
                3.5
            } else {
                1.0
            }
        }
    }
}

fn status_modifier(status: Option<Status>) -> f64 {
    match status {
        Some(Status::Slp) | Some(Status::Frz) => 2.0,
        Some(_) => 1.5,
        None => 1.0,
    }
}

fn single_throw_probability(catch_rate: u16, ball: f64, status: f64, hp_percent: f64) -> f64 {
    // A Master Ball (or anything with a 255 modifier) always succeeds.
    if ball >= 255.0 {
        return 1.0;
    }
    let hp_factor = (3.0 - 2.0 * hp_percent / 100.0) / 3.0;
    let a = hp_factor * catch_rate as f64 * ball * status;
    if a >= 255.0 {
        return 1.0;
    }
    let b = (1048560.0 / (16711680.0 / a).sqrt().sqrt()).floor();
    (b / 65536.0).powi(4).min(1.0)
}
