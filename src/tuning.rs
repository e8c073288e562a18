//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`] so a run can be reconfigured
//! from JSON without touching the simulation code. Defaults reproduce the
//! classic balance from [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors produced while loading or validating tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Obstacle footprint (width x height)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: f32,
    pub height: f32,
}

impl From<(f32, f32)> for Footprint {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// Gameplay balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,
    pub ground_margin: f32,

    // === Player ===
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_slide_height: f32,
    pub gravity: f32,
    pub jump_power: f32,

    // === Pace ===
    pub start_speed: f64,
    pub speed_step: f64,
    pub speed_up_period: u32,
    pub distance_factor: f64,

    // === Spawning ===
    pub obstacle_period: u32,
    pub coin_period: u32,
    pub spawn_offset: f32,
    pub tall: Footprint,
    pub low: Footprint,
    pub coin_radius: f32,
    pub coin_band_base: f32,
    pub coin_band_span: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            ground_margin: GROUND_MARGIN,

            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_slide_height: PLAYER_SLIDE_HEIGHT,
            gravity: GRAVITY,
            jump_power: JUMP_POWER,

            start_speed: START_SPEED,
            speed_step: SPEED_STEP,
            speed_up_period: SPEED_UP_PERIOD,
            distance_factor: DISTANCE_FACTOR,

            obstacle_period: OBSTACLE_PERIOD,
            coin_period: COIN_PERIOD,
            spawn_offset: SPAWN_OFFSET,
            tall: TALL_SIZE.into(),
            low: LOW_SIZE.into(),
            coin_radius: COIN_RADIUS,
            coin_band_base: COIN_BAND_BASE,
            coin_band_span: COIN_BAND_SPAN,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Vertical coordinate of the floor the player stands on
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.world_height - self.ground_margin
    }

    /// X coordinate where new obstacles and coins appear
    #[inline]
    pub fn spawn_x(&self) -> f32 {
        self.world_width + self.spawn_offset
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return invalid("world", "dimensions must be positive");
        }
        if self.ground_margin < 0.0 || self.ground_margin >= self.world_height {
            return invalid("ground_margin", "must lie inside the world");
        }
        if self.player_width <= 0.0 || self.player_height <= 0.0 {
            return invalid("player", "size must be positive");
        }
        if self.player_slide_height <= 0.0 || self.player_slide_height > self.player_height {
            return invalid("player_slide_height", "must be positive and at most player_height");
        }
        if self.gravity <= 0.0 {
            return invalid("gravity", "must pull downward");
        }
        if self.jump_power >= 0.0 {
            return invalid("jump_power", "must be negative (upward)");
        }
        if self.start_speed < 0.0 || self.speed_step < 0.0 {
            return invalid("speed", "must not be negative");
        }
        if self.speed_up_period == 0 || self.obstacle_period == 0 || self.coin_period == 0 {
            return invalid("period", "must be at least one tick");
        }
        for (field, fp) in [("tall", self.tall), ("low", self.low)] {
            if fp.width <= 0.0 || fp.height <= 0.0 {
                return invalid(field, "footprint must be positive");
            }
        }
        if self.coin_radius <= 0.0 || self.coin_band_span < 0.0 {
            return invalid("coin", "radius must be positive and band non-negative");
        }
        Ok(())
    }
}
