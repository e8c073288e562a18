//! Endless Runner - a side-scrolling jump-and-slide arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, spawning, game state)
//! - `runner`: Frame-driven loop driver with game-over/reset handling
//! - `input`: Keyboard/touch translation into control intents
//! - `autopilot`: Jump bot for headless runs
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Player preferences and control thresholds
//! - `tuning`: Data-driven game balance

pub mod autopilot;
pub mod input;
pub mod renderer;
pub mod runner;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use autopilot::Autopilot;
pub use input::{Control, Gesture, Intents, SwipeTracker};
pub use runner::{GameObserver, GameOverReport, LoopControl, Runner};
pub use settings::{ControlSettings, Settings};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// World (canvas) dimensions in pixels, y grows downward
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 400.0;
    /// Gap between the ground line and the bottom of the world
    pub const GROUND_MARGIN: f32 = 10.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    pub const PLAYER_SLIDE_HEIGHT: f32 = 30.0;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.8;
    /// Vertical velocity applied on jump (negative = up)
    pub const JUMP_POWER: f32 = -14.0;

    /// Scroll speed at run start (pixels per tick)
    pub const START_SPEED: f64 = 4.0;
    pub const SPEED_STEP: f64 = 0.3;
    pub const SPEED_UP_PERIOD: u32 = 300;
    /// Distance gained per unit of speed per tick
    pub const DISTANCE_FACTOR: f64 = 0.1;

    /// Spawn cadence in ticks
    pub const OBSTACLE_PERIOD: u32 = 120;
    pub const COIN_PERIOD: u32 = 100;
    /// New entities appear this far past the right edge
    pub const SPAWN_OFFSET: f32 = 20.0;

    /// Obstacle sizes (width, height)
    pub const TALL_SIZE: (f32, f32) = (30.0, 60.0);
    pub const LOW_SIZE: (f32, f32) = (50.0, 30.0);

    /// Coin defaults
    pub const COIN_RADIUS: f32 = 10.0;
    /// Lowest coin center sits this far above the ground line
    pub const COIN_BAND_BASE: f32 = 60.0;
    /// Height of the band coins are scattered in
    pub const COIN_BAND_SPAN: f32 = 50.0;
}
