//! Game state and core simulation types
//!
//! Everything a run needs to be replayed lives here: the seeded RNG, the
//! counters, the player and the live entity sets.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::spawner::{IntervalTimer, Spawner};
use crate::tuning::Tuning;

/// Things that happened during a tick, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Scroll speed went up
    SpeedUp { speed: f64 },
    ObstacleSpawned { id: u32, kind: ObstacleKind },
    CoinSpawned { id: u32 },
    CoinCollected { id: u32, total: u32 },
    /// Terminal: the player hit an obstacle
    GameOver { distance: u32, coins: u32 },
}

/// The runner. A single instance lives for the whole session and is
/// restored to its default pose on reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; x never changes during a run
    pub pos: Vec2,
    pub size: Vec2,
    pub vel_y: f32,
    pub gravity: f32,
    pub jump_power: f32,
    pub on_ground: bool,
    pub sliding: bool,
    upright_height: f32,
    slide_height: f32,
}

impl Player {
    /// Create a player standing on the ground line
    pub fn new(tuning: &Tuning) -> Self {
        let height = tuning.player_height;
        Self {
            pos: Vec2::new(tuning.player_x, tuning.ground_line() - height),
            size: Vec2::new(tuning.player_width, height),
            vel_y: 0.0,
            gravity: tuning.gravity,
            jump_power: tuning.jump_power,
            on_ground: true,
            sliding: false,
            upright_height: height,
            slide_height: tuning.player_slide_height,
        }
    }

    /// Collision box
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Start a jump. Only possible from the ground while upright.
    pub fn try_jump(&mut self) -> bool {
        if self.on_ground && !self.sliding {
            self.vel_y = self.jump_power;
            self.on_ground = false;
            true
        } else {
            false
        }
    }

    /// Switch between the upright and sliding hitbox.
    ///
    /// The bottom edge is re-pinned to the ground line even when airborne.
    pub fn set_sliding(&mut self, sliding: bool, ground_line: f32) {
        self.sliding = sliding;
        self.size.y = if sliding {
            self.slide_height
        } else {
            self.upright_height
        };
        self.pos.y = ground_line - self.size.y;
    }

    /// Integrate one tick of gravity, landing on the ground line
    pub fn apply_gravity(&mut self, ground_line: f32) {
        self.vel_y += self.gravity;
        self.pos.y += self.vel_y;
        if self.pos.y + self.size.y >= ground_line {
            self.pos.y = ground_line - self.size.y;
            self.vel_y = 0.0;
            self.on_ground = true;
        }
    }
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Narrow spike, must be jumped
    Tall,
    /// Wide block, can be jumped or slid under
    Low,
}

impl ObstacleKind {
    /// Footprint (width, height) for this variant
    pub fn size(&self, tuning: &Tuning) -> Vec2 {
        let fp = match self {
            ObstacleKind::Tall => tuning.tall,
            ObstacleKind::Low => tuning.low,
        };
        Vec2::new(fp.width, fp.height)
    }
}

/// An obstacle scrolling toward the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub bounds: Rect,
}

impl Obstacle {
    /// Create an obstacle resting on the ground line at `x`
    pub fn new(id: u32, kind: ObstacleKind, x: f32, tuning: &Tuning) -> Self {
        let size = kind.size(tuning);
        Self {
            id,
            kind,
            bounds: Rect {
                pos: Vec2::new(x, tuning.ground_line() - size.y),
                size,
            },
        }
    }

    #[inline]
    pub fn scroll(&mut self, speed: f32) {
        self.bounds.pos.x -= speed;
    }

    /// Right edge has passed the left boundary
    #[inline]
    pub fn is_gone(&self) -> bool {
        self.bounds.right() < 0.0
    }
}

/// A collectible coin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    pub center: Vec2,
    pub radius: f32,
}

impl Coin {
    #[inline]
    pub fn scroll(&mut self, speed: f32) {
        self.center.x -= speed;
    }

    #[inline]
    pub fn is_gone(&self) -> bool {
        self.center.x + self.radius < 0.0
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub(crate) seed: u64,
    pub(crate) tuning: Tuning,
    pub(crate) rng: Pcg32,
    /// Ticks simulated since the run started
    pub(crate) frame: u64,
    pub(crate) distance: f64,
    pub(crate) coin_count: u32,
    pub(crate) speed: f64,
    pub(crate) game_over: bool,
    pub(crate) speed_up: IntervalTimer,
    pub(crate) spawner: Spawner,
    pub(crate) player: Player,
    /// Live obstacles in spawn order
    pub(crate) obstacles: Vec<Obstacle>,
    /// Live coins in spawn order
    pub(crate) coins: Vec<Coin>,
}

impl GameState {
    /// Create a new run with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            frame: 0,
            distance: 0.0,
            coin_count: 0,
            speed: tuning.start_speed,
            game_over: false,
            speed_up: IntervalTimer::new(tuning.speed_up_period),
            spawner: Spawner::new(&tuning),
            player: Player::new(&tuning),
            obstacles: Vec::new(),
            coins: Vec::new(),
            tuning,
        }
    }

    /// Restore every counter and entity set to its initial value.
    ///
    /// Tuning is kept; the RNG is reseeded so the new run is reproducible.
    pub fn reset(&mut self, seed: u64) {
        let tuning = std::mem::take(&mut self.tuning);
        *self = Self::new(seed, tuning);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn coin_count(&self) -> u32 {
        self.coin_count
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    /// Distance rounded down to whole meters, as shown to the player
    pub fn distance_floored(&self) -> u32 {
        self.distance.floor() as u32
    }

    /// Read-only view for presentation
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            player: &self.player,
            obstacles: &self.obstacles,
            coins: &self.coins,
            distance: self.distance,
            coin_count: self.coin_count,
            speed: self.speed,
            frame: self.frame,
            game_over: self.game_over,
        }
    }
}

/// Read-only view of a run handed to the renderer and HUD
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub player: &'a Player,
    pub obstacles: &'a [Obstacle],
    pub coins: &'a [Coin],
    pub distance: f64,
    pub coin_count: u32,
    pub speed: f64,
    pub frame: u64,
    pub game_over: bool,
}
