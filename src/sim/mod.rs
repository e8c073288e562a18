//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_rect_overlap, rects_overlap};
pub use spawner::{IntervalTimer, Spawned, Spawner};
pub use state::{Coin, GameEvent, GameState, Obstacle, ObstacleKind, Player, Snapshot};
pub use tick::{TickInput, tick};
