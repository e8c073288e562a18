//! Fixed-cadence entity spawning
//!
//! Each spawner counts down its own interval, so obstacles first appear on
//! tick 120 and coins on tick 100 (never on tick 0). What gets spawned is
//! random; when it gets spawned is not.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Coin, Obstacle, ObstacleKind};
use crate::tuning::Tuning;

/// Countdown that fires once every `period` ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalTimer {
    period: u32,
    remaining: u32,
}

impl IntervalTimer {
    pub fn new(period: u32) -> Self {
        let period = period.max(1);
        Self {
            period,
            remaining: period,
        }
    }

    /// Advance one tick; true on the tick the interval elapses
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.remaining = self.period;
            true
        } else {
            false
        }
    }
}

/// Entities produced by one spawner step
#[derive(Debug, Default)]
pub struct Spawned {
    pub obstacle: Option<Obstacle>,
    pub coin: Option<Coin>,
}

/// Creates obstacles and coins on independent timers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    obstacle_timer: IntervalTimer,
    coin_timer: IntervalTimer,
    next_id: u32,
}

impl Spawner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            obstacle_timer: IntervalTimer::new(tuning.obstacle_period),
            coin_timer: IntervalTimer::new(tuning.coin_period),
            next_id: 1,
        }
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Advance both timers by one tick and build whatever is due
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R, tuning: &Tuning) -> Spawned {
        let mut spawned = Spawned::default();

        if self.obstacle_timer.tick() {
            let kind = if rng.random_bool(0.5) {
                ObstacleKind::Tall
            } else {
                ObstacleKind::Low
            };
            let id = self.next_entity_id();
            spawned.obstacle = Some(Obstacle::new(id, kind, tuning.spawn_x(), tuning));
        }

        if self.coin_timer.tick() {
            let offset = rng.random::<f32>() * tuning.coin_band_span;
            let id = self.next_entity_id();
            spawned.coin = Some(Coin {
                id,
                center: Vec2::new(
                    tuning.spawn_x(),
                    tuning.ground_line() - tuning.coin_band_base - offset,
                ),
                radius: tuning.coin_radius,
            });
        }

        spawned
    }
}
