//! Simple autopilot for headless runs and demo mode
//!
//! Looks at the snapshot a frame would render and decides whether to jump.
//! Both obstacle variants are cleared by a plain jump: the low block sits on
//! the ground with the same height as the sliding hitbox, so sliding never
//! helps.

use crate::input::Control;
use crate::sim::{Obstacle, Snapshot};

/// Jumps when the next obstacle is a fixed number of ticks away
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// How many ticks ahead of contact to take off
    pub lead_ticks: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { lead_ticks: 7.0 }
    }
}

impl Autopilot {
    /// The closest obstacle the player has not reached yet
    pub fn next_obstacle<'a>(&self, snapshot: &Snapshot<'a>) -> Option<&'a Obstacle> {
        let front = snapshot.player.bounds().right();
        snapshot
            .obstacles
            .iter()
            .filter(|o| o.bounds.left() >= front)
            .min_by(|a, b| a.bounds.left().total_cmp(&b.bounds.left()))
    }

    /// Control to send this frame, if any
    pub fn decide(&self, snapshot: &Snapshot<'_>) -> Option<Control> {
        if snapshot.game_over || !snapshot.player.on_ground {
            return None;
        }
        let obstacle = self.next_obstacle(snapshot)?;
        let gap = obstacle.bounds.left() - snapshot.player.bounds().right();
        let lead = f64::from(self.lead_ticks) * snapshot.speed;
        (f64::from(gap) <= lead).then_some(Control::Jump)
    }
}
