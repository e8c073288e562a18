//! Keyboard and touch translation into control intents
//!
//! Browser callbacks never touch the simulation directly. They turn raw events
//! into [`Control`]s, which accumulate in [`Intents`] until the next frame
//! takes them as a [`TickInput`].

use serde::{Deserialize, Serialize};

use crate::settings::ControlSettings;
use crate::sim::TickInput;

/// A player control signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    /// Jump requested (edge-triggered, consumed by one tick)
    Jump,
    /// Slide held or released (level-triggered)
    Slide(bool),
}

/// Map a `KeyboardEvent.code` to a control
pub fn control_for_key(code: &str, pressed: bool) -> Option<Control> {
    match code {
        "ArrowUp" | "KeyW" | "Space" if pressed => Some(Control::Jump),
        "ArrowDown" | "KeyS" => Some(Control::Slide(pressed)),
        _ => None,
    }
}

/// Pending intents between two ticks
#[derive(Debug, Clone, Default)]
pub struct Intents {
    jump_requested: bool,
    slide_held: bool,
    /// Timestamp (ms) at which a timed slide ends
    slide_release_at: Option<f64>,
}

impl Intents {
    pub fn apply(&mut self, control: Control) {
        match control {
            Control::Jump => self.jump_requested = true,
            Control::Slide(held) => {
                self.slide_held = held;
                self.slide_release_at = None;
            }
        }
    }

    /// Hold slide until `now_ms + duration_ms`
    pub fn slide_for(&mut self, now_ms: f64, duration_ms: f64) {
        self.slide_held = true;
        self.slide_release_at = Some(now_ms + duration_ms);
    }

    /// Produce the input for the next tick, consuming the jump request
    pub fn take(&mut self, now_ms: f64) -> TickInput {
        if self
            .slide_release_at
            .is_some_and(|deadline| now_ms >= deadline)
        {
            self.slide_held = false;
            self.slide_release_at = None;
        }

        TickInput {
            jump: std::mem::take(&mut self.jump_requested),
            slide: self.slide_held,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn jump_pending(&self) -> bool {
        self.jump_requested
    }

    pub fn slide_held(&self) -> bool {
        self.slide_held
    }
}

/// Result of a completed swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Swipe up
    Jump,
    /// Swipe down (timed slide)
    Slide,
}

/// Vertical swipe detector for touch screens
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start_y: Option<f32>,
    threshold: f32,
}

impl SwipeTracker {
    pub fn new(controls: &ControlSettings) -> Self {
        Self {
            start_y: None,
            threshold: controls.swipe_threshold,
        }
    }

    pub fn begin(&mut self, y: f32) {
        self.start_y = Some(y);
    }

    /// Finish the swipe. Short swipes and ends without a start are ignored.
    pub fn end(&mut self, y: f32) -> Option<Gesture> {
        let start = self.start_y.take()?;
        let diff = start - y;
        if diff.abs() <= self.threshold {
            return None;
        }
        // Screen y grows downward, so a positive diff is an upward swipe
        Some(if diff > 0.0 {
            Gesture::Jump
        } else {
            Gesture::Slide
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(control_for_key("Space", true), Some(Control::Jump));
        assert_eq!(control_for_key("ArrowUp", true), Some(Control::Jump));
        assert_eq!(control_for_key("KeyW", true), Some(Control::Jump));
        assert_eq!(control_for_key("KeyW", false), None);
        assert_eq!(control_for_key("ArrowDown", true), Some(Control::Slide(true)));
        assert_eq!(control_for_key("KeyS", false), Some(Control::Slide(false)));
        assert_eq!(control_for_key("KeyX", true), None);
    }

    #[test]
    fn test_jump_consumed_once() {
        let mut intents = Intents::default();
        intents.apply(Control::Jump);
        assert!(intents.jump_pending());
        assert!(intents.take(0.0).jump);
        assert!(!intents.take(16.0).jump);
    }

    #[test]
    fn test_slide_is_level_triggered() {
        let mut intents = Intents::default();
        intents.apply(Control::Slide(true));
        assert!(intents.take(0.0).slide);
        assert!(intents.take(16.0).slide);
        intents.apply(Control::Slide(false));
        assert!(!intents.take(32.0).slide);
    }

    #[test]
    fn test_timed_slide_releases() {
        let mut intents = Intents::default();
        intents.slide_for(1000.0, 600.0);
        assert!(intents.take(1000.0).slide);
        assert!(intents.take(1599.0).slide);
        assert!(!intents.take(1600.0).slide);
        assert!(!intents.slide_held());
    }

    #[test]
    fn test_key_overrides_timed_slide() {
        let mut intents = Intents::default();
        intents.slide_for(0.0, 600.0);
        intents.apply(Control::Slide(true));
        assert!(intents.take(5000.0).slide);
    }

    #[test]
    fn test_swipe_directions() {
        let mut swipe = SwipeTracker::new(&ControlSettings::default());

        swipe.begin(300.0);
        assert_eq!(swipe.end(200.0), Some(Gesture::Jump));

        swipe.begin(200.0);
        assert_eq!(swipe.end(300.0), Some(Gesture::Slide));

        // Within threshold
        swipe.begin(200.0);
        assert_eq!(swipe.end(230.0), None);

        // End without start
        assert_eq!(swipe.end(0.0), None);
    }
}
