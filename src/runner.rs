//! Frame-driven loop driver
//!
//! [`Runner`] owns the game state and pending intents. The platform calls
//! [`Runner::frame`] once per display refresh and keeps rescheduling only
//! while it returns [`LoopControl::Continue`].

use std::fmt;

use serde::Serialize;

use crate::input::{Control, Gesture, Intents, control_for_key};
use crate::settings::ControlSettings;
use crate::sim::{GameEvent, GameState, Snapshot, tick};
use crate::tuning::Tuning;

/// Whether the platform should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Final result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameOverReport {
    /// Distance in whole meters (floored)
    pub distance: u32,
    pub coins: u32,
}

impl fmt::Display for GameOverReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You reached {}m and collected {} coins!",
            self.distance, self.coins
        )
    }
}

/// Receives notifications from the loop driver
pub trait GameObserver {
    /// Called exactly once per run, on the frame the run ends
    fn on_game_over(&mut self, report: GameOverReport);

    /// Called for every event raised by a tick
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Observer that only logs
#[derive(Debug, Default)]
pub struct LogObserver;

impl GameObserver for LogObserver {
    fn on_game_over(&mut self, report: GameOverReport) {
        log::info!("{report}");
    }
}

/// Drives the simulation one tick per frame
pub struct Runner<O: GameObserver> {
    state: GameState,
    intents: Intents,
    observer: O,
    running: bool,
    report: Option<GameOverReport>,
}

impl<O: GameObserver> Runner<O> {
    pub fn new(seed: u64, tuning: Tuning, observer: O) -> Self {
        log::info!("Run started with seed: {seed}");
        Self {
            state: GameState::new(seed, tuning),
            intents: Intents::default(),
            observer,
            running: true,
            report: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.state.snapshot()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Whether frames are still being scheduled
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Report of the finished run, if it has ended
    pub fn report(&self) -> Option<GameOverReport> {
        self.report
    }

    /// Queue a control for the next tick
    pub fn control(&mut self, control: Control) {
        self.intents.apply(control);
    }

    /// Translate a keyboard event. Key presses are ignored once the run is over.
    pub fn key(&mut self, code: &str, pressed: bool) {
        if pressed && self.state.is_game_over() {
            return;
        }
        if let Some(control) = control_for_key(code, pressed) {
            self.intents.apply(control);
        }
    }

    /// Apply a completed touch swipe
    pub fn gesture(&mut self, gesture: Gesture, now_ms: f64, controls: &ControlSettings) {
        match gesture {
            Gesture::Jump => self.intents.apply(Control::Jump),
            Gesture::Slide => self.intents.slide_for(now_ms, controls.touch_slide_ms),
        }
    }

    /// Run one frame: consume intents, tick once, dispatch events
    pub fn frame(&mut self, now_ms: f64) -> LoopControl {
        if self.state.is_game_over() {
            self.running = false;
            return LoopControl::Stop;
        }

        let input = self.intents.take(now_ms);
        let events = tick(&mut self.state, &input);

        for event in &events {
            self.observer.on_event(event);
            if let GameEvent::GameOver { distance, coins } = *event {
                let report = GameOverReport { distance, coins };
                self.report = Some(report);
                self.observer.on_game_over(report);
            }
        }

        if self.state.is_game_over() {
            self.running = false;
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    }

    /// Start a fresh run.
    ///
    /// Returns true when the frame loop had stopped and must be restarted;
    /// a reset during a live run keeps the existing loop.
    pub fn reset(&mut self, seed: u64) -> bool {
        self.state.reset(seed);
        self.intents.clear();
        self.report = None;
        let restart = !self.running;
        self.running = true;
        log::info!("Run reset with seed: {seed}");
        restart
    }
}
