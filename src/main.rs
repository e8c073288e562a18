//! Endless Runner entry point
//!
//! The browser build drives the game from `requestAnimationFrame`; the native
//! build runs a headless autopilot simulation and prints a JSON summary.

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use endless_runner::renderer::{RenderState, build_scene};
    use endless_runner::{
        GameObserver, GameOverReport, LoopControl, Runner, Settings, SwipeTracker,
    };

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(id: &str, hidden: bool) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            let classes = el.class_list();
            let _ = if hidden {
                classes.add_1("hidden")
            } else {
                classes.remove_1("hidden")
            };
        }
    }

    /// Shows the game-over overlay with the final message
    struct DomObserver;

    impl GameObserver for DomObserver {
        fn on_game_over(&mut self, report: GameOverReport) {
            log::info!("Game over: {}m, {} coins", report.distance, report.coins);
            set_text("finalScore", &report.to_string());
            set_hidden("gameOver", false);
        }
    }

    /// Game instance holding all state
    struct Game {
        runner: Runner<DomObserver>,
        render_state: Option<RenderState>,
        settings: Settings,
        swipe: SwipeTracker,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            Self {
                runner: Runner::new(seed, settings.tuning.clone(), DomObserver),
                render_state: None,
                swipe: SwipeTracker::new(&settings.controls),
                settings,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        fn track_fps(&mut self, time: f64) {
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = build_scene(&self.runner.snapshot(), self.runner.state().tuning());
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let state = self.runner.state();
            set_text("score", &format!("Distance: {}", state.distance_floored()));
            set_text("coins", &format!("Coins: {}", state.coin_count()));
            if self.settings.show_fps {
                set_text("fps", &format!("FPS: {}", self.fps));
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Endless Runner starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window available");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document available");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("Missing #gameCanvas element");
            return;
        };

        let settings = Settings::load();
        let world = glam::Vec2::new(settings.tuning.world_width, settings.tuning.world_height);

        // Backing store matches the world, scaled for high-DPI screens
        let dpr = window.device_pixel_ratio();
        let width = (f64::from(world.x) * dpr) as u32;
        let height = (f64::from(world.y) * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, settings)));
        log::info!("Game initialized with seed: {}", seed);

        match init_renderer(&canvas, width, height, world).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Renderer unavailable: {e}"),
        }

        set_hidden("gameOver", true);
        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(game.clone());

        request_animation_frame(game);

        log::info!("Endless Runner running!");
    }

    async fn init_renderer(
        canvas: &HtmlCanvasElement,
        width: u32,
        height: u32,
        world: glam::Vec2,
    ) -> Result<RenderState, endless_runner::renderer::RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, width, height, world).await
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(document) = document() else {
            return;
        };

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().runner.key(&event.code(), true);
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().runner.key(&event.code(), false);
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start records where the swipe began
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut().swipe.begin(touch.client_y() as f32);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end classifies the swipe
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let Some(touch) = event.changed_touches().get(0) else {
                    return;
                };
                let mut g = game.borrow_mut();
                if let Some(gesture) = g.swipe.end(touch.client_y() as f32) {
                    let controls = g.settings.controls.clone();
                    g.runner.gesture(gesture, js_sys::Date::now(), &controls);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let control = {
            let mut g = game.borrow_mut();
            let control = g.runner.frame(js_sys::Date::now());
            g.track_fps(time);
            g.render();
            g.update_hud();
            control
        };

        if control == LoopControl::Continue {
            request_animation_frame(game);
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let Some(btn) = document().and_then(|d| d.get_element_by_id("restartBtn")) else {
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let seed = js_sys::Date::now() as u64;
            let restart_loop = game.borrow_mut().runner.reset(seed);
            set_hidden("gameOver", true);
            log::info!("Game restarted with seed: {}", seed);

            if restart_loop {
                request_animation_frame(game.clone());
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;
    use serde::Serialize;

    use endless_runner::runner::LogObserver;
    use endless_runner::{Autopilot, GameOverReport, LoopControl, Runner, Settings};

    /// Nominal frame length used to advance the intent clock
    const FRAME_MS: f64 = 1000.0 / 60.0;

    #[derive(Parser, Debug, Clone, PartialEq)]
    #[command(name = "endless-runner")]
    #[command(about = "Headless endless runner simulation driven by the autopilot")]
    pub struct HeadlessArgs {
        /// RNG seed for the run
        #[arg(long, default_value_t = 1)]
        pub seed: u64,
        /// Maximum number of frames to simulate
        #[arg(long, default_value_t = 3600)]
        pub ticks: u64,
        /// Settings JSON file (defaults are used when omitted)
        #[arg(long)]
        pub config: Option<PathBuf>,
    }

    /// Final state of a headless run
    #[derive(Debug, Serialize)]
    pub struct RunSummary {
        pub seed: u64,
        pub frames: u64,
        pub distance: u32,
        pub coins: u32,
        pub speed: f64,
        pub game_over: bool,
        pub report: Option<GameOverReport>,
    }

    pub fn run(args: &HeadlessArgs) -> anyhow::Result<RunSummary> {
        let settings = match &args.config {
            Some(path) => Settings::from_file(path)
                .with_context(|| format!("failed loading settings {}", path.display()))?,
            None => Settings::default(),
        };

        log::info!("Headless run: seed={} ticks={}", args.seed, args.ticks);

        let mut runner = Runner::new(args.seed, settings.tuning, LogObserver);
        let pilot = Autopilot::default();

        for n in 0..args.ticks {
            if let Some(control) = pilot.decide(&runner.snapshot()) {
                runner.control(control);
            }
            if runner.frame(n as f64 * FRAME_MS) == LoopControl::Stop {
                break;
            }
            if n > 0 && n % 600 == 0 {
                let state = runner.state();
                log::debug!(
                    "frame {}: {}m, {} coins, speed {:.1}",
                    state.frame(),
                    state.distance_floored(),
                    state.coin_count(),
                    state.speed()
                );
            }
        }

        let state = runner.state();
        Ok(RunSummary {
            seed: args.seed,
            frames: state.frame(),
            distance: state.distance_floored(),
            coins: state.coin_count(),
            speed: state.speed(),
            game_over: state.is_game_over(),
            report: runner.report(),
        })
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn args(list: &[&str]) -> Result<HeadlessArgs, clap::Error> {
            let argv = std::iter::once("endless-runner").chain(list.iter().copied());
            HeadlessArgs::try_parse_from(argv)
        }

        #[test]
        fn test_parse_defaults() {
            let parsed = args(&[]).unwrap();
            assert_eq!(parsed.seed, 1);
            assert_eq!(parsed.ticks, 3600);
            assert_eq!(parsed.config, None);
        }

        #[test]
        fn test_parse_flags() {
            let parsed = args(&["--seed", "42", "--ticks", "100", "--config", "run.json"]).unwrap();
            assert_eq!(parsed.seed, 42);
            assert_eq!(parsed.ticks, 100);
            assert_eq!(parsed.config, Some(PathBuf::from("run.json")));
        }

        #[test]
        fn test_parse_rejects_bad_input() {
            assert!(args(&["--seed"]).is_err());
            assert!(args(&["--seed", "abc"]).is_err());
            assert!(args(&["--fast"]).is_err());
        }

        #[test]
        fn test_run_reports_progress() {
            let summary = run(&HeadlessArgs {
                seed: 7,
                ticks: 500,
                config: None,
            })
            .unwrap();
            assert_eq!(summary.frames, 500);
            assert!(!summary.game_over);
            assert!(summary.report.is_none());
            assert!(summary.distance >= 200);
        }

        #[test]
        fn test_missing_config_is_an_error() {
            let result = run(&HeadlessArgs {
                seed: 1,
                ticks: 10,
                config: Some(PathBuf::from("/nonexistent/endless-runner.json")),
            });
            assert!(result.is_err());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Endless Runner (native headless) starting...");

    let args = headless::HeadlessArgs::parse();
    let summary = headless::run(&args)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
