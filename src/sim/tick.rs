//! Fixed-step simulation tick
//!
//! Core game loop that advances the run by exactly one frame.

use super::collision::{circle_rect_overlap, rects_overlap};
use super::state::{GameEvent, GameState};

/// Control intents for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump was pressed since the last tick (edge-triggered)
    pub jump: bool,
    /// Slide is held (level-triggered)
    pub slide: bool,
}

/// Advance the game state by one tick.
///
/// Returns the events raised during the tick. Once the run is over this is a
/// no-op until the state is reset.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.game_over {
        return events;
    }

    let ground = state.tuning.ground_line();

    // Intents: slide level first so a release and a jump in the same frame works
    if input.slide != state.player.sliding {
        state.player.set_sliding(input.slide, ground);
    }
    if input.jump {
        state.player.try_jump();
    }

    state.frame += 1;
    state.distance += state.speed * state.tuning.distance_factor;

    if state.speed_up.tick() {
        state.speed += state.tuning.speed_step;
        log::info!("Speed up: {:.1} at tick {}", state.speed, state.frame);
        events.push(GameEvent::SpeedUp { speed: state.speed });
    }

    state.player.apply_gravity(ground);

    let spawned = state.spawner.step(&mut state.rng, &state.tuning);
    if let Some(obstacle) = spawned.obstacle {
        log::debug!("Spawned {:?} obstacle #{}", obstacle.kind, obstacle.id);
        events.push(GameEvent::ObstacleSpawned {
            id: obstacle.id,
            kind: obstacle.kind,
        });
        state.obstacles.push(obstacle);
    }
    if let Some(coin) = spawned.coin {
        log::debug!("Spawned coin #{} at y={:.0}", coin.id, coin.center.y);
        events.push(GameEvent::CoinSpawned { id: coin.id });
        state.coins.push(coin);
    }

    let speed = state.speed as f32;
    let player_box = state.player.bounds();

    // Every obstacle still moves this tick, even after a hit
    let mut hit = false;
    state.obstacles.retain_mut(|obstacle| {
        obstacle.scroll(speed);
        if rects_overlap(&player_box, &obstacle.bounds) {
            hit = true;
        }
        !obstacle.is_gone()
    });
    if hit {
        state.game_over = true;
    }

    let mut collected = Vec::new();
    state.coins.retain_mut(|coin| {
        coin.scroll(speed);
        if circle_rect_overlap(coin.center, coin.radius, &player_box) {
            collected.push(coin.id);
            false
        } else {
            !coin.is_gone()
        }
    });
    for id in collected {
        state.coin_count += 1;
        log::debug!("Collected coin #{} (total {})", id, state.coin_count);
        events.push(GameEvent::CoinCollected {
            id,
            total: state.coin_count,
        });
    }

    if state.game_over {
        let distance = state.distance_floored();
        log::info!(
            "Game over at tick {}: {}m, {} coins",
            state.frame,
            distance,
            state.coin_count
        );
        events.push(GameEvent::GameOver {
            distance,
            coins: state.coin_count,
        });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::Rect;
    use crate::sim::state::{Coin, Obstacle, ObstacleKind};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn new_state() -> GameState {
        GameState::new(12345, Tuning::default())
    }

    fn idle() -> TickInput {
        TickInput::default()
    }

    fn obstacle_on_player(state: &GameState) -> Obstacle {
        Obstacle {
            id: 999,
            kind: ObstacleKind::Tall,
            bounds: state.player().bounds(),
        }
    }

    #[test]
    fn test_first_tick_counters() {
        let mut state = new_state();
        let events = tick(&mut state, &idle());
        assert!(events.is_empty());
        assert_eq!(state.frame(), 1);
        assert!((state.distance() - 0.4).abs() < 1e-6);
        assert_eq!(state.speed(), 4.0);
        assert!(state.player().on_ground);
    }

    #[test]
    fn test_speed_schedule() {
        let mut state = new_state();
        let mut speed_ups = Vec::new();
        let mut last_speed = state.speed();
        // Clearing obstacles keeps the run alive; the schedule only depends on ticks
        for t in 1..=900u64 {
            state.obstacles.clear();
            let events = tick(&mut state, &idle());
            assert!(state.speed() >= last_speed);
            last_speed = state.speed();
            if events.iter().any(|e| matches!(e, GameEvent::SpeedUp { .. })) {
                speed_ups.push(t);
            }
        }
        assert_eq!(speed_ups, vec![300, 600, 900]);
        assert!((state.speed() - 4.9).abs() < 1e-9);
    }

    #[test]
    fn test_distance_accumulates_in_double_precision() {
        let mut state = new_state();
        for _ in 0..10 {
            tick(&mut state, &idle());
        }
        // Ten steps of 0.4 sum to just under 4
        assert!(state.distance() < 4.0);
        assert_eq!(state.distance_floored(), 3);
    }

    #[test]
    fn test_long_run_matches_plain_accumulation() {
        let mut state = new_state();
        let (mut distance, mut speed) = (0.0f64, 4.0f64);
        for t in 1..=20_000u64 {
            state.obstacles.clear();
            tick(&mut state, &idle());

            distance += speed * 0.1;
            if t % 300 == 0 {
                speed += 0.3;
            }
            assert_eq!(state.distance(), distance, "distance diverged at tick {t}");
            assert_eq!(state.speed(), speed, "speed diverged at tick {t}");
        }
        assert_eq!(state.distance_floored(), distance.floor() as u32);
    }

    #[test]
    fn test_spawns_enter_state() {
        let mut state = new_state();
        for _ in 0..99 {
            tick(&mut state, &idle());
        }
        assert!(state.coins().is_empty());

        let events = tick(&mut state, &idle());
        assert!(matches!(events[..], [GameEvent::CoinSpawned { .. }]));
        assert_eq!(state.coins().len(), 1);
        // Spawned at 820 then scrolled once in the same tick
        assert_eq!(state.coins()[0].center.x, 816.0);

        for _ in 0..20 {
            tick(&mut state, &idle());
        }
        assert_eq!(state.obstacles().len(), 1);
        assert_eq!(state.obstacles()[0].bounds.pos.x, 816.0);
    }

    #[test]
    fn test_obstacle_collision_ends_run() {
        let mut state = new_state();
        let obstacle = obstacle_on_player(&state);
        state.obstacles.push(obstacle);

        let events = tick(&mut state, &idle());
        assert!(state.is_game_over());
        let game_overs: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .collect();
        assert_eq!(game_overs.len(), 1);
        assert_eq!(
            *game_overs[0],
            GameEvent::GameOver {
                distance: 0,
                coins: 0
            }
        );
    }

    #[test]
    fn test_game_over_freezes_world() {
        let mut state = new_state();
        for _ in 0..50 {
            tick(&mut state, &idle());
        }
        let obstacle = obstacle_on_player(&state);
        state.obstacles.push(obstacle);
        tick(&mut state, &idle());
        assert!(state.is_game_over());

        let frame = state.frame();
        let distance = state.distance();
        let obstacle_x = state.obstacles()[0].bounds.pos.x;
        let player_y = state.player().pos.y;

        for _ in 0..10 {
            let events = tick(
                &mut state,
                &TickInput {
                    jump: true,
                    slide: true,
                },
            );
            assert!(events.is_empty());
        }
        assert_eq!(state.frame(), frame);
        assert_eq!(state.distance(), distance);
        assert_eq!(state.obstacles()[0].bounds.pos.x, obstacle_x);
        assert_eq!(state.player().pos.y, player_y);
        assert!(!state.player().sliding);
    }

    #[test]
    fn test_coin_collection() {
        let mut state = new_state();
        let center = state.player().bounds().center();
        state.coins.push(Coin {
            id: 500,
            center,
            radius: 10.0,
        });

        let events = tick(&mut state, &idle());
        assert_eq!(state.coin_count(), 1);
        assert!(state.coins().is_empty());
        assert_eq!(events, vec![GameEvent::CoinCollected { id: 500, total: 1 }]);
    }

    #[test]
    fn test_coin_still_collected_on_fatal_tick() {
        let mut state = new_state();
        let obstacle = obstacle_on_player(&state);
        state.obstacles.push(obstacle);
        let center = state.player().bounds().center();
        state.coins.push(Coin {
            id: 501,
            center,
            radius: 10.0,
        });

        let events = tick(&mut state, &idle());
        assert!(state.is_game_over());
        assert_eq!(state.coin_count(), 1);
        assert_eq!(
            events.last(),
            Some(&GameEvent::GameOver {
                distance: 0,
                coins: 1
            })
        );
    }

    #[test]
    fn test_offscreen_entities_removed() {
        let mut state = new_state();
        state.obstacles.push(Obstacle {
            id: 1,
            kind: ObstacleKind::Low,
            bounds: Rect::new(-47.0, 360.0, 50.0, 30.0),
        });
        state.obstacles.push(Obstacle {
            id: 2,
            kind: ObstacleKind::Low,
            bounds: Rect::new(-45.0, 360.0, 50.0, 30.0),
        });
        state.coins.push(Coin {
            id: 3,
            center: Vec2::new(-7.0, 100.0),
            radius: 10.0,
        });
        state.coins.push(Coin {
            id: 4,
            center: Vec2::new(-5.0, 100.0),
            radius: 10.0,
        });

        tick(&mut state, &idle());
        // right edge -1 (gone) vs 1 (kept); coin edge -1 (gone) vs 1 (kept)
        let obstacle_ids: Vec<u32> = state.obstacles().iter().map(|o| o.id).collect();
        let coin_ids: Vec<u32> = state.coins().iter().map(|c| c.id).collect();
        assert_eq!(obstacle_ids, vec![2]);
        assert_eq!(coin_ids, vec![4]);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_jump_intent() {
        let mut state = new_state();
        tick(
            &mut state,
            &TickInput {
                jump: true,
                slide: false,
            },
        );
        let player = state.player();
        assert!(!player.on_ground);
        // -14 impulse then one tick of gravity
        assert!((player.vel_y + 13.2).abs() < 1e-5);
        assert!((player.pos.y - (340.0 - 13.2)).abs() < 1e-4);
    }

    #[test]
    fn test_slide_blocks_jump() {
        let mut state = new_state();
        let input = TickInput {
            jump: true,
            slide: true,
        };
        tick(&mut state, &input);
        let player = state.player();
        assert!(player.sliding);
        assert!(player.on_ground);
        assert_eq!(player.size.y, 30.0);
        assert_eq!(player.bounds().bottom(), 390.0);
    }

    #[test]
    fn test_release_slide_and_jump_same_tick() {
        let mut state = new_state();
        tick(
            &mut state,
            &TickInput {
                jump: false,
                slide: true,
            },
        );
        tick(
            &mut state,
            &TickInput {
                jump: true,
                slide: false,
            },
        );
        let player = state.player();
        assert!(!player.sliding);
        assert!(!player.on_ground);
        assert_eq!(player.size.y, 50.0);
    }

    #[test]
    fn test_idle_player_eventually_crashes() {
        let mut state = new_state();
        let mut game_overs = 0;
        for _ in 0..600 {
            for event in tick(&mut state, &idle()) {
                if matches!(event, GameEvent::GameOver { .. }) {
                    game_overs += 1;
                }
            }
        }
        assert!(state.is_game_over());
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999, Tuning::default());
        let mut state2 = GameState::new(99999, Tuning::default());

        for t in 0..1000u32 {
            let input = TickInput {
                jump: t % 37 == 0,
                slide: false,
            };
            let e1 = tick(&mut state1, &input);
            let e2 = tick(&mut state2, &input);
            assert_eq!(e1, e2);
        }

        assert_eq!(state1.frame(), state2.frame());
        assert_eq!(state1.obstacles().len(), state2.obstacles().len());
        assert_eq!(state1.coin_count(), state2.coin_count());
        assert_eq!(state1.distance(), state2.distance());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn inputs() -> impl Strategy<Value = Vec<(bool, bool)>> {
            proptest::collection::vec((any::<bool>(), any::<bool>()), 1..800)
        }

        proptest! {
            #[test]
            fn player_never_sinks_below_ground(seed in any::<u64>(), inputs in inputs()) {
                let mut state = GameState::new(seed, Tuning::default());
                let ground = state.tuning().ground_line();
                for (jump, slide) in inputs {
                    tick(&mut state, &TickInput { jump, slide });
                    let player = state.player();
                    prop_assert!(
                        player.bounds().bottom() <= ground,
                        "player bottom {} below ground {}",
                        player.bounds().bottom(),
                        ground
                    );
                }
            }

            #[test]
            fn distance_and_speed_never_decrease(seed in any::<u64>(), inputs in inputs()) {
                let mut state = GameState::new(seed, Tuning::default());
                let mut last_distance = state.distance();
                let mut last_speed = state.speed();
                for (jump, slide) in inputs {
                    let was_over = state.is_game_over();
                    tick(&mut state, &TickInput { jump, slide });
                    if was_over {
                        prop_assert_eq!(state.distance(), last_distance);
                    } else {
                        prop_assert!(state.distance() > last_distance);
                    }
                    prop_assert!(state.speed() >= last_speed);
                    last_distance = state.distance();
                    last_speed = state.speed();
                }
            }

            #[test]
            fn coin_count_never_decreases(seed in any::<u64>(), inputs in inputs()) {
                let mut state = GameState::new(seed, Tuning::default());
                let mut last = 0;
                for (jump, slide) in inputs {
                    tick(&mut state, &TickInput { jump, slide });
                    prop_assert!(state.coin_count() >= last);
                    last = state.coin_count();
                }
            }
        }
    }
}
