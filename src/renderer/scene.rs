//! Frame composition: turns a snapshot into one vertex list

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::{Rect, Snapshot};
use crate::tuning::Tuning;

/// Build every triangle for one frame, back to front
pub fn build_scene(snapshot: &Snapshot<'_>, tuning: &Tuning) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(512);

    let ground = tuning.ground_line();
    vertices.extend(shapes::rect(
        &Rect::new(0.0, ground, tuning.world_width, tuning.world_height - ground),
        colors::GROUND,
    ));

    for obstacle in snapshot.obstacles {
        vertices.extend(shapes::obstacle(obstacle));
    }
    for coin in snapshot.coins {
        vertices.extend(shapes::coin(coin));
    }
    vertices.extend(shapes::player(snapshot.player));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, TickInput, tick};

    #[test]
    fn test_scene_grows_with_entities() {
        let tuning = Tuning::default();
        let mut state = GameState::new(3, tuning.clone());
        let empty = build_scene(&state.snapshot(), &tuning).len();
        let player_only = 6 + shapes::player(state.player()).len();
        assert_eq!(empty, player_only);

        // First coin appears on tick 100
        for _ in 0..100 {
            tick(&mut state, &TickInput::default());
        }
        let with_coin = build_scene(&state.snapshot(), &tuning).len();
        assert_eq!(with_coin, empty + shapes::coin(&state.coins()[0]).len());
    }

    #[test]
    fn test_ground_drawn_first() {
        let tuning = Tuning::default();
        let state = GameState::new(3, tuning.clone());
        let vertices = build_scene(&state.snapshot(), &tuning);
        assert!(vertices[..6].iter().all(|v| v.color == colors::GROUND));
        assert!(vertices[..6].iter().all(|v| v.position[1] >= 390.0));
    }
}
