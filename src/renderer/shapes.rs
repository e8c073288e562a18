//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in world pixels.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::{Coin, Obstacle, ObstacleKind, Player, Rect};

/// Two triangles covering an axis-aligned rectangle
pub fn rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    vec![
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Stroke along a circular arc from `start` to `end` (radians, y down)
pub fn arc(
    center: Vec2,
    radius: f32,
    thickness: f32,
    start: f32,
    end: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);
    let (inner, outer) = (radius - thickness / 2.0, radius + thickness / 2.0);
    let point = |r: f32, theta: f32| center + Vec2::new(theta.cos(), theta.sin()) * r;

    for i in 0..segments {
        let theta1 = start + (end - start) * i as f32 / segments as f32;
        let theta2 = start + (end - start) * (i + 1) as f32 / segments as f32;
        let (a, b) = (point(inner, theta1), point(outer, theta1));
        let (c, d) = (point(inner, theta2), point(outer, theta2));
        vertices.extend(triangle(a, b, c, color));
        vertices.extend(triangle(c, b, d, color));
    }

    vertices
}

/// The runner: rounded yellow body with pointed ears, red cheeks and a face
pub fn player(player: &Player) -> Vec<Vertex> {
    let Vec2 { x, y } = player.pos;
    let (w, h) = (player.size.x, player.size.y);
    let mut vertices = Vec::with_capacity(128);

    // Body with a peaked head
    vertices.extend(rect(&Rect::new(x, y + 15.0, w, h - 15.0), colors::PLAYER_BODY));
    vertices.extend(triangle(
        Vec2::new(x, y + 15.0),
        Vec2::new(x + w / 2.0, y - 2.0),
        Vec2::new(x + w, y + 15.0),
        colors::PLAYER_BODY,
    ));

    // Ears
    for ear_x in [x + 10.0, x + w - 20.0] {
        vertices.extend(triangle(
            Vec2::new(ear_x, y + 5.0),
            Vec2::new(ear_x + 5.0, y - 20.0),
            Vec2::new(ear_x + 10.0, y + 5.0),
            colors::PLAYER_DARK,
        ));
    }

    // Cheeks
    for cheek_x in [x + 10.0, x + w - 10.0] {
        vertices.extend(circle(Vec2::new(cheek_x, y + 30.0), 7.0, colors::PLAYER_CHEEK, 12));
    }

    // Eyes
    for eye_x in [x + 16.0, x + w - 16.0] {
        vertices.extend(circle(Vec2::new(eye_x, y + 20.0), 3.0, colors::PLAYER_EYE, 8));
    }

    // Nose
    vertices.extend(triangle(
        Vec2::new(x + w / 2.0 - 3.0, y + 33.0),
        Vec2::new(x + w / 2.0 + 3.0, y + 33.0),
        Vec2::new(x + w / 2.0, y + 38.0),
        colors::PLAYER_DARK,
    ));

    // Mouth: a shallow V under the nose
    let cx = x + w / 2.0;
    vertices.extend(triangle(
        Vec2::new(cx - 6.0, y + 42.0),
        Vec2::new(cx, y + 48.0),
        Vec2::new(cx, y + 46.5),
        colors::PLAYER_DARK,
    ));
    vertices.extend(triangle(
        Vec2::new(cx + 6.0, y + 42.0),
        Vec2::new(cx, y + 46.5),
        Vec2::new(cx, y + 48.0),
        colors::PLAYER_DARK,
    ));

    vertices
}

/// Tall obstacles are spikes; low ones are blocks with an inner bar
pub fn obstacle(obstacle: &Obstacle) -> Vec<Vertex> {
    let b = &obstacle.bounds;
    match obstacle.kind {
        ObstacleKind::Tall => triangle(
            Vec2::new(b.left(), b.bottom()),
            Vec2::new(b.left() + b.size.x / 2.0, b.top()),
            Vec2::new(b.right(), b.bottom()),
            colors::OBSTACLE_TALL,
        ),
        ObstacleKind::Low => {
            let mut vertices = rect(b, colors::OBSTACLE_LOW);
            let inner = Rect::new(b.left() + 5.0, b.top() + 5.0, b.size.x - 10.0, b.size.y - 10.0);
            vertices.extend(rect(&inner, colors::OBSTACLE_LOW_BAR));
            vertices
        }
    }
}

/// Gold disc with a highlight and a darker "C" mark open to the right
pub fn coin(coin: &Coin) -> Vec<Vertex> {
    let mut vertices = circle(coin.center, coin.radius, colors::COIN, 16);
    vertices.extend(circle(
        coin.center - Vec2::splat(3.0),
        coin.radius * 0.3,
        colors::COIN_SHINE,
        8,
    ));
    vertices.extend(arc(
        coin.center,
        coin.radius * 0.45,
        coin.radius * 0.2,
        PI / 4.0,
        PI * 7.0 / 4.0,
        colors::COIN_MARK,
        10,
    ));
    vertices
}
