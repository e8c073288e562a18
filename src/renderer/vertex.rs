//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.53, 0.81, 0.92, 1.0];
    pub const GROUND: [f32; 4] = [0.133, 0.545, 0.133, 1.0]; // #228B22

    pub const PLAYER_BODY: [f32; 4] = [1.0, 0.8, 0.0, 1.0]; // #FFCC00
    pub const PLAYER_DARK: [f32; 4] = [0.2, 0.067, 0.0, 1.0]; // #331100
    pub const PLAYER_CHEEK: [f32; 4] = [1.0, 0.4, 0.4, 1.0]; // #FF6666
    pub const PLAYER_EYE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    pub const OBSTACLE_TALL: [f32; 4] = [0.294, 0.0, 0.51, 1.0]; // #4B0082
    pub const OBSTACLE_LOW: [f32; 4] = [0.545, 0.0, 0.0, 1.0]; // #8B0000
    pub const OBSTACLE_LOW_BAR: [f32; 4] = [1.0, 0.271, 0.0, 1.0]; // #FF4500

    pub const COIN: [f32; 4] = [1.0, 0.843, 0.0, 1.0]; // #FFD700
    pub const COIN_SHINE: [f32; 4] = [1.0, 1.0, 0.627, 1.0]; // #FFFFA0
    pub const COIN_MARK: [f32; 4] = [0.722, 0.525, 0.043, 1.0]; // #B8860B
}
