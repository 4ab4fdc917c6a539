//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex in playfield pixels with an RGBA color.
///
/// `Pod` so a drawing backend can upload a frame's vertices as raw bytes.
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
}

/// Colors for game elements
pub mod colors {
    pub const ASTEROID_OUTLINE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const HEALTH_BAR: [f32; 4] = [0.0, 0.89, 0.19, 1.0];
    pub const HUD_BAR_FRAME: [f32; 4] = [0.31, 0.31, 0.31, 1.0];
    pub const HUD_BAR_EMPTY: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const LASER: [f32; 4] = [0.9, 0.16, 0.22, 1.0];
    pub const BULLET: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PELLET: [f32; 4] = [0.0, 0.47, 0.95, 1.0];
    pub const SHIP: [f32; 4] = [0.85, 0.85, 0.95, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let verts = [Vertex::new(1.0, 2.0, colors::LASER); 2];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 48);
    }
}
