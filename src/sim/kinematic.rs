//! Shared motion state and playfield geometry
//!
//! Every moving object owns one `Kinematic` and is the only thing that
//! integrates it. Rotation is kept in degrees to match what the renderer
//! draws with.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position, heading and their rates of change
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Kinematic {
    pub pos: Vec2,
    /// Heading in degrees
    pub rotation: f32,
    pub vel: Vec2,
    /// Spin in degrees/second
    pub spin: f32,
}

impl Kinematic {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            ..Self::default()
        }
    }

    pub fn moving(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            ..Self::default()
        }
    }

    /// Explicit Euler step
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.rotation += self.spin * dt;
    }
}

/// One of the four playfield edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
}

/// The visible rectangle `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "playfield dimensions must be positive, got {}x{}",
            width,
            height
        );
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn min_dimension(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Inside the rectangle, edges included
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }

    /// Inside the rectangle grown outward by `margin` on every side
    pub fn contains_expanded(&self, pos: Vec2, margin: f32) -> bool {
        pos.x >= -margin
            && pos.x <= self.width + margin
            && pos.y >= -margin
            && pos.y <= self.height + margin
    }

    /// Point on `edge`, `t` in [0, 1] along it, pushed `offset` pixels outward
    pub fn edge_point(&self, edge: Edge, t: f32, offset: f32) -> Vec2 {
        match edge {
            Edge::Top => Vec2::new(t * self.width, -offset),
            Edge::Right => Vec2::new(self.width + offset, t * self.height),
            Edge::Bottom => Vec2::new(t * self.width, self.height + offset),
            Edge::Left => Vec2::new(-offset, t * self.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate() {
        let mut body = Kinematic {
            pos: Vec2::new(10.0, 10.0),
            rotation: 0.0,
            vel: Vec2::new(100.0, -50.0),
            spin: 90.0,
        };
        body.integrate(0.5);
        assert_eq!(body.pos, Vec2::new(60.0, -15.0));
        assert_eq!(body.rotation, 45.0);
    }

    #[test]
    fn test_contains_edges_inclusive() {
        let field = Playfield::new(100, 50);
        assert!(field.contains(Vec2::new(0.0, 0.0)));
        assert!(field.contains(Vec2::new(100.0, 50.0)));
        assert!(!field.contains(Vec2::new(-0.1, 10.0)));
        assert!(!field.contains(Vec2::new(10.0, 50.1)));
    }

    #[test]
    fn test_contains_expanded() {
        let field = Playfield::new(100, 50);
        assert!(field.contains_expanded(Vec2::new(-15.0, 65.0), 16.0));
        assert!(!field.contains_expanded(Vec2::new(-17.0, 10.0), 16.0));
        assert!(!field.contains_expanded(Vec2::new(10.0, 67.0), 16.0));
    }

    #[test]
    fn test_edge_points_sit_outside() {
        let field = Playfield::new(100, 50);
        for edge in Edge::ALL {
            let p = field.edge_point(edge, 0.5, 8.0);
            assert!(!field.contains(p), "{:?} point {:?} should be off-screen", edge, p);
            assert!(field.contains_expanded(p, 8.0));
        }
    }

    #[test]
    #[should_panic(expected = "playfield")]
    fn test_zero_height_panics() {
        Playfield::new(10, 0);
    }
}
