//! Shape generation for 2D primitives
//!
//! Everything comes out as a triangle list.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::{AsteroidView, ProjectileView, ShipView, WeaponType};
use crate::{deg_to_rad, polar_to_cartesian};

/// Outline thickness for asteroid polygons (pixels)
pub const OUTLINE_WIDTH: f32 = 1.5;
/// Height of the health bar over an asteroid, and its gap above the outline
pub const HEALTH_BAR_HEIGHT: f32 = 5.0;
pub const HEALTH_BAR_GAP: f32 = 6.0;
/// Laser streak size (pixels)
pub const LASER_WIDTH: f32 = 4.0;
pub const LASER_LENGTH: f32 = 30.0;
/// Marker radii
pub const BULLET_MARKER_RADIUS: f32 = 5.0;
pub const PELLET_MARKER_RADIUS: f32 = 3.0;

const CIRCLE_SEGMENTS: u32 = 16;

/// Axis-aligned filled rectangle from its top-left corner
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec::new();
    }
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;
        let p1 = center + polar_to_cartesian(radius, theta1);
        let p2 = center + polar_to_cartesian(radius, theta2);

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Thick line segment as a quad
pub fn line(a: Vec2, b: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (b - a).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width * 0.5);

    let a1 = a + perp;
    let a2 = a - perp;
    let b1 = b + perp;
    let b2 = b - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Corners of a regular polygon; the first corner sits at `rotation` degrees
pub fn polygon_points(center: Vec2, sides: u32, radius: f32, rotation: f32) -> Vec<Vec2> {
    let step = 2.0 * PI / sides as f32;
    let start = deg_to_rad(rotation);
    (0..sides)
        .map(|i| center + polar_to_cartesian(radius, start + step * i as f32))
        .collect()
}

/// Outline of a regular polygon
pub fn polygon_outline(
    center: Vec2,
    sides: u32,
    radius: f32,
    rotation: f32,
    width: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let points = polygon_points(center, sides, radius, rotation);
    let mut vertices = Vec::with_capacity(points.len() * 6);
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        vertices.extend(line(a, b, width, color));
    }
    vertices
}

/// Green bar over an asteroid, as wide as the asteroid at full health
pub fn health_bar(center: Vec2, radius: f32, ratio: f32) -> Vec<Vertex> {
    let width = 2.0 * radius * ratio.clamp(0.0, 1.0);
    let min = center - Vec2::new(radius, radius + HEALTH_BAR_GAP);
    rect(min, Vec2::new(width, HEALTH_BAR_HEIGHT), colors::HEALTH_BAR)
}

pub fn asteroid(view: &AsteroidView) -> Vec<Vertex> {
    let mut vertices = health_bar(view.pos, view.radius, view.hp_ratio);
    vertices.extend(polygon_outline(
        view.pos,
        view.shape.sides(),
        view.radius,
        view.rotation,
        OUTLINE_WIDTH,
        colors::ASTEROID_OUTLINE,
    ));
    vertices
}

/// Laser streak, bullet dot or shotgun pellet
pub fn projectile(view: &ProjectileView) -> Vec<Vertex> {
    match view.weapon {
        WeaponType::Laser => rect(
            view.pos - Vec2::new(LASER_WIDTH * 0.5, 0.0),
            Vec2::new(LASER_WIDTH, LASER_LENGTH),
            colors::LASER,
        ),
        WeaponType::Bullet => circle(view.pos, BULLET_MARKER_RADIUS, colors::BULLET, CIRCLE_SEGMENTS),
        WeaponType::Shotgun => circle(view.pos, PELLET_MARKER_RADIUS, colors::PELLET, CIRCLE_SEGMENTS),
    }
}

/// Nose-up triangle filling the ship's collision circle; nothing while blinked out
pub fn ship(view: &ShipView) -> Vec<Vertex> {
    if !view.visible {
        return Vec::new();
    }
    // -90 degrees puts the first corner straight up
    polygon_points(view.pos, 3, view.radius, -90.0)
        .into_iter()
        .map(|p| Vertex::new(p.x, p.y, colors::SHIP))
        .collect()
}
