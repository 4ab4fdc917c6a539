//! Frame geometry for a drawing backend
//!
//! Turns a `FrameView` into one triangle list in playfield pixels. Text
//! (score, weapon name, game-over banner) is left to the backend; the
//! values it needs are on the `FrameView`.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

pub use vertex::{Vertex, colors};

use crate::sim::FrameView;

/// HUD health bar placement (pixels)
pub const HUD_BAR_ORIGIN: Vec2 = Vec2::new(100.0, 15.0);
pub const HUD_BAR_SIZE: Vec2 = Vec2::new(200.0, 20.0);
const HUD_BAR_BORDER: f32 = 3.0;

/// Ship HP bar: dark frame, green fill, black remainder
pub fn hud_bar(hp_fraction: f32) -> Vec<Vertex> {
    let fraction = hp_fraction.clamp(0.0, 1.0);
    let border = Vec2::splat(HUD_BAR_BORDER);
    let filled = HUD_BAR_SIZE.x * fraction;

    let mut vertices = shapes::rect(
        HUD_BAR_ORIGIN - border,
        HUD_BAR_SIZE + border * 2.0,
        colors::HUD_BAR_FRAME,
    );
    vertices.extend(shapes::rect(
        HUD_BAR_ORIGIN,
        Vec2::new(filled, HUD_BAR_SIZE.y),
        colors::HEALTH_BAR,
    ));
    vertices.extend(shapes::rect(
        HUD_BAR_ORIGIN + Vec2::new(filled, 0.0),
        Vec2::new(HUD_BAR_SIZE.x - filled, HUD_BAR_SIZE.y),
        colors::HUD_BAR_EMPTY,
    ));
    vertices
}

/// All geometry for one frame, back to front: projectiles, asteroids, ship, HUD
pub fn build_frame(view: &FrameView) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for projectile in &view.projectiles {
        vertices.extend(shapes::projectile(projectile));
    }
    for asteroid in &view.asteroids {
        vertices.extend(shapes::asteroid(asteroid));
    }
    vertices.extend(shapes::ship(&view.ship));
    vertices.extend(hud_bar(view.ship.hp_fraction));
    vertices
}
