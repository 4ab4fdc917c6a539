//! Polyroids - a polygonal asteroid defense arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawning, scoring)
//! - `renderer`: Pure geometry handed to whatever draws the frame
//! - `config`: Runtime world configuration

pub mod config;
pub mod renderer;
pub mod sim;

pub use config::WorldConfig;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: u32 = 1400;
    pub const PLAYFIELD_HEIGHT: u32 = 800;

    /// Asteroid radius per size tier unit (radius = unit * tier)
    pub const ASTEROID_RADIUS_UNIT: f32 = 16.0;
    /// Asteroid launch speed range (pixels/s)
    pub const ASTEROID_SPEED_MIN: f32 = 125.0;
    pub const ASTEROID_SPEED_MAX: f32 = 250.0;
    /// Asteroid spin range (degrees/s)
    pub const ASTEROID_SPIN_MIN: f32 = 50.0;
    pub const ASTEROID_SPIN_MAX: f32 = 240.0;
    /// Aim jitter around screen center, as a fraction of the shorter dimension
    pub const ASTEROID_AIM_JITTER: f32 = 0.1;

    /// Live asteroid count above which the spawner stops
    pub const MAX_ASTEROIDS: usize = 150;
    /// Slab capacity for asteroids: every spawn can leave at most four live descendants
    pub const ASTEROID_SLOTS: usize = MAX_ASTEROIDS * 4;
    /// Slab capacity for projectiles
    pub const PROJECTILE_SLOTS: usize = 2048;

    /// Spawn interval range (seconds), redrawn after every spawn
    pub const SPAWN_INTERVAL_MIN: f32 = 0.5;
    pub const SPAWN_INTERVAL_MAX: f32 = 3.0;

    /// Ship defaults
    pub const SHIP_MAX_HP: u32 = 100;
    pub const SHIP_SPEED: f32 = 250.0;
    pub const SHIP_RADIUS: f32 = 24.0;
    /// Blink period while the ship is falling after death (seconds)
    pub const SHIP_BLINK_PERIOD: f32 = 0.4;

    /// Horizontal gap between shotgun pellet origins (pixels)
    pub const SHOTGUN_ORIGIN_GAP: f32 = 20.0;

    /// Score per size tier on destruction, and bonus per tier when it splits
    pub const SCORE_PER_TIER: u64 = 5;
    pub const SPLIT_BONUS_PER_TIER: u64 = 2;

    /// Slack on the fire timer so float accumulation never eats a shot
    pub const FIRE_TIMER_EPSILON: f32 = 1e-4;
}

/// Degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(10.0, std::f32::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_deg_to_rad() {
        assert!((deg_to_rad(180.0) - std::f32::consts::PI).abs() < 1e-6);
    }
}
