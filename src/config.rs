//! World configuration
//!
//! Fixed for the lifetime of a run. Defaults come from [`crate::consts`];
//! a partial JSON document overrides only the fields it names.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Playfield;

/// Runtime world configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Playfield width in pixels
    pub width: u32,
    /// Playfield height in pixels
    pub height: u32,
    /// RNG seed for the run
    pub seed: u64,
    /// Ship collision radius (pixels)
    pub ship_radius: f32,
    /// Live asteroid count above which spawning pauses
    pub max_asteroids: usize,
    /// Slab capacity for asteroids (must cover split growth)
    pub asteroid_slots: usize,
    /// Slab capacity for projectiles
    pub projectile_slots: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            seed: 0x5eed,
            ship_radius: SHIP_RADIUS,
            max_asteroids: MAX_ASTEROIDS,
            asteroid_slots: ASTEROID_SLOTS,
            projectile_slots: PROJECTILE_SLOTS,
        }
    }
}

impl WorldConfig {
    /// Default configuration with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        log::debug!(
            "Loaded world config: {}x{} seed={}",
            config.width,
            config.height,
            config.seed
        );
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validated playfield for this configuration
    ///
    /// Panics on a zero dimension: geometry comes from a trusted collaborator.
    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = WorldConfig::from_json(r#"{ "width": 640, "seed": 7 }"#).unwrap();
        assert_eq!(config.width, 640);
        assert_eq!(config.seed, 7);
        assert_eq!(config.height, PLAYFIELD_HEIGHT);
        assert_eq!(config.max_asteroids, MAX_ASTEROIDS);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = WorldConfig::with_seed(42);
        let json = config.to_json().unwrap();
        assert_eq!(WorldConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(WorldConfig::from_json("{ width: ").is_err());
    }

    #[test]
    #[should_panic(expected = "playfield")]
    fn test_zero_width_fails_fast() {
        let config = WorldConfig {
            width: 0,
            ..WorldConfig::default()
        };
        config.playfield();
    }
}
