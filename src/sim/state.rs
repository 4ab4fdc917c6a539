//! World state and the read-only frame snapshot
//!
//! Everything a run needs lives in `GameState`. Restart replaces the run
//! state wholesale; only the player's weapon and shape choices carry over.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, SlotId};
use super::asteroid::{Asteroid, AsteroidShape, ShapeSelector};
use super::kinematic::Playfield;
use super::projectile::{Projectile, WeaponType};
use super::ship::Ship;
use crate::config::WorldConfig;
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ship alive
    Playing,
    /// Ship destroyed, waiting for restart
    GameOver,
}

/// Counters for the current run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub volleys: u64,
    pub projectiles_fired: u64,
    /// Shots lost because the projectile slab was full
    pub projectiles_dropped: u64,
    pub projectiles_culled: u64,
    pub asteroids_spawned: u64,
    pub asteroids_destroyed: u64,
    pub asteroids_split: u64,
    pub asteroids_rammed: u64,
    pub asteroids_culled: u64,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: WorldConfig,
    pub field: Playfield,
    pub(super) rng: Pcg32,
    pub ship: Ship,
    pub asteroids: Arena<Asteroid>,
    pub projectiles: Arena<Projectile>,
    pub score: u64,
    pub phase: GamePhase,
    pub weapon: WeaponType,
    pub shape_selector: ShapeSelector,
    /// Seconds since the last spawn
    pub spawn_timer: f32,
    /// Seconds to wait before the next spawn
    pub spawn_interval: f32,
    /// Fire time accumulated but not yet spent on volleys
    pub shot_timer: f32,
    /// Seconds since the run started
    pub time: f32,
    pub stats: RunStats,
}

impl GameState {
    pub fn new(config: WorldConfig) -> Self {
        let field = config.playfield();
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let spawn_interval = draw_spawn_interval(&mut rng);

        log::info!(
            "New run: {}x{} playfield, seed {}",
            config.width,
            config.height,
            config.seed
        );

        Self {
            ship: Ship::new(&field, config.ship_radius),
            asteroids: Arena::with_capacity(config.asteroid_slots),
            projectiles: Arena::with_capacity(config.projectile_slots),
            field,
            rng,
            score: 0,
            phase: GamePhase::Playing,
            weapon: WeaponType::default(),
            shape_selector: ShapeSelector::default(),
            spawn_timer: 0.0,
            spawn_interval,
            shot_timer: 0.0,
            time: 0.0,
            stats: RunStats::default(),
            config,
        }
    }

    /// Default world with the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(WorldConfig::with_seed(seed))
    }

    /// Throw away the run: fresh ship, empty skies, zero score
    pub fn restart(&mut self) {
        log::info!(
            "Restarting run (final score {}, {} asteroids destroyed)",
            self.score,
            self.stats.asteroids_destroyed
        );
        self.ship = Ship::new(&self.field, self.config.ship_radius);
        self.asteroids.clear();
        self.projectiles.clear();
        self.spawn_timer = 0.0;
        self.spawn_interval = draw_spawn_interval(&mut self.rng);
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.time = 0.0;
        self.stats = RunStats::default();
    }

    /// Create one fresh asteroid from the current shape selector
    pub fn spawn_asteroid(&mut self) -> Option<SlotId> {
        let asteroid = Asteroid::spawn(self.shape_selector, &self.field, &mut self.rng);
        log::debug!(
            "Spawned {:?} {:?} asteroid at ({:.0}, {:.0})",
            asteroid.tier,
            asteroid.shape,
            asteroid.body.pos.x,
            asteroid.body.pos.y
        );
        match self.asteroids.insert(asteroid) {
            Ok(id) => {
                self.stats.asteroids_spawned += 1;
                Some(id)
            }
            Err(_) => {
                log::warn!("Asteroid slab full ({} slots)", self.asteroids.capacity());
                None
            }
        }
    }

    /// Redraw the spawn interval after a spawn
    pub(super) fn reset_spawn_timer(&mut self) {
        self.spawn_timer = 0.0;
        self.spawn_interval = draw_spawn_interval(&mut self.rng);
    }

    pub fn set_weapon(&mut self, weapon: WeaponType) {
        if weapon != self.weapon {
            log::debug!("Weapon: {} -> {}", self.weapon.name(), weapon.name());
            self.weapon = weapon;
        }
    }

    pub fn set_shape_selector(&mut self, selector: ShapeSelector) {
        if selector != self.shape_selector {
            log::debug!("Shape selector: {:?} -> {:?}", self.shape_selector, selector);
            self.shape_selector = selector;
        }
    }

    /// Snapshot of everything the renderer draws
    pub fn view(&self) -> FrameView {
        FrameView {
            asteroids: self
                .asteroids
                .values()
                .map(|a| AsteroidView {
                    pos: a.body.pos,
                    rotation: a.body.rotation,
                    shape: a.shape,
                    radius: a.radius(),
                    hp_ratio: a.hp_ratio(),
                })
                .collect(),
            projectiles: self
                .projectiles
                .values()
                .map(|p| ProjectileView {
                    pos: p.pos(),
                    weapon: p.weapon,
                })
                .collect(),
            ship: ShipView {
                pos: self.ship.pos(),
                radius: self.ship.radius,
                alive: self.ship.is_alive(),
                hp: self.ship.hp(),
                hp_fraction: self.ship.hp_fraction(),
                visible: self.ship.visible(self.time),
            },
            weapon: self.weapon,
            score: self.score,
            phase: self.phase,
        }
    }
}

fn draw_spawn_interval(rng: &mut impl Rng) -> f32 {
    rng.random_range(SPAWN_INTERVAL_MIN..=SPAWN_INTERVAL_MAX)
}

#[derive(Debug, Clone, PartialEq)]
pub struct AsteroidView {
    pub pos: Vec2,
    /// Degrees
    pub rotation: f32,
    pub shape: AsteroidShape,
    pub radius: f32,
    pub hp_ratio: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileView {
    pub pos: Vec2,
    pub weapon: WeaponType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShipView {
    pub pos: Vec2,
    pub radius: f32,
    pub alive: bool,
    pub hp: u32,
    /// HP over starting HP, for the HUD bar
    pub hp_fraction: f32,
    /// False during the off half of the death blink
    pub visible: bool,
}

/// What the rendering collaborator gets once per tick
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    pub asteroids: Vec<AsteroidView>,
    pub projectiles: Vec<ProjectileView>,
    pub ship: ShipView,
    pub weapon: WeaponType,
    pub score: u64,
    pub phase: GamePhase,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::asteroid::SizeTier;

    #[test]
    fn test_new_state() {
        let state = GameState::with_seed(1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert!(state.asteroids.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.weapon, WeaponType::Laser);
        assert_eq!(state.shape_selector, ShapeSelector::Fixed(AsteroidShape::Triangle));
        assert!((SPAWN_INTERVAL_MIN..=SPAWN_INTERVAL_MAX).contains(&state.spawn_interval));
        assert_eq!(state.asteroids.capacity(), ASTEROID_SLOTS);
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = GameState::with_seed(77);
        let mut b = GameState::with_seed(77);
        a.set_shape_selector(ShapeSelector::Random);
        b.set_shape_selector(ShapeSelector::Random);
        for _ in 0..10 {
            a.spawn_asteroid();
            b.spawn_asteroid();
        }
        assert_eq!(a.view(), b.view());
    }

    #[test]
    fn test_restart_clears_run_but_keeps_choices() {
        let mut state = GameState::with_seed(3);
        state.set_weapon(WeaponType::Shotgun);
        state.spawn_asteroid();
        state.score = 120;
        state.ship.apply_damage(100);
        state.phase = GamePhase::GameOver;

        state.restart();
        assert_eq!(state.score, 0);
        assert!(state.asteroids.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.ship.hp(), 100);
        assert!(state.ship.is_alive());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.weapon, WeaponType::Shotgun);
        assert_eq!(state.stats, RunStats::default());
    }

    #[test]
    fn test_view_reflects_entities() {
        let mut state = GameState::with_seed(3);
        let mut rock = Asteroid::new(AsteroidShape::Square, SizeTier::Medium, Vec2::new(10.0, 20.0));
        rock.apply_damage(150);
        state.asteroids.insert(rock).unwrap();

        let view = state.view();
        assert_eq!(view.asteroids.len(), 1);
        assert_eq!(view.asteroids[0].radius, 32.0);
        assert!((view.asteroids[0].hp_ratio - 0.5).abs() < 1e-6);
        assert_eq!(view.ship.hp, 100);
        assert_eq!(view.ship.hp_fraction, 1.0);
        assert!(view.ship.visible);
        assert_eq!(view.weapon, WeaponType::Laser);
    }
}
