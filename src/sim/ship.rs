//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::kinematic::{Kinematic, Playfield};
use super::projectile::WeaponType;
use crate::consts::*;

/// Fire rate and shot spacing for one weapon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    /// Shots per second
    pub fire_rate: f32,
    /// Distance between consecutive shots at steady fire (pixels)
    pub spacing: f32,
}

impl WeaponStats {
    pub fn for_weapon(weapon: WeaponType) -> Self {
        let (fire_rate, spacing) = match weapon {
            WeaponType::Laser => (7.0, 80.0),
            WeaponType::Bullet => (14.0, 60.0),
            WeaponType::Shotgun => (10.0, 50.0),
        };
        Self { fire_rate, spacing }
    }

    /// Seconds between volleys
    pub fn interval(&self) -> f32 {
        1.0 / self.fire_rate
    }

    /// Speed that keeps consecutive shots exactly `spacing` apart
    pub fn projectile_speed(&self) -> f32 {
        self.spacing * self.fire_rate
    }
}

/// Held movement keys for one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveInput {
    /// Unnormalized direction: each held key contributes a full unit on its axis
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir
    }
}

#[derive(Debug, Clone)]
pub struct Ship {
    pub body: Kinematic,
    pub speed: f32,
    pub radius: f32,
    hp: u32,
    alive: bool,
    weapons: [WeaponStats; 3],
}

impl Ship {
    /// Full-health ship in the middle of the playfield
    pub fn new(field: &Playfield, radius: f32) -> Self {
        Self {
            body: Kinematic::at(field.center()),
            speed: SHIP_SPEED,
            radius,
            hp: SHIP_MAX_HP,
            alive: true,
            weapons: WeaponType::ALL.map(WeaponStats::for_weapon),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    /// Steer from input while alive; once dead, fall straight down
    pub fn advance(&mut self, dt: f32, input: &MoveInput) {
        let dir = if self.alive {
            input.direction()
        } else {
            Vec2::Y
        };
        self.body.vel = dir * self.speed;
        self.body.integrate(dt);
    }

    pub fn apply_damage(&mut self, amount: u32) {
        if !self.alive {
            return;
        }
        self.hp = self.hp.saturating_sub(amount);
        if self.hp == 0 {
            self.alive = false;
            log::info!("Ship destroyed at ({:.0}, {:.0})", self.body.pos.x, self.body.pos.y);
        }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// HP as a fraction of the starting HP
    pub fn hp_fraction(&self) -> f32 {
        self.hp as f32 / SHIP_MAX_HP as f32
    }

    pub fn weapon(&self, weapon: WeaponType) -> WeaponStats {
        self.weapons[weapon.index()]
    }

    pub fn fire_rate(&self, weapon: WeaponType) -> f32 {
        self.weapon(weapon).fire_rate
    }

    pub fn spacing(&self, weapon: WeaponType) -> f32 {
        self.weapon(weapon).spacing
    }

    /// Where volleys leave the ship: the nose
    pub fn muzzle(&self) -> Vec2 {
        self.body.pos - Vec2::new(0.0, self.radius)
    }

    /// Whether to draw the ship at run time `time`; a dead ship blinks
    pub fn visible(&self, time: f32) -> bool {
        self.alive || time.rem_euclid(SHIP_BLINK_PERIOD) <= SHIP_BLINK_PERIOD * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship() -> Ship {
        Ship::new(&Playfield::new(1400, 800), SHIP_RADIUS)
    }

    #[test]
    fn test_starts_centered_and_healthy() {
        let s = ship();
        assert_eq!(s.pos(), Vec2::new(700.0, 400.0));
        assert_eq!(s.hp(), 100);
        assert!(s.is_alive());
    }

    #[test]
    fn test_weapon_table() {
        let s = ship();
        assert_eq!(s.fire_rate(WeaponType::Laser), 7.0);
        assert_eq!(s.spacing(WeaponType::Laser), 80.0);
        assert_eq!(s.fire_rate(WeaponType::Bullet), 14.0);
        assert_eq!(s.spacing(WeaponType::Bullet), 60.0);
        assert_eq!(s.fire_rate(WeaponType::Shotgun), 10.0);
        assert_eq!(s.spacing(WeaponType::Shotgun), 50.0);
        assert_eq!(s.weapon(WeaponType::Laser).projectile_speed(), 560.0);
    }

    #[test]
    fn test_diagonal_is_not_normalized() {
        let mut s = ship();
        let start = s.pos();
        s.advance(
            1.0,
            &MoveInput {
                up: true,
                right: true,
                ..Default::default()
            },
        );
        assert_eq!(s.pos() - start, Vec2::new(250.0, -250.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut s = ship();
        let start = s.pos();
        s.advance(
            0.5,
            &MoveInput {
                left: true,
                right: true,
                ..Default::default()
            },
        );
        assert_eq!(s.pos(), start);
    }

    #[test]
    fn test_damage_clamps_and_kills() {
        let mut s = ship();
        s.apply_damage(30);
        assert_eq!(s.hp(), 70);
        assert!((s.hp_fraction() - 0.7).abs() < 1e-6);
        s.apply_damage(200);
        assert_eq!(s.hp(), 0);
        assert!(!s.is_alive());
        s.apply_damage(5);
        assert_eq!(s.hp(), 0);
    }

    #[test]
    fn test_dead_ship_falls_ignoring_input() {
        let mut s = ship();
        s.apply_damage(100);
        let start = s.pos();
        s.advance(
            0.1,
            &MoveInput {
                up: true,
                ..Default::default()
            },
        );
        assert!((s.pos().y - (start.y + 25.0)).abs() < 1e-3);
        assert_eq!(s.pos().x, start.x);
    }

    #[test]
    fn test_blink_only_when_dead() {
        let mut s = ship();
        assert!(s.visible(0.3));
        s.apply_damage(100);
        assert!(s.visible(0.1));
        assert!(!s.visible(0.3));
        assert!(s.visible(0.5));
    }
}
