//! Weapons and the projectiles they fire

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::kinematic::{Kinematic, Playfield};
use crate::consts::SHOTGUN_ORIGIN_GAP;

/// Selectable weapon; the cycle order is declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeaponType {
    #[default]
    Laser,
    Bullet,
    Shotgun,
}

impl WeaponType {
    pub const ALL: [WeaponType; 3] = [WeaponType::Laser, WeaponType::Bullet, WeaponType::Shotgun];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Next weapon in the cycle (wraps)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            WeaponType::Laser => "LASER",
            WeaponType::Bullet => "BULLET",
            WeaponType::Shotgun => "SHOTGUN",
        }
    }

    /// Damage per hit
    pub fn damage(self) -> u32 {
        match self {
            WeaponType::Laser => 200,
            WeaponType::Bullet => 10,
            WeaponType::Shotgun => 5,
        }
    }

    /// Collision radius of one projectile
    pub fn radius(self) -> f32 {
        match self {
            WeaponType::Bullet => 5.0,
            WeaponType::Laser | WeaponType::Shotgun => 2.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub body: Kinematic,
    pub damage: u32,
    pub weapon: WeaponType,
}

impl Projectile {
    pub fn new(weapon: WeaponType, origin: Vec2, vel: Vec2) -> Self {
        Self {
            body: Kinematic::moving(origin, vel),
            damage: weapon.damage(),
            weapon,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.weapon.radius()
    }

    /// Move one step. Returns true once the projectile has left the playfield.
    pub fn advance(&mut self, dt: f32, field: &Playfield) -> bool {
        self.body.integrate(dt);
        !field.contains(self.body.pos)
    }
}

/// Projectiles for one trigger pull from `muzzle`.
///
/// Shotgun fans three pellets out left, up and right from origins
/// `SHOTGUN_ORIGIN_GAP` apart; everything else fires one shot straight up.
/// The diagonal pellets share the straight shot's vertical speed so the
/// three stay level with each other.
pub fn volley(weapon: WeaponType, muzzle: Vec2, speed: f32) -> Vec<Projectile> {
    match weapon {
        WeaponType::Shotgun => [-1.0, 0.0, 1.0]
            .into_iter()
            .map(|side: f32| {
                let origin = muzzle + Vec2::new(side * SHOTGUN_ORIGIN_GAP, 0.0);
                Projectile::new(weapon, origin, Vec2::new(side * speed, -speed))
            })
            .collect(),
        _ => vec![Projectile::new(weapon, muzzle, Vec2::new(0.0, -speed))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_table() {
        assert_eq!(Projectile::new(WeaponType::Laser, Vec2::ZERO, Vec2::ZERO).damage, 200);
        assert_eq!(Projectile::new(WeaponType::Bullet, Vec2::ZERO, Vec2::ZERO).damage, 10);
        assert_eq!(Projectile::new(WeaponType::Shotgun, Vec2::ZERO, Vec2::ZERO).damage, 5);
    }

    #[test]
    fn test_radius_table() {
        assert_eq!(WeaponType::Bullet.radius(), 5.0);
        assert_eq!(WeaponType::Laser.radius(), 2.0);
        assert_eq!(WeaponType::Shotgun.radius(), 2.0);
    }

    #[test]
    fn test_weapon_cycle() {
        assert_eq!(WeaponType::Laser.next(), WeaponType::Bullet);
        assert_eq!(WeaponType::Bullet.next(), WeaponType::Shotgun);
        assert_eq!(WeaponType::Shotgun.next(), WeaponType::Laser);
    }

    #[test]
    fn test_off_bounds_below_zero_and_beyond_max() {
        let field = Playfield::new(200, 100);

        // Already past the bottom edge; even moving back up it is culled this step
        let mut p = Projectile::new(WeaponType::Bullet, Vec2::new(50.0, 101.0), Vec2::new(0.0, -10.0));
        assert!(p.advance(0.01, &field));

        let mut p = Projectile::new(WeaponType::Laser, Vec2::new(50.0, 1.0), Vec2::new(0.0, -200.0));
        assert!(p.advance(0.01, &field));

        let mut p = Projectile::new(WeaponType::Laser, Vec2::new(50.0, 50.0), Vec2::new(0.0, -200.0));
        assert!(!p.advance(0.01, &field));
    }

    #[test]
    fn test_single_shot_volley() {
        let shots = volley(WeaponType::Bullet, Vec2::new(100.0, 200.0), 840.0);
        assert_eq!(shots.len(), 1);
        assert_eq!(shots[0].pos(), Vec2::new(100.0, 200.0));
        assert_eq!(shots[0].body.vel, Vec2::new(0.0, -840.0));
    }

    #[test]
    fn test_shotgun_volley_diverges() {
        let shots = volley(WeaponType::Shotgun, Vec2::new(100.0, 200.0), 500.0);
        assert_eq!(shots.len(), 3);
        let xs: Vec<f32> = shots.iter().map(|p| p.pos().x).collect();
        assert_eq!(xs, vec![80.0, 100.0, 120.0]);
        assert!(shots[0].body.vel.x < 0.0);
        assert_eq!(shots[1].body.vel.x, 0.0);
        assert!(shots[2].body.vel.x > 0.0);
        assert!(shots.iter().all(|p| p.body.vel.y == -500.0));
    }
}
