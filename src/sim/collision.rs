//! Collision detection and resolution
//!
//! Everything is a circle. Resolution is two-phase: the scans below only
//! touch per-entity state (HP) and return the slots to remove, and the
//! caller applies removals, splits and score once the scan is done. No
//! collection changes shape while it is being walked.

use glam::Vec2;

use super::arena::{Arena, SlotId};
use super::asteroid::Asteroid;
use super::projectile::Projectile;
use super::ship::Ship;

/// True when the circles strictly overlap (touching is a miss)
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Outcome of the projectile-vs-asteroid pass
#[derive(Debug, Clone, Default)]
pub struct HitReport {
    /// Projectiles that struck something this tick
    pub spent: Vec<SlotId>,
    /// Asteroids that crashed this tick, in the order they were killed
    pub destroyed: Vec<SlotId>,
}

/// Damage the first live asteroid each projectile overlaps.
///
/// Projectiles are scanned in slot order and each one stops at its first
/// hit. An asteroid that crashes earlier in the pass can no longer be hit
/// by later projectiles.
pub fn resolve_projectile_hits(
    projectiles: &Arena<Projectile>,
    asteroids: &mut Arena<Asteroid>,
) -> HitReport {
    let mut report = HitReport::default();

    for (projectile_id, projectile) in projectiles.iter() {
        let target = asteroids.iter_mut().find(|(_, asteroid)| {
            !asteroid.is_crashed()
                && circles_overlap(
                    projectile.pos(),
                    projectile.radius(),
                    asteroid.body.pos,
                    asteroid.radius(),
                )
        });

        if let Some((asteroid_id, asteroid)) = target {
            asteroid.apply_damage(projectile.damage);
            report.spent.push(projectile_id);
            if asteroid.is_crashed() {
                report.destroyed.push(asteroid_id);
            }
        }
    }

    report
}

/// Apply contact damage from every asteroid touching the ship.
///
/// Returns the asteroids that rammed the ship. Scanning stops as soon as
/// the ship is dead; a dead ship does not collide.
pub fn resolve_ship_hits(ship: &mut Ship, asteroids: &Arena<Asteroid>) -> Vec<SlotId> {
    let mut rammed = Vec::new();

    for (id, asteroid) in asteroids.iter() {
        if !ship.is_alive() {
            break;
        }
        if circles_overlap(ship.pos(), ship.radius, asteroid.body.pos, asteroid.radius()) {
            ship.apply_damage(asteroid.contact_damage());
            rammed.push(id);
        }
    }

    rammed
}
