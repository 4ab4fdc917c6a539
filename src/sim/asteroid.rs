//! Asteroids: shape, size tier, hit points and splitting
//!
//! Shape is a plain tag. It only picks the outline side count and the base
//! damage/HP constants; everything else is shared.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::kinematic::{Edge, Kinematic, Playfield};
use crate::consts::*;
use crate::polar_to_cartesian;

/// Per-shape constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStats {
    /// Outline side count
    pub sides: u32,
    /// Contact damage per size tier
    pub base_damage: u32,
    /// Max HP per size tier
    pub base_hp: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidShape {
    Triangle,
    Square,
    Pentagon,
}

impl AsteroidShape {
    pub const ALL: [AsteroidShape; 3] = [
        AsteroidShape::Triangle,
        AsteroidShape::Square,
        AsteroidShape::Pentagon,
    ];

    pub const fn stats(self) -> ShapeStats {
        match self {
            AsteroidShape::Triangle => ShapeStats {
                sides: 3,
                base_damage: 5,
                base_hp: 100.0,
            },
            AsteroidShape::Square => ShapeStats {
                sides: 4,
                base_damage: 10,
                base_hp: 150.0,
            },
            AsteroidShape::Pentagon => ShapeStats {
                sides: 5,
                base_damage: 15,
                base_hp: 200.0,
            },
        }
    }

    pub fn sides(self) -> u32 {
        self.stats().sides
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// What the spawner should produce next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeSelector {
    Fixed(AsteroidShape),
    /// Pick a shape per asteroid at creation
    Random,
}

impl Default for ShapeSelector {
    fn default() -> Self {
        ShapeSelector::Fixed(AsteroidShape::Triangle)
    }
}

impl ShapeSelector {
    pub fn resolve(self, rng: &mut impl Rng) -> AsteroidShape {
        match self {
            ShapeSelector::Fixed(shape) => shape,
            ShapeSelector::Random => AsteroidShape::random(rng),
        }
    }
}

/// Size tier; the discriminant is the scale factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SizeTier {
    Small = 1,
    Medium = 2,
    Large = 4,
}

impl SizeTier {
    pub const ALL: [SizeTier; 3] = [SizeTier::Small, SizeTier::Medium, SizeTier::Large];

    #[inline]
    pub fn factor(self) -> u32 {
        self as u32
    }

    #[inline]
    pub fn radius(self) -> f32 {
        ASTEROID_RADIUS_UNIT * self.factor() as f32
    }

    /// Tier of the children this tier splits into (None for Small)
    pub fn half(self) -> Option<SizeTier> {
        match self {
            SizeTier::Large => Some(SizeTier::Medium),
            SizeTier::Medium => Some(SizeTier::Small),
            SizeTier::Small => None,
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// A destructible polygonal asteroid
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub body: Kinematic,
    pub shape: AsteroidShape,
    pub tier: SizeTier,
    max_hp: f32,
    hp: f32,
    crashed: bool,
}

impl Asteroid {
    /// A motionless asteroid at full health
    pub fn new(shape: AsteroidShape, tier: SizeTier, pos: Vec2) -> Self {
        Self::with_hp_tier(shape, tier, tier, Kinematic::at(pos))
    }

    fn with_hp_tier(shape: AsteroidShape, tier: SizeTier, hp_tier: SizeTier, body: Kinematic) -> Self {
        let max_hp = shape.stats().base_hp * hp_tier.factor() as f32;
        Self {
            body,
            shape,
            tier,
            max_hp,
            hp: max_hp,
            crashed: false,
        }
    }

    /// Fresh asteroid just off a random edge, heading roughly for the center
    pub fn spawn(selector: ShapeSelector, field: &Playfield, rng: &mut impl Rng) -> Self {
        let shape = selector.resolve(rng);
        let tier = SizeTier::random(rng);
        let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
        let pos = field.edge_point(edge, rng.random_range(0.0..=1.0), tier.radius());
        Self::with_hp_tier(shape, tier, tier, launch_from(pos, field, rng))
    }

    /// One child for when this asteroid breaks apart, or None for the smallest tier.
    ///
    /// The child keeps the shape, starts where the parent died and gets HP
    /// scaled by the parent's tier, not its own.
    pub fn split_child(&self, field: &Playfield, rng: &mut impl Rng) -> Option<Self> {
        let tier = self.tier.half()?;
        let body = launch_from(self.body.pos, field, rng);
        Some(Self::with_hp_tier(self.shape, tier, self.tier, body))
    }

    /// Move one step. Returns false once the asteroid is a full radius past any edge.
    pub fn advance(&mut self, dt: f32, field: &Playfield) -> bool {
        self.body.integrate(dt);
        field.contains_expanded(self.body.pos, self.radius())
    }

    pub fn apply_damage(&mut self, amount: u32) {
        if self.crashed {
            return;
        }
        self.hp -= amount as f32;
        if self.hp <= 0.0 {
            self.crashed = true;
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.tier.radius()
    }

    /// Damage dealt to the ship on contact
    pub fn contact_damage(&self) -> u32 {
        self.shape.stats().base_damage * self.tier.factor()
    }

    pub fn hp(&self) -> f32 {
        self.hp
    }

    pub fn max_hp(&self) -> f32 {
        self.max_hp
    }

    pub fn is_crashed(&self) -> bool {
        self.crashed
    }

    /// Health bar fill in [0, 1]
    pub fn hp_ratio(&self) -> f32 {
        (self.hp / self.max_hp).clamp(0.0, 1.0)
    }
}

/// Random heading toward a jittered screen center, random speed and spin
fn launch_from(pos: Vec2, field: &Playfield, rng: &mut impl Rng) -> Kinematic {
    let max_offset = field.min_dimension() * ASTEROID_AIM_JITTER;
    let jitter = polar_to_cartesian(
        rng.random_range(0.0..=max_offset),
        rng.random_range(0.0..=std::f32::consts::TAU),
    );
    let dir = (field.center() + jitter - pos).normalize_or_zero();
    let speed = rng.random_range(ASTEROID_SPEED_MIN..=ASTEROID_SPEED_MAX);

    Kinematic {
        pos,
        rotation: rng.random_range(0.0..=360.0),
        vel: dir * speed,
        spin: rng.random_range(ASTEROID_SPIN_MIN..=ASTEROID_SPIN_MAX),
    }
}
