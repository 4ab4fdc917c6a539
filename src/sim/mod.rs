//! Deterministic simulation module
//!
//! All gameplay logic lives here. Given the same seed, the same inputs and
//! the same `dt` sequence, a run plays out identically:
//! - Seeded RNG only
//! - Stable iteration order (by arena slot)
//! - No rendering or platform dependencies

pub mod arena;
pub mod asteroid;
pub mod collision;
pub mod kinematic;
pub mod projectile;
pub mod ship;
pub mod state;
pub mod tick;

pub use arena::{Arena, SlotId};
pub use asteroid::{Asteroid, AsteroidShape, ShapeSelector, ShapeStats, SizeTier};
pub use collision::{HitReport, circles_overlap, resolve_projectile_hits, resolve_ship_hits};
pub use kinematic::{Edge, Kinematic, Playfield};
pub use projectile::{Projectile, WeaponType, volley};
pub use ship::{MoveInput, Ship, WeaponStats};
pub use state::{
    AsteroidView, FrameView, GamePhase, GameState, ProjectileView, RunStats, ShipView,
};
pub use tick::{TickInput, tick};
