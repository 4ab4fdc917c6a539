//! Per-frame simulation tick
//!
//! `dt` is the real elapsed frame time and is used as-is; feed a fixed
//! sequence for reproducible runs.

use super::asteroid::ShapeSelector;
use super::collision::{resolve_projectile_hits, resolve_ship_hits};
use super::projectile::volley;
use super::ship::MoveInput;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement keys
    pub movement: MoveInput,
    /// Fire held
    pub fire: bool,
    /// Weapon-cycle pressed this tick
    pub cycle_weapon: bool,
    /// Shape-select pressed this tick
    pub select_shape: Option<ShapeSelector>,
    /// Restart pressed this tick (only honoured after game over)
    pub restart: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.restart && state.phase == GamePhase::GameOver {
        state.restart();
    }
    if let Some(selector) = input.select_shape {
        state.set_shape_selector(selector);
    }
    if input.cycle_weapon {
        state.set_weapon(state.weapon.next());
    }

    state.time += dt;

    // Ship
    state.ship.advance(dt, &input.movement);

    // Projectiles: move everything, then drop what left the screen
    let field = state.field;
    let culled = state.projectiles.retain(|p| !p.advance(dt, &field));
    state.stats.projectiles_culled += culled as u64;

    fire(state, input.fire, dt);

    // Asteroids leaving the screen vanish without score
    let culled = state.asteroids.retain(|a| a.advance(dt, &field));
    state.stats.asteroids_culled += culled as u64;

    // Spawner
    state.spawn_timer += dt;
    if state.spawn_timer >= state.spawn_interval
        && state.asteroids.len() < state.config.max_asteroids
    {
        state.spawn_asteroid();
        state.reset_spawn_timer();
    }

    resolve_shots(state);

    // Ship collisions: rammed asteroids are simply removed
    let rammed = resolve_ship_hits(&mut state.ship, &state.asteroids);
    state.stats.asteroids_rammed += state.asteroids.remove_all(&rammed) as u64;

    if state.phase == GamePhase::Playing && !state.ship.is_alive() {
        state.phase = GamePhase::GameOver;
        log::info!("Game over - score {}", state.score);
    }
}

/// Spend accumulated fire time on volleys.
///
/// Catches up with a loop so a long frame fires every shot it owes. While
/// the trigger is up the timer is folded back under one interval so no
/// backlog builds up.
fn fire(state: &mut GameState, held: bool, dt: f32) {
    let weapon = state.ship.weapon(state.weapon);
    let interval = weapon.interval();

    if !(held && state.ship.is_alive()) {
        if state.shot_timer > interval {
            state.shot_timer %= interval;
        }
        return;
    }

    state.shot_timer += dt;
    // Beyond one volley per projectile slot every further shot is dropped
    let max_volleys = state.projectiles.capacity();
    let mut volleys = 0;
    while state.shot_timer + FIRE_TIMER_EPSILON >= interval {
        if volleys == max_volleys {
            log::debug!("Fire backlog of {:.1}s discarded", state.shot_timer);
            state.shot_timer %= interval;
            break;
        }
        let muzzle = state.ship.muzzle();
        for projectile in volley(state.weapon, muzzle, weapon.projectile_speed()) {
            match state.projectiles.insert(projectile) {
                Ok(_) => state.stats.projectiles_fired += 1,
                Err(_) => {
                    state.stats.projectiles_dropped += 1;
                    log::debug!("Projectile slab full, shot dropped");
                }
            }
        }
        state.stats.volleys += 1;
        state.shot_timer -= interval;
        volleys += 1;
    }
}

/// Projectile hits: damage, then removals, splits and score
fn resolve_shots(state: &mut GameState) {
    let report = resolve_projectile_hits(&state.projectiles, &mut state.asteroids);
    state.projectiles.remove_all(&report.spent);

    for id in report.destroyed {
        let Some(rock) = state.asteroids.remove(id) else {
            continue;
        };
        let tier = rock.tier.factor() as u64;
        state.score += tier * SCORE_PER_TIER;
        state.stats.asteroids_destroyed += 1;

        if rock.tier.half().is_none() {
            continue;
        }
        for _ in 0..2 {
            let Some(child) = rock.split_child(&state.field, &mut state.rng) else {
                break;
            };
            if state.asteroids.insert(child).is_err() {
                log::warn!("Asteroid slab full, split child dropped");
            }
        }
        state.score += tier * SPLIT_BONUS_PER_TIER;
        state.stats.asteroids_split += 1;
        log::debug!(
            "{:?} {:?} asteroid split at ({:.0}, {:.0})",
            rock.tier,
            rock.shape,
            rock.body.pos.x,
            rock.body.pos.y
        );
    }
}
