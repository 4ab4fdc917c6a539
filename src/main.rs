//! Polyroids headless runner
//!
//! Plays a scripted session at a fixed 60 Hz step and reports the outcome.
//! Usage: `polyroids [seed] [seconds]`

use polyroids::WorldConfig;
use polyroids::renderer::build_frame;
use polyroids::sim::{GamePhase, GameState, MoveInput, ShapeSelector, TickInput, tick};

const DT: f32 = 1.0 / 60.0;
const DEFAULT_SECONDS: f32 = 90.0;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok());
    let seconds = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SECONDS);

    let config = match seed {
        Some(seed) => WorldConfig::with_seed(seed),
        None => WorldConfig::default(),
    };
    let mut state = GameState::new(config);
    log::info!("Polyroids (headless) running {:.0}s", seconds);

    let steps = (seconds / DT) as u32;
    let mut peak_vertices = 0;
    for step in 0..steps {
        let input = scripted_input(step);
        tick(&mut state, &input, DT);
        peak_vertices = peak_vertices.max(build_frame(&state.view()).len());

        if state.phase == GamePhase::GameOver {
            log::info!("Ship lost after {:.1}s", step as f32 * DT);
            break;
        }
    }

    println!("Score: {}", state.score);
    println!("Phase: {:?}", state.phase);
    println!("Ship HP: {}", state.ship.hp());
    println!("Peak frame vertices: {}", peak_vertices);
    match serde_json::to_string_pretty(&state.stats) {
        Ok(json) => println!("Stats: {}", json),
        Err(e) => log::warn!("Could not serialize run stats: {}", e),
    }
}

/// Hold fire, weave side to side, rotate weapons every ten seconds
fn scripted_input(step: u32) -> TickInput {
    let second = (step as f32 * DT) as u32;
    let left = (second / 2) % 2 == 0;
    TickInput {
        movement: MoveInput {
            left,
            right: !left,
            ..Default::default()
        },
        fire: true,
        cycle_weapon: step > 0 && step % 600 == 0,
        select_shape: (step == 0).then_some(ShapeSelector::Random),
        restart: false,
    }
}
