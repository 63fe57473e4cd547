//! Rock Drift entry point
//!
//! The browser build is driven from JavaScript through `rock_drift::web`.
//! Natively this runs a headless session with a scripted pilot, which is
//! handy for eyeballing tuning changes:
//!
//! ```text
//! RUST_LOG=debug ROCK_DRIFT_CONFIG=tuning.json cargo run -- 42
//! ```

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use rock_drift::consts::*;
    use rock_drift::{
        BulletType, Clock, Engine, EngineConfig, EventLog, GameAction, GameEvent, GamePhase,
        GameState, ManualClock,
    };

    env_logger::init();
    log::info!("Rock Drift (native) starting...");

    let seed: u64 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 2024,
    };
    let config = match std::env::var("ROCK_DRIFT_CONFIG") {
        Ok(path) => {
            log::info!("Loading engine config from {}", path);
            EngineConfig::from_json(&std::fs::read_to_string(path)?)?
        }
        Err(_) => EngineConfig::default(),
    };

    let mut engine = Engine::new(seed, config, EventLog::new(), ManualClock::new(0.0))?;
    log::info!(
        "wrap={} separation={}",
        engine.config().wrap.as_str(),
        engine.config().separation.as_str()
    );
    let start = GameAction::initialize(600.0, 600.0, DEFAULT_ASTEROIDS)?;
    let mut state = engine.transition(&GameState::default(), start);

    // Spin in place, spray normal shots, lob a big one now and then
    state = engine.transition(&state, GameAction::SetSpaceshipRotation { rotation: TURN_RATE });
    let max_ticks = 60 * 1000 / TICK_INTERVAL_MS;
    let mut ticks = 0;
    while ticks < max_ticks && state.phase() == GamePhase::Playing {
        if ticks % 4 == 0 {
            let bullet_type = if ticks % 100 == 0 {
                BulletType::Big
            } else {
                BulletType::Normal
            };
            state = engine.transition(&state, GameAction::FireBullet { bullet_type });
        }
        engine.clock().advance(f64::from(TICK_INTERVAL_MS));
        state = engine.transition(&state, GameAction::Evolve { dt: SIM_DT });
        ticks += 1;
    }

    let effects = engine.effects();
    let shots = effects.count(GameEvent::Fire(BulletType::Normal))
        + effects.count(GameEvent::Fire(BulletType::Big));
    println!(
        "seed {}: {:?} after {} ticks ({:.1}s) | {} asteroids left | {} destroyed | {} shots",
        seed,
        state.phase(),
        ticks,
        state.elapsed_ms(engine.clock().now_ms()) / 1000.0,
        state.asteroids.len(),
        effects.count(GameEvent::Explosion),
        shots
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is rock_drift::web::start, this is just to satisfy the compiler
}
