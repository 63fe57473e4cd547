//! Transition dispatcher
//!
//! One entry point, [`Engine::transition`], maps `(state, action)` to the next
//! state. The input state is never touched: every transition clones it into a
//! draft, runs the passes on the draft and hands the draft back.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{bounce_asteroids, check_win, destruct_asteroids, destruct_spaceship};
use super::motion::{evolve_asteroids, evolve_bullets, evolve_spaceship};
use super::spawn::{spawn_bullet, spawn_random_asteroid};
use super::state::{BulletType, GameState, INITIAL_GAME_STATE, Playfield, Spaceship};
use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::effects::{EffectSink, NullEffects};
use crate::error::SimError;

/// Requests a driver can make of the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameAction {
    /// Advance the simulation by `dt` seconds
    Evolve { dt: f32 },
    /// Start a new game on a fresh field
    Initialize { field: Playfield, num_asteroids: usize },
    /// Turn rate in radians/sec
    SetSpaceshipRotation { rotation: f32 },
    /// Thrust in pixels/s²
    SetSpaceshipAcceleration { acceleration: f32 },
    FireBullet { bullet_type: BulletType },
    SetSpecial { special: bool },
}

impl GameAction {
    /// Initialize request with validated dimensions
    pub fn initialize(width: f32, height: f32, num_asteroids: usize) -> Result<Self, SimError> {
        Ok(GameAction::Initialize {
            field: Playfield::new(width, height)?,
            num_asteroids,
        })
    }
}

/// The simulation engine and its collaborators
///
/// Owns the random source, the effect sink and the clock so transitions stay
/// reproducible for a given seed and clock.
pub struct Engine<E = NullEffects, C = SystemClock> {
    config: EngineConfig,
    rng: Pcg32,
    effects: E,
    clock: C,
}

impl<E: EffectSink, C: Clock> Engine<E, C> {
    pub fn new(seed: u64, config: EngineConfig, effects: E, clock: C) -> Result<Self, SimError> {
        config.validate()?;
        log::debug!(
            "engine seed={} wrap={} separation={}",
            seed,
            config.wrap.as_str(),
            config.separation.as_str()
        );
        Ok(Self {
            config,
            rng: Pcg32::seed_from_u64(seed),
            effects,
            clock,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut E {
        &mut self.effects
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Compute the state that follows `state` under `action`
    pub fn transition(&mut self, state: &GameState, action: GameAction) -> GameState {
        match action {
            GameAction::Evolve { dt } => self.evolve(state, dt),
            GameAction::Initialize {
                field,
                num_asteroids,
            } => self.initialize(field, num_asteroids),
            GameAction::SetSpaceshipRotation { rotation } => {
                let mut next = state.clone();
                if self.accepts_controls(state) {
                    next.spaceship.rotation = rotation;
                }
                next
            }
            GameAction::SetSpaceshipAcceleration { acceleration } => {
                let mut next = state.clone();
                if self.accepts_controls(state) {
                    if acceleration > 0.0 && next.spaceship.acceleration <= 0.0 {
                        self.effects.on_thrust();
                    }
                    next.spaceship.acceleration = acceleration;
                }
                next
            }
            GameAction::FireBullet { bullet_type } => self.fire_bullet(state, bullet_type),
            GameAction::SetSpecial { special } => GameState {
                special,
                ..state.clone()
            },
        }
    }

    /// One physics tick
    fn evolve(&mut self, state: &GameState, dt: f32) -> GameState {
        if !state.alive {
            return state.clone();
        }
        let Some(field) = state.playfield() else {
            log::warn!("evolve before initialize; ignoring");
            return state.clone();
        };
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("ignoring evolve with dt={dt}");
            return state.clone();
        }

        let now = self.clock.now_ms();
        let mut next = state.clone();

        evolve_spaceship(&mut next.spaceship, field, dt, &self.config);
        evolve_bullets(&mut next.bullets, field, dt);
        evolve_asteroids(&mut next.asteroids, field, dt, &self.config);
        destruct_asteroids(&mut next, &self.config, &mut self.effects);
        destruct_spaceship(&mut next, now, &mut self.effects);
        bounce_asteroids(&mut next.asteroids, field, &self.config);
        check_win(&mut next, now, &mut self.effects);

        log::trace!(
            "tick dt={dt}: {} asteroids, {} bullets",
            next.asteroids.len(),
            next.bullets.len()
        );
        next
    }

    /// Fresh game: centered ship at rest, new asteroids, no bullets
    fn initialize(&mut self, field: Playfield, num_asteroids: usize) -> GameState {
        let asteroids = (0..num_asteroids)
            .map(|_| spawn_random_asteroid(&mut self.rng, field, &self.config))
            .collect();

        log::info!(
            "new game on {}x{} field with {} asteroids",
            field.width(),
            field.height(),
            num_asteroids
        );

        GameState {
            width: field.width(),
            height: field.height(),
            spaceship: Spaceship::new(self.config.ship_radius, field.center()),
            asteroids,
            game_start_time: self.clock.now_ms(),
            ..INITIAL_GAME_STATE
        }
    }

    /// Launch bullets, capped per type
    fn fire_bullet(&mut self, state: &GameState, bullet_type: BulletType) -> GameState {
        let mut next = state.clone();
        if !self.accepts_controls(state) {
            return next;
        }

        let mut spawned = spawn_bullet(&next.spaceship, bullet_type, &self.config);
        let active = next.active_bullets(bullet_type, &self.config);
        let quota = bullet_type.spec(&self.config).max_active.saturating_sub(active);
        spawned.truncate(quota);

        if spawned.is_empty() {
            log::trace!("{bullet_type:?} bullet cap reached ({active} active)");
            return next;
        }

        self.effects.on_fire(bullet_type);
        log::debug!("fired {} {bullet_type:?} bullet(s)", spawned.len());
        next.bullets.extend(spawned);
        next
    }

    /// Ship controls are dropped once the ship is destroyed
    fn accepts_controls(&self, state: &GameState) -> bool {
        if !state.alive {
            log::trace!("ignoring control input after game over");
        }
        state.alive
    }
}
