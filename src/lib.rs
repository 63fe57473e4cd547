//! Rock Drift - an Asteroids-style arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, game state)
//! - `config`: Data-driven engine tuning
//! - `effects`: Fire-and-forget hooks for sound and visual effects
//! - `clock`: Wall-clock source for the game timer
//! - `controls`: Keyboard-to-action mapping used by drivers
//! - `web`: Browser driver facade (wasm32 only)

pub mod clock;
pub mod config;
pub mod controls;
pub mod effects;
pub mod error;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{BulletSpec, EngineConfig, SeparationPolicy, WrapPolicy};
pub use effects::{EffectSink, EventLog, GameEvent, NullEffects};
pub use error::SimError;
pub use sim::{BulletType, Engine, GameAction, GamePhase, GameState, Playfield};

use std::f32::consts::TAU;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Reference simulation timestep (seconds)
    pub const SIM_DT: f32 = 0.05;
    /// Driver tick cadence matching `SIM_DT`
    pub const TICK_INTERVAL_MS: u32 = 50;
    /// Asteroids spawned for a fresh game
    pub const DEFAULT_ASTEROIDS: usize = 5;

    /// Ship turn rate while a rotate key is held (radians/sec)
    pub const TURN_RATE: f32 = PI;
    /// Ship thrust while the thrust key is held (pixels/s²)
    pub const THRUST: f32 = 100.0;

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 15.0;
    /// Fraction of ship velocity kept after one second of drift
    pub const DRAG_BASE: f32 = 0.8;

    /// Bullet defaults
    pub const NORMAL_BULLET_SPEED: f32 = 300.0;
    pub const NORMAL_BULLET_RADIUS: f32 = 3.0;
    pub const MAX_NORMAL_BULLETS: usize = 10;
    pub const BIG_BULLET_SPEED: f32 = 50.0;
    pub const BIG_BULLET_RADIUS: f32 = 30.0;
    pub const MAX_BIG_BULLETS: usize = 1;

    /// Asteroids at or above this radius split in two when shot
    pub const SPLIT_MIN_RADIUS: f32 = 15.0;
    /// Spawn ranges (half-open)
    pub const ASTEROID_MIN_SPEED: f32 = 20.0;
    pub const ASTEROID_MAX_SPEED: f32 = 60.0;
    pub const ASTEROID_MIN_RADIUS: f32 = 10.0;
    pub const ASTEROID_MAX_RADIUS: f32 = 30.0;
}

/// Normalize angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    wrap_coordinate(angle, TAU)
}

/// Wrap a coordinate into [0, extent)
///
/// `extent` must be positive. `rem_euclid` can round up to exactly `extent`
/// for tiny negative inputs, which is folded back to zero.
#[inline]
pub fn wrap_coordinate(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Direction of a vector in radians, in (-π, π]
#[inline]
pub fn heading(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}
