//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time enters only as the tick `dt` and the injected clock
//! - Seeded RNG only
//! - Stable iteration order (list order of asteroids and bullets)
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{bounce_asteroids, check_win, circles_overlap, destruct_asteroids, destruct_spaceship};
pub use motion::{evolve_asteroids, evolve_bullets, evolve_spaceship, wrap_body};
pub use spawn::{spawn_bullet, spawn_random_asteroid, split_asteroid};
pub use state::{
    Asteroid, Bullet, BulletType, Color, GamePhase, GameState, INITIAL_GAME_STATE, Playfield,
    Spaceship,
};
pub use tick::{Engine, GameAction};
