//! Entity factories
//!
//! Randomness comes in through the `rng` argument, so the same seed always
//! produces the same field.

use rand::Rng;

use super::state::{Asteroid, Bullet, BulletType, Color, Playfield, Spaceship};
use crate::config::EngineConfig;
use crate::{heading, polar_to_cartesian};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Place a fresh asteroid anywhere on the field, drifting in a random direction
pub fn spawn_random_asteroid<R: Rng + ?Sized>(
    rng: &mut R,
    field: Playfield,
    config: &EngineConfig,
) -> Asteroid {
    let position = glam::Vec2::new(
        rng.random_range(0.0..field.width()),
        rng.random_range(0.0..field.height()),
    );
    let speed = rng.random_range(config.asteroid_min_speed..config.asteroid_max_speed);
    let direction = rng.random_range(0.0..TAU);
    let radius = rng.random_range(config.asteroid_min_radius..config.asteroid_max_radius);

    Asteroid {
        position,
        velocity: polar_to_cartesian(speed, direction),
        radius,
        color: random_warm_color(rng),
    }
}

/// Sandy/orange tones: bright red and green, little blue
pub fn random_warm_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::rgb(
        rng.random_range(100..255),
        rng.random_range(100..255),
        rng.random_range(0..100),
    )
}

/// Bullets leaving the ship's nose for one trigger pull
///
/// Always a single bullet today; callers treat the result as a batch.
pub fn spawn_bullet(ship: &Spaceship, bullet_type: BulletType, config: &EngineConfig) -> Vec<Bullet> {
    let spec = bullet_type.spec(config);
    vec![Bullet {
        position: ship.position,
        velocity: polar_to_cartesian(spec.speed, ship.angle),
        radius: spec.radius,
        color: Color::RED,
    }]
}

/// Fragments left behind when `bullet` destroys `asteroid`
///
/// Small asteroids vanish. Larger ones break into two halves flying apart at
/// twice the parent's speed, perpendicular to the bullet's path.
pub fn split_asteroid(asteroid: &Asteroid, bullet: &Bullet, config: &EngineConfig) -> Vec<Asteroid> {
    if asteroid.radius < config.split_min_radius {
        return Vec::new();
    }

    let speed = asteroid.velocity.length() * 2.0;
    let velocity = polar_to_cartesian(speed, heading(bullet.velocity) + FRAC_PI_2);
    let child = |velocity| Asteroid {
        position: asteroid.position,
        velocity,
        radius: asteroid.radius / 2.0,
        color: asteroid.color,
    };

    vec![child(velocity), child(-velocity)]
}
