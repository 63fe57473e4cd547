//! Collision detection and response
//!
//! Everything is a circle. Resolution runs once per tick after motion, in a
//! fixed order: bullets vs asteroids, asteroids vs ship, asteroid bounces,
//! then the win check.

use glam::Vec2;

use super::motion::wrap_body;
use super::spawn::split_asteroid;
use super::state::{Asteroid, GameState, Playfield};
use crate::config::{EngineConfig, SeparationPolicy};
use crate::effects::EffectSink;
use crate::{heading, polar_to_cartesian};

/// Strict overlap test between two circles (touching does not count)
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Destroy every asteroid hit by a bullet, splitting the large ones
///
/// Each asteroid is checked against bullets in list order and the first hit
/// wins. The asteroid's radius and the bullet's velocity are zeroed as
/// tombstones and swept after the pass; fragments are appended behind the
/// surviving asteroids. Returns the number of asteroids destroyed.
pub fn destruct_asteroids(
    state: &mut GameState,
    config: &EngineConfig,
    effects: &mut dyn EffectSink,
) -> usize {
    let mut fragments = Vec::new();
    let mut destroyed = 0;

    for asteroid in state.asteroids.iter_mut() {
        let hit = state.bullets.iter_mut().find(|bullet| {
            circles_overlap(asteroid.position, asteroid.radius, bullet.position, bullet.radius)
        });
        let Some(bullet) = hit else { continue };

        effects.on_explosion();
        fragments.extend(split_asteroid(asteroid, bullet, config));
        log::debug!(
            "asteroid r={:.1} destroyed at ({:.0}, {:.0})",
            asteroid.radius,
            asteroid.position.x,
            asteroid.position.y
        );

        asteroid.radius = 0.0;
        bullet.velocity = Vec2::ZERO;
        destroyed += 1;
    }

    state.asteroids.retain(|a| !a.is_tombstone());
    state.asteroids.extend(fragments);
    state.bullets.retain(|b| !b.is_tombstone());

    destroyed
}

/// End the game if any asteroid touches the ship. Returns true on a kill.
pub fn destruct_spaceship(state: &mut GameState, now_ms: f64, effects: &mut dyn EffectSink) -> bool {
    let ship = &state.spaceship;
    let crashed = state
        .asteroids
        .iter()
        .any(|a| circles_overlap(a.position, a.radius, ship.position, ship.radius));
    if !crashed {
        return false;
    }

    effects.on_game_over();
    state.alive = false;
    state.mark_ended(now_ms);
    log::info!(
        "ship destroyed after {:.1}s, {} asteroids left",
        state.elapsed_ms(now_ms) / 1000.0,
        state.asteroids.len()
    );
    true
}

/// Declare victory once the field is empty. Returns true on the winning tick.
pub fn check_win(state: &mut GameState, now_ms: f64, effects: &mut dyn EffectSink) -> bool {
    if !state.asteroids.is_empty() || state.won {
        return false;
    }

    effects.on_victory();
    state.won = true;
    state.mark_ended(now_ms);
    log::info!("field cleared in {:.1}s", state.elapsed_ms(now_ms) / 1000.0);
    true
}

/// Bounce overlapping asteroids off each other
///
/// Simplified elastic response: the pair swaps velocities regardless of size,
/// then is pushed apart along the line between centers by the overlap. Pairs
/// are visited in list order `(i1 < i2)` and see earlier pushes. Pushed
/// asteroids are wrapped back onto the field under the configured wrap policy.
pub fn bounce_asteroids(asteroids: &mut [Asteroid], field: Playfield, config: &EngineConfig) {
    for i1 in 0..asteroids.len() {
        let (head, tail) = asteroids.split_at_mut(i1 + 1);
        let a1 = &mut head[i1];
        for a2 in tail.iter_mut() {
            let delta = a1.position - a2.position;
            let distance = delta.length();
            let reach = a1.radius + a2.radius;
            if distance >= reach {
                continue;
            }

            std::mem::swap(&mut a1.velocity, &mut a2.velocity);

            let push = polar_to_cartesian(reach - distance, heading(delta));
            a1.position += push;
            match config.separation {
                SeparationPolicy::Symmetric => a2.position -= push,
                SeparationPolicy::Legacy => a2.position.x -= push.x,
            }
        }
    }

    for asteroid in asteroids.iter_mut() {
        wrap_body(&mut asteroid.position, &mut asteroid.velocity, field, config.wrap);
    }
}
