//! Per-entity motion integrators
//!
//! Explicit Euler over one tick. Ships and asteroids live on the wrapped
//! playfield; bullets fly straight and are culled once they leave it.

use glam::Vec2;
use std::f32::consts::PI;

use super::state::{Asteroid, Bullet, Playfield, Spaceship};
use crate::config::{EngineConfig, WrapPolicy};
use crate::{normalize_angle, polar_to_cartesian, wrap_coordinate};

/// Advance the ship: turn, thrust along the new heading, drift, wrap, drag
pub fn evolve_spaceship(ship: &mut Spaceship, field: Playfield, dt: f32, config: &EngineConfig) {
    ship.angle += ship.rotation * dt;
    // Thrust uses the heading after this tick's turn
    ship.velocity += polar_to_cartesian(ship.acceleration * dt, ship.angle);
    ship.position += ship.velocity * dt;

    if wrap_body(&mut ship.position, &mut ship.velocity, field, config.wrap) {
        ship.angle = PI - ship.angle;
    }
    ship.angle = normalize_angle(ship.angle);

    ship.velocity *= config.drag_base.powf(dt);
}

/// Move bullets and drop the ones that left the field
pub fn evolve_bullets(bullets: &mut Vec<Bullet>, field: Playfield, dt: f32) {
    for bullet in bullets.iter_mut() {
        bullet.position += bullet.velocity * dt;
    }
    bullets.retain(|b| field.contains(b.position));
}

/// Drift asteroids and wrap them around the field
pub fn evolve_asteroids(asteroids: &mut [Asteroid], field: Playfield, dt: f32, config: &EngineConfig) {
    for asteroid in asteroids.iter_mut() {
        asteroid.position += asteroid.velocity * dt;
        wrap_body(&mut asteroid.position, &mut asteroid.velocity, field, config.wrap);
    }
}

/// Wrap a body back onto the field
///
/// Returns true when the body ended up mirrored, i.e. it crossed the top or
/// bottom edge an odd number of times under [`WrapPolicy::Mirror`]. The caller
/// reflects anything orientation-dependent (the ship's heading).
pub fn wrap_body(position: &mut Vec2, velocity: &mut Vec2, field: Playfield, policy: WrapPolicy) -> bool {
    let vertical_crossings = (position.y / field.height()).floor();
    position.y = wrap_coordinate(position.y, field.height());

    let mirrored = policy == WrapPolicy::Mirror && vertical_crossings.rem_euclid(2.0) == 1.0;
    if mirrored {
        position.x = field.width() - position.x;
        velocity.x = -velocity.x;
    }
    position.x = wrap_coordinate(position.x, field.width());

    mirrored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Color;
    use std::f32::consts::FRAC_PI_2;

    fn field() -> Playfield {
        Playfield::new(200.0, 100.0).unwrap()
    }

    fn toroidal() -> EngineConfig {
        EngineConfig {
            wrap: WrapPolicy::Toroidal,
            ..Default::default()
        }
    }

    #[test]
    fn test_thrust_uses_updated_heading() {
        let config = toroidal();
        let mut ship = Spaceship::new(15.0, Vec2::new(100.0, 50.0));
        ship.rotation = FRAC_PI_2; // quarter turn over one second
        ship.acceleration = 10.0;

        evolve_spaceship(&mut ship, field(), 1.0, &config);

        // Heading is now +y, so all thrust went into y
        assert!((ship.angle - FRAC_PI_2).abs() < 1e-5);
        let undamped = ship.velocity / 0.8;
        assert!(undamped.x.abs() < 1e-4);
        assert!((undamped.y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_drag_is_frame_rate_independent() {
        let config = toroidal();
        let mut one = Spaceship::new(15.0, Vec2::new(100.0, 50.0));
        one.velocity = Vec2::new(10.0, 0.0);
        let mut many = one.clone();

        evolve_spaceship(&mut one, field(), 1.0, &config);
        for _ in 0..20 {
            evolve_spaceship(&mut many, field(), 0.05, &config);
        }
        assert!((one.velocity.x - 8.0).abs() < 1e-4);
        assert!((many.velocity.x - 8.0).abs() < 1e-3);
    }

    #[test]
    fn test_toroidal_wrap() {
        let mut pos = Vec2::new(205.0, -3.0);
        let mut vel = Vec2::new(1.0, -1.0);
        let mirrored = wrap_body(&mut pos, &mut vel, field(), WrapPolicy::Toroidal);
        assert!(!mirrored);
        assert!((pos.x - 5.0).abs() < 1e-4);
        assert!((pos.y - 97.0).abs() < 1e-4);
        assert_eq!(vel, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_mirror_wrap_on_vertical_crossing() {
        let mut pos = Vec2::new(30.0, 104.0);
        let mut vel = Vec2::new(5.0, 2.0);
        let mirrored = wrap_body(&mut pos, &mut vel, field(), WrapPolicy::Mirror);
        assert!(mirrored);
        assert!((pos.x - 170.0).abs() < 1e-4);
        assert!((pos.y - 4.0).abs() < 1e-4);
        assert_eq!(vel, Vec2::new(-5.0, 2.0));
    }

    #[test]
    fn test_mirror_wrap_ignores_horizontal_crossing() {
        let mut pos = Vec2::new(-10.0, 50.0);
        let mut vel = Vec2::new(-5.0, 0.0);
        let mirrored = wrap_body(&mut pos, &mut vel, field(), WrapPolicy::Mirror);
        assert!(!mirrored);
        assert!((pos.x - 190.0).abs() < 1e-4);
        assert_eq!(vel.x, -5.0);
    }

    #[test]
    fn test_mirror_wrap_from_left_edge_stays_in_bounds() {
        // x = 0 mirrors to exactly the width, which must wrap back to 0
        let mut pos = Vec2::new(0.0, -1.0);
        let mut vel = Vec2::ZERO;
        wrap_body(&mut pos, &mut vel, field(), WrapPolicy::Mirror);
        assert!(field().contains(pos), "{pos:?}");
    }

    #[test]
    fn test_ship_heading_reflects_on_mirror_wrap() {
        let config = EngineConfig::default();
        let mut ship = Spaceship::new(15.0, Vec2::new(50.0, 99.0));
        ship.angle = 1.0;
        ship.velocity = Vec2::new(0.0, 40.0);

        evolve_spaceship(&mut ship, field(), 0.05, &config);

        assert!((ship.angle - (PI - 1.0)).abs() < 1e-5);
        assert!((ship.position.x - 150.0).abs() < 1e-3);
        assert!(field().contains(ship.position));
    }

    #[test]
    fn test_bullets_culled_outside_field() {
        let mut bullets = vec![
            Bullet {
                position: Vec2::new(195.0, 50.0),
                velocity: Vec2::new(300.0, 0.0),
                radius: 3.0,
                color: Color::RED,
            },
            Bullet {
                position: Vec2::new(100.0, 50.0),
                velocity: Vec2::new(0.0, 300.0),
                radius: 3.0,
                color: Color::RED,
            },
        ];
        evolve_bullets(&mut bullets, field(), 0.05);
        assert_eq!(bullets.len(), 1);
        assert!((bullets[0].position.y - 65.0).abs() < 1e-4);
    }

    #[test]
    fn test_asteroids_drift_and_wrap() {
        let config = toroidal();
        let mut asteroids = vec![Asteroid {
            position: Vec2::new(199.0, 50.0),
            velocity: Vec2::new(40.0, 0.0),
            radius: 20.0,
            color: Color::BLACK,
        }];
        evolve_asteroids(&mut asteroids, field(), 0.05, &config);
        assert!((asteroids[0].position.x - 1.0).abs() < 1e-3);
        assert_eq!(asteroids[0].velocity, Vec2::new(40.0, 0.0));
    }
}
