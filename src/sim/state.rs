//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives here. Values are plain
//! data; all behavior that advances them lives in `motion`, `collision` and
//! `tick`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{BulletSpec, EngineConfig};
use crate::consts::SHIP_RADIUS;
use crate::error::SimError;

/// Summary of where a run stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ship alive, asteroids remain
    Playing,
    /// All asteroids cleared
    Won,
    /// Ship destroyed
    Lost,
}

/// 8-bit RGB color (cosmetic only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string, e.g. `rgb(200,150,40)`
    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Weapon selection for `fireBullet`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulletType {
    /// Fast and small, many at once
    Normal,
    /// Slow and huge, one at a time
    Big,
}

impl BulletType {
    pub fn spec(self, config: &EngineConfig) -> &BulletSpec {
        match self {
            BulletType::Normal => &config.normal_bullet,
            BulletType::Big => &config.big_bullet,
        }
    }

    /// Classify a live bullet by its size
    pub fn of_radius(radius: f32, config: &EngineConfig) -> Self {
        if radius > config.normal_bullet.radius {
            BulletType::Big
        } else {
            BulletType::Normal
        }
    }
}

/// Validated playfield bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    width: f32,
    height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Result<Self, SimError> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self { width, height })
        } else {
            Err(SimError::InvalidPlayfield { width, height })
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Half-open containment: `[0, width) x [0, height)`
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x < self.width && pos.y >= 0.0 && pos.y < self.height
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spaceship {
    pub radius: f32,
    pub color: Color,
    pub position: Vec2,
    /// Heading in radians, [0, 2π)
    pub angle: f32,
    /// Pixels per second
    pub velocity: Vec2,
    /// Thrust along the heading (pixels/s², set by input)
    pub acceleration: f32,
    /// Turn rate (radians/sec, set by input)
    pub rotation: f32,
}

impl Spaceship {
    pub const fn new(radius: f32, position: Vec2) -> Self {
        Self {
            radius,
            color: Color::BLACK,
            position,
            angle: 0.0,
            velocity: Vec2::ZERO,
            acceleration: 0.0,
            rotation: 0.0,
        }
    }
}

impl Default for Spaceship {
    fn default() -> Self {
        Self::new(SHIP_RADIUS, Vec2::ZERO)
    }
}

/// A drifting rock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Asteroid {
    /// Marked for removal during destruction resolution
    #[inline]
    pub fn is_tombstone(&self) -> bool {
        self.radius <= 0.0
    }
}

/// A projectile fired by the ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Bullet {
    /// A bullet that already destroyed an asteroid this tick
    #[inline]
    pub fn is_tombstone(&self) -> bool {
        self.velocity == Vec2::ZERO
    }

    pub fn bullet_type(&self, config: &EngineConfig) -> BulletType {
        BulletType::of_radius(self.radius, config)
    }
}

/// Complete game state
///
/// Drivers hold the authoritative copy and feed it back through
/// [`Engine::transition`](super::Engine::transition); the engine never
/// mutates the value it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub alive: bool,
    pub won: bool,
    /// Playfield bounds (zero until the first initialize)
    pub width: f32,
    pub height: f32,
    pub spaceship: Spaceship,
    /// Ordered: bounce resolution walks pairs in this order
    pub asteroids: Vec<Asteroid>,
    pub bullets: Vec<Bullet>,
    /// Milliseconds since the Unix epoch
    pub game_start_time: f64,
    /// Set once, on the tick the ship dies or the field is cleared
    pub game_end_time: Option<f64>,
    /// Driver-controlled flag; the engine only stores it
    pub special: bool,
}

/// Seed value before the driver's first initialize
pub const INITIAL_GAME_STATE: GameState = GameState {
    alive: true,
    won: false,
    width: 0.0,
    height: 0.0,
    spaceship: Spaceship::new(SHIP_RADIUS, Vec2::ZERO),
    asteroids: Vec::new(),
    bullets: Vec::new(),
    game_start_time: 0.0,
    game_end_time: None,
    special: false,
};

impl Default for GameState {
    fn default() -> Self {
        INITIAL_GAME_STATE
    }
}

impl GameState {
    /// Playfield bounds, if initialized
    pub fn playfield(&self) -> Option<Playfield> {
        Playfield::new(self.width, self.height).ok()
    }

    pub fn phase(&self) -> GamePhase {
        if !self.alive {
            GamePhase::Lost
        } else if self.won {
            GamePhase::Won
        } else {
            GamePhase::Playing
        }
    }

    /// Run time for the timer display: frozen once the game has ended
    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        let end = self.game_end_time.unwrap_or(now_ms);
        (end - self.game_start_time).max(0.0)
    }

    /// Record the end of the run; later calls keep the first timestamp
    pub fn mark_ended(&mut self, now_ms: f64) {
        self.game_end_time.get_or_insert(now_ms);
    }

    /// Live bullets of one type
    pub fn active_bullets(&self, bullet_type: BulletType, config: &EngineConfig) -> usize {
        self.bullets
            .iter()
            .filter(|b| b.bullet_type(config) == bullet_type)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playfield_rejects_degenerate() {
        assert!(Playfield::new(0.0, 100.0).is_err());
        assert!(Playfield::new(100.0, -1.0).is_err());
        assert!(Playfield::new(f32::NAN, 100.0).is_err());
        assert!(Playfield::new(f32::INFINITY, 100.0).is_err());
        assert!(Playfield::new(640.0, 480.0).is_ok());
    }

    #[test]
    fn test_playfield_contains_is_half_open() {
        let field = Playfield::new(100.0, 50.0).unwrap();
        assert!(field.contains(Vec2::new(0.0, 0.0)));
        assert!(field.contains(Vec2::new(99.9, 49.9)));
        assert!(!field.contains(Vec2::new(100.0, 10.0)));
        assert!(!field.contains(Vec2::new(10.0, 50.0)));
        assert!(!field.contains(Vec2::new(-0.1, 10.0)));
    }

    #[test]
    fn test_initial_state_is_uninitialized() {
        let state = GameState::default();
        assert!(state.alive);
        assert!(!state.won);
        assert!(state.playfield().is_none());
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.spaceship.radius, SHIP_RADIUS);
    }

    #[test]
    fn test_mark_ended_is_sticky() {
        let mut state = GameState::default();
        state.game_start_time = 1_000.0;
        state.mark_ended(4_000.0);
        state.mark_ended(9_000.0);
        assert_eq!(state.game_end_time, Some(4_000.0));
        assert_eq!(state.elapsed_ms(20_000.0), 3_000.0);
    }

    #[test]
    fn test_elapsed_runs_until_end() {
        let state = GameState {
            game_start_time: 1_000.0,
            ..Default::default()
        };
        assert_eq!(state.elapsed_ms(1_500.0), 500.0);
    }

    #[test]
    fn test_bullet_classification() {
        let config = EngineConfig::default();
        assert_eq!(BulletType::of_radius(3.0, &config), BulletType::Normal);
        assert_eq!(BulletType::of_radius(30.0, &config), BulletType::Big);
        assert_eq!(BulletType::Big.spec(&config).max_active, 1);
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color::rgb(200, 150, 40).css(), "rgb(200,150,40)");
    }
}
