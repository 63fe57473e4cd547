//! Engine tuning and behavior switches
//!
//! Defaults reproduce the classic game. Drivers can override any subset of
//! fields from JSON; missing keys keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// How ships and asteroids leave the top/bottom edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WrapPolicy {
    /// Plain torus: reappear on the opposite edge, nothing else changes
    Toroidal,
    /// Reappear on the opposite edge mirrored left-to-right, with x-velocity
    /// negated and the ship's heading reflected (`π - angle`)
    #[default]
    Mirror,
}

impl WrapPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            WrapPolicy::Toroidal => "toroidal",
            WrapPolicy::Mirror => "mirror",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "toroidal" | "torus" | "wrap" => Some(WrapPolicy::Toroidal),
            "mirror" | "reflect" => Some(WrapPolicy::Mirror),
            _ => None,
        }
    }
}

/// How two overlapping asteroids are pushed apart after exchanging velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeparationPolicy {
    /// Both asteroids move by the overlap along the line between centers
    #[default]
    Symmetric,
    /// Second asteroid only moves along x (bit-for-bit with the old game)
    Legacy,
}

impl SeparationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeparationPolicy::Symmetric => "symmetric",
            SeparationPolicy::Legacy => "legacy",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "symmetric" | "full" => Some(SeparationPolicy::Symmetric),
            "legacy" => Some(SeparationPolicy::Legacy),
            _ => None,
        }
    }
}

/// Launch parameters for one bullet type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulletSpec {
    /// Muzzle speed (pixels/sec)
    pub speed: f32,
    pub radius: f32,
    /// Concurrent bullets of this type allowed on screen
    pub max_active: usize,
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === Topology ===
    pub wrap: WrapPolicy,
    pub separation: SeparationPolicy,

    // === Ship ===
    pub ship_radius: f32,
    /// Velocity multiplier per second of drift (applied as `drag_base^dt`)
    pub drag_base: f32,

    // === Weapons ===
    pub normal_bullet: BulletSpec,
    pub big_bullet: BulletSpec,

    // === Asteroids ===
    /// Radius at or above which a destroyed asteroid splits
    pub split_min_radius: f32,
    pub asteroid_min_speed: f32,
    pub asteroid_max_speed: f32,
    pub asteroid_min_radius: f32,
    pub asteroid_max_radius: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            wrap: WrapPolicy::Mirror,
            separation: SeparationPolicy::Symmetric,

            ship_radius: SHIP_RADIUS,
            drag_base: DRAG_BASE,

            normal_bullet: BulletSpec {
                speed: NORMAL_BULLET_SPEED,
                radius: NORMAL_BULLET_RADIUS,
                max_active: MAX_NORMAL_BULLETS,
            },
            big_bullet: BulletSpec {
                speed: BIG_BULLET_SPEED,
                radius: BIG_BULLET_RADIUS,
                max_active: MAX_BIG_BULLETS,
            },

            split_min_radius: SPLIT_MIN_RADIUS,
            asteroid_min_speed: ASTEROID_MIN_SPEED,
            asteroid_max_speed: ASTEROID_MAX_SPEED,
            asteroid_min_radius: ASTEROID_MIN_RADIUS,
            asteroid_max_radius: ASTEROID_MAX_RADIUS,
        }
    }
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SimError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON (for dumping the effective config)
    pub fn to_json(&self) -> Result<String, SimError> {
        serde_json::to_string_pretty(self).map_err(|e| SimError::ConfigParse(e.to_string()))
    }

    /// Check every value the engine divides by, samples from, or compares against
    pub fn validate(&self) -> Result<(), SimError> {
        fn positive(field: &'static str, value: f32) -> Result<(), SimError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SimError::InvalidConfig {
                    field,
                    reason: "must be finite and positive",
                })
            }
        }

        positive("ship_radius", self.ship_radius)?;
        positive("drag_base", self.drag_base)?;
        positive("normal_bullet.speed", self.normal_bullet.speed)?;
        positive("normal_bullet.radius", self.normal_bullet.radius)?;
        positive("big_bullet.speed", self.big_bullet.speed)?;
        positive("big_bullet.radius", self.big_bullet.radius)?;
        positive("split_min_radius", self.split_min_radius)?;
        positive("asteroid_min_speed", self.asteroid_min_speed)?;
        positive("asteroid_max_speed", self.asteroid_max_speed)?;
        positive("asteroid_min_radius", self.asteroid_min_radius)?;
        positive("asteroid_max_radius", self.asteroid_max_radius)?;

        // Bullets are told apart by radius
        if self.big_bullet.radius <= self.normal_bullet.radius {
            return Err(SimError::InvalidConfig {
                field: "big_bullet.radius",
                reason: "must exceed normal_bullet.radius",
            });
        }
        if self.asteroid_max_speed <= self.asteroid_min_speed {
            return Err(SimError::InvalidConfig {
                field: "asteroid_max_speed",
                reason: "must exceed asteroid_min_speed",
            });
        }
        if self.asteroid_max_radius <= self.asteroid_min_radius {
            return Err(SimError::InvalidConfig {
                field: "asteroid_max_radius",
                reason: "must exceed asteroid_min_radius",
            });
        }
        Ok(())
    }
}
