//! Error types reported to the driver
//!
//! The transition function itself never fails. These errors cover contract
//! violations caught before a value reaches the engine: a degenerate
//! playfield or an unusable configuration.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Playfield dimensions must be finite and strictly positive.
    InvalidPlayfield { width: f32, height: f32 },

    /// A configuration value is outside its usable range.
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of the constraint.
        reason: &'static str,
    },

    /// Configuration text could not be parsed.
    ConfigParse(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidPlayfield { width, height } => write!(
                f,
                "invalid playfield {width}x{height}: dimensions must be finite and positive"
            ),
            SimError::InvalidConfig { field, reason } => {
                write!(f, "invalid config value for '{field}': {reason}")
            }
            SimError::ConfigParse(msg) => write!(f, "failed to parse config: {msg}"),
        }
    }
}

impl std::error::Error for SimError {}
