//! Start-up configuration of the playing field.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Field geometry and physics coefficients. Provided once at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f64,
    pub height: f64,
    /// Added to every projectile's vertical velocity each tick.
    pub gravity: f64,
    /// Damping applied (with a sign flip) to the velocity component
    /// perpendicular to the wall that was hit.
    pub reflect_orthogonal: f64,
    /// Damping applied to the velocity component parallel to that wall.
    pub reflect_parallel: f64,
    /// Ticks per second the caller paces the simulation at.
    pub tick_rate: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            gravity: GRAVITY,
            reflect_orthogonal: REFLECT_ORTHOGONAL,
            reflect_parallel: REFLECT_PARALLEL,
            tick_rate: TICK_RATE,
        }
    }
}

impl FieldConfig {
    /// Field extent along an axis (0 = x, 1 = y).
    pub fn extent(&self, axis: usize) -> f64 {
        if axis == 0 {
            self.width
        } else {
            self.height
        }
    }

    /// Lowest and highest x a cannon pivot may occupy.
    pub fn cannon_x_range(&self) -> (f64, f64) {
        (CANNON_MARGIN, self.width - CANNON_MARGIN)
    }

    /// y of both cannons' pivots.
    pub fn cannon_y(&self) -> f64 {
        self.height - CANNON_ELEVATION
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let min_extent = 2.0 * CANNON_MARGIN;
        if !(self.width > min_extent && self.height > min_extent) {
            return Err(ConfigError::FieldTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        for (name, value) in [
            ("reflect_orthogonal", self.reflect_orthogonal),
            ("reflect_parallel", self.reflect_parallel),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ReflectionOutOfRange { name, value });
            }
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::NonFiniteGravity);
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }
}

/// Rejected start-up configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    FieldTooSmall { width: f64, height: f64 },
    ReflectionOutOfRange { name: &'static str, value: f64 },
    NonFiniteGravity,
    ZeroTickRate,
    EmptyWave,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldTooSmall { width, height } => write!(
                f,
                "field {width}x{height} is too small: both sides must exceed {}",
                2.0 * CANNON_MARGIN
            ),
            Self::ReflectionOutOfRange { name, value } => {
                write!(f, "{name} must be within [0, 1], got {value}")
            }
            Self::NonFiniteGravity => write!(f, "gravity must be a finite number"),
            Self::ZeroTickRate => write!(f, "tick rate must be at least 1 Hz"),
            Self::EmptyWave => write!(f, "a wave must contain at least one target of each kind"),
        }
    }
}

impl std::error::Error for ConfigError {}
