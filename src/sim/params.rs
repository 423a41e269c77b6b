//! Arcade physics parameters
//!
//! An immutable value handed to the trajectory functions. Loaded once (see
//! `Settings`) and passed by reference; nothing mutates it during a shot.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tuning for the arcade trajectory model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    /// Fraction of axis speed kept after a wall reflection (0-1)
    pub bounce_coefficient: f32,
    /// Power percent to speed scale
    pub force_multiplier: f32,
    /// Secondary speed scale
    pub movement_multiplier: f32,
    /// Bounce events allowed before the ball is stopped where it is
    pub max_bounces: u32,
}

impl PhysicsParams {
    pub const ARCADE: Self = Self {
        bounce_coefficient: 0.7,
        force_multiplier: 0.15,
        movement_multiplier: 0.5,
        max_bounces: 5,
    };

    /// Speed per power percent (force * movement)
    #[inline]
    pub fn speed_scale(&self) -> f32 {
        self.force_multiplier * self.movement_multiplier
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bounce_coefficient.is_finite() || !(0.0..=1.0).contains(&self.bounce_coefficient) {
            return Err(ConfigError::OutOfRange {
                field: "bounce_coefficient",
                reason: "must be finite and within [0, 1]",
            });
        }
        if !self.force_multiplier.is_finite() || self.force_multiplier <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "force_multiplier",
                reason: "must be finite and > 0",
            });
        }
        if !self.movement_multiplier.is_finite() || self.movement_multiplier <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "movement_multiplier",
                reason: "must be finite and > 0",
            });
        }
        if self.max_bounces < 1 {
            return Err(ConfigError::OutOfRange {
                field: "max_bounces",
                reason: "must be >= 1",
            });
        }
        Ok(())
    }
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self::ARCADE
    }
}
