//! Experiment settings
//!
//! Apparatus parameters the user can change at any time, each held inside
//! its documented range.

use serde::{Deserialize, Serialize};

/// Gravitational acceleration [m/s^2]
pub const GRAVITY: f64 = 9.81;

pub const BLOCK_MASS_RANGE_KG: (f64, f64) = (0.05, 5.0);
pub const WEIGHT_MASS_RANGE_KG: (f64, f64) = (0.01, 2.0);
pub const NOISE_PERCENT_RANGE: (f64, f64) = (0.0, 20.0);

/// User-adjustable apparatus settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperimentSettings {
    /// Mass of the wooden block [kg]
    pub block_mass_kg: f64,
    /// Mass of a single added weight [kg]
    pub weight_mass_kg: f64,
    /// Relative reading jitter, +/- percent of the ideal value
    pub noise_percent: f64,
}

impl ExperimentSettings {
    /// Build settings with every field clamped into its range
    pub fn clamped(block_mass_kg: f64, weight_mass_kg: f64, noise_percent: f64) -> Self {
        Self {
            block_mass_kg: clamp_to(block_mass_kg, BLOCK_MASS_RANGE_KG),
            weight_mass_kg: clamp_to(weight_mass_kg, WEIGHT_MASS_RANGE_KG),
            noise_percent: clamp_to(noise_percent, NOISE_PERCENT_RANGE),
        }
    }

    /// Total mass of the block carrying `weights_count` added weights
    pub fn total_mass_kg(&self, weights_count: u32) -> f64 {
        self.block_mass_kg + weights_count as f64 * self.weight_mass_kg
    }
}

impl Default for ExperimentSettings {
    fn default() -> Self {
        Self {
            block_mass_kg: 0.5,
            weight_mass_kg: 0.2,
            noise_percent: 3.0,
        }
    }
}

/// Clamp into `(min, max)`. NaN lands on `min`.
pub(crate) fn clamp_to(value: f64, (min, max): (f64, f64)) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}
