//! Trial records
//!
//! One record per fixed number of added weights.

use serde::{Deserialize, Serialize};

/// Number of trials in one experiment run
pub const TRIAL_COUNT: usize = 4;

/// Added-weight count of each trial, in trial order
pub const WEIGHT_COUNTS: [u32; TRIAL_COUNT] = [0, 1, 2, 3];

/// One friction reading: dynamometer values for a loaded block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Block plus added weights [kg]
    pub total_mass_kg: f64,
    /// Normal force reading [N]
    pub normal_force_n: f64,
    /// Sliding friction reading [N]
    pub friction_force_n: f64,
}

impl Measurement {
    /// Coefficient implied by this reading
    pub fn mu(&self) -> f64 {
        self.friction_force_n / self.normal_force_n
    }
}

/// A single trial of the experiment
#[derive(Debug, Clone, PartialEq)]
pub struct Trial {
    index: usize,
    weights_count: u32,
    measurement: Option<Measurement>,
    mu: Option<f64>,
}

impl Trial {
    pub fn new(index: usize, weights_count: u32) -> Self {
        Self {
            index,
            weights_count,
            measurement: None,
            mu: None,
        }
    }

    /// The full fresh set: trials 1..=4 for 0..=3 added weights
    pub fn fresh_set() -> [Trial; TRIAL_COUNT] {
        std::array::from_fn(|i| Trial::new(i + 1, WEIGHT_COUNTS[i]))
    }

    /// Store a reading, replacing any earlier one, and derive mu from it
    pub fn set_measurement(&mut self, measurement: Measurement) {
        self.mu = Some(measurement.mu());
        self.measurement = Some(measurement);
    }

    /// 1-based trial number
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn weights_count(&self) -> u32 {
        self.weights_count
    }

    pub fn measurement(&self) -> Option<&Measurement> {
        self.measurement.as_ref()
    }

    pub fn total_mass_kg(&self) -> Option<f64> {
        self.measurement.map(|m| m.total_mass_kg)
    }

    pub fn normal_force_n(&self) -> Option<f64> {
        self.measurement.map(|m| m.normal_force_n)
    }

    pub fn friction_force_n(&self) -> Option<f64> {
        self.measurement.map(|m| m.friction_force_n)
    }

    pub fn mu(&self) -> Option<f64> {
        self.mu
    }

    pub fn is_done(&self) -> bool {
        self.measurement.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Measurement {
        Measurement {
            total_mass_kg: 0.9,
            normal_force_n: 8.829,
            friction_force_n: 3.0,
        }
    }

    #[test]
    fn test_fresh_set_layout() {
        let trials = Trial::fresh_set();
        assert_eq!(trials.len(), TRIAL_COUNT);
        for (i, t) in trials.iter().enumerate() {
            assert_eq!(t.index(), i + 1);
            assert_eq!(t.weights_count(), i as u32);
            assert!(!t.is_done());
            assert_eq!(t.mu(), None);
            assert_eq!(t.normal_force_n(), None);
        }
    }

    #[test]
    fn test_set_measurement_derives_mu() {
        let mut t = Trial::new(3, 2);
        t.set_measurement(sample());
        assert!(t.is_done());
        assert_eq!(t.mu(), Some(3.0 / 8.829));
        assert_eq!(t.total_mass_kg(), Some(0.9));
    }

    #[test]
    fn test_remeasure_overwrites() {
        let mut t = Trial::new(1, 0);
        t.set_measurement(sample());
        let second = Measurement {
            total_mass_kg: 0.5,
            normal_force_n: 4.905,
            friction_force_n: 1.5,
        };
        t.set_measurement(second);
        assert_eq!(t.friction_force_n(), Some(1.5));
        assert_eq!(t.mu(), Some(1.5 / 4.905));
        assert_eq!(t.index(), 1);
        assert_eq!(t.weights_count(), 0);
    }
}
