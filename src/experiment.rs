//! Friction experiment model
//!
//! Holds the apparatus settings, a hidden "true" friction coefficient for
//! the wood-on-wood pair, and the four trial records. Readings are the
//! ideal physics plus jitter from the injected generator.

use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::noise::{apply_noise, random_in_range};
use crate::settings::{ExperimentSettings, GRAVITY};
use crate::snapshot::{ExperimentSnapshot, SettingsSnapshot, TrialSnapshot};
use crate::trial::{Measurement, Trial, TRIAL_COUNT};
use crate::FrictionError;

/// Range the hidden coefficient is drawn from
pub const MU_TRUE_RANGE: (f64, f64) = (0.25, 0.45);

/// Measurement model for one experiment session
pub struct FrictionExperiment<R: Rng = ChaCha8Rng> {
    /// Gravitational acceleration, fixed for the life of the model
    gravity: f64,
    /// Current apparatus settings
    settings: ExperimentSettings,
    /// Ground-truth coefficient; only ever seen through noisy readings
    mu_true: f64,
    /// Trial records, ascending by weight count
    trials: [Trial; TRIAL_COUNT],
    rng: R,
}

impl<R: Rng> FrictionExperiment<R> {
    /// Create a model drawing the hidden coefficient from `rng`
    pub fn new(mut rng: R) -> Self {
        let mu_true = random_in_range(&mut rng, MU_TRUE_RANGE.0, MU_TRUE_RANGE.1);
        Self::with_true_mu(rng, mu_true)
    }

    /// Create a model with a known hidden coefficient
    pub fn with_true_mu(rng: R, mu_true: f64) -> Self {
        debug!("new friction experiment");
        Self {
            gravity: GRAVITY,
            settings: ExperimentSettings::default(),
            mu_true,
            trials: Trial::fresh_set(),
            rng,
        }
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn settings(&self) -> &ExperimentSettings {
        &self.settings
    }

    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    /// Trial carrying `weights_count` added weights, if any
    pub fn trial(&self, weights_count: u32) -> Option<&Trial> {
        self.trials
            .iter()
            .find(|t| t.weights_count() == weights_count)
    }

    /// Replace the settings. Out-of-range values are clamped, trials are kept.
    pub fn update_settings(&mut self, block_mass_kg: f64, weight_mass_kg: f64, noise_percent: f64) {
        self.settings = ExperimentSettings::clamped(block_mass_kg, weight_mass_kg, noise_percent);
        debug!(
            "settings updated: block={} kg, weight={} kg, noise={}%",
            self.settings.block_mass_kg, self.settings.weight_mass_kg, self.settings.noise_percent
        );
    }

    /// Dynamometer reading for the bare block hanging still: m*g plus noise
    pub fn measure_block_weight_n(&mut self) -> f64 {
        let ideal = self.settings.block_mass_kg * self.gravity;
        let reading = apply_noise(ideal, self.settings.noise_percent, &mut self.rng);
        debug!("block weight reading {reading:.4} N (ideal {ideal:.4} N)");
        reading
    }

    /// Pull the block carrying `weights_count` weights and read both forces.
    ///
    /// Normal and friction readings get independent noise draws. No trial
    /// is touched; see [`Self::record_trial`].
    pub fn measure_friction_for_weights(&mut self, weights_count: u32) -> Measurement {
        let total_mass_kg = self.settings.total_mass_kg(weights_count);
        let normal = total_mass_kg * self.gravity;
        let friction = self.mu_true * normal;

        let noise = self.settings.noise_percent;
        let measurement = Measurement {
            total_mass_kg,
            normal_force_n: apply_noise(normal, noise, &mut self.rng),
            friction_force_n: apply_noise(friction, noise, &mut self.rng),
        };
        debug!(
            "friction reading for {weights_count} weights: N={:.4}, F={:.4}",
            measurement.normal_force_n, measurement.friction_force_n
        );
        measurement
    }

    /// Store `measurement` in the trial for `weights_count`
    pub fn record_trial(
        &mut self,
        weights_count: u32,
        measurement: Measurement,
    ) -> Result<&Trial, FrictionError> {
        let Some(trial) = self
            .trials
            .iter_mut()
            .find(|t| t.weights_count() == weights_count)
        else {
            warn!("no trial for {weights_count} weights; measurement dropped");
            return Err(FrictionError::TrialNotFound { weights_count });
        };
        trial.set_measurement(measurement);
        debug!("trial {} recorded, mu={:?}", trial.index(), trial.mu());
        Ok(trial)
    }

    /// Measure and record the trial for `weights_count` in one step.
    ///
    /// Fails before drawing any noise when no trial matches.
    pub fn measure_and_record(&mut self, weights_count: u32) -> Result<Measurement, FrictionError> {
        if self.trial(weights_count).is_none() {
            warn!("no trial for {weights_count} weights");
            return Err(FrictionError::TrialNotFound { weights_count });
        }
        let measurement = self.measure_friction_for_weights(weights_count);
        self.record_trial(weights_count, measurement)?;
        Ok(measurement)
    }

    /// Measure every trial in order, each with its own noise draws
    pub fn auto_fill_all_trials(&mut self) {
        for i in 0..self.trials.len() {
            let weights_count = self.trials[i].weights_count();
            let measurement = self.measure_friction_for_weights(weights_count);
            self.trials[i].set_measurement(measurement);
        }
        info!("auto-filled {} trials", self.trials.len());
    }

    /// Draw a new hidden coefficient and clear all trials. Settings stay.
    pub fn reset(&mut self) {
        self.mu_true = random_in_range(&mut self.rng, MU_TRUE_RANGE.0, MU_TRUE_RANGE.1);
        self.trials = Trial::fresh_set();
        info!("experiment reset");
    }

    pub fn done_count(&self) -> usize {
        self.trials.iter().filter(|t| t.is_done()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.done_count() == TRIAL_COUNT
    }

    /// Mean mu over finished trials; `None` until one is done
    pub fn mu_average(&self) -> Option<f64> {
        let mus: Vec<f64> = self.trials.iter().filter_map(Trial::mu).collect();
        if mus.is_empty() {
            return None;
        }
        Some(mus.iter().sum::<f64>() / mus.len() as f64)
    }

    pub fn export_snapshot(&self) -> ExperimentSnapshot {
        ExperimentSnapshot {
            settings: SettingsSnapshot::new(self.gravity, &self.settings),
            results: self.trials.iter().map(TrialSnapshot::from).collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn true_mu(&self) -> f64 {
        self.mu_true
    }
}

impl FrictionExperiment<ChaCha8Rng> {
    /// Reproducible model seeded from `seed`
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Model seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl Default for FrictionExperiment<ChaCha8Rng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}
