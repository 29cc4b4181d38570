use std::fs;
use std::path::Path;

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::experiment::FrictionExperiment;
use crate::settings::ExperimentSettings;
use crate::FrictionError;

/// Startup configuration for a lab session, usually read from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
    pub block_mass_kg: f64,
    pub weight_mass_kg: f64,
    pub noise_percent: f64,
}

impl Default for LabConfig {
    fn default() -> Self {
        let settings = ExperimentSettings::default();
        Self {
            seed: None,
            block_mass_kg: settings.block_mass_kg,
            weight_mass_kg: settings.weight_mass_kg,
            noise_percent: settings.noise_percent,
        }
    }
}

impl LabConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, FrictionError> {
        let cfg: LabConfig = toml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, FrictionError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Out-of-range values are left for the model to clamp; only
    /// non-finite numbers are refused here.
    pub fn validate(&self) -> Result<(), FrictionError> {
        let fields = [
            ("block_mass_kg", self.block_mass_kg),
            ("weight_mass_kg", self.weight_mass_kg),
            ("noise_percent", self.noise_percent),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(FrictionError::InvalidConfig(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Build a model with these settings applied
    pub fn build(&self) -> FrictionExperiment<ChaCha8Rng> {
        let mut exp = match self.seed {
            Some(seed) => FrictionExperiment::from_seed(seed),
            None => FrictionExperiment::from_entropy(),
        };
        exp.update_settings(self.block_mass_kg, self.weight_mass_kg, self.noise_percent);
        exp
    }
}
