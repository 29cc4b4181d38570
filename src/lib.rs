//! Friction Lab
//!
//! Simulated measurement model for the classic sliding-friction experiment:
//! a wooden block is pulled across a board with 0 to 3 added weights, the
//! dynamometer readings for normal force and friction force are recorded,
//! and the friction coefficient is derived per trial and averaged.
//!
//! The model is a plain data-plus-operations type with no knowledge of any
//! presentation layer. Randomness is injected through the [`rand::Rng`]
//! trait so every reading is reproducible under a seeded generator.

pub mod config;
pub mod experiment;
pub mod noise;
pub mod settings;
pub mod snapshot;
pub mod trial;

use thiserror::Error;

// Re-export main types
pub use config::LabConfig;
pub use experiment::FrictionExperiment;
pub use settings::{ExperimentSettings, GRAVITY};
pub use snapshot::{ExperimentSnapshot, SettingsSnapshot, TrialSnapshot};
pub use trial::{Measurement, Trial, TRIAL_COUNT, WEIGHT_COUNTS};

#[derive(Debug, Error)]
pub enum FrictionError {
    #[error("no trial is configured for {weights_count} added weights")]
    TrialNotFound { weights_count: u32 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
