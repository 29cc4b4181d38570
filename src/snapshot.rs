//! Exportable snapshot of an experiment run

use serde::{Deserialize, Serialize};

use crate::settings::ExperimentSettings;
use crate::trial::{Trial, TRIAL_COUNT};
use crate::FrictionError;

/// Settings block of the export
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSnapshot {
    #[serde(rename = "g")]
    pub gravity: f64,
    pub block_mass_kg: f64,
    pub weight_mass_kg: f64,
    pub noise_percent: f64,
}

impl SettingsSnapshot {
    pub fn new(gravity: f64, settings: &ExperimentSettings) -> Self {
        Self {
            gravity,
            block_mass_kg: settings.block_mass_kg,
            weight_mass_kg: settings.weight_mass_kg,
            noise_percent: settings.noise_percent,
        }
    }
}

/// One row of the results table. Unmeasured values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialSnapshot {
    #[serde(rename = "trial")]
    pub index: usize,
    pub weights_count: u32,
    pub total_mass_kg: Option<f64>,
    pub normal_force_n: Option<f64>,
    pub friction_force_n: Option<f64>,
    pub mu: Option<f64>,
    pub done: bool,
}

impl From<&Trial> for TrialSnapshot {
    fn from(trial: &Trial) -> Self {
        Self {
            index: trial.index(),
            weights_count: trial.weights_count(),
            total_mass_kg: trial.total_mass_kg(),
            normal_force_n: trial.normal_force_n(),
            friction_force_n: trial.friction_force_n(),
            mu: trial.mu(),
            done: trial.is_done(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentSnapshot {
    pub settings: SettingsSnapshot,
    pub results: Vec<TrialSnapshot>,
}

impl ExperimentSnapshot {
    /// Indented JSON, ready to show in a text box or save to disk
    pub fn to_json_pretty(&self) -> Result<String, FrictionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, FrictionError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn done_count(&self) -> usize {
        self.results.iter().filter(|r| r.done).count()
    }

    /// Progress as `"done/total"`, e.g. `"2/4"`
    pub fn progress_label(&self) -> String {
        format!("{}/{}", self.done_count(), TRIAL_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trial::Measurement;

    fn snapshot_with_one_done() -> ExperimentSnapshot {
        let mut trials = Trial::fresh_set();
        trials[1].set_measurement(Measurement {
            total_mass_kg: 0.7,
            normal_force_n: 6.867,
            friction_force_n: 2.4,
        });
        ExperimentSnapshot {
            settings: SettingsSnapshot::new(9.81, &ExperimentSettings::default()),
            results: trials.iter().map(TrialSnapshot::from).collect(),
        }
    }

    #[test]
    fn test_wire_keys() {
        let json = serde_json::to_value(snapshot_with_one_done()).unwrap();

        let settings = &json["settings"];
        assert_eq!(settings["g"], 9.81);
        assert_eq!(settings["blockMassKg"], 0.5);
        assert_eq!(settings["weightMassKg"], 0.2);
        assert_eq!(settings["noisePercent"], 3.0);

        let results = json["results"].as_array().unwrap();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0]["trial"], 1);
        assert_eq!(results[0]["weightsCount"], 0);
        assert!(results[0]["mu"].is_null());
        assert!(results[0]["normalForceN"].is_null());
        assert_eq!(results[0]["done"], false);
        assert_eq!(results[1]["frictionForceN"], 2.4);
        assert_eq!(results[1]["done"], true);
    }

    #[test]
    fn test_pretty_json_parses_back() {
        let snap = snapshot_with_one_done();
        let text = snap.to_json_pretty().unwrap();
        assert!(text.contains('\n'));
        assert_eq!(ExperimentSnapshot::from_json(&text).unwrap(), snap);
    }

    #[test]
    fn test_progress_label() {
        assert_eq!(snapshot_with_one_done().progress_label(), "1/4");
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = ExperimentSnapshot::from_json("{\"settings\": 1}").unwrap_err();
        assert!(matches!(err, FrictionError::Json(_)));
    }
}
