//! Configuration loading for analysis runs.
//!
//! An experiment is described by a TOML file; every section is optional and
//! falls back to the defaults below.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use cascade_core::{DiffusionError, ProbabilityMode, SeedSelection, ThresholdMode, DEFAULT_MAX_ROUNDS};

/// Complete experiment configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Seed for the experiment's root random stream
    pub rng_seed: u64,
    /// Independent Cascade settings
    pub ic: IcConfig,
    /// Linear Threshold settings
    pub lt: LtConfig,
    /// Parameter values for the sensitivity sweeps
    pub sensitivity: SensitivityConfig,
    /// Structural influence settings
    pub influence: InfluenceConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            rng_seed: 42,
            ic: IcConfig::default(),
            lt: LtConfig::default(),
            sensitivity: SensitivityConfig::default(),
            influence: InfluenceConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Loads and validates configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks every option that must hold before a run starts.
    ///
    /// Sweep values only need to be finite: an out-of-range value fails
    /// just its own sweep element.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ic.probability.validate()?;
        self.lt.threshold_mode.validate()?;

        if self.ic.seed_count == 0 {
            return Err(ConfigError::Invalid("ic.seed_count must be at least 1".into()));
        }
        if self.ic.max_rounds == 0 {
            return Err(ConfigError::Invalid("ic.max_rounds must be at least 1".into()));
        }
        let sweeps = [
            ("sensitivity.probabilities", &self.sensitivity.probabilities),
            ("sensitivity.thresholds", &self.sensitivity.thresholds),
        ];
        for (name, values) in sweeps {
            if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
                return Err(ConfigError::Invalid(format!("{} contains {}", name, bad)));
            }
        }
        if !(0.0..=1.0).contains(&self.influence.structure_probability) {
            return Err(ConfigError::Invalid(format!(
                "influence.structure_probability {} is outside [0, 1]",
                self.influence.structure_probability
            )));
        }
        Ok(())
    }
}

/// Independent Cascade settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IcConfig {
    /// How IC seeds are picked
    pub seed_selection: SeedSelection,
    /// Number of IC seeds
    pub seed_count: usize,
    /// How the activation probability is obtained
    pub probability: ProbabilityMode,
    /// Bound on the trace length of each run
    pub max_rounds: usize,
}

impl Default for IcConfig {
    fn default() -> Self {
        Self {
            seed_selection: SeedSelection::Random,
            seed_count: 5,
            probability: ProbabilityMode::default(),
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

/// Linear Threshold settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LtConfig {
    /// Number of randomly sampled LT seeds
    pub seed_count: usize,
    pub threshold_mode: ThresholdMode,
}

impl Default for LtConfig {
    fn default() -> Self {
        Self {
            seed_count: 5,
            threshold_mode: ThresholdMode::AutoRandom,
        }
    }
}

/// Values swept by the sensitivity analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensitivityConfig {
    /// IC probabilities
    pub probabilities: Vec<f64>,
    /// LT fixed thresholds
    pub thresholds: Vec<f64>,
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            probabilities: vec![0.05, 0.1, 0.2, 0.3, 0.5],
            thresholds: vec![0.1, 0.2, 0.3, 0.4, 0.5],
        }
    }
}

/// Structural influence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfluenceConfig {
    /// How many top-degree nodes to report
    pub top_k: usize,
    /// IC probability used when comparing structure with spread
    pub structure_probability: f64,
}

impl Default for InfluenceConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            structure_probability: 0.3,
        }
    }
}

/// Returns the default configuration as a TOML string.
pub fn default_config_toml() -> Result<String, ConfigError> {
    AnalysisConfig::default().to_toml()
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing TOML config
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// Error serializing TOML config
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    /// A parameter outside its allowed range
    #[error(transparent)]
    Parameter(#[from] DiffusionError),
    /// Any other inconsistent setting
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
