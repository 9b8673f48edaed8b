//! Runtime configuration, optionally loaded from a TOML file.
//!
//! Every field has a default, so a file only needs the keys it overrides:
//!
//! ```toml
//! gravity_mps2 = 3.721
//! alignment = "full"
//! output_dir = "mars-plots"
//! ```
//!
//! Command-line flags are applied on top of whatever the file provides.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::ballistics::STANDARD_GRAVITY_MPS2;
use crate::core::charts::ChartStyle;
use crate::core::dataset::DEFAULT_DATASET_SEED;
use crate::core::sweep::{DEFAULT_MAX_SAMPLES, DEFAULT_TIME_STEP_S, SeriesAlignment, SweepOptions};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlotterConfig {
    pub gravity_mps2: f64,
    pub time_step_s: f64,
    pub max_samples: usize,
    pub alignment: SeriesAlignment,
    pub output_dir: PathBuf,
    pub chart_width: u32,
    pub chart_height: u32,
    pub dataset_seed: u64,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        let style = ChartStyle::default();
        Self {
            gravity_mps2: STANDARD_GRAVITY_MPS2,
            time_step_s: DEFAULT_TIME_STEP_S,
            max_samples: DEFAULT_MAX_SAMPLES,
            alignment: SeriesAlignment::default(),
            output_dir: PathBuf::from("plots"),
            chart_width: style.width,
            chart_height: style.height,
            dataset_seed: DEFAULT_DATASET_SEED,
        }
    }
}

impl PlotterConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity_mps2.is_finite() || self.gravity_mps2 <= 0.0 {
            return Err(ConfigError::Invalid {
                key: "gravity_mps2",
                reason: format!("must be positive, got {}", self.gravity_mps2),
            });
        }
        if !self.time_step_s.is_finite() || self.time_step_s <= 0.0 {
            return Err(ConfigError::Invalid {
                key: "time_step_s",
                reason: format!("must be positive, got {}", self.time_step_s),
            });
        }
        if self.max_samples == 0 {
            return Err(ConfigError::Invalid {
                key: "max_samples",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.chart_width == 0 || self.chart_height == 0 {
            return Err(ConfigError::Invalid {
                key: "chart_width/chart_height",
                reason: "chart dimensions must be non-zero".to_string(),
            });
        }
        Ok(())
    }

    pub fn sweep_options(&self) -> SweepOptions {
        SweepOptions {
            time_step_s: self.time_step_s,
            max_samples: self.max_samples,
            alignment: self.alignment,
        }
    }

    pub fn chart_style(&self) -> ChartStyle {
        ChartStyle {
            width: self.chart_width,
            height: self.chart_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = PlotterConfig::from_toml_str("").expect("empty toml should parse");
        assert_eq!(config, PlotterConfig::default());
        assert_eq!(config.gravity_mps2, 9.807);
        assert_eq!(config.time_step_s, 0.001);
        assert_eq!(config.dataset_seed, 42);
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let config = PlotterConfig::from_toml_str(
            "gravity_mps2 = 3.721\nalignment = \"full\"\noutput_dir = \"mars\"\n",
        )
        .expect("toml should parse");

        assert_eq!(config.gravity_mps2, 3.721);
        assert_eq!(config.alignment, SeriesAlignment::Full);
        assert_eq!(config.output_dir, PathBuf::from("mars"));
        assert_eq!(config.time_step_s, DEFAULT_TIME_STEP_S);
    }

    #[test]
    fn rejects_unknown_alignment() {
        assert!(PlotterConfig::from_toml_str("alignment = \"sideways\"").is_err());
    }

    #[test]
    fn validate_rejects_zero_gravity_step_and_sample_limit() {
        let zero_gravity = PlotterConfig {
            gravity_mps2: 0.0,
            ..PlotterConfig::default()
        };
        assert!(matches!(
            zero_gravity.validate(),
            Err(ConfigError::Invalid {
                key: "gravity_mps2",
                ..
            })
        ));

        let zero_step = PlotterConfig {
            time_step_s: 0.0,
            ..PlotterConfig::default()
        };
        assert!(matches!(
            zero_step.validate(),
            Err(ConfigError::Invalid {
                key: "time_step_s",
                ..
            })
        ));

        let no_samples = PlotterConfig::from_toml_str("max_samples = 0").expect("toml should parse");
        assert!(matches!(
            no_samples.validate(),
            Err(ConfigError::Invalid {
                key: "max_samples",
                ..
            })
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = PlotterConfig::load(Path::new("definitely/not/here.toml"))
            .expect_err("load should fail");
        assert!(err.to_string().contains("definitely/not/here.toml"));
    }
}
