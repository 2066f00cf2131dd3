//! Tunable parameters for difficulty resolution and recommendation scoring.
//!
//! Defaults reproduce the reference behavior exactly; hosts may override
//! them through a TOML file or `TRAJECTORY_*` environment variables.
//! Precedence: defaults, then file, then environment.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrajectoryError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub difficulty: DifficultyBands,
    #[serde(default)]
    pub recommendation: RecommendationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: DifficultyBands::default(),
            recommendation: RecommendationConfig::default(),
        }
    }
}

/// Ratio bands mapping a learner's prerequisite coverage to a difficulty
/// tier: below `beginner_below` is Beginner, at or above `advanced_at` is
/// Advanced, Intermediate between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyBands {
    #[serde(default = "default_beginner_below")]
    pub beginner_below: f64,
    #[serde(default = "default_advanced_at")]
    pub advanced_at: f64,
}

impl Default for DifficultyBands {
    fn default() -> Self {
        Self {
            beginner_below: default_beginner_below(),
            advanced_at: default_advanced_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Relevance assigned to every eligible course when the learner has no
    /// missing graduation skills left to close.
    #[serde(default = "default_baseline_relevance")]
    pub baseline_relevance: f64,
    /// Recommendation count when the caller does not pass a limit.
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            baseline_relevance: default_baseline_relevance(),
            default_limit: default_limit(),
        }
    }
}

const fn default_beginner_below() -> f64 {
    0.7
}

const fn default_advanced_at() -> f64 {
    1.3
}

const fn default_baseline_relevance() -> f64 {
    0.5
}

const fn default_limit() -> usize {
    5
}

impl Config {
    /// Load configuration: defaults, overlaid by the TOML file at
    /// `explicit_path` (or `$TRAJECTORY_CONFIG`) when one exists, overlaid
    /// by `TRAJECTORY_*` environment variables. The result is validated.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let path = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("TRAJECTORY_CONFIG").ok().map(PathBuf::from));

        let mut config = match path {
            Some(path) if path.exists() => {
                let raw = std::fs::read_to_string(&path).map_err(|err| {
                    TrajectoryError::Config(format!("read config {}: {err}", path.display()))
                })?;
                Self::from_toml_str(&raw)?
            }
            _ => Self::default(),
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document; missing sections and fields keep defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|err| TrajectoryError::Config(format!("parse config: {err}")))
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_f64("TRAJECTORY_DIFFICULTY_BEGINNER_BELOW")? {
            self.difficulty.beginner_below = value;
        }
        if let Some(value) = env_f64("TRAJECTORY_DIFFICULTY_ADVANCED_AT")? {
            self.difficulty.advanced_at = value;
        }
        if let Some(value) = env_f64("TRAJECTORY_RECOMMENDATION_BASELINE_RELEVANCE")? {
            self.recommendation.baseline_relevance = value;
        }
        if let Some(value) = env_usize("TRAJECTORY_RECOMMENDATION_DEFAULT_LIMIT")? {
            self.recommendation.default_limit = value;
        }
        Ok(())
    }

    /// Reject band and baseline values the scoring math cannot honor.
    pub fn validate(&self) -> Result<()> {
        let bands = &self.difficulty;
        if !bands.beginner_below.is_finite() || bands.beginner_below <= 0.0 {
            return Err(TrajectoryError::Config(format!(
                "difficulty.beginner_below must be positive, got {}",
                bands.beginner_below
            )));
        }
        if !bands.advanced_at.is_finite() || bands.advanced_at < bands.beginner_below {
            return Err(TrajectoryError::Config(format!(
                "difficulty.advanced_at ({}) must be at least beginner_below ({})",
                bands.advanced_at, bands.beginner_below
            )));
        }

        let rec = &self.recommendation;
        if !rec.baseline_relevance.is_finite() || !(0.0..=1.0).contains(&rec.baseline_relevance) {
            return Err(TrajectoryError::Config(format!(
                "recommendation.baseline_relevance must be within [0, 1], got {}",
                rec.baseline_relevance
            )));
        }
        if rec.default_limit == 0 {
            return Err(TrajectoryError::Config(
                "recommendation.default_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn env_f64(key: &str) -> Result<Option<f64>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<f64>()
            .map(Some)
            .map_err(|err| TrajectoryError::Config(format!("{key}={raw}: {err}"))),
        Err(_) => Ok(None),
    }
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<usize>()
            .map(Some)
            .map_err(|err| TrajectoryError::Config(format!("{key}={raw}: {err}"))),
        Err(_) => Ok(None),
    }
}
