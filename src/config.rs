//! Configuration management for the avatar pose engine

use crate::constants::{
    DEFAULT_MIN_PART_SCORE, DEFAULT_MIN_POSE_SCORE, DEFAULT_X_OFFSET, DEFAULT_Y_OFFSET,
    SMOOTHING_WINDOW,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Smoothing filter configuration
    pub smoothing: SmoothingConfig,

    /// Confidence threshold configuration
    pub confidence: ConfidenceConfig,

    /// Avatar rig placement configuration
    pub rig: RigConfig,
}

/// Smoothing filter parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Number of recent accepted samples averaged per body part
    pub window: usize,
}

/// Confidence thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Per-part confidence threshold (0.0-1.0); detections at or below it
    /// are ignored
    pub min_part_score: f64,

    /// Whole-pose acceptance threshold (0.0-1.0); frames below it are
    /// rejected before the engine runs
    pub min_pose_score: f64,
}

/// Avatar rig placement parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Horizontal offset subtracted from the head center
    pub x_offset: f64,

    /// Vertical offset added to the negated head center
    pub y_offset: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            window: SMOOTHING_WINDOW,
        }
    }
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            min_part_score: DEFAULT_MIN_PART_SCORE,
            min_pose_score: DEFAULT_MIN_POSE_SCORE,
        }
    }
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            x_offset: DEFAULT_X_OFFSET,
            y_offset: DEFAULT_Y_OFFSET,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.smoothing.window == 0 {
            return Err(Error::ConfigError(
                "Smoothing window must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.confidence.min_part_score) {
            return Err(Error::ConfigError(
                "Part score threshold must be between 0.0 and 1.0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.confidence.min_pose_score) {
            return Err(Error::ConfigError(
                "Pose score threshold must be between 0.0 and 1.0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Avatar Pose Engine Configuration

# Keypoint smoothing
smoothing:
  window: 4

# Confidence thresholds
confidence:
  min_part_score: 0.5
  min_pose_score: 0.1

# Avatar rig placement
rig:
  x_offset: 100.0
  y_offset: 25.0
"#;
