//! Configuration management for the lunge repetition counter

use crate::constants::{
    DEFAULT_FRONT_VIEW_TOLERANCE, DEFAULT_SMOOTHING_WINDOW, DESCENT_HIP_MAX, DESCENT_HIP_MIN,
    KNEELING_ANGLE_MAX, KNEELING_ANGLE_MIN, RISING_HIP_MAX, RISING_HIP_MIN, STANDING_ANGLE_MAX,
    STANDING_ANGLE_MIN,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Angle smoothing configuration
    pub smoothing: SmoothingConfig,

    /// View classification configuration
    pub view: ViewConfig,

    /// Phase and progress thresholds
    pub thresholds: ThresholdConfig,
}

/// Inclusive range of joint angles in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleRange {
    pub min: f64,
    pub max: f64,
}

impl AngleRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Both ends are inclusive
    #[must_use]
    pub fn contains(&self, angle: f64) -> bool {
        (self.min..=self.max).contains(&angle)
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::ConfigError(format!("{name} bounds must be finite")));
        }
        if self.min > self.max {
            return Err(Error::ConfigError(format!(
                "{name} minimum {} exceeds maximum {}",
                self.min, self.max
            )));
        }
        if self.min < 0.0 || self.max > 180.0 {
            return Err(Error::ConfigError(format!(
                "{name} must lie within 0 to 180 degrees"
            )));
        }
        Ok(())
    }
}

/// Angle smoothing parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Moving average window per joint series
    pub window_size: usize,

    /// Give the image-plane standing angles their own history instead of
    /// sharing the view-dependent one
    pub split_standing_history: bool,
}

/// View classification parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Largest nose-to-shoulder-midpoint distance (pixels) counted as a front view
    pub front_tolerance: f64,
}

/// Angle windows driving the phase transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Knee and hip angles of an upright leg
    pub standing: AngleRange,

    /// Knee angle of the leading leg in a lunge
    pub kneeling: AngleRange,

    /// Hip angle window signalling the subject has almost stood up
    pub rising_hip: AngleRange,

    /// Hip angle window signalling the descent has started
    pub descent_hip: AngleRange,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_SMOOTHING_WINDOW,
            split_standing_history: false,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            front_tolerance: DEFAULT_FRONT_VIEW_TOLERANCE,
        }
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            standing: AngleRange::new(STANDING_ANGLE_MIN, STANDING_ANGLE_MAX),
            kneeling: AngleRange::new(KNEELING_ANGLE_MIN, KNEELING_ANGLE_MAX),
            rising_hip: AngleRange::new(RISING_HIP_MIN, RISING_HIP_MAX),
            descent_hip: AngleRange::new(DESCENT_HIP_MIN, DESCENT_HIP_MAX),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
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
        if self.smoothing.window_size == 0 {
            return Err(Error::ConfigError(
                "Smoothing window size must be greater than 0".to_string(),
            ));
        }

        if !self.view.front_tolerance.is_finite() || self.view.front_tolerance < 0.0 {
            return Err(Error::ConfigError(
                "Front view tolerance must be a non-negative number".to_string(),
            ));
        }

        self.thresholds.standing.validate("Standing range")?;
        self.thresholds.kneeling.validate("Kneeling range")?;
        self.thresholds.rising_hip.validate("Rising hip range")?;
        self.thresholds.descent_hip.validate("Descent hip range")?;

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Lunge Rep Counter Configuration

# Angle smoothing
smoothing:
  window_size: 20
  split_standing_history: false

# View classification
view:
  front_tolerance: 2.0

# Phase thresholds (degrees, inclusive)
thresholds:
  standing:
    min: 140.0
    max: 180.0
  kneeling:
    min: 50.0
    max: 110.0
  rising_hip:
    min: 130.0
    max: 138.0
  descent_hip:
    min: 115.0
    max: 120.0
"#;
