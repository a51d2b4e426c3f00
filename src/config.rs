//! Configuration for the normalization layer.
//!
//! Handles loading, parsing, and validating YAML configuration. All fields
//! have defaults, so an empty document is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Analog shaping configuration shared by both sticks and the triggers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShapingConfig {
    /// Inner dead-zone radius. Raw magnitudes at or below this are Neutral.
    /// Also the activation threshold for the Axial mode snap.
    #[serde(default = "default_dead_zone")]
    pub dead_zone: f32,

    /// Response-curve exponent for the PowerCurve mode. Values above 1.0
    /// bias output low for low input (fine control near center).
    #[serde(default = "default_power_exponent")]
    pub power_exponent: f32,

    /// Analog trigger actuation threshold. Trigger values above this count
    /// as a pressed trigger button.
    #[serde(default = "default_trigger_threshold")]
    pub trigger_threshold: f32,
}

fn default_dead_zone() -> f32 {
    0.2
}

fn default_power_exponent() -> f32 {
    3.0
}

fn default_trigger_threshold() -> f32 {
    0.25
}

impl Default for ShapingConfig {
    fn default() -> Self {
        Self {
            dead_zone: default_dead_zone(),
            power_exponent: default_power_exponent(),
            trigger_threshold: default_trigger_threshold(),
        }
    }
}

impl ShapingConfig {
    /// Check that every value is inside its documented range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.dead_zone) {
            return Err(ConfigError::OutOfRange {
                field: "dead_zone",
                range: "[0, 1)",
                value: self.dead_zone,
            });
        }
        if !self.power_exponent.is_finite() || self.power_exponent < 1.0 {
            return Err(ConfigError::OutOfRange {
                field: "power_exponent",
                range: "[1, inf)",
                value: self.power_exponent,
            });
        }
        if !(0.0..1.0).contains(&self.trigger_threshold) {
            return Err(ConfigError::OutOfRange {
                field: "trigger_threshold",
                range: "[0, 1)",
                value: self.trigger_threshold,
            });
        }
        Ok(())
    }
}

/// Per-wrapper configuration: fallback policy plus shaping parameters.
///
/// Passed explicitly at wrapper construction; there are no implicit
/// defaults baked into the wrapper itself.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControllerConfig {
    /// Source input from the keyboard key map when the pad is unplugged.
    #[serde(default = "default_true")]
    pub keyboard_fallback: bool,

    #[serde(default)]
    pub shaping: ShapingConfig,
}

fn default_true() -> bool {
    true
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            keyboard_fallback: true,
            shaping: ShapingConfig::default(),
        }
    }
}

impl ControllerConfig {
    /// Parse a configuration from a YAML string and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: ControllerConfig = serde_yaml::from_str(yaml)?;
        config.shaping.validate()?;
        Ok(config)
    }

    /// Load a configuration from a YAML file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }
}
