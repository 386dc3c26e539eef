use std::num::NonZeroUsize;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::validation::{is_valid_match_minimum, is_valid_multigram_length};

/// Default width of each multigram window
pub const DEFAULT_MULTIGRAM_LENGTH: usize = 2;

/// Default minimum Dice coefficient for a resolver match to be reported
pub const DEFAULT_MATCH_MINIMUM: f64 = 0.5;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid multigram length: {0} (must be at least 1)")]
    InvalidMultigramLength(usize),

    #[error("Invalid match minimum: {0} (must be within [0, 1])")]
    InvalidMatchMinimum(f64),

    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings shared by the splitter, the coefficient calculator and the overlap resolver.
///
/// Values are validated on every construction path, including deserialization,
/// so a `DiceConfig` in hand is always usable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct DiceConfig {
    multigram_length: usize,
    match_minimum: f64,
}

/// Unvalidated mirror of [`DiceConfig`] used as the deserialization target
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default = "default_multigram_length")]
    multigram_length: usize,
    #[serde(default = "default_match_minimum")]
    match_minimum: f64,
}

fn default_multigram_length() -> usize {
    DEFAULT_MULTIGRAM_LENGTH
}

fn default_match_minimum() -> f64 {
    DEFAULT_MATCH_MINIMUM
}

impl TryFrom<RawConfig> for DiceConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.multigram_length, raw.match_minimum)
    }
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            multigram_length: DEFAULT_MULTIGRAM_LENGTH,
            match_minimum: DEFAULT_MATCH_MINIMUM,
        }
    }
}

impl DiceConfig {
    /// Create a configuration, rejecting a zero window or a threshold outside `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMultigramLength` if `multigram_length` is zero, or
    /// `ConfigError::InvalidMatchMinimum` if `match_minimum` is NaN or outside `[0, 1]`.
    pub fn new(multigram_length: usize, match_minimum: f64) -> Result<Self, ConfigError> {
        Self::default()
            .with_multigram_length(multigram_length)?
            .with_match_minimum(match_minimum)
    }

    /// Replace the multigram window length.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMultigramLength` if `multigram_length` is zero.
    pub fn with_multigram_length(mut self, multigram_length: usize) -> Result<Self, ConfigError> {
        if !is_valid_multigram_length(multigram_length) {
            return Err(ConfigError::InvalidMultigramLength(multigram_length));
        }
        self.multigram_length = multigram_length;
        Ok(self)
    }

    /// Replace the match threshold.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMatchMinimum` if `match_minimum` is NaN or outside `[0, 1]`.
    pub fn with_match_minimum(mut self, match_minimum: f64) -> Result<Self, ConfigError> {
        if !is_valid_match_minimum(match_minimum) {
            return Err(ConfigError::InvalidMatchMinimum(match_minimum));
        }
        self.match_minimum = match_minimum;
        Ok(self)
    }

    #[must_use]
    pub fn multigram_length(&self) -> NonZeroUsize {
        // Zero is rejected by every constructor
        NonZeroUsize::new(self.multigram_length).unwrap_or(NonZeroUsize::MIN)
    }

    #[must_use]
    pub fn match_minimum(&self) -> f64 {
        self.match_minimum
    }

    /// Load a configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file cannot be read, or a parse or
    /// validation error if its content is not a valid configuration.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a configuration from a JSON string.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the JSON is malformed or holds out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration to pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DiceConfig::default();
        assert_eq!(config.multigram_length().get(), 2);
        assert!((config.match_minimum() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_zero_multigram_length() {
        let err = DiceConfig::new(0, 0.5).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMultigramLength(0)));
    }

    #[test]
    fn test_rejects_out_of_range_match_minimum() {
        assert!(matches!(
            DiceConfig::new(2, 1.5),
            Err(ConfigError::InvalidMatchMinimum(_))
        ));
        assert!(matches!(
            DiceConfig::new(2, -0.1),
            Err(ConfigError::InvalidMatchMinimum(_))
        ));
        assert!(matches!(
            DiceConfig::new(2, f64::NAN),
            Err(ConfigError::InvalidMatchMinimum(_))
        ));
    }

    #[test]
    fn test_boundary_values_accepted() {
        assert!(DiceConfig::new(1, 0.0).is_ok());
        assert!(DiceConfig::new(1, 1.0).is_ok());
    }

    #[test]
    fn test_failed_builder_leaves_no_partial_state() {
        let config = DiceConfig::new(3, 0.7).unwrap();
        assert!(config.with_match_minimum(2.0).is_err());
        assert_eq!(config.multigram_length().get(), 3);
        assert!((config.match_minimum() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_from_json_with_defaults() {
        let config = DiceConfig::from_json(r#"{"multigram_length": 3}"#).unwrap();
        assert_eq!(config.multigram_length().get(), 3);
        assert!((config.match_minimum() - DEFAULT_MATCH_MINIMUM).abs() < 1e-12);

        let config = DiceConfig::from_json("{}").unwrap();
        assert_eq!(config, DiceConfig::default());
    }

    #[test]
    fn test_from_json_validates() {
        assert!(DiceConfig::from_json(r#"{"multigram_length": 0}"#).is_err());
        assert!(DiceConfig::from_json(r#"{"match_minimum": 3.0}"#).is_err());
        assert!(DiceConfig::from_json(r#"{"window": 2}"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = DiceConfig::new(4, 0.25).unwrap();
        let json = config.to_json().unwrap();
        assert!(json.contains("\"multigram_length\": 4"));
        assert_eq!(DiceConfig::from_json(&json).unwrap(), config);
    }
}
