#![forbid(unsafe_code)]

//! Timing and input tuning as data.
//!
//! [`BookConfig`] groups every tunable constant of the book runtime so it
//! can be loaded from TOML or JSON at startup.
//!
//! ```toml
//! [timing]
//! settle_delay_ms = 800
//! counter_duration_ms = 1000
//!
//! [input]
//! wheel_threshold = 50.0
//! ```
//!
//! # Defaults
//!
//! Every field defaults to the value the book ships with, so
//! `BookConfig::default()` and an empty file behave identically.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    /// Delays and durations.
    pub timing: TimingConfig,

    /// Gesture thresholds.
    pub input: InputConfig,
}

/// Delays and durations, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Wait after flipping before the new faces animate in. Default: 800.
    pub settle_delay_ms: u64,

    /// Wait after startup before the first faces animate in. Default: 500.
    pub intro_delay_ms: u64,

    /// Delay before split-text characters activate. Default: 100.
    pub split_char_delay_ms: u64,

    /// Per-character transition offset inside split text. Default: 50.
    pub split_char_stagger_ms: u64,

    /// Skill item delay when none (or zero) is configured. Default: 400.
    pub default_skill_delay_ms: u64,

    /// Length of a skill counter run. Default: 1000.
    pub counter_duration_ms: u64,

    /// Rendering frame interval used to sample counters. Default: 16.
    pub frame_interval_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 800,
            intro_delay_ms: 500,
            split_char_delay_ms: 100,
            split_char_stagger_ms: 50,
            default_skill_delay_ms: 400,
            counter_duration_ms: 1000,
            frame_interval_ms: 16,
        }
    }
}

impl TimingConfig {
    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    #[must_use]
    pub fn intro_delay(&self) -> Duration {
        Duration::from_millis(self.intro_delay_ms)
    }

    #[must_use]
    pub fn split_char_delay(&self) -> Duration {
        Duration::from_millis(self.split_char_delay_ms)
    }

    #[must_use]
    pub fn split_char_stagger(&self) -> Duration {
        Duration::from_millis(self.split_char_stagger_ms)
    }

    #[must_use]
    pub fn default_skill_delay(&self) -> Duration {
        Duration::from_millis(self.default_skill_delay_ms)
    }

    #[must_use]
    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }

    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

/// Gesture thresholds, in input units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Accumulated wheel delta that triggers a page turn. Default: 50.
    pub wheel_threshold: f64,

    /// Swipe distance a touch must exceed to turn a page. Default: 60.
    pub swipe_threshold: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            wheel_threshold: 50.0,
            swipe_threshold: 60.0,
        }
    }
}

/// Errors produced while loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl BookConfig {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.checked()
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.checked()
    }

    /// Load from a file; `.json` files are parsed as JSON, anything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.timing.settle_delay_ms == 0 {
            errors.push("timing.settle_delay_ms must be > 0".into());
        }
        if self.timing.counter_duration_ms == 0 {
            errors.push("timing.counter_duration_ms must be > 0".into());
        }
        // A zero frame interval would reschedule counter frames forever at the same instant.
        if self.timing.frame_interval_ms == 0 {
            errors.push("timing.frame_interval_ms must be > 0".into());
        }

        if self.input.wheel_threshold.is_nan() || self.input.wheel_threshold <= 0.0 {
            errors.push(format!(
                "input.wheel_threshold must be > 0, got {}",
                self.input.wheel_threshold
            ));
        }
        if self.input.swipe_threshold.is_nan() || self.input.swipe_threshold < 0.0 {
            errors.push(format!(
                "input.swipe_threshold must be >= 0, got {}",
                self.input.swipe_threshold
            ));
        }

        errors
    }

    fn checked(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(BookConfig::default().validate().is_empty());
    }

    #[test]
    fn default_timings() {
        let t = TimingConfig::default();
        assert_eq!(t.settle_delay(), Duration::from_millis(800));
        assert_eq!(t.intro_delay(), Duration::from_millis(500));
        assert_eq!(t.split_char_delay(), Duration::from_millis(100));
        assert_eq!(t.default_skill_delay(), Duration::from_millis(400));
        assert_eq!(t.counter_duration(), Duration::from_secs(1));
    }

    #[test]
    fn empty_toml_is_default() {
        let config = BookConfig::from_toml_str("").expect("empty is valid");
        assert_eq!(config, BookConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_given_fields() {
        let config = BookConfig::from_toml_str(
            "[timing]\nsettle_delay_ms = 1200\n\n[input]\nswipe_threshold = 40.0\n",
        )
        .expect("valid");
        assert_eq!(config.timing.settle_delay_ms, 1200);
        assert_eq!(config.timing.counter_duration_ms, 1000);
        assert_eq!(config.input.swipe_threshold, 40.0);
        assert_eq!(config.input.wheel_threshold, 50.0);
    }

    #[test]
    fn json_round_trips_defaults() {
        let json = serde_json::to_string(&BookConfig::default()).expect("serialize");
        let parsed = BookConfig::from_json_str(&json).expect("parse");
        assert_eq!(parsed, BookConfig::default());
    }

    #[test]
    fn invalid_values_are_collected() {
        let err = BookConfig::from_toml_str(
            "[timing]\nframe_interval_ms = 0\n\n[input]\nwheel_threshold = -1.0\n",
        )
        .expect_err("invalid");
        match err {
            ConfigError::Validation(errors) => {
                assert_eq!(errors.len(), 2, "{errors:?}");
                assert!(errors[0].contains("frame_interval_ms"));
                assert!(errors[1].contains("wheel_threshold"));
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn validation_error_display_joins_messages() {
        let err = ConfigError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "validation errors: a; b");
    }

    #[test]
    fn loads_json_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("book.json");
        std::fs::write(&path, r#"{"timing":{"intro_delay_ms":250}}"#).expect("write");
        let config = BookConfig::from_file(&path).expect("load");
        assert_eq!(config.timing.intro_delay_ms, 250);
    }
}
