// Step-generation thresholds.
//
// Every tunable of the validator lives in `StepConfig`. It can be built in
// code, taken from `Default`, or loaded from JSON (missing fields fall back
// to the defaults, so a config file only needs the values it changes).
//
// A malformed config is a caller error and is rejected up front by
// `validate()`, before any step is generated: the walk itself has no failure
// modes. `Walker::new` and `run` both call it.

use crate::pad::{self, Panel};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building or loading a `StepConfig`, or when a run is
/// requested with an unusable shape.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error(
        "max_stretch_distance {value} is too short to open on every panel (needs at least {required:.3})"
    )]
    StretchTooShort { value: f64, required: f64 },

    #[error("cannot open on {first:?} and {second:?}: panels must be in different columns within max_stretch_distance")]
    InvalidOpening { first: Panel, second: Panel },

    #[error("a chart needs at least the two opening steps, got {steps}")]
    ChartTooShort { steps: usize },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Thresholds consulted by the step validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepConfig {
    /// Farthest a single foot may travel in one step (pad units).
    pub max_move_distance: f64,
    /// Farthest apart the two feet may stand.
    pub max_stretch_distance: f64,
    /// Farthest apart the feet may stand while crossed (|rotation| > π/2).
    pub max_cross_distance: f64,
    /// Allow holding or deepening a crossover freely.
    pub allow_advanced_crossovers: bool,
    /// Consecutive no-op steps allowed before the foot must move.
    pub max_stand_count: u32,
}

impl Default for StepConfig {
    fn default() -> Self {
        StepConfig {
            max_move_distance: 2.6,
            max_stretch_distance: 2.6,
            max_cross_distance: 1.5,
            allow_advanced_crossovers: false,
            max_stand_count: 3,
        }
    }
}

impl StepConfig {
    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: StepConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every threshold is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let distances = [
            ("max_move_distance", self.max_move_distance),
            ("max_stretch_distance", self.max_stretch_distance),
            ("max_cross_distance", self.max_cross_distance),
        ];
        for (field, value) in distances {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let required = min_opening_stretch();
        if pad::is_below(self.max_stretch_distance, required) {
            return Err(ConfigError::StretchTooShort {
                value: self.max_stretch_distance,
                required,
            });
        }
        Ok(())
    }
}

/// Smallest stretch that still gives every panel a partner with a different
/// x coordinate, which the opening stance needs.
pub fn min_opening_stretch() -> f64 {
    Panel::ALL
        .iter()
        .map(|&first| {
            Panel::ALL
                .iter()
                .filter(|p| p.x() != first.x())
                .map(|&p| pad::distance(first, p))
                .fold(f64::INFINITY, f64::min)
        })
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(StepConfig::default().validate().is_ok());
    }

    #[test]
    fn test_min_opening_stretch() {
        // The up/down arrows are √2 away from their nearest other column.
        assert!((min_opening_stretch() - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_non_positive() {
        let config = StepConfig {
            max_move_distance: -1.0,
            ..Default::default()
        };
        match config.validate() {
            Err(ConfigError::NonPositive { field, value }) => {
                assert_eq!(field, "max_move_distance");
                assert_eq!(value, -1.0);
            }
            other => panic!("expected NonPositive, got {other:?}"),
        }

        let config = StepConfig {
            max_cross_distance: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "max_cross_distance", .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        let config = StepConfig {
            max_stretch_distance: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { field: "max_stretch_distance" })
        ));
    }

    #[test]
    fn test_rejects_short_stretch() {
        let config = StepConfig {
            max_stretch_distance: 1.2,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StretchTooShort { .. })
        ));

        // Exactly √2 is enough.
        let config = StepConfig {
            max_stretch_distance: 2f64.sqrt(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = StepConfig::from_json(r#"{"allow_advanced_crossovers": true, "max_stand_count": 1}"#)
            .unwrap();
        assert!(config.allow_advanced_crossovers);
        assert_eq!(config.max_stand_count, 1);
        assert_eq!(config.max_move_distance, 2.6);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            StepConfig::from_json(r#"{"max_move_distance": 0}"#),
            Err(ConfigError::NonPositive { .. })
        ));
        assert!(matches!(
            StepConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::ChartTooShort { steps: 1 };
        assert_eq!(
            err.to_string(),
            "a chart needs at least the two opening steps, got 1"
        );
    }
}
