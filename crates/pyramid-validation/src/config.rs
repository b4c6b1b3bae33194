//! Validator configuration
//!
//! Only the weighting threshold is tunable; every other band is a fixed
//! constant of its check.

use pyramid_model::DEFAULT_WEIGHTING_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Validator configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum primary share for weighted commitments, inclusive
    pub weighting_threshold: f64,
}

impl ValidationConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With weighting threshold, clamped into `[0, 1]`
    #[inline]
    #[must_use]
    pub fn with_weighting_threshold(mut self, threshold: f64) -> Self {
        self.weighting_threshold = threshold;
        self.normalized()
    }

    /// Clamp out-of-range values, replacing NaN with the default
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.weighting_threshold = if self.weighting_threshold.is_nan() {
            DEFAULT_WEIGHTING_THRESHOLD
        } else {
            self.weighting_threshold.clamp(0.0, 1.0)
        };
        self
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            weighting_threshold: DEFAULT_WEIGHTING_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_clamped() {
        assert!((ValidationConfig::new().with_weighting_threshold(1.7).weighting_threshold - 1.0).abs() < f64::EPSILON);
        assert!(ValidationConfig::new().with_weighting_threshold(-2.0).weighting_threshold.abs() < f64::EPSILON);
        assert!(
            (ValidationConfig::new()
                .with_weighting_threshold(f64::NAN)
                .weighting_threshold
                - DEFAULT_WEIGHTING_THRESHOLD)
                .abs()
                < f64::EPSILON
        );
    }
}
