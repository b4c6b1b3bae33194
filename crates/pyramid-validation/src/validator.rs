//! Pyramid validator
//!
//! Runs every check over a document snapshot in a fixed order and gathers
//! the issues into a [`ValidationReport`]. Stateless between runs: the same
//! document always yields the same issue list.

use crate::checks::{default_checks, ValidationCheck, ValidationContext};
use crate::config::ValidationConfig;
use crate::report::ValidationReport;
use pyramid_model::StrategyPyramid;

/// Read-only analysis pass over a pyramid document
#[derive(Debug)]
pub struct PyramidValidator {
    config: ValidationConfig,
    checks: Vec<Box<dyn ValidationCheck>>,
}

impl PyramidValidator {
    /// Create validator with default configuration and all checks
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ValidationConfig::default())
    }

    /// Create validator with custom configuration
    #[must_use]
    pub fn with_config(config: ValidationConfig) -> Self {
        Self {
            config: config.normalized(),
            checks: default_checks(),
        }
    }

    /// With weighting threshold
    #[inline]
    #[must_use]
    pub fn with_weighting_threshold(mut self, threshold: f64) -> Self {
        self.config = self.config.with_weighting_threshold(threshold);
        self
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a document
    ///
    /// Never fails; checks whose preconditions are unmet contribute nothing.
    #[must_use]
    pub fn validate(&self, pyramid: &StrategyPyramid) -> ValidationReport {
        let ctx = ValidationContext::new(pyramid, &self.config);
        let mut issues = Vec::new();

        for check in &self.checks {
            let before = issues.len();
            check.run(&ctx, &mut issues);
            tracing::trace!(
                category = %check.category(),
                found = issues.len() - before,
                "validation check finished"
            );
        }

        let report = ValidationReport::from_issues(issues);
        tracing::debug!(
            project = %pyramid.metadata.project_name,
            errors = report.summary.errors,
            warnings = report.summary.warnings,
            infos = report.summary.infos,
            passed = report.summary.passed,
            "validated pyramid"
        );
        report
    }
}

impl Default for PyramidValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate with default configuration
#[must_use]
pub fn validate(pyramid: &StrategyPyramid) -> ValidationReport {
    PyramidValidator::new().validate(pyramid)
}
