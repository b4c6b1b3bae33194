//! Individual validation checks
//!
//! Each check reads the document through a [`ValidationContext`] and appends
//! zero or more issues. Checks never fail: when a precondition is missing
//! (no commitments yet, no drivers yet) the check contributes nothing.

use crate::config::ValidationConfig;
use crate::issue::{IssueCategory, ValidationIssue};
use pyramid_model::StrategyPyramid;
use std::fmt::Debug;

mod balance;
mod cascade;
mod commitment_quality;
mod completeness;
mod language;
mod orphans;
mod structure;
mod weighting;

pub use balance::BalanceCheck;
pub use cascade::CascadeCheck;
pub use commitment_quality::CommitmentQualityCheck;
pub use completeness::{CompletenessCheck, MAX_RECOMMENDED, MIN_RECOMMENDED};
pub use language::{LanguageCheck, INTENT_VANILLA_LIMIT, VISION_VANILLA_LIMIT};
pub use orphans::OrphanCheck;
pub use structure::StructureCheck;
pub use weighting::WeightingCheck;

/// Read-only inputs shared by every check
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    /// Document under validation
    pub pyramid: &'a StrategyPyramid,
    /// Active configuration
    pub config: &'a ValidationConfig,
}

impl<'a> ValidationContext<'a> {
    /// Create context
    #[inline]
    #[must_use]
    pub fn new(pyramid: &'a StrategyPyramid, config: &'a ValidationConfig) -> Self {
        Self { pyramid, config }
    }
}

/// A single rule family of the validator
pub trait ValidationCheck: Debug + Send + Sync {
    /// Category assigned to every issue this check emits
    fn category(&self) -> IssueCategory;

    /// Append issues for the document
    fn run(&self, ctx: &ValidationContext<'_>, issues: &mut Vec<ValidationIssue>);

    /// Convenience: run the check alone and collect its issues
    fn collect(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        self.run(ctx, &mut issues);
        issues
    }
}

/// All checks in reporting order
#[must_use]
pub fn default_checks() -> Vec<Box<dyn ValidationCheck>> {
    vec![
        Box::new(CompletenessCheck),
        Box::new(StructureCheck),
        Box::new(OrphanCheck),
        Box::new(BalanceCheck),
        Box::new(LanguageCheck),
        Box::new(WeightingCheck),
        Box::new(CascadeCheck),
        Box::new(CommitmentQualityCheck),
    ]
}
