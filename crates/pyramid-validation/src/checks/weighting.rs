//! Primary share of weighted commitments

use super::{ValidationCheck, ValidationContext};
use crate::issue::{IssueCategory, ValidationIssue};

/// Warns when secondary alignments dilute the primary driver below the threshold
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightingCheck;

impl ValidationCheck for WeightingCheck {
    fn category(&self) -> IssueCategory {
        IssueCategory::Weighting
    }

    fn run(&self, ctx: &ValidationContext<'_>, issues: &mut Vec<ValidationIssue>) {
        let threshold = ctx.config.weighting_threshold;

        for commitment in &ctx.pyramid.iconic_commitments {
            if commitment.secondary_alignments.is_empty()
                || commitment.is_balanced_weighting(threshold)
            {
                continue;
            }
            issues.push(
                ValidationIssue::warning(
                    self.category(),
                    format!(
                        "Commitment '{}' gives its primary driver only {:.0}% of its weight (minimum {:.0}%)",
                        commitment.name,
                        commitment.primary_share() * 100.0,
                        threshold * 100.0
                    ),
                )
                .for_entity(commitment)
                .with_suggestion(
                    "The primary driver is not a genuine strategic choice; reduce secondary weightings or pick a different primary driver",
                ),
            );
        }
    }
}
