//! Items nothing points to, or that point to nothing

use super::{ValidationCheck, ValidationContext};
use crate::issue::{IssueCategory, ValidationIssue};

/// Drivers without intents, intents without commitments, commitments without intents
#[derive(Debug, Clone, Copy, Default)]
pub struct OrphanCheck;

impl ValidationCheck for OrphanCheck {
    fn category(&self) -> IssueCategory {
        IssueCategory::Orphans
    }

    fn run(&self, ctx: &ValidationContext<'_>, issues: &mut Vec<ValidationIssue>) {
        let pyramid = ctx.pyramid;
        let category = self.category();

        for driver in pyramid.drivers_without_intents() {
            issues.push(
                ValidationIssue::warning(
                    category,
                    format!("Driver '{}' has no strategic intents", driver.name),
                )
                .for_entity(driver)
                .with_suggestion("Describe what success looks like for this driver"),
            );
        }

        for intent in pyramid.orphaned_intents() {
            issues.push(
                ValidationIssue::warning(
                    category,
                    format!(
                        "Strategic intent '{}' is not delivered by any commitment",
                        intent.statement
                    ),
                )
                .for_entity(intent)
                .with_suggestion("Link a commitment that makes this intent real"),
            );
        }

        for commitment in pyramid.commitments_without_intents() {
            issues.push(
                ValidationIssue::warning(
                    category,
                    format!("Commitment '{}' is not linked to any intent", commitment.name),
                )
                .for_entity(commitment)
                .with_suggestion("Link the commitment to the intents it delivers"),
            );
        }
    }
}
