//! Commitments are tangible, dated and jargon-free

use super::{ValidationCheck, ValidationContext};
use crate::issue::{IssueCategory, ValidationIssue};
use crate::vocabulary::{has_action_verb, vanilla_matches};

/// Notes commitments without a target date, an action verb, or with jargon in the name
#[derive(Debug, Clone, Copy, Default)]
pub struct CommitmentQualityCheck;

impl ValidationCheck for CommitmentQualityCheck {
    fn category(&self) -> IssueCategory {
        IssueCategory::CommitmentQuality
    }

    fn run(&self, ctx: &ValidationContext<'_>, issues: &mut Vec<ValidationIssue>) {
        let category = self.category();

        for commitment in &ctx.pyramid.iconic_commitments {
            if !commitment.has_target_date() {
                issues.push(
                    ValidationIssue::info(
                        category,
                        format!("Commitment '{}' has no target date", commitment.name),
                    )
                    .for_entity(commitment)
                    .with_suggestion("Set a date so progress can be tracked"),
                );
            }

            let text = format!("{} {}", commitment.name, commitment.description);
            if !has_action_verb(&text) {
                issues.push(
                    ValidationIssue::info(
                        category,
                        format!("Commitment '{}' does not name a tangible action", commitment.name),
                    )
                    .for_entity(commitment)
                    .with_suggestion("Lead with a concrete verb such as deploy, launch or implement"),
                );
            }

            let found = vanilla_matches(&commitment.name);
            if !found.is_empty() {
                issues.push(
                    ValidationIssue::info(
                        category,
                        format!(
                            "Commitment '{}' uses vanilla language: {}",
                            commitment.name,
                            found.join(", ")
                        ),
                    )
                    .for_entity(commitment)
                    .with_suggestion("Name the concrete thing that will exist when it is done"),
                );
            }
        }
    }
}
