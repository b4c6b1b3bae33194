//! Cross-reference resolution
//!
//! The manager only checks mandatory references at write time, and removal
//! never cascades, so dangling ids are expected here.

use super::{ValidationCheck, ValidationContext};
use crate::issue::{IssueCategory, ValidationIssue};

/// Every stored id resolves against the current document
#[derive(Debug, Clone, Copy, Default)]
pub struct StructureCheck;

impl ValidationCheck for StructureCheck {
    fn category(&self) -> IssueCategory {
        IssueCategory::Structure
    }

    #[allow(clippy::too_many_lines)]
    fn run(&self, ctx: &ValidationContext<'_>, issues: &mut Vec<ValidationIssue>) {
        let pyramid = ctx.pyramid;
        let category = self.category();

        for intent in &pyramid.strategic_intents {
            if pyramid.driver(intent.driver_id).is_none() {
                issues.push(
                    ValidationIssue::error(
                        category,
                        format!(
                            "Strategic intent references missing driver {}",
                            intent.driver_id
                        ),
                    )
                    .for_entity(intent)
                    .with_suggestion("Reassign the intent to an existing driver"),
                );
            }
        }

        for commitment in &pyramid.iconic_commitments {
            if pyramid.driver(commitment.primary_driver_id).is_none() {
                issues.push(
                    ValidationIssue::error(
                        category,
                        format!(
                            "Commitment '{}' references missing primary driver {}",
                            commitment.name, commitment.primary_driver_id
                        ),
                    )
                    .for_entity(commitment)
                    .with_suggestion("Choose an existing driver as the primary driver"),
                );
            }

            for alignment in &commitment.secondary_alignments {
                if alignment.driver_id == commitment.primary_driver_id {
                    issues.push(
                        ValidationIssue::warning(
                            category,
                            format!(
                                "Commitment '{}' lists its primary driver as a secondary alignment",
                                commitment.name
                            ),
                        )
                        .for_entity(commitment)
                        .with_suggestion("Remove the duplicate secondary alignment"),
                    );
                } else if pyramid.driver(alignment.driver_id).is_none() {
                    issues.push(
                        ValidationIssue::warning(
                            category,
                            format!(
                                "Commitment '{}' has a secondary alignment to missing driver {}",
                                commitment.name, alignment.driver_id
                            ),
                        )
                        .for_entity(commitment)
                        .with_suggestion("Remove the alignment or point it at an existing driver"),
                    );
                }
            }

            for intent_id in &commitment.primary_intent_ids {
                if pyramid.intent(*intent_id).is_none() {
                    issues.push(
                        ValidationIssue::warning(
                            category,
                            format!(
                                "Commitment '{}' references missing intent {intent_id}",
                                commitment.name
                            ),
                        )
                        .for_entity(commitment),
                    );
                }
            }
        }

        for enabler in &pyramid.enablers {
            for driver_id in &enabler.driver_ids {
                if pyramid.driver(*driver_id).is_none() {
                    issues.push(
                        ValidationIssue::warning(
                            category,
                            format!(
                                "Enabler '{}' references missing driver {driver_id}",
                                enabler.name
                            ),
                        )
                        .for_entity(enabler),
                    );
                }
            }
        }

        for behaviour in &pyramid.behaviours {
            for value_id in &behaviour.value_ids {
                if pyramid.value(*value_id).is_none() {
                    issues.push(
                        ValidationIssue::warning(
                            category,
                            format!("Behaviour references missing value {value_id}"),
                        )
                        .for_entity(behaviour),
                    );
                }
            }
        }

        for objective in &pyramid.team_objectives {
            if let Some(commitment_id) = objective.primary_commitment_id {
                if pyramid.commitment(commitment_id).is_none() {
                    issues.push(
                        ValidationIssue::warning(
                            category,
                            format!(
                                "Team objective '{}' references missing commitment {commitment_id}",
                                objective.name
                            ),
                        )
                        .for_entity(objective),
                    );
                }
            }
            if let Some(intent_id) = objective.primary_intent_id {
                if pyramid.intent(intent_id).is_none() {
                    issues.push(
                        ValidationIssue::warning(
                            category,
                            format!(
                                "Team objective '{}' references missing intent {intent_id}",
                                objective.name
                            ),
                        )
                        .for_entity(objective),
                    );
                }
            }
        }

        for objective in &pyramid.individual_objectives {
            for team_id in &objective.team_objective_ids {
                if pyramid.team_objective(*team_id).is_none() {
                    issues.push(
                        ValidationIssue::warning(
                            category,
                            format!(
                                "Individual objective '{}' references missing team objective {team_id}",
                                objective.name
                            ),
                        )
                        .for_entity(objective),
                    );
                }
            }
        }
    }
}
