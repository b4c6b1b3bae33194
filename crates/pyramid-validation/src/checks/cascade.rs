//! Objectives linked back up the pyramid

use super::{ValidationCheck, ValidationContext};
use crate::issue::{IssueCategory, ValidationIssue};

/// Team objectives need a commitment or intent; individual objectives need a team objective
#[derive(Debug, Clone, Copy, Default)]
pub struct CascadeCheck;

impl ValidationCheck for CascadeCheck {
    fn category(&self) -> IssueCategory {
        IssueCategory::Cascade
    }

    fn run(&self, ctx: &ValidationContext<'_>, issues: &mut Vec<ValidationIssue>) {
        let category = self.category();

        for objective in &ctx.pyramid.team_objectives {
            if !objective.has_upward_link() {
                issues.push(
                    ValidationIssue::info(
                        category,
                        format!(
                            "Team objective '{}' is not linked to a commitment or intent",
                            objective.name
                        ),
                    )
                    .for_entity(objective)
                    .with_suggestion("Link it to the commitment or intent it moves forward"),
                );
            }
        }

        for objective in &ctx.pyramid.individual_objectives {
            if objective.team_objective_ids.is_empty() {
                issues.push(
                    ValidationIssue::warning(
                        category,
                        format!(
                            "Individual objective '{}' supports no team objective",
                            objective.name
                        ),
                    )
                    .for_entity(objective)
                    .with_suggestion("Link it to at least one team objective"),
                );
            }
        }
    }
}
