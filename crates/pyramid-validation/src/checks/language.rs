//! Corporate jargon and inside-out phrasing

use super::{ValidationCheck, ValidationContext};
use crate::issue::{IssueCategory, ValidationIssue};
use crate::vocabulary::{first_person_matches, vanilla_matches};

/// Vanilla phrases an intent may carry before it is flagged
pub const INTENT_VANILLA_LIMIT: usize = 2;

/// Vanilla phrases a vision statement may carry before it is flagged
pub const VISION_VANILLA_LIMIT: usize = 1;

/// Vanilla-phrase density and first-person planning language
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageCheck;

impl ValidationCheck for LanguageCheck {
    fn category(&self) -> IssueCategory {
        IssueCategory::Language
    }

    fn run(&self, ctx: &ValidationContext<'_>, issues: &mut Vec<ValidationIssue>) {
        let pyramid = ctx.pyramid;
        let category = self.category();

        for intent in &pyramid.strategic_intents {
            let found = vanilla_matches(&intent.statement);
            if found.len() > INTENT_VANILLA_LIMIT {
                issues.push(
                    ValidationIssue::warning(
                        category,
                        format!(
                            "Strategic intent uses {} vanilla phrases: {}",
                            found.len(),
                            found.join(", ")
                        ),
                    )
                    .for_entity(intent)
                    .with_suggestion("Say specifically what will be different and for whom"),
                );
            }

            if !intent.is_stakeholder_voice && !first_person_matches(&intent.statement).is_empty() {
                issues.push(
                    ValidationIssue::info(
                        category,
                        "Strategic intent is written as an internal plan",
                    )
                    .for_entity(intent)
                    .with_suggestion(
                        "Rewrite outside-in: what would a customer or employee say when it is achieved?",
                    ),
                );
            }
        }

        if let Some(vision) = &pyramid.vision {
            for statement in vision.ordered() {
                let found = vanilla_matches(&statement.text);
                if found.len() > VISION_VANILLA_LIMIT {
                    issues.push(
                        ValidationIssue::warning(
                            category,
                            format!(
                                "{} statement uses {} vanilla phrases: {}",
                                statement.statement_type,
                                found.len(),
                                found.join(", ")
                            ),
                        )
                        .for_entity(statement)
                        .with_suggestion("Use language only your organisation could claim"),
                    );
                }
            }
        }
    }
}
