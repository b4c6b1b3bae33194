//! Required tiers and recommended counts

use super::{ValidationCheck, ValidationContext};
use crate::issue::{IssueCategory, ValidationIssue};
use pyramid_model::EntityKind;

/// Fewest values/drivers a focused strategy should have
pub const MIN_RECOMMENDED: usize = 3;

/// Most values/drivers a focused strategy should have
pub const MAX_RECOMMENDED: usize = 5;

/// Vision present, values/drivers within 3-5, intents and commitments present
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletenessCheck;

impl CompletenessCheck {
    fn check_recommended_range(
        count: usize,
        plural: &str,
        kind: EntityKind,
        issues: &mut Vec<ValidationIssue>,
    ) {
        let category = IssueCategory::Completeness;
        if count == 0 {
            issues.push(
                ValidationIssue::error(category, format!("No {plural} defined"))
                    .with_suggestion(format!(
                        "Define {MIN_RECOMMENDED}-{MAX_RECOMMENDED} {plural} ({kind} tier is required)"
                    )),
            );
        } else if count < MIN_RECOMMENDED {
            issues.push(
                ValidationIssue::warning(
                    category,
                    format!("Only {count} {plural} defined; {MIN_RECOMMENDED}-{MAX_RECOMMENDED} recommended"),
                )
                .with_suggestion(format!("Add {} more", MIN_RECOMMENDED - count)),
            );
        } else if count > MAX_RECOMMENDED {
            issues.push(
                ValidationIssue::warning(
                    category,
                    format!("{count} {plural} defined; {MIN_RECOMMENDED}-{MAX_RECOMMENDED} recommended"),
                )
                .with_suggestion(format!(
                    "Consolidate to at most {MAX_RECOMMENDED} so the strategy stays focused"
                )),
            );
        }
    }
}

impl ValidationCheck for CompletenessCheck {
    fn category(&self) -> IssueCategory {
        IssueCategory::Completeness
    }

    fn run(&self, ctx: &ValidationContext<'_>, issues: &mut Vec<ValidationIssue>) {
        let pyramid = ctx.pyramid;
        let category = self.category();

        if !pyramid.has_vision() {
            issues.push(
                ValidationIssue::error(category, "No vision defined")
                    .with_suggestion("Add at least a vision or mission statement"),
            );
        }

        Self::check_recommended_range(pyramid.values.len(), "values", EntityKind::Value, issues);
        Self::check_recommended_range(
            pyramid.strategic_drivers.len(),
            "strategic drivers",
            EntityKind::StrategicDriver,
            issues,
        );

        if pyramid.strategic_intents.is_empty() {
            issues.push(
                ValidationIssue::error(category, "No strategic intents defined")
                    .with_suggestion("Describe what success looks like for each driver"),
            );
        }

        if pyramid.iconic_commitments.is_empty() {
            issues.push(
                ValidationIssue::warning(category, "No iconic commitments defined")
                    .with_suggestion("Add tangible, dated commitments that make the drivers real"),
            );
        }
    }
}
