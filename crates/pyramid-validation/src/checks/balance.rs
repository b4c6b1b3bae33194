//! Commitment spread across drivers

use super::{ValidationCheck, ValidationContext};
use crate::issue::{IssueCategory, ValidationIssue};
use pyramid_model::{BalanceStatus, EntityKind};

/// >50 % of commitments on one driver warns, <10 % notes, 0 warns
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceCheck;

impl ValidationCheck for BalanceCheck {
    fn category(&self) -> IssueCategory {
        IssueCategory::Balance
    }

    fn run(&self, ctx: &ValidationContext<'_>, issues: &mut Vec<ValidationIssue>) {
        let category = self.category();

        for finding in ctx.pyramid.balance_findings() {
            let share = &finding.share;
            let issue = match finding.status {
                BalanceStatus::OverConcentrated => ValidationIssue::warning(
                    category,
                    format!(
                        "Driver '{}' is over-concentrated with {:.0}% of commitments ({})",
                        share.driver_name, share.percentage, share.commitments
                    ),
                )
                .with_suggestion("Rebalance commitments or split the driver"),
                BalanceStatus::UnderRepresented => ValidationIssue::info(
                    category,
                    format!(
                        "Driver '{}' is under-represented with {:.0}% of commitments ({})",
                        share.driver_name, share.percentage, share.commitments
                    ),
                )
                .with_suggestion("Confirm the driver gets enough focus"),
                BalanceStatus::NoCommitments => ValidationIssue::warning(
                    category,
                    format!("Driver '{}' has no commitments", share.driver_name),
                )
                .with_suggestion("Add a commitment or reconsider the driver"),
            };
            issues.push(issue.for_item(EntityKind::StrategicDriver, share.driver_id));
        }
    }
}
