//! Validation report and summary

use crate::issue::{IssueCategory, Severity, ValidationIssue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Issue counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// All issues
    pub total: usize,
    /// Error-level issues
    pub errors: usize,
    /// Warning-level issues
    pub warnings: usize,
    /// Info-level issues
    pub infos: usize,
    /// Issues per producing check
    pub by_category: BTreeMap<IssueCategory, usize>,
    /// No error-level issue was found
    pub passed: bool,
}

impl ValidationSummary {
    /// Tally a list of issues
    #[must_use]
    pub fn from_issues(issues: &[ValidationIssue]) -> Self {
        let mut summary = Self {
            total: issues.len(),
            ..Self::default()
        };
        for issue in issues {
            match issue.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
                Severity::Info => summary.infos += 1,
            }
            *summary.by_category.entry(issue.category).or_insert(0) += 1;
        }
        summary.passed = summary.errors == 0;
        summary
    }
}

/// Outcome of one validator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Issues in check order
    pub issues: Vec<ValidationIssue>,
    /// Counts
    pub summary: ValidationSummary,
}

impl ValidationReport {
    /// Build report from issues
    #[must_use]
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        let summary = ValidationSummary::from_issues(&issues);
        Self { issues, summary }
    }

    /// No error-level issue was found
    #[inline]
    #[must_use]
    pub fn passed(&self) -> bool {
        self.summary.passed
    }

    /// Whether the report has no issues at all
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues of one severity
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }

    /// Issues from one check
    pub fn in_category(&self, category: IssueCategory) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.category == category)
    }

    /// Issues attached to one item
    pub fn for_item<'a>(&'a self, item_id: &'a str) -> impl Iterator<Item = &'a ValidationIssue> {
        self.issues
            .iter()
            .filter(move |i| i.item_id.as_deref() == Some(item_id))
    }
}
