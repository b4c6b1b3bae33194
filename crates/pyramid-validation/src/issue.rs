//! Validation issues
//!
//! Issues are data, never errors: callers render or ignore them and editing
//! continues regardless.

use pyramid_model::{Entity, EntityKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious an issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Marks the document as failed
    Error,
    /// Should be addressed before the document is finalised
    Warning,
    /// Coaching note
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        })
    }
}

/// Which check produced an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    /// Required tiers and recommended counts
    Completeness,
    /// Cross-references resolve
    Structure,
    /// Items nothing points to, or that point to nothing
    Orphans,
    /// Commitment spread across drivers
    Balance,
    /// Corporate jargon and inside-out phrasing
    Language,
    /// Primary share of weighted commitments
    Weighting,
    /// Objectives linked back up the pyramid
    Cascade,
    /// Commitments are tangible and dated
    CommitmentQuality,
}

impl IssueCategory {
    /// Stable snake_case name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            IssueCategory::Completeness => "completeness",
            IssueCategory::Structure => "structure",
            IssueCategory::Orphans => "orphans",
            IssueCategory::Balance => "balance",
            IssueCategory::Language => "language",
            IssueCategory::Weighting => "weighting",
            IssueCategory::Cascade => "cascade",
            IssueCategory::CommitmentQuality => "commitment_quality",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding of the validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Severity
    pub severity: Severity,
    /// Producing check
    pub category: IssueCategory,
    /// Human-readable description
    pub message: String,
    /// Id of the offending item, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    /// Tier of the offending item, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<EntityKind>,
    /// How to fix it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Create issue with explicit severity
    #[must_use]
    pub fn new(severity: Severity, category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            item_id: None,
            item_type: None,
            suggestion: None,
        }
    }

    /// Create error
    #[inline]
    #[must_use]
    pub fn error(category: IssueCategory, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, category, message)
    }

    /// Create warning
    #[inline]
    #[must_use]
    pub fn warning(category: IssueCategory, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, category, message)
    }

    /// Create info note
    #[inline]
    #[must_use]
    pub fn info(category: IssueCategory, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, category, message)
    }

    /// Attach the offending entity
    #[inline]
    #[must_use]
    pub fn for_entity<E: Entity>(self, entity: &E) -> Self {
        self.for_item(E::KIND, entity.id())
    }

    /// Attach an item by kind and id
    #[inline]
    #[must_use]
    pub fn for_item(mut self, kind: EntityKind, id: impl fmt::Display) -> Self {
        self.item_type = Some(kind);
        self.item_id = Some(id.to_string());
        self
    }

    /// Attach a suggestion
    #[inline]
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.category, self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (suggestion: {suggestion})")?;
        }
        Ok(())
    }
}
