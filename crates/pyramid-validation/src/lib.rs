//! Pyramid Validation
//!
//! Rule-based, read-only analysis of a strategic pyramid document.
//!
//! # Overview
//!
//! The validator walks a document snapshot once and reports:
//! - **Completeness**: required tiers and recommended counts
//! - **Structure**: dangling cross-references
//! - **Orphans**: drivers, intents and commitments disconnected from the rest
//! - **Balance**: commitment concentration per driver
//! - **Language**: vanilla corporate phrasing and inside-out intents
//! - **Weighting**: diluted primary drivers
//! - **Cascade**: objectives not linked back up the pyramid
//! - **Commitment quality**: undated or intangible commitments
//!
//! Findings are data ([`ValidationIssue`]), never errors. Only error-level
//! issues fail a report; editing may continue either way.
//!
//! # Example
//!
//! ```rust
//! use pyramid_model::{Metadata, StrategyPyramid};
//! use pyramid_validation::{PyramidValidator, Severity};
//!
//! let doc = StrategyPyramid::new(Metadata::new("FY26 Strategy", "Acme"));
//! let report = PyramidValidator::new().validate(&doc);
//!
//! assert!(!report.passed());
//! assert!(report.with_severity(Severity::Error).count() >= 1);
//! ```

#![warn(missing_docs)]

pub mod checks;
pub mod config;
pub mod issue;
pub mod report;
pub mod validator;
pub mod vocabulary;

// Re-exports
pub use checks::{
    BalanceCheck, CascadeCheck, CommitmentQualityCheck, CompletenessCheck, LanguageCheck,
    OrphanCheck, StructureCheck, ValidationCheck, ValidationContext, WeightingCheck,
};
pub use config::ValidationConfig;
pub use issue::{IssueCategory, Severity, ValidationIssue};
pub use report::{ValidationReport, ValidationSummary};
pub use validator::{validate, PyramidValidator};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for validating documents
    pub use crate::{
        IssueCategory, PyramidValidator, Severity, ValidationConfig, ValidationIssue,
        ValidationReport,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
