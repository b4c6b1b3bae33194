//! Error types for the pyramid manager
//!
//! Provides error handling for:
//! - Writes that would create a dangling mandatory reference
//! - Alignment edits that contradict the commitment's primary driver
//! - Model construction failures (weighting range, horizon labels)
//! - Malformed ingestion payloads
//!
//! Missing ids on update/remove are not errors; those calls report
//! `false` instead.

use pyramid_model::{CommitmentId, DriverId, EntityKind, ModelError};
use std::fmt;

/// Main manager error type
#[derive(Debug, thiserror::Error)]
pub enum PyramidError {
    /// A write referenced an entity that does not exist
    #[error("{kind} not found: {id}")]
    ReferenceNotFound {
        /// Tier of the missing entity
        kind: EntityKind,
        /// Identifier or name that failed to resolve
        id: String,
    },

    /// Secondary alignment pointing at the commitment's own primary driver
    #[error("commitment {commitment} cannot align secondarily to its primary driver {driver}")]
    SelfAlignment {
        /// Commitment being edited
        commitment: CommitmentId,
        /// Its primary driver
        driver: DriverId,
    },

    /// Secondary alignment already present
    #[error("commitment {commitment} is already aligned to driver {driver}")]
    DuplicateAlignment {
        /// Commitment being edited
        commitment: CommitmentId,
        /// Driver already aligned
        driver: DriverId,
    },

    /// Model construction or decoding failed
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// Ingestion payload could not be interpreted
    #[error("invalid draft: {0}")]
    InvalidDraft(String),
}

impl PyramidError {
    /// Create reference error
    #[inline]
    pub fn reference_not_found(kind: EntityKind, id: impl fmt::Display) -> Self {
        Self::ReferenceNotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Check if the error is a dangling-reference rejection
    #[inline]
    #[must_use]
    pub fn is_reference_error(&self) -> bool {
        matches!(self, Self::ReferenceNotFound { .. })
    }
}

/// Result alias for manager operations
pub type Result<T, E = PyramidError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_error_names_kind_and_id() {
        let id = DriverId::new();
        let err = PyramidError::reference_not_found(EntityKind::StrategicDriver, id);
        assert_eq!(err.to_string(), format!("strategic_driver not found: {id}"));
        assert!(err.is_reference_error());
    }

    #[test]
    fn model_errors_convert() {
        let err: PyramidError = ModelError::InvalidWeighting(2.0).into();
        assert!(matches!(err, PyramidError::Model(_)));
        assert!(!err.is_reference_error());
    }
}
