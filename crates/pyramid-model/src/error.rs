//! Errors raised while constructing or decoding model values

/// Model-level construction and decoding errors
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Secondary weighting outside the closed unit interval
    #[error("weighting must be a finite number within [0, 1], got {0}")]
    InvalidWeighting(f64),

    /// Horizon label other than H1/H2/H3
    #[error("unknown horizon '{0}' (expected H1, H2 or H3)")]
    UnknownHorizon(String),

    /// Vision statement type not in the fixed vocabulary
    #[error("unknown vision statement type '{0}'")]
    UnknownStatementType(String),

    /// Document could not be encoded or decoded
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
