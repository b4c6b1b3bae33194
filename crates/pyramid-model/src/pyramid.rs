//! The pyramid document: metadata plus one list per tier
//!
//! The whole document round-trips through a single JSON object. References
//! between tiers stay plain identifiers and are resolved on demand by the
//! lookup helpers; nothing is restored as a pointer.

use crate::commitment::IconicCommitment;
use crate::error::ModelError;
use crate::objectives::{IndividualObjective, TeamObjective};
use crate::strategy::{Enabler, StrategicDriver, StrategicIntent};
use crate::values::{Behaviour, Value};
use crate::vision::Vision;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document-level metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Project name
    pub project_name: String,
    /// Organisation the strategy belongs to
    #[serde(default)]
    pub organization: String,
    /// Facilitator or author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Document version label
    #[serde(default = "default_version")]
    pub version: String,
    /// When the document was created
    pub created_at: DateTime<Utc>,
    /// When the document was last modified
    pub updated_at: DateTime<Utc>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl Metadata {
    /// Create metadata stamped now
    #[must_use]
    pub fn new(project_name: impl Into<String>, organization: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            project_name: project_name.into(),
            organization: organization.into(),
            created_by: None,
            description: None,
            version: default_version(),
            created_at: now,
            updated_at: now,
        }
    }

    /// With author
    #[inline]
    #[must_use]
    pub fn with_created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = Some(created_by.into());
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Number of entities per tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    /// Vision statements
    pub vision_statements: usize,
    /// Values
    pub values: usize,
    /// Behaviours
    pub behaviours: usize,
    /// Strategic drivers
    pub strategic_drivers: usize,
    /// Strategic intents
    pub strategic_intents: usize,
    /// Enablers
    pub enablers: usize,
    /// Iconic commitments
    pub iconic_commitments: usize,
    /// Team objectives
    pub team_objectives: usize,
    /// Individual objectives
    pub individual_objectives: usize,
}

impl TierCounts {
    /// Total entity count across tiers
    #[must_use]
    pub fn total(&self) -> usize {
        self.vision_statements
            + self.values
            + self.behaviours
            + self.strategic_drivers
            + self.strategic_intents
            + self.enablers
            + self.iconic_commitments
            + self.team_objectives
            + self.individual_objectives
    }
}

/// Complete strategic pyramid document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyPyramid {
    /// Document metadata
    pub metadata: Metadata,
    /// Vision container, absent until the first statement is written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision: Option<Vision>,
    /// Values
    #[serde(default)]
    pub values: Vec<Value>,
    /// Behaviours
    #[serde(default)]
    pub behaviours: Vec<Behaviour>,
    /// Strategic drivers
    #[serde(default)]
    pub strategic_drivers: Vec<StrategicDriver>,
    /// Strategic intents
    #[serde(default)]
    pub strategic_intents: Vec<StrategicIntent>,
    /// Enablers
    #[serde(default)]
    pub enablers: Vec<Enabler>,
    /// Iconic commitments
    #[serde(default)]
    pub iconic_commitments: Vec<IconicCommitment>,
    /// Team objectives
    #[serde(default)]
    pub team_objectives: Vec<TeamObjective>,
    /// Individual objectives
    #[serde(default)]
    pub individual_objectives: Vec<IndividualObjective>,
}

impl StrategyPyramid {
    /// Create an empty document
    #[must_use]
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            vision: None,
            values: Vec::new(),
            behaviours: Vec::new(),
            strategic_drivers: Vec::new(),
            strategic_intents: Vec::new(),
            enablers: Vec::new(),
            iconic_commitments: Vec::new(),
            team_objectives: Vec::new(),
            individual_objectives: Vec::new(),
        }
    }

    /// Whether a vision with at least one statement exists
    #[must_use]
    pub fn has_vision(&self) -> bool {
        self.vision.as_ref().is_some_and(|v| !v.is_empty())
    }

    /// Entity counts per tier
    #[must_use]
    pub fn counts(&self) -> TierCounts {
        TierCounts {
            vision_statements: self.vision.as_ref().map_or(0, |v| v.statements.len()),
            values: self.values.len(),
            behaviours: self.behaviours.len(),
            strategic_drivers: self.strategic_drivers.len(),
            strategic_intents: self.strategic_intents.len(),
            enablers: self.enablers.len(),
            iconic_commitments: self.iconic_commitments.len(),
            team_objectives: self.team_objectives.len(),
            individual_objectives: self.individual_objectives.len(),
        }
    }

    /// Mark the document as modified now
    pub fn touch(&mut self) {
        self.metadata.updated_at = Utc::now();
    }

    /// Encode as compact JSON
    ///
    /// # Errors
    /// Returns [`ModelError::Json`] if encoding fails
    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode as indented JSON
    ///
    /// # Errors
    /// Returns [`ModelError::Json`] if encoding fails
    pub fn to_json_pretty(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from JSON
    ///
    /// # Errors
    /// Returns [`ModelError::Json`] for malformed input, bad identifiers or
    /// out-of-range weightings
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode from an already-parsed JSON value
    ///
    /// # Errors
    /// Returns [`ModelError::Json`] if the value does not match the document shape
    pub fn from_value(value: serde_json::Value) -> Result<Self, ModelError> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_counts_zero() {
        let doc = StrategyPyramid::new(Metadata::new("Plan", "Acme"));
        assert_eq!(doc.counts().total(), 0);
        assert!(!doc.has_vision());
    }

    #[test]
    fn empty_vision_is_not_a_vision() {
        let mut doc = StrategyPyramid::new(Metadata::new("Plan", "Acme"));
        doc.vision = Some(Vision::new());
        assert!(!doc.has_vision());
    }

    #[test]
    fn missing_tiers_decode_as_empty() {
        let json = r#"{
            "metadata": {
                "project_name": "Plan",
                "created_at": "2025-01-01T00:00:00Z",
                "updated_at": "2025-01-01T00:00:00Z"
            }
        }"#;
        let doc = StrategyPyramid::from_json(json).unwrap();
        assert_eq!(doc.metadata.version, "1.0");
        assert!(doc.values.is_empty());
        assert!(doc.vision.is_none());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            StrategyPyramid::from_json("{not json"),
            Err(ModelError::Json(_))
        ));
    }
}
