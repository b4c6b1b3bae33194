//! Team and individual objectives cascading from commitments

use crate::entity::{impl_entity, AuditInfo, EntityKind};
use crate::ids::{CommitmentId, IndividualObjectiveId, IntentId, TeamObjectiveId};
use serde::{Deserialize, Serialize};

/// Objective owned by a team, linked upward to a commitment or an intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamObjective {
    /// Identifier
    pub id: TeamObjectiveId,
    /// Objective name
    pub name: String,
    /// What the team will achieve
    #[serde(default)]
    pub description: String,
    /// Team responsible
    #[serde(default)]
    pub team_name: String,
    /// How progress is measured
    #[serde(default)]
    pub metrics: Vec<String>,
    /// Accountable owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Commitment this objective delivers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_commitment_id: Option<CommitmentId>,
    /// Intent this objective delivers when no commitment applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_intent_id: Option<IntentId>,
    /// Audit stamps
    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl TeamObjective {
    /// Create new team objective
    #[must_use]
    pub fn new(name: impl Into<String>, team_name: impl Into<String>) -> Self {
        Self {
            id: TeamObjectiveId::new(),
            name: name.into(),
            description: String::new(),
            team_name: team_name.into(),
            metrics: Vec::new(),
            owner: None,
            primary_commitment_id: None,
            primary_intent_id: None,
            audit: AuditInfo::now(),
        }
    }

    /// Whether the objective links to a commitment or an intent
    #[inline]
    #[must_use]
    pub fn has_upward_link(&self) -> bool {
        self.primary_commitment_id.is_some() || self.primary_intent_id.is_some()
    }
}

impl_entity!(TeamObjective, TeamObjectiveId, EntityKind::TeamObjective);

/// Objective owned by one person, supporting one or more team objectives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualObjective {
    /// Identifier
    pub id: IndividualObjectiveId,
    /// Objective name
    pub name: String,
    /// What the individual will achieve
    #[serde(default)]
    pub description: String,
    /// Person responsible
    #[serde(default)]
    pub individual_name: String,
    /// How success is judged
    #[serde(default)]
    pub success_criteria: Vec<String>,
    /// Team objectives supported
    #[serde(default)]
    pub team_objective_ids: Vec<TeamObjectiveId>,
    /// Audit stamps
    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl IndividualObjective {
    /// Create new individual objective
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        individual_name: impl Into<String>,
        team_objective_ids: Vec<TeamObjectiveId>,
    ) -> Self {
        Self {
            id: IndividualObjectiveId::new(),
            name: name.into(),
            description: String::new(),
            individual_name: individual_name.into(),
            success_criteria: Vec::new(),
            team_objective_ids,
            audit: AuditInfo::now(),
        }
    }
}

impl_entity!(
    IndividualObjective,
    IndividualObjectiveId,
    EntityKind::IndividualObjective
);
