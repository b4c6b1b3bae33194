//! Field bundles for the wider `add_*` operations
//!
//! Commitments and objectives carry too many optional fields for a flat
//! argument list, so their constructors take one of these instead.

use pyramid_model::{
    AuditInfo, CommitmentId, DriverId, Horizon, IconicCommitment, IndividualObjective, IntentId,
    SecondaryAlignment, TeamObjective, TeamObjectiveId,
};
use serde::{Deserialize, Serialize};

/// Fields for a new iconic commitment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCommitment {
    /// Name
    pub name: String,
    /// Primary driver (must exist)
    pub primary_driver_id: DriverId,
    /// Delivery horizon
    #[serde(default)]
    pub horizon: Horizon,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Target date, free text
    #[serde(default)]
    pub target_date: Option<String>,
    /// Owner
    #[serde(default)]
    pub owner: Option<String>,
    /// Intents delivered
    #[serde(default)]
    pub primary_intent_ids: Vec<IntentId>,
    /// Secondary alignments
    #[serde(default)]
    pub secondary_alignments: Vec<SecondaryAlignment>,
    /// Facilitator notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewCommitment {
    /// Create with required fields
    #[must_use]
    pub fn new(name: impl Into<String>, primary_driver_id: DriverId) -> Self {
        Self {
            name: name.into(),
            primary_driver_id,
            horizon: Horizon::default(),
            description: String::new(),
            target_date: None,
            owner: None,
            primary_intent_ids: Vec::new(),
            secondary_alignments: Vec::new(),
            notes: None,
        }
    }

    /// With horizon
    #[inline]
    #[must_use]
    pub fn with_horizon(mut self, horizon: Horizon) -> Self {
        self.horizon = horizon;
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With target date
    #[inline]
    #[must_use]
    pub fn with_target_date(mut self, target_date: impl Into<String>) -> Self {
        self.target_date = Some(target_date.into());
        self
    }

    /// With owner
    #[inline]
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// With delivered intents
    #[inline]
    #[must_use]
    pub fn with_intents(mut self, intent_ids: Vec<IntentId>) -> Self {
        self.primary_intent_ids = intent_ids;
        self
    }

    /// With an additional secondary alignment
    #[inline]
    #[must_use]
    pub fn with_alignment(mut self, alignment: SecondaryAlignment) -> Self {
        self.secondary_alignments.push(alignment);
        self
    }

    /// With notes
    #[inline]
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub(crate) fn into_entity(self, audit: AuditInfo) -> IconicCommitment {
        let mut commitment =
            IconicCommitment::new(self.name, self.primary_driver_id, self.horizon)
                .with_description(self.description)
                .with_intents(self.primary_intent_ids);
        commitment.target_date = self.target_date;
        commitment.owner = self.owner;
        commitment.secondary_alignments = self.secondary_alignments;
        commitment.audit = AuditInfo {
            notes: self.notes,
            ..audit
        };
        commitment
    }
}

/// Fields for a new team objective
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewTeamObjective {
    /// Name
    pub name: String,
    /// Team
    pub team_name: String,
    /// Description
    pub description: String,
    /// Measures of success
    pub metrics: Vec<String>,
    /// Owner
    pub owner: Option<String>,
    /// Commitment this objective serves
    pub primary_commitment_id: Option<CommitmentId>,
    /// Intent this objective serves
    pub primary_intent_id: Option<IntentId>,
    /// Facilitator notes
    pub notes: Option<String>,
}

impl NewTeamObjective {
    /// Create with required fields
    #[must_use]
    pub fn new(name: impl Into<String>, team_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team_name: team_name.into(),
            ..Self::default()
        }
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With metric
    #[inline]
    #[must_use]
    pub fn with_metric(mut self, metric: impl Into<String>) -> Self {
        self.metrics.push(metric.into());
        self
    }

    /// With owner
    #[inline]
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Linked to a commitment
    #[inline]
    #[must_use]
    pub fn for_commitment(mut self, commitment_id: CommitmentId) -> Self {
        self.primary_commitment_id = Some(commitment_id);
        self
    }

    /// Linked to an intent
    #[inline]
    #[must_use]
    pub fn for_intent(mut self, intent_id: IntentId) -> Self {
        self.primary_intent_id = Some(intent_id);
        self
    }

    pub(crate) fn into_entity(self, audit: AuditInfo) -> TeamObjective {
        let mut objective = TeamObjective::new(self.name, self.team_name);
        objective.description = self.description;
        objective.metrics = self.metrics;
        objective.owner = self.owner;
        objective.primary_commitment_id = self.primary_commitment_id;
        objective.primary_intent_id = self.primary_intent_id;
        objective.audit = AuditInfo {
            notes: self.notes,
            ..audit
        };
        objective
    }
}

/// Fields for a new individual objective
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewIndividualObjective {
    /// Name
    pub name: String,
    /// Person
    pub individual_name: String,
    /// Description
    pub description: String,
    /// Success criteria
    pub success_criteria: Vec<String>,
    /// Team objectives this rolls up to
    pub team_objective_ids: Vec<TeamObjectiveId>,
    /// Facilitator notes
    pub notes: Option<String>,
}

impl NewIndividualObjective {
    /// Create with required fields
    #[must_use]
    pub fn new(name: impl Into<String>, individual_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            individual_name: individual_name.into(),
            ..Self::default()
        }
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With success criterion
    #[inline]
    #[must_use]
    pub fn with_criterion(mut self, criterion: impl Into<String>) -> Self {
        self.success_criteria.push(criterion.into());
        self
    }

    /// Rolls up to a team objective
    #[inline]
    #[must_use]
    pub fn for_team_objective(mut self, team_objective_id: TeamObjectiveId) -> Self {
        self.team_objective_ids.push(team_objective_id);
        self
    }

    pub(crate) fn into_entity(self, audit: AuditInfo) -> IndividualObjective {
        let mut objective =
            IndividualObjective::new(self.name, self.individual_name, self.team_objective_ids);
        objective.description = self.description;
        objective.success_criteria = self.success_criteria;
        objective.audit = AuditInfo {
            notes: self.notes,
            ..audit
        };
        objective
    }
}
