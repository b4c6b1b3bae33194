//! Partial updates
//!
//! Every patch field is optional; `None` leaves the target untouched.
//! Patches deserialize from partial JSON bodies, so an API layer can hand
//! them straight to the manager.

use pyramid_model::{
    Behaviour, CommitmentId, DriverId, Enabler, Horizon, IconicCommitment, IndividualObjective,
    IntentId, Metadata, SecondaryAlignment, StatementType, StrategicDriver, StrategicIntent,
    TeamObjective, TeamObjectiveId, Value, ValueId, VisionStatement,
};
use serde::{Deserialize, Serialize};

/// A set of optional field assignments for one entity type
pub trait Patch<T> {
    /// Write every supplied field into `target`
    fn apply_to(self, target: &mut T);

    /// Whether no field is supplied
    fn is_empty(&self) -> bool;
}

macro_rules! assign {
    ($target:expr, $value:expr) => {
        if let Some(value) = $value {
            $target = value;
        }
    };
}

macro_rules! assign_opt {
    ($target:expr, $value:expr) => {
        if let Some(value) = $value {
            $target = Some(value);
        }
    };
}

/// Document metadata update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataUpdate {
    /// New project name
    pub project_name: Option<String>,
    /// New organization
    pub organization: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New author attribution
    pub created_by: Option<String>,
    /// New document version label
    pub version: Option<String>,
}

impl Patch<Metadata> for MetadataUpdate {
    fn apply_to(self, target: &mut Metadata) {
        assign!(target.project_name, self.project_name);
        assign!(target.organization, self.organization);
        assign_opt!(target.description, self.description);
        assign_opt!(target.created_by, self.created_by);
        assign!(target.version, self.version);
    }

    fn is_empty(&self) -> bool {
        self.project_name.is_none()
            && self.organization.is_none()
            && self.description.is_none()
            && self.created_by.is_none()
            && self.version.is_none()
    }
}

/// Vision statement update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionStatementUpdate {
    /// New statement kind
    pub statement_type: Option<StatementType>,
    /// New text
    pub text: Option<String>,
    /// New display position
    pub order: Option<u32>,
    /// New notes
    pub notes: Option<String>,
}

impl VisionStatementUpdate {
    /// With text
    #[inline]
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

impl Patch<VisionStatement> for VisionStatementUpdate {
    fn apply_to(self, target: &mut VisionStatement) {
        assign!(target.statement_type, self.statement_type);
        assign!(target.text, self.text);
        assign!(target.order, self.order);
        assign_opt!(target.audit.notes, self.notes);
    }

    fn is_empty(&self) -> bool {
        self.statement_type.is_none()
            && self.text.is_none()
            && self.order.is_none()
            && self.notes.is_none()
    }
}

/// Value update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueUpdate {
    /// New name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New notes
    pub notes: Option<String>,
}

impl Patch<Value> for ValueUpdate {
    fn apply_to(self, target: &mut Value) {
        assign!(target.name, self.name);
        assign!(target.description, self.description);
        assign_opt!(target.audit.notes, self.notes);
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.notes.is_none()
    }
}

/// Behaviour update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviourUpdate {
    /// New statement
    pub statement: Option<String>,
    /// Replacement value links
    pub value_ids: Option<Vec<ValueId>>,
    /// New notes
    pub notes: Option<String>,
}

impl Patch<Behaviour> for BehaviourUpdate {
    fn apply_to(self, target: &mut Behaviour) {
        assign!(target.statement, self.statement);
        assign!(target.value_ids, self.value_ids);
        assign_opt!(target.audit.notes, self.notes);
    }

    fn is_empty(&self) -> bool {
        self.statement.is_none() && self.value_ids.is_none() && self.notes.is_none()
    }
}

/// Strategic driver update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverUpdate {
    /// New name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New rationale
    pub rationale: Option<String>,
    /// New notes
    pub notes: Option<String>,
}

impl Patch<StrategicDriver> for DriverUpdate {
    fn apply_to(self, target: &mut StrategicDriver) {
        assign!(target.name, self.name);
        assign!(target.description, self.description);
        assign_opt!(target.rationale, self.rationale);
        assign_opt!(target.audit.notes, self.notes);
    }

    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.rationale.is_none()
            && self.notes.is_none()
    }
}

/// Strategic intent update
///
/// A supplied `driver_id` is reference-checked by the manager before the
/// patch is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentUpdate {
    /// New statement
    pub statement: Option<String>,
    /// New owning driver
    pub driver_id: Option<DriverId>,
    /// New voice flag
    pub is_stakeholder_voice: Option<bool>,
    /// New notes
    pub notes: Option<String>,
}

impl Patch<StrategicIntent> for IntentUpdate {
    fn apply_to(self, target: &mut StrategicIntent) {
        assign!(target.statement, self.statement);
        assign!(target.driver_id, self.driver_id);
        assign!(target.is_stakeholder_voice, self.is_stakeholder_voice);
        assign_opt!(target.audit.notes, self.notes);
    }

    fn is_empty(&self) -> bool {
        self.statement.is_none()
            && self.driver_id.is_none()
            && self.is_stakeholder_voice.is_none()
            && self.notes.is_none()
    }
}

/// Enabler update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnablerUpdate {
    /// New name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New category label
    pub enabler_type: Option<String>,
    /// Replacement driver links
    pub driver_ids: Option<Vec<DriverId>>,
    /// New notes
    pub notes: Option<String>,
}

impl Patch<Enabler> for EnablerUpdate {
    fn apply_to(self, target: &mut Enabler) {
        assign!(target.name, self.name);
        assign!(target.description, self.description);
        assign_opt!(target.enabler_type, self.enabler_type);
        assign!(target.driver_ids, self.driver_ids);
        assign_opt!(target.audit.notes, self.notes);
    }

    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.enabler_type.is_none()
            && self.driver_ids.is_none()
            && self.notes.is_none()
    }
}

/// Iconic commitment update
///
/// A supplied `primary_driver_id` is reference-checked by the manager.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitmentUpdate {
    /// New name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New horizon
    pub horizon: Option<Horizon>,
    /// New target date
    pub target_date: Option<String>,
    /// New owner
    pub owner: Option<String>,
    /// New primary driver
    pub primary_driver_id: Option<DriverId>,
    /// Replacement intent links
    pub primary_intent_ids: Option<Vec<IntentId>>,
    /// Replacement secondary alignments
    pub secondary_alignments: Option<Vec<SecondaryAlignment>>,
    /// New notes
    pub notes: Option<String>,
}

impl Patch<IconicCommitment> for CommitmentUpdate {
    fn apply_to(self, target: &mut IconicCommitment) {
        assign!(target.name, self.name);
        assign!(target.description, self.description);
        assign!(target.horizon, self.horizon);
        assign_opt!(target.target_date, self.target_date);
        assign_opt!(target.owner, self.owner);
        assign!(target.primary_driver_id, self.primary_driver_id);
        assign!(target.primary_intent_ids, self.primary_intent_ids);
        assign!(target.secondary_alignments, self.secondary_alignments);
        assign_opt!(target.audit.notes, self.notes);
    }

    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.horizon.is_none()
            && self.target_date.is_none()
            && self.owner.is_none()
            && self.primary_driver_id.is_none()
            && self.primary_intent_ids.is_none()
            && self.secondary_alignments.is_none()
            && self.notes.is_none()
    }
}

/// Team objective update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamObjectiveUpdate {
    /// New name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New team name
    pub team_name: Option<String>,
    /// Replacement metrics
    pub metrics: Option<Vec<String>>,
    /// New owner
    pub owner: Option<String>,
    /// New commitment link
    pub primary_commitment_id: Option<CommitmentId>,
    /// New intent link
    pub primary_intent_id: Option<IntentId>,
    /// New notes
    pub notes: Option<String>,
}

impl Patch<TeamObjective> for TeamObjectiveUpdate {
    fn apply_to(self, target: &mut TeamObjective) {
        assign!(target.name, self.name);
        assign!(target.description, self.description);
        assign!(target.team_name, self.team_name);
        assign!(target.metrics, self.metrics);
        assign_opt!(target.owner, self.owner);
        assign_opt!(target.primary_commitment_id, self.primary_commitment_id);
        assign_opt!(target.primary_intent_id, self.primary_intent_id);
        assign_opt!(target.audit.notes, self.notes);
    }

    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.team_name.is_none()
            && self.metrics.is_none()
            && self.owner.is_none()
            && self.primary_commitment_id.is_none()
            && self.primary_intent_id.is_none()
            && self.notes.is_none()
    }
}

/// Individual objective update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndividualObjectiveUpdate {
    /// New name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New individual name
    pub individual_name: Option<String>,
    /// Replacement success criteria
    pub success_criteria: Option<Vec<String>>,
    /// Replacement team objective links
    pub team_objective_ids: Option<Vec<TeamObjectiveId>>,
    /// New notes
    pub notes: Option<String>,
}

impl Patch<IndividualObjective> for IndividualObjectiveUpdate {
    fn apply_to(self, target: &mut IndividualObjective) {
        assign!(target.name, self.name);
        assign!(target.description, self.description);
        assign!(target.individual_name, self.individual_name);
        assign!(target.success_criteria, self.success_criteria);
        assign!(target.team_objective_ids, self.team_objective_ids);
        assign_opt!(target.audit.notes, self.notes);
    }

    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.individual_name.is_none()
            && self.success_criteria.is_none()
            && self.team_objective_ids.is_none()
            && self.notes.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_supplied_fields_change() {
        let mut value = Value::new("Integrity", "Do the right thing");
        let patch = ValueUpdate {
            description: Some("Say what we do, do what we say".into()),
            ..ValueUpdate::default()
        };
        assert!(!patch.is_empty());

        patch.apply_to(&mut value);
        assert_eq!(value.name, "Integrity");
        assert_eq!(value.description, "Say what we do, do what we say");
        assert_eq!(value.audit.notes, None);
    }

    #[test]
    fn partial_json_body_decodes() {
        let patch: CommitmentUpdate =
            serde_json::from_str(r#"{"horizon":"H2","target_date":"2027-03"}"#).unwrap();
        assert_eq!(patch.horizon, Some(Horizon::H2));
        assert_eq!(patch.target_date.as_deref(), Some("2027-03"));
        assert!(patch.name.is_none());
    }

    #[test]
    fn default_patch_is_empty() {
        assert!(DriverUpdate::default().is_empty());
        assert!(IntentUpdate::default().is_empty());
        assert!(TeamObjectiveUpdate::default().is_empty());
    }
}
