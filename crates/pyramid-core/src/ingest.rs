//! Draft ingestion
//!
//! Loosely structured payloads (typically extracted from workshop notes)
//! name their cross-references instead of carrying identifiers. A
//! [`PyramidDraft`] is the typed form of such a payload; applying it goes
//! through the ordinary `add_*` operations, resolving names against the
//! document as it grows.
//!
//! Resolution is case-insensitive and ignores surrounding whitespace.
//! Later sections may refer to entities created by earlier ones in the
//! same draft. The whole draft applies or none of it does.

use crate::error::{PyramidError, Result};
use crate::inputs::{NewCommitment, NewIndividualObjective, NewTeamObjective};
use crate::manager::PyramidManager;
use pyramid_model::{
    CommitmentId, DriverId, EntityKind, Horizon, IntentId, StatementType, StrategyPyramid,
    TeamObjectiveId, TierCounts, ValueId, Weighting,
};
use serde::{Deserialize, Serialize};

/// Vision statement in a draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftStatement {
    /// Statement kind label, e.g. `"mission"`
    #[serde(alias = "type")]
    pub statement_type: String,
    /// Statement text
    pub text: String,
}

/// Value in a draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftValue {
    /// Name
    pub name: String,
    /// Description
    pub description: String,
}

/// Behaviour in a draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftBehaviour {
    /// Statement
    pub statement: String,
    /// Names of the values expressed
    pub values: Vec<String>,
}

/// Strategic driver in a draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftDriver {
    /// Name
    pub name: String,
    /// Description
    pub description: String,
    /// Why this driver was chosen
    pub rationale: Option<String>,
}

/// Strategic intent in a draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftIntent {
    /// Name of the owning driver
    pub driver: String,
    /// Statement
    pub statement: String,
    /// Written from the stakeholder's perspective
    pub is_stakeholder_voice: bool,
}

/// Enabler in a draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftEnabler {
    /// Name
    pub name: String,
    /// Description
    pub description: String,
    /// Category label
    pub enabler_type: Option<String>,
    /// Names of supported drivers
    pub drivers: Vec<String>,
}

/// Secondary alignment in a draft
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftAlignment {
    /// Driver name
    pub driver: String,
    /// Weighting in `[0, 1]`
    pub weighting: Option<f64>,
    /// Why the commitment also serves this driver
    pub rationale: Option<String>,
}

/// Iconic commitment in a draft
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftCommitment {
    /// Name
    pub name: String,
    /// Description
    pub description: String,
    /// Name of the primary driver
    pub primary_driver: String,
    /// Horizon label (`H1`, `H2`, `H3`); H1 when absent
    pub horizon: Option<String>,
    /// Target date, free text
    pub target_date: Option<String>,
    /// Owner
    pub owner: Option<String>,
    /// Statements of the intents delivered
    pub intents: Vec<String>,
    /// Secondary alignments
    pub secondary_alignments: Vec<DraftAlignment>,
}

/// Team objective in a draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftTeamObjective {
    /// Name
    pub name: String,
    /// Description
    pub description: String,
    /// Team
    pub team_name: String,
    /// Measures of success
    pub metrics: Vec<String>,
    /// Owner
    pub owner: Option<String>,
    /// Name of the commitment served
    pub commitment: Option<String>,
    /// Statement of the intent served
    pub intent: Option<String>,
}

/// Individual objective in a draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftIndividualObjective {
    /// Name
    pub name: String,
    /// Description
    pub description: String,
    /// Person
    pub individual_name: String,
    /// Success criteria
    pub success_criteria: Vec<String>,
    /// Names of the team objectives this rolls up to
    pub team_objectives: Vec<String>,
}

/// Typed form of a loosely structured pyramid payload
///
/// Every section is optional; sections apply in pyramid order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PyramidDraft {
    /// Vision statements
    pub vision: Vec<DraftStatement>,
    /// Values
    pub values: Vec<DraftValue>,
    /// Behaviours
    pub behaviours: Vec<DraftBehaviour>,
    /// Strategic drivers
    pub drivers: Vec<DraftDriver>,
    /// Strategic intents
    pub intents: Vec<DraftIntent>,
    /// Enablers
    pub enablers: Vec<DraftEnabler>,
    /// Iconic commitments
    pub commitments: Vec<DraftCommitment>,
    /// Team objectives
    pub team_objectives: Vec<DraftTeamObjective>,
    /// Individual objectives
    pub individual_objectives: Vec<DraftIndividualObjective>,
}

impl PyramidDraft {
    /// Interpret an already-parsed payload
    ///
    /// # Errors
    /// Returns [`PyramidError::InvalidDraft`] if the payload does not have
    /// the draft shape
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| PyramidError::InvalidDraft(e.to_string()))
    }

    /// Parse a JSON payload
    ///
    /// # Errors
    /// Returns [`PyramidError::InvalidDraft`] for malformed JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PyramidError::InvalidDraft(e.to_string()))
    }

    /// Number of entities the draft would add, per tier
    #[must_use]
    pub fn counts(&self) -> TierCounts {
        TierCounts {
            vision_statements: self.vision.len(),
            values: self.values.len(),
            behaviours: self.behaviours.len(),
            strategic_drivers: self.drivers.len(),
            strategic_intents: self.intents.len(),
            enablers: self.enablers.len(),
            iconic_commitments: self.commitments.len(),
            team_objectives: self.team_objectives.len(),
            individual_objectives: self.individual_objectives.len(),
        }
    }
}

/// Per-tier counts of entities added by an import
pub type ImportSummary = TierCounts;

fn same_name(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

fn not_found(kind: EntityKind, name: &str) -> PyramidError {
    tracing::warn!(%kind, name, "draft reference did not resolve");
    PyramidError::reference_not_found(kind, name.trim())
}

fn resolve_value(doc: &StrategyPyramid, name: &str) -> Result<ValueId> {
    doc.values
        .iter()
        .find(|v| same_name(&v.name, name))
        .map(|v| v.id)
        .ok_or_else(|| not_found(EntityKind::Value, name))
}

fn resolve_driver(doc: &StrategyPyramid, name: &str) -> Result<DriverId> {
    doc.driver_by_name(name)
        .map(|d| d.id)
        .ok_or_else(|| not_found(EntityKind::StrategicDriver, name))
}

fn resolve_intent(doc: &StrategyPyramid, statement: &str) -> Result<IntentId> {
    doc.strategic_intents
        .iter()
        .find(|i| same_name(&i.statement, statement))
        .map(|i| i.id)
        .ok_or_else(|| not_found(EntityKind::StrategicIntent, statement))
}

fn resolve_commitment(doc: &StrategyPyramid, name: &str) -> Result<CommitmentId> {
    doc.iconic_commitments
        .iter()
        .find(|c| same_name(&c.name, name))
        .map(|c| c.id)
        .ok_or_else(|| not_found(EntityKind::IconicCommitment, name))
}

fn resolve_team_objective(doc: &StrategyPyramid, name: &str) -> Result<TeamObjectiveId> {
    doc.team_objectives
        .iter()
        .find(|t| same_name(&t.name, name))
        .map(|t| t.id)
        .ok_or_else(|| not_found(EntityKind::TeamObjective, name))
}

impl PyramidManager {
    /// Apply a draft through the ordinary write operations
    ///
    /// Runs against a copy of the document and commits only if every
    /// entity was added.
    ///
    /// # Errors
    /// - [`PyramidError::ReferenceNotFound`] when a named reference does not resolve
    /// - [`PyramidError::Model`] for unknown statement types or horizons and
    ///   out-of-range weightings
    /// - Any alignment error from [`PyramidManager::add_secondary_alignment`]
    pub fn import_draft(&mut self, draft: PyramidDraft) -> Result<ImportSummary> {
        let expected = draft.counts();
        let mut staged = self.clone();
        staged.apply_draft(draft)?;
        *self = staged;

        tracing::info!(
            project = %self.pyramid().metadata.project_name,
            added = expected.total(),
            "imported draft"
        );
        Ok(expected)
    }

    fn apply_draft(&mut self, draft: PyramidDraft) -> Result<()> {
        for statement in draft.vision {
            let statement_type: StatementType = statement.statement_type.parse()?;
            self.add_vision_statement(statement_type, statement.text);
        }

        for value in draft.values {
            self.add_value(value.name, value.description);
        }

        for behaviour in draft.behaviours {
            let value_ids = behaviour
                .values
                .iter()
                .map(|name| resolve_value(self.pyramid(), name))
                .collect::<Result<Vec<_>>>()?;
            self.add_behaviour(behaviour.statement, value_ids);
        }

        for driver in draft.drivers {
            self.add_driver(driver.name, driver.description, driver.rationale);
        }

        for intent in draft.intents {
            let driver_id = resolve_driver(self.pyramid(), &intent.driver)?;
            self.add_intent(intent.statement, driver_id, intent.is_stakeholder_voice)?;
        }

        for enabler in draft.enablers {
            let driver_ids = enabler
                .drivers
                .iter()
                .map(|name| resolve_driver(self.pyramid(), name))
                .collect::<Result<Vec<_>>>()?;
            self.add_enabler(enabler.name, enabler.description, enabler.enabler_type, driver_ids);
        }

        for commitment in draft.commitments {
            self.apply_commitment(commitment)?;
        }

        for objective in draft.team_objectives {
            let mut input = NewTeamObjective::new(objective.name, objective.team_name)
                .with_description(objective.description);
            input.metrics = objective.metrics;
            input.owner = objective.owner;
            if let Some(name) = objective.commitment.as_deref() {
                input.primary_commitment_id = Some(resolve_commitment(self.pyramid(), name)?);
            }
            if let Some(statement) = objective.intent.as_deref() {
                input.primary_intent_id = Some(resolve_intent(self.pyramid(), statement)?);
            }
            self.add_team_objective(input);
        }

        for objective in draft.individual_objectives {
            let mut input = NewIndividualObjective::new(objective.name, objective.individual_name)
                .with_description(objective.description);
            input.success_criteria = objective.success_criteria;
            input.team_objective_ids = objective
                .team_objectives
                .iter()
                .map(|name| resolve_team_objective(self.pyramid(), name))
                .collect::<Result<Vec<_>>>()?;
            self.add_individual_objective(input);
        }

        Ok(())
    }

    fn apply_commitment(&mut self, draft: DraftCommitment) -> Result<()> {
        let primary_driver_id = resolve_driver(self.pyramid(), &draft.primary_driver)?;
        let horizon = match draft.horizon.as_deref() {
            Some(label) => label.parse::<Horizon>()?,
            None => Horizon::default(),
        };
        let intent_ids = draft
            .intents
            .iter()
            .map(|statement| resolve_intent(self.pyramid(), statement))
            .collect::<Result<Vec<_>>>()?;

        let mut input = NewCommitment::new(draft.name, primary_driver_id)
            .with_horizon(horizon)
            .with_description(draft.description)
            .with_intents(intent_ids);
        input.target_date = draft.target_date;
        input.owner = draft.owner;
        let commitment_id = self.add_commitment(input)?.id;

        for alignment in draft.secondary_alignments {
            let driver_id = resolve_driver(self.pyramid(), &alignment.driver)?;
            let weighting = alignment.weighting.map(Weighting::new).transpose()?;
            self.add_secondary_alignment(commitment_id, driver_id, weighting, alignment.rationale)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyramid_model::Metadata;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!({
            "vision": [{ "type": "Mission", "text": "Every family banks with a neighbour" }],
            "values": [{ "name": "Integrity", "description": "Do the right thing" }],
            "behaviours": [{ "statement": "We admit mistakes early", "values": ["integrity"] }],
            "drivers": [
                { "name": "Growth", "description": "Win members" },
                { "name": "Trust", "description": "Keep members" }
            ],
            "intents": [
                { "driver": "growth", "statement": "Members bring their friends", "is_stakeholder_voice": true }
            ],
            "commitments": [{
                "name": "Launch referral app",
                "primary_driver": "GROWTH",
                "horizon": "H2",
                "intents": ["members bring their friends"],
                "secondary_alignments": [{ "driver": "Trust", "weighting": 0.3 }]
            }],
            "team_objectives": [
                { "name": "Ship referral MVP", "team_name": "Digital", "commitment": "launch referral app" }
            ],
            "individual_objectives": [
                { "name": "Design onboarding", "individual_name": "Sam", "team_objectives": ["Ship referral MVP"] }
            ]
        })
    }

    #[test]
    fn names_resolve_case_insensitively() {
        let mut manager = PyramidManager::new(Metadata::new("FY26", "Credit Union"));
        let draft = PyramidDraft::from_value(payload()).unwrap();

        let summary = manager.import_draft(draft).unwrap();
        assert_eq!(summary.total(), 9);
        assert_eq!(manager.counts(), summary);

        let doc = manager.pyramid();
        let growth = doc.driver_by_name("Growth").unwrap().id;
        let trust = doc.driver_by_name("Trust").unwrap().id;
        let commitment = &doc.iconic_commitments[0];
        assert_eq!(commitment.primary_driver_id, growth);
        assert_eq!(commitment.horizon, Horizon::H2);
        assert!(commitment.delivers(doc.strategic_intents[0].id));
        assert!(commitment.secondary_driver_ids().any(|d| d == trust));
        assert_eq!(doc.team_objectives[0].primary_commitment_id, Some(commitment.id));
        assert_eq!(
            doc.individual_objectives[0].team_objective_ids,
            vec![doc.team_objectives[0].id]
        );
        assert_eq!(doc.behaviours[0].value_ids, vec![doc.values[0].id]);
    }

    #[test]
    fn failed_import_leaves_document_untouched() {
        let mut manager = PyramidManager::new(Metadata::new("FY26", "Credit Union"));
        manager.add_value("Courage", "");
        let before = manager.pyramid().clone();

        let mut payload = payload();
        payload["intents"][0]["driver"] = json!("Efficiency");
        let err = manager
            .import_draft(PyramidDraft::from_value(payload).unwrap())
            .unwrap_err();

        assert!(err.is_reference_error());
        assert_eq!(manager.pyramid(), &before);
    }

    #[test]
    fn out_of_range_weighting_is_a_model_error() {
        let mut manager = PyramidManager::new(Metadata::new("FY26", "Credit Union"));
        let mut payload = payload();
        payload["commitments"][0]["secondary_alignments"][0]["weighting"] = json!(1.5);

        let err = manager
            .import_draft(PyramidDraft::from_value(payload).unwrap())
            .unwrap_err();
        assert!(matches!(err, PyramidError::Model(_)));
        assert_eq!(manager.counts().total(), 0);
    }

    #[test]
    fn wrong_shape_is_rejected() {
        let err = PyramidDraft::from_json(r#"{"drivers": "Growth"}"#).unwrap_err();
        assert!(matches!(err, PyramidError::InvalidDraft(_)));
    }
}
