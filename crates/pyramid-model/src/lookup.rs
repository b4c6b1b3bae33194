//! Read-only lookup helpers over a pyramid document
//!
//! All lookups are linear scans; tiers hold at most a few hundred entries.

use crate::commitment::IconicCommitment;
use crate::entity::find_by_id;
use crate::ids::{
    BehaviourId, CommitmentId, DriverId, EnablerId, IndividualObjectiveId, IntentId,
    TeamObjectiveId, ValueId, VisionStatementId,
};
use crate::objectives::{IndividualObjective, TeamObjective};
use crate::pyramid::StrategyPyramid;
use crate::strategy::{Enabler, StrategicDriver, StrategicIntent};
use crate::values::{Behaviour, Value};
use crate::vision::VisionStatement;
use indexmap::IndexMap;

impl StrategyPyramid {
    /// Vision statement by id
    #[must_use]
    pub fn vision_statement(&self, id: VisionStatementId) -> Option<&VisionStatement> {
        self.vision
            .as_ref()
            .and_then(|vision| find_by_id(&vision.statements, id))
    }

    /// Value by id
    #[must_use]
    pub fn value(&self, id: ValueId) -> Option<&Value> {
        find_by_id(&self.values, id)
    }

    /// Behaviour by id
    #[must_use]
    pub fn behaviour(&self, id: BehaviourId) -> Option<&Behaviour> {
        find_by_id(&self.behaviours, id)
    }

    /// Driver by id
    #[must_use]
    pub fn driver(&self, id: DriverId) -> Option<&StrategicDriver> {
        find_by_id(&self.strategic_drivers, id)
    }

    /// Intent by id
    #[must_use]
    pub fn intent(&self, id: IntentId) -> Option<&StrategicIntent> {
        find_by_id(&self.strategic_intents, id)
    }

    /// Enabler by id
    #[must_use]
    pub fn enabler(&self, id: EnablerId) -> Option<&Enabler> {
        find_by_id(&self.enablers, id)
    }

    /// Commitment by id
    #[must_use]
    pub fn commitment(&self, id: CommitmentId) -> Option<&IconicCommitment> {
        find_by_id(&self.iconic_commitments, id)
    }

    /// Team objective by id
    #[must_use]
    pub fn team_objective(&self, id: TeamObjectiveId) -> Option<&TeamObjective> {
        find_by_id(&self.team_objectives, id)
    }

    /// Individual objective by id
    #[must_use]
    pub fn individual_objective(&self, id: IndividualObjectiveId) -> Option<&IndividualObjective> {
        find_by_id(&self.individual_objectives, id)
    }

    /// Driver by name, ignoring case and surrounding whitespace
    #[must_use]
    pub fn driver_by_name(&self, name: &str) -> Option<&StrategicDriver> {
        let needle = name.trim();
        self.strategic_drivers
            .iter()
            .find(|d| d.name.trim().eq_ignore_ascii_case(needle))
    }

    /// Intents belonging to a driver
    #[must_use]
    pub fn intents_by_driver(&self, driver_id: DriverId) -> Vec<&StrategicIntent> {
        self.strategic_intents
            .iter()
            .filter(|i| i.driver_id == driver_id)
            .collect()
    }

    /// Commitments whose primary driver is the given driver
    #[must_use]
    pub fn commitments_by_driver(&self, driver_id: DriverId) -> Vec<&IconicCommitment> {
        self.iconic_commitments
            .iter()
            .filter(|c| c.primary_driver_id == driver_id)
            .collect()
    }

    /// Commitments delivering an intent
    #[must_use]
    pub fn commitments_by_intent(&self, intent_id: IntentId) -> Vec<&IconicCommitment> {
        self.iconic_commitments
            .iter()
            .filter(|c| c.delivers(intent_id))
            .collect()
    }

    /// Enablers supporting a driver
    #[must_use]
    pub fn enablers_by_driver(&self, driver_id: DriverId) -> Vec<&Enabler> {
        self.enablers
            .iter()
            .filter(|e| e.driver_ids.contains(&driver_id))
            .collect()
    }

    /// Behaviours expressing a value
    #[must_use]
    pub fn behaviours_by_value(&self, value_id: ValueId) -> Vec<&Behaviour> {
        self.behaviours
            .iter()
            .filter(|b| b.expresses(value_id))
            .collect()
    }

    /// Team objectives delivering a commitment
    #[must_use]
    pub fn team_objectives_by_commitment(&self, commitment_id: CommitmentId) -> Vec<&TeamObjective> {
        self.team_objectives
            .iter()
            .filter(|t| t.primary_commitment_id == Some(commitment_id))
            .collect()
    }

    /// Individual objectives supporting a team objective
    #[must_use]
    pub fn individual_objectives_by_team_objective(
        &self,
        team_objective_id: TeamObjectiveId,
    ) -> Vec<&IndividualObjective> {
        self.individual_objectives
            .iter()
            .filter(|o| o.team_objective_ids.contains(&team_objective_id))
            .collect()
    }

    /// Driver name → number of commitments choosing it as primary
    ///
    /// Entries follow driver order. Drivers sharing a name share an entry.
    #[must_use]
    pub fn distribution_by_driver(&self) -> IndexMap<String, usize> {
        let mut distribution = IndexMap::with_capacity(self.strategic_drivers.len());
        for driver in &self.strategic_drivers {
            *distribution.entry(driver.name.clone()).or_insert(0) +=
                self.commitments_by_driver(driver.id).len();
        }
        distribution
    }

    /// Intents no commitment delivers
    #[must_use]
    pub fn orphaned_intents(&self) -> Vec<&StrategicIntent> {
        self.strategic_intents
            .iter()
            .filter(|i| self.commitments_by_intent(i.id).is_empty())
            .collect()
    }

    /// Commitments linked to no intent
    #[must_use]
    pub fn commitments_without_intents(&self) -> Vec<&IconicCommitment> {
        self.iconic_commitments
            .iter()
            .filter(|c| c.primary_intent_ids.is_empty())
            .collect()
    }

    /// Drivers with no intent
    #[must_use]
    pub fn drivers_without_intents(&self) -> Vec<&StrategicDriver> {
        self.strategic_drivers
            .iter()
            .filter(|d| !self.strategic_intents.iter().any(|i| i.driver_id == d.id))
            .collect()
    }
}
