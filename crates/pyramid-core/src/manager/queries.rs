//! Read-only queries over the managed document

use super::PyramidManager;
use indexmap::IndexMap;
use pyramid_model::{
    BalanceFinding, Behaviour, BehaviourId, CommitmentId, DriverId, Enabler, EnablerId,
    IconicCommitment, IndividualObjective, IndividualObjectiveId, IntentId, StrategicDriver,
    StrategicIntent, TeamObjective, TeamObjectiveId, TierCounts, Value, ValueId,
};

impl PyramidManager {
    /// Value by id
    #[must_use]
    pub fn get_value(&self, id: ValueId) -> Option<&Value> {
        self.pyramid.value(id)
    }

    /// Behaviour by id
    #[must_use]
    pub fn get_behaviour(&self, id: BehaviourId) -> Option<&Behaviour> {
        self.pyramid.behaviour(id)
    }

    /// Driver by id
    #[must_use]
    pub fn get_driver(&self, id: DriverId) -> Option<&StrategicDriver> {
        self.pyramid.driver(id)
    }

    /// Driver by name, ignoring case
    #[must_use]
    pub fn get_driver_by_name(&self, name: &str) -> Option<&StrategicDriver> {
        self.pyramid.driver_by_name(name)
    }

    /// Intent by id
    #[must_use]
    pub fn get_intent(&self, id: IntentId) -> Option<&StrategicIntent> {
        self.pyramid.intent(id)
    }

    /// Enabler by id
    #[must_use]
    pub fn get_enabler(&self, id: EnablerId) -> Option<&Enabler> {
        self.pyramid.enabler(id)
    }

    /// Commitment by id
    #[must_use]
    pub fn get_commitment(&self, id: CommitmentId) -> Option<&IconicCommitment> {
        self.pyramid.commitment(id)
    }

    /// Team objective by id
    #[must_use]
    pub fn get_team_objective(&self, id: TeamObjectiveId) -> Option<&TeamObjective> {
        self.pyramid.team_objective(id)
    }

    /// Individual objective by id
    #[must_use]
    pub fn get_individual_objective(
        &self,
        id: IndividualObjectiveId,
    ) -> Option<&IndividualObjective> {
        self.pyramid.individual_objective(id)
    }

    /// Intents belonging to a driver
    #[must_use]
    pub fn intents_by_driver(&self, driver_id: DriverId) -> Vec<&StrategicIntent> {
        self.pyramid.intents_by_driver(driver_id)
    }

    /// Commitments whose primary driver is `driver_id`
    #[must_use]
    pub fn commitments_by_driver(&self, driver_id: DriverId) -> Vec<&IconicCommitment> {
        self.pyramid.commitments_by_driver(driver_id)
    }

    /// Driver name → primary commitment count, in driver order
    #[must_use]
    pub fn distribution_by_driver(&self) -> IndexMap<String, usize> {
        self.pyramid.distribution_by_driver()
    }

    /// Intents no commitment delivers
    #[must_use]
    pub fn find_orphaned_intents(&self) -> Vec<&StrategicIntent> {
        self.pyramid.orphaned_intents()
    }

    /// Commitments linked to no intent
    #[must_use]
    pub fn find_commitments_without_intents(&self) -> Vec<&IconicCommitment> {
        self.pyramid.commitments_without_intents()
    }

    /// Drivers whose commitment share is outside the healthy band
    ///
    /// Empty when the document has no commitments.
    #[must_use]
    pub fn check_balance(&self) -> Vec<BalanceFinding> {
        self.pyramid.balance_findings()
    }

    /// Entity counts per tier
    #[must_use]
    pub fn counts(&self) -> TierCounts {
        self.pyramid.counts()
    }
}
