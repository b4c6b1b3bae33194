//! Team and individual objectives

use super::{apply_patch, PyramidManager};
use crate::inputs::{NewIndividualObjective, NewTeamObjective};
use crate::patch::{IndividualObjectiveUpdate, TeamObjectiveUpdate};
use pyramid_model::{
    remove_by_id, IndividualObjective, IndividualObjectiveId, TeamObjective, TeamObjectiveId,
};

impl PyramidManager {
    /// Add a team objective
    ///
    /// Commitment and intent links are optional and unchecked; unlinked or
    /// dangling objectives are reported by the cascade and structure checks.
    pub fn add_team_objective(&mut self, input: NewTeamObjective) -> TeamObjective {
        let objective = input.into_entity(self.stamp());
        self.pyramid.team_objectives.push(objective.clone());
        self.record_added(&objective);
        objective
    }

    /// Update a team objective; `false` if it does not exist
    pub fn update_team_objective(
        &mut self,
        id: TeamObjectiveId,
        update: TeamObjectiveUpdate,
    ) -> bool {
        let updated = apply_patch(&mut self.pyramid.team_objectives, id, update);
        self.finish_update::<TeamObjective>(id, updated)
    }

    /// Remove a team objective
    pub fn remove_team_objective(&mut self, id: TeamObjectiveId) -> bool {
        let removed = remove_by_id(&mut self.pyramid.team_objectives, id);
        self.record_removed::<TeamObjective>(id, removed)
    }

    /// Add an individual objective
    pub fn add_individual_objective(
        &mut self,
        input: NewIndividualObjective,
    ) -> IndividualObjective {
        let objective = input.into_entity(self.stamp());
        self.pyramid.individual_objectives.push(objective.clone());
        self.record_added(&objective);
        objective
    }

    /// Update an individual objective; `false` if it does not exist
    pub fn update_individual_objective(
        &mut self,
        id: IndividualObjectiveId,
        update: IndividualObjectiveUpdate,
    ) -> bool {
        let updated = apply_patch(&mut self.pyramid.individual_objectives, id, update);
        self.finish_update::<IndividualObjective>(id, updated)
    }

    /// Remove an individual objective
    pub fn remove_individual_objective(&mut self, id: IndividualObjectiveId) -> bool {
        let removed = remove_by_id(&mut self.pyramid.individual_objectives, id);
        self.record_removed::<IndividualObjective>(id, removed)
    }
}
