//! Iconic commitments and their alignments

use super::{apply_patch, PyramidManager};
use crate::error::{PyramidError, Result};
use crate::inputs::NewCommitment;
use crate::patch::CommitmentUpdate;
use pyramid_model::{
    find_by_id_mut, remove_by_id, CommitmentId, DriverId, Entity, EntityKind, IconicCommitment,
    IntentId, SecondaryAlignment, Weighting,
};

impl PyramidManager {
    /// Add a commitment under an existing primary driver
    ///
    /// # Errors
    /// Returns [`PyramidError::ReferenceNotFound`] if the primary driver does
    /// not resolve; the document is left unchanged.
    pub fn add_commitment(&mut self, input: NewCommitment) -> Result<IconicCommitment> {
        self.require_driver(input.primary_driver_id)?;

        let commitment = input.into_entity(self.stamp());
        self.pyramid.iconic_commitments.push(commitment.clone());
        self.record_added(&commitment);
        Ok(commitment)
    }

    /// Update a commitment; `Ok(false)` if it does not exist
    ///
    /// # Errors
    /// Returns [`PyramidError::ReferenceNotFound`] if the patch moves the
    /// commitment to an unknown primary driver.
    pub fn update_commitment(
        &mut self,
        id: CommitmentId,
        update: CommitmentUpdate,
    ) -> Result<bool> {
        if self.pyramid.commitment(id).is_none() {
            return Ok(false);
        }
        if let Some(driver_id) = update.primary_driver_id {
            self.require_driver(driver_id)?;
        }

        let updated = apply_patch(&mut self.pyramid.iconic_commitments, id, update);
        Ok(self.finish_update::<IconicCommitment>(id, updated))
    }

    /// Remove a commitment; objectives linked to it are left dangling
    pub fn remove_commitment(&mut self, id: CommitmentId) -> bool {
        let removed = remove_by_id(&mut self.pyramid.iconic_commitments, id);
        self.record_removed::<IconicCommitment>(id, removed)
    }

    /// Align a commitment secondarily to another driver
    ///
    /// # Errors
    /// - [`PyramidError::ReferenceNotFound`] for an unknown commitment or driver
    /// - [`PyramidError::SelfAlignment`] if `driver_id` is the primary driver
    /// - [`PyramidError::DuplicateAlignment`] if already aligned to `driver_id`
    pub fn add_secondary_alignment(
        &mut self,
        commitment_id: CommitmentId,
        driver_id: DriverId,
        weighting: Option<Weighting>,
        rationale: Option<String>,
    ) -> Result<()> {
        self.require_driver(driver_id)?;

        let commitment = find_by_id_mut(&mut self.pyramid.iconic_commitments, commitment_id)
            .ok_or_else(|| {
                PyramidError::reference_not_found(EntityKind::IconicCommitment, commitment_id)
            })?;

        if commitment.primary_driver_id == driver_id {
            return Err(PyramidError::SelfAlignment {
                commitment: commitment_id,
                driver: driver_id,
            });
        }
        if commitment.secondary_driver_ids().any(|id| id == driver_id) {
            return Err(PyramidError::DuplicateAlignment {
                commitment: commitment_id,
                driver: driver_id,
            });
        }

        commitment
            .secondary_alignments
            .push(SecondaryAlignment::new(driver_id, weighting, rationale));
        commitment.touch();
        self.mark_modified();

        tracing::debug!(
            commitment = %commitment_id,
            driver = %driver_id,
            weighting = weighting.map(Weighting::value),
            "added secondary alignment"
        );
        Ok(())
    }

    /// Drop a secondary alignment; `false` if the commitment or alignment
    /// does not exist
    pub fn remove_secondary_alignment(
        &mut self,
        commitment_id: CommitmentId,
        driver_id: DriverId,
    ) -> bool {
        let Some(commitment) = find_by_id_mut(&mut self.pyramid.iconic_commitments, commitment_id)
        else {
            return false;
        };

        let before = commitment.secondary_alignments.len();
        commitment
            .secondary_alignments
            .retain(|alignment| alignment.driver_id != driver_id);
        let removed = commitment.secondary_alignments.len() != before;

        if removed {
            commitment.touch();
            self.mark_modified();
            tracing::debug!(
                commitment = %commitment_id,
                driver = %driver_id,
                "removed secondary alignment"
            );
        }
        removed
    }

    /// Record that a commitment delivers an intent
    ///
    /// Returns `Ok(false)` if the commitment does not exist or already
    /// delivers the intent.
    ///
    /// # Errors
    /// Returns [`PyramidError::ReferenceNotFound`] if the intent does not resolve
    pub fn link_commitment_to_intent(
        &mut self,
        commitment_id: CommitmentId,
        intent_id: IntentId,
    ) -> Result<bool> {
        if self.pyramid.intent(intent_id).is_none() {
            tracing::warn!(%intent_id, "rejected link to unknown intent");
            return Err(PyramidError::reference_not_found(
                EntityKind::StrategicIntent,
                intent_id,
            ));
        }

        let linked = match find_by_id_mut(&mut self.pyramid.iconic_commitments, commitment_id) {
            Some(commitment) if !commitment.delivers(intent_id) => {
                commitment.primary_intent_ids.push(intent_id);
                commitment.touch();
                true
            }
            _ => false,
        };

        if linked {
            self.mark_modified();
            tracing::debug!(commitment = %commitment_id, intent = %intent_id, "linked intent");
        }
        Ok(linked)
    }

    /// Remove an intent link; `false` if there was none
    pub fn unlink_commitment_from_intent(
        &mut self,
        commitment_id: CommitmentId,
        intent_id: IntentId,
    ) -> bool {
        let unlinked = match find_by_id_mut(&mut self.pyramid.iconic_commitments, commitment_id) {
            Some(commitment) if commitment.delivers(intent_id) => {
                commitment.primary_intent_ids.retain(|id| *id != intent_id);
                commitment.touch();
                true
            }
            _ => false,
        };

        if unlinked {
            self.mark_modified();
            tracing::debug!(commitment = %commitment_id, intent = %intent_id, "unlinked intent");
        }
        unlinked
    }
}
