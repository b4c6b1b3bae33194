//! Pyramid manager
//!
//! Single owner of one strategy document. Every write goes through here:
//! entities are constructed with fresh identifiers and audit stamps, the
//! mandatory references (intent → driver, commitment → primary driver) are
//! resolved before anything is appended, and the document's modification
//! stamp moves on each successful write.
//!
//! Optional references (commitment → intents, enabler → drivers, objective
//! links) are stored as given and reported by the validator.

mod commitments;
mod objectives;
mod queries;
mod strategy;
mod values;
mod vision;

use crate::error::{PyramidError, Result};
use crate::patch::{MetadataUpdate, Patch};
use pyramid_model::{
    find_by_id_mut, AuditInfo, DriverId, Entity, EntityKind, Metadata, StrategyPyramid,
};
use pyramid_validation::{PyramidValidator, ValidationReport};

/// Mediates all reads and writes on one strategy document
#[derive(Debug, Clone)]
pub struct PyramidManager {
    pyramid: StrategyPyramid,
    author: Option<String>,
}

impl PyramidManager {
    /// Create manager over an empty document
    #[must_use]
    pub fn new(metadata: Metadata) -> Self {
        let author = metadata.created_by.clone();
        Self {
            pyramid: StrategyPyramid::new(metadata),
            author,
        }
    }

    /// Take ownership of an existing document
    #[must_use]
    pub fn from_pyramid(pyramid: StrategyPyramid) -> Self {
        let author = pyramid.metadata.created_by.clone();
        Self { pyramid, author }
    }

    /// Attribute subsequently created entities to `author`
    #[inline]
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Current attribution for new entities
    #[inline]
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Read-only view of the document
    #[inline]
    #[must_use]
    pub fn pyramid(&self) -> &StrategyPyramid {
        &self.pyramid
    }

    /// Release the document
    #[inline]
    #[must_use]
    pub fn into_pyramid(self) -> StrategyPyramid {
        self.pyramid
    }

    /// Document metadata
    #[inline]
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.pyramid.metadata
    }

    /// Update document metadata
    pub fn update_metadata(&mut self, update: MetadataUpdate) {
        update.apply_to(&mut self.pyramid.metadata);
        self.mark_modified();
        tracing::debug!(
            project = %self.pyramid.metadata.project_name,
            "updated pyramid metadata"
        );
    }

    /// Run the default validator over the current snapshot
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        self.validate_with(&PyramidValidator::new())
    }

    /// Run a configured validator over the current snapshot
    #[must_use]
    pub fn validate_with(&self, validator: &PyramidValidator) -> ValidationReport {
        validator.validate(&self.pyramid)
    }

    /// Encode the document as compact JSON
    ///
    /// # Errors
    /// Returns [`PyramidError::Model`] if encoding fails
    pub fn to_json(&self) -> Result<String> {
        Ok(self.pyramid.to_json()?)
    }

    /// Encode the document as indented JSON
    ///
    /// # Errors
    /// Returns [`PyramidError::Model`] if encoding fails
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(self.pyramid.to_json_pretty()?)
    }

    /// Load a manager from a JSON document
    ///
    /// # Errors
    /// Returns [`PyramidError::Model`] for malformed documents
    pub fn from_json(json: &str) -> Result<Self> {
        let pyramid = StrategyPyramid::from_json(json)?;
        tracing::info!(
            project = %pyramid.metadata.project_name,
            entities = pyramid.counts().total(),
            "loaded pyramid"
        );
        Ok(Self::from_pyramid(pyramid))
    }

    fn stamp(&self) -> AuditInfo {
        AuditInfo::now().with_created_by(self.author.clone())
    }

    fn mark_modified(&mut self) {
        self.pyramid.touch();
    }

    fn require_driver(&self, driver_id: DriverId) -> Result<()> {
        if self.pyramid.driver(driver_id).is_some() {
            Ok(())
        } else {
            tracing::warn!(%driver_id, "rejected write referencing unknown driver");
            Err(PyramidError::reference_not_found(
                EntityKind::StrategicDriver,
                driver_id,
            ))
        }
    }

    fn record_added<E: Entity>(&mut self, entity: &E) {
        self.mark_modified();
        tracing::debug!(kind = %E::KIND, id = %entity.id(), "added entity");
    }

    fn record_removed<E: Entity>(&mut self, id: E::Id, removed: bool) -> bool {
        if removed {
            self.mark_modified();
            tracing::debug!(kind = %E::KIND, %id, "removed entity");
        }
        removed
    }

    fn finish_update<E: Entity>(&mut self, id: E::Id, updated: bool) -> bool {
        if updated {
            self.mark_modified();
            tracing::debug!(kind = %E::KIND, %id, "updated entity");
        }
        updated
    }
}

/// Apply a patch to the entity with `id`, touching it and the document
///
/// Returns `false` when no entity has that id.
fn apply_patch<E, P>(items: &mut [E], id: E::Id, patch: P) -> bool
where
    E: Entity,
    P: Patch<E>,
{
    match find_by_id_mut(items, id) {
        Some(entity) => {
            patch.apply_to(entity);
            entity.touch();
            true
        }
        None => false,
    }
}

#[cfg(test)]
impl PyramidManager {
    /// Move every modification stamp a day into the past
    ///
    /// Returns the new stamp so tests can check that a write moved it on.
    pub(crate) fn backdate(&mut self) -> chrono::DateTime<chrono::Utc> {
        fn backdate_all<E: Entity>(items: &mut [E], at: chrono::DateTime<chrono::Utc>) {
            for item in items {
                item.audit_mut().updated_at = at;
            }
        }

        let at = chrono::Utc::now() - chrono::Duration::days(1);
        let pyramid = &mut self.pyramid;
        pyramid.metadata.updated_at = at;
        if let Some(vision) = pyramid.vision.as_mut() {
            vision.audit.updated_at = at;
            backdate_all(&mut vision.statements, at);
        }
        backdate_all(&mut pyramid.values, at);
        backdate_all(&mut pyramid.behaviours, at);
        backdate_all(&mut pyramid.strategic_drivers, at);
        backdate_all(&mut pyramid.strategic_intents, at);
        backdate_all(&mut pyramid.enablers, at);
        backdate_all(&mut pyramid.iconic_commitments, at);
        backdate_all(&mut pyramid.team_objectives, at);
        backdate_all(&mut pyramid.individual_objectives, at);
        at
    }
}
