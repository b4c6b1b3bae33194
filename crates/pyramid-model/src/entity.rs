//! Shared entity plumbing
//!
//! Provides:
//! - [`AuditInfo`]: timestamps and attribution carried by every entity
//! - [`Entity`]: uniform access to id and audit info across tiers
//! - [`EntityKind`]: tier names used in errors and validation output
//! - Generic lookup/removal helpers over owning lists

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Creation/modification stamps and optional attribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditInfo {
    /// When the entity was created
    pub created_at: DateTime<Utc>,
    /// When the entity was last modified
    pub updated_at: DateTime<Utc>,
    /// Who created the entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// Free-text facilitator notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AuditInfo {
    /// Fresh stamps at the current instant
    #[must_use]
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            created_by: None,
            notes: None,
        }
    }

    /// With creator attribution
    #[inline]
    #[must_use]
    pub fn with_created_by(mut self, created_by: Option<String>) -> Self {
        self.created_by = created_by;
        self
    }

    /// Mark as modified now
    #[inline]
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for AuditInfo {
    fn default() -> Self {
        Self::now()
    }
}

/// Tier of the pyramid an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Vision container
    Vision,
    /// Individual vision statement
    VisionStatement,
    /// Value
    Value,
    /// Behaviour
    Behaviour,
    /// Strategic driver
    StrategicDriver,
    /// Strategic intent
    StrategicIntent,
    /// Enabler
    Enabler,
    /// Iconic commitment
    IconicCommitment,
    /// Team objective
    TeamObjective,
    /// Individual objective
    IndividualObjective,
}

impl EntityKind {
    /// Stable snake_case name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Vision => "vision",
            EntityKind::VisionStatement => "vision_statement",
            EntityKind::Value => "value",
            EntityKind::Behaviour => "behaviour",
            EntityKind::StrategicDriver => "strategic_driver",
            EntityKind::StrategicIntent => "strategic_intent",
            EntityKind::Enabler => "enabler",
            EntityKind::IconicCommitment => "iconic_commitment",
            EntityKind::TeamObjective => "team_objective",
            EntityKind::IndividualObjective => "individual_objective",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common surface of every pyramid entity
pub trait Entity {
    /// Typed identifier for this tier
    type Id: Copy + Eq + fmt::Display;

    /// Tier this entity lives in
    const KIND: EntityKind;

    /// Entity identifier
    fn id(&self) -> Self::Id;

    /// Audit stamps
    fn audit(&self) -> &AuditInfo;

    /// Mutable audit stamps
    fn audit_mut(&mut self) -> &mut AuditInfo;

    /// Mark as modified now
    fn touch(&mut self) {
        self.audit_mut().touch();
    }
}

macro_rules! impl_entity {
    ($ty:ty, $id:ty, $kind:expr) => {
        impl $crate::entity::Entity for $ty {
            type Id = $id;
            const KIND: $crate::entity::EntityKind = $kind;

            #[inline]
            fn id(&self) -> Self::Id {
                self.id
            }

            #[inline]
            fn audit(&self) -> &$crate::entity::AuditInfo {
                &self.audit
            }

            #[inline]
            fn audit_mut(&mut self) -> &mut $crate::entity::AuditInfo {
                &mut self.audit
            }
        }
    };
}
pub(crate) use impl_entity;

/// Find an entity by id (linear scan)
#[must_use]
pub fn find_by_id<T: Entity>(items: &[T], id: T::Id) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

/// Find an entity by id for mutation (linear scan)
pub fn find_by_id_mut<T: Entity>(items: &mut [T], id: T::Id) -> Option<&mut T> {
    items.iter_mut().find(|item| item.id() == id)
}

/// Filter an owning list, returning whether anything was removed
pub fn remove_by_id<T: Entity>(items: &mut Vec<T>, id: T::Id) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}
