//! Values and the behaviours that express them

use crate::entity::{impl_entity, AuditInfo, EntityKind};
use crate::ids::{BehaviourId, ValueId};
use serde::{Deserialize, Serialize};

/// Organisational value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
    /// Identifier
    pub id: ValueId,
    /// Short name, e.g. "Integrity"
    pub name: String,
    /// What the value means in practice
    #[serde(default)]
    pub description: String,
    /// Audit stamps
    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl Value {
    /// Create new value
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: ValueId::new(),
            name: name.into(),
            description: description.into(),
            audit: AuditInfo::now(),
        }
    }
}

impl_entity!(Value, ValueId, EntityKind::Value);

/// Observable behaviour linked to zero or more values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Behaviour {
    /// Identifier
    pub id: BehaviourId,
    /// Behaviour statement
    pub statement: String,
    /// Values this behaviour expresses
    #[serde(default)]
    pub value_ids: Vec<ValueId>,
    /// Audit stamps
    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl Behaviour {
    /// Create new behaviour
    #[must_use]
    pub fn new(statement: impl Into<String>, value_ids: Vec<ValueId>) -> Self {
        Self {
            id: BehaviourId::new(),
            statement: statement.into(),
            value_ids,
            audit: AuditInfo::now(),
        }
    }

    /// Whether the behaviour is linked to the given value
    #[inline]
    #[must_use]
    pub fn expresses(&self, value_id: ValueId) -> bool {
        self.value_ids.contains(&value_id)
    }
}

impl_entity!(Behaviour, BehaviourId, EntityKind::Behaviour);
