//! Strategic drivers, the intents that express them, and enablers

use crate::entity::{impl_entity, AuditInfo, EntityKind};
use crate::ids::{DriverId, EnablerId, IntentId};
use serde::{Deserialize, Serialize};

/// Strategic driver: one of the few areas the strategy chooses to focus on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategicDriver {
    /// Identifier
    pub id: DriverId,
    /// Short name
    pub name: String,
    /// What the driver covers
    #[serde(default)]
    pub description: String,
    /// Why this driver was chosen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    /// Audit stamps
    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl StrategicDriver {
    /// Create new driver
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: DriverId::new(),
            name: name.into(),
            description: description.into(),
            rationale: None,
            audit: AuditInfo::now(),
        }
    }

    /// With rationale
    #[inline]
    #[must_use]
    pub fn with_rationale(mut self, rationale: Option<String>) -> Self {
        self.rationale = rationale;
        self
    }
}

impl_entity!(StrategicDriver, DriverId, EntityKind::StrategicDriver);

/// Strategic intent: what success looks like for one driver
///
/// Intents written in the stakeholder voice describe the outcome from the
/// customer/employee point of view rather than as an internal plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategicIntent {
    /// Identifier
    pub id: IntentId,
    /// Intent statement
    pub statement: String,
    /// Driver this intent belongs to
    pub driver_id: DriverId,
    /// Written from the stakeholder's point of view
    #[serde(default)]
    pub is_stakeholder_voice: bool,
    /// Audit stamps
    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl StrategicIntent {
    /// Create new intent under a driver
    #[must_use]
    pub fn new(statement: impl Into<String>, driver_id: DriverId, is_stakeholder_voice: bool) -> Self {
        Self {
            id: IntentId::new(),
            statement: statement.into(),
            driver_id,
            is_stakeholder_voice,
            audit: AuditInfo::now(),
        }
    }
}

impl_entity!(StrategicIntent, IntentId, EntityKind::StrategicIntent);

/// Enabler: a capability or system supporting one or more drivers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enabler {
    /// Identifier
    pub id: EnablerId,
    /// Short name
    pub name: String,
    /// What the enabler provides
    #[serde(default)]
    pub description: String,
    /// Free-form category such as "technology" or "people"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabler_type: Option<String>,
    /// Drivers supported
    #[serde(default)]
    pub driver_ids: Vec<DriverId>,
    /// Audit stamps
    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl Enabler {
    /// Create new enabler
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: EnablerId::new(),
            name: name.into(),
            description: description.into(),
            enabler_type: None,
            driver_ids: Vec::new(),
            audit: AuditInfo::now(),
        }
    }

    /// With type tag
    #[inline]
    #[must_use]
    pub fn with_type(mut self, enabler_type: Option<String>) -> Self {
        self.enabler_type = enabler_type;
        self
    }

    /// With supported drivers
    #[inline]
    #[must_use]
    pub fn with_drivers(mut self, driver_ids: Vec<DriverId>) -> Self {
        self.driver_ids = driver_ids;
        self
    }
}

impl_entity!(Enabler, EnablerId, EntityKind::Enabler);
