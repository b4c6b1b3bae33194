//! Iconic commitments and their driver alignments
//!
//! A commitment belongs to exactly one primary driver. It may also
//! contribute to other drivers through secondary alignments, each with an
//! optional weighting in `[0, 1]`. Weightings measure relative secondary
//! contribution; they are not required to sum to any total.
//!
//! The primary share is `1 / (1 + Σ secondary weightings)`. A commitment
//! whose primary share falls below the threshold no longer represents a
//! genuine strategic choice of one driver.

use crate::entity::{impl_entity, AuditInfo, EntityKind};
use crate::error::ModelError;
use crate::ids::{CommitmentId, DriverId, IntentId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default primary-share floor for [`IconicCommitment::is_balanced_weighting`]
pub const DEFAULT_WEIGHTING_THRESHOLD: f64 = 0.4;

/// Delivery horizon
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Horizon {
    /// Current year
    #[default]
    H1,
    /// Next one to two years
    H2,
    /// Beyond two years
    H3,
}

impl Horizon {
    /// All horizons, nearest first
    pub const ALL: [Horizon; 3] = [Horizon::H1, Horizon::H2, Horizon::H3];

    /// Short label
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Horizon::H1 => "H1",
            Horizon::H2 => "H2",
            Horizon::H3 => "H3",
        }
    }

    /// Human-readable time window
    #[must_use]
    pub fn window(self) -> &'static str {
        match self {
            Horizon::H1 => "0-12 months",
            Horizon::H2 => "12-24 months",
            Horizon::H3 => "24-36 months",
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Horizon {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "H1" => Ok(Horizon::H1),
            "H2" => Ok(Horizon::H2),
            "H3" => Ok(Horizon::H3),
            _ => Err(ModelError::UnknownHorizon(s.to_string())),
        }
    }
}

/// Secondary contribution weight, always within `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Weighting(f64);

impl Weighting {
    /// Create a checked weighting
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidWeighting`] for NaN, infinities or values
    /// outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, ModelError> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ModelError::InvalidWeighting(value))
        }
    }

    /// Raw value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Weighting {
    type Error = ModelError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weighting> for f64 {
    fn from(weighting: Weighting) -> Self {
        weighting.0
    }
}

/// Contribution of a commitment to a driver other than its primary one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryAlignment {
    /// Driver receiving the secondary contribution
    pub driver_id: DriverId,
    /// Relative contribution weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weighting: Option<Weighting>,
    /// Why the commitment also serves this driver
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

impl SecondaryAlignment {
    /// Create new alignment
    #[must_use]
    pub fn new(driver_id: DriverId, weighting: Option<Weighting>, rationale: Option<String>) -> Self {
        Self {
            driver_id,
            weighting,
            rationale,
        }
    }

    /// Weight value, zero when unset
    #[inline]
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weighting.map_or(0.0, Weighting::value)
    }
}

/// Iconic commitment: a tangible, dated action that makes a driver real
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconicCommitment {
    /// Identifier
    pub id: CommitmentId,
    /// Commitment name, ideally action-led ("Launch ...")
    pub name: String,
    /// What will be delivered
    #[serde(default)]
    pub description: String,
    /// Delivery horizon
    #[serde(default)]
    pub horizon: Horizon,
    /// Free-text target date such as "2026-03-31" or "Q3 2026"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
    /// Accountable owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// The single driver this commitment chooses
    pub primary_driver_id: DriverId,
    /// Intents this commitment delivers
    #[serde(default)]
    pub primary_intent_ids: Vec<IntentId>,
    /// Contributions to other drivers
    #[serde(default)]
    pub secondary_alignments: Vec<SecondaryAlignment>,
    /// Audit stamps
    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl IconicCommitment {
    /// Create new commitment under a primary driver
    #[must_use]
    pub fn new(name: impl Into<String>, primary_driver_id: DriverId, horizon: Horizon) -> Self {
        Self {
            id: CommitmentId::new(),
            name: name.into(),
            description: String::new(),
            horizon,
            target_date: None,
            owner: None,
            primary_driver_id,
            primary_intent_ids: Vec::new(),
            secondary_alignments: Vec::new(),
            audit: AuditInfo::now(),
        }
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With target date
    #[inline]
    #[must_use]
    pub fn with_target_date(mut self, target_date: impl Into<String>) -> Self {
        self.target_date = Some(target_date.into());
        self
    }

    /// With owner
    #[inline]
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// With delivered intents
    #[inline]
    #[must_use]
    pub fn with_intents(mut self, intent_ids: Vec<IntentId>) -> Self {
        self.primary_intent_ids = intent_ids;
        self
    }

    /// With an additional secondary alignment
    #[inline]
    #[must_use]
    pub fn with_alignment(mut self, alignment: SecondaryAlignment) -> Self {
        self.secondary_alignments.push(alignment);
        self
    }

    /// `1 + Σ` secondary weightings
    #[must_use]
    pub fn total_weighting(&self) -> f64 {
        1.0 + self
            .secondary_alignments
            .iter()
            .map(SecondaryAlignment::weight)
            .sum::<f64>()
    }

    /// Share of the commitment attributed to the primary driver
    #[must_use]
    pub fn primary_share(&self) -> f64 {
        1.0 / self.total_weighting()
    }

    /// Whether the primary driver still dominates
    ///
    /// The threshold is inclusive: a primary share exactly equal to the
    /// threshold counts as balanced.
    #[must_use]
    pub fn is_balanced_weighting(&self, threshold: f64) -> bool {
        self.primary_share() >= threshold
    }

    /// Drivers reached through secondary alignments
    pub fn secondary_driver_ids(&self) -> impl Iterator<Item = DriverId> + '_ {
        self.secondary_alignments.iter().map(|a| a.driver_id)
    }

    /// Whether the commitment delivers the intent
    #[inline]
    #[must_use]
    pub fn delivers(&self, intent_id: IntentId) -> bool {
        self.primary_intent_ids.contains(&intent_id)
    }

    /// Whether a target date has been recorded
    #[must_use]
    pub fn has_target_date(&self) -> bool {
        self.target_date
            .as_deref()
            .is_some_and(|date| !date.trim().is_empty())
    }
}

impl_entity!(IconicCommitment, CommitmentId, EntityKind::IconicCommitment);
