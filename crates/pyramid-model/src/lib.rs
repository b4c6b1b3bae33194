//! Strategic Pyramid Model
//!
//! Typed entity model for a nine-tier strategy document:
//! Vision → Values → Behaviours → Strategic Intent → Strategic Drivers →
//! Enablers → Iconic Commitments → Team Objectives → Individual Objectives.
//!
//! # Overview
//!
//! - **[`StrategyPyramid`]**: the document, one list per tier
//! - **Typed ids**: one UUID newtype per tier, serialized as strings
//! - **Lookup helpers**: read-only queries shared by the manager, the
//!   validator and exporters
//! - **Balance arithmetic**: commitment shares per driver
//!
//! The model enforces type and range constraints only (weighting in
//! `[0, 1]`, horizon in H1/H2/H3). Referential integrity is checked by the
//! manager on write and reported by the validator.
//!
//! # Example
//!
//! ```rust
//! use pyramid_model::{Horizon, IconicCommitment, Metadata, StrategicDriver, StrategyPyramid};
//!
//! let mut doc = StrategyPyramid::new(Metadata::new("FY26 Strategy", "Acme"));
//! let driver = StrategicDriver::new("Customer Growth", "Win and keep customers");
//! let commitment = IconicCommitment::new("Launch loyalty app", driver.id, Horizon::H1);
//! doc.strategic_drivers.push(driver);
//! doc.iconic_commitments.push(commitment);
//!
//! assert_eq!(doc.distribution_by_driver()["Customer Growth"], 1);
//! let restored = StrategyPyramid::from_json(&doc.to_json().unwrap()).unwrap();
//! assert_eq!(restored, doc);
//! ```

#![warn(missing_docs)]

pub mod balance;
pub mod commitment;
pub mod entity;
pub mod error;
pub mod ids;
pub mod lookup;
pub mod objectives;
pub mod pyramid;
pub mod strategy;
pub mod values;
pub mod vision;

// Re-exports
pub use balance::{
    BalanceFinding, BalanceStatus, DriverShare, OVER_CONCENTRATION_PERCENT,
    UNDER_REPRESENTATION_PERCENT,
};
pub use commitment::{
    Horizon, IconicCommitment, SecondaryAlignment, Weighting, DEFAULT_WEIGHTING_THRESHOLD,
};
pub use entity::{find_by_id, find_by_id_mut, remove_by_id, AuditInfo, Entity, EntityKind};
pub use error::ModelError;
pub use ids::{
    BehaviourId, CommitmentId, DriverId, EnablerId, IndividualObjectiveId, IntentId,
    TeamObjectiveId, ValueId, VisionId, VisionStatementId,
};
pub use objectives::{IndividualObjective, TeamObjective};
pub use pyramid::{Metadata, StrategyPyramid, TierCounts};
pub use strategy::{Enabler, StrategicDriver, StrategicIntent};
pub use values::{Behaviour, Value};
pub use vision::{StatementType, Vision, VisionStatement};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with pyramid documents
    pub use crate::{
        Behaviour, DriverId, Entity, EntityKind, Horizon, IconicCommitment, IntentId, Metadata,
        StatementType, StrategicDriver, StrategicIntent, StrategyPyramid, Value, Vision,
        VisionStatement,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
