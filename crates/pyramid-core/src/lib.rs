//! Pyramid Core
//!
//! The authoring surface for strategy documents.
//!
//! # Overview
//!
//! - **[`PyramidManager`]**: every write to one document; eager checks on
//!   the mandatory references, boolean results for missing ids
//! - **Patches**: partial updates that touch only supplied fields
//! - **[`SessionStore`]**: one manager per authoring session, single writer
//!   at a time
//! - **Draft ingestion**: name-referenced payloads applied atomically
//!   through the manager
//!
//! # Example
//!
//! ```rust
//! use pyramid_core::{NewCommitment, PyramidManager};
//! use pyramid_model::{Horizon, Metadata, StatementType};
//!
//! let mut manager = PyramidManager::new(Metadata::new("FY26 Strategy", "Acme"));
//! manager.add_vision_statement(StatementType::Vision, "Every home insured fairly");
//! let growth = manager.add_driver("Growth", "Win new members", None);
//! let intent = manager
//!     .add_intent("Members recommend us to friends", growth.id, true)
//!     .unwrap();
//! manager
//!     .add_commitment(
//!         NewCommitment::new("Launch referral app", growth.id)
//!             .with_horizon(Horizon::H1)
//!             .with_intents(vec![intent.id]),
//!     )
//!     .unwrap();
//!
//! // No values yet, so the document does not pass
//! assert!(!manager.validate().passed());
//! assert_eq!(manager.distribution_by_driver()["Growth"], 1);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod ingest;
pub mod inputs;
pub mod manager;
pub mod patch;
pub mod session;

// Re-exports
pub use error::{PyramidError, Result};
pub use ingest::{
    DraftAlignment, DraftBehaviour, DraftCommitment, DraftDriver, DraftEnabler,
    DraftIndividualObjective, DraftIntent, DraftStatement, DraftTeamObjective, DraftValue,
    ImportSummary, PyramidDraft,
};
pub use inputs::{NewCommitment, NewIndividualObjective, NewTeamObjective};
pub use manager::PyramidManager;
pub use patch::{
    BehaviourUpdate, CommitmentUpdate, DriverUpdate, EnablerUpdate, IndividualObjectiveUpdate,
    IntentUpdate, MetadataUpdate, Patch, TeamObjectiveUpdate, ValueUpdate, VisionStatementUpdate,
};
pub use session::{InMemorySessionStore, SessionId, SessionStore, SharedManager};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for authoring documents
    pub use crate::{
        NewCommitment, NewIndividualObjective, NewTeamObjective, PyramidDraft, PyramidError,
        PyramidManager, SessionId, SessionStore,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
