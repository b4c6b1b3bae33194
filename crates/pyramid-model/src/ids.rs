//! Typed entity identifiers
//!
//! Every tier gets its own UUID newtype so a driver id can never be passed
//! where an intent id is expected. All ids serialize as plain UUID strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generate a fresh random identifier
            #[inline]
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }
    };
}

entity_id!(
    /// Identifier of the vision container
    VisionId
);
entity_id!(
    /// Identifier of a single vision/mission/belief statement
    VisionStatementId
);
entity_id!(
    /// Identifier of a value
    ValueId
);
entity_id!(
    /// Identifier of a behaviour
    BehaviourId
);
entity_id!(
    /// Identifier of a strategic driver
    DriverId
);
entity_id!(
    /// Identifier of a strategic intent
    IntentId
);
entity_id!(
    /// Identifier of an enabler
    EnablerId
);
entity_id!(
    /// Identifier of an iconic commitment
    CommitmentId
);
entity_id!(
    /// Identifier of a team objective
    TeamObjectiveId
);
entity_id!(
    /// Identifier of an individual objective
    IndividualObjectiveId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(DriverId::new(), DriverId::new());
    }

    #[test]
    fn id_parses_from_display() {
        let id = IntentId::new();
        let parsed: IntentId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn id_serializes_as_plain_string() {
        let id = CommitmentId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }

    #[test]
    fn invalid_id_is_rejected() {
        assert!("not-a-uuid".parse::<ValueId>().is_err());
    }
}
