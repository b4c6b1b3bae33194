//! Testing utilities for the strategic pyramid workspace
//!
//! Shared fixtures built through the manager, so every fixture obeys the
//! same write rules as real sessions.

#![allow(missing_docs)]

use pyramid_core::{NewCommitment, NewIndividualObjective, NewTeamObjective, PyramidManager};
use pyramid_model::{DriverId, Horizon, Metadata, StatementType, StrategyPyramid};

/// Intent statement from workshop notes carrying three vanilla phrases
pub const JARGON_INTENT: &str = "We aim to leverage synergies to enhance our partnership";

/// Commitment name that is dated, tangible and jargon-free
pub const CONCRETE_COMMITMENT: &str = "Deploy Workday globally";

pub fn test_metadata() -> Metadata {
    Metadata::new("FY26 Strategy", "Riverside Credit Union").with_created_by("test")
}

pub fn empty_manager() -> PyramidManager {
    PyramidManager::new(test_metadata())
}

/// A small complete document the default validator reports nothing on
pub fn sample_manager() -> PyramidManager {
    let mut manager = empty_manager();
    manager.add_vision_statement(
        StatementType::Vision,
        "Every family in the region banks with a neighbour they trust",
    );
    for name in ["Integrity", "Curiosity", "Care"] {
        manager.add_value(name, "");
    }

    for (i, name) in ["Customers", "People", "Operations"].into_iter().enumerate() {
        let driver = manager.add_driver(name, "", None);
        let intent = manager
            .add_intent(
                format!("Members say branch {i} solved their problem on the first visit"),
                driver.id,
                true,
            )
            .unwrap();
        let commitment = manager
            .add_commitment(
                NewCommitment::new(format!("Launch service hub {i}"), driver.id)
                    .with_horizon(Horizon::H1)
                    .with_target_date("2026-06-30")
                    .with_intents(vec![intent.id]),
            )
            .unwrap();
        let team = manager.add_team_objective(
            NewTeamObjective::new(format!("Hub {i} ready"), "Branch Ops").for_commitment(commitment.id),
        );
        manager.add_individual_objective(
            NewIndividualObjective::new(format!("Train hub {i} staff"), "Sam").for_team_objective(team.id),
        );
    }
    manager
}

/// Drivers named `Driver {i}` with `split[i]` commitments each
///
/// Every driver gets one intent and every commitment delivers it, so the
/// only findings come from the split itself.
pub fn manager_with_split(split: &[usize]) -> (PyramidManager, Vec<DriverId>) {
    let mut manager = empty_manager();
    let mut drivers = Vec::with_capacity(split.len());

    for (i, &count) in split.iter().enumerate() {
        let driver = manager.add_driver(format!("Driver {i}"), "", None);
        let intent = manager
            .add_intent(format!("Stakeholders notice change {i}"), driver.id, true)
            .unwrap();
        for j in 0..count {
            manager
                .add_commitment(
                    NewCommitment::new(format!("Launch initiative {i}.{j}"), driver.id)
                        .with_target_date("2026-12-31")
                        .with_intents(vec![intent.id]),
                )
                .unwrap();
        }
        drivers.push(driver.id);
    }
    (manager, drivers)
}

/// Round-trip a document through its JSON form
pub fn json_round_trip(pyramid: &StrategyPyramid) -> StrategyPyramid {
    let json = pyramid.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    StrategyPyramid::from_value(value).unwrap()
}
