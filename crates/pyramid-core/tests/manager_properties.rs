//! Manager behaviour across whole documents: reference rejection,
//! idempotent removal, JSON round trips and validator stability.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use pyramid_core::{NewCommitment, PyramidManager};
use pyramid_model::{BalanceStatus, DriverId, Weighting};
use pyramid_test_utils::{
    empty_manager, json_round_trip, manager_with_split, sample_manager, CONCRETE_COMMITMENT,
    JARGON_INTENT,
};
use pyramid_validation::{IssueCategory, PyramidValidator, Severity};

proptest! {
    #[test]
    fn intents_with_unknown_drivers_never_land(
        picks in prop::collection::vec((any::<bool>(), 0usize..3), 1..40)
    ) {
        let mut manager = empty_manager();
        let drivers: Vec<DriverId> = (0..3)
            .map(|i| manager.add_driver(format!("Driver {i}"), "", None).id)
            .collect();

        let mut accepted = 0;
        for (n, (known, pick)) in picks.iter().enumerate() {
            let driver_id = if *known { drivers[*pick] } else { DriverId::new() };
            let before = manager.pyramid().strategic_intents.clone();

            match manager.add_intent(format!("Stakeholders notice change {n}"), driver_id, true) {
                Ok(intent) => {
                    prop_assert!(*known);
                    prop_assert_eq!(intent.driver_id, driver_id);
                    accepted += 1;
                }
                Err(err) => {
                    prop_assert!(!*known);
                    prop_assert!(err.is_reference_error());
                    prop_assert_eq!(&manager.pyramid().strategic_intents, &before);
                }
            }
        }
        prop_assert_eq!(manager.pyramid().strategic_intents.len(), accepted);
    }

    #[test]
    fn second_removal_reports_not_found(count in 1usize..12, index in 0usize..12) {
        let mut manager = empty_manager();
        let ids: Vec<_> = (0..count)
            .map(|i| manager.add_value(format!("Value {i}"), "").id)
            .collect();
        let target = ids[index % count];

        prop_assert!(manager.remove_value(target));
        let after_first = manager.pyramid().values.clone();

        prop_assert!(!manager.remove_value(target));
        prop_assert_eq!(&manager.pyramid().values, &after_first);
        prop_assert_eq!(after_first.len(), count - 1);
    }

    #[test]
    fn json_round_trip_keeps_topology(split in prop::collection::vec(0usize..5, 1..6)) {
        let (manager, _) = manager_with_split(&split);
        let restored = PyramidManager::from_json(&manager.to_json().unwrap()).unwrap();

        prop_assert_eq!(restored.pyramid(), manager.pyramid());
        prop_assert_eq!(restored.counts(), manager.counts());
        prop_assert_eq!(restored.distribution_by_driver(), manager.distribution_by_driver());
    }
}

#[test]
fn sample_document_validates_clean() {
    let manager = sample_manager();
    let report = manager.validate();
    assert_eq!(report.issues, Vec::new());
    assert!(report.passed());
}

#[test]
fn sample_document_survives_round_trip() {
    let manager = sample_manager();
    let restored = json_round_trip(manager.pyramid());

    assert_eq!(&restored, manager.pyramid());
    for (before, after) in manager
        .pyramid()
        .iconic_commitments
        .iter()
        .zip(&restored.iconic_commitments)
    {
        assert_eq!(before.id, after.id);
        assert_eq!(before.primary_intent_ids, after.primary_intent_ids);
        assert_eq!(before.primary_driver_id, after.primary_driver_id);
    }
}

#[test]
fn validation_is_idempotent() {
    let mut manager = sample_manager();
    let driver = manager.pyramid().strategic_drivers[0].id;
    manager.add_intent(JARGON_INTENT, driver, false).unwrap();
    manager.add_value("Extra", "");

    let first = manager.validate();
    let second = manager.validate();
    assert_eq!(first, second);
    assert!(!first.issues.is_empty());
}

#[test]
fn six_one_one_one_one_split() {
    let (manager, drivers) = manager_with_split(&[6, 1, 1, 1, 1]);
    let findings = manager.check_balance();

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].share.driver_id, drivers[0]);
    assert_eq!(findings[0].status, BalanceStatus::OverConcentrated);

    let report = manager.validate();
    let balance: Vec<_> = report.in_category(IssueCategory::Balance).collect();
    assert_eq!(balance.len(), 1);
    assert!(balance[0].message.contains("Driver 0"));
}

#[test]
fn primary_share_at_threshold_is_balanced() {
    let (mut manager, drivers) = manager_with_split(&[1, 0, 0]);
    let commitment = manager.pyramid().iconic_commitments[0].id;
    let weight = Some(Weighting::new(0.75).unwrap());
    manager.add_secondary_alignment(commitment, drivers[1], weight, None).unwrap();
    manager.add_secondary_alignment(commitment, drivers[2], weight, None).unwrap();

    let share = manager.get_commitment(commitment).unwrap().primary_share();
    assert!((share - 0.4).abs() < f64::EPSILON);
    assert_eq!(manager.validate().in_category(IssueCategory::Weighting).count(), 0);

    let strict = PyramidValidator::new().with_weighting_threshold(0.5);
    assert_eq!(
        manager.validate_with(&strict).in_category(IssueCategory::Weighting).count(),
        1
    );
}

#[test]
fn jargon_intent_draws_language_warning() {
    let mut manager = sample_manager();
    let driver = manager.pyramid().strategic_drivers[0].id;
    let intent = manager.add_intent(JARGON_INTENT, driver, true).unwrap();

    let report = manager.validate();
    let id = intent.id.to_string();
    let warnings: Vec<_> = report
        .for_item(&id)
        .filter(|i| i.category == IssueCategory::Language && i.severity == Severity::Warning)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("3 vanilla phrases"));
}

#[test]
fn concrete_dated_commitment_has_no_quality_issues() {
    let mut manager = sample_manager();
    let driver = manager.pyramid().strategic_drivers[0].id;
    let commitment = manager
        .add_commitment(
            NewCommitment::new(CONCRETE_COMMITMENT, driver).with_target_date("2026-12-31"),
        )
        .unwrap();

    let report = manager.validate();
    let id = commitment.id.to_string();
    let quality = report
        .for_item(&id)
        .filter(|i| i.category == IssueCategory::CommitmentQuality)
        .count();
    assert_eq!(quality, 0);
}

#[test]
fn removing_a_driver_surfaces_structure_errors() {
    let mut manager = sample_manager();
    let driver = manager.pyramid().strategic_drivers[0].id;
    assert!(manager.remove_driver(driver));

    let report = manager.validate();
    assert!(!report.passed());
    assert_eq!(
        report
            .in_category(IssueCategory::Structure)
            .filter(|i| i.severity == Severity::Error)
            .count(),
        2
    );
}

#[test]
fn empty_manager_starts_with_nothing() {
    let manager = empty_manager();
    assert_eq!(manager.counts().total(), 0);
    assert!(manager.check_balance().is_empty());
}
