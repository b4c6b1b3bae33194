//! Rule-by-rule tests for the pyramid validator.
//!
//! Documents are assembled directly from model types so each test controls
//! exactly which references exist and which dangle.

use pretty_assertions::assert_eq;
use pyramid_model::{
    Behaviour, DriverId, EntityKind, Horizon, IconicCommitment, IndividualObjective, IntentId,
    Metadata, SecondaryAlignment, StatementType, StrategicDriver, StrategicIntent, StrategyPyramid,
    TeamObjective, Value, ValueId, Vision, VisionStatement, Weighting,
};
use pyramid_validation::{
    BalanceCheck, CascadeCheck, CommitmentQualityCheck, CompletenessCheck, IssueCategory,
    LanguageCheck, OrphanCheck, PyramidValidator, Severity, StructureCheck, ValidationCheck,
    ValidationConfig, ValidationContext, ValidationIssue, WeightingCheck,
};

fn empty() -> StrategyPyramid {
    StrategyPyramid::new(Metadata::new("FY26 Strategy", "Acme"))
}

fn run(check: &dyn ValidationCheck, doc: &StrategyPyramid) -> Vec<ValidationIssue> {
    let config = ValidationConfig::default();
    check.collect(&ValidationContext::new(doc, &config))
}

/// A small but complete document that raises no issues at all.
fn healthy() -> StrategyPyramid {
    let mut doc = empty();

    let mut vision = Vision::new();
    vision.statements.push(VisionStatement::new(
        StatementType::Vision,
        "Every family in the region banks with a neighbour they trust",
        0,
    ));
    doc.vision = Some(vision);

    for name in ["Integrity", "Curiosity", "Care"] {
        doc.values.push(Value::new(name, ""));
    }

    let drivers: Vec<_> = ["Customers", "People", "Operations"]
        .into_iter()
        .map(|n| StrategicDriver::new(n, ""))
        .collect();

    for (i, driver) in drivers.iter().enumerate() {
        let intent = StrategicIntent::new(
            format!("Members say branch {i} solved their problem on the first visit"),
            driver.id,
            true,
        );
        let commitment = IconicCommitment::new(format!("Launch service hub {i}"), driver.id, Horizon::H1)
            .with_target_date("2026-06-30")
            .with_intents(vec![intent.id]);
        let mut team = TeamObjective::new(format!("Hub {i} ready"), "Branch Ops");
        team.primary_commitment_id = Some(commitment.id);
        let individual = IndividualObjective::new(format!("Train hub {i} staff"), "Sam", vec![team.id]);

        doc.strategic_intents.push(intent);
        doc.iconic_commitments.push(commitment);
        doc.team_objectives.push(team);
        doc.individual_objectives.push(individual);
    }
    doc.strategic_drivers = drivers;
    doc
}

#[test]
fn healthy_document_is_clean() {
    let report = PyramidValidator::new().validate(&healthy());
    assert_eq!(report.issues, Vec::new());
    assert!(report.passed());
}

#[test]
fn empty_document_fails_completeness() {
    let issues = run(&CompletenessCheck, &empty());
    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .map(|i| i.message.as_str())
        .collect();
    assert_eq!(
        errors,
        [
            "No vision defined",
            "No values defined",
            "No strategic drivers defined",
            "No strategic intents defined",
        ]
    );
    assert!(issues
        .iter()
        .any(|i| i.severity == Severity::Warning && i.message == "No iconic commitments defined"));
}

#[test]
fn value_counts_outside_range_warn() {
    let mut doc = healthy();
    doc.values.truncate(2);
    let issues = run(&CompletenessCheck, &doc);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Warning);
    assert!(issues[0].message.starts_with("Only 2 values"));

    for name in ["A", "B", "C", "D"] {
        doc.values.push(Value::new(name, ""));
    }
    let issues = run(&CompletenessCheck, &doc);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.starts_with("6 values"));
}

#[test]
fn removed_driver_leaves_dangling_references() {
    let mut doc = healthy();
    let removed = doc.strategic_drivers.remove(0);

    let issues = run(&StructureCheck, &doc);
    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .collect();
    // the intent and the commitment both pointed at the removed driver
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|i| i.message.contains(&removed.id.to_string())));
    assert_eq!(errors[0].item_type, Some(EntityKind::StrategicIntent));
    assert_eq!(errors[1].item_type, Some(EntityKind::IconicCommitment));
}

#[test]
fn secondary_alignment_problems_are_warnings() {
    let mut doc = healthy();
    let primary = doc.iconic_commitments[0].primary_driver_id;
    doc.iconic_commitments[0]
        .secondary_alignments
        .push(SecondaryAlignment::new(primary, None, None));
    doc.iconic_commitments[0]
        .secondary_alignments
        .push(SecondaryAlignment::new(DriverId::new(), None, None));

    let issues = run(&StructureCheck, &doc);
    assert_eq!(issues.len(), 2);
    assert!(issues.iter().all(|i| i.severity == Severity::Warning));
    assert!(issues[0].message.contains("primary driver as a secondary"));
    assert!(issues[1].message.contains("missing driver"));
}

#[test]
fn dangling_lower_tier_links_are_warnings() {
    let mut doc = healthy();
    doc.behaviours
        .push(Behaviour::new("We speak up", vec![ValueId::new()]));
    doc.iconic_commitments[1].primary_intent_ids.push(IntentId::new());
    doc.team_objectives[0].primary_commitment_id = Some(pyramid_model::CommitmentId::new());
    doc.individual_objectives[0]
        .team_objective_ids
        .push(pyramid_model::TeamObjectiveId::new());

    let issues = run(&StructureCheck, &doc);
    assert_eq!(issues.len(), 4);
    assert!(issues.iter().all(|i| i.severity == Severity::Warning));
}

#[test]
fn orphans_are_reported_per_item() {
    let mut doc = healthy();
    doc.strategic_drivers.push(StrategicDriver::new("Lonely", ""));
    let unused = StrategicIntent::new("Suppliers call us first", doc.strategic_drivers[0].id, true);
    doc.strategic_intents.push(unused);
    doc.iconic_commitments[2].primary_intent_ids.clear();

    let issues = run(&OrphanCheck, &doc);
    let messages: Vec<_> = issues.iter().map(|i| i.message.as_str()).collect();
    assert_eq!(messages.len(), 4);
    assert!(messages[0].contains("Lonely"));
    // the intent delivered by commitment 2 and the new unused one
    assert!(messages[1].contains("branch 2"));
    assert!(messages[2].contains("Suppliers"));
    assert!(messages[3].contains("service hub 2"));
}

#[test]
fn six_one_one_one_one_split_flags_only_the_concentrated_driver() {
    let mut doc = empty();
    let drivers: Vec<_> = (0..5)
        .map(|i| StrategicDriver::new(format!("Driver {i}"), ""))
        .collect();
    for (driver, count) in drivers.iter().zip([6, 1, 1, 1, 1]) {
        for n in 0..count {
            doc.iconic_commitments
                .push(IconicCommitment::new(format!("Launch {n}"), driver.id, Horizon::H1));
        }
    }
    doc.strategic_drivers = drivers;

    let issues = run(&BalanceCheck, &doc);
    assert_eq!(issues.len(), 1, "exactly 10% must not be flagged: {issues:?}");
    assert_eq!(issues[0].severity, Severity::Warning);
    assert!(issues[0].message.contains("Driver 0"));
    assert!(issues[0].message.contains("over-concentrated"));
    assert!(issues[0].message.contains("60%"));
}

#[test]
fn small_and_empty_shares_are_flagged() {
    let mut doc = empty();
    let big = StrategicDriver::new("Big", "");
    let small = StrategicDriver::new("Small", "");
    let none = StrategicDriver::new("None", "");
    for n in 0..11 {
        doc.iconic_commitments
            .push(IconicCommitment::new(format!("Build {n}"), big.id, Horizon::H2));
    }
    doc.iconic_commitments
        .push(IconicCommitment::new("Build extra", small.id, Horizon::H2));
    doc.strategic_drivers = vec![big, small, none];

    let issues = run(&BalanceCheck, &doc);
    let by_severity: Vec<_> = issues.iter().map(|i| (i.severity, i.message.contains("no commitments"))).collect();
    assert_eq!(
        by_severity,
        [
            (Severity::Warning, false),
            (Severity::Info, false),
            (Severity::Warning, true),
        ]
    );
}

#[test]
fn balance_is_skipped_without_commitments() {
    let mut doc = empty();
    doc.strategic_drivers.push(StrategicDriver::new("Growth", ""));
    assert!(run(&BalanceCheck, &doc).is_empty());
}

#[test]
fn jargon_heavy_intent_triggers_language_warning() {
    let mut doc = empty();
    let driver = StrategicDriver::new("Partners", "");
    doc.strategic_intents.push(StrategicIntent::new(
        "We aim to leverage synergies to enhance our partnership",
        driver.id,
        false,
    ));
    doc.strategic_drivers.push(driver);

    let issues = run(&LanguageCheck, &doc);
    let warning = issues
        .iter()
        .find(|i| i.severity == Severity::Warning)
        .expect("language warning");
    assert!(warning.message.contains("3 vanilla phrases"));
    assert!(issues
        .iter()
        .any(|i| i.severity == Severity::Info && i.message.contains("internal plan")));
}

#[test]
fn stakeholder_voice_suppresses_first_person_note() {
    let mut doc = empty();
    let driver = StrategicDriver::new("Customers", "");
    doc.strategic_intents.push(StrategicIntent::new(
        "We will always find what we need in one visit",
        driver.id,
        true,
    ));
    doc.strategic_drivers.push(driver);
    assert!(run(&LanguageCheck, &doc).is_empty());
}

#[test]
fn vision_statements_have_a_lower_jargon_threshold() {
    let mut doc = empty();
    let mut vision = Vision::new();
    vision.statements.push(VisionStatement::new(
        StatementType::Vision,
        "A world-class, innovative bank",
        0,
    ));
    vision.statements.push(VisionStatement::new(
        StatementType::Mission,
        "Deliver excellence",
        1,
    ));
    doc.vision = Some(vision);

    let issues = run(&LanguageCheck, &doc);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.starts_with("vision statement uses 2"));
}

#[test]
fn diluted_primary_driver_is_warned() {
    let mut doc = empty();
    let primary = StrategicDriver::new("Growth", "");
    let other = StrategicDriver::new("Cost", "");
    let third = StrategicDriver::new("People", "");
    let weight = |w| Some(Weighting::new(w).unwrap());

    // primary share exactly 0.4: balanced under the inclusive threshold
    doc.iconic_commitments.push(
        IconicCommitment::new("Launch exactly", primary.id, Horizon::H1)
            .with_alignment(SecondaryAlignment::new(other.id, weight(0.75), None))
            .with_alignment(SecondaryAlignment::new(third.id, weight(0.75), None)),
    );
    // primary share 1 / 2.8
    doc.iconic_commitments.push(
        IconicCommitment::new("Launch diluted", primary.id, Horizon::H1)
            .with_alignment(SecondaryAlignment::new(other.id, weight(1.0), None))
            .with_alignment(SecondaryAlignment::new(third.id, weight(0.8), None)),
    );
    doc.strategic_drivers = vec![primary, other, third];

    let issues = run(&WeightingCheck, &doc);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("Launch diluted"));
    assert!(issues[0].message.contains("36%"));
}

#[test]
fn weighting_threshold_is_configurable() {
    let mut doc = empty();
    let primary = StrategicDriver::new("Growth", "");
    let other = StrategicDriver::new("Cost", "");
    doc.iconic_commitments.push(
        IconicCommitment::new("Launch app", primary.id, Horizon::H1).with_alignment(
            SecondaryAlignment::new(other.id, Some(Weighting::new(0.5).unwrap()), None),
        ),
    );
    doc.strategic_drivers = vec![primary, other];

    // primary share 2/3
    let lenient = PyramidValidator::new().validate(&doc);
    assert_eq!(lenient.in_category(IssueCategory::Weighting).count(), 0);

    let strict = PyramidValidator::new()
        .with_weighting_threshold(0.7)
        .validate(&doc);
    assert_eq!(strict.in_category(IssueCategory::Weighting).count(), 1);
}

#[test]
fn unlinked_objectives_are_reported() {
    let mut doc = empty();
    doc.team_objectives.push(TeamObjective::new("Tidy backlog", "Platform"));
    doc.individual_objectives
        .push(IndividualObjective::new("Learn Rust", "Alex", Vec::new()));

    let issues = run(&CascadeCheck, &doc);
    let severities: Vec<_> = issues.iter().map(|i| i.severity).collect();
    assert_eq!(severities, [Severity::Info, Severity::Warning]);
}

#[test]
fn dated_action_commitment_passes_quality_check() {
    let mut doc = empty();
    let driver = StrategicDriver::new("People", "");
    let commitment = IconicCommitment::new("Deploy Workday globally", driver.id, Horizon::H1)
        .with_target_date("2026-12-31");
    let id = commitment.id.to_string();
    doc.iconic_commitments.push(commitment);
    doc.strategic_drivers.push(driver);

    let issues = run(&CommitmentQualityCheck, &doc);
    assert!(issues.iter().all(|i| i.item_id.as_deref() != Some(id.as_str())));
    assert!(issues.is_empty());
}

#[test]
fn vague_undated_commitment_gets_three_notes() {
    let mut doc = empty();
    let driver = StrategicDriver::new("Growth", "");
    doc.iconic_commitments.push(IconicCommitment::new(
        "Customer excellence programme",
        driver.id,
        Horizon::H3,
    ));
    doc.strategic_drivers.push(driver);

    let issues = run(&CommitmentQualityCheck, &doc);
    assert_eq!(issues.len(), 3);
    assert!(issues.iter().all(|i| i.severity == Severity::Info));
}

#[test]
fn summary_tracks_failure() {
    let report = PyramidValidator::new().validate(&empty());
    assert!(!report.passed());
    assert_eq!(report.summary.errors, report.with_severity(Severity::Error).count());
    assert_eq!(report.summary.total, report.issues.len());
}
