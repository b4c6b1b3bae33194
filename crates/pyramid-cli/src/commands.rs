//! Subcommand implementations
//!
//! Each command reads a document through the manager and writes its report
//! to the given sink, so the binary and the tests share one code path.

use crate::config::PyramidConfig;
use anyhow::Context;
use pyramid_core::PyramidManager;
use pyramid_model::Horizon;
use pyramid_validation::PyramidValidator;
use std::io::Write;
use std::path::Path;

/// Load a document from a JSON file
///
/// # Errors
/// Fails if the file cannot be read or is not a valid document
pub fn load_document(path: &Path) -> anyhow::Result<PyramidManager> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading document {}", path.display()))?;
    let manager = PyramidManager::from_json(&json)
        .with_context(|| format!("parsing document {}", path.display()))?;
    tracing::info!(path = %path.display(), "document loaded");
    Ok(manager)
}

/// Run the validator and print its report
///
/// Returns whether the report passed (no error-level issues).
///
/// # Errors
/// Fails only on output errors
pub fn validate(
    manager: &PyramidManager,
    config: &PyramidConfig,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let validator = PyramidValidator::with_config(config.validation);
    let report = manager.validate_with(&validator);
    tracing::info!(
        passed = report.passed(),
        errors = report.summary.errors,
        warnings = report.summary.warnings,
        "validation finished"
    );

    if json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(report.passed());
    }

    writeln!(
        out,
        "Validation of '{}' ({})",
        manager.metadata().project_name,
        manager.metadata().organization
    )?;
    for issue in &report.issues {
        writeln!(out, "  {issue}")?;
    }
    let summary = &report.summary;
    writeln!(
        out,
        "{}: {} errors, {} warnings, {} info",
        if summary.passed { "PASSED" } else { "FAILED" },
        summary.errors,
        summary.warnings,
        summary.infos
    )?;
    Ok(report.passed())
}

/// Print entity counts and the commitment distribution per driver and horizon
///
/// # Errors
/// Fails only on output errors
pub fn summary(manager: &PyramidManager, out: &mut impl Write) -> anyhow::Result<()> {
    let counts = manager.counts();
    writeln!(out, "Project: {}", manager.metadata().project_name)?;
    writeln!(out, "Organization: {}", manager.metadata().organization)?;
    writeln!(out)?;

    let rows = [
        ("Vision statements", counts.vision_statements),
        ("Values", counts.values),
        ("Behaviours", counts.behaviours),
        ("Strategic drivers", counts.strategic_drivers),
        ("Strategic intents", counts.strategic_intents),
        ("Enablers", counts.enablers),
        ("Iconic commitments", counts.iconic_commitments),
        ("Team objectives", counts.team_objectives),
        ("Individual objectives", counts.individual_objectives),
    ];
    for (label, count) in rows {
        writeln!(out, "{label:<22} {count:>4}")?;
    }
    writeln!(out, "{:<22} {:>4}", "Total", counts.total())?;

    let distribution = manager.distribution_by_driver();
    if !distribution.is_empty() {
        writeln!(out)?;
        writeln!(out, "Commitments by driver:")?;
        for (driver, count) in &distribution {
            writeln!(out, "  {driver}: {count}")?;
        }
    }

    let commitments = &manager.pyramid().iconic_commitments;
    if !commitments.is_empty() {
        writeln!(out)?;
        writeln!(out, "Commitments by horizon:")?;
        for horizon in Horizon::ALL {
            let count = commitments.iter().filter(|c| c.horizon == horizon).count();
            writeln!(out, "  {horizon} ({}): {count}", horizon.window())?;
        }
    }
    Ok(())
}

/// Print drivers whose commitment share is out of balance
///
/// # Errors
/// Fails only on output errors
pub fn balance(manager: &PyramidManager, out: &mut impl Write) -> anyhow::Result<()> {
    if manager.pyramid().iconic_commitments.is_empty() {
        writeln!(out, "No commitments yet; balance not assessed")?;
        return Ok(());
    }

    let findings = manager.check_balance();
    if findings.is_empty() {
        writeln!(out, "All drivers within balance")?;
        return Ok(());
    }
    for finding in findings {
        writeln!(
            out,
            "{}: {} ({} commitments, {:.0}%)",
            finding.share.driver_name,
            finding.status,
            finding.share.commitments,
            finding.share.percentage
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyramid_model::Metadata;

    #[test]
    fn empty_document_fails_in_text_mode() {
        let manager = PyramidManager::new(Metadata::new("Draft", "Acme"));
        let mut out = Vec::new();

        let passed = validate(&manager, &PyramidConfig::default(), false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!passed);
        assert!(text.starts_with("Validation of 'Draft' (Acme)"));
        assert!(text.contains("[error] completeness: No vision defined"));
        assert!(text.trim_end().ends_with("info"));
        assert!(text.contains("FAILED: 4 errors"));
    }

    #[test]
    fn balance_without_commitments() {
        let manager = PyramidManager::new(Metadata::new("Draft", "Acme"));
        let mut out = Vec::new();
        balance(&manager, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No commitments yet; balance not assessed\n"
        );
    }
}
