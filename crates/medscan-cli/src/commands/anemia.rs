//! Anemia screening command.

use anyhow::Result;
use colored::Colorize;
use medscan_imaging::analyzers::anemia;

use crate::input::read_bytes;

/// Run the anemia screen on an eye-region photograph.
pub fn run(input_path: &str, json: bool) -> Result<()> {
    let bytes = read_bytes(input_path)?;
    let report = anemia::analyze_bytes(&bytes)
        .map_err(|e| anyhow::anyhow!("Anemia analysis failed: {e}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", "Analyzing:".cyan().bold(), input_path);
    println!(
        "{} {} ({})",
        "Status:".bold(),
        report.hemoglobin_status,
        format!("{:?}", report.severity).dimmed()
    );
    println!("{} {}", "Finding:".bold(), report.severity_description);
    println!(
        "{} {:.1} g/dL (erythema index {:.2})",
        "Estimated hemoglobin:".bold(),
        report.estimated_hemoglobin,
        report.erythema_index
    );
    let risk = serde_json::to_value(report.risk_level)?;
    println!(
        "{} {}  {} {:?}",
        "Risk:".bold(),
        risk.as_str().unwrap_or_default(),
        "Confidence:".bold(),
        report.confidence
    );
    if report.image_quality.is_degraded() {
        println!(
            "{} capture quality degraded; confidence lowered",
            "warning:".yellow().bold()
        );
    }
    println!("{}", "Recommendations:".bold());
    for rec in &report.recommendations {
        println!("  - {rec}");
    }
    Ok(())
}
