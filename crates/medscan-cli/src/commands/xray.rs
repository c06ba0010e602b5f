//! Fracture detection command.

use anyhow::Result;
use colored::Colorize;
use medscan_core::CaseRetrieval;
use medscan_imaging::analyzers::fracture;

use crate::commands::open_bank_for_reading;
use crate::input::read_bytes;

/// Run fracture detection on an X-ray image, optionally enriching the
/// report with similar cases from the case bank.
pub fn run(
    input_path: &str,
    symptoms: Option<&str>,
    casebank_path: &str,
    json: bool,
) -> Result<()> {
    let bytes = read_bytes(input_path)?;

    let bank = symptoms.and_then(|_| open_bank_for_reading(casebank_path));
    let retriever = bank.as_ref().map(|b| b as &dyn CaseRetrieval);

    let report = fracture::analyze_bytes(&bytes, symptoms, retriever)
        .map_err(|e| anyhow::anyhow!("Fracture analysis failed: {e}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", "Analyzing:".cyan().bold(), input_path);
    let finding = if report.is_fracture {
        report.diagnosis.red().bold()
    } else {
        report.diagnosis.green().bold()
    };
    println!(
        "{} {} ({:.1}% confidence)",
        "Finding:".bold(),
        finding,
        report.confidence
    );
    if report.is_severe {
        println!("{} multiple fracture sites detected", "severe:".red().bold());
    }
    for target in &report.attention_targets {
        println!(
            "  {} {} at ({:.1}%, {:.1}%)",
            "site:".dimmed(),
            target.label,
            target.x,
            target.y
        );
    }
    for precaution in &report.precautions {
        println!("  - {precaution}");
    }
    if !report.similar_cases.is_empty() {
        println!("{}", "Similar cases:".bold());
        for case in &report.similar_cases {
            println!(
                "  {} ({:.0}% match)",
                case.diagnosis, case.similarity
            );
        }
    }
    Ok(())
}
