//! Case bank management commands.

use anyhow::{Context, Result};
use colored::Colorize;
use medscan_casebank::CaseBank;
use medscan_core::{CaseMetadata, CaseRetrieval, RecordType};

use crate::commands::open_bank_for_reading;

/// Fields accepted when storing a case.
pub struct AddArgs {
    pub symptoms: String,
    pub diagnosis: Option<String>,
    pub patient_id: Option<String>,
    pub doctor: Option<String>,
    pub date: Option<String>,
    pub record_type: Option<String>,
    pub medicines: Vec<String>,
    pub precautions: Vec<String>,
}

/// Store one case. The snapshot must parse; a corrupt bank is never
/// overwritten here.
pub fn add(casebank_path: &str, args: AddArgs) -> Result<()> {
    let bank = CaseBank::open(casebank_path)
        .with_context(|| format!("Failed to open case bank: {casebank_path}"))?;

    let record_type = match args.record_type.as_deref() {
        Some("prescription") => Some(RecordType::Prescription),
        Some("learning_data") => Some(RecordType::LearningData),
        Some(other) => anyhow::bail!(
            "Unknown record type: {other} (expected prescription or learning_data)"
        ),
        None => None,
    };

    let metadata = CaseMetadata {
        patient_id: args.patient_id,
        diagnosis: args.diagnosis,
        symptoms: Some(args.symptoms.clone()),
        medicines: args.medicines,
        doctor_name: args.doctor,
        date: args.date,
        record_type,
        precautions: args.precautions,
    };
    bank.add_text(&args.symptoms, metadata)
        .context("Failed to store the case")?;

    println!(
        "{} case stored ({} total)",
        "Saved:".green().bold(),
        bank.len()
    );
    Ok(())
}

/// Search the bank for cases similar to a free-text query.
pub fn search(casebank_path: &str, query: &str, top_k: usize, json: bool) -> Result<()> {
    let Some(bank) = open_bank_for_reading(casebank_path) else {
        if json {
            println!("[]");
        }
        return Ok(());
    };

    let hits = bank
        .find_similar(query, top_k)
        .map_err(|e| anyhow::anyhow!("Search failed: {e}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("{}", "No similar cases found.".dimmed());
        return Ok(());
    }
    println!("{} {} hit(s)", "Found:".cyan().bold(), hits.len());
    for hit in &hits {
        println!(
            "  {:.0}% {}: {}",
            hit.similarity * 100.0,
            hit.metadata.diagnosis.as_deref().unwrap_or("(no diagnosis)"),
            hit.metadata.symptoms.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

/// Remove every stored case.
pub fn clear(casebank_path: &str) -> Result<()> {
    let bank = CaseBank::open(casebank_path)
        .with_context(|| format!("Failed to open case bank: {casebank_path}"))?;
    bank.clear().context("Failed to clear the case bank")?;
    println!("{} case bank emptied", "Cleared:".green().bold());
    Ok(())
}
