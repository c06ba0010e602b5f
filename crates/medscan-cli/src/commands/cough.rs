//! Cough analysis command.

use anyhow::Result;
use colored::Colorize;
use medscan_acoustics::analyze;

use crate::input::read_wav;

/// Run cough classification on a WAV recording.
pub fn run(input_path: &str, json: bool) -> Result<()> {
    let sample = read_wav(input_path)?;
    let report = analyze(&sample);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", "Analyzing:".cyan().bold(), input_path);
    let cough_type = serde_json::to_value(report.cough_type)?;
    println!(
        "{} {} ({} severity, {:?} confidence)",
        "Cough type:".bold(),
        cough_type.as_str().unwrap_or_default(),
        report.severity_level,
        report.confidence
    );
    println!(
        "{} RMS {:.4}, ZCR {:.4}, centroid {:.0} Hz, {:.2} s",
        "Acoustics:".dimmed(),
        report.acoustic_analysis.rms_energy,
        report.acoustic_analysis.zero_crossing_rate,
        report.acoustic_analysis.spectral_centroid,
        report.pattern_analysis.duration_seconds
    );
    println!(
        "{} {} intensity, {} frequency, {}",
        "Pattern:".dimmed(),
        report.pattern_analysis.intensity_level,
        report.pattern_analysis.frequency_content,
        report.pattern_analysis.burst_detection
    );
    println!(
        "{} {}",
        "Possible conditions:".bold(),
        report.predicted_conditions.join(", ")
    );
    if report.urgent_action {
        println!("{} seek medical evaluation promptly", "urgent:".red().bold());
    }
    for rec in &report.recommendations {
        println!("  - {rec}");
    }
    Ok(())
}
