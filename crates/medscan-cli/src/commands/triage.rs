//! Triage assessment command.

use anyhow::Result;
use colored::Colorize;
use medscan_core::VitalSigns;

/// Vital-sign inputs accepted on the command line.
pub struct TriageArgs {
    pub age: u32,
    pub temperature: f64,
    pub symptoms: String,
    pub history: Option<String>,
    pub previous_temperature: Option<f64>,
    pub heart_rate: Option<u32>,
    pub blood_pressure: Option<String>,
    pub spo2: Option<u32>,
}

/// Run the rule-based triage assessment.
pub fn run(args: TriageArgs, json: bool) -> Result<()> {
    let mut vitals = VitalSigns::new(args.age, args.temperature, &args.symptoms);
    if let Some(history) = args.history {
        vitals = vitals.with_history(history);
    }
    vitals.previous_temperature = args.previous_temperature;
    vitals.heart_rate = args.heart_rate;
    vitals.blood_pressure = args.blood_pressure;
    vitals.spo2 = args.spo2;

    let assessment = medscan_triage::assess(&vitals);

    if json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
        return Ok(());
    }

    let level = format!("Level {}", assessment.triage_level);
    let level = match assessment.triage_level {
        1 => level.red().bold(),
        2 => level.red(),
        3 => level.yellow().bold(),
        _ => level.green().bold(),
    };
    println!("{} {}  [{}]", "Triage:".cyan().bold(), level, assessment.protocol_compliance);
    println!("{}", assessment.summary);

    if !assessment.red_flags.is_empty() {
        println!("{}", "Red flags:".red().bold());
        for flag in &assessment.red_flags {
            println!("  ! {flag}");
        }
    }
    println!(
        "{} shock index {:.2}, MAP {:.1} mmHg, pulse pressure {:.0}, SIRS {}/3",
        "Derived:".dimmed(),
        assessment.derived_vitals.shock_index,
        assessment.derived_vitals.mean_arterial_pressure,
        assessment.derived_vitals.pulse_pressure,
        assessment.derived_vitals.sirs_score
    );
    println!(
        "{} {} (threshold {:.1} degC), trend {}",
        "Fever:".dimmed(),
        assessment.fever_status.as_str(),
        assessment.fever_threshold,
        assessment.temporal_trend.as_str()
    );
    if !assessment.rule_outs.is_empty() {
        println!("{} {}", "Rule out:".bold(), assessment.rule_outs.join(", "));
    }
    println!("{} {}", "Referral:".bold(), assessment.referral);
    for step in &assessment.prevention_plan {
        println!("  - {step}");
    }
    Ok(())
}
