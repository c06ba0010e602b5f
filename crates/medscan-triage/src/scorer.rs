//! The triage assessment pipeline.
//!
//! Branch order matters throughout: red flags append in a fixed sequence,
//! and the final level ladder is evaluated in ascending severity so the
//! most severe matching assignment wins. Levels are 1, 2, 3, or 5 — the
//! protocol has no level 4 and that gap is preserved.

use medscan_core::{
    DerivedVitals, FeverStatus, OxygenStatus, TemporalTrend, TriageAssessment, VitalSigns,
};

use crate::vitals::{derive_pressure_vitals, parse_blood_pressure, PressureVitals};

/// Assess one set of vital signs. Total: every input yields an assessment.
pub fn assess(vitals: &VitalSigns) -> TriageAssessment {
    let symptoms = vitals.symptoms.to_lowercase();
    let history = vitals.history.to_lowercase();

    let pressure = vitals
        .blood_pressure
        .as_deref()
        .and_then(parse_blood_pressure);
    let derived = derive_pressure_vitals(pressure, vitals.heart_rate);

    let fever_threshold = if vitals.age < 65 { 38.0 } else { 37.5 };
    let has_fever = vitals.temperature >= fever_threshold;

    let sirs_score = sirs_score(vitals, &symptoms);
    let oxygen_status = oxygen_status(vitals.spo2);

    let mut red_flags = red_flags(vitals, &symptoms, sirs_score, oxygen_status, &derived);
    let temporal_trend = trend(vitals.temperature, vitals.previous_temperature);
    let (referral, rule_outs) =
        referral_and_rule_outs(vitals.age, has_fever, &symptoms, &mut red_flags);

    let mut prevention_plan = vec!["Maintain strict hydration".to_string()];
    if history.contains("diabetes") {
        prevention_plan.push("Strict Glycemic control (Sepsis risk elevated)".to_string());
    }

    let triage_level = triage_level(&red_flags, sirs_score, &derived, &symptoms, oxygen_status);

    let mut summary = format!(
        "AI Triage Level: {}. Found {} critical flags.",
        triage_level,
        red_flags.len()
    );
    if sirs_score >= 2 {
        summary.push_str(" SIRS criteria met (Sepsis screening advised).");
    }

    TriageAssessment {
        triage_level,
        protocol_compliance: protocol_compliance(vitals),
        fever_threshold,
        fever_status: if has_fever {
            FeverStatus::Fever
        } else {
            FeverStatus::Afebrile
        },
        derived_vitals: DerivedVitals {
            shock_index: round2(derived.shock_index),
            mean_arterial_pressure: round1(derived.mean_arterial_pressure),
            pulse_pressure: derived.pulse_pressure,
            sirs_score,
        },
        oxygen_status,
        red_flags,
        temporal_trend,
        rule_outs,
        prevention_plan,
        referral,
        summary,
    }
}

/// SIRS criteria: temperature outside (36, 38], heart rate above 90, and a
/// respiratory symptom. Independent and non-exclusive, 0-3.
fn sirs_score(vitals: &VitalSigns, symptoms: &str) -> u8 {
    let mut score = 0;
    if vitals.temperature > 38.0 || vitals.temperature < 36.0 {
        score += 1;
    }
    if vitals.heart_rate.is_some_and(|hr| hr > 90) {
        score += 1;
    }
    if symptoms.contains("shortness of breath") {
        score += 1;
    }
    score
}

/// Oxygen tiering; an absent or zero reading is treated as normal.
fn oxygen_status(spo2: Option<u32>) -> OxygenStatus {
    match spo2 {
        Some(o2) if o2 > 0 => OxygenStatus::from_spo2(o2),
        _ => OxygenStatus::Normal,
    }
}

/// Build the red-flag list in its fixed append order. Each presence test is
/// independent; multiple flags may co-occur.
fn red_flags(
    vitals: &VitalSigns,
    symptoms: &str,
    sirs_score: u8,
    oxygen_status: OxygenStatus,
    derived: &PressureVitals,
) -> Vec<String> {
    let mut flags = Vec::new();
    if sirs_score >= 2 {
        flags.push(format!(
            "SIRS ALERT (Score: {sirs_score}/3) - Potential Sepsis"
        ));
    }
    if oxygen_status != OxygenStatus::Normal {
        flags.push(format!(
            "{} Detected (SpO2: {}%)",
            oxygen_status.hypoxia_label(),
            vitals.spo2.unwrap_or_default()
        ));
    }
    if derived.shock_index > 0.9 {
        flags.push(format!(
            "CRITICAL: Shock Index {:.2} (>0.9 indicates instability)",
            derived.shock_index
        ));
    }
    if derived.mean_arterial_pressure < 65.0 && derived.mean_arterial_pressure > 0.0 {
        flags.push(format!(
            "Hypoperfusion Risk (MAP {:.0} mmHg)",
            derived.mean_arterial_pressure
        ));
    }
    if symptoms.contains("chest pain") {
        flags.push("Potential Acute Coronary Syndrome (Triage Level 1)".to_string());
    }
    if vitals.temperature > 40.0 {
        flags.push("Hyperpyrexia - Immediate Cooling Required".to_string());
    }
    flags
}

/// Temperature trend with a 0.5 degC hysteresis band.
fn trend(temperature: f64, previous: Option<f64>) -> TemporalTrend {
    match previous {
        Some(prev) if temperature > prev + 0.5 => TemporalTrend::Worsening,
        Some(prev) if temperature < prev - 0.5 => TemporalTrend::Improving,
        _ => TemporalTrend::Stable,
    }
}

/// Keyword referral and differential rule-outs. The abdominal branch may
/// append a red flag of its own, after the fixed six.
fn referral_and_rule_outs(
    age: u32,
    has_fever: bool,
    symptoms: &str,
    red_flags: &mut Vec<String>,
) -> (String, Vec<String>) {
    let mut referral = "General Physician".to_string();
    let mut rule_outs: Vec<String> = Vec::new();

    if symptoms.contains("cough") {
        referral = "Pulmonologist".to_string();
        rule_outs = vec![
            "Bronchitis".to_string(),
            "Pneumonia".to_string(),
            "Viral URI".to_string(),
        ];
        if symptoms.contains("night sweats") || symptoms.contains("weight loss") {
            rule_outs.push("Tuberculosis (High Probability)".to_string());
        }
    }
    if symptoms.contains("abdominal") {
        referral = "Gastroenterologist".to_string();
        rule_outs = vec!["Gastritis".to_string(), "Food Poisoning".to_string()];
        if symptoms.contains("right lower") {
            red_flags.push("Possible Appendicitis".to_string());
        }
    }
    if age > 70 && has_fever {
        referral = "Geriatric Specialist / ER".to_string();
    }

    (referral, rule_outs)
}

/// Final level: default 5, overridden in ascending severity so the most
/// severe matching assignment wins. Level 4 is never produced.
fn triage_level(
    red_flags: &[String],
    sirs_score: u8,
    derived: &PressureVitals,
    symptoms: &str,
    oxygen_status: OxygenStatus,
) -> u8 {
    let mut level = 5;
    if !red_flags.is_empty() {
        level = 3;
    }
    if sirs_score >= 2 || derived.shock_index > 0.9 {
        level = 2;
    }
    if symptoms.contains("chest pain") || oxygen_status == OxygenStatus::Critical {
        level = 1;
    }
    level
}

fn protocol_compliance(vitals: &VitalSigns) -> String {
    if vitals.age > 0 && vitals.temperature != 0.0 && !vitals.symptoms.is_empty() {
        "COMPLIANT".to_string()
    } else {
        "PARTIAL DATA".to_string()
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn healthy_adult() -> VitalSigns {
        VitalSigns::new(45, 37.0, "mild headache")
            .with_heart_rate(80)
            .with_blood_pressure("120/80")
            .with_spo2(98)
    }

    #[test]
    fn healthy_adult_is_routine() {
        let assessment = assess(&healthy_adult());
        assert_eq!(assessment.triage_level, 5);
        assert!(assessment.red_flags.is_empty());
        assert_eq!(assessment.derived_vitals.sirs_score, 0);
        assert_eq!(assessment.oxygen_status, OxygenStatus::Normal);
        assert_eq!(assessment.referral, "General Physician");
        assert_eq!(assessment.protocol_compliance, "COMPLIANT");
    }

    #[test]
    fn reference_derived_vitals_scenario() {
        let assessment = assess(&healthy_adult());
        assert_eq!(assessment.derived_vitals.shock_index, 0.67);
        assert_eq!(assessment.derived_vitals.mean_arterial_pressure, 93.3);
        assert_eq!(assessment.derived_vitals.pulse_pressure, 40.0);
    }

    #[test]
    fn critical_hypoxia_forces_level_one() {
        let vitals = VitalSigns::new(45, 37.0, "dizzy").with_spo2(82);
        let assessment = assess(&vitals);
        assert_eq!(assessment.oxygen_status, OxygenStatus::Critical);
        assert_eq!(assessment.triage_level, 1);
        assert_eq!(
            assessment.red_flags,
            vec!["CRITICAL HYPOXIA Detected (SpO2: 82%)"]
        );
    }

    #[test]
    fn chest_pain_forces_level_one() {
        let vitals = VitalSigns::new(45, 37.0, "crushing chest pain");
        let assessment = assess(&vitals);
        assert_eq!(assessment.triage_level, 1);
        assert!(assessment
            .red_flags
            .iter()
            .any(|f| f.contains("Acute Coronary Syndrome")));
    }

    #[test]
    fn sirs_alert_without_level_one_triggers_is_level_two() {
        // Fever above 38 plus tachycardia: SIRS 2, no chest pain, SpO2 fine.
        let vitals = VitalSigns::new(45, 39.0, "fatigue")
            .with_heart_rate(110)
            .with_blood_pressure("130/85")
            .with_spo2(97);
        let assessment = assess(&vitals);
        assert_eq!(assessment.derived_vitals.sirs_score, 2);
        assert_eq!(assessment.triage_level, 2);
        assert!(assessment.red_flags[0].contains("SIRS ALERT (Score: 2/3)"));
        assert!(assessment.summary.contains("Sepsis screening advised"));
    }

    #[test]
    fn red_flag_without_escalation_is_level_three() {
        // Hyperpyrexia alone: one red flag, SIRS only 1.
        let vitals = VitalSigns::new(45, 40.5, "weakness");
        let assessment = assess(&vitals);
        assert_eq!(
            assessment.red_flags,
            vec!["Hyperpyrexia - Immediate Cooling Required"]
        );
        assert_eq!(assessment.triage_level, 3);
    }

    #[test]
    fn level_four_is_never_produced() {
        // Sweep a grid of inputs; the ladder only emits 1, 2, 3, or 5.
        let symptom_sets = ["", "cough", "chest pain", "shortness of breath and cough"];
        for age in [25, 70, 80] {
            for temp in [35.0, 37.0, 39.0, 41.0] {
                for hr in [None, Some(80), Some(120)] {
                    for spo2 in [None, Some(82), Some(91), Some(98)] {
                        for symptoms in symptom_sets {
                            let mut vitals = VitalSigns::new(age, temp, symptoms);
                            vitals.heart_rate = hr;
                            vitals.spo2 = spo2;
                            vitals.blood_pressure = Some("100/60".to_string());
                            let assessment = assess(&vitals);
                            assert!(
                                [1, 2, 3, 5].contains(&assessment.triage_level),
                                "unexpected level {} for {:?}",
                                assessment.triage_level,
                                vitals
                            );
                            assert!(assessment.derived_vitals.sirs_score <= 3);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn red_flags_append_in_fixed_order() {
        // Trigger all six fixed flags plus the abdominal appendix flag.
        let vitals = VitalSigns::new(45, 40.5, "shortness of breath, chest pain, right lower abdominal pain")
            .with_heart_rate(130)
            .with_blood_pressure("90/40")
            .with_spo2(82);
        let assessment = assess(&vitals);
        let flags = &assessment.red_flags;
        assert_eq!(flags.len(), 7);
        assert!(flags[0].starts_with("SIRS ALERT"));
        assert!(flags[1].starts_with("CRITICAL HYPOXIA"));
        assert!(flags[2].starts_with("CRITICAL: Shock Index"));
        assert!(flags[3].starts_with("Hypoperfusion Risk"));
        assert!(flags[4].starts_with("Potential Acute Coronary Syndrome"));
        assert!(flags[5].starts_with("Hyperpyrexia"));
        assert_eq!(flags[6], "Possible Appendicitis");
    }

    #[test]
    fn fever_threshold_is_age_adjusted() {
        let younger = assess(&VitalSigns::new(40, 37.7, "tired"));
        assert_eq!(younger.fever_status, FeverStatus::Afebrile);
        assert_eq!(younger.fever_threshold, 38.0);

        let older = assess(&VitalSigns::new(70, 37.7, "tired"));
        assert_eq!(older.fever_status, FeverStatus::Fever);
        assert_eq!(older.fever_threshold, 37.5);
    }

    #[test]
    fn cough_routes_to_pulmonology_with_tb_escalation() {
        let basic = assess(&VitalSigns::new(30, 37.0, "persistent cough"));
        assert_eq!(basic.referral, "Pulmonologist");
        assert_eq!(basic.rule_outs, vec!["Bronchitis", "Pneumonia", "Viral URI"]);

        let tb = assess(&VitalSigns::new(
            30,
            37.0,
            "persistent cough with night sweats",
        ));
        assert_eq!(tb.rule_outs.len(), 4);
        assert_eq!(tb.rule_outs[3], "Tuberculosis (High Probability)");
    }

    #[test]
    fn elderly_fever_overrides_referral() {
        let vitals = VitalSigns::new(75, 38.5, "persistent cough");
        let assessment = assess(&vitals);
        assert_eq!(assessment.referral, "Geriatric Specialist / ER");
        // Rule-outs from the cough branch survive the override.
        assert_eq!(assessment.rule_outs[0], "Bronchitis");
    }

    #[test]
    fn trend_uses_a_half_degree_hysteresis_band() {
        let base = VitalSigns::new(45, 38.0, "tired");

        let stable = assess(&base.clone().with_previous_temperature(37.6));
        assert_eq!(stable.temporal_trend, TemporalTrend::Stable);

        let worsening = assess(&base.clone().with_previous_temperature(37.0));
        assert_eq!(worsening.temporal_trend, TemporalTrend::Worsening);

        let improving = assess(&base.clone().with_previous_temperature(38.8));
        assert_eq!(improving.temporal_trend, TemporalTrend::Improving);
    }

    #[test]
    fn malformed_bp_defaults_derived_vitals_to_zero() {
        let vitals = VitalSigns::new(45, 37.0, "tired")
            .with_heart_rate(80)
            .with_blood_pressure("not-a-reading");
        let assessment = assess(&vitals);
        assert_eq!(assessment.derived_vitals.shock_index, 0.0);
        assert_eq!(assessment.derived_vitals.mean_arterial_pressure, 0.0);
        assert_eq!(assessment.derived_vitals.pulse_pressure, 0.0);
        // No MAP flag from the zero default.
        assert!(assessment.red_flags.is_empty());
    }

    #[test]
    fn diabetes_history_extends_the_prevention_plan() {
        let vitals =
            VitalSigns::new(45, 37.0, "tired").with_history("Type 2 Diabetes, hypertension");
        let assessment = assess(&vitals);
        assert_eq!(assessment.prevention_plan.len(), 2);
        assert!(assessment.prevention_plan[1].contains("Glycemic"));
    }
}
