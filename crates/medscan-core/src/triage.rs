//! Triage assessment output types.

use serde::{Deserialize, Serialize};

/// Vitals derived from the raw inputs.
///
/// All three pressure-derived values default to zero when the blood-pressure
/// string is absent or malformed; that silence is deliberate (the scorer
/// never fails an assessment over unparseable partial data).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DerivedVitals {
    /// Heart rate divided by systolic pressure.
    pub shock_index: f64,
    /// Mean arterial pressure: `(systolic + 2*diastolic) / 3`.
    #[serde(rename = "MAP")]
    pub mean_arterial_pressure: f64,
    /// Systolic minus diastolic pressure.
    pub pulse_pressure: f64,
    /// Systemic inflammatory response criteria met, 0-3.
    pub sirs_score: u8,
}

/// Oxygen-saturation status tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OxygenStatus {
    Normal,
    Mild,
    Severe,
    Critical,
}

impl OxygenStatus {
    /// Tiering from an SpO2 percentage.
    pub fn from_spo2(spo2: u32) -> Self {
        if spo2 < 85 {
            OxygenStatus::Critical
        } else if spo2 < 90 {
            OxygenStatus::Severe
        } else if spo2 < 94 {
            OxygenStatus::Mild
        } else {
            OxygenStatus::Normal
        }
    }

    /// Hypoxia headline for this tier.
    pub fn hypoxia_label(&self) -> &'static str {
        match self {
            OxygenStatus::Normal => "None",
            OxygenStatus::Mild => "Mild Hypoxia",
            OxygenStatus::Severe => "Severe Hypoxia",
            OxygenStatus::Critical => "CRITICAL HYPOXIA",
        }
    }
}

/// Temperature trend against the previous reading, with a 0.5 degC
/// hysteresis band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemporalTrend {
    #[serde(rename = "Stable")]
    Stable,
    #[serde(rename = "Worsening (Spiking Fever)")]
    Worsening,
    #[serde(rename = "Improving (Defervescence)")]
    Improving,
}

impl TemporalTrend {
    /// Returns the trend as a display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemporalTrend::Stable => "Stable",
            TemporalTrend::Worsening => "Worsening (Spiking Fever)",
            TemporalTrend::Improving => "Improving (Defervescence)",
        }
    }
}

/// Fever status against the age-adjusted threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeverStatus {
    Fever,
    Afebrile,
}

impl FeverStatus {
    /// Returns the status as a display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeverStatus::Fever => "Fever",
            FeverStatus::Afebrile => "Afebrile",
        }
    }
}

/// Full triage assessment for one request.
///
/// `triage_level` is always 1, 2, 3, or 5. The level-4 gap is inherited from
/// the clinical protocol this engine reproduces and is preserved on purpose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageAssessment {
    /// Final triage level (1 most urgent, 5 routine; 4 never produced).
    pub triage_level: u8,
    /// "COMPLIANT" when age, temperature, and symptoms were all supplied.
    pub protocol_compliance: String,
    /// Age-adjusted fever threshold applied, in degrees Celsius.
    pub fever_threshold: f64,
    /// Fever status against that threshold.
    pub fever_status: FeverStatus,
    /// Derived vitals.
    pub derived_vitals: DerivedVitals,
    /// Oxygen status tier, `Normal` when SpO2 was absent.
    pub oxygen_status: OxygenStatus,
    /// Red flags in fixed evaluation order.
    pub red_flags: Vec<String>,
    /// Temperature trend.
    pub temporal_trend: TemporalTrend,
    /// Differential rule-outs from symptom keywords.
    pub rule_outs: Vec<String>,
    /// Prevention plan, seeded with hydration guidance.
    pub prevention_plan: Vec<String>,
    /// Referral target from symptom keywords and age.
    pub referral: String,
    /// One-line assessment summary.
    pub summary: String,
}
