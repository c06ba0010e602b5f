//! Biomarker report types.
//!
//! Each analyzer produces its own typed report. Severity enums are ordered
//! (derive `PartialOrd`) so callers can compare findings without string
//! matching; the serialized form keeps the original clinical wording.

use serde::{Deserialize, Serialize};

/// Confidence level attached to a biomarker reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Returns the confidence as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Clinical risk tier used across analyzers.
///
/// The intermediate `LowMedium`/`MediumHigh` tiers come from the cough
/// classifier; ordering is ascending severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    #[serde(rename = "Low-Medium")]
    LowMedium,
    Medium,
    #[serde(rename = "Medium-High")]
    MediumHigh,
    High,
    Critical,
}

impl RiskLevel {
    /// Returns the risk level as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::LowMedium => "Low-Medium",
            RiskLevel::Medium => "Medium",
            RiskLevel::MediumHigh => "Medium-High",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }

    /// Whether this tier calls for urgent action.
    pub fn is_urgent(&self) -> bool {
        matches!(
            self,
            RiskLevel::MediumHigh | RiskLevel::High | RiskLevel::Critical
        )
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lighting assessment of a captured frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lighting {
    #[serde(rename = "Optimal")]
    Optimal,
    #[serde(rename = "Too Dark - Results may be inaccurate")]
    TooDark,
    #[serde(rename = "Too Bright (glare detected)")]
    TooBright,
}

/// Sharpness assessment of a captured frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sharpness {
    Good,
    Blurry,
}

/// Capture-quality gate for image analyzers.
///
/// Degraded lighting or sharpness is not an error; it lowers the report's
/// confidence instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageQuality {
    pub lighting: Lighting,
    pub sharpness: Sharpness,
}

impl ImageQuality {
    /// Whether either quality axis is degraded.
    pub fn is_degraded(&self) -> bool {
        self.lighting != Lighting::Optimal || self.sharpness != Sharpness::Good
    }
}

/// Anemia severity grades, ordered from healthy to critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnemiaSeverity {
    Normal,
    Mild,
    Moderate,
    Severe,
}

impl AnemiaSeverity {
    /// Hemoglobin status headline for this grade.
    pub fn status(&self) -> &'static str {
        match self {
            AnemiaSeverity::Normal => "NORMAL (Healthy)",
            AnemiaSeverity::Mild => "MILD / BORDERLINE",
            AnemiaSeverity::Moderate => "MODERATE ANEMIA",
            AnemiaSeverity::Severe => "SEVERE ANEMIA",
        }
    }

    /// Clinical description of the pallor finding.
    pub fn description(&self) -> &'static str {
        match self {
            AnemiaSeverity::Normal => "No pallor detected",
            AnemiaSeverity::Mild => "Slight conjunctival pallor",
            AnemiaSeverity::Moderate => "Visible pallor - Iron deficiency likely",
            AnemiaSeverity::Severe => "Critical pallor (Ghostly white)",
        }
    }

    /// Risk tier for this grade.
    pub fn risk_level(&self) -> RiskLevel {
        match self {
            AnemiaSeverity::Normal => RiskLevel::Low,
            AnemiaSeverity::Mild => RiskLevel::Medium,
            AnemiaSeverity::Moderate => RiskLevel::High,
            AnemiaSeverity::Severe => RiskLevel::Critical,
        }
    }
}

/// Red/green channel statistics backing the erythema index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ColorAnalysis {
    /// Mean red-channel intensity over the region of interest.
    pub red_intensity: f64,
    /// Mean green-channel intensity over the region of interest.
    pub green_intensity: f64,
    /// `red / max(green, 1)` ratio.
    pub color_ratio: f64,
}

/// Output of the anemia conjunctiva analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnemiaReport {
    /// Severity grade from the erythema-index ladder.
    pub severity: AnemiaSeverity,
    /// Headline status string for the grade.
    pub hemoglobin_status: String,
    /// Clinical description of the pallor finding.
    pub severity_description: String,
    /// Estimated hemoglobin in g/dL.
    pub estimated_hemoglobin: f64,
    /// Erythema index: mean(red) - mean(green) over the ROI.
    pub erythema_index: f64,
    /// Risk tier for the grade.
    pub risk_level: RiskLevel,
    /// Reading confidence; degraded capture quality forces `Low`.
    pub confidence: Confidence,
    /// Capture-quality gate results.
    pub image_quality: ImageQuality,
    /// Channel statistics over the ROI.
    pub color_analysis: ColorAnalysis,
    /// Tiered recommendations keyed on the hemoglobin estimate.
    pub recommendations: Vec<String>,
    /// Annotated visualization as a base64 JPEG data URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotated_image: Option<String>,
}

/// Cough categories from the acoustic classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoughType {
    #[serde(rename = "Productive (Wet)")]
    ProductiveWet,
    #[serde(rename = "Dry Cough")]
    Dry,
    #[serde(rename = "Barking Cough")]
    Barking,
    #[serde(rename = "Mild Cough")]
    Mild,
}

impl CoughType {
    /// Returns the cough type as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CoughType::ProductiveWet => "Productive (Wet)",
            CoughType::Dry => "Dry Cough",
            CoughType::Barking => "Barking Cough",
            CoughType::Mild => "Mild Cough",
        }
    }

    /// Severity label attached to this category.
    pub fn severity_label(&self) -> &'static str {
        match self {
            CoughType::ProductiveWet => "Moderate",
            CoughType::Dry => "Mild",
            CoughType::Barking => "Significant",
            CoughType::Mild => "Minor",
        }
    }
}

/// Time- and frequency-domain features of a cough recording.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AcousticFeatures {
    /// RMS energy of the normalized waveform.
    pub rms_energy: f64,
    /// Sign-change rate of the mean-centered signal.
    pub zero_crossing_rate: f64,
    /// Magnitude-weighted mean of positive frequencies, in Hz.
    pub spectral_centroid: f64,
    /// Stated recording duration in milliseconds.
    pub duration_ms: u32,
}

/// Descriptive pattern breakdown derived from the acoustic features.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoughPattern {
    /// "Strong", "Moderate", or "Weak" by RMS energy.
    pub intensity_level: String,
    /// "High", "Mid", or "Low" by zero-crossing rate.
    pub frequency_content: String,
    /// Spectral centroid rounded to whole Hz.
    pub estimated_frequency_hz: f64,
    /// "Multi-burst" or "Single burst" by RMS energy.
    pub burst_detection: String,
    /// Duration in seconds.
    pub duration_seconds: f64,
}

/// Output of the acoustic cough analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoughReport {
    /// Classified cough category.
    pub cough_type: CoughType,
    /// Risk tier for the category.
    pub risk_level: RiskLevel,
    /// Severity label for the category.
    pub severity_level: String,
    /// Reading confidence; near-silent input lowers it.
    pub confidence: Confidence,
    /// Extracted acoustic features.
    pub acoustic_analysis: AcousticFeatures,
    /// Descriptive pattern breakdown.
    pub pattern_analysis: CoughPattern,
    /// Differential conditions associated with the category.
    pub predicted_conditions: Vec<String>,
    /// Category-specific recommendations.
    pub recommendations: Vec<String>,
    /// True only for High / Medium-High risk tiers.
    pub urgent_action: bool,
}

/// One highlighted location on an X-ray, in percent coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttentionTarget {
    /// Horizontal position as a percentage of image width.
    pub x: f64,
    /// Vertical position as a percentage of image height.
    pub y: f64,
    /// Display label ("Fracture Site", "Bone Fragment", "Cortical Break").
    pub label: String,
}

/// A comparable historical case attached to a fracture report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarCase {
    /// Diagnosis recorded for the historical case.
    pub diagnosis: String,
    /// Symptom text recorded for the historical case.
    pub symptoms: String,
    /// Similarity as a percentage (0-100).
    pub similarity: f64,
}

/// Output of the X-ray fracture analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FractureReport {
    /// Whether any gradient-discontinuity peaks were found.
    pub is_fracture: bool,
    /// Number of detected candidate sites.
    pub fracture_sites: usize,
    /// Percent confidence: 94.2 for negatives, `min(99, 70 + 10*sites)`
    /// otherwise.
    pub confidence: f64,
    /// True when more than one site was found.
    pub is_severe: bool,
    /// Human-readable finding summary.
    pub diagnosis: String,
    /// Up to three highlighted locations, most prominent first.
    pub attention_targets: Vec<AttentionTarget>,
    /// Standard immobilization precautions, empty for negatives.
    pub precautions: Vec<String>,
    /// Retrieved comparable cases; empty when retrieval is unavailable.
    pub similar_cases: Vec<SimilarCase>,
}

/// Output of the vein visualization pipeline. Visualization only, no
/// classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VeinView {
    /// Enhanced vein map as a base64 JPEG data URI.
    pub image: String,
}

/// Output of the risk-projection heatmap pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskProjection {
    /// Blended heatmap as a base64 JPEG data URI.
    pub image: String,
    /// Echoed projection horizon in days.
    pub days: u32,
}
