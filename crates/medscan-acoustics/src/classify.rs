//! Cough classification.
//!
//! The rule ladder is ordered and first-match-wins; reordering the branches
//! changes the clinical output. Note the Barking branch sits below the
//! Productive branch even though its RMS bound is higher — a loud, busy
//! signal is Productive, not Barking.

use medscan_core::{AcousticFeatures, Confidence, CoughPattern, CoughReport, CoughType, RiskLevel};

use crate::features::{rms_energy, spectral_centroid, zero_crossing_rate};
use crate::sample::AcousticSample;

/// Analyze a cough recording.
pub fn analyze(sample: &AcousticSample) -> CoughReport {
    let rms = rms_energy(sample.samples());
    let zcr = zero_crossing_rate(sample.samples());
    let centroid = spectral_centroid(sample.samples(), sample.sample_rate);

    // Ordered ladder, first match wins.
    let (cough_type, risk_level, conditions): (CoughType, RiskLevel, &[&str]) =
        if rms > 0.5 && zcr > 0.3 {
            (
                CoughType::ProductiveWet,
                RiskLevel::MediumHigh,
                &["Bronchitis", "Pneumonia", "Post-nasal drip"],
            )
        } else if rms > 0.3 && zcr < 0.15 {
            (
                CoughType::Dry,
                RiskLevel::LowMedium,
                &["Viral infection", "Allergic reaction", "Irritant exposure"],
            )
        } else if rms > 0.6 {
            (
                CoughType::Barking,
                RiskLevel::High,
                &["Croup", "Pertussis", "Acute bronchitis"],
            )
        } else {
            (
                CoughType::Mild,
                RiskLevel::Low,
                &["Common cold", "Mild irritation"],
            )
        };

    let urgent = risk_level.is_urgent();
    let recommendations: &[&str] = if urgent {
        &[
            "Seek medical evaluation within 24 hours",
            "Start prescribed antibiotics if bacterial",
            "Monitor oxygen saturation",
            "Stay hydrated",
        ]
    } else if risk_level == RiskLevel::Medium {
        &[
            "Monitor symptoms for 3-5 days",
            "Use honey and warm liquids",
            "Over-the-counter cough suppressant",
        ]
    } else {
        &[
            "Rest and hydration recommended",
            "Monitor for worsening symptoms",
            "Use steam inhalation",
        ]
    };

    CoughReport {
        cough_type,
        risk_level,
        severity_level: cough_type.severity_label().to_string(),
        confidence: if rms > 0.1 {
            Confidence::High
        } else {
            Confidence::Low
        },
        acoustic_analysis: AcousticFeatures {
            rms_energy: round4(rms),
            zero_crossing_rate: round4(zcr),
            spectral_centroid: round2(centroid),
            duration_ms: sample.duration_ms,
        },
        pattern_analysis: pattern(rms, zcr, centroid, sample.duration_ms),
        predicted_conditions: conditions.iter().map(|s| s.to_string()).collect(),
        recommendations: recommendations.iter().map(|s| s.to_string()).collect(),
        urgent_action: urgent,
    }
}

fn pattern(rms: f64, zcr: f64, centroid: f64, duration_ms: u32) -> CoughPattern {
    let intensity_level = if rms > 0.4 {
        "Strong"
    } else if rms > 0.2 {
        "Moderate"
    } else {
        "Weak"
    };
    let frequency_content = if zcr > 0.25 {
        "High"
    } else if zcr > 0.1 {
        "Mid"
    } else {
        "Low"
    };
    let burst_detection = if rms > 0.5 {
        "Multi-burst"
    } else {
        "Single burst"
    };

    CoughPattern {
        intensity_level: intensity_level.to_string(),
        frequency_content: frequency_content.to_string(),
        estimated_frequency_hz: centroid.round(),
        burst_detection: burst_detection.to_string(),
        duration_seconds: round2(duration_ms as f64 / 1000.0),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::AcousticSample;
    use pretty_assertions::assert_eq;

    /// Synthesize a waveform with approximately the requested RMS and
    /// zero-crossing rate: a square-ish carrier whose half-period controls
    /// the crossing rate, scaled to the target amplitude.
    fn waveform(target_rms: f32, target_zcr: f64, n: usize) -> AcousticSample {
        let half_period = ((2.0 / target_zcr).round() as usize / 2).max(1);
        let samples: Vec<f32> = (0..n)
            .map(|i| {
                let sign = if (i / half_period) % 2 == 0 { 1.0 } else { -1.0 };
                sign * target_rms
            })
            .collect();
        // Peaks below 1.0 pass through normalization unchanged, so the
        // square wave's RMS equals its amplitude.
        AcousticSample::from_samples(samples, 44_100, 1000).unwrap()
    }

    #[test]
    fn loud_busy_signal_is_productive_and_urgent() {
        // RMS 0.6, ZCR 0.35: the first branch matches even though the
        // Barking RMS bound would also hold.
        let sample = waveform(0.6, 0.35, 8_000);
        let report = analyze(&sample);
        assert_eq!(report.cough_type, CoughType::ProductiveWet);
        assert_eq!(report.risk_level, RiskLevel::MediumHigh);
        assert!(report.urgent_action);
        assert_eq!(report.severity_level, "Moderate");
        assert_eq!(
            report.predicted_conditions,
            vec!["Bronchitis", "Pneumonia", "Post-nasal drip"]
        );
    }

    #[test]
    fn moderate_smooth_signal_is_dry() {
        let sample = waveform(0.4, 0.05, 8_000);
        let report = analyze(&sample);
        assert_eq!(report.cough_type, CoughType::Dry);
        assert_eq!(report.risk_level, RiskLevel::LowMedium);
        assert!(!report.urgent_action);
    }

    #[test]
    fn loud_mid_rate_signal_is_barking() {
        // RMS 0.7 with ZCR between 0.15 and 0.3 falls through the first two
        // branches into Barking.
        let sample = waveform(0.7, 0.2, 8_000);
        let report = analyze(&sample);
        assert_eq!(report.cough_type, CoughType::Barking);
        assert_eq!(report.risk_level, RiskLevel::High);
        assert!(report.urgent_action);
    }

    #[test]
    fn quiet_signal_is_mild_with_low_confidence() {
        let sample = waveform(0.05, 0.2, 8_000);
        let report = analyze(&sample);
        assert_eq!(report.cough_type, CoughType::Mild);
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert_eq!(report.confidence, Confidence::Low);
        assert!(!report.urgent_action);
    }

    #[test]
    fn pattern_block_describes_the_features() {
        let sample = waveform(0.6, 0.35, 8_000);
        let report = analyze(&sample);
        assert_eq!(report.pattern_analysis.intensity_level, "Strong");
        assert_eq!(report.pattern_analysis.frequency_content, "High");
        assert_eq!(report.pattern_analysis.burst_detection, "Multi-burst");
        assert_eq!(report.pattern_analysis.duration_seconds, 1.0);
    }
}
