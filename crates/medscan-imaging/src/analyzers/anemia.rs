//! Anemia estimation from conjunctiva close-ups.
//!
//! The erythema index (mean red minus mean green over the central region of
//! interest) is a proxy for conjunctival pallor. The threshold ladder is
//! order-significant: it is evaluated top-down and the first match wins.

use medscan_core::{
    AnemiaReport, AnemiaSeverity, ColorAnalysis, Confidence, ImageQuality, Lighting, RiskLevel,
    Sharpness,
};

use crate::analyzers::round_to;
use crate::clahe::enhance_luminance;
use crate::codec::{decode_rgb, to_jpeg_data_uri};
use crate::error::ImagingResult;
use crate::frame::ImageFrame;
use crate::gradient::laplacian_variance;
use crate::raster::{crop_fraction, draw_rect, resize_rgb};

/// Canonical analysis frame size.
const CANONICAL_WIDTH: u32 = 400;
const CANONICAL_HEIGHT: u32 = 300;

/// Fractional ROI bounds: rows [0.3, 0.7], columns [0.25, 0.75].
const ROI_TOP: f64 = 0.3;
const ROI_BOTTOM: f64 = 0.7;
const ROI_LEFT: f64 = 0.25;
const ROI_RIGHT: f64 = 0.75;

/// Analyze raw JPEG/PNG bytes.
pub fn analyze_bytes(bytes: &[u8]) -> ImagingResult<AnemiaReport> {
    let frame = decode_rgb(bytes)?;
    analyze(&frame)
}

/// Analyze a decoded RGB frame.
pub fn analyze(frame: &ImageFrame) -> ImagingResult<AnemiaReport> {
    let quality = assess_quality(frame);
    let mut confidence = if quality.is_degraded() {
        Confidence::Low
    } else {
        Confidence::High
    };

    // Local contrast enhancement on luminance only, then canonical frame.
    let enhanced = enhance_luminance(frame, 2.0, (8, 8));
    let resized = resize_rgb(&enhanced, CANONICAL_WIDTH, CANONICAL_HEIGHT);
    let roi = crop_fraction(&resized, ROI_TOP, ROI_BOTTOM, ROI_LEFT, ROI_RIGHT);

    let red_mean = roi.channel_mean(0);
    let green_mean = roi.channel_mean(1);
    let erythema_index = red_mean - green_mean;

    let (severity, hgb_estimate) = grade(erythema_index);
    if severity == AnemiaSeverity::Severe {
        // Severe pallor is unambiguous even on a degraded capture.
        confidence = Confidence::High;
    }

    let risk_level = severity.risk_level();
    let annotated = annotate(&resized, risk_level)?;

    Ok(AnemiaReport {
        severity,
        hemoglobin_status: severity.status().to_string(),
        severity_description: severity.description().to_string(),
        estimated_hemoglobin: hgb_estimate,
        erythema_index: round_to(erythema_index, 2),
        risk_level,
        confidence,
        image_quality: quality,
        color_analysis: ColorAnalysis {
            red_intensity: round_to(red_mean, 2),
            green_intensity: round_to(green_mean, 2),
            color_ratio: round_to(red_mean / green_mean.max(1.0), 3),
        },
        recommendations: recommendations(hgb_estimate),
        annotated_image: Some(annotated),
    })
}

/// Order-significant threshold ladder over the raw erythema index, first
/// match wins. Returns the severity grade and its hemoglobin estimate in
/// g/dL; `Severe` is the fall-through grade.
fn grade(erythema_index: f64) -> (AnemiaSeverity, f64) {
    if erythema_index > 45.0 {
        (AnemiaSeverity::Normal, 14.5)
    } else if erythema_index > 25.0 {
        (AnemiaSeverity::Mild, 11.2)
    } else if erythema_index > 10.0 {
        (AnemiaSeverity::Moderate, 9.0)
    } else {
        (AnemiaSeverity::Severe, 6.5)
    }
}

/// Capture-quality gate: brightness and Laplacian-variance sharpness.
fn assess_quality(frame: &ImageFrame) -> ImageQuality {
    let gray = frame.to_gray();
    let brightness = gray.mean();
    let blur_metric = laplacian_variance(&gray);

    let lighting = if brightness < 60.0 {
        Lighting::TooDark
    } else if brightness > 200.0 {
        Lighting::TooBright
    } else {
        Lighting::Optimal
    };
    let sharpness = if blur_metric < 50.0 {
        Sharpness::Blurry
    } else {
        Sharpness::Good
    };

    ImageQuality {
        lighting,
        sharpness,
    }
}

/// Recommendation tiers keyed on the hemoglobin estimate, most healthy
/// first.
fn recommendations(hgb_estimate: f64) -> Vec<String> {
    let tier: &[&str] = if hgb_estimate >= 12.0 {
        &[
            "Continue regular health monitoring",
            "Maintain balanced iron-rich diet",
            "Annual blood tests recommended",
        ]
    } else if hgb_estimate >= 9.0 {
        &[
            "Increase iron-rich food intake (spinach, meat, beans)",
            "Consider iron supplements",
            "Schedule blood test within 1 week",
        ]
    } else if hgb_estimate >= 6.0 {
        &[
            "URGENT: Consult physician immediately",
            "Prescribed iron supplementation needed",
            "May require transfusion assessment",
        ]
    } else {
        &[
            "CRITICAL: Emergency medical intervention required",
            "Likely needs immediate transfusion",
            "Contact emergency services immediately",
        ]
    };
    tier.iter().map(|s| s.to_string()).collect()
}

/// Draw the ROI rectangle (green for low risk, red otherwise) and encode.
fn annotate(resized: &ImageFrame, risk_level: RiskLevel) -> ImagingResult<String> {
    let mut annotated = resized.clone();
    let color = if risk_level == RiskLevel::Low {
        [0, 255, 0]
    } else {
        [255, 0, 0]
    };
    let x0 = (CANONICAL_WIDTH as f64 * ROI_LEFT) as u32;
    let x1 = (CANONICAL_WIDTH as f64 * ROI_RIGHT) as u32;
    let y0 = (CANONICAL_HEIGHT as f64 * ROI_TOP) as u32;
    let y1 = (CANONICAL_HEIGHT as f64 * ROI_BOTTOM) as u32;
    draw_rect(&mut annotated, x0, y0, x1, y1, color, 2);
    to_jpeg_data_uri(&annotated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Frame with controllable red/green means and enough texture to pass
    /// the sharpness gate.
    fn synthetic_eye(red: u8, green: u8) -> ImageFrame {
        let mut frame = ImageFrame::new(CANONICAL_WIDTH, CANONICAL_HEIGHT);
        for y in 0..CANONICAL_HEIGHT {
            for x in 0..CANONICAL_WIDTH {
                // Checkerboard texture keeps the Laplacian variance high.
                let jitter = if (x + y) % 2 == 0 { 0 } else { 40 };
                frame.set(
                    x,
                    y,
                    [red.saturating_add(jitter), green.saturating_add(jitter), 80],
                );
            }
        }
        frame
    }

    #[test]
    fn severity_is_monotone_in_the_erythema_index() {
        // Decreasing red-green separation walks down the ladder.
        let healthy = analyze(&synthetic_eye(150, 90)).unwrap();
        let moderate = analyze(&synthetic_eye(110, 90)).unwrap();
        let severe = analyze(&synthetic_eye(95, 90)).unwrap();

        assert!(healthy.severity <= moderate.severity);
        assert!(moderate.severity <= severe.severity);
        assert!(healthy.erythema_index > moderate.erythema_index);
        assert_eq!(
            healthy.severity_description,
            healthy.severity.description()
        );
    }

    #[test]
    fn severe_grade_forces_high_confidence() {
        // Uniform dark frame: degraded lighting, near-zero erythema index.
        let mut frame = ImageFrame::new(64, 64);
        for y in 0..64 {
            for x in 0..64 {
                frame.set(x, y, [20, 20, 20]);
            }
        }
        let report = analyze(&frame).unwrap();
        assert_eq!(report.severity, AnemiaSeverity::Severe);
        assert_eq!(report.confidence, Confidence::High);
        assert_eq!(report.estimated_hemoglobin, 6.5);
        assert_eq!(
            report.severity_description,
            "Critical pallor (Ghostly white)"
        );
        assert!(report.image_quality.is_degraded());
    }

    #[test]
    fn mild_index_grades_as_borderline() {
        let (severity, hgb) = grade(30.0);
        assert_eq!(severity, AnemiaSeverity::Mild);
        assert_eq!(hgb, 11.2);
        assert_eq!(severity.status(), "MILD / BORDERLINE");
        assert_eq!(severity.risk_level(), RiskLevel::Medium);
    }

    #[test]
    fn grade_ladder_boundaries() {
        // Thresholds are strict: the boundary value falls to the next grade.
        assert_eq!(grade(46.0), (AnemiaSeverity::Normal, 14.5));
        assert_eq!(grade(45.0), (AnemiaSeverity::Mild, 11.2));
        assert_eq!(grade(25.0), (AnemiaSeverity::Moderate, 9.0));
        assert_eq!(grade(10.0), (AnemiaSeverity::Severe, 6.5));
        assert_eq!(grade(-5.0), (AnemiaSeverity::Severe, 6.5));
    }

    #[test]
    fn report_carries_annotated_image() {
        let report = analyze(&synthetic_eye(150, 90)).unwrap();
        let uri = report.annotated_image.unwrap();
        assert!(uri.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn recommendation_tiers_follow_hemoglobin() {
        assert!(recommendations(14.5)[0].contains("Continue"));
        assert!(recommendations(11.2)[0].contains("iron-rich food"));
        assert!(recommendations(9.0)[0].contains("iron-rich food"));
        assert!(recommendations(6.5)[0].contains("URGENT"));
        assert!(recommendations(5.0)[0].contains("CRITICAL"));
    }
}
