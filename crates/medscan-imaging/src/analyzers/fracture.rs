//! X-ray fracture detection.
//!
//! Cortical discontinuities show up as prominent peaks in the per-row mean
//! of the vertical Sobel gradient. For each of the strongest row peaks, a
//! secondary peak search along that row localizes the horizontal attention
//! coordinate, falling back to the gradient argmax and finally snapping to
//! the bone-mass centroid when the estimate strays too far from it.

use medscan_core::{AttentionTarget, CaseRetrieval, FractureReport, SimilarCase};

use crate::analyzers::round_to;
use crate::codec::decode_gray;
use crate::error::ImagingResult;
use crate::frame::{FloatPlane, GrayFrame};
use crate::gradient::{column_intensity_argmax, row_gradient_profile, sobel_gradients};
use crate::peaks::{find_peaks, FindPeaksParams};

/// Labels cycled across the reported attention targets.
const TARGET_LABELS: [&str; 3] = ["Fracture Site", "Bone Fragment", "Cortical Break"];

/// Standard precautions attached to positive findings.
const PRECAUTIONS: [&str; 5] = [
    "Immobilize the affected area",
    "Apply ice to reduce swelling",
    "Keep the limb elevated",
    "Avoid putting weight on the injury",
    "Consult an orthopedic specialist",
];

/// Analyze raw JPEG/PNG bytes.
///
/// `retriever` enriches the report with comparable prior cases when symptom
/// text is available; retrieval failure never fails the analysis.
pub fn analyze_bytes(
    bytes: &[u8],
    symptoms: Option<&str>,
    retriever: Option<&dyn CaseRetrieval>,
) -> ImagingResult<FractureReport> {
    let gray = decode_gray(bytes)?;
    Ok(analyze(&gray, symptoms, retriever))
}

/// Analyze a decoded grayscale frame. Total: every input produces a report;
/// zero detected peaks is a valid negative finding.
pub fn analyze(
    gray: &GrayFrame,
    symptoms: Option<&str>,
    retriever: Option<&dyn CaseRetrieval>,
) -> FractureReport {
    let (vertical, _horizontal) = sobel_gradients(gray);
    let profile = row_gradient_profile(&vertical);

    let params = FindPeaksParams {
        min_prominence: 0.15,
        min_distance: ((gray.height as f64 * 0.03).ceil() as usize).max(1),
        min_width: 5.0,
    };
    let mut peaks = find_peaks(&profile, &params);
    // Most significant first.
    peaks.sort_by(|a, b| {
        b.prominence
            .partial_cmp(&a.prominence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let bone_center_x = column_intensity_argmax(gray);
    let attention_targets = peaks
        .iter()
        .take(3)
        .enumerate()
        .map(|(i, peak)| {
            let x = localize_column(&vertical, peak.index as u32, bone_center_x, gray.width);
            AttentionTarget {
                x: round_to(x / gray.width as f64 * 100.0, 1),
                y: round_to(peak.index as f64 / gray.height as f64 * 100.0, 1),
                label: TARGET_LABELS[i % TARGET_LABELS.len()].to_string(),
            }
        })
        .collect();

    let is_fracture = !peaks.is_empty();
    let confidence = if is_fracture {
        (70.0 + 10.0 * peaks.len() as f64).min(99.0)
    } else {
        94.2
    };
    let diagnosis = if is_fracture {
        format!("Fracture detected ({} potential sites)", peaks.len())
    } else {
        "No abnormality detected".to_string()
    };
    let precautions = if is_fracture {
        PRECAUTIONS.iter().map(|s| s.to_string()).collect()
    } else {
        Vec::new()
    };

    FractureReport {
        is_fracture,
        fracture_sites: peaks.len(),
        confidence,
        is_severe: is_fracture && peaks.len() > 1,
        diagnosis,
        attention_targets,
        precautions,
        similar_cases: retrieve_similar(symptoms, retriever),
    }
}

/// Locate the horizontal attention coordinate for one peak row.
fn localize_column(
    vertical: &FloatPlane,
    peak_row: u32,
    bone_center_x: u32,
    width: u32,
) -> f64 {
    let row_slice: Vec<f64> = vertical
        .row(peak_row)
        .iter()
        .map(|v| v.abs() as f64)
        .collect();
    let row_max = row_slice.iter().cloned().fold(0.0f64, f64::max);

    let params = FindPeaksParams {
        min_prominence: if row_max > 0.0 { row_max * 0.15 } else { 0.1 },
        min_distance: 30,
        min_width: 10.0,
    };
    let column_peaks = find_peaks(&row_slice, &params);

    let x = if column_peaks.len() >= 2 {
        (column_peaks[0].index + column_peaks[1].index) as f64 / 2.0
    } else if column_peaks.len() == 1 {
        column_peaks[0].index as f64
    } else if row_max > 0.0 {
        row_slice
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i as f64)
            .unwrap_or(bone_center_x as f64)
    } else {
        bone_center_x as f64
    };

    // An estimate far from the bone mass is likely soft-tissue noise.
    if (x - bone_center_x as f64).abs() > width as f64 * 0.2 {
        bone_center_x as f64
    } else {
        x
    }
}

/// Optional similar-case enrichment; failures substitute an empty list.
fn retrieve_similar(
    symptoms: Option<&str>,
    retriever: Option<&dyn CaseRetrieval>,
) -> Vec<SimilarCase> {
    let (Some(symptoms), Some(retriever)) = (symptoms, retriever) else {
        return Vec::new();
    };
    if symptoms.is_empty() {
        return Vec::new();
    }
    match retriever.find_similar(symptoms, 3) {
        Ok(results) => results
            .into_iter()
            .map(|hit| SimilarCase {
                diagnosis: hit
                    .metadata
                    .diagnosis
                    .unwrap_or_else(|| "Unknown".to_string()),
                symptoms: hit.metadata.symptoms.unwrap_or_default(),
                similarity: round_to(hit.similarity as f64 * 100.0, 2),
            })
            .collect(),
        Err(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medscan_core::{CaseMetadata, RetrievalError, SimilarityResult};
    use pretty_assertions::assert_eq;

    /// Featureless frame: no gradient peaks at all.
    fn smooth_bone() -> GrayFrame {
        let mut frame = GrayFrame::new(100, 100, 30);
        // A uniform vertical bone column, no discontinuities.
        for y in 0..100 {
            for x in 40..60 {
                frame.set(x, y, 220);
            }
        }
        frame
    }

    /// Frame with one horizontal break across the bone column. The break
    /// edges ramp over several rows so the gradient peaks are wide enough
    /// to survive the width filter, as they are on real radiographs.
    fn fractured_bone() -> GrayFrame {
        let mut frame = smooth_bone();
        let ramp = [190, 160, 130, 100, 70, 40, 40, 40, 70, 100, 130, 160, 190];
        for (offset, &value) in ramp.iter().enumerate() {
            let y = 45 + offset as u32;
            for x in 40..60 {
                frame.set(x, y, value);
            }
        }
        frame
    }

    #[test]
    fn featureless_frame_is_a_negative_finding() {
        let report = analyze(&smooth_bone(), None, None);
        assert!(!report.is_fracture);
        assert_eq!(report.fracture_sites, 0);
        assert_eq!(report.confidence, 94.2);
        assert!(report.attention_targets.is_empty());
        assert!(report.precautions.is_empty());
        assert_eq!(report.diagnosis, "No abnormality detected");
    }

    #[test]
    fn break_in_the_bone_is_detected() {
        let report = analyze(&fractured_bone(), None, None);
        assert!(report.is_fracture);
        assert!(report.fracture_sites >= 1);
        assert!(report.confidence >= 70.0 && report.confidence <= 99.0);
        assert!(!report.attention_targets.is_empty());
        assert_eq!(report.precautions.len(), 5);

        // The strongest target sits near the break row and over the bone.
        let target = &report.attention_targets[0];
        assert_eq!(target.label, "Fracture Site");
        assert!((target.y - 50.0).abs() < 10.0, "y = {}", target.y);
        assert!((target.x - 50.0).abs() < 25.0, "x = {}", target.x);
    }

    #[test]
    fn confidence_grows_with_site_count_and_caps_at_99() {
        let one = (70.0f64 + 10.0).min(99.0);
        let five = (70.0f64 + 50.0).min(99.0);
        assert_eq!(one, 80.0);
        assert_eq!(five, 99.0);
    }

    struct FailingRetriever;
    impl CaseRetrieval for FailingRetriever {
        fn find_similar(
            &self,
            _query: &str,
            _top_k: usize,
        ) -> Result<Vec<SimilarityResult>, RetrievalError> {
            Err(RetrievalError::new("index offline"))
        }
    }

    struct StubRetriever;
    impl CaseRetrieval for StubRetriever {
        fn find_similar(
            &self,
            _query: &str,
            _top_k: usize,
        ) -> Result<Vec<SimilarityResult>, RetrievalError> {
            Ok(vec![SimilarityResult {
                metadata: CaseMetadata {
                    diagnosis: Some("Radial fracture".to_string()),
                    symptoms: Some("wrist pain after fall".to_string()),
                    ..CaseMetadata::default()
                },
                similarity: 0.87,
            }])
        }
    }

    #[test]
    fn retrieval_failure_never_fails_the_analysis() {
        let report = analyze(&fractured_bone(), Some("wrist pain"), Some(&FailingRetriever));
        assert!(report.is_fracture);
        assert!(report.similar_cases.is_empty());
    }

    #[test]
    fn retrieval_hits_are_converted_to_percentages() {
        let report = analyze(&fractured_bone(), Some("wrist pain"), Some(&StubRetriever));
        assert_eq!(report.similar_cases.len(), 1);
        assert_eq!(report.similar_cases[0].diagnosis, "Radial fracture");
        assert_eq!(report.similar_cases[0].similarity, 87.0);
    }
}
