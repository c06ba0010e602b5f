//! Biomarker image analyzers.
//!
//! Each analyzer is a pure pipeline from a decoded frame to a typed report
//! from `medscan-core`. Decode failures surface as [`crate::ImagingError`];
//! degraded capture quality lowers confidence instead of failing.

pub mod anemia;
pub mod fracture;
pub mod risk_projection;
pub mod veins;

/// Round to a fixed number of decimal places, for report fields that carry
/// human-facing precision.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
