//! Risk-projection heatmap.
//!
//! Purely illustrative: a centered soft-edged hotspot whose radius and
//! opacity grow with the projection horizon. No numeric finding is returned
//! beyond the echoed horizon.

use medscan_core::RiskProjection;

use crate::codec::{decode_rgb, to_jpeg_data_uri};
use crate::error::ImagingResult;
use crate::frame::ImageFrame;
use crate::raster::{blend, fill_circle, gaussian_blur};

/// Blur sigma for softening the hotspot edge.
const BLUR_SIGMA: f64 = 15.5;

/// Project risk onto raw JPEG/PNG bytes.
pub fn project_bytes(bytes: &[u8], days: u32) -> ImagingResult<RiskProjection> {
    let frame = decode_rgb(bytes)?;
    project(&frame, days)
}

/// Project risk onto a decoded RGB frame.
pub fn project(frame: &ImageFrame, days: u32) -> ImagingResult<RiskProjection> {
    let mut heatmap = ImageFrame::new(frame.width, frame.height);
    let radius =
        (frame.width.min(frame.height) as f64 * (0.1 + days as f64 / 50.0)) as i64;
    fill_circle(
        &mut heatmap,
        frame.width as i64 / 2,
        frame.height as i64 / 2,
        radius,
        [255, 0, 0],
    );
    let heatmap = gaussian_blur(&heatmap, BLUR_SIGMA);

    let alpha = (0.1 + days as f64 / 40.0).min(0.8);
    let final_view = blend(frame, 1.0, &heatmap, alpha)?;

    Ok(RiskProjection {
        image: to_jpeg_data_uri(&final_view)?,
        days,
    })
}
