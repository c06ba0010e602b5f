//! Vein visualization.
//!
//! Double-pass local contrast enhancement of the green channel exaggerates
//! subdermal vein contrast; the inverted result is pushed through a cold
//! ocean palette and blended back over the original. Visualization only —
//! there is no classification step.

use medscan_core::VeinView;

use crate::clahe::enhance_contrast_local;
use crate::codec::{decode_rgb, to_jpeg_data_uri};
use crate::error::ImagingResult;
use crate::frame::ImageFrame;
use crate::raster::{blend, invert, ocean_colormap, resize_to_width};

/// Working width for the enhanced view.
const TARGET_WIDTH: u32 = 600;

/// Visualize veins from raw JPEG/PNG bytes.
pub fn visualize_bytes(bytes: &[u8]) -> ImagingResult<VeinView> {
    let frame = decode_rgb(bytes)?;
    visualize(&frame)
}

/// Visualize veins from a decoded RGB frame.
pub fn visualize(frame: &ImageFrame) -> ImagingResult<VeinView> {
    let resized = resize_to_width(frame, TARGET_WIDTH);

    // Two CLAHE passes on the green channel for an X-ray look.
    let green = resized.channel_plane(1);
    let enhanced = enhance_contrast_local(&green, 5.0, (8, 8));
    let enhanced = enhance_contrast_local(&enhanced, 5.0, (8, 8));

    let vein_map = ocean_colormap(&invert(&enhanced));
    let final_view = blend(&resized, 0.6, &vein_map, 0.4)?;

    Ok(VeinView {
        image: to_jpeg_data_uri(&final_view)?,
    })
}
