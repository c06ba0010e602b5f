//! Contrast-limited adaptive histogram equalization.
//!
//! Tiled histogram equalization with a clip limit and bilinear interpolation
//! between neighbouring tile mappings, matching the OpenCV CLAHE contract:
//! the clip limit is relative and scaled by `tile_area / 256`, and clipped
//! excess is redistributed uniformly across the histogram.

use crate::frame::{GrayFrame, ImageFrame};

const HIST_BINS: usize = 256;

/// Apply CLAHE to a single-channel frame.
///
/// `clip_limit` is the relative OpenCV-style limit (2.0 and 5.0 are the
/// values used by the analyzers); `tile_grid` is (columns, rows) of tiles.
pub fn enhance_contrast_local(
    src: &GrayFrame,
    clip_limit: f64,
    tile_grid: (u32, u32),
) -> GrayFrame {
    let (tiles_x, tiles_y) = (tile_grid.0.max(1), tile_grid.1.max(1));
    let width = src.width;
    let height = src.height;

    // Tile sizes round up so the last row/column of tiles covers the border.
    let tile_w = width.div_ceil(tiles_x).max(1);
    let tile_h = height.div_ceil(tiles_y).max(1);

    let luts = build_tile_luts(src, clip_limit, tiles_x, tiles_y, tile_w, tile_h);

    // Interpolate between the four nearest tile mappings per pixel.
    let mut out = GrayFrame::new(width, height, 0);
    for y in 0..height {
        let ty = (y as f64 + 0.5) / tile_h as f64 - 0.5;
        let ty0 = ty.floor();
        let wy = ty - ty0;
        let row0 = clamp_tile(ty0, tiles_y);
        let row1 = clamp_tile(ty0 + 1.0, tiles_y);

        for x in 0..width {
            let tx = (x as f64 + 0.5) / tile_w as f64 - 0.5;
            let tx0 = tx.floor();
            let wx = tx - tx0;
            let col0 = clamp_tile(tx0, tiles_x);
            let col1 = clamp_tile(tx0 + 1.0, tiles_x);

            let v = src.get(x, y) as usize;
            let tl = luts[row0 * tiles_x as usize + col0][v] as f64;
            let tr = luts[row0 * tiles_x as usize + col1][v] as f64;
            let bl = luts[row1 * tiles_x as usize + col0][v] as f64;
            let br = luts[row1 * tiles_x as usize + col1][v] as f64;

            let top = tl + (tr - tl) * wx;
            let bottom = bl + (br - bl) * wx;
            let value = top + (bottom - top) * wy;
            out.set(x, y, value.round().clamp(0.0, 255.0) as u8);
        }
    }
    out
}

/// Apply CLAHE to the luminance channel of an RGB frame only.
///
/// Converts to YCbCr, equalizes Y, and reconverts with the original
/// chrominance, so hue is preserved while local contrast increases.
pub fn enhance_luminance(src: &ImageFrame, clip_limit: f64, tile_grid: (u32, u32)) -> ImageFrame {
    let width = src.width;
    let height = src.height;

    let mut luma = GrayFrame::new(width, height, 0);
    let mut cb = vec![0.0f64; (width as usize) * (height as usize)];
    let mut cr = vec![0.0f64; (width as usize) * (height as usize)];

    for y in 0..height {
        for x in 0..width {
            let [r, g, b] = src.get(x, y);
            let (yv, cbv, crv) = rgb_to_ycbcr(r as f64, g as f64, b as f64);
            luma.set(x, y, yv.round().clamp(0.0, 255.0) as u8);
            let idx = (y as usize) * (width as usize) + (x as usize);
            cb[idx] = cbv;
            cr[idx] = crv;
        }
    }

    let equalized = enhance_contrast_local(&luma, clip_limit, tile_grid);

    let mut out = ImageFrame::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let idx = (y as usize) * (width as usize) + (x as usize);
            let (r, g, b) = ycbcr_to_rgb(equalized.get(x, y) as f64, cb[idx], cr[idx]);
            out.set(
                x,
                y,
                [
                    r.round().clamp(0.0, 255.0) as u8,
                    g.round().clamp(0.0, 255.0) as u8,
                    b.round().clamp(0.0, 255.0) as u8,
                ],
            );
        }
    }
    out
}

fn clamp_tile(t: f64, tiles: u32) -> usize {
    t.clamp(0.0, tiles as f64 - 1.0) as usize
}

fn build_tile_luts(
    src: &GrayFrame,
    clip_limit: f64,
    tiles_x: u32,
    tiles_y: u32,
    tile_w: u32,
    tile_h: u32,
) -> Vec<[u8; HIST_BINS]> {
    let mut luts = Vec::with_capacity((tiles_x * tiles_y) as usize);

    for ty in 0..tiles_y {
        for tx in 0..tiles_x {
            let x0 = tx * tile_w;
            let y0 = ty * tile_h;
            let x1 = (x0 + tile_w).min(src.width);
            let y1 = (y0 + tile_h).min(src.height);

            let mut hist = [0u32; HIST_BINS];
            let mut area = 0u64;
            for y in y0..y1 {
                for x in x0..x1 {
                    hist[src.get(x, y) as usize] += 1;
                    area += 1;
                }
            }
            if area == 0 {
                luts.push(identity_lut());
                continue;
            }

            // Relative clip limit scaled by tile area, floor of 1.
            let limit = ((clip_limit * area as f64 / HIST_BINS as f64).max(1.0)) as u32;
            clip_histogram(&mut hist, limit);

            let scale = 255.0 / area as f64;
            let mut lut = [0u8; HIST_BINS];
            let mut cumulative = 0u64;
            for (bin, entry) in lut.iter_mut().enumerate() {
                cumulative += hist[bin] as u64;
                *entry = (cumulative as f64 * scale).round().clamp(0.0, 255.0) as u8;
            }
            luts.push(lut);
        }
    }
    luts
}

fn clip_histogram(hist: &mut [u32; HIST_BINS], limit: u32) {
    let mut excess = 0u64;
    for count in hist.iter_mut() {
        if *count > limit {
            excess += (*count - limit) as u64;
            *count = limit;
        }
    }

    // Uniform redistribution of clipped mass; the remainder goes one count
    // at a time to the leading bins.
    let per_bin = (excess / HIST_BINS as u64) as u32;
    let mut remainder = (excess % HIST_BINS as u64) as usize;
    for count in hist.iter_mut() {
        *count += per_bin;
        if remainder > 0 {
            *count += 1;
            remainder -= 1;
        }
    }
}

fn identity_lut() -> [u8; HIST_BINS] {
    let mut lut = [0u8; HIST_BINS];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = i as u8;
    }
    lut
}

// JPEG full-range YCbCr conversion.
fn rgb_to_ycbcr(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let cb = 128.0 - 0.168736 * r - 0.331264 * g + 0.5 * b;
    let cr = 128.0 + 0.5 * r - 0.418688 * g - 0.081312 * b;
    (y, cb, cr)
}

fn ycbcr_to_rgb(y: f64, cb: f64, cr: f64) -> (f64, f64, f64) {
    let r = y + 1.402 * (cr - 128.0);
    let g = y - 0.344136 * (cb - 128.0) - 0.714136 * (cr - 128.0);
    let b = y + 1.772 * (cb - 128.0);
    (r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_preserves_dimensions() {
        let src = GrayFrame::new(100, 60, 128);
        let out = enhance_contrast_local(&src, 2.0, (8, 8));
        assert_eq!(out.width, 100);
        assert_eq!(out.height, 60);
    }

    #[test]
    fn uniform_frame_stays_near_uniform() {
        // A constant input has a degenerate histogram; equalization maps all
        // pixels through the same LUT entry.
        let src = GrayFrame::new(64, 64, 90);
        let out = enhance_contrast_local(&src, 2.0, (8, 8));
        let first = out.get(0, 0);
        assert!(out.pixels().iter().all(|&v| v == first));
    }

    #[test]
    fn gradient_contrast_is_stretched() {
        // A low-contrast ramp should span a wider range after CLAHE.
        let mut src = GrayFrame::new(64, 64, 0);
        for y in 0..64 {
            for x in 0..64 {
                src.set(x, y, 100 + (x / 4) as u8);
            }
        }
        let out = enhance_contrast_local(&src, 4.0, (4, 4));
        let min = *out.pixels().iter().min().unwrap();
        let max = *out.pixels().iter().max().unwrap();
        assert!(max - min > 16);
    }

    #[test]
    fn luminance_enhancement_preserves_dimensions() {
        let src = ImageFrame::new(40, 30);
        let out = enhance_luminance(&src, 2.0, (8, 8));
        assert_eq!(out.width, 40);
        assert_eq!(out.height, 30);
    }
}
