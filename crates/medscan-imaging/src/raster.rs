//! Raster helpers: resize, crop, invert, draw, blur, blend, colormap.

use crate::error::{ImagingError, ImagingResult};
use crate::frame::{GrayFrame, ImageFrame};

/// Bilinear resize of an RGB frame.
pub fn resize_rgb(src: &ImageFrame, new_width: u32, new_height: u32) -> ImageFrame {
    let mut out = ImageFrame::new(new_width, new_height);
    let scale_x = src.width as f64 / new_width as f64;
    let scale_y = src.height as f64 / new_height as f64;

    for y in 0..new_height {
        // Pixel-center mapping, matching linear-interpolation resamplers.
        let sy = ((y as f64 + 0.5) * scale_y - 0.5).max(0.0);
        let y0 = (sy.floor() as u32).min(src.height - 1);
        let y1 = (y0 + 1).min(src.height - 1);
        let wy = sy - y0 as f64;

        for x in 0..new_width {
            let sx = ((x as f64 + 0.5) * scale_x - 0.5).max(0.0);
            let x0 = (sx.floor() as u32).min(src.width - 1);
            let x1 = (x0 + 1).min(src.width - 1);
            let wx = sx - x0 as f64;

            let mut pixel = [0u8; 3];
            for (c, entry) in pixel.iter_mut().enumerate() {
                let tl = src.get(x0, y0)[c] as f64;
                let tr = src.get(x1, y0)[c] as f64;
                let bl = src.get(x0, y1)[c] as f64;
                let br = src.get(x1, y1)[c] as f64;
                let top = tl + (tr - tl) * wx;
                let bottom = bl + (br - bl) * wx;
                *entry = (top + (bottom - top) * wy).round().clamp(0.0, 255.0) as u8;
            }
            out.set(x, y, pixel);
        }
    }
    out
}

/// Resize preserving aspect ratio to a fixed target width.
pub fn resize_to_width(src: &ImageFrame, target_width: u32) -> ImageFrame {
    let target_height =
        ((target_width as f64 * src.height as f64 / src.width as f64).round() as u32).max(1);
    resize_rgb(src, target_width, target_height)
}

/// Crop a region of interest given fractional bounds.
///
/// Rows span `[height * top, height * bottom)` and columns
/// `[width * left, width * right)`, truncated like integer casts.
pub fn crop_fraction(src: &ImageFrame, top: f64, bottom: f64, left: f64, right: f64) -> ImageFrame {
    let y0 = (src.height as f64 * top) as u32;
    let y1 = ((src.height as f64 * bottom) as u32).min(src.height);
    let x0 = (src.width as f64 * left) as u32;
    let x1 = ((src.width as f64 * right) as u32).min(src.width);

    let width = x1.saturating_sub(x0).max(1);
    let height = y1.saturating_sub(y0).max(1);
    let mut out = ImageFrame::new(width, height);
    for y in 0..height {
        for x in 0..width {
            out.set(x, y, src.get(x0 + x, y0 + y));
        }
    }
    out
}

/// Invert a grayscale frame.
pub fn invert(src: &GrayFrame) -> GrayFrame {
    let mut out = GrayFrame::new(src.width, src.height, 0);
    for y in 0..src.height {
        for x in 0..src.width {
            out.set(x, y, 255 - src.get(x, y));
        }
    }
    out
}

/// Draw an axis-aligned rectangle outline.
pub fn draw_rect(
    frame: &mut ImageFrame,
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
    color: [u8; 3],
    thickness: u32,
) {
    let x1 = x1.min(frame.width.saturating_sub(1));
    let y1 = y1.min(frame.height.saturating_sub(1));
    for t in 0..thickness {
        let left = x0.saturating_add(t).min(x1);
        let right = x1.saturating_sub(t).max(x0);
        let top = y0.saturating_add(t).min(y1);
        let bottom = y1.saturating_sub(t).max(y0);
        for x in x0..=x1 {
            frame.set(x, top, color);
            frame.set(x, bottom, color);
        }
        for y in y0..=y1 {
            frame.set(left, y, color);
            frame.set(right, y, color);
        }
    }
}

/// Draw a filled circle, clipped to the frame.
pub fn fill_circle(frame: &mut ImageFrame, cx: i64, cy: i64, radius: i64, color: [u8; 3]) {
    let r2 = radius * radius;
    let y_min = (cy - radius).max(0);
    let y_max = (cy + radius).min(frame.height as i64 - 1);
    for y in y_min..=y_max {
        let x_min = (cx - radius).max(0);
        let x_max = (cx + radius).min(frame.width as i64 - 1);
        for x in x_min..=x_max {
            let dx = x - cx;
            let dy = y - cy;
            if dx * dx + dy * dy <= r2 {
                frame.set(x as u32, y as u32, color);
            }
        }
    }
}

/// Separable Gaussian blur of an RGB frame.
pub fn gaussian_blur(src: &ImageFrame, sigma: f64) -> ImageFrame {
    if sigma <= 0.0 {
        return src.clone();
    }
    let kernel = gaussian_kernel(sigma);
    let radius = (kernel.len() / 2) as i64;

    // Horizontal pass into an intermediate float buffer.
    let w = src.width as usize;
    let h = src.height as usize;
    let mut temp = vec![[0.0f64; 3]; w * h];
    for y in 0..src.height {
        for x in 0..src.width {
            let mut acc = [0.0f64; 3];
            for (k, weight) in kernel.iter().enumerate() {
                let sx = (x as i64 + k as i64 - radius).clamp(0, src.width as i64 - 1) as u32;
                let px = src.get(sx, y);
                for c in 0..3 {
                    acc[c] += px[c] as f64 * weight;
                }
            }
            temp[(y as usize) * w + (x as usize)] = acc;
        }
    }

    // Vertical pass.
    let mut out = ImageFrame::new(src.width, src.height);
    for y in 0..src.height {
        for x in 0..src.width {
            let mut acc = [0.0f64; 3];
            for (k, weight) in kernel.iter().enumerate() {
                let sy = (y as i64 + k as i64 - radius).clamp(0, src.height as i64 - 1) as usize;
                let px = temp[sy * w + (x as usize)];
                for c in 0..3 {
                    acc[c] += px[c] * weight;
                }
            }
            out.set(
                x,
                y,
                [
                    acc[0].round().clamp(0.0, 255.0) as u8,
                    acc[1].round().clamp(0.0, 255.0) as u8,
                    acc[2].round().clamp(0.0, 255.0) as u8,
                ],
            );
        }
    }
    out
}

fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let radius = (sigma * 3.0).ceil() as i64;
    let mut kernel: Vec<f64> = (-radius..=radius)
        .map(|i| (-(i * i) as f64 / (2.0 * sigma * sigma)).exp())
        .collect();
    let sum: f64 = kernel.iter().sum();
    for k in kernel.iter_mut() {
        *k /= sum;
    }
    kernel
}

/// Weighted blend of two frames: `alpha * a + beta * b`, saturating.
pub fn blend(a: &ImageFrame, alpha: f64, b: &ImageFrame, beta: f64) -> ImagingResult<ImageFrame> {
    if a.width != b.width || a.height != b.height {
        return Err(ImagingError::DimensionMismatch {
            expected_width: a.width,
            expected_height: a.height,
            found_width: b.width,
            found_height: b.height,
        });
    }
    let mut out = ImageFrame::new(a.width, a.height);
    for y in 0..a.height {
        for x in 0..a.width {
            let pa = a.get(x, y);
            let pb = b.get(x, y);
            let mut pixel = [0u8; 3];
            for (c, entry) in pixel.iter_mut().enumerate() {
                let v = pa[c] as f64 * alpha + pb[c] as f64 * beta;
                *entry = v.round().clamp(0.0, 255.0) as u8;
            }
            out.set(x, y, pixel);
        }
    }
    Ok(out)
}

/// Map a grayscale frame through a cold/blue "ocean" palette.
///
/// Blue ramps across the full range, green over the upper two thirds, red
/// over the upper third.
pub fn ocean_colormap(src: &GrayFrame) -> ImageFrame {
    let mut out = ImageFrame::new(src.width, src.height);
    for y in 0..src.height {
        for x in 0..src.width {
            let t = src.get(x, y) as f64 / 255.0;
            let r = (3.0 * t - 2.0).clamp(0.0, 1.0);
            let g = ((3.0 * t - 1.0) / 2.0).clamp(0.0, 1.0);
            let b = t;
            out.set(
                x,
                y,
                [
                    (r * 255.0).round() as u8,
                    (g * 255.0).round() as u8,
                    (b * 255.0).round() as u8,
                ],
            );
        }
    }
    out
}
