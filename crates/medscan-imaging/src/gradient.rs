//! Sobel gradients and the Laplacian blur metric.
//!
//! Borders are handled by replication, so the output planes match the input
//! dimensions exactly.

use crate::frame::{FloatPlane, GrayFrame};

/// Compute Sobel gradients of a grayscale frame.
///
/// Returns `(vertical, horizontal)`: the vertical plane is the derivative
/// across rows (smoothed along columns), the horizontal plane the derivative
/// across columns (smoothed along rows).
pub fn sobel_gradients(src: &GrayFrame) -> (FloatPlane, FloatPlane) {
    let width = src.width;
    let height = src.height;
    let mut vertical = FloatPlane::new(width, height);
    let mut horizontal = FloatPlane::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let xi = x as i64;
            let yi = y as i64;

            let p = |dx: i64, dy: i64| src.get_clamped(xi + dx, yi + dy) as f32;

            // Derivative across rows, [1, 2, 1] smoothing across columns.
            let dy = (p(-1, 1) + 2.0 * p(0, 1) + p(1, 1))
                - (p(-1, -1) + 2.0 * p(0, -1) + p(1, -1));
            // Derivative across columns, [1, 2, 1] smoothing across rows.
            let dx = (p(1, -1) + 2.0 * p(1, 0) + p(1, 1))
                - (p(-1, -1) + 2.0 * p(-1, 0) + p(-1, 1));

            vertical.set(x, y, dy);
            horizontal.set(x, y, dx);
        }
    }

    (vertical, horizontal)
}

/// Variance of the Laplacian response, a standard sharpness metric.
///
/// Low values indicate a blurry capture; the anemia analyzer treats
/// anything below 50 as degraded.
pub fn laplacian_variance(src: &GrayFrame) -> f64 {
    let width = src.width as usize;
    let height = src.height as usize;
    if width == 0 || height == 0 {
        return 0.0;
    }

    let mut responses = Vec::with_capacity(width * height);
    for y in 0..src.height {
        for x in 0..src.width {
            let xi = x as i64;
            let yi = y as i64;
            let p = |dx: i64, dy: i64| src.get_clamped(xi + dx, yi + dy) as f64;
            let lap = p(0, -1) + p(0, 1) + p(-1, 0) + p(1, 0) - 4.0 * p(0, 0);
            responses.push(lap);
        }
    }

    let n = responses.len() as f64;
    let mean = responses.iter().sum::<f64>() / n;
    responses.iter().map(|r| (r - mean) * (r - mean)).sum::<f64>() / n
}

/// Reduce the absolute vertical gradient to a per-row mean profile,
/// normalized to [0, 1].
///
/// An all-zero profile (featureless image) is returned unchanged rather
/// than divided by zero.
pub fn row_gradient_profile(vertical: &FloatPlane) -> Vec<f64> {
    let width = vertical.width as usize;
    let mut profile: Vec<f64> = (0..vertical.height)
        .map(|y| {
            let row = vertical.row(y);
            row.iter().map(|v| v.abs() as f64).sum::<f64>() / width as f64
        })
        .collect();

    let max = profile.iter().cloned().fold(0.0f64, f64::max);
    if max > 0.0 {
        for v in profile.iter_mut() {
            *v /= max;
        }
    }
    profile
}

/// Column index with the highest mean intensity, used as the bone-mass
/// centroid in fracture localization.
pub fn column_intensity_argmax(src: &GrayFrame) -> u32 {
    let mut best_col = 0u32;
    let mut best_mean = f64::MIN;
    for x in 0..src.width {
        let mut sum = 0.0f64;
        for y in 0..src.height {
            sum += src.get(x, y) as f64;
        }
        let mean = sum / src.height as f64;
        if mean > best_mean {
            best_mean = mean;
            best_col = x;
        }
    }
    best_col
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn horizontal_edge_frame() -> GrayFrame {
        // Top half dark, bottom half bright: strong vertical gradient at the
        // transition row, no horizontal gradient.
        let mut frame = GrayFrame::new(16, 16, 0);
        for y in 8..16 {
            for x in 0..16 {
                frame.set(x, y, 200);
            }
        }
        frame
    }

    #[test]
    fn horizontal_edge_shows_in_vertical_gradient() {
        let frame = horizontal_edge_frame();
        let (vertical, horizontal) = sobel_gradients(&frame);

        // Rows adjacent to the transition carry the response.
        assert!(vertical.get(8, 7).abs() > 0.0);
        assert!(vertical.get(8, 8).abs() > 0.0);
        // Interior columns have no horizontal response.
        assert_eq!(horizontal.get(8, 8), 0.0);
    }

    #[test]
    fn row_profile_peaks_at_the_edge() {
        let frame = horizontal_edge_frame();
        let (vertical, _) = sobel_gradients(&frame);
        let profile = row_gradient_profile(&vertical);

        let peak_row = profile
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert!(peak_row == 7 || peak_row == 8);
        assert_eq!(profile[peak_row], 1.0);
    }

    #[test]
    fn featureless_profile_is_all_zero() {
        let frame = GrayFrame::new(8, 8, 120);
        let (vertical, _) = sobel_gradients(&frame);
        let profile = row_gradient_profile(&vertical);
        assert!(profile.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn sharp_frame_has_higher_laplacian_variance_than_flat() {
        let sharp = horizontal_edge_frame();
        let flat = GrayFrame::new(16, 16, 128);
        assert!(laplacian_variance(&sharp) > laplacian_variance(&flat));
        assert_eq!(laplacian_variance(&flat), 0.0);
    }

    #[test]
    fn centroid_tracks_brightest_column() {
        let mut frame = GrayFrame::new(10, 10, 10);
        for y in 0..10 {
            frame.set(6, y, 250);
        }
        assert_eq!(column_intensity_argmax(&frame), 6);
    }
}
