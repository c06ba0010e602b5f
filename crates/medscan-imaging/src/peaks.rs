//! 1-D peak detection with prominence, distance, and width constraints.
//!
//! Semantics follow the SciPy `find_peaks` contract: plateau maxima resolve
//! to their midpoint, the distance filter keeps higher peaks, prominence is
//! measured against the surrounding baseline, and width is evaluated at half
//! prominence with linear interpolation. Peaks are returned in ascending
//! index order; callers needing "most significant first" re-sort by
//! descending prominence.

/// One detected peak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Sample index of the peak (plateau midpoint for flat tops).
    pub index: usize,
    /// Prominence relative to the surrounding baseline.
    pub prominence: f64,
}

/// Constraints for [`find_peaks`].
#[derive(Debug, Clone, Copy)]
pub struct FindPeaksParams {
    /// Minimum prominence for a peak to survive.
    pub min_prominence: f64,
    /// Minimum horizontal distance between kept peaks, in samples.
    pub min_distance: usize,
    /// Minimum width at half prominence, in samples.
    pub min_width: f64,
}

/// Find peaks in a 1-D signal subject to the given constraints.
pub fn find_peaks(signal: &[f64], params: &FindPeaksParams) -> Vec<Peak> {
    let candidates = local_maxima(signal);
    let candidates = filter_by_distance(signal, candidates, params.min_distance);

    let mut peaks = Vec::new();
    for idx in candidates {
        let (prominence, left_base, right_base) = peak_prominence(signal, idx);
        if prominence < params.min_prominence {
            continue;
        }
        let width = peak_width(signal, idx, prominence, left_base, right_base);
        if width < params.min_width {
            continue;
        }
        peaks.push(Peak {
            index: idx,
            prominence,
        });
    }
    peaks
}

/// Strict local maxima with plateau handling: a flat top bounded by lower
/// samples on both sides yields its midpoint.
fn local_maxima(signal: &[f64]) -> Vec<usize> {
    let n = signal.len();
    let mut maxima = Vec::new();
    let mut i = 1;
    while n >= 3 && i < n - 1 {
        if signal[i - 1] < signal[i] {
            // Scan across a possible plateau.
            let mut ahead = i + 1;
            while ahead < n - 1 && signal[ahead] == signal[i] {
                ahead += 1;
            }
            if signal[ahead] < signal[i] {
                let left_edge = i;
                let right_edge = ahead - 1;
                maxima.push(left_edge + (right_edge - left_edge) / 2);
                i = ahead;
                continue;
            }
        }
        i += 1;
    }
    maxima
}

/// Keep the highest peaks, removing any neighbour closer than `distance`.
fn filter_by_distance(signal: &[f64], candidates: Vec<usize>, distance: usize) -> Vec<usize> {
    if distance <= 1 || candidates.len() < 2 {
        return candidates;
    }

    // Process highest first; a removed peak cannot veto its neighbours.
    let mut by_height: Vec<usize> = (0..candidates.len()).collect();
    by_height.sort_by(|&a, &b| {
        signal[candidates[a]]
            .partial_cmp(&signal[candidates[b]])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    by_height.reverse();

    let mut keep = vec![true; candidates.len()];
    for &k in &by_height {
        if !keep[k] {
            continue;
        }
        // Remove lower neighbours within the exclusion window.
        let mut j = k;
        while j > 0 {
            j -= 1;
            if candidates[k] - candidates[j] >= distance {
                break;
            }
            keep[j] = false;
        }
        let mut j = k + 1;
        while j < candidates.len() {
            if candidates[j] - candidates[k] >= distance {
                break;
            }
            keep[j] = false;
            j += 1;
        }
    }

    candidates
        .into_iter()
        .zip(keep)
        .filter_map(|(idx, k)| k.then_some(idx))
        .collect()
}

/// Prominence of the peak at `idx`, plus the base indices bounding it.
///
/// Each side is scanned outward until a sample higher than the peak (or the
/// signal edge); the lower of the two interval minima is the baseline.
fn peak_prominence(signal: &[f64], idx: usize) -> (f64, usize, usize) {
    let height = signal[idx];

    let mut left_min = height;
    let mut left_base = idx;
    let mut i = idx;
    while i > 0 {
        i -= 1;
        if signal[i] > height {
            break;
        }
        if signal[i] < left_min {
            left_min = signal[i];
            left_base = i;
        }
    }

    let mut right_min = height;
    let mut right_base = idx;
    let mut i = idx;
    while i + 1 < signal.len() {
        i += 1;
        if signal[i] > height {
            break;
        }
        if signal[i] < right_min {
            right_min = signal[i];
            right_base = i;
        }
    }

    (height - left_min.max(right_min), left_base, right_base)
}

/// Width of the peak at half prominence, with linear interpolation at the
/// crossing points.
fn peak_width(
    signal: &[f64],
    idx: usize,
    prominence: f64,
    left_base: usize,
    right_base: usize,
) -> f64 {
    let eval_height = signal[idx] - prominence * 0.5;

    let mut i = idx;
    while i > left_base && signal[i] > eval_height {
        i -= 1;
    }
    let mut left_ip = i as f64;
    if signal[i] < eval_height {
        left_ip += (eval_height - signal[i]) / (signal[i + 1] - signal[i]);
    }

    let mut i = idx;
    while i < right_base && signal[i] > eval_height {
        i += 1;
    }
    let mut right_ip = i as f64;
    if signal[i] < eval_height {
        right_ip -= (eval_height - signal[i]) / (signal[i - 1] - signal[i]);
    }

    right_ip - left_ip
}
