//! Time- and frequency-domain feature extraction.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// RMS energy of the signal.
pub fn rms_energy(samples: &[f32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_of_squares: f64 = samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
    (sum_of_squares / samples.len() as f64).sqrt()
}

/// Zero-crossing rate of the mean-centered signal: the fraction of adjacent
/// sample pairs whose sign differs after removing the DC offset.
pub fn zero_crossing_rate(samples: &[f32]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let mean: f64 = samples.iter().map(|&s| s as f64).sum::<f64>() / samples.len() as f64;
    let crossings = samples
        .windows(2)
        .filter(|w| {
            let a = w[0] as f64 - mean;
            let b = w[1] as f64 - mean;
            (a >= 0.0) != (b >= 0.0)
        })
        .count();
    crossings as f64 / samples.len() as f64
}

/// Spectral centroid in Hz: the magnitude-weighted mean of the positive
/// frequencies of the full-length discrete Fourier transform. Guards the
/// zero-magnitude case (the weight sum is floored at 1).
pub fn spectral_centroid(samples: &[f32], sample_rate: u32) -> f64 {
    let n = samples.len();
    if n < 2 {
        return 0.0;
    }

    let mut buffer: Vec<Complex<f32>> = samples.iter().map(|&s| Complex::new(s, 0.0)).collect();
    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    let freq_resolution = sample_rate as f64 / n as f64;
    let mut weighted_sum = 0.0f64;
    let mut magnitude_sum = 0.0f64;
    // Positive frequencies only: bins 1 ..= n/2 exclusive of Nyquist
    // mirror content.
    for (i, c) in buffer.iter().enumerate().take(n.div_ceil(2)).skip(1) {
        let magnitude = ((c.re * c.re + c.im * c.im) as f64).sqrt();
        weighted_sum += i as f64 * freq_resolution * magnitude;
        magnitude_sum += magnitude;
    }

    weighted_sum / magnitude_sum.max(1.0)
}
