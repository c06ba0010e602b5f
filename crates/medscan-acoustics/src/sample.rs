//! Waveform container.

use crate::error::{AcousticsError, AcousticsResult};

/// Sample rate assumed for boundary audio buffers.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// A decoded waveform, normalized to [-1, 1] by its peak absolute
/// amplitude.
#[derive(Debug, Clone)]
pub struct AcousticSample {
    /// Normalized sample values.
    samples: Vec<f32>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Stated recording duration in milliseconds.
    pub duration_ms: u32,
}

impl AcousticSample {
    /// Build a sample from raw float values, normalizing by the peak
    /// absolute amplitude. A silent buffer stays silent (the peak divisor
    /// is floored at 1.0, matching the boundary contract).
    pub fn from_samples(
        mut samples: Vec<f32>,
        sample_rate: u32,
        duration_ms: u32,
    ) -> AcousticsResult<Self> {
        if samples.is_empty() {
            return Err(AcousticsError::EmptyInput);
        }
        let peak = samples.iter().map(|s| s.abs()).fold(0.0f32, f32::max);
        let divisor = peak.max(1.0);
        for s in samples.iter_mut() {
            *s /= divisor;
        }
        Ok(Self {
            samples,
            sample_rate,
            duration_ms,
        })
    }

    /// Build a sample from raw unsigned bytes, as delivered by the
    /// boundary's base64 audio payloads: each byte is one sample value.
    pub fn from_bytes(bytes: &[u8], duration_ms: u32) -> AcousticsResult<Self> {
        if bytes.is_empty() {
            return Err(AcousticsError::EmptyInput);
        }
        let samples = bytes.iter().map(|&b| b as f32).collect();
        Self::from_samples(samples, DEFAULT_SAMPLE_RATE, duration_ms)
    }

    /// Normalized sample values.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the sample is empty (never true for constructed values).
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
