//! Input file loading for the CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use medscan_acoustics::sample::AcousticSample;

/// Read a file into memory with a path-bearing error.
pub fn read_bytes(path: &str) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read file: {path}"))
}

/// Load a WAV file as a mono acoustic sample.
///
/// Integer PCM is scaled to [-1, 1] by its bit depth; multi-channel audio
/// is downmixed by averaging across channels.
pub fn read_wav(path: &str) -> Result<AcousticSample> {
    let mut reader = hound::WavReader::open(Path::new(path))
        .with_context(|| format!("Failed to read WAV file: {path}"))?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<_, _>>()
            .with_context(|| format!("Malformed float samples in {path}"))?,
        hound::SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<_, _>>()
                .with_context(|| format!("Malformed PCM samples in {path}"))?
        }
    };

    let channels = spec.channels.max(1) as usize;
    let mono: Vec<f32> = interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect();

    let duration_ms = (mono.len() as u64 * 1000 / spec.sample_rate.max(1) as u64) as u32;
    AcousticSample::from_samples(mono, spec.sample_rate, duration_ms)
        .map_err(|e| anyhow::anyhow!("Audio decode failed: {e}"))
}
