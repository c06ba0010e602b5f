//! MedScan Acoustic Engine
//!
//! Deterministic signal-processing over cough recordings: time-domain
//! features (RMS energy, zero-crossing rate), a spectral centroid from the
//! magnitude spectrum, and an ordered rule ladder classifying the cough into
//! one of four clinical categories.
//!
//! All computation is a pure function of the input buffer; there is no
//! shared state and no randomness.
//!
//! # Crate Structure
//!
//! - [`sample`] - waveform container with peak normalization
//! - [`features`] - RMS / zero-crossing / spectral centroid extraction
//! - [`classify`] - the ordered cough classification ladder
//! - [`error`] - error types

pub mod classify;
pub mod error;
pub mod features;
pub mod sample;

pub use classify::analyze;
pub use error::{AcousticsError, AcousticsResult};
pub use sample::AcousticSample;
