//! MedScan Triage Engine
//!
//! Rule-based clinical triage: derived vitals (shock index, MAP, pulse
//! pressure), SIRS scoring, hypoxia tiering, ordered red-flag assembly,
//! keyword-driven referral and rule-outs, and a severity-ordered triage
//! level ladder.
//!
//! Every decision boundary is a fixed, hand-authored threshold; the scorer
//! is a total pure function over [`medscan_core::VitalSigns`] — malformed
//! optional inputs degrade to defaults rather than failing the assessment.
//!
//! # Crate Structure
//!
//! - [`vitals`] - blood-pressure parsing and derived-vital computation
//! - [`scorer`] - the full assessment pipeline

pub mod scorer;
pub mod vitals;

pub use scorer::assess;
