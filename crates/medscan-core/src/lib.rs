//! MedScan Canonical Clinical Types
//!
//! This crate provides the shared data model for the MedScan diagnostic
//! engines: structured vital signs, biomarker reports, triage assessments,
//! and case-retrieval records.
//!
//! # Overview
//!
//! Each analysis crate (`medscan-imaging`, `medscan-acoustics`,
//! `medscan-triage`, `medscan-casebank`) consumes raw request-scoped input
//! and produces one of the typed reports defined here. All report types are
//! serde-serializable so the boundary layer (CLI, HTTP front end) can emit
//! them directly.
//!
//! # Modules
//!
//! - [`vitals`]: structured vital-sign inputs for the triage scorer
//! - [`report`]: biomarker report types (anemia, cough, fracture, vein,
//!   risk projection) and the shared severity/confidence enums
//! - [`triage`]: triage assessment output types
//! - [`case`]: case metadata, similarity results, and the retrieval seam

pub mod case;
pub mod report;
pub mod triage;
pub mod vitals;

pub use case::{CaseMetadata, CaseRetrieval, RecordType, RetrievalError, SimilarityResult};
pub use report::{
    AcousticFeatures, AnemiaReport, AnemiaSeverity, AttentionTarget, ColorAnalysis, Confidence,
    CoughPattern, CoughReport, CoughType, FractureReport, ImageQuality, Lighting, RiskLevel,
    RiskProjection, Sharpness, SimilarCase, VeinView,
};
pub use triage::{DerivedVitals, FeverStatus, OxygenStatus, TemporalTrend, TriageAssessment};
pub use vitals::VitalSigns;
