//! Case records, similarity results, and the retrieval seam.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of record stored in the case bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    /// A prescription record with medicines and precautions.
    Prescription,
    /// A verified or unverified diagnosis observation.
    LearningData,
}

/// Metadata stored alongside one case embedding.
///
/// All fields are optional: records arrive from several boundary paths with
/// different subsets populated. Vectors in collections default to empty and
/// are skipped when serializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseMetadata {
    /// Patient identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    /// Recorded diagnosis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    /// Symptom text the embedding was generated from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<String>,
    /// Prescribed medicine names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub medicines: Vec<String>,
    /// Prescribing doctor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_name: Option<String>,
    /// ISO-8601 timestamp of the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Record kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<RecordType>,
    /// Usage instructions / precautions per medicine.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub precautions: Vec<String>,
}

/// One query hit against the case bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityResult {
    /// Metadata of the matched case.
    pub metadata: CaseMetadata,
    /// Cosine similarity, always strictly greater than 0.3 in returned hits.
    pub similarity: f32,
}

/// Error from a retrieval backend.
///
/// Carries only a message: analyzers treat any retrieval failure the same
/// way (skip enrichment, substitute an empty list).
#[derive(Debug, Error)]
#[error("case retrieval failed: {message}")]
pub struct RetrievalError {
    /// Human-readable failure description.
    pub message: String,
}

impl RetrievalError {
    /// Creates a retrieval error from any displayable cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Seam for similar-case lookup.
///
/// Implemented by the case bank; analyzers depend on this trait so retrieval
/// stays optional and failures never propagate into a primary analysis.
pub trait CaseRetrieval {
    /// Finds up to `top_k` cases similar to the free-text query.
    fn find_similar(&self, query: &str, top_k: usize)
        -> Result<Vec<SimilarityResult>, RetrievalError>;
}
