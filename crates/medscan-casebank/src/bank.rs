//! Persistent similarity index over case embeddings.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use medscan_core::{CaseMetadata, CaseRetrieval, RetrievalError, SimilarityResult};

use crate::embedder::{cosine_similarity, TextEmbedder, EMBEDDING_DIM};
use crate::error::{CaseBankError, CaseBankResult};

/// Snapshot layout persisted to disk. Vectors and metadata are parallel
/// sequences; index `i` of one belongs with index `i` of the other.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CaseStore {
    vectors: Vec<Vec<f32>>,
    metadata: Vec<CaseMetadata>,
}

/// Flat-scan similarity index with synchronous JSON persistence.
///
/// Every mutation rewrites the whole snapshot atomically (write to a
/// temporary file in the same directory, then rename), so a crash mid-write
/// leaves the previous snapshot intact. Reads take a shared lock and never
/// block each other; `add` and `clear` serialize behind the write lock.
#[derive(Debug)]
pub struct CaseBank {
    path: PathBuf,
    store: RwLock<CaseStore>,
}

impl CaseBank {
    /// Open a bank backed by `path`.
    ///
    /// A missing file yields an empty index. A file that exists but fails to
    /// parse is a [`CaseBankError::CorruptSnapshot`]; callers decide whether
    /// to surface it or fall back to an empty bank.
    pub fn open(path: impl Into<PathBuf>) -> CaseBankResult<Self> {
        let path = path.into();
        let store = match fs::read(&path) {
            Ok(bytes) => {
                serde_json::from_slice(&bytes).map_err(|source| CaseBankError::CorruptSnapshot {
                    path: path.clone(),
                    source,
                })?
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => CaseStore::default(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            store: RwLock::new(store),
        })
    }

    /// Number of stored cases.
    pub fn len(&self) -> usize {
        self.store.read().map(|s| s.vectors.len()).unwrap_or(0)
    }

    /// True when no cases are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append one case and persist the snapshot.
    pub fn add(&self, vector: Vec<f32>, metadata: CaseMetadata) -> CaseBankResult<()> {
        if vector.len() != EMBEDDING_DIM {
            return Err(CaseBankError::DimensionMismatch {
                expected: EMBEDDING_DIM,
                actual: vector.len(),
            });
        }
        let mut store = self.store.write().map_err(|_| CaseBankError::Poisoned)?;
        store.vectors.push(vector);
        store.metadata.push(metadata);
        self.persist(&store)
    }

    /// Embed `text` with the shared embedder and store it with `metadata`.
    pub fn add_text(&self, text: &str, metadata: CaseMetadata) -> CaseBankResult<()> {
        self.add(TextEmbedder::shared().embed(text), metadata)
    }

    /// Top-`top_k` stored cases by cosine similarity to `query`, descending,
    /// keeping only hits strictly above 0.3. An empty index returns an empty
    /// vec regardless of the query; against a non-empty index the query must
    /// have the stored dimension.
    pub fn search(&self, query: &[f32], top_k: usize) -> CaseBankResult<Vec<SimilarityResult>> {
        let store = self.store.read().map_err(|_| CaseBankError::Poisoned)?;
        if store.vectors.is_empty() {
            return Ok(Vec::new());
        }
        if query.len() != EMBEDDING_DIM {
            return Err(CaseBankError::DimensionMismatch {
                expected: EMBEDDING_DIM,
                actual: query.len(),
            });
        }

        let mut scored: Vec<(usize, f32)> = store
            .vectors
            .iter()
            .enumerate()
            .map(|(i, v)| (i, cosine_similarity(query, v)))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        Ok(scored
            .into_iter()
            .take(top_k)
            .filter(|&(_, similarity)| similarity > 0.3)
            .map(|(i, similarity)| SimilarityResult {
                metadata: store.metadata[i].clone(),
                similarity,
            })
            .collect())
    }

    /// Drop every stored case and persist the empty snapshot.
    pub fn clear(&self) -> CaseBankResult<()> {
        let mut store = self.store.write().map_err(|_| CaseBankError::Poisoned)?;
        store.vectors.clear();
        store.metadata.clear();
        self.persist(&store)
    }

    /// Write the snapshot next to its final path, then rename over it.
    fn persist(&self, store: &CaseStore) -> CaseBankResult<()> {
        let json = serde_json::to_vec(store).map_err(CaseBankError::Serialize)?;
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
        let mut tmp = tempfile::NamedTempFile::new_in(if dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            dir
        })?;
        std::io::Write::write_all(&mut tmp, &json)?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl CaseRetrieval for CaseBank {
    fn find_similar(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<SimilarityResult>, RetrievalError> {
        let vector = TextEmbedder::shared().embed(query);
        self.search(&vector, top_k)
            .map_err(|e| RetrievalError::new(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scratch_bank() -> (tempfile::TempDir, CaseBank) {
        let dir = tempfile::tempdir().unwrap();
        let bank = CaseBank::open(dir.path().join("cases.json")).unwrap();
        (dir, bank)
    }

    fn meta(diagnosis: &str) -> CaseMetadata {
        CaseMetadata {
            diagnosis: Some(diagnosis.to_string()),
            ..CaseMetadata::default()
        }
    }

    #[test]
    fn empty_bank_returns_no_hits() {
        let (_dir, bank) = scratch_bank();
        let query = TextEmbedder::shared().embed("fever");
        assert_eq!(bank.search(&query, 5).unwrap().len(), 0);
    }

    #[test]
    fn identical_text_is_the_top_hit_near_one() {
        let (_dir, bank) = scratch_bank();
        bank.add_text("high fever with dry cough", meta("viral infection"))
            .unwrap();
        bank.add_text("sprained ankle after football", meta("sprain"))
            .unwrap();

        let hits = bank.find_similar("high fever with dry cough", 5).unwrap();
        assert!(!hits.is_empty());
        assert_eq!(hits[0].metadata.diagnosis.as_deref(), Some("viral infection"));
        assert!((hits[0].similarity - 1.0).abs() < 1e-5);
    }

    #[test]
    fn weak_matches_below_cutoff_are_dropped() {
        let (_dir, bank) = scratch_bank();
        bank.add_text("sprained ankle after football", meta("sprain"))
            .unwrap();
        let hits = bank
            .find_similar("persistent productive cough with green sputum", 5)
            .unwrap();
        assert!(hits.iter().all(|h| h.similarity > 0.3));
    }

    #[test]
    fn top_k_caps_the_result_count() {
        let (_dir, bank) = scratch_bank();
        for i in 0..5 {
            bank.add_text("fever and cough", meta(&format!("case {i}")))
                .unwrap();
        }
        let hits = bank.find_similar("fever and cough", 3).unwrap();
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn dimension_mismatch_is_rejected() {
        let (_dir, bank) = scratch_bank();
        let err = bank.add(vec![0.5; 3], meta("bad")).unwrap_err();
        assert!(matches!(
            err,
            CaseBankError::DimensionMismatch {
                expected: EMBEDDING_DIM,
                actual: 3
            }
        ));
    }

    #[test]
    fn wrong_dimension_query_is_rejected() {
        let (_dir, bank) = scratch_bank();
        bank.add_text("fever", meta("flu")).unwrap();
        let err = bank.search(&[0.5; 3], 5).unwrap_err();
        assert!(matches!(
            err,
            CaseBankError::DimensionMismatch {
                expected: EMBEDDING_DIM,
                actual: 3
            }
        ));
    }

    #[test]
    fn clear_empties_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.json");

        let bank = CaseBank::open(&path).unwrap();
        bank.add_text("fever", meta("flu")).unwrap();
        bank.clear().unwrap();
        assert!(bank.is_empty());

        let reopened = CaseBank::open(&path).unwrap();
        assert!(reopened.is_empty());
    }

    #[test]
    fn corrupt_snapshot_is_a_typed_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.json");
        fs::write(&path, b"{ not json").unwrap();

        let err = CaseBank::open(&path).unwrap_err();
        assert!(matches!(err, CaseBankError::CorruptSnapshot { .. }));
    }
}
