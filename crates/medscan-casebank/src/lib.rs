//! MedScan Case Bank
//!
//! Deterministic text embeddings plus a persistent flat-scan similarity
//! index. The embedder is hand-crafted feature hashing with no external
//! model dependencies; the bank stores parallel vector/metadata sequences
//! in one JSON snapshot, rewritten atomically on every mutation.
//!
//! # Crate Structure
//!
//! - [`embedder`] - text feature vectors and cosine similarity
//! - [`bank`] - the persistent index and the retrieval seam impl
//! - [`error`] - error types

pub mod bank;
pub mod embedder;
pub mod error;

pub use bank::CaseBank;
pub use embedder::{TextEmbedder, EMBEDDING_DIM};
pub use error::{CaseBankError, CaseBankResult};
