//! Deterministic text embeddings.
//!
//! Hand-crafted feature vectors without external ML model dependencies:
//! tokens are hashed into a fixed number of buckets with a hash-derived
//! sign, then the vector is L2-normalized. The same text always produces
//! the same vector, across runs and platforms.

use std::sync::OnceLock;

/// Embedding dimensionality.
pub const EMBEDDING_DIM: usize = 64;

/// Deterministic text embedder.
///
/// Stateless today; the type exists so callers depend on an embedder value
/// rather than a free function, which keeps room for weighting state later.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextEmbedder;

static SHARED: OnceLock<TextEmbedder> = OnceLock::new();

impl TextEmbedder {
    /// Creates a new embedder.
    pub fn new() -> Self {
        Self
    }

    /// Process-wide shared embedder, lazily initialized.
    pub fn shared() -> &'static TextEmbedder {
        SHARED.get_or_init(TextEmbedder::new)
    }

    /// Embed free text into a unit-length `EMBEDDING_DIM` vector.
    ///
    /// Tokenization is lowercase alphanumeric runs; everything else is a
    /// separator. Each token lands in a blake3-derived bucket with a
    /// hash-derived sign, so repeated tokens reinforce their bucket while
    /// unrelated tokens mostly cancel. Empty or token-free text embeds to
    /// the zero vector.
    pub fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; EMBEDDING_DIM];

        let lower = text.to_lowercase();
        for token in lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let digest = blake3::hash(token.as_bytes());
            let bytes = digest.as_bytes();
            let bucket = u64::from_le_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ]) as usize
                % EMBEDDING_DIM;
            let sign = if bytes[8] & 1 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }

        normalize(&mut vector);
        vector
    }
}

/// Scale to unit L2 norm in place; the zero vector is left untouched.
fn normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
}

/// Cosine similarity of two equal-length vectors.
///
/// Zero-norm inputs compare as 0.0 rather than NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|v| v * v).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
