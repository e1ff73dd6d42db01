//! Embedding Model for Text Vectorization
//!
//! This module provides an offline, deterministic text-to-vector model so the
//! review pipeline can run without a model server. Remote models plug in
//! through the same `Embedder` trait (see `redliner-llm`).
//!
//! # Hashing embedder
//!
//! Each lowercased word token is hashed into one of `dimension` buckets with
//! a hash-derived sign, then the vector is normalised to unit length. Texts
//! that share vocabulary land close together, which is enough for lexical
//! retrieval over a single playbook.
//!
//! # Examples
//!
//! ```rust
//! use redliner_index::embedding::HashingEmbedder;
//!
//! let model = HashingEmbedder::new(256);
//! let embedding = model.embed_one("Vendors must sign NDAs").unwrap();
//! assert_eq!(embedding.len(), 256);
//!
//! // Same text always produces same embedding
//! assert_eq!(embedding, model.embed_one("Vendors must sign NDAs").unwrap());
//! ```

use redliner_domain::traits::Embedder;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Default embedding dimension
pub const DEFAULT_DIMENSION: usize = 384;

/// Errors that can occur during embedding generation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmbeddingError {
    /// Invalid input text
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Model configured with an unusable dimension
    #[error("Invalid dimension: {0}")]
    InvalidDimension(usize),
}

/// Deterministic feature-hashing embedder
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimension: usize,
}

impl HashingEmbedder {
    /// Create a new hashing embedder
    ///
    /// # Parameters
    ///
    /// - `dimension`: Number of hash buckets (the vector length)
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    /// Get the dimension of embeddings produced by this model
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Embed a single text
    pub fn embed_one(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if self.dimension == 0 {
            return Err(EmbeddingError::InvalidDimension(0));
        }
        if text.trim().is_empty() {
            return Err(EmbeddingError::InvalidInput(
                "Empty text cannot be embedded".to_string(),
            ));
        }

        let mut embedding = vec![0.0f32; self.dimension];

        for token in tokens(text) {
            let hash = hash_token(&token);
            let bucket = (hash % self.dimension as u64) as usize;
            let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
            embedding[bucket] += sign;
        }

        // Normalize to unit length
        let magnitude: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            for value in &mut embedding {
                *value /= magnitude;
            }
        }

        Ok(embedding)
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl Embedder for HashingEmbedder {
    type Error = EmbeddingError;

    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, Self::Error> {
        texts.iter().map(|text| self.embed_one(text)).collect()
    }
}

/// Lowercased alphanumeric word tokens
fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}

fn hash_token(token: &str) -> u64 {
    // DefaultHasher::new() uses fixed keys, so buckets are stable across runs
    let mut hasher = DefaultHasher::new();
    token.hash(&mut hasher);
    hasher.finish()
}

/// Squared Euclidean distance between two vectors
///
/// # Panics
///
/// Panics if vectors have different lengths
pub fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Vectors must have same length");
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}
