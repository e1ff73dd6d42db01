//! Exact Vector Index for Chunk Retrieval
//!
//! A flat (brute-force) index over embedding vectors. Every search compares the
//! query against every stored vector using squared Euclidean distance, so
//! results are exact: `search` returns precisely `min(k, len)` neighbours in
//! non-decreasing distance order.
//!
//! # Architecture
//!
//! - One index per analysis call, built from one playbook's chunks
//! - Vector ids are insertion positions, which map back to chunk order
//! - No interior mutability; the owner holds the only handle

use crate::embedding::squared_l2;
use std::cmp::Ordering;
use thiserror::Error;

/// Errors that can occur during vector index operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndexError {
    /// Attempted to build an index from zero vectors
    #[error("Cannot build an index from zero vectors")]
    EmptyIndex,

    /// Invalid embedding dimension
    #[error("Invalid embedding dimension: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension provided
        actual: usize,
    },
}

/// A search hit: the id of a stored vector and its distance to the query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour {
    /// Insertion position of the matched vector
    pub id: usize,

    /// Squared Euclidean distance to the query
    pub distance: f32,
}

/// Flat squared-L2 index
///
/// # Examples
///
/// ```
/// use redliner_index::vector_index::VectorIndex;
///
/// let index = VectorIndex::build(vec![
///     vec![0.0, 0.0],
///     vec![1.0, 0.0],
///     vec![5.0, 5.0],
/// ]).unwrap();
///
/// let results = index.search(&[0.9, 0.0], 2).unwrap();
/// assert_eq!(results[0].id, 1);
/// assert_eq!(results[1].id, 0);
/// ```
#[derive(Debug, Clone)]
pub struct VectorIndex {
    /// Expected embedding dimension
    dimension: usize,

    /// Stored vectors, indexed by insertion position
    vectors: Vec<Vec<f32>>,
}

impl VectorIndex {
    /// Create a new, empty vector index with the specified dimension
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            vectors: Vec::new(),
        }
    }

    /// Build an index from a batch of vectors
    ///
    /// The dimension is taken from the first vector; every other vector must
    /// match it.
    ///
    /// # Errors
    ///
    /// - `EmptyIndex` if `vectors` is empty
    /// - `DimensionMismatch` if the vectors disagree on dimension
    pub fn build(vectors: Vec<Vec<f32>>) -> Result<Self, IndexError> {
        let dimension = vectors.first().map(Vec::len).ok_or(IndexError::EmptyIndex)?;

        let mut index = Self::new(dimension);
        for vector in vectors {
            index.add(vector)?;
        }
        Ok(index)
    }

    /// Add a vector to the index, returning its id
    pub fn add(&mut self, vector: Vec<f32>) -> Result<usize, IndexError> {
        if vector.len() != self.dimension {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }

        self.vectors.push(vector);
        Ok(self.vectors.len() - 1)
    }

    /// Search for the k nearest neighbours to the given vector
    ///
    /// Returns hits sorted by ascending distance; equal distances keep
    /// insertion order. `k` larger than the index is clamped. An empty index
    /// yields an empty result.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<Neighbour>, IndexError> {
        if self.vectors.is_empty() || k == 0 {
            return Ok(Vec::new());
        }

        if query.len() != self.dimension {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }

        let mut hits: Vec<Neighbour> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(id, vector)| Neighbour {
                id,
                distance: squared_l2(query, vector),
            })
            .collect();

        hits.sort_by(|a, b| compare_distance(a.distance, b.distance).then(a.id.cmp(&b.id)));
        hits.truncate(k.min(self.vectors.len()));

        Ok(hits)
    }

    /// Get the number of vectors in the index
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Embedding dimension accepted by this index
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

// NaN sorts last so a degenerate vector can never outrank a real match
fn compare_distance(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.total_cmp(&b),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    }
}
