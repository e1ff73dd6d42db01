//! Result and metadata types for analysis

use redliner_domain::{AnalysisResult, Chunk};
use serde::{Deserialize, Serialize};

/// A retrieved playbook chunk with its distance to the document
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredChunk {
    /// The playbook chunk
    pub chunk: Chunk,

    /// Squared Euclidean distance between chunk and document embeddings
    pub distance: f32,
}

/// Output of a retrieval pass
#[derive(Debug, Clone)]
pub struct Retrieval {
    /// Retrieved chunks, most similar first
    pub hits: Vec<ScoredChunk>,

    /// Number of chunks the playbook was split into
    pub playbook_chunks: usize,
}

impl Retrieval {
    /// Retrieved chunks without their distances, most similar first
    pub fn into_chunks(self) -> Vec<Chunk> {
        self.hits.into_iter().map(|hit| hit.chunk).collect()
    }
}

/// Metadata about an analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Number of chunks the playbook was split into
    pub playbook_chunks: usize,

    /// Number of chunks supplied to the model as context
    pub retrieved_chunks: usize,

    /// Model that produced the analysis
    pub model_name: String,

    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: u64,

    /// Unix timestamp (seconds) when the analysis finished
    pub timestamp: u64,
}

/// Analysis result together with how it was produced
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// The three review sections
    pub result: AnalysisResult,

    /// Run metadata
    pub metadata: AnalysisMetadata,

    /// Context chunks in retrieval order
    pub retrieved: Vec<ScoredChunk>,
}
