//! Playbook retrieval: chunk, embed, index, search

use crate::chunking::SentenceChunker;
use crate::error::AnalyzerError;
use crate::segmenter::PunctuationSegmenter;
use crate::types::{Retrieval, ScoredChunk};
use redliner_domain::traits::{Embedder, SentenceSegmenter};
use redliner_domain::Chunk;
use redliner_index::VectorIndex;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info};

/// Default number of texts per embedding request
pub const DEFAULT_BATCH_SIZE: usize = 32;

/// Default timeout for one embedding request
pub const DEFAULT_EMBEDDING_TIMEOUT: Duration = Duration::from_secs(60);

/// Finds the playbook chunks most similar to a document
///
/// Each call builds a fresh index over the playbook and drops it afterwards.
pub struct Retriever<E, S = PunctuationSegmenter> {
    embedder: E,
    chunker: SentenceChunker<S>,
    batch_size: usize,
    embedding_timeout: Duration,
}

impl<E: Embedder, S: SentenceSegmenter> Retriever<E, S> {
    /// Create a new retriever
    pub fn new(embedder: E, chunker: SentenceChunker<S>) -> Self {
        Self {
            embedder,
            chunker,
            batch_size: DEFAULT_BATCH_SIZE,
            embedding_timeout: DEFAULT_EMBEDDING_TIMEOUT,
        }
    }

    /// Set the number of texts sent per embedding request (minimum 1)
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Set the timeout applied to each embedding request
    pub fn with_embedding_timeout(mut self, embedding_timeout: Duration) -> Self {
        self.embedding_timeout = embedding_timeout;
        self
    }

    /// The chunker used to split playbooks
    pub fn chunker(&self) -> &SentenceChunker<S> {
        &self.chunker
    }

    /// Retrieve the `k` playbook chunks most similar to the document
    ///
    /// Chunks come back most similar first.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the playbook is blank
    /// - `EmbeddingFailure` if the embedder fails, times out, or returns the
    ///   wrong number of vectors
    /// - `EmptyIndex` if the playbook produced no chunks
    pub async fn retrieve(
        &self,
        playbook: &str,
        document: &str,
        k: usize,
    ) -> Result<Vec<Chunk>, AnalyzerError> {
        Ok(self.retrieve_scored(playbook, document, k).await?.into_chunks())
    }

    /// Like [`retrieve`](Self::retrieve), keeping distances and chunk counts
    pub async fn retrieve_scored(
        &self,
        playbook: &str,
        document: &str,
        k: usize,
    ) -> Result<Retrieval, AnalyzerError> {
        let chunks = self.chunker.split(playbook)?;
        info!("Split playbook into {} chunks", chunks.len());

        let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
        let vectors = self.embed_all(&texts).await?;
        let index = VectorIndex::build(vectors)?;
        info!(
            "Built index over {} chunks (dimension {})",
            index.len(),
            index.dimension()
        );

        let query = self.embed_query(document).await?;
        let neighbours = index.search(&query, k)?;

        let hits: Vec<ScoredChunk> = neighbours
            .into_iter()
            .filter_map(|n| {
                chunks.get(n.id).map(|chunk| ScoredChunk {
                    chunk: chunk.clone(),
                    distance: n.distance,
                })
            })
            .collect();
        info!("Retrieved top {} of {} chunks", hits.len(), chunks.len());

        Ok(Retrieval {
            hits,
            playbook_chunks: chunks.len(),
        })
    }

    /// Embed texts batch by batch, preserving order
    async fn embed_all(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, AnalyzerError> {
        let mut vectors = Vec::with_capacity(texts.len());
        for batch in texts.chunks(self.batch_size) {
            debug!("Embedding batch of {} chunks", batch.len());
            vectors.extend(self.embed_batch(batch).await?);
        }
        Ok(vectors)
    }

    async fn embed_query(&self, document: &str) -> Result<Vec<f32>, AnalyzerError> {
        let query = [document.to_string()];
        self.embed_batch(&query)
            .await?
            .pop()
            .ok_or_else(|| AnalyzerError::EmbeddingFailure("No query embedding returned".to_string()))
    }

    async fn embed_batch(&self, batch: &[String]) -> Result<Vec<Vec<f32>>, AnalyzerError> {
        let vectors = timeout(self.embedding_timeout, self.embedder.embed(batch))
            .await
            .map_err(|_| {
                AnalyzerError::EmbeddingFailure(format!(
                    "Embedding timed out after {:?}",
                    self.embedding_timeout
                ))
            })?
            .map_err(|e| AnalyzerError::EmbeddingFailure(e.to_string()))?;

        if vectors.len() != batch.len() {
            return Err(AnalyzerError::EmbeddingFailure(format!(
                "Expected {} embeddings, got {}",
                batch.len(),
                vectors.len()
            )));
        }
        Ok(vectors)
    }
}
