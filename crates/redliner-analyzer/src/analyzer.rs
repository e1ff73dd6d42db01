//! Main analyzer implementation

use crate::chunking::SentenceChunker;
use crate::client::AnalysisClient;
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::parser::parse_response;
use crate::retriever::Retriever;
use crate::segmenter::PunctuationSegmenter;
use crate::types::{AnalysisMetadata, AnalysisReport};
use redliner_domain::traits::{Embedder, LlmProvider, SentenceSegmenter};
use redliner_domain::AnalysisResult;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::{error, info, warn};

/// Reviews documents against a playbook
///
/// Owns its embedder, completion provider and segmenter. Each call builds its
/// own index, so one analyzer can serve concurrent calls.
pub struct Analyzer<E, L, S = PunctuationSegmenter> {
    retriever: Retriever<E, S>,
    client: AnalysisClient<L>,
    config: AnalyzerConfig,
}

impl<E: Embedder, L: LlmProvider> Analyzer<E, L> {
    /// Create a new analyzer using the default sentence segmenter
    ///
    /// # Errors
    ///
    /// Returns `Config` if the configuration is invalid.
    pub fn new(embedder: E, provider: L, config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        Self::with_segmenter(embedder, provider, PunctuationSegmenter::new(), config)
    }
}

impl<E: Embedder, L: LlmProvider, S: SentenceSegmenter> Analyzer<E, L, S> {
    /// Create a new analyzer with a custom sentence segmenter
    ///
    /// # Errors
    ///
    /// Returns `Config` if the configuration is invalid.
    pub fn with_segmenter(
        embedder: E,
        provider: L,
        segmenter: S,
        config: AnalyzerConfig,
    ) -> Result<Self, AnalyzerError> {
        config.validate().map_err(AnalyzerError::Config)?;

        let chunker = SentenceChunker::new(segmenter, config.max_tokens);
        let retriever = Retriever::new(embedder, chunker)
            .with_batch_size(config.embedding_batch_size)
            .with_embedding_timeout(config.embedding_timeout());
        let client = AnalysisClient::new(provider).with_timeout(config.completion_timeout());

        Ok(Self {
            retriever,
            client,
            config,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Review a document against a playbook
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if either text is blank or over its length limit
    /// - `AnalysisFailed` wrapping the cause if retrieval or completion fails
    pub async fn analyze(
        &self,
        playbook: &str,
        document: &str,
    ) -> Result<AnalysisResult, AnalyzerError> {
        Ok(self.analyze_detailed(playbook, document).await?.result)
    }

    /// Review a document and report how the result was produced
    ///
    /// Fails exactly as [`analyze`](Self::analyze) does.
    pub async fn analyze_detailed(
        &self,
        playbook: &str,
        document: &str,
    ) -> Result<AnalysisReport, AnalyzerError> {
        let start = Instant::now();

        self.validate_input("Playbook", playbook, self.config.max_playbook_length)?;
        self.validate_input("Document", document, self.config.max_document_length)?;

        let retrieval = self
            .retriever
            .retrieve_scored(playbook, document, self.config.top_k)
            .await
            .map_err(fail)?;

        let context = retrieval
            .hits
            .iter()
            .map(|hit| hit.chunk.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        let reply = self.client.complete(&context, document).await.map_err(fail)?;

        let sections = parse_response(&reply);
        if sections.is_empty() {
            warn!("No analysis results found in model response");
        }
        let result = sections.into_result();

        let metadata = AnalysisMetadata {
            playbook_chunks: retrieval.playbook_chunks,
            retrieved_chunks: retrieval.hits.len(),
            model_name: self.client.model_name().to_string(),
            processing_time_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        };
        info!(
            "Analysis complete in {}ms using {} of {} chunks",
            metadata.processing_time_ms, metadata.retrieved_chunks, metadata.playbook_chunks
        );

        Ok(AnalysisReport {
            result,
            metadata,
            retrieved: retrieval.hits,
        })
    }

    fn validate_input(&self, name: &str, text: &str, max_chars: usize) -> Result<(), AnalyzerError> {
        if text.trim().is_empty() {
            return Err(AnalyzerError::InvalidInput(format!(
                "{} text is required",
                name
            )));
        }

        let chars = text.chars().count();
        if chars > max_chars {
            return Err(AnalyzerError::InvalidInput(format!(
                "{} text is {} characters, limit is {}",
                name, chars, max_chars
            )));
        }
        Ok(())
    }
}

fn fail(e: AnalyzerError) -> AnalyzerError {
    error!("Error analyzing document: {}", e);
    AnalyzerError::failed(e)
}
