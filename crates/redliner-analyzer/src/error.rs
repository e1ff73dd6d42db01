//! Error types for the Analyzer

use redliner_index::IndexError;
use thiserror::Error;

/// Errors that can occur during analysis
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Empty, blank or oversized input text
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Embedding provider failed or returned unusable vectors
    #[error("Embedding failure: {0}")]
    EmbeddingFailure(String),

    /// No playbook chunks were available to index
    #[error("Index is empty: no playbook chunks to search")]
    EmptyIndex,

    /// Completion service failed, rejected the request, or timed out
    #[error("Analysis service error: {0}")]
    AnalysisService(String),

    /// Umbrella error surfaced by the analyzer, carrying the underlying cause
    #[error("Analysis failed: {source}")]
    AnalysisFailed {
        /// The failure that aborted the analysis
        #[source]
        source: Box<AnalyzerError>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AnalyzerError {
    /// Wrap an error as `AnalysisFailed`
    pub fn failed(source: AnalyzerError) -> Self {
        AnalyzerError::AnalysisFailed {
            source: Box::new(source),
        }
    }

    /// The innermost error, looking through `AnalysisFailed`
    pub fn root_cause(&self) -> &AnalyzerError {
        match self {
            AnalyzerError::AnalysisFailed { source } => source.root_cause(),
            other => other,
        }
    }

    /// Whether the caller supplied bad input (a 4xx in HTTP terms)
    pub fn is_caller_error(&self) -> bool {
        matches!(self.root_cause(), AnalyzerError::InvalidInput(_))
    }

    /// Whether retrying the same call later might succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.root_cause(),
            AnalyzerError::EmbeddingFailure(_) | AnalyzerError::AnalysisService(_)
        )
    }
}

impl From<IndexError> for AnalyzerError {
    fn from(e: IndexError) -> Self {
        match e {
            IndexError::EmptyIndex => AnalyzerError::EmptyIndex,
            IndexError::DimensionMismatch { .. } => AnalyzerError::EmbeddingFailure(e.to_string()),
        }
    }
}
