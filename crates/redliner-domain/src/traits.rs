//! Trait definitions for external capabilities
//!
//! These traits define the boundaries between the review logic and the
//! machine-learning infrastructure. Implementations live in other crates
//! (redliner-llm, redliner-index, redliner-analyzer) and are handed to the
//! analyzer at construction time.

use std::fmt::Display;
use std::future::Future;

/// Trait for text-completion providers
///
/// Implemented by the infrastructure layer (redliner-llm)
pub trait LlmProvider {
    /// Error type for completion requests
    type Error: Display;

    /// Generate a completion for the prompt
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;

    /// Name of the model serving completions
    fn model_name(&self) -> &str;
}

/// Trait for embedding models
///
/// Implemented by the infrastructure layer (redliner-index, redliner-llm)
pub trait Embedder {
    /// Error type for embedding requests
    type Error: Display;

    /// Embed a batch of texts
    ///
    /// Returns one vector per input text, in input order. All vectors produced
    /// by one embedder share the same dimension.
    fn embed(
        &self,
        texts: &[String],
    ) -> impl Future<Output = Result<Vec<Vec<f32>>, Self::Error>> + Send;
}

/// Trait for sentence boundary detection
///
/// Implemented by the application layer (redliner-analyzer)
pub trait SentenceSegmenter {
    /// Split text into sentences, in source order
    fn segment(&self, text: &str) -> Vec<String>;
}
