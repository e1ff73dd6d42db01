//! Redliner Analyzer
//!
//! Reviews a document against a policy playbook using retrieval-augmented
//! generation.
//!
//! # Overview
//!
//! The playbook is split into sentence-aligned chunks, each chunk is embedded
//! and indexed, and the chunks closest to the document are handed to a
//! completion model as context. The model's reply is parsed into three
//! sections: conflicts, gaps and irrelevant content.
//!
//! # Architecture
//!
//! ```text
//! Playbook → Chunker → Embedder → VectorIndex ─┐
//! Document → Embedder ────────────────────────→ search → context
//! context + Document → AnalysisClient → LLM → ResponseParser → AnalysisResult
//! ```
//!
//! # Key Features
//!
//! - **Sentence-aligned chunking**: chunks never split a sentence
//! - **Exact retrieval**: flat squared-L2 search, most similar first
//! - **Pluggable capabilities**: any `Embedder`, `LlmProvider` and `SentenceSegmenter`
//! - **Total parsing**: malformed replies degrade to sentinel values, never errors
//!
//! # Example Usage
//!
//! ```
//! use redliner_analyzer::{Analyzer, AnalyzerConfig};
//! use redliner_index::HashingEmbedder;
//! use redliner_llm::MockProvider;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new("- Conflicts: none\n- Gaps: missing NDA clause\n- Irrelevant: none");
//! let analyzer = Analyzer::new(HashingEmbedder::new(384), provider, AnalyzerConfig::default())?;
//!
//! let result = analyzer
//!     .analyze("All vendors must sign NDAs.", "Vendor agreement without confidentiality terms.")
//!     .await?;
//!
//! assert_eq!(result.gaps, "missing NDA clause");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod chunking;
mod client;
mod config;
mod error;
mod parser;
mod prompt;
mod retriever;
mod segmenter;
mod types;

pub use analyzer::Analyzer;
pub use chunking::{SentenceChunker, DEFAULT_MAX_TOKENS};
pub use client::AnalysisClient;
pub use config::AnalyzerConfig;
pub use error::AnalyzerError;
pub use parser::{parse_response, ParsedSections, SECTION_DELIMITER};
pub use prompt::PromptBuilder;
pub use retriever::Retriever;
pub use segmenter::PunctuationSegmenter;
pub use types::{AnalysisMetadata, AnalysisReport, Retrieval, ScoredChunk};
