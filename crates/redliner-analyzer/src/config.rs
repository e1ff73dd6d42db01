//! Configuration for the Analyzer

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Analyzer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum whitespace tokens per playbook chunk
    pub max_tokens: usize,

    /// Number of playbook chunks retrieved as context
    pub top_k: usize,

    /// Number of texts sent to the embedder per request
    pub embedding_batch_size: usize,

    /// Maximum time for a single completion call (seconds)
    pub completion_timeout_secs: u64,

    /// Maximum time for a single embedding batch (seconds)
    pub embedding_timeout_secs: u64,

    /// Maximum playbook length (characters)
    pub max_playbook_length: usize,

    /// Maximum document length (characters)
    pub max_document_length: usize,
}

impl AnalyzerConfig {
    /// Get the completion timeout as a Duration
    pub fn completion_timeout(&self) -> Duration {
        Duration::from_secs(self.completion_timeout_secs)
    }

    /// Get the embedding timeout as a Duration
    pub fn embedding_timeout(&self) -> Duration {
        Duration::from_secs(self.embedding_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }
        if self.top_k == 0 {
            return Err("top_k must be greater than 0".to_string());
        }
        if self.embedding_batch_size == 0 {
            return Err("embedding_batch_size must be greater than 0".to_string());
        }
        if self.completion_timeout_secs == 0 {
            return Err("completion_timeout_secs must be greater than 0".to_string());
        }
        if self.embedding_timeout_secs == 0 {
            return Err("embedding_timeout_secs must be greater than 0".to_string());
        }
        if self.max_playbook_length == 0 || self.max_document_length == 0 {
            return Err("length limits must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            top_k: 5,
            embedding_batch_size: 32,
            completion_timeout_secs: 120,
            embedding_timeout_secs: 60,
            max_playbook_length: 500_000,
            max_document_length: 200_000,
        }
    }
}
