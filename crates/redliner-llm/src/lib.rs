//! Redliner LLM Provider Layer
//!
//! Pluggable provider implementations for the capabilities the analyzer
//! consumes: text completion (`LlmProvider`) and embeddings (`Embedder`).
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GroqProvider`: Groq's OpenAI-compatible chat completions API
//! - `OllamaProvider`: Local Ollama generate API
//! - `OllamaEmbedder`: Local Ollama embedding API
//!
//! None of the providers retry. Retry policy belongs to the caller.
//!
//! # Examples
//!
//! ```
//! use redliner_llm::MockProvider;
//! use redliner_domain::traits::LlmProvider;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let provider = MockProvider::new("- Conflicts: none");
//! let result = provider.generate("test prompt").await.unwrap();
//! assert_eq!(result, "- Conflicts: none");
//! # }
//! ```

#![warn(missing_docs)]

pub mod groq;
pub mod ollama;

use redliner_domain::traits::LlmProvider;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use groq::GroqProvider;
pub use ollama::{OllamaEmbedder, OllamaProvider};

/// Errors that can occur during LLM operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Request did not complete within the client timeout
    #[error("Request timed out")]
    Timeout,

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Provider credentials missing or rejected
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Provider could not be configured
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl LlmError {
    /// Map a transport-level reqwest error
    pub(crate) fn from_request(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Communication(format!("Request failed: {}", e))
        }
    }

    /// Map a non-success HTTP response
    pub(crate) async fn from_status(response: reqwest::Response, model: &str) -> Self {
        let status = response.status();
        match status {
            reqwest::StatusCode::NOT_FOUND => LlmError::ModelNotAvailable(model.to_string()),
            reqwest::StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                LlmError::Authentication(format!("HTTP {}", status))
            }
            _ => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                LlmError::Communication(format!("HTTP {}: {}", status, error_text))
            }
        }
    }
}

/// Build the shared HTTP client used by the providers
pub(crate) fn http_client(timeout: std::time::Duration) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| LlmError::Configuration(format!("Failed to build HTTP client: {}", e)))
}

/// Mock LLM provider for deterministic testing
///
/// This provider returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use redliner_llm::{LlmError, MockProvider};
///
/// // Fixed response for every prompt
/// let provider = MockProvider::new("- Gaps: missing NDA clause");
///
/// // Per-prompt responses and failures
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// provider.add_error("prompt2", LlmError::RateLimitExceeded);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: Result<String, LlmError>,
    responses: Arc<Mutex<HashMap<String, Result<String, LlmError>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: Ok(response.into()),
            responses: Arc::new(Mutex::new(HashMap::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a MockProvider that fails every request with `error`
    pub fn failing(error: LlmError) -> Self {
        Self {
            default_response: Err(error),
            ..Self::new("")
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.insert(prompt.into(), Ok(response.into()));
        }
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>, error: LlmError) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.insert(prompt.into(), Err(error));
        }
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or(0)
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    /// Reset the recorded prompts
    pub fn reset_call_count(&self) {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.clear();
        }
    }

    fn reply(&self, prompt: &str) -> Result<String, LlmError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        let configured = self
            .responses
            .lock()
            .ok()
            .and_then(|responses| responses.get(prompt).cloned());

        configured.unwrap_or_else(|| self.default_response.clone())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProvider for MockProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.reply(prompt)
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate("any prompt").await;
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.generate("hello").await.unwrap(), "world");
        assert_eq!(provider.generate("foo").await.unwrap(), "bar");
        assert_eq!(
            provider.generate("unknown").await.unwrap(),
            "Default mock response"
        );
    }

    #[tokio::test]
    async fn test_mock_provider_records_prompts() {
        let provider = MockProvider::new("test");
        assert_eq!(provider.call_count(), 0);

        provider.generate("prompt1").await.unwrap();
        provider.generate("prompt2").await.unwrap();
        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.prompts(), vec!["prompt1", "prompt2"]);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt", LlmError::RateLimitExceeded);

        let result = provider.generate("bad prompt").await;
        assert_eq!(result.unwrap_err(), LlmError::RateLimitExceeded);
        assert!(provider.generate("good prompt").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_provider_failing() {
        let provider = MockProvider::failing(LlmError::Communication("refused".into()));
        let result = provider.generate("anything").await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_provider_clone_shares_history() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate("test").await.unwrap();

        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }

    #[test]
    fn test_mock_model_name() {
        assert_eq!(MockProvider::default().model_name(), "mock");
    }
}
