//! Provider construction from configuration.
//!
//! The analyzer is generic over its capabilities; these enums let the CLI pick
//! an implementation at runtime.

use crate::config::{CompletionConfig, EmbeddingConfig};
use crate::error::{CliError, Result};
use redliner_domain::traits::{Embedder, LlmProvider};
use redliner_index::HashingEmbedder;
use redliner_llm::{GroqProvider, LlmError, OllamaEmbedder, OllamaProvider};
use std::time::Duration;

/// Completion provider chosen by configuration.
pub enum CompletionBackend {
    /// Groq chat completions
    Groq(GroqProvider),
    /// Local Ollama generation
    Ollama(OllamaProvider),
}

impl CompletionBackend {
    /// Build the configured provider.
    ///
    /// Groq reads its API key from the config file, then `GROQ_CLOUD_API_KEY`.
    pub fn from_config(config: &CompletionConfig, timeout: Duration) -> Result<Self> {
        match config {
            CompletionConfig::Groq {
                model,
                endpoint,
                api_key,
                temperature,
            } => {
                let provider = match api_key {
                    Some(key) => GroqProvider::new(key.clone(), model.clone())?,
                    None => GroqProvider::from_env(model.clone())?,
                };
                let provider = provider
                    .with_endpoint(endpoint.clone())
                    .with_temperature(*temperature)
                    .with_timeout(timeout)?;
                Ok(CompletionBackend::Groq(provider))
            }
            CompletionConfig::Ollama { model, endpoint } => {
                let provider = OllamaProvider::new(endpoint.clone(), model.clone())?
                    .with_timeout(timeout)?;
                Ok(CompletionBackend::Ollama(provider))
            }
        }
    }
}

impl LlmProvider for CompletionBackend {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> std::result::Result<String, LlmError> {
        match self {
            CompletionBackend::Groq(provider) => provider.generate(prompt).await,
            CompletionBackend::Ollama(provider) => provider.generate(prompt).await,
        }
    }

    fn model_name(&self) -> &str {
        match self {
            CompletionBackend::Groq(provider) => provider.model_name(),
            CompletionBackend::Ollama(provider) => provider.model_name(),
        }
    }
}

/// Embedding provider chosen by configuration.
pub enum EmbeddingBackend {
    /// Offline hashing embedder
    Hashing(HashingEmbedder),
    /// Local Ollama embedding model
    Ollama(OllamaEmbedder),
}

impl EmbeddingBackend {
    /// Build the configured embedder.
    ///
    /// `timeout` bounds each HTTP request to a remote embedding model.
    pub fn from_config(config: &EmbeddingConfig, timeout: Duration) -> Result<Self> {
        match config {
            EmbeddingConfig::Hashing { dimension } => {
                if *dimension == 0 {
                    return Err(CliError::Config(
                        "embedding dimension must be greater than 0".to_string(),
                    ));
                }
                Ok(EmbeddingBackend::Hashing(HashingEmbedder::new(*dimension)))
            }
            EmbeddingConfig::Ollama { model, endpoint } => {
                let embedder = OllamaEmbedder::new(endpoint.clone(), model.clone())?
                    .with_timeout(timeout)?;
                Ok(EmbeddingBackend::Ollama(embedder))
            }
        }
    }
}

impl Embedder for EmbeddingBackend {
    type Error = CliError;

    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        match self {
            EmbeddingBackend::Hashing(embedder) => Ok(embedder.embed(texts).await?),
            EmbeddingBackend::Ollama(embedder) => Ok(embedder.embed(texts).await?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redliner_analyzer::AnalyzerConfig;

    #[test]
    fn test_ollama_completion_backend() {
        let config = CompletionConfig::Ollama {
            model: "mistral".to_string(),
            endpoint: "http://localhost:11434".to_string(),
        };
        let backend = CompletionBackend::from_config(&config, Duration::from_secs(5)).unwrap();
        assert_eq!(backend.model_name(), "mistral");
    }

    #[test]
    fn test_groq_backend_with_configured_key() {
        let config = CompletionConfig::Groq {
            model: "llama-3.1-8b-instant".to_string(),
            endpoint: "https://api.groq.com/openai/v1".to_string(),
            api_key: Some("test-key".to_string()),
            temperature: 0.0,
        };
        let backend = CompletionBackend::from_config(&config, Duration::from_secs(5)).unwrap();
        assert!(matches!(backend, CompletionBackend::Groq(_)));
        assert_eq!(backend.model_name(), "llama-3.1-8b-instant");
    }

    #[test]
    fn test_groq_backend_rejects_blank_key() {
        let config = CompletionConfig::Groq {
            model: "m".to_string(),
            endpoint: "https://api.groq.com/openai/v1".to_string(),
            api_key: Some("  ".to_string()),
            temperature: 0.0,
        };
        let result = CompletionBackend::from_config(&config, Duration::from_secs(5));
        assert!(matches!(result, Err(CliError::Llm(LlmError::Authentication(_)))));
    }

    #[tokio::test]
    async fn test_hashing_embedding_backend() {
        let backend = EmbeddingBackend::from_config(
            &EmbeddingConfig::Hashing { dimension: 16 },
            Duration::from_secs(5),
        )
        .unwrap();
        let vectors = backend
            .embed(&["Vendors must sign NDAs".to_string()])
            .await
            .unwrap();
        assert_eq!(vectors.len(), 1);
        assert_eq!(vectors[0].len(), 16);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let result = EmbeddingBackend::from_config(
            &EmbeddingConfig::Hashing { dimension: 0 },
            Duration::from_secs(5),
        );
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_ollama_embedding_backend_uses_configured_timeout() {
        let config = EmbeddingConfig::Ollama {
            model: "nomic-embed-text".to_string(),
            endpoint: "http://localhost:11434".to_string(),
        };
        let timeout = AnalyzerConfig {
            embedding_timeout_secs: 120,
            ..AnalyzerConfig::default()
        }
        .embedding_timeout();

        match EmbeddingBackend::from_config(&config, timeout).unwrap() {
            EmbeddingBackend::Ollama(embedder) => {
                assert_eq!(embedder.timeout(), Duration::from_secs(120));
                assert_eq!(embedder.model(), "nomic-embed-text");
            }
            EmbeddingBackend::Hashing(_) => panic!("Expected Ollama embedder"),
        }
    }
}
