//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use redliner_analyzer::AnalyzerConfig;
use redliner_index::embedding::DEFAULT_DIMENSION;
use redliner_llm::{groq, ollama};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default Ollama completion model.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Analyzer tuning
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Completion provider
    #[serde(default)]
    pub completion: CompletionConfig,

    /// Embedding provider
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Completion provider selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum CompletionConfig {
    /// Groq chat completions
    Groq {
        /// Model name
        #[serde(default = "default_groq_model")]
        model: String,

        /// API base URL
        #[serde(default = "default_groq_endpoint")]
        endpoint: String,

        /// API key; falls back to the GROQ_CLOUD_API_KEY environment variable
        #[serde(default, skip_serializing_if = "Option::is_none")]
        api_key: Option<String>,

        /// Sampling temperature
        #[serde(default = "default_temperature")]
        temperature: f32,
    },

    /// Local Ollama server
    Ollama {
        /// Model name
        #[serde(default = "default_ollama_model")]
        model: String,

        /// Server URL
        #[serde(default = "default_ollama_endpoint")]
        endpoint: String,
    },
}

/// Embedding provider selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum EmbeddingConfig {
    /// Offline feature-hashing embedder
    Hashing {
        /// Vector dimension
        #[serde(default = "default_dimension")]
        dimension: usize,
    },

    /// Local Ollama embedding model
    Ollama {
        /// Model name
        #[serde(default = "default_embedding_model")]
        model: String,

        /// Server URL
        #[serde(default = "default_ollama_endpoint")]
        endpoint: String,
    },
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".redliner").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one the default path is used,
    /// falling back to built-in defaults when no file is there.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Self::load_from(path)
            }
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.analyzer.validate().map_err(CliError::Config)?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Save configuration to a file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        CompletionConfig::Groq {
            model: default_groq_model(),
            endpoint: default_groq_endpoint(),
            api_key: None,
            temperature: default_temperature(),
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        EmbeddingConfig::Hashing {
            dimension: default_dimension(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_groq_model() -> String {
    groq::DEFAULT_MODEL.to_string()
}

fn default_groq_endpoint() -> String {
    groq::DEFAULT_ENDPOINT.to_string()
}

fn default_temperature() -> f32 {
    groq::DEFAULT_TEMPERATURE
}

fn default_ollama_model() -> String {
    DEFAULT_OLLAMA_MODEL.to_string()
}

fn default_ollama_endpoint() -> String {
    ollama::DEFAULT_ENDPOINT.to_string()
}

fn default_embedding_model() -> String {
    ollama::DEFAULT_EMBEDDING_MODEL.to_string()
}

fn default_dimension() -> usize {
    DEFAULT_DIMENSION
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.analyzer.top_k, 5);
        assert!(matches!(config.completion, CompletionConfig::Groq { .. }));
        assert!(matches!(
            config.embedding,
            EmbeddingConfig::Hashing { dimension: DEFAULT_DIMENSION }
        ));
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml(
            r#"
            [analyzer]
            top_k = 3

            [completion]
            provider = "ollama"
            model = "mistral"

            [embedding]
            provider = "ollama"

            [settings]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.analyzer.top_k, 3);
        assert_eq!(config.analyzer.max_tokens, 500);
        assert_eq!(
            config.completion,
            CompletionConfig::Ollama {
                model: "mistral".to_string(),
                endpoint: "http://localhost:11434".to_string(),
            }
        );
        assert_eq!(
            config.embedding,
            EmbeddingConfig::Ollama {
                model: "nomic-embed-text".to_string(),
                endpoint: "http://localhost:11434".to_string(),
            }
        );
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
    }

    #[test]
    fn test_invalid_analyzer_settings_rejected() {
        let result = Config::from_toml("[analyzer]\ntop_k = 0\n");
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let result = Config::from_toml("[completion]\nprovider = \"openai\"\n");
        assert!(matches!(result, Err(CliError::Toml(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.analyzer.top_k = 7;
        config.settings.color = false;
        config.save_to(&path).unwrap();

        let loaded = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(Some(dir.path().join("absent.toml").as_path()));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_api_key_not_serialized_when_absent() {
        let toml_str = Config::default().to_toml().unwrap();
        assert!(!toml_str.contains("api_key"));
        assert!(toml_str.contains("provider = \"groq\""));
    }
}
