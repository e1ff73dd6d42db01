//! Groq Provider Implementation
//!
//! Talks to Groq's OpenAI-compatible chat completions endpoint. The API key
//! is read from `GROQ_CLOUD_API_KEY` unless supplied explicitly.
//!
//! # Examples
//!
//! ```no_run
//! use redliner_llm::GroqProvider;
//!
//! let provider = GroqProvider::from_env(redliner_llm::groq::DEFAULT_MODEL).unwrap();
//! ```

use crate::{http_client, LlmError};
use redliner_domain::traits::LlmProvider;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default Groq API base URL
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1";

/// Default chat model
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GROQ_CLOUD_API_KEY";

/// Default timeout for completion requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default sampling temperature; low so section labels stay stable
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Groq chat completions provider
pub struct GroqProvider {
    endpoint: String,
    model: String,
    api_key: String,
    temperature: f32,
    system_prompt: Option<String>,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    stream: bool,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

impl GroqProvider {
    /// Create a new Groq provider
    ///
    /// # Errors
    ///
    /// Returns `Authentication` if the API key is blank and `Configuration` if
    /// the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::Authentication("API key is empty".to_string()));
        }

        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            api_key,
            temperature: DEFAULT_TEMPERATURE,
            system_prompt: None,
            client: http_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS))?,
        })
    }

    /// Create a provider using the key in `GROQ_CLOUD_API_KEY`
    pub fn from_env(model: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            LlmError::Authentication(format!("{} is not set", API_KEY_ENV))
        })?;
        Self::new(api_key, model)
    }

    /// Override the API base URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Send a system message ahead of every prompt
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, LlmError> {
        self.client = http_client(timeout)?;
        Ok(self)
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> ChatCompletionRequest<'a> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &self.system_prompt {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: prompt,
        });

        ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            stream: false,
        }
    }
}

impl LlmProvider for GroqProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        let url = format!("{}/chat/completions", self.endpoint);
        debug!(model = %self.model, prompt_len = prompt.len(), "Sending Groq completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(LlmError::from_request)?;

        if !response.status().is_success() {
            return Err(LlmError::from_status(response, &self.model).await);
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("Response contained no message".to_string()))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
