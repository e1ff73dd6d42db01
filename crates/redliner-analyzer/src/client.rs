//! Completion client for document review

use crate::error::AnalyzerError;
use crate::prompt::PromptBuilder;
use redliner_domain::traits::LlmProvider;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info};

/// Default timeout for one completion call
pub const DEFAULT_COMPLETION_TIMEOUT: Duration = Duration::from_secs(120);

/// Sends review prompts to a completion provider
///
/// Makes exactly one provider call per request. Retrying is left to the caller.
pub struct AnalysisClient<L> {
    provider: L,
    timeout: Duration,
}

impl<L: LlmProvider> AnalysisClient<L> {
    /// Create a new client
    pub fn new(provider: L) -> Self {
        Self {
            provider,
            timeout: DEFAULT_COMPLETION_TIMEOUT,
        }
    }

    /// Set the completion timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Name of the model behind this client
    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }

    /// Ask the model to review `document` against playbook `context`
    ///
    /// Returns the raw reply text.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisService` on transport failure, a rejected request, or
    /// timeout.
    pub async fn complete(&self, context: &str, document: &str) -> Result<String, AnalyzerError> {
        let prompt = PromptBuilder::new(context, document).build();
        debug!("Sending prompt of {} chars to {}", prompt.len(), self.model_name());

        let reply = timeout(self.timeout, self.provider.generate(&prompt))
            .await
            .map_err(|_| {
                AnalyzerError::AnalysisService(format!(
                    "Completion timed out after {:?}",
                    self.timeout
                ))
            })?
            .map_err(|e| AnalyzerError::AnalysisService(e.to_string()))?;

        info!("Received response from {}", self.model_name());
        debug!("Response length: {} chars", reply.len());
        Ok(reply)
    }
}
