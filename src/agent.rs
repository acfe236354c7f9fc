//! LLM agent module for remote summarisation.
//!
//! Builds a mode-specific prompt and delegates to a completion backend. The
//! backend sits behind [`CompletionClient`] so tests can substitute a double.

use crate::config::Config;
use crate::gemini::GeminiClient;
use crate::mode::SummaryMode;
use std::future::Future;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Gemini API key is not configured. Set GEMINI_API_KEY or add gemini_key to the [api] section of condensa.toml")]
    MissingApiKey,
    #[error("Gemini API error: {0}")]
    RequestFailed(String),
}

/// A backend that turns a prompt into a single text completion.
///
/// The credential is passed per call so the client itself holds no secret
/// state.
pub trait CompletionClient {
    type Error: std::fmt::Display;

    fn complete(
        &self,
        api_key: &str,
        prompt: &str,
    ) -> impl Future<Output = Result<String, Self::Error>>;
}

/// Remote summariser with an explicitly injected credential.
///
/// The key is resolved once (config file plus environment override) and
/// handed in here; no ambient environment lookup happens at request time.
pub struct RemoteSummarizer<C> {
    api_key: Option<String>,
    client: C,
}

impl RemoteSummarizer<GeminiClient> {
    /// Build a Gemini-backed summariser from configuration.
    ///
    /// A missing key is not an error here: the summariser is constructed
    /// unconfigured and every call reports [`AgentError::MissingApiKey`].
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api.gemini_key.clone(),
            GeminiClient::new(&config.agent.model),
        )
    }
}

impl<C: CompletionClient> RemoteSummarizer<C> {
    pub fn new(api_key: Option<String>, client: C) -> Self {
        Self { api_key, client }
    }

    /// Summarise `text` according to `mode` via the completion backend.
    ///
    /// Always resolves to a value: configuration and service failures come
    /// back as `Err(AgentError)`, never as a panic. The completion text is
    /// returned verbatim, with no post-processing. One request per call, no
    /// retries.
    pub async fn summarize(&self, text: &str, mode: SummaryMode) -> Result<String, AgentError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(AgentError::MissingApiKey);
        };

        let prompt = build_prompt(text, mode);

        self.client
            .complete(api_key, &prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "summarisation request failed"))
            .map_err(|e| AgentError::RequestFailed(e.to_string()))
    }
}

/// Build the summarisation prompt for the backing model.
///
/// The text is interpolated as-is: the model reads the prompt as natural
/// language, so no escaping is applied. Callers should treat the input as
/// untrusted when displaying results.
pub fn build_prompt(text: &str, mode: SummaryMode) -> String {
    format!("Summarize the following text in {} format:\n\n{}", mode, text)
}
