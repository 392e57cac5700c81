use async_trait::async_trait;
use rig::agent::Agent;
use rig::completion::{Chat, Message};
use rig::providers::gemini::completion::CompletionModel;
use rig::providers::gemini::Client as GeminiClient;
use std::time::Duration;
use tokio::time::timeout;
use tracing::info;

use super::TextGenerator;
use crate::config::Config;
use crate::error::{ApiResult, Error};

/// Preamble for the Gemini agent
const PREAMBLE: &str =
    "You are an event parser. Convert natural language into structured calendar events.";

/// Lowercased markers that identify a provider rate-limit rejection
const QUOTA_MARKERS: [&str; 4] = ["429", "resource_exhausted", "quota", "rate limit"];

/// Text generator backed by Google Gemini through Rig
pub struct GeminiGenerator {
    agent: Agent<CompletionModel>,
    request_timeout: Duration,
}

impl GeminiGenerator {
    /// Build the Gemini agent from the loaded configuration
    pub fn new(config: &Config) -> Self {
        info!("Using Gemini model: {}", config.gemini_model);

        let client = GeminiClient::new(&config.gemini_api_key);
        let agent = client
            .agent(&config.gemini_model)
            .preamble(PREAMBLE)
            .temperature(0.2)
            .build();

        Self {
            agent,
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> ApiResult<String> {
        let chat = self.agent.chat(prompt.to_owned(), Vec::<Message>::new());

        match timeout(self.request_timeout, chat).await {
            Ok(Ok(reply)) => Ok(reply),
            Ok(Err(e)) => Err(classify_provider_error(&e.to_string())),
            Err(_) => Err(Error::Completion(format!(
                "Gemini request timed out after {}s",
                self.request_timeout.as_secs()
            ))),
        }
    }
}

/// Sort a provider failure into quota exhaustion or an ordinary completion
/// error.
///
/// Rig stringifies provider rejections as status plus body, so the
/// classification matches on known rate-limit markers in the message.
fn classify_provider_error(message: &str) -> Error {
    let lowered = message.to_ascii_lowercase();

    if QUOTA_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        Error::QuotaExhausted(message.to_string())
    } else {
        Error::Completion(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_429_is_quota_exhaustion() {
        let err = classify_provider_error("CompletionError: HTTP 429 Too Many Requests");
        assert!(matches!(err, Error::QuotaExhausted(_)));
    }

    #[test]
    fn test_resource_exhausted_is_quota_exhaustion() {
        let err = classify_provider_error(
            "ProviderError: RESOURCE_EXHAUSTED: Quota exceeded for requests per minute",
        );
        assert!(matches!(err, Error::QuotaExhausted(_)));
    }

    #[test]
    fn test_rate_limit_wording_is_quota_exhaustion() {
        let err = classify_provider_error("the model hit a rate limit, slow down");
        assert!(matches!(err, Error::QuotaExhausted(_)));
    }

    #[test]
    fn test_network_failure_is_completion_error() {
        let err = classify_provider_error("connection reset by peer");
        assert!(matches!(err, Error::Completion(_)));
    }

    #[test]
    fn test_server_error_is_completion_error() {
        let err = classify_provider_error("HTTP 500 Internal Server Error");
        assert!(matches!(err, Error::Completion(_)));
    }
}
