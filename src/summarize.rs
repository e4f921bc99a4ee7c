//! Chat-completion client for article summarization.
//!
//! Sends a fixed instruction plus one article's body text per request and
//! returns the trimmed synopsis. The pipeline maps failures into an in-band
//! [`crate::models::Summary::Failed`] so every fetched article keeps exactly
//! one summary; nothing here retries.

use openai_api_rs::v1::api::OpenAIClient;
use openai_api_rs::v1::chat_completion::{
    self, ChatCompletionRequest, Content, MessageRole,
};
use std::time::Instant;
use tracing::{info, instrument, warn};

use crate::error::SummarizeError;

/// The system instruction sent with every article.
pub const SUMMARY_INSTRUCTION: &str = "Summarize each news article in 2 concise sentences.";

/// Client for the summarization API.
pub struct Summarizer {
    client: OpenAIClient,
    model: String,
}

impl Summarizer {
    /// Build a summarizer for the given API key and chat model.
    pub fn new(api_key: &str, model: String) -> Result<Self, SummarizeError> {
        let client = OpenAIClient::builder()
            .with_api_key(api_key)
            .build()
            .map_err(|e| SummarizeError::Client(e.to_string()))?;
        Ok(Self { client, model })
    }

    /// Summarize one article's body text into a 2-sentence synopsis.
    #[instrument(level = "info", skip_all, fields(model = %self.model, bytes = text.len()))]
    pub async fn summarize(&mut self, text: &str) -> Result<String, SummarizeError> {
        let request = build_request(&self.model, text);

        let t0 = Instant::now();
        let response = self
            .client
            .chat_completion(request)
            .await
            .map_err(|e| SummarizeError::Api(e.to_string()))?;
        let elapsed_ms = t0.elapsed().as_millis();

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or(SummarizeError::EmptyResponse)?;

        let summary = content.trim().to_string();
        if summary.is_empty() {
            warn!(elapsed_ms, "Summarizer returned only whitespace");
        } else {
            info!(elapsed_ms, chars = summary.len(), "Summarized article");
        }
        Ok(summary)
    }
}

fn build_request(model: &str, text: &str) -> ChatCompletionRequest {
    ChatCompletionRequest::new(
        model.to_string(),
        vec![
            chat_completion::ChatCompletionMessage {
                role: MessageRole::system,
                content: Content::Text(SUMMARY_INSTRUCTION.to_string()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
            chat_completion::ChatCompletionMessage {
                role: MessageRole::user,
                content: Content::Text(text.to_string()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_carries_model_and_both_messages() {
        let request = build_request("gpt-4", "Article body text");
        assert_eq!(request.model, "gpt-4");
        assert_eq!(request.messages.len(), 2);
    }
}
