//! Groq client (OpenAI-compatible chat completions).

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use super::{CompletionProvider, CompletionRequest};
use crate::config::DEFAULT_GROQ_MODEL;
use crate::{prompts, Error, Result};

const PROVIDER: &str = "groq";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Primary provider: Llama 3.1 70B hosted on Groq.
pub struct GroqProvider {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
    model: String,
    model_label: String,
}

impl GroqProvider {
    pub fn new(http_client: HttpClient, api_key: String, base_url: String, model: String) -> Self {
        Self {
            http_client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model_label: model_label(&model),
            model,
        }
    }

    fn build_request(&self, request: &CompletionRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompts::system_prompt(request.context.as_deref()),
                },
                ChatMessage {
                    role: "user",
                    content: request.message.clone(),
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

/// Client-facing name for a Groq model id.
fn model_label(model: &str) -> String {
    if model == DEFAULT_GROQ_MODEL {
        "Groq Llama 3.1 70B".to_string()
    } else {
        format!("Groq {}", model)
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    fn model_label(&self) -> &str {
        &self.model_label
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(Error::provider(PROVIDER, "API key not configured"));
        }

        let body = self.build_request(request);

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::provider(PROVIDER, format!("Network error: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::provider(
                PROVIDER,
                format!("HTTP {}: {}", status, error_text),
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::provider(PROVIDER, format!("Failed to read response: {}", e)))?;

        parse_completion(&text)
    }
}

fn parse_completion(body: &str) -> Result<String> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| Error::provider(PROVIDER, format!("Failed to parse response: {}", e)))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or_else(|| Error::provider(PROVIDER, "Response has no message content"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_completion() {
        let body = r#"{"id":"chatcmpl-1","choices":[{"index":0,"message":{"role":"assistant","content":"أهلاً بك"},"finish_reason":"stop"}]}"#;
        assert_eq!(parse_completion(body).unwrap(), "أهلاً بك");
    }

    #[test]
    fn test_parse_completion_without_choices() {
        let err = parse_completion(r#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, Error::Provider { .. }));
    }

    #[test]
    fn test_parse_completion_rejects_garbage() {
        assert!(parse_completion("<html>rate limited</html>").is_err());
    }

    fn provider(api_key: &str, model: &str) -> GroqProvider {
        GroqProvider::new(
            HttpClient::new(),
            api_key.to_string(),
            "http://127.0.0.1:9/".to_string(),
            model.to_string(),
        )
    }

    #[test]
    fn test_request_shape() {
        let groq = provider("gsk_test", DEFAULT_GROQ_MODEL);

        let request = CompletionRequest::new("ما هو الذكاء؟", Some("user: مرحبا"), false);
        let value = serde_json::to_value(groq.build_request(&request)).unwrap();

        assert_eq!(value["model"], DEFAULT_GROQ_MODEL);
        assert_eq!(value["max_tokens"], 2000);
        assert_eq!(value["messages"].as_array().unwrap().len(), 2);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(
            value["messages"][0]["content"],
            prompts::system_prompt(Some("user: مرحبا"))
        );
        assert!(value["messages"][0]["content"]
            .as_str()
            .unwrap()
            .contains("📋 السياق الإضافي: user: مرحبا"));
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "ما هو الذكاء؟");

        let advanced = CompletionRequest::new("hi", None, true);
        let value = serde_json::to_value(groq.build_request(&advanced)).unwrap();
        assert_eq!(value["max_tokens"], 4000);
        assert!(!value["messages"][0]["content"]
            .as_str()
            .unwrap()
            .contains("السياق الإضافي"));
    }

    #[test]
    fn test_model_label_follows_configured_model() {
        assert_eq!(provider("k", DEFAULT_GROQ_MODEL).model_label(), "Groq Llama 3.1 70B");
        assert_eq!(
            provider("k", "llama-3.3-70b-versatile").model_label(),
            "Groq llama-3.3-70b-versatile"
        );
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let provider = provider("", DEFAULT_GROQ_MODEL);
        let request = CompletionRequest::new("مرحبا", None, false);
        let err = provider.complete(&request).await.unwrap_err();
        assert!(err.to_string().contains("API key not configured"));
    }
}
