//! Google Gemini client (`generateContent`).

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use super::{CompletionProvider, CompletionRequest};
use crate::config::DEFAULT_GEMINI_MODEL;
use crate::{prompts, Error, Result};

const PROVIDER: &str = "gemini";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Secondary provider: Google Gemini.
pub struct GeminiProvider {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
    model: String,
    model_label: String,
}

impl GeminiProvider {
    pub fn new(http_client: HttpClient, api_key: String, base_url: String, model: String) -> Self {
        Self {
            http_client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model_label: model_label(&model),
            model,
        }
    }
}

/// Client-facing name for a Gemini model id.
fn model_label(model: &str) -> String {
    if model == DEFAULT_GEMINI_MODEL {
        "Google Gemini Pro".to_string()
    } else {
        format!("Google {}", model)
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
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

        let body = build_request(request);
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", &self.api_key)])
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

        parse_reply(&text)
    }
}

fn build_request(request: &CompletionRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: Some(prompts::compact_prompt(
                    request.context.as_deref(),
                    &request.message,
                )),
            }],
        }],
        generation_config: GenerationConfig {
            max_output_tokens: request.max_tokens,
            temperature: request.temperature,
        },
    }
}

/// Extract the first candidate's text.
///
/// A well-formed reply without text yields the fixed apology rather than an
/// error; only an unparseable body is a failure.
fn parse_reply(body: &str) -> Result<String> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| Error::provider(PROVIDER, format!("Failed to parse response: {}", e)))?;

    let text = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| prompts::EMPTY_REPLY.to_string());

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_GEMINI_BASE_URL;

    #[test]
    fn test_parse_reply() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"الجواب"}],"role":"model"}}]}"#;
        assert_eq!(parse_reply(body).unwrap(), "الجواب");
    }

    #[test]
    fn test_reply_without_candidates_is_apology() {
        assert_eq!(parse_reply(r#"{"candidates":[]}"#).unwrap(), prompts::EMPTY_REPLY);
        assert_eq!(parse_reply("{}").unwrap(), prompts::EMPTY_REPLY);
        assert_eq!(
            parse_reply(r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#).unwrap(),
            prompts::EMPTY_REPLY
        );
    }

    #[test]
    fn test_unparseable_reply_is_error() {
        assert!(parse_reply("upstream connect error").is_err());
    }

    #[test]
    fn test_model_label_follows_configured_model() {
        let gemini = |model: &str| {
            GeminiProvider::new(
                HttpClient::new(),
                "key".to_string(),
                DEFAULT_GEMINI_BASE_URL.to_string(),
                model.to_string(),
            )
        };
        assert_eq!(gemini(DEFAULT_GEMINI_MODEL).model_label(), "Google Gemini Pro");
        assert_eq!(gemini("gemini-1.5-flash").model_label(), "Google gemini-1.5-flash");
    }

    #[test]
    fn test_request_shape() {
        let request = CompletionRequest::new("ما هو الذكاء؟", Some("user: مرحبا"), true);
        let value = serde_json::to_value(build_request(&request)).unwrap();

        let text = value["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.contains("user: مرحبا"));
        assert!(text.ends_with("السؤال: ما هو الذكاء؟"));
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 4000);
    }
}
