//! Configuration management for Lambda functions.

use std::env;

/// Default Groq model used as the primary provider.
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.1-70b-versatile";
/// Default Gemini model used as the secondary provider.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";
/// Groq's OpenAI-compatible endpoint.
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
/// Google Generative Language endpoint.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Groq API key (empty when absent)
    pub groq_api_key: String,
    /// Gemini API key (empty when absent)
    pub gemini_api_key: String,
    /// ARN of a secret holding both provider keys; overrides the plain env keys
    pub provider_secret_arn: Option<String>,
    pub groq_model: String,
    pub gemini_model: String,
    pub groq_base_url: String,
    pub gemini_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Missing API keys are not an error: a provider without a key fails at
    /// call time and the generator moves on to the next fallback tier.
    pub fn from_env() -> Self {
        Self {
            groq_api_key: env::var("GROQ_API_KEY").unwrap_or_default(),
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            provider_secret_arn: env::var("PROVIDER_SECRET_ARN")
                .ok()
                .filter(|arn| !arn.is_empty()),
            groq_model: env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_GROQ_MODEL.to_string()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            groq_base_url: env::var("GROQ_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GROQ_BASE_URL.to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            groq_api_key: String::new(),
            gemini_api_key: String::new(),
            provider_secret_arn: None,
            groq_model: DEFAULT_GROQ_MODEL.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            groq_base_url: DEFAULT_GROQ_BASE_URL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }
}
