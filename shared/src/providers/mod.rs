//! Hosted language-model providers.

use async_trait::async_trait;

use crate::Result;

pub mod gemini;
pub mod groq;

pub use gemini::GeminiProvider;
pub use groq::GroqProvider;

/// Sampling temperature used for every completion.
pub const TEMPERATURE: f32 = 0.7;

/// Token budget for anonymous callers.
pub const STANDARD_MAX_TOKENS: u32 = 2000;
/// Token budget for signed-in callers.
pub const ADVANCED_MAX_TOKENS: u32 = 4000;

/// A single completion request, independent of any provider's wire format.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub message: String,
    pub context: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(message: &str, context: Option<&str>, use_advanced_mode: bool) -> Self {
        Self {
            message: message.to_string(),
            context: context.map(String::from),
            max_tokens: if use_advanced_mode {
                ADVANCED_MAX_TOKENS
            } else {
                STANDARD_MAX_TOKENS
            },
            temperature: TEMPERATURE,
        }
    }
}

/// A hosted completion API.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short provider name used in logs and errors (e.g. "groq").
    fn name(&self) -> &str;

    /// Human-readable model name reported to the client.
    fn model_label(&self) -> &str;

    /// Produce reply text for the request.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
