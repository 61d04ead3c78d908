//! Reply generation with provider fallback.
//!
//! Tiers are consulted in order: primary provider, secondary provider, then a
//! canned reply keyed by the message's keywords. Generation never fails.

use rand::Rng;
use tracing::{info, warn};

use crate::models::ChatResponse;
use crate::prompts::{self, FallbackKind};
use crate::providers::{CompletionProvider, CompletionRequest};

/// Model name reported when both providers failed.
pub const FALLBACK_MODEL: &str = "3RB Fallback System";
/// Token count reported for canned replies.
pub const FALLBACK_TOKENS: usize = 500;

pub struct ResponseGenerator {
    primary: Box<dyn CompletionProvider>,
    secondary: Box<dyn CompletionProvider>,
}

impl ResponseGenerator {
    pub fn new(primary: Box<dyn CompletionProvider>, secondary: Box<dyn CompletionProvider>) -> Self {
        Self { primary, secondary }
    }

    /// Generate a reply for `message`, degrading through the fallback tiers.
    pub async fn generate(
        &self,
        message: &str,
        context: Option<&str>,
        use_advanced_mode: bool,
    ) -> ChatResponse {
        let request = CompletionRequest::new(message, context, use_advanced_mode);

        for provider in [&self.primary, &self.secondary] {
            match provider.complete(&request).await {
                Ok(content) => {
                    info!(provider = provider.name(), "Reply generated");
                    return provider_reply(content, provider.model_label(), message);
                }
                Err(e) => warn!(provider = provider.name(), "Provider failed: {}", e),
            }
        }

        info!("Both providers failed, using canned reply");
        fallback_reply(message)
    }
}

fn provider_reply(content: String, model_label: &str, message: &str) -> ChatResponse {
    let token_count = prompts::text_length(&content);
    ChatResponse {
        content,
        thinking_trace: Some(random_thinking_trace(message)),
        model_name: model_label.to_string(),
        token_count,
    }
}

/// Canned reply for when every provider failed.
pub fn fallback_reply(message: &str) -> ChatResponse {
    ChatResponse {
        content: FallbackKind::classify(message).reply().to_string(),
        thinking_trace: Some(random_thinking_trace(message)),
        model_name: FALLBACK_MODEL.to_string(),
        token_count: FALLBACK_TOKENS,
    }
}

// Cosmetic only; unrelated to what the model actually did.
fn random_thinking_trace(message: &str) -> String {
    let index = rand::thread_rng().gen_range(0..prompts::THINKING_TEMPLATE_COUNT);
    prompts::thinking_trace(index, message)
}
