//! Shared data models.

use serde::Serialize;
use validator::Validate;

/// Validated chat input handed to the response generator.
#[derive(Debug, Clone, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
    pub context: Option<String>,
    /// Signed-in callers get the larger token budget.
    pub use_advanced_mode: bool,
    /// Model id picked in the client; informational, routing is fixed.
    pub requested_model: Option<String>,
}

/// Reply produced by one of the fallback tiers.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatResponse {
    pub content: String,
    pub thinking_trace: Option<String>,
    pub model_name: String,
    pub token_count: usize,
}

/// Successful `/v1/chat` payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSuccessBody {
    pub success: bool,
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking: Option<String>,
    pub model: String,
    pub tokens: usize,
    pub analysis: IntentAnalysis,
    pub is_advanced: bool,
}

/// Failed `/v1/chat` payload.
#[derive(Debug, Serialize)]
pub struct ChatErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

/// What the message is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Question,
    Programming,
    Philosophy,
    HelpRequest,
    #[serde(rename = "general_question")]
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

/// Keyword-based classification of a user message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentAnalysis {
    pub intent: Intent,
    pub complexity: Complexity,
    pub topics: Vec<String>,
    pub language: String,
}
