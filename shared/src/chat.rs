//! The `/v1/chat` request pipeline, independent of the Lambda runtime.

use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::auth::AuthenticatedUser;
use crate::catalog::find_model;
use crate::generator::ResponseGenerator;
use crate::intent::analyze_message;
use crate::models::{ChatErrorBody, ChatRequest, ChatSuccessBody};
use crate::{prompts, Error, Result};

/// Outcome of a chat request, ready to be serialized.
#[derive(Debug)]
pub enum ChatReply {
    Ok(ChatSuccessBody),
    Invalid(ChatErrorBody),
    Failed(ChatErrorBody),
}

impl ChatReply {
    pub fn status_code(&self) -> u16 {
        match self {
            ChatReply::Ok(_) => 200,
            ChatReply::Invalid(_) => 400,
            ChatReply::Failed(_) => 500,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        let body = match self {
            ChatReply::Ok(body) => serde_json::to_string(body)?,
            ChatReply::Invalid(body) | ChatReply::Failed(body) => serde_json::to_string(body)?,
        };
        Ok(body)
    }
}

pub struct ChatService {
    generator: ResponseGenerator,
}

impl ChatService {
    pub fn new(generator: ResponseGenerator) -> Self {
        Self { generator }
    }

    /// Handle a raw request body.
    ///
    /// `user` is the caller identified by the authorizer, if any; a `userId`
    /// in the body identifies the caller as well.
    pub async fn respond(&self, body: &[u8], user: Option<&AuthenticatedUser>) -> ChatReply {
        let request_id = Uuid::new_v4();

        let request = match parse_request(body, user) {
            Ok(request) => request,
            Err(Error::Validation(reason)) => {
                warn!(%request_id, "Rejected chat request: {}", reason);
                return ChatReply::Invalid(ChatErrorBody {
                    error: prompts::INVALID_MESSAGE.to_string(),
                    fallback: None,
                });
            }
            Err(e) => {
                error!(%request_id, status = e.status_code(), "Chat request failed: {}", e);
                return ChatReply::Failed(ChatErrorBody {
                    error: prompts::PROCESSING_ERROR.to_string(),
                    fallback: Some(prompts::PROCESSING_FALLBACK.to_string()),
                });
            }
        };

        let preview = prompts::text_prefix(&request.message, 50);
        info!(%request_id, advanced = request.use_advanced_mode, "New chat request: {}", preview);

        if let Some(model_id) = request.requested_model.as_deref() {
            match find_model(model_id) {
                Some(model) => info!(%request_id, model = model.name, "Client selected model"),
                None => warn!(%request_id, model = model_id, "Client selected unknown model"),
            }
        }

        let analysis = analyze_message(&request.message);
        let response = self
            .generator
            .generate(
                &request.message,
                request.context.as_deref(),
                request.use_advanced_mode,
            )
            .await;

        info!(%request_id, model = %response.model_name, "Chat reply ready");

        ChatReply::Ok(ChatSuccessBody {
            success: true,
            response: response.content,
            thinking: response.thinking_trace,
            model: response.model_name,
            tokens: response.token_count,
            analysis,
            is_advanced: request.use_advanced_mode,
        })
    }
}

/// Turn a raw body into a validated request.
///
/// Returns `Error::Validation` for a bad `message` and `Error::Serialization`
/// or `Error::Internal` when the body itself is unusable.
fn parse_request(body: &[u8], user: Option<&AuthenticatedUser>) -> Result<ChatRequest> {
    let payload: Value = serde_json::from_slice(body)?;
    if payload.is_null() {
        return Err(Error::Internal("Request body is null".to_string()));
    }

    let message = match payload.get("message") {
        Some(Value::String(message)) => message.clone(),
        Some(_) => return Err(Error::Validation("message is not a string".to_string())),
        None => return Err(Error::Validation("message is missing".to_string())),
    };

    let context = payload
        .get("context")
        .and_then(Value::as_str)
        .filter(|context| !context.is_empty())
        .map(String::from);

    let body_user = payload.get("userId").is_some_and(is_truthy);

    let requested_model = payload
        .get("model")
        .and_then(Value::as_str)
        .map(String::from);

    let request = ChatRequest {
        message,
        context,
        use_advanced_mode: user.is_some() || body_user,
        requested_model,
    };
    request
        .validate()
        .map_err(|e| Error::Validation(e.to_string()))?;

    Ok(request)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
