//! Shared library for the 3RB chat Lambda functions.
//!
//! This crate holds the chat pipeline (intent analysis, provider fallback,
//! canned replies) plus the configuration, secrets and HTTP helpers the
//! Lambda binaries share.

pub mod auth;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod generator;
pub mod http;
pub mod intent;
pub mod models;
pub mod prompts;
pub mod providers;
pub mod secrets;

pub use auth::{extract_user_from_context, AuthenticatedUser};
pub use catalog::{find_model, list_models, ModelInfo};
pub use chat::{ChatReply, ChatService};
pub use config::Config;
pub use error::{Error, Result};
pub use generator::ResponseGenerator;
pub use intent::analyze_message;
pub use models::{ChatRequest, ChatResponse, Complexity, Intent, IntentAnalysis};
pub use providers::{CompletionProvider, CompletionRequest, GeminiProvider, GroqProvider};
pub use secrets::{
    get_provider_credentials, get_secret, resolve_provider_keys, resolve_provider_keys_or_env,
    ProviderCredentials,
};
