//! Chat Lambda - Handles /v1/chat endpoint.
//!
//! Analyzes the user's message, asks Groq for a reply (falling back to Gemini,
//! then to a canned reply) and returns the reply with its analysis.

use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use shared::http::{chat_response, method_not_allowed};
use shared::{
    extract_user_from_context, resolve_provider_keys_or_env, AuthenticatedUser, ChatService, Config,
    GeminiProvider, GroqProvider, ResponseGenerator,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Application state shared across requests.
struct AppState {
    chat_service: ChatService,
}

impl AppState {
    async fn new() -> Self {
        let config = resolve_provider_keys_or_env(Config::from_env()).await;

        if config.groq_api_key.is_empty() {
            warn!("GROQ_API_KEY not set, primary provider will be skipped");
        }
        if config.gemini_api_key.is_empty() {
            warn!("GEMINI_API_KEY not set, secondary provider will be skipped");
        }

        let http_client = reqwest::Client::new();
        let primary = GroqProvider::new(
            http_client.clone(),
            config.groq_api_key,
            config.groq_base_url,
            config.groq_model,
        );
        let secondary = GeminiProvider::new(
            http_client,
            config.gemini_api_key,
            config.gemini_base_url,
            config.gemini_model,
        );

        info!("Chat service initialized");

        Self {
            chat_service: ChatService::new(ResponseGenerator::new(
                Box::new(primary),
                Box::new(secondary),
            )),
        }
    }
}

/// Caller identified by the Cognito authorizer, if the route has one.
fn authorized_user(event: &Request) -> Option<AuthenticatedUser> {
    let ctx = event.request_context_ref()?;
    let claims = ctx.authorizer()?.fields.get("claims")?;
    match extract_user_from_context(claims) {
        Ok(user) => Some(user),
        Err(e) => {
            warn!("Ignoring authorizer claims: {}", e);
            None
        }
    }
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    if event.method() != "POST" {
        return method_not_allowed("POST");
    }

    let user = authorized_user(&event);
    let reply = state
        .chat_service
        .respond(event.body().as_ref(), user.as_ref())
        .await;

    chat_response(&reply)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new().await);

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
