//! AWS Secrets Manager integration.

use aws_sdk_secretsmanager::Client as SecretsClient;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;
use tokio::sync::RwLock;
use tracing::warn;

use crate::{Config, Error, Result};

/// Cached secrets with lazy initialization.
static SECRETS_CACHE: OnceLock<RwLock<HashMap<String, String>>> = OnceLock::new();

fn get_cache() -> &'static RwLock<HashMap<String, String>> {
    SECRETS_CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Provider API keys stored as a JSON secret.
#[derive(Debug, Deserialize)]
pub struct ProviderCredentials {
    #[serde(default)]
    pub groq_api_key: String,
    #[serde(default)]
    pub gemini_api_key: String,
}

/// Get a secret value from Secrets Manager with caching.
pub async fn get_secret(client: &SecretsClient, secret_arn: &str) -> Result<String> {
    // Check cache first
    {
        let cache = get_cache().read().await;
        if let Some(value) = cache.get(secret_arn) {
            return Ok(value.clone());
        }
    }

    let response = client
        .get_secret_value()
        .secret_id(secret_arn)
        .send()
        .await
        .map_err(|e| Error::Aws(format!("Failed to get secret: {}", e)))?;

    let secret_string = response
        .secret_string()
        .ok_or_else(|| Error::Aws("Secret has no string value".to_string()))?
        .to_string();

    {
        let mut cache = get_cache().write().await;
        cache.insert(secret_arn.to_string(), secret_string.clone());
    }

    Ok(secret_string)
}

/// Get provider credentials from Secrets Manager.
pub async fn get_provider_credentials(
    client: &SecretsClient,
    secret_arn: &str,
) -> Result<ProviderCredentials> {
    let secret_string = get_secret(client, secret_arn).await?;
    parse_provider_credentials(&secret_string)
}

fn parse_provider_credentials(secret_string: &str) -> Result<ProviderCredentials> {
    serde_json::from_str(secret_string)
        .map_err(|e| Error::Aws(format!("Failed to parse provider credentials: {}", e)))
}

/// Fill the config's API keys from Secrets Manager when a secret ARN is set.
///
/// Keys present in the secret replace the environment values; empty ones
/// leave the environment values in place.
pub async fn resolve_provider_keys(mut config: Config) -> Result<Config> {
    let Some(secret_arn) = config.provider_secret_arn.clone() else {
        return Ok(config);
    };

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = SecretsClient::new(&aws_config);
    let credentials = get_provider_credentials(&client, &secret_arn).await?;
    apply_credentials(&mut config, credentials);

    Ok(config)
}

fn apply_credentials(config: &mut Config, credentials: ProviderCredentials) {
    if !credentials.groq_api_key.is_empty() {
        config.groq_api_key = credentials.groq_api_key;
    }
    if !credentials.gemini_api_key.is_empty() {
        config.gemini_api_key = credentials.gemini_api_key;
    }
}

/// Like [`resolve_provider_keys`], but falls back to the environment keys
/// when the secret cannot be loaded, so the chat endpoint can still answer
/// from its later fallback tiers.
pub async fn resolve_provider_keys_or_env(config: Config) -> Config {
    let env_config = config.clone();
    keep_env_on_error(env_config, resolve_provider_keys(config).await)
}

fn keep_env_on_error(env_config: Config, resolved: Result<Config>) -> Config {
    match resolved {
        Ok(config) => config,
        Err(e) => {
            warn!("Using provider keys from environment: {}", e);
            env_config
        }
    }
}
