//! Caller identity from the API Gateway Cognito authorizer.

use crate::{Error, Result};

/// User identified by the Cognito authorizer.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// User's Cognito subject (UUID)
    pub user_id: String,
    /// User's email
    pub email: Option<String>,
}

/// Extract user from API Gateway request context.
///
/// When using Cognito authorizer, user info is in requestContext.authorizer.claims
pub fn extract_user_from_context(claims: &serde_json::Value) -> Result<AuthenticatedUser> {
    let sub = claims
        .get("sub")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::Validation("Missing sub claim".to_string()))?;

    let email = claims
        .get("email")
        .or_else(|| claims.get("cognito:username"))
        .and_then(|v| v.as_str())
        .map(String::from);

    Ok(AuthenticatedUser {
        user_id: sub.to_string(),
        email,
    })
}
