//! Login endpoints and wire types
//!
//! The backend exposes three login calls (password, social token, and
//! platform SSO) that all answer with loosely shaped JSON: a payload, a
//! payload carrying `error`/`message`, or nothing at all. The types here keep
//! those shapes intact; deciding what they mean is left to the session layer.

use crate::client::{ApiClient, ApiError};
use serde::{Deserialize, Serialize};

/// A login response payload that may carry an explicit backend error
///
/// All three login responses share the `error`/`message` convention; this
/// trait gives the session layer one classification point for the three.
pub trait ResponseEnvelope {
    /// The backend's explicit error or message field, if present
    fn error_message(&self) -> Option<&str>;
}

/// Request body for the password login call
#[derive(Debug, Clone, Serialize)]
pub struct PasswordLoginRequest {
    /// User identifier (username or email)
    pub username: String,
    /// User password
    pub password: String,
}

/// Embedded user block in a password login response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginUser {
    /// Backend user id
    pub id: u64,
}

/// Response of the password login call
///
/// Shape: `{ user: { id, ... }, cookie }`, or `{ error | message }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PasswordLoginResponse {
    /// Authenticated user block (absent on failure)
    #[serde(default)]
    pub user: Option<LoginUser>,
    /// Authentication token echoed by the backend
    #[serde(default)]
    pub cookie: Option<String>,
    /// Explicit error field
    #[serde(default)]
    pub error: Option<String>,
    /// Explicit message field
    #[serde(default)]
    pub message: Option<String>,
}

impl ResponseEnvelope for PasswordLoginResponse {
    fn error_message(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

/// Request body for the social login call
#[derive(Debug, Clone, Serialize)]
pub struct SocialLoginRequest {
    /// Access token obtained from the social-identity provider
    pub access_token: String,
}

/// Embedded user block in a social login response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLoginUser {
    /// Profile picture URL from the social provider
    #[serde(default)]
    pub picture: Option<String>,
}

/// Response of the social login call
///
/// Shape: `{ wp_user_id, user: { picture }, cookie }`, or `{ error | message }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLoginResponse {
    /// Backend user id for the linked account
    #[serde(default)]
    pub wp_user_id: Option<u64>,
    /// Social profile block
    #[serde(default)]
    pub user: Option<SocialLoginUser>,
    /// Authentication token echoed by the backend
    #[serde(default)]
    pub cookie: Option<String>,
    /// Explicit error field
    #[serde(default)]
    pub error: Option<String>,
    /// Explicit message field
    #[serde(default)]
    pub message: Option<String>,
}

impl ResponseEnvelope for SocialLoginResponse {
    fn error_message(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

/// Request body for the platform SSO login call
#[derive(Debug, Clone, Serialize)]
pub struct SsoLoginRequest {
    /// Email address attested by the platform
    pub email: String,
    /// Composed display name ("Given Family")
    pub display_name: String,
    /// Fallback username derived from the email's local part
    pub user_name: String,
}

/// Response of the platform SSO login call
///
/// Shape: `{ wp_user_id, cookie, error? }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SsoLoginResponse {
    /// Backend user id for the linked account
    #[serde(default)]
    pub wp_user_id: Option<u64>,
    /// Authentication token echoed by the backend
    #[serde(default)]
    pub cookie: Option<String>,
    /// Explicit error field
    #[serde(default)]
    pub error: Option<String>,
}

impl ResponseEnvelope for SsoLoginResponse {
    fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl ApiClient {
    /// Login with username/password
    ///
    /// The identifier is submitted exactly as given; trimming is the session
    /// layer's responsibility.
    pub async fn login_password(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<Option<PasswordLoginResponse>, ApiError> {
        let request = PasswordLoginRequest {
            username: identifier.to_string(),
            password: secret.to_string(),
        };
        self.post("api/auth/login", &request).await
    }

    /// Login with a social-identity provider access token
    pub async fn login_social(
        &self,
        token: &str,
    ) -> Result<Option<SocialLoginResponse>, ApiError> {
        let request = SocialLoginRequest {
            access_token: token.to_string(),
        };
        self.post("api/auth/social-login", &request).await
    }

    /// Login with a platform SSO identity
    pub async fn login_sso(
        &self,
        email: &str,
        display_name: &str,
        fallback_username: &str,
    ) -> Result<Option<SsoLoginResponse>, ApiError> {
        let request = SsoLoginRequest {
            email: email.to_string(),
            display_name: display_name.to_string(),
            user_name: fallback_username.to_string(),
        };
        self.post("api/auth/sso-login", &request).await
    }
}
