//! Collaborator seams for the session manager
//!
//! The manager coordinates external collaborators it does not own: the
//! credential backend, the customer directory, the social-identity and
//! platform-SSO providers, network reachability, and the session store.
//! Each is a trait so the manager stays testable with mocks and so the
//! production wiring is explicit at app startup.

use crate::session::Session;
use async_trait::async_trait;
use commerce_client::{
    ApiError, PasswordLoginResponse, SocialLoginResponse, SsoLoginResponse,
};
use thiserror::Error;

/// The remote credential backend
///
/// `Ok(None)` models the backend answering with nothing at all; the manager
/// folds that into the same failure as a transport error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialBackend: Send + Sync {
    /// Password login call
    async fn login_password(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<Option<PasswordLoginResponse>, ApiError>;

    /// Social-token login call
    async fn login_social(&self, token: &str) -> Result<Option<SocialLoginResponse>, ApiError>;

    /// Platform-SSO login call
    async fn login_sso(
        &self,
        email: &str,
        display_name: &str,
        fallback_username: &str,
    ) -> Result<Option<SsoLoginResponse>, ApiError>;
}

/// The customer directory: full user record by backend id
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    /// Fetch the full customer record for a backend id
    async fn fetch_customer_by_id(
        &self,
        id: u64,
    ) -> Result<Option<commerce_client::Customer>, ApiError>;
}

/// A federated social-identity provider (e.g. Facebook)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SocialIdentityProvider: Send + Sync {
    /// Run the provider's sign-in flow
    ///
    /// `Ok(None)` means the user dismissed the flow without granting a token.
    async fn sign_in(&self) -> Result<Option<String>, String>;

    /// Whether the provider currently holds a valid access token
    async fn is_authenticated(&self) -> bool;

    /// Invalidate the provider-side session
    async fn sign_out(&self);
}

/// Identity payload returned by the platform's native sign-in
#[derive(Debug, Clone, PartialEq)]
pub struct SsoIdentity {
    /// Email address, if the user disclosed it
    pub email: Option<String>,
    /// Given name
    pub given_name: String,
    /// Family name
    pub family_name: String,
}

/// Failure modes of the platform sign-in call
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SsoSignInError {
    /// The user cancelled the sign-in sheet; a silent no-op, not a failure
    #[error("sign-in cancelled")]
    Cancelled,

    /// Any other provider-side failure
    #[error("{0}")]
    Provider(String),
}

/// The platform's single sign-on provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlatformSsoProvider: Send + Sync {
    /// Run the native sign-in flow
    async fn sign_in(&self) -> Result<SsoIdentity, SsoSignInError>;
}

/// Network reachability as reported by the platform
#[cfg_attr(test, mockall::automock)]
pub trait Connectivity: Send + Sync {
    /// Whether the device currently has a network connection
    fn is_connected(&self) -> bool;
}

/// Errors from the session store
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// Underlying persistence failed
    #[error("session store error: {0}")]
    Persist(String),
}

/// The application-owned session store
///
/// Holds at most one session; `persist` replaces any prior session
/// atomically from the caller's perspective.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist the session, replacing any prior one
    async fn persist(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Destroy the stored session
    async fn clear(&self) -> Result<(), SessionStoreError>;

    /// The currently stored session, if any
    async fn current(&self) -> Option<Session>;
}
