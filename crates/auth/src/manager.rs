//! The session manager
//!
//! This module owns the login state machine. It turns one `Credentials`
//! value into one `AttemptResult`, delegating to the credential backend for
//! the variant-specific call and to the customer directory for the follow-up
//! record lookup, with a single classification policy for the backend's
//! loosely shaped answers.
//!
//! The manager performs no persistence itself: on success it hands the
//! composed [`Session`] to the caller, which updates the session store
//! (replace in place). Attempts are not cancellable and the caller must
//! serialize them, e.g. by disabling the login control while one is in
//! flight.

use crate::credentials::{Credentials, SocialProvider};
use crate::messages;
use crate::providers::{
    Connectivity, CredentialBackend, CustomerDirectory, PlatformSsoProvider, SessionStore,
    SessionStoreError, SocialIdentityProvider, SsoSignInError,
};
use crate::session::{AuthProvider, Session};
use commerce_client::{ApiError, Customer, ResponseEnvelope};
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of one login attempt
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptResult {
    /// Authentication succeeded; the caller persists the session
    Success(Session),
    /// Authentication failed with a displayable reason
    Failure(String),
    /// No network; nothing was contacted
    NetworkUnavailable,
    /// The user backed out of a provider flow; a silent no-op
    Cancelled,
}

/// Session manager state
///
/// `Authenticating` is terminal-transient: it is entered only by
/// `attempt_login` and always resolves before the call returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// No attempt in flight, no session established by this manager
    Idle,
    /// An attempt is in flight
    Authenticating,
    /// The last attempt succeeded
    Authenticated,
    /// The last attempt failed
    Failed,
}

/// Coordinates credential-entry events into a resolved session or a
/// reported failure
///
/// The manager holds its collaborators behind trait objects so the wiring is
/// explicit at startup and mockable in tests.
///
/// # Example
///
/// ```rust,no_run
/// use auth::{Credentials, SessionManager};
/// use std::sync::Arc;
///
/// # async fn example(
/// #     backend: Arc<dyn auth::CredentialBackend>,
/// #     directory: Arc<dyn auth::CustomerDirectory>,
/// #     connectivity: Arc<dyn auth::Connectivity>,
/// # ) {
/// let mut manager = SessionManager::new(backend, directory, connectivity);
///
/// let result = manager
///     .attempt_login(Credentials::Password {
///         identifier: "alice@example.com".to_string(),
///         secret: "hunter2".to_string(),
///     })
///     .await;
/// # }
/// ```
pub struct SessionManager {
    backend: Arc<dyn CredentialBackend>,
    directory: Arc<dyn CustomerDirectory>,
    connectivity: Arc<dyn Connectivity>,
    state: AuthState,
}

impl SessionManager {
    /// Create a new session manager with its collaborators
    pub fn new(
        backend: Arc<dyn CredentialBackend>,
        directory: Arc<dyn CustomerDirectory>,
        connectivity: Arc<dyn Connectivity>,
    ) -> Self {
        Self {
            backend,
            directory,
            connectivity,
            state: AuthState::Idle,
        }
    }

    /// Current state of the manager
    pub fn state(&self) -> AuthState {
        self.state
    }

    /// Run one login attempt
    ///
    /// Fail-fast: with no network this returns `NetworkUnavailable`
    /// immediately, without contacting any backend. Otherwise the attempt
    /// dispatches on the credential variant and always resolves to exactly
    /// one outcome before returning.
    pub async fn attempt_login(&mut self, credentials: Credentials) -> AttemptResult {
        if !self.connectivity.is_connected() {
            debug!("login attempt refused, no network");
            return AttemptResult::NetworkUnavailable;
        }

        let credentials = match credentials.normalized() {
            Ok(credentials) => credentials,
            Err(err) => {
                self.state = AuthState::Failed;
                return AttemptResult::Failure(err.to_string());
            }
        };

        self.state = AuthState::Authenticating;

        let outcome = match &credentials {
            Credentials::Password { identifier, secret } => {
                self.password_login(identifier, secret).await
            }
            Credentials::Social { provider, token } => self.social_login(*provider, token).await,
            Credentials::PlatformSso { email, .. } => {
                // normalized() guarantees these helpers resolve for this variant
                let display_name = credentials.sso_display_name().unwrap_or_default();
                let fallback = credentials.sso_fallback_username().unwrap_or_default();
                self.sso_login(email, &display_name, &fallback).await
            }
        };

        self.state = match &outcome {
            AttemptResult::Success(_) => AuthState::Authenticated,
            AttemptResult::Failure(_) => AuthState::Failed,
            AttemptResult::NetworkUnavailable | AttemptResult::Cancelled => AuthState::Idle,
        };

        if let AttemptResult::Failure(reason) = &outcome {
            warn!(%reason, "login attempt failed");
        }

        outcome
    }

    /// Full social login flow: provider sign-in first, then the backend
    ///
    /// The provider flow completes before the backend is contacted. A
    /// dismissed sign-in sheet (no token) resolves as `Cancelled`.
    pub async fn login_with_social_provider(
        &mut self,
        provider: &dyn SocialIdentityProvider,
        kind: SocialProvider,
    ) -> AttemptResult {
        if !self.connectivity.is_connected() {
            return AttemptResult::NetworkUnavailable;
        }

        match provider.sign_in().await {
            Ok(Some(token)) => {
                self.attempt_login(Credentials::Social {
                    provider: kind,
                    token,
                })
                .await
            }
            Ok(None) => {
                debug!(provider = %kind, "social sign-in dismissed");
                self.state = AuthState::Idle;
                AttemptResult::Cancelled
            }
            Err(err) => {
                warn!(provider = %kind, error = %err, "social sign-in failed");
                self.state = AuthState::Idle;
                AttemptResult::Cancelled
            }
        }
    }

    /// Full platform-SSO flow: native sign-in first, then the backend
    ///
    /// A provider cancellation is swallowed silently; every other provider
    /// failure surfaces as a `Failure`.
    pub async fn login_with_platform_sso(
        &mut self,
        provider: &dyn PlatformSsoProvider,
    ) -> AttemptResult {
        if !self.connectivity.is_connected() {
            return AttemptResult::NetworkUnavailable;
        }

        match provider.sign_in().await {
            Ok(identity) => {
                let Some(email) = identity.email else {
                    self.state = AuthState::Failed;
                    return AttemptResult::Failure(messages::SSO_EMAIL_MISSING.to_string());
                };
                self.attempt_login(Credentials::PlatformSso {
                    email,
                    given_name: identity.given_name,
                    family_name: identity.family_name,
                })
                .await
            }
            Err(SsoSignInError::Cancelled) => {
                debug!("platform sign-in cancelled");
                self.state = AuthState::Idle;
                AttemptResult::Cancelled
            }
            Err(SsoSignInError::Provider(message)) => {
                self.state = AuthState::Failed;
                AttemptResult::Failure(message)
            }
        }
    }

    /// Logout: clear the store and reconcile the social provider
    ///
    /// If the discarded session came from a social provider that still holds
    /// a token, the provider session is invalidated too.
    pub async fn logout(
        &mut self,
        store: &dyn SessionStore,
        social: &dyn SocialIdentityProvider,
    ) -> Result<(), SessionStoreError> {
        let was_social = store
            .current()
            .await
            .map(|session| session.is_social())
            .unwrap_or(false);

        store.clear().await?;

        if was_social && social.is_authenticated().await {
            social.sign_out().await;
        }

        self.state = AuthState::Idle;
        Ok(())
    }

    async fn password_login(&self, identifier: &str, secret: &str) -> AttemptResult {
        let response = match classify(self.backend.login_password(identifier, secret).await) {
            Ok(response) => response,
            Err(reason) => return AttemptResult::Failure(reason),
        };

        let Some(user) = response.user else {
            return AttemptResult::Failure(messages::CANNOT_LOGIN.to_string());
        };

        let mut customer = match self.lookup_customer(user.id).await {
            Ok(customer) => customer,
            Err(reason) => return AttemptResult::Failure(reason),
        };
        // Keep the identifier the user actually logged in with
        customer.username = Some(identifier.to_string());

        let token = response.cookie.unwrap_or_default();
        AttemptResult::Success(Session::new(customer, token, AuthProvider::Password))
    }

    async fn social_login(&self, kind: SocialProvider, token: &str) -> AttemptResult {
        let response = match classify(self.backend.login_social(token).await) {
            Ok(response) => response,
            Err(reason) => return AttemptResult::Failure(reason),
        };

        let Some(user_id) = response.wp_user_id else {
            return AttemptResult::Failure(messages::CANNOT_LOGIN.to_string());
        };

        let mut customer = match self.lookup_customer(user_id).await {
            Ok(customer) => customer,
            Err(reason) => return AttemptResult::Failure(reason),
        };
        if let Some(picture) = response.user.and_then(|user| user.picture) {
            customer.avatar_url = Some(picture);
        }

        let token = response.cookie.unwrap_or_default();
        AttemptResult::Success(Session::new(
            customer,
            token,
            AuthProvider::Social(kind),
        ))
    }

    async fn sso_login(
        &self,
        email: &str,
        display_name: &str,
        fallback_username: &str,
    ) -> AttemptResult {
        let response = match classify(
            self.backend
                .login_sso(email, display_name, fallback_username)
                .await,
        ) {
            Ok(response) => response,
            Err(reason) => return AttemptResult::Failure(reason),
        };

        let Some(user_id) = response.wp_user_id else {
            return AttemptResult::Failure(messages::CANNOT_LOGIN.to_string());
        };

        let customer = match self.lookup_customer(user_id).await {
            Ok(customer) => customer,
            Err(reason) => return AttemptResult::Failure(reason),
        };

        let token = response.cookie.unwrap_or_default();
        AttemptResult::Success(Session::new(customer, token, AuthProvider::PlatformSso))
    }

    async fn lookup_customer(&self, id: u64) -> Result<Customer, String> {
        match self.directory.fetch_customer_by_id(id).await {
            Ok(Some(customer)) => Ok(customer),
            Ok(None) => Err(messages::DATA_ERROR.to_string()),
            Err(err) => {
                warn!(customer_id = id, error = %err, "customer lookup failed");
                Err(messages::DATA_ERROR.to_string())
            }
        }
    }
}

/// Uniform classification of a backend login response
///
/// Applied identically across all three credential variants:
/// - transport failure or missing payload folds to `data-error`
///   (unreachable and malformed are deliberately indistinguishable)
/// - an explicit `error`/`message` field is surfaced verbatim
/// - anything else is a usable payload
fn classify<T: ResponseEnvelope>(response: Result<Option<T>, ApiError>) -> Result<T, String> {
    match response {
        Err(err) if err.is_network_error() => {
            warn!(status = err.status(), code = err.code(), "backend call failed");
            Err(messages::DATA_ERROR.to_string())
        }
        Err(err) => Err(err.message().to_string()),
        Ok(None) => Err(messages::DATA_ERROR.to_string()),
        Ok(Some(payload)) => match payload.error_message() {
            Some(message) => Err(message.to_string()),
            None => Ok(payload),
        },
    }
}
