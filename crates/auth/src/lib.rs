//! Authentication session layer for the storefront app
//!
//! This crate owns the login state machine: it normalizes the three
//! credential sources (password, social-provider token, platform SSO) into
//! one outcome type, classifies backend responses uniformly, and hands the
//! composed session back to the caller for persistence.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod credentials;
pub mod manager;
pub mod messages;
pub mod providers;
pub mod session;

pub use credentials::{Credentials, SocialProvider};
pub use manager::{AttemptResult, AuthState, SessionManager};
pub use providers::{
    Connectivity, CredentialBackend, CustomerDirectory, PlatformSsoProvider, SessionStore,
    SessionStoreError, SocialIdentityProvider, SsoIdentity, SsoSignInError,
};
pub use session::{AuthProvider, Session};
