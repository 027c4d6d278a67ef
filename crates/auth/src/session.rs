//! Authenticated session data
//!
//! A `Session` is the durable result of a successful login attempt. The
//! session manager composes it and returns it; the application's session
//! store owns it from then on, replacing it in place on a newer success and
//! destroying it on logout. At most one session exists at a time.

use crate::credentials::SocialProvider;
use chrono::{DateTime, Utc};
use commerce_client::Customer;
use serde::{Deserialize, Serialize};

/// Which credential source produced a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthProvider {
    /// Username/password against the commerce backend
    Password,
    /// Federated social login
    Social(SocialProvider),
    /// Platform single sign-on
    PlatformSso,
}

/// The authenticated state for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Full customer record fetched from the directory
    pub customer: Customer,
    /// Authentication token echoed by the backend
    pub auth_token: String,
    /// Which credential source produced this session
    pub provider: AuthProvider,
    /// When the session was created
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Compose a new session from a fetched customer and echoed token
    pub fn new(customer: Customer, auth_token: impl Into<String>, provider: AuthProvider) -> Self {
        Self {
            customer,
            auth_token: auth_token.into(),
            provider,
            created_at: Utc::now(),
        }
    }

    /// Whether this session came from a social-identity provider
    pub fn is_social(&self) -> bool {
        matches!(self.provider, AuthProvider::Social(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_new() {
        let mut customer = Customer::new(42);
        customer.name = Some("Alice".to_string());

        let session = Session::new(customer.clone(), "tok_abc", AuthProvider::Password);

        assert_eq!(session.customer, customer);
        assert_eq!(session.auth_token, "tok_abc");
        assert_eq!(session.provider, AuthProvider::Password);
        assert!(!session.is_social());
    }

    #[test]
    fn test_session_is_social() {
        let session = Session::new(
            Customer::new(7),
            "tok_fb",
            AuthProvider::Social(SocialProvider::Facebook),
        );
        assert!(session.is_social());
    }

    #[test]
    fn test_session_serialization_round_trip() {
        let session = Session::new(Customer::new(9), "tok_sso", AuthProvider::PlatformSso);

        let json = serde_json::to_string(&session).unwrap();
        let deserialized: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(session, deserialized);
    }
}
