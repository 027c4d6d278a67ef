//! Credential variants for one login attempt
//!
//! A `Credentials` value is transient: it exists for the duration of a single
//! `attempt_login` call and is owned by it. The three variants replace the
//! original parallel duck-typed code paths with one tagged union.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for credential input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// Identifier empty after trimming
    #[error("{}", crate::messages::EMPTY_CREDENTIALS)]
    EmptyIdentifier,

    /// Secret empty
    #[error("{}", crate::messages::EMPTY_CREDENTIALS)]
    EmptySecret,
}

/// A social-identity provider the app can federate with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocialProvider {
    /// Facebook login
    Facebook,
    /// Google login
    Google,
}

impl std::fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SocialProvider::Facebook => write!(f, "facebook"),
            SocialProvider::Google => write!(f, "google"),
        }
    }
}

/// Credentials for one login attempt
///
/// Exactly one of the three sources; owned by the attempt that created it.
#[derive(Debug, Clone, PartialEq)]
pub enum Credentials {
    /// Username/email plus password
    Password {
        /// User identifier (username or email)
        identifier: String,
        /// Password
        secret: String,
    },
    /// Opaque access token from a social-identity provider
    Social {
        /// Which provider issued the token
        provider: SocialProvider,
        /// The provider's access token
        token: String,
    },
    /// Identity attested by the platform's single sign-on
    PlatformSso {
        /// Email address from the platform
        email: String,
        /// Given name from the platform
        given_name: String,
        /// Family name from the platform
        family_name: String,
    },
}

impl Credentials {
    /// Normalize and validate the credentials for submission
    ///
    /// The password identifier is trimmed of surrounding whitespace; the
    /// trimmed identifier and the secret must both be non-empty. The other
    /// variants pass through unchanged.
    pub fn normalized(self) -> Result<Self, CredentialError> {
        match self {
            Credentials::Password { identifier, secret } => {
                let identifier = identifier.trim().to_string();
                if identifier.is_empty() {
                    return Err(CredentialError::EmptyIdentifier);
                }
                if secret.is_empty() {
                    return Err(CredentialError::EmptySecret);
                }
                Ok(Credentials::Password { identifier, secret })
            }
            other => Ok(other),
        }
    }

    /// Composed display name for the SSO variant ("Given Family")
    pub fn sso_display_name(&self) -> Option<String> {
        match self {
            Credentials::PlatformSso {
                given_name,
                family_name,
                ..
            } => Some(format!("{} {}", given_name, family_name)),
            _ => None,
        }
    }

    /// Fallback username for the SSO variant: the email's local part
    pub fn sso_fallback_username(&self) -> Option<String> {
        match self {
            Credentials::PlatformSso { email, .. } => Some(
                email
                    .split('@')
                    .next()
                    .unwrap_or(email.as_str())
                    .to_string(),
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_identifier_is_trimmed() {
        let credentials = Credentials::Password {
            identifier: " alice@example.com ".to_string(),
            secret: "hunter2".to_string(),
        };

        let normalized = credentials.normalized().unwrap();
        assert_eq!(
            normalized,
            Credentials::Password {
                identifier: "alice@example.com".to_string(),
                secret: "hunter2".to_string(),
            }
        );
    }

    #[test]
    fn test_whitespace_only_identifier_rejected() {
        let credentials = Credentials::Password {
            identifier: "   ".to_string(),
            secret: "hunter2".to_string(),
        };

        assert_eq!(
            credentials.normalized(),
            Err(CredentialError::EmptyIdentifier)
        );
    }

    #[test]
    fn test_empty_secret_rejected() {
        let credentials = Credentials::Password {
            identifier: "alice".to_string(),
            secret: String::new(),
        };

        assert_eq!(credentials.normalized(), Err(CredentialError::EmptySecret));
    }

    #[test]
    fn test_secret_is_not_trimmed() {
        // Passwords may legitimately start or end with whitespace
        let credentials = Credentials::Password {
            identifier: "alice".to_string(),
            secret: " hunter2 ".to_string(),
        };

        let normalized = credentials.normalized().unwrap();
        assert!(matches!(
            normalized,
            Credentials::Password { secret, .. } if secret == " hunter2 "
        ));
    }

    #[test]
    fn test_social_passes_through() {
        let credentials = Credentials::Social {
            provider: SocialProvider::Facebook,
            token: "fb_token".to_string(),
        };
        assert_eq!(credentials.clone().normalized().unwrap(), credentials);
    }

    #[test]
    fn test_sso_display_name_composition() {
        let credentials = Credentials::PlatformSso {
            email: "bob@example.com".to_string(),
            given_name: "Bob".to_string(),
            family_name: "Lee".to_string(),
        };

        assert_eq!(credentials.sso_display_name().as_deref(), Some("Bob Lee"));
        assert_eq!(credentials.sso_fallback_username().as_deref(), Some("bob"));
    }

    #[test]
    fn test_sso_helpers_absent_for_other_variants() {
        let credentials = Credentials::Password {
            identifier: "alice".to_string(),
            secret: "hunter2".to_string(),
        };
        assert!(credentials.sso_display_name().is_none());
        assert!(credentials.sso_fallback_username().is_none());
    }

    #[test]
    fn test_social_provider_display() {
        assert_eq!(SocialProvider::Facebook.to_string(), "facebook");
        assert_eq!(SocialProvider::Google.to_string(), "google");
    }
}
