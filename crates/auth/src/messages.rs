//! User-facing failure reasons
//!
//! One module so the three login variants cannot drift apart in how they
//! report the same condition. The strings are message keys; the UI layer
//! localizes them.

/// Backend unreachable, timed out, or answered with nothing/garbage
pub const DATA_ERROR: &str = "data-error";

/// Backend answered successfully but without a usable user id
pub const CANNOT_LOGIN: &str = "cannot-login";

/// Identifier or secret empty after trimming
pub const EMPTY_CREDENTIALS: &str = "empty-credentials";

/// Platform SSO completed without disclosing an email address
pub const SSO_EMAIL_MISSING: &str = "sso-email-missing";
