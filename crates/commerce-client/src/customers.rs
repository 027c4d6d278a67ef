//! Customer directory lookup
//!
//! After any successful login the backend only echoes an id; the full
//! customer record comes from a secondary lookup against this endpoint.

use crate::client::{ApiClient, ApiError};
use serde::{Deserialize, Serialize};

/// A customer record as returned by the directory endpoint
///
/// Only `id` is guaranteed; the backend omits fields freely, so everything
/// else defaults. The session layer may fill `username` and `avatar_url`
/// from login-time data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Backend customer id
    pub id: u64,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Login username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// First name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar / profile picture URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Customer {
    /// Create a bare customer record with just an id
    pub fn new(id: u64) -> Self {
        Self {
            id,
            email: None,
            username: None,
            first_name: None,
            last_name: None,
            name: None,
            avatar_url: None,
        }
    }

    /// Best display name for greeting the customer
    ///
    /// Prefers "Last First" when both parts exist, then the plain name.
    pub fn display_name(&self) -> Option<String> {
        match (&self.last_name, &self.first_name) {
            (Some(last), Some(first)) => Some(format!("{} {}", last, first)),
            _ => self.name.clone(),
        }
    }
}

impl ApiClient {
    /// Fetch the full customer record by backend id
    pub async fn fetch_customer_by_id(&self, id: u64) -> Result<Option<Customer>, ApiError> {
        self.get(&format!("api/customers/{}", id), &[]).await
    }
}
