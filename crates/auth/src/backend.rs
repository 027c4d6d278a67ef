//! Production collaborator implementations over the commerce client
//!
//! The HTTP knowledge lives in `commerce-client`; these impls only bind the
//! client to the manager's seams.

use crate::providers::{CredentialBackend, CustomerDirectory};
use async_trait::async_trait;
use commerce_client::{
    ApiClient, ApiError, Customer, PasswordLoginResponse, SocialLoginResponse, SsoLoginResponse,
};

#[async_trait]
impl CredentialBackend for ApiClient {
    async fn login_password(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<Option<PasswordLoginResponse>, ApiError> {
        ApiClient::login_password(self, identifier, secret).await
    }

    async fn login_social(&self, token: &str) -> Result<Option<SocialLoginResponse>, ApiError> {
        ApiClient::login_social(self, token).await
    }

    async fn login_sso(
        &self,
        email: &str,
        display_name: &str,
        fallback_username: &str,
    ) -> Result<Option<SsoLoginResponse>, ApiError> {
        ApiClient::login_sso(self, email, display_name, fallback_username).await
    }
}

#[async_trait]
impl CustomerDirectory for ApiClient {
    async fn fetch_customer_by_id(&self, id: u64) -> Result<Option<Customer>, ApiError> {
        ApiClient::fetch_customer_by_id(self, id).await
    }
}
