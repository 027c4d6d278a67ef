//! HTTP client for the commerce backend
//!
//! This module implements the low-level request/response plumbing used by the
//! login and customer endpoints: client configuration, error classification,
//! and JSON body handling.

use reqwest::{Client as ReqwestClient, Response as ReqwestResponse};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Backend API error with HTTP status, code, and message
///
/// This represents errors surfaced by the commerce backend, covering both
/// transport failures and application-level errors returned in the body.
///
/// # Examples
/// ```
/// use commerce_client::ApiError;
///
/// let error = ApiError::new(404, "NotFound", "Customer not found");
/// assert_eq!(error.status(), 404);
/// assert!(!error.is_network_error());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code (0 for transport failures)
    status: u16,
    /// Error code (e.g., "InvalidRequest", "NotFound")
    code: String,
    /// Human-readable error message
    message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Get the HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Get the error code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this error is a network-level failure
    ///
    /// Status 0 is used for transport errors (unreachable host, timeout) and
    /// unparseable payloads; the rest are the gateway/availability statuses
    /// a flaky connection produces.
    pub fn is_network_error(&self) -> bool {
        matches!(
            self.status,
            0 | 1 | 408 | 425 | 429 | 500 | 502 | 503 | 504 | 522 | 524
        )
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "API error {}: {} - {}",
            self.status, self.code, self.message
        )
    }
}

impl std::error::Error for ApiError {}

/// Standard backend error body format
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Configuration for the backend API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base backend URL (e.g., "https://shop.example.com")
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Custom headers to include in all requests
    pub default_headers: HashMap<String, String>,
}

impl ApiClientConfig {
    /// Create a new config with a backend base URL
    ///
    /// The base URL is required; timeout and user agent start from sensible
    /// defaults and can be overridden with the builder methods.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            user_agent: format!("Storefront-App/{}", env!("CARGO_PKG_VERSION")),
            default_headers: HashMap::new(),
        }
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a default header
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }
}

/// Async HTTP client for the commerce backend
///
/// The client exposes thin `get`/`post` helpers; the typed endpoints live in
/// the [`auth`](crate::auth) and [`customers`](crate::customers) modules.
/// A `200` with an empty or `null` body resolves to `Ok(None)`, matching the
/// backend's habit of answering with nothing at all.
///
/// # Examples
/// ```no_run
/// use commerce_client::{ApiClient, ApiClientConfig};
///
/// async fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ApiClientConfig::new("https://shop.example.com");
///     let client = ApiClient::new(config);
///
///     let customer = client.fetch_customer_by_id(42).await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// HTTP client
    client: ReqwestClient,
    /// Configuration
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: ApiClientConfig) -> Self {
        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Make a GET request
    ///
    /// `params` are appended as query parameters.
    pub async fn get<T>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<T>, ApiError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = self.url(path);
        let mut req = self.client.get(&url);

        for (key, value) in params {
            req = req.query(&[(key, value)]);
        }
        for (key, value) in &self.config.default_headers {
            req = req.header(key, value);
        }

        let response = req
            .send()
            .await
            .map_err(|e| ApiError::new(0, "NetworkError", format!("Request failed: {}", e)))?;

        self.parse_response(response).await
    }

    /// Make a POST request with a JSON body
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, ApiError>
    where
        B: Serialize,
        T: for<'de> Deserialize<'de>,
    {
        let url = self.url(path);
        let mut req = self.client.post(&url).json(body);

        for (key, value) in &self.config.default_headers {
            req = req.header(key, value);
        }

        let response = req
            .send()
            .await
            .map_err(|e| ApiError::new(0, "NetworkError", format!("Request failed: {}", e)))?;

        self.parse_response(response).await
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Parse a reqwest response into an optional typed payload
    async fn parse_response<T>(&self, response: ReqwestResponse) -> Result<Option<T>, ApiError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_default();

            // Try to parse the backend's {error, message} body
            if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&error_body) {
                if body.error.is_some() || body.message.is_some() {
                    let code = body.error.unwrap_or_else(|| "Unknown".to_string());
                    let message = body.message.unwrap_or_else(|| code.clone());
                    return Err(ApiError::new(status, code, message));
                }
            }
            return Err(ApiError::new(
                status,
                "Unknown",
                format!("HTTP {}: {}", status, error_body),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::new(0, "ParseError", format!("Failed to read response: {}", e)))?;

        // The backend answers some calls with an empty body or a bare null.
        if body.trim().is_empty() || body.trim() == "null" {
            return Ok(None);
        }

        let data: T = serde_json::from_str(&body)
            .map_err(|e| ApiError::new(0, "ParseError", format!("Failed to parse JSON: {}", e)))?;

        Ok(Some(data))
    }

    /// Get the client configuration
    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// Get the backend base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}
