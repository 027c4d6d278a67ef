//! Commerce Backend Client
//!
//! This crate provides the typed async HTTP client for the remote commerce
//! backend: the login endpoints (password, social token, platform SSO), the
//! customer directory lookup, and error classification shared by all of them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod client;
pub mod customers;

pub use auth::{PasswordLoginResponse, ResponseEnvelope, SocialLoginResponse, SsoLoginResponse};
pub use client::{ApiClient, ApiClientConfig, ApiError};
pub use customers::Customer;
