//! Application state for the storefront app
//!
//! This crate provides the device-side collaborators the session manager is
//! wired with at startup: a file-backed session store and a network
//! reachability flag the platform layer updates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod connectivity;
pub mod session_store;

pub use connectivity::NetworkStatus;
pub use session_store::{PersistentSessionStore, StoreError};
