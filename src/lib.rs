//! Storefront app bootstrap
//!
//! Wires the commerce client, session manager, and device-side state
//! together at startup and restores any persisted session.

#![warn(missing_docs)]
#![warn(clippy::all)]

use anyhow::Context;
use app_state::{NetworkStatus, PersistentSessionStore};
use auth::{SessionManager, SessionStore};
use commerce_client::{ApiClient, ApiClientConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// The wired application: the session manager plus the collaborators the
/// caller keeps interacting with after startup
pub struct App {
    /// The login state machine
    pub manager: SessionManager,
    /// File-backed session store, already initialized from disk
    pub store: Arc<PersistentSessionStore>,
    /// Reachability flag the platform layer updates
    pub network: Arc<NetworkStatus>,
}

/// Initialize tracing from `RUST_LOG`, defaulting to `info`
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_default();

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Build the application graph and restore the persisted session
pub async fn bootstrap(base_url: &str, session_path: impl Into<PathBuf>) -> anyhow::Result<App> {
    let client = Arc::new(ApiClient::new(ApiClientConfig::new(base_url)));
    let network = Arc::new(NetworkStatus::default());

    let store = Arc::new(PersistentSessionStore::new(session_path));
    store.init().await.context("loading persisted session")?;

    let manager = SessionManager::new(client.clone(), client, network.clone());
    info!(restored = store.current().await.is_some(), "app bootstrapped");

    Ok(App {
        manager,
        store,
        network,
    })
}
