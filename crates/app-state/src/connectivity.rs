//! Network reachability state
//!
//! The platform layer pushes reachability changes into [`NetworkStatus`];
//! the session manager reads it synchronously before each login attempt.

use auth::Connectivity;
use parking_lot::RwLock;
use tracing::debug;

/// Shared online/offline flag
pub struct NetworkStatus {
    online: RwLock<bool>,
}

impl NetworkStatus {
    /// Create with an initial reachability state
    pub fn new(online: bool) -> Self {
        Self {
            online: RwLock::new(online),
        }
    }

    /// Record a reachability change
    pub fn set_online(&self, online: bool) {
        let mut current = self.online.write();
        if *current != online {
            debug!(online, "network reachability changed");
            *current = online;
        }
    }

    /// Whether the device is currently online
    pub fn is_online(&self) -> bool {
        *self.online.read()
    }
}

impl Default for NetworkStatus {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Connectivity for NetworkStatus {
    fn is_connected(&self) -> bool {
        self.is_online()
    }
}
