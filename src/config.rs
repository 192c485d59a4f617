//! Server configuration
//!
//! The service takes no flags or settings; this only names the fixed values
//! `main` starts with.

use std::net::SocketAddr;

/// Port the service always listens on
pub const DEFAULT_PORT: u16 = 8080;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "shopping_items=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the listener binds to (all interfaces)
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        }
    }
}
