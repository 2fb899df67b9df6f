//! HTTP server configuration object and helpers.

use actix_web::cookie::{Key, SameSite};
use hms_backend::domain::BootstrapAdmin;
use hms_backend::outbound::persistence::DbPool;
use std::net::SocketAddr;

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) bootstrap_admin: BootstrapAdmin,
}

impl ServerConfig {
    /// Construct a server configuration from session settings, socket
    /// binding, and the persistence dependencies every service requires.
    #[must_use]
    pub fn new(
        key: Key,
        cookie_secure: bool,
        same_site: SameSite,
        bind_addr: SocketAddr,
        db_pool: DbPool,
        bootstrap_admin: BootstrapAdmin,
    ) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool,
            bootstrap_admin,
        }
    }
}
