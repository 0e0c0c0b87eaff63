//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use sleepease::domain::AdminSecret;
use sleepease::inbound::http::session_config::SessionSettings;
use sleepease::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) admin_secret: Option<AdminSecret>,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration backed by the in-memory store.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        Self {
            session,
            bind_addr,
            admin_secret: None,
            db_pool: None,
        }
    }

    /// Attach a database connection pool; every persistence port then uses
    /// the Diesel adapters.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Enable the admin export with `secret`.
    #[must_use]
    pub fn with_admin_secret(mut self, secret: Option<AdminSecret>) -> Self {
        self.admin_secret = secret;
        self
    }
}
