//! Process settings loaded via OrthoConfig.
//!
//! Values come from `SLEEPEASE_*` environment variables, an optional
//! configuration file, and command-line flags. Session and admin secrets are
//! read separately from secret files; see
//! [`crate::inbound::http::session_config`] and
//! [`crate::inbound::http::admin_config`].

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Port bound when no address is configured.
pub const DEFAULT_PORT: u16 = 8080;
/// Connection pool size when none is configured.
pub const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SLEEPEASE")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL connection URL. Without one the server keeps all data in
    /// process memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl AppSettings {
    /// Configured listen address, defaulting to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(SocketAddr::V4(SocketAddrV4::new(
            Ipv4Addr::UNSPECIFIED,
            DEFAULT_PORT,
        )))
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Configured pool size, defaulting to [`DEFAULT_POOL_MAX_SIZE`].
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }
}
