//! HTTP server configuration object.

use std::net::SocketAddr;

use xp_tracker::outbound::persistence::DbPool;

/// Everything the server needs besides health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a configuration serving `db_pool` on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self { bind_addr, db_pool }
    }
}
