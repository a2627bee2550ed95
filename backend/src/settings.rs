//! Service configuration loaded via OrthoConfig.
//!
//! Values come from (lowest to highest precedence) built-in defaults, an
//! optional configuration file, `XP_TRACKER_*` environment variables and
//! command-line flags. With nothing configured the service binds
//! `0.0.0.0:8080` and stores data in `./local.db`.

use std::ffi::OsString;
use std::io;
use std::net::{AddrParseError, IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_DATABASE_PATH: &str = "./local.db";
const DEFAULT_HOST: &str = "0.0.0.0";

/// Runtime settings for the HTTP service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "XP_TRACKER")]
pub struct AppSettings {
    /// SQLite database file; created on first start.
    pub database_path: Option<String>,
    /// Interface the HTTP listener binds to.
    pub host: Option<String>,
    /// TCP port the HTTP listener binds to.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
}

impl AppSettings {
    /// Return the configured database path, falling back to `./local.db`.
    pub fn database_path(&self) -> &str {
        self.database_path.as_deref().unwrap_or(DEFAULT_DATABASE_PATH)
    }

    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Socket address for the HTTP listener.
    ///
    /// # Errors
    ///
    /// Returns [`AddrParseError`] when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host().parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Load [`AppSettings`] from command-line `args`, the environment and any
/// configuration file.
///
/// # Errors
///
/// Returns an [`io::Error`] wrapping the OrthoConfig failure.
pub fn load_settings<I, T>(args: I) -> io::Result<AppSettings>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    AppSettings::load_from_iter(args)
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))
}
