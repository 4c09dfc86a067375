//! Environment-driven configuration.

use std::net::SocketAddr;

use anyhow::Context;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

/// Runtime settings for the service binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket to listen on (`USERLOAD_ADDR`).
    pub addr: SocketAddr,
    /// SQLite URL (`DATABASE_URL`). The default keeps everything in memory so
    /// the demo runs without setup; records vanish on shutdown.
    pub database_url: String,
}

impl Config {
    /// Read settings from the environment, falling back to the defaults.
    ///
    /// # Errors
    /// Returns an error if `USERLOAD_ADDR` is set but not a valid socket
    /// address.
    pub fn from_env() -> anyhow::Result<Self> {
        let addr = std::env::var("USERLOAD_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid USERLOAD_ADDR {addr:?}"))?;
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        Ok(Self { addr, database_url })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}
