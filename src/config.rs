//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SHOP_DATABASE_URL` - SQLite URL (falls back to `DATABASE_URL`, then
//!   `sqlite://shop.db?mode=rwc`)
//! - `SHOP_HOST` - Bind address (default: 127.0.0.1)
//! - `SHOP_PORT` - Listen port (default: 1323)
//! - `SHOP_MAX_CONNECTIONS` - Pool size for file-backed stores (default: 5)
//! - `SHOP_NOT_FOUND_POLICY` - `legacy` or `strict` (default: legacy)
//! - `SHOP_ENABLE_ECHO` - Mount the raw-echo diagnostic endpoint (default: false)

use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

use crate::lookup::NotFoundPolicy;
use crate::store::IN_MEMORY_URL;

const DEFAULT_DATABASE_URL: &str = "sqlite://shop.db?mode=rwc";
const DEFAULT_PORT: u16 = 1323;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Service configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// SQLite connection URL
    pub database_url: String,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Upper bound on pooled connections
    pub max_connections: u32,
    /// How absent or malformed identifiers are answered
    pub not_found_policy: NotFoundPolicy,
    /// Whether `POST /test` echoes request bodies
    pub echo_endpoint: bool,
}

/// Private in-memory store with the legacy policy; what the tests run against.
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: IN_MEMORY_URL.to_string(),
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            not_found_policy: NotFoundPolicy::default(),
            echo_endpoint: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration by reading each variable through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("SHOP_DATABASE_URL")
            .or_else(|| lookup("DATABASE_URL"))
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        Ok(Self {
            database_url,
            host: parse_or(&lookup, "SHOP_HOST", IpAddr::V4(Ipv4Addr::LOCALHOST))?,
            port: parse_or(&lookup, "SHOP_PORT", DEFAULT_PORT)?,
            max_connections: parse_or(&lookup, "SHOP_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            not_found_policy: parse_or(&lookup, "SHOP_NOT_FOUND_POLICY", NotFoundPolicy::Legacy)?,
            echo_endpoint: parse_flag(&lookup, "SHOP_ENABLE_ECHO")?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}

fn parse_flag<F>(lookup: &F, key: &str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(false);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got `{other}`"),
        )),
    }
}
