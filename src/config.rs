use std::env;
use std::path::PathBuf;

use tokio::net::TcpListener;
use tracing::warn;

use crate::error::ConfigError;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl AppConfig {
    /// Reads `HOST`, `PORT` and `STATIC_DIR`; call `dotenvy::dotenv()` first
    /// to pick up a local `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        Ok(Self {
            host,
            port,
            static_dir,
        })
    }

    /// Next port up, tried when the configured one is taken.
    pub fn fallback_port(&self) -> Result<u16, ConfigError> {
        self.port
            .checked_add(1)
            .ok_or(ConfigError::NoFallbackPort(self.port))
    }

    /// Binds `HOST:PORT`, retrying once on the next port. `HOST` may be a
    /// hostname.
    pub async fn bind_listener(&self) -> Result<TcpListener, ConfigError> {
        let err = match TcpListener::bind((self.host.as_str(), self.port)).await {
            Ok(listener) => return Ok(listener),
            Err(e) => e,
        };

        let fallback = self.fallback_port()?;
        warn!(
            host = %self.host,
            port = self.port,
            fallback,
            error = %err,
            "bind failed, trying fallback port"
        );
        TcpListener::bind((self.host.as_str(), fallback))
            .await
            .map_err(|source| ConfigError::Bind {
                target: format!("{}:{}", self.host, fallback),
                source,
            })
    }
}
