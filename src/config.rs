use std::net::SocketAddr;

use crate::constants::{DEFAULT_BIND_ADDR, DEFAULT_DATABASE_URL};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the upstream open interest service. The fixed placeholder
    /// provider is used when unset.
    pub base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| Error::Config(format!("BIND_ADDR is invalid: {}", e)))?;

        let provider_url = std::env::var("OI_PROVIDER_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        if let Some(url) = &provider_url {
            url::Url::parse(url)
                .map_err(|e| Error::Config(format!("OI_PROVIDER_URL is invalid: {}", e)))?;
        }

        Ok(Config {
            database: DatabaseConfig { url: database_url },
            server: ServerConfig { bind_addr },
            provider: ProviderConfig {
                base_url: provider_url,
            },
        })
    }
}
