//! Configuration management for the Sustainable Farming Advisor
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FARM_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Reference dataset locations
    pub datasets: DatasetConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    pub path: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    /// Path to the farmer-history CSV
    pub farmer_history: String,

    /// Path to the market-history CSV
    pub market_history: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FARM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.path", "farming.db")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("datasets.farmer_history", "farmer_advisor_dataset.csv")?
            .set_default("datasets.market_history", "market_researcher_dataset.csv")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FARM_ prefix)
            .add_source(
                Environment::with_prefix("FARM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl ServerConfig {
    /// Socket address to bind, combining the configured host and port
    pub fn bind_addr(&self) -> Result<std::net::SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_uses_the_configured_host_and_port() {
        let server = ServerConfig {
            host: "127.0.0.1".into(),
            port: 9001,
        };
        assert_eq!(server.bind_addr().unwrap().to_string(), "127.0.0.1:9001");

        let default = ServerConfig::default();
        assert_eq!(default.bind_addr().unwrap().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn bad_host_is_a_parse_error() {
        let server = ServerConfig {
            host: "not a host".into(),
            port: 9001,
        };
        assert!(server.bind_addr().is_err());
    }
}
