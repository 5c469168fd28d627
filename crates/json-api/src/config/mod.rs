//! Server configuration module

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Dairycart JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "dairycart-json", about = "Dairycart JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Catalog database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_when_only_the_database_url_is_given() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "dairycart-json",
            "--database-url",
            "postgres://localhost/dairycart",
        ])?;

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);

        let settings = config.database.settings();

        assert_eq!(settings.url, "postgres://localhost/dairycart");
        assert_eq!(settings.max_connections, 10);
        assert_eq!(settings.acquire_timeout, Duration::from_secs(5));
        assert_eq!(settings.statement_timeout, Duration::from_millis(5_000));

        Ok(())
    }

    #[test]
    fn database_limits_can_be_overridden() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "dairycart-json",
            "--database-url",
            "postgres://localhost/dairycart",
            "--database-max-connections",
            "4",
            "--database-statement-timeout-ms",
            "250",
        ])?;

        let settings = config.database.settings();

        assert_eq!(settings.max_connections, 4);
        assert_eq!(settings.statement_timeout, Duration::from_millis(250));

        Ok(())
    }

    #[test]
    fn listen_address_can_be_overridden() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "dairycart-json",
            "--database-url",
            "postgres://localhost/dairycart",
            "--host",
            "127.0.0.1",
            "--port",
            "4321",
        ])?;

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:4321");

        Ok(())
    }
}
