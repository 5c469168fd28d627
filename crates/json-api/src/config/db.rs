//! Database Config

use std::time::Duration;

use clap::Args;

use dairycart_app::database::DatabaseSettings;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 10_u32)]
    pub database_max_connections: u32,

    /// Seconds to wait for a pooled connection
    #[arg(long, env = "DATABASE_ACQUIRE_TIMEOUT_SECS", default_value_t = 5_u64)]
    pub database_acquire_timeout_secs: u64,

    /// Milliseconds any single statement may run inside a request transaction
    #[arg(long, env = "DATABASE_STATEMENT_TIMEOUT_MS", default_value_t = 5_000_u64)]
    pub database_statement_timeout_ms: u64,
}

impl DatabaseConfig {
    /// Pool and transaction limits for the app context.
    #[must_use]
    pub fn settings(&self) -> DatabaseSettings {
        DatabaseSettings {
            url: self.database_url.clone(),
            max_connections: self.database_max_connections,
            acquire_timeout: Duration::from_secs(self.database_acquire_timeout_secs),
            statement_timeout: Duration::from_millis(self.database_statement_timeout_ms),
        }
    }
}
