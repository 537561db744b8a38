//! Application configuration.
//!
//! All runtime settings are read from the environment exactly once at startup
//! into an explicit [`Config`] value, which is then passed (or cloned) into the
//! components that need it. Nothing in the application reads environment
//! variables after this point.

use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection string, e.g. `sqlite://tasks.db`.
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// Secret used to sign and verify session tokens.
    pub jwt_secret: String,
    /// How long an issued token remains valid.
    pub token_ttl: chrono::Duration,
    /// Bound on store operations: pool acquire and SQLite busy timeouts.
    pub store_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://tasks.db".to_string()),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            token_ttl: chrono::Duration::hours(
                env::var("TOKEN_TTL_HOURS")
                    .unwrap_or_else(|_| "24".to_string())
                    .parse()
                    .expect("TOKEN_TTL_HOURS must be a number"),
            ),
            store_timeout: Duration::from_secs(
                env::var("STORE_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .expect("STORE_TIMEOUT_SECS must be a number"),
            ),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
