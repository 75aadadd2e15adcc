//! Server configuration from the environment.

use std::env;

/// Environment variable naming the listen port.
pub const PORT_VAR: &str = "PORT";
/// Environment variable holding the store connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Environment variable naming the target database.
pub const DATABASE_NAME_VAR: &str = "DATABASE_NAME";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    pub host: String,
    /// Port to bind to (default: 8000)
    pub port: u16,
    /// Store connection string, if configured
    pub database_url: Option<String>,
    /// Target database name, if configured
    pub database_name: Option<String>,
}

impl ServerConfig {
    /// Reads configuration from the environment.
    ///
    /// A missing or unparsable `PORT` falls back to the default. Missing
    /// database variables leave the store unconfigured; they never fail
    /// the process.
    pub fn from_env() -> Self {
        let port = env::var(PORT_VAR)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            host: DEFAULT_HOST.to_string(),
            port,
            database_url: env::var(DATABASE_URL_VAR).ok(),
            database_name: env::var(DATABASE_NAME_VAR).ok(),
        }
    }

    /// Create a config with a specific port and no database configured.
    pub fn with_port(port: u16) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port,
            database_url: None,
            database_name: None,
        }
    }

    /// Get the socket address string.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_port(DEFAULT_PORT)
    }
}
