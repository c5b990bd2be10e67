//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_max_connections() -> u32 {
    8
}

fn default_busy_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize)]
/// Settings required to bind the HTTP server and open the database.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Upper bound of pooled SQLite connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,
}
