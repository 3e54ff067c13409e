//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings read by `main` before the HTTP server starts.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
}
