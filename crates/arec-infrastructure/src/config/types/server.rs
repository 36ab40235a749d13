//! HTTP server configuration

use serde::{Deserialize, Serialize};

use crate::constants::{SERVER_DEFAULT_HOST, SERVER_DEFAULT_PORT};

/// Bind address and CORS for `arec serve`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Send permissive CORS headers
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: SERVER_DEFAULT_HOST.to_string(),
            port: SERVER_DEFAULT_PORT,
            enable_cors: true,
        }
    }
}
