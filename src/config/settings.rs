//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_UPSTREAM_BASE_URL,
    DEFAULT_UPSTREAM_NATIONALITY,
};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the random user API (query string is appended per request)
    pub upstream_base_url: String,
    /// Nationality filter sent upstream
    pub upstream_nationality: String,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string()),
            upstream_nationality: env::var("UPSTREAM_NATIONALITY")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_NATIONALITY.to_string()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            upstream_nationality: DEFAULT_UPSTREAM_NATIONALITY.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}
