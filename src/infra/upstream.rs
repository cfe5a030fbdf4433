//! Random user API client.
//!
//! Owns transport details only: request building, status checks and
//! reading the raw body. Reshaping the payload happens in the domain layer.

use async_trait::async_trait;
use reqwest::{header, Client};

use crate::config::{Config, UPSTREAM_INCLUDED_FIELDS, UPSTREAM_USER_AGENT};
use crate::domain::ResultCount;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Source of raw random-user payloads.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch `count` users and return the undecoded JSON body.
    ///
    /// Transport failures and non-2xx statuses map to
    /// [`AppError::UpstreamUnavailable`]. No retries.
    async fn fetch(&self, count: ResultCount) -> AppResult<String>;
}

/// Reqwest-backed client for randomuser.me (or a compatible endpoint).
#[derive(Debug, Clone)]
pub struct RandomUserClient {
    http: Client,
    base_url: String,
    nationality: String,
}

impl RandomUserClient {
    /// Build a client against `base_url`, filtering users by `nationality`.
    pub fn new(base_url: impl Into<String>, nationality: impl Into<String>) -> AppResult<Self> {
        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .user_agent(UPSTREAM_USER_AGENT)
            .default_headers(default_headers)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            nationality: nationality.into(),
        })
    }

    /// Build a client from application configuration.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(&config.upstream_base_url, &config.upstream_nationality)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl UserSource for RandomUserClient {
    async fn fetch(&self, count: ResultCount) -> AppResult<String> {
        let results = count.to_string();
        tracing::debug!(url = %self.base_url, results = %results, "Requesting random users");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("results", results.as_str()),
                ("inc", UPSTREAM_INCLUDED_FIELDS),
                ("nat", self.nationality.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::upstream(e.to_string()))?;

        let response = response
            .error_for_status()
            .map_err(|e| AppError::upstream(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| AppError::upstream(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_uses_configured_base_url() {
        let config = Config {
            upstream_base_url: "http://127.0.0.1:9/api/".to_string(),
            ..Config::default()
        };

        let client = RandomUserClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9/api/");
    }

    #[tokio::test]
    async fn test_connection_failure_is_upstream_unavailable() {
        // Nothing listens on the discard port locally.
        let client = RandomUserClient::new("http://127.0.0.1:9/api/", "us").unwrap();

        let result = client.fetch(ResultCount::Single).await;
        assert!(matches!(result, Err(AppError::UpstreamUnavailable(_))));
    }
}
