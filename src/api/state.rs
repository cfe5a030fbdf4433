//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::RandomUserClient;
use crate::services::{UserFeed, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Random user service
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create application state backed by the configured upstream API.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let client = Arc::new(RandomUserClient::from_config(config)?);
        Ok(Self::new(Arc::new(UserFeed::new(client))))
    }

    /// Create new application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }
}
