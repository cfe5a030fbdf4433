//! User service - Fetches, reshapes and validates random users.
//!
//! Each call issues exactly one upstream request, then transforms and
//! validates the payload in memory. Any failing record fails the call.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{transform, validate, ResultCount, ValidatedUserRecord};
use crate::errors::{AppError, AppResult};
use crate::infra::UserSource;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Fetch a batch of validated users, in upstream order
    async fn random_users(&self) -> AppResult<Vec<ValidatedUserRecord>>;

    /// Fetch a single validated user
    async fn single_user(&self) -> AppResult<ValidatedUserRecord>;
}

/// Concrete implementation of UserService over a [`UserSource`].
pub struct UserFeed<S: UserSource> {
    source: Arc<S>,
}

impl<S: UserSource> UserFeed<S> {
    /// Create new user service over the given source
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    async fn load(&self, count: ResultCount) -> AppResult<Vec<ValidatedUserRecord>> {
        let body = self.source.fetch(count).await?;
        let records = transform(&body, count)?;

        records
            .iter()
            .map(|record| validate(record).map_err(AppError::from))
            .collect()
    }
}

#[async_trait]
impl<S: UserSource> UserService for UserFeed<S> {
    async fn random_users(&self) -> AppResult<Vec<ValidatedUserRecord>> {
        let users = self.load(ResultCount::Batch).await?;
        tracing::debug!("Fetched {} random users", users.len());
        Ok(users)
    }

    async fn single_user(&self) -> AppResult<ValidatedUserRecord> {
        self.load(ResultCount::Single)
            .await?
            .into_iter()
            .next()
            .ok_or(AppError::NoUserData)
    }
}
