//! User records at each stage of the response-shaping pipeline.

use serde::Serialize;
use utoipa::ToSchema;

use crate::config::{BATCH_USER_COUNT, SINGLE_USER_COUNT};

/// How many users to request from the upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCount {
    Single,
    Batch,
}

impl ResultCount {
    /// Numeric value sent as the `results` query parameter
    pub fn get(self) -> u8 {
        match self {
            ResultCount::Single => SINGLE_USER_COUNT,
            ResultCount::Batch => BATCH_USER_COUNT,
        }
    }
}

impl std::fmt::Display for ResultCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Normalized user shape produced from one upstream element.
///
/// Structurally complete but not yet checked for length or format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalUserRecord {
    pub name: String,
    pub email: String,
    pub age: String,
}

impl CanonicalUserRecord {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age: age.into(),
        }
    }
}

/// User returned to API clients.
///
/// Only obtainable through [`crate::domain::validate`], so every instance
/// satisfies the field rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidatedUserRecord {
    /// First and last name separated by a single space
    #[schema(example = "Jane Doe", max_length = 100)]
    name: String,
    /// Email address
    #[schema(example = "jane@example.com")]
    email: String,
    /// Age in years, carried as a string
    #[schema(example = "30", max_length = 100)]
    age: String,
}

impl ValidatedUserRecord {
    pub(crate) fn new(name: String, email: String, age: String) -> Self {
        Self { name, email, age }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> &str {
        &self.age
    }
}
