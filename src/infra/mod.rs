//! Infrastructure layer - External systems integration
//!
//! Holds the outbound HTTP client for the random user API.

pub mod upstream;

pub use upstream::{RandomUserClient, UserSource};

#[cfg(test)]
pub use upstream::MockUserSource;
