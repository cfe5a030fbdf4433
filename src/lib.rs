//! Random User API - randomuser.me behind a fixed three-field schema
//!
//! Two endpoints fetch users from the upstream random user API, reshape
//! each record into `{name, email, age}`, validate the fields and return
//! them as JSON.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User records, payload reshaping and field validation
//! - **services**: Fetch-transform-validate use cases
//! - **infra**: Upstream HTTP client
//! - **api**: HTTP handlers and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{CanonicalUserRecord, FieldErrors, ResultCount, ValidatedUserRecord};
pub use errors::{AppError, AppResult};
