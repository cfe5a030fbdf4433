//! API layer - HTTP handlers and routes
//!
//! This module contains all HTTP-related concerns:
//! - Request handlers
//! - Route definitions and OpenAPI documentation
//! - Shared application state

pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
