//! Application configuration module
//!
//! Handles environment variables (server binding, upstream endpoint) and
//! application-wide constants.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
