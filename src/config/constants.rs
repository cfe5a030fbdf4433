//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Upstream (randomuser.me)
// =============================================================================

/// Default base URL of the random user API
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://randomuser.me/api/";

/// Default nationality filter sent as `nat`
pub const DEFAULT_UPSTREAM_NATIONALITY: &str = "us";

/// Fields requested from the upstream via `inc`
pub const UPSTREAM_INCLUDED_FIELDS: &str = "name,email,dob";

/// User-Agent header sent on outbound requests
pub const UPSTREAM_USER_AGENT: &str = concat!("random-user-api/", env!("CARGO_PKG_VERSION"));

/// Number of users returned by the multi-user endpoint
pub const BATCH_USER_COUNT: u8 = 5;

/// Number of users returned by the single-user endpoint
pub const SINGLE_USER_COUNT: u8 = 1;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;
