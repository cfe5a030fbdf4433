//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::api::routes;
use crate::domain::{FieldErrors, ValidatedUserRecord};
use crate::types::{ErrorResponse, HealthResponse};

/// OpenAPI documentation for the Random User API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Random User API",
        version = "0.1.0",
        description = "Random users from randomuser.me, reshaped to name, email and age",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::random_users,
        user_handler::single_user,
        routes::health,
    ),
    components(
        schemas(
            ValidatedUserRecord,
            FieldErrors,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "Random user retrieval"),
        (name = "Health", description = "Service liveness")
    )
)]
pub struct ApiDoc;
