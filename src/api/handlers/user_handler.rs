//! Random user handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::domain::{FieldErrors, ValidatedUserRecord};
use crate::errors::AppResult;
use crate::types::ErrorResponse;

/// Create random user routes.
///
/// Both paths are served with and without the trailing slash.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/random-users", get(random_users))
        .route("/random-users/", get(random_users))
        .route("/single-user", get(single_user))
        .route("/single-user/", get(single_user))
}

/// Fetch five random users
#[utoipa::path(
    get,
    path = "/random-users/",
    tag = "Users",
    responses(
        (status = 200, description = "Five validated users in upstream order", body = Vec<ValidatedUserRecord>),
        (status = 400, description = "An upstream user failed validation", body = FieldErrors),
        (status = 404, description = "Upstream returned no users", body = ErrorResponse),
        (status = 500, description = "Upstream unavailable or returned malformed data", body = ErrorResponse)
    )
)]
pub async fn random_users(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ValidatedUserRecord>>> {
    let users = state.user_service.random_users().await?;
    Ok(Json(users))
}

/// Fetch one random user
#[utoipa::path(
    get,
    path = "/single-user/",
    tag = "Users",
    responses(
        (status = 200, description = "A single validated user", body = ValidatedUserRecord),
        (status = 400, description = "The upstream user failed validation", body = FieldErrors),
        (status = 404, description = "Upstream returned no users", body = ErrorResponse),
        (status = 500, description = "Upstream unavailable or returned malformed data", body = ErrorResponse)
    )
)]
pub async fn single_user(State(state): State<AppState>) -> AppResult<Json<ValidatedUserRecord>> {
    let user = state.user_service.single_user().await?;
    Ok(Json(user))
}
