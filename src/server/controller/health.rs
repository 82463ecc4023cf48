use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, HealthDto},
    server::{error::AppError, state::AppState},
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness check.
///
/// Verifies the database connection answers before reporting healthy.
///
/// # Returns
/// - `200 OK` - Service and database are reachable
/// - `500 Internal Server Error` - Database is unreachable
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is healthy", body = HealthDto),
        (status = 500, description = "Database unreachable", body = ErrorDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.db.ping().await?;

    Ok((
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
        }),
    ))
}
